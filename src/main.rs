fn main() {
    balloon_cannons::game::run();
}
