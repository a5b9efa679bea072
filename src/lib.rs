//! Balloon cannons: two cannons volley balloons at each other until they pop.
//!
//! Integration tests in `tests/` are compiled as separate crates,
//! so the whole game is exposed as a library surface they can import.

pub mod game;
pub mod common;
pub mod plugins;
