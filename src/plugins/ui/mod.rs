//! UI plugins.

pub mod debug_hud;
