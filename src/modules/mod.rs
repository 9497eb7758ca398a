// Logic modules (no graphics context needed, tested headless)
pub mod geometry;
pub mod shape;
pub mod collision;
pub mod factory;
pub mod registry;
pub mod simulator;
pub mod spawner;
pub mod controls;
pub mod config;
pub mod error;
pub mod app;

// Presentation modules (need a macroquad window)
pub mod scale;
pub mod text_button;
pub mod render;
