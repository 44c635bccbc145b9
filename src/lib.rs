//! Grid-based Snake arcade game: headless simulation core plus a terminal
//! presentation layer built on ratatui.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
