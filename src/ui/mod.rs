//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It renders
//! whatever the session returns and feeds clicks back through
//! [`crate::Session::play`].

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
