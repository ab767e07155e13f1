//! UI module for dashterm
//!
//! This module handles the dashboard shell, its widgets, rendering, and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;
pub mod theme;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
pub use theme::{Palette, Theme};
