//! Core UI functionality for dashterm.
//!
//! This module contains the fundamental building blocks for the user interface:
//! actions, the component abstraction, terminal event polling, and the
//! background job manager that carries every network request.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and widget identifiers
//! - [`component`] - Base component trait and render context
//! - [`event_handler`] - Keyboard and resize event polling
//! - [`task_manager`] - Background jobs reporting back through actions
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into actions
//! 2. **Actions** describe every state transition, user- or network-initiated
//! 3. **Jobs** run requests on the runtime via the [`TaskManager`] and answer with actions
//!
//! Only the UI loop ever mutates state; jobs only send actions.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, WidgetKind};
pub use component::{Component, RenderContext};
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{JobId, TaskManager};
