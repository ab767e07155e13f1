//! dashterm - a terminal dashboard for a personal backend
//!
//! This library renders four widgets (tasks, notes, weather and news) fed by
//! a small HTTP backend. Tasks can be completed, deleted and created; those
//! changes are applied optimistically and rolled back when the backend
//! rejects them.
//!
//! # Modules
//!
//! * [`api`] - Backend client and data models
//! * [`config`] - Application configuration management
//! * [`fetch`] - Fetch lifecycle shared by every widget
//! * [`store`] - Task list state and optimistic mutations
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Date helpers

/// Backend client and payload types
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Loading / ready / failed lifecycle of remote payloads
pub mod fetch;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Task list state with optimistic complete and delete
pub mod store;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling
pub mod utils;
