//! Reusable UI components

pub mod badge;
pub mod placeholder;

// Widgets
pub mod news_widget;
pub mod notes_widget;
pub mod tasks_widget;
pub mod weather_widget;

// Chrome and dialogs
pub mod logs_dialog;
pub mod status_bar;
pub mod task_input_dialog;

pub use logs_dialog::LogsDialog;
pub use news_widget::NewsWidget;
pub use notes_widget::NotesWidget;
pub use status_bar::{Notification, StatusBar};
pub use task_input_dialog::TaskInputDialog;
pub use tasks_widget::TasksWidget;
pub use weather_widget::WeatherWidget;
