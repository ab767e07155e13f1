use crate::api::{ApiError, Article, Event, NewTask, Task, TaskId, WeatherSnapshot};
use crate::constants::{TITLE_NEWS, TITLE_NOTES, TITLE_TASKS, TITLE_WEATHER};
use crate::fetch::Generation;
use crate::store::Mutation;

/// The four dashboard panels, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WidgetKind {
    #[default]
    Tasks,
    Notes,
    Weather,
    News,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 4] = [Self::Tasks, Self::Notes, Self::Weather, Self::News];

    pub fn title(self) -> &'static str {
        match self {
            Self::Tasks => TITLE_TASKS,
            Self::Notes => TITLE_NOTES,
            Self::Weather => TITLE_WEATHER,
            Self::News => TITLE_NEWS,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Tasks => Self::Notes,
            Self::Notes => Self::Weather,
            Self::Weather => Self::News,
            Self::News => Self::Tasks,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Tasks => Self::News,
            Self::Notes => Self::Tasks,
            Self::Weather => Self::Notes,
            Self::News => Self::Weather,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    FocusNext,
    FocusPrevious,

    // Fetching
    Refresh(WidgetKind),
    RefreshAll,
    TasksLoaded {
        generation: Generation,
        result: Result<Vec<Task>, ApiError>,
    },
    EventsLoaded {
        generation: Generation,
        result: Result<Vec<Event>, ApiError>,
    },
    WeatherLoaded {
        generation: Generation,
        result: Result<WeatherSnapshot, ApiError>,
    },
    NewsLoaded {
        generation: Generation,
        result: Result<Vec<Article>, ApiError>,
    },

    // Task operations
    CompleteTask(TaskId),
    DeleteTask(TaskId),
    CreateTask(NewTask),
    MutationFinished {
        mutation: Mutation,
        result: Result<(), ApiError>,
    },
    TaskCreated(Result<(), ApiError>),

    // UI operations
    ToggleTheme,
    ShowLogs(bool),
    ShowTaskInput(bool),
    DismissNotification,

    // App control
    Quit,
    None,
}
