//! Fetch lifecycle shared by every widget.
//!
//! A [`RemoteResource`] tracks one remote payload through the
//! [`FetchState`] lifecycle. It never performs I/O itself: [`RemoteResource::start`]
//! hands out a generation stamp, the caller issues the request, and the
//! outcome is handed back through [`RemoteResource::resolve`] together with
//! that stamp. Outcomes carrying any other stamp are discarded, which covers
//! both overlapping refreshes and responses arriving after the view is gone.

use crate::api::ApiError;

/// Monotonic stamp identifying one fetch attempt.
pub type Generation = u64;

/// Tri-state lifecycle of one fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// `Failed` renders exactly like `Loading`: only `Ready` has content.
    pub fn shows_placeholder(&self) -> bool {
        !self.is_ready()
    }
}

/// One remote payload plus the bookkeeping needed to apply only the
/// response of the current fetch.
#[derive(Debug)]
pub struct RemoteResource<T> {
    endpoint: &'static str,
    state: FetchState<T>,
    generation: Generation,
    in_flight: Option<Generation>,
    mounted: bool,
}

impl<T> RemoteResource<T> {
    pub fn new(endpoint: &'static str) -> Self {
        Self {
            endpoint,
            state: FetchState::Loading,
            generation: 0,
            in_flight: None,
            mounted: true,
        }
    }

    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn data(&self) -> Option<&T> {
        self.state.data()
    }

    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.state.data_mut()
    }

    /// Stamp of the most recent fetch (0 before the first one).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Enter `Loading` and hand out the stamp for a new request.
    ///
    /// Returns `None` while a request is outstanding (that request's result
    /// wins) or once the resource is unmounted. Any previous payload is
    /// dropped so a reload never shows stale data.
    pub fn start(&mut self) -> Option<Generation> {
        if !self.mounted {
            log::debug!("{}: start ignored, resource unmounted", self.endpoint);
            return None;
        }
        if let Some(pending) = self.in_flight {
            log::debug!("{}: start ignored, generation {} still in flight", self.endpoint, pending);
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.state = FetchState::Loading;
        Some(self.generation)
    }

    pub fn refresh(&mut self) -> Option<Generation> {
        self.start()
    }

    /// Apply the outcome of the fetch stamped `generation`.
    ///
    /// Returns `false` when the outcome is stale and was discarded.
    pub fn resolve(&mut self, generation: Generation, result: Result<T, ApiError>) -> bool {
        if !self.mounted || self.in_flight != Some(generation) {
            log::debug!(
                "{}: discarding stale response (generation {}, current {})",
                self.endpoint,
                generation,
                self.generation
            );
            return false;
        }

        self.in_flight = None;
        self.state = match result {
            Ok(data) => FetchState::Ready(data),
            Err(err) => {
                log::warn!("{}: fetch failed: {}", self.endpoint, err);
                FetchState::Failed(err)
            }
        };
        true
    }

    /// Tear the view down; every outstanding response becomes stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.in_flight = None;
        self.generation += 1;
    }
}
