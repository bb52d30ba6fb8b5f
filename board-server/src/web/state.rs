//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cache::CachedDigitrafficClient;
use crate::session::SessionController;
use crate::stations::StationCatalog;

/// Shared application state.
///
/// Contains all the services needed to handle requests. The session
/// controller is process-wide: this is a single-user board, so one
/// selection state serves the whole session.
#[derive(Clone)]
pub struct AppState {
    /// Cached live-trains client
    pub trains: Arc<CachedDigitrafficClient>,

    /// Station catalog for suggestions and resolution
    pub stations: StationCatalog,

    /// Session selection state machine
    pub session: Arc<Mutex<SessionController>>,
}

impl AppState {
    /// Create a new app state with a fresh session.
    pub fn new(trains: CachedDigitrafficClient, stations: StationCatalog) -> Self {
        Self {
            trains: Arc::new(trains),
            stations,
            session: Arc::new(Mutex::new(SessionController::new())),
        }
    }
}
