use crate::gazetteer::Gazetteer;

/// Shared, read-only router state.
pub struct AppState {
    pub gazetteer: Gazetteer,
}
