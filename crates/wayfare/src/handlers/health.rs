use axum::extract::State;

use crate::state::AppState;

/// Liveness check; confirms the process is up and names the backend.
pub async fn ping(State(state): State<AppState>) -> String {
    format!("wayfare running ({})", state.store.backend_name())
}
