use crate::config::Config;
use crate::gateway::Gateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; flow invocations share nothing else.
#[derive(Clone)]
pub struct AppState {
    pub gateway: Gateway,
    pub config: Config,
}
