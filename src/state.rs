use std::sync::Arc;

use crate::application::services::LinkService;

/// Shared application state injected into all handlers.
///
/// Besides the service (which only holds the store handle), there is no
/// in-process mutable state shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    /// Whether to trust forwarded-IP headers for rate-limit identity.
    pub behind_proxy: bool,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService>, behind_proxy: bool) -> Self {
        Self {
            link_service,
            behind_proxy,
        }
    }
}
