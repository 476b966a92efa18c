//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::ui::{BaseUrl, OptionsMenu};

/// State shared by all request handlers.
///
/// Cloned per request; every field is cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub auth_service: Arc<AuthService>,
    pub base_url: BaseUrl,
    /// Menu rendered in the corner of every card.
    pub options_menu: Arc<dyn OptionsMenu>,
    pub default_page_size: u32,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        auth_service: Arc<AuthService>,
        base_url: BaseUrl,
        options_menu: Arc<dyn OptionsMenu>,
        default_page_size: u32,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            base_url,
            options_menu,
            default_page_size,
        }
    }
}
