mod list_view;
mod notify;

pub(crate) use list_view::ListView;
pub(crate) use notify::{Notifier, Severity, NOTIFICATION_TIMEOUT};

use crate::api::ApiClient;
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// The one notification slot shared by every page.
    pub notifier: Notifier,

    pub sidebar_collapsed: RwSignal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
            notifier: Notifier::new(),
            sidebar_collapsed: RwSignal::new(false),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
