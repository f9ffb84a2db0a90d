//! Defines the properties of the schedule options page.

use yew::prelude::*;

use crate::api;
use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct ScheduleOptionsProps {
    /// Navigation callback owned by the app root.
    pub on_navigate: Callback<Page>,

    /// Scheduling service base URL. Defaults to the development service;
    /// endpoint paths are appended in the `api` module.
    #[prop_or_else(default_base_url)]
    pub base_url: String,
}

fn default_base_url() -> String {
    api::DEFAULT_BASE_URL.to_string()
}
