//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Debug)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

/// Get the app context, or a context built from the compile-time defaults
/// when rendered outside the app shell.
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().unwrap_or_else(|| AppContext::new(AppConfig::from_env()))
}
