//! Fetch With Fallback
//!
//! Every data page loads the same way: one GET on mount, and any failure or
//! empty answer swaps in the bundled table for that entity type.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::context::use_app_context;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Live,
    Fallback,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready { items: Vec<T>, source: Source },
    /// Fetch failed and there was nothing to fall back to
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready { items, .. } => items,
            _ => &[],
        }
    }
}

/// Pick what a page shows once its fetch settles.
pub fn resolve<T>(label: &str, result: Result<Vec<T>, ApiError>, fallback: Vec<T>) -> LoadState<T> {
    match result {
        Ok(items) if !items.is_empty() => {
            log::debug!("{}: {} rows from backend", label, items.len());
            LoadState::Ready { items, source: Source::Live }
        }
        Ok(items) if fallback.is_empty() => LoadState::Ready { items, source: Source::Live },
        Ok(_) => {
            log::info!("{}: backend returned no rows, using bundled data", label);
            LoadState::Ready { items: fallback, source: Source::Fallback }
        }
        Err(err) => {
            log::warn!("{}: {}", label, err);
            if fallback.is_empty() {
                LoadState::Failed(err.to_string())
            } else {
                log::info!("{}: using bundled data", label);
                LoadState::Ready { items: fallback, source: Source::Fallback }
            }
        }
    }
}

/// Cleared when the owning component unmounts.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Await `fetch` and resolve it, or `None` if the owner went away first.
pub async fn load_with_fallback<T, Fut>(
    label: &str,
    fetch: Fut,
    fallback: impl FnOnce() -> Vec<T>,
    guard: &MountGuard,
) -> Option<LoadState<T>>
where
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let result = fetch.await;
    if !guard.is_mounted() {
        log::debug!("{}: response arrived after unmount, dropped", label);
        return None;
    }
    Some(resolve(label, result, fallback()))
}

/// Start the page's fetch and expose its state as a signal.
pub fn use_fallback_load<T, F, Fut>(
    label: &'static str,
    fetch: F,
    fallback: fn() -> Vec<T>,
) -> ReadSignal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce(ApiClient) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let (state, set_state) = signal(LoadState::Loading);
    let client = ApiClient::new(&use_app_context().config);
    let guard = MountGuard::new();

    on_cleanup({
        let guard = guard.clone();
        move || guard.release()
    });

    spawn_local(async move {
        if let Some(next) = load_with_fallback(label, fetch(client), fallback, &guard).await {
            set_state.set(next);
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::ready;

    fn table() -> Vec<&'static str> {
        vec!["a", "b"]
    }

    #[test]
    fn test_live_rows_win() {
        let state = resolve("t", Ok(vec!["x"]), table());
        assert_eq!(state, LoadState::Ready { items: vec!["x"], source: Source::Live });
    }

    #[test]
    fn test_rejection_uses_fallback() {
        let state = resolve("t", Err(ApiError::Unreachable), table());
        assert_eq!(state.items(), table().as_slice());
        assert!(matches!(state, LoadState::Ready { source: Source::Fallback, .. }));
    }

    #[test]
    fn test_empty_success_uses_fallback() {
        let state = resolve("t", Ok(vec![]), table());
        assert_eq!(state.items(), table().as_slice());
    }

    #[test]
    fn test_failed_only_without_fallback() {
        let state = resolve::<&str>("t", Err(ApiError::Timeout { millis: 15_000 }), vec![]);
        assert_eq!(state, LoadState::Failed("Network Error: request timed out after 15000 ms".into()));

        let empty = resolve::<&str>("t", Ok(vec![]), vec![]);
        assert_eq!(empty, LoadState::Ready { items: vec![], source: Source::Live });
    }

    #[test]
    fn test_load_while_mounted() {
        let guard = MountGuard::new();
        let state = block_on(load_with_fallback(
            "t",
            ready(Err(ApiError::Status { status: 500, message: "x".into() })),
            table,
            &guard,
        ));
        assert_eq!(state.map(|s| s.items().to_vec()), Some(table()));
    }

    #[test]
    fn test_late_response_after_unmount_is_dropped() {
        let guard = MountGuard::new();
        let observer = guard.clone();
        let fetch = async move {
            observer.release();
            Ok::<_, ApiError>(vec!["late"])
        };
        assert_eq!(block_on(load_with_fallback("t", fetch, table, &guard)), None);
        assert!(!guard.is_mounted());
    }

    #[test]
    fn test_bundled_tables_never_fail() {
        assert!(!crate::data::skills().is_empty());
        assert!(!crate::data::projects().is_empty());
        assert!(!crate::data::certifications().is_empty());
        assert!(!crate::data::awards().is_empty());

        let state = resolve("awards", Err(ApiError::Unreachable), crate::data::awards());
        assert_eq!(state.items(), crate::data::awards().as_slice());
    }
}
