//! Fetch-then-render plumbing shared by every view.
//!
//! Each mounted view owns its request state. Responses are tagged with a
//! [`RequestTicket`] and dropped unless they belong to the most recent
//! request, so a slow answer for a previous client can't overwrite the
//! current one.

use std::future::Future;
use std::rc::Rc;

use clientdesk_shared::{RequestSequence, RequestTicket};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::{ApiClient, ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ApiError>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: true,
            error: None,
        }
    }
}

impl<T: Clone> FetchState<T> {
    /// A new request is in flight; previous data is kept until it answers.
    pub fn started(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: true,
            error: None,
        }
    }

    /// Applies a response. Failures keep whatever was shown before.
    pub fn resolved(&self, result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                loading: false,
                error: None,
            },
            Err(error) => Self {
                data: self.data.clone(),
                loading: false,
                error: Some(error),
            },
        }
    }
}

/// Local edit applied to whatever data is current when it runs.
pub type DataUpdate<T> = Box<dyn FnOnce(&T) -> T>;

pub enum FetchAction<T> {
    Started,
    Resolved(ApiResult<T>),
    Update(DataUpdate<T>),
}

impl<T: Clone + 'static> Reducible for FetchState<T> {
    type Action = FetchAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Started => Rc::new(self.started()),
            FetchAction::Resolved(result) => Rc::new(self.resolved(result)),
            FetchAction::Update(update) => {
                // Nothing loaded yet means nothing to edit.
                if self.data.is_none() {
                    return self;
                }
                Rc::new(Self {
                    data: self.data.as_ref().map(update),
                    loading: self.loading,
                    error: self.error.clone(),
                })
            }
        }
    }
}

/// Unwraps one part of a combined load, logging and discarding a failure so
/// the remaining parts still render.
pub fn settle<T>(part: &'static str, result: ApiResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(part, code = ?err.code, "partial load failed: {}", err);
            None
        }
    }
}

/// Applies `result` only when `ticket` is still the latest request.
pub fn accept_if_current<T>(
    sequence: &RequestSequence,
    ticket: RequestTicket,
    result: ApiResult<T>,
) -> Option<ApiResult<T>> {
    sequence.is_current(ticket).then_some(result)
}

pub struct UseFetchHandle<T: Clone + 'static> {
    state: UseReducerHandle<FetchState<T>>,
    reload: Callback<()>,
}

impl<T: Clone + 'static> UseFetchHandle<T> {
    pub fn data(&self) -> Option<&T> {
        self.state.data.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.state.error.as_ref()
    }

    pub fn reload(&self) -> Callback<()> {
        self.reload.clone()
    }

    /// Edits the data after a local mutation (e.g. a note marked read).
    /// `update` sees the live data, including edits queued before it.
    pub fn update(&self, update: impl FnOnce(&T) -> T + 'static) {
        self.state.dispatch(FetchAction::Update(Box::new(update)));
    }
}

impl<T: Clone + 'static> Clone for UseFetchHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            reload: self.reload.clone(),
        }
    }
}

/// Fetches with `fetcher` on mount and whenever `deps` change.
#[hook]
pub fn use_fetch<T, D, F, Fut>(label: &'static str, deps: D, fetcher: F) -> UseFetchHandle<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(ApiClient, D) -> Fut + 'static,
    Fut: Future<Output = ApiResult<T>> + 'static,
{
    let api = use_api();
    let state = use_reducer(FetchState::<T>::default);
    let sequence = use_memo((), |_| RequestSequence::new());
    let generation = use_state(|| 0u32);

    {
        let state = state.clone();
        let sequence = sequence.clone();

        use_effect_with((deps, *generation), move |(deps, _)| {
            let ticket = sequence.issue();
            state.dispatch(FetchAction::Started);

            let deps = deps.clone();
            let sequence_for_task = sequence.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = fetcher(api, deps).await;
                match accept_if_current(&sequence_for_task, ticket, result) {
                    Some(result) => {
                        if let Err(err) = &result {
                            tracing::warn!(view = label, code = ?err.code, "fetch failed: {}", err);
                        }
                        state.dispatch(FetchAction::Resolved(result));
                    }
                    None => tracing::debug!(view = label, "dropping superseded response"),
                }
            });

            move || sequence.invalidate()
        });
    }

    let reload = {
        let generation = generation.clone();
        Callback::from(move |_| generation.set(generation.wrapping_add(1)))
    };

    UseFetchHandle { state, reload }
}

/// The API client provided at the app root.
#[hook]
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().unwrap_or_default()
}

#[hook]
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> ApiError {
        ApiError {
            message: "offline".to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = FetchState::<Vec<u8>>::default();

        assert!(state.loading);
        assert!(state.data.is_none());
    }

    #[test]
    fn test_failure_keeps_prior_data() {
        let loaded = FetchState::default().resolved(Ok(vec![1, 2, 3]));
        let reloading = loaded.started();
        let failed = reloading.resolved(Err(failure()));

        assert!(reloading.loading);
        assert_eq!(reloading.data, Some(vec![1, 2, 3]));
        assert!(!failed.loading);
        assert_eq!(failed.data, Some(vec![1, 2, 3]));
        assert_eq!(failed.error, Some(failure()));
    }

    #[test]
    fn test_success_clears_error() {
        let failed = FetchState::<u32>::default().resolved(Err(failure()));
        let recovered = failed.started().resolved(Ok(7));

        assert_eq!(recovered.data, Some(7));
        assert!(recovered.error.is_none());
    }

    fn loaded(data: Vec<u8>) -> Rc<FetchState<Vec<u8>>> {
        Rc::new(FetchState::default().resolved(Ok(data)))
    }

    fn set_at(index: usize, value: u8) -> FetchAction<Vec<u8>> {
        FetchAction::Update(Box::new(move |data: &Vec<u8>| {
            let mut data = data.clone();
            data[index] = value;
            data
        }))
    }

    #[test]
    fn test_queued_updates_all_survive() {
        let state = loaded(vec![0, 0, 0]);

        let state = state.reduce(set_at(0, 1)).reduce(set_at(2, 1));

        assert_eq!(state.data, Some(vec![1, 0, 1]));
    }

    #[test]
    fn test_failed_reload_keeps_local_edits() {
        let state = loaded(vec![0, 0])
            .reduce(FetchAction::Started)
            .reduce(set_at(1, 9))
            .reduce(FetchAction::Resolved(Err(failure())));

        assert_eq!(state.data, Some(vec![0, 9]));
        assert!(!state.loading);
        assert_eq!(state.error, Some(failure()));
    }

    #[test]
    fn test_update_before_load_is_ignored() {
        let state = Rc::new(FetchState::<Vec<u8>>::default()).reduce(set_at(0, 1));

        assert!(state.data.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_settle_discards_failed_part() {
        assert_eq!(settle("stats", Ok::<_, ApiError>(3)), Some(3));
        assert_eq!(settle::<u32>("alerts", Err(failure())), None);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let sequence = RequestSequence::new();
        let slow = sequence.issue();
        let fast = sequence.issue();

        assert_eq!(accept_if_current(&sequence, fast, Ok::<_, ApiError>("fresh")), Some(Ok("fresh")));
        assert_eq!(accept_if_current(&sequence, slow, Ok::<_, ApiError>("stale")), None);
    }

    #[test]
    fn test_unmount_drops_in_flight_response() {
        let sequence = RequestSequence::new();
        let ticket = sequence.issue();
        sequence.invalidate();

        assert!(accept_if_current(&sequence, ticket, Err::<(), _>(failure())).is_none());
    }
}
