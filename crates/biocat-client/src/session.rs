// SPDX-License-Identifier: Apache-2.0

use crate::backend::CatalogBackend;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientErrorCode};
use biocat_model::SearchResponse;
use biocat_query::{build_query_request, request_fingerprint, QueryLimits, SearchFilters};
use biocat_view::{present, FailureNotice, SearchViewState};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::timeout;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SearchPhase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Session-scoped results state: one mutable owner, updated only by the
/// winning request.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SearchPhase,
    pub seq: u64,
    pub response: Option<SearchResponse>,
    pub raw: Option<Value>,
    pub error: Option<ClientError>,
}

impl SessionSnapshot {
    fn idle() -> Self {
        Self {
            phase: SearchPhase::Idle,
            seq: 0,
            response: None,
            raw: None,
            error: None,
        }
    }
}

/// What happened to one issued search. A superseded search completed after
/// a newer one was issued; its response was discarded, not applied.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Applied(SessionSnapshot),
    Superseded { seq: u64 },
}

/// Drives the idle → loading → (success | failure) cycle, one request in
/// flight at a time from the session's point of view. Requests carry a
/// monotonically increasing sequence number; only the latest issued request
/// may write the snapshot, so a new search implicitly cancels interest in
/// any earlier in-flight one.
pub struct SearchSession {
    backend: Arc<dyn CatalogBackend>,
    config: ClientConfig,
    limits: QueryLimits,
    issued: AtomicU64,
    state: Mutex<SessionSnapshot>,
}

impl SearchSession {
    #[must_use]
    pub fn new(backend: Arc<dyn CatalogBackend>, config: ClientConfig) -> Self {
        Self::with_limits(backend, config, QueryLimits::default())
    }

    #[must_use]
    pub fn with_limits(
        backend: Arc<dyn CatalogBackend>,
        config: ClientConfig,
        limits: QueryLimits,
    ) -> Self {
        Self {
            backend,
            config,
            limits,
            issued: AtomicU64::new(0),
            state: Mutex::new(SessionSnapshot::idle()),
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.clone()
    }

    /// Projects the current snapshot through the presenter. Zero results and
    /// service failure are distinct states.
    pub async fn view_state(&self) -> SearchViewState {
        let snapshot = self.snapshot().await;
        match snapshot.phase {
            SearchPhase::Idle => SearchViewState::Idle,
            SearchPhase::Loading => SearchViewState::Loading,
            SearchPhase::Ready => match (snapshot.response, snapshot.raw) {
                (Some(response), Some(raw)) => {
                    if response.bio_model_infos.is_empty() {
                        SearchViewState::NoResults { raw }
                    } else {
                        SearchViewState::Results {
                            view: present(&response),
                            raw,
                        }
                    }
                }
                _ => SearchViewState::Idle,
            },
            SearchPhase::Failed => {
                let notice = snapshot
                    .error
                    .map(|e| FailureNotice::new(e.code.as_str(), e.message))
                    .unwrap_or_else(|| FailureNotice::new("internal", "failure without detail"));
                SearchViewState::Failed(notice)
            }
        }
    }

    pub async fn search(&self, filters: &SearchFilters) -> SearchOutcome {
        let seq = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        let request = match build_query_request(filters, &self.limits) {
            Ok(request) => request,
            Err(err) => {
                let err = ClientError::from(err);
                warn!(seq, error = %err, "search rejected before dispatch");
                return self.apply(seq, Err(err)).await;
            }
        };

        let fingerprint =
            request_fingerprint(&request).unwrap_or_else(|_| "unavailable".to_string());
        {
            let mut state = self.state.lock().await;
            if self.issued.load(Ordering::SeqCst) == seq {
                state.phase = SearchPhase::Loading;
                state.seq = seq;
            }
        }
        info!(seq, fingerprint = %fingerprint, "issuing catalog search");

        let reply = match timeout(
            self.config.request_timeout,
            self.backend.search_biomodels(&request),
        )
        .await
        {
            Ok(reply) => reply,
            Err(_) => Err(ClientError::new(
                ClientErrorCode::Timeout,
                format!(
                    "catalog query exceeded {} ms",
                    self.config.request_timeout.as_millis()
                ),
            )),
        };

        match reply {
            Ok(page) => self.apply(seq, Ok((page.response, page.raw))).await,
            Err(err) => self.apply(seq, Err(err)).await,
        }
    }

    async fn apply(
        &self,
        seq: u64,
        reply: Result<(SearchResponse, Value), ClientError>,
    ) -> SearchOutcome {
        let mut state = self.state.lock().await;
        if self.issued.load(Ordering::SeqCst) != seq {
            info!(seq, "discarding stale catalog response");
            return SearchOutcome::Superseded { seq };
        }
        *state = match reply {
            Ok((response, raw)) => SessionSnapshot {
                phase: SearchPhase::Ready,
                seq,
                response: Some(response),
                raw: Some(raw),
                error: None,
            },
            Err(err) => {
                warn!(seq, error = %err, "catalog search failed");
                SessionSnapshot {
                    phase: SearchPhase::Failed,
                    seq,
                    response: None,
                    raw: None,
                    error: Some(err),
                }
            }
        };
        SearchOutcome::Applied(state.clone())
    }
}
