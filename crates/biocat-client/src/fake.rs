use crate::backend::{CatalogBackend, FetchedPage};
use crate::error::{ClientError, ClientErrorCode};
use async_trait::async_trait;
use biocat_model::SearchResponse;
use biocat_query::BiomodelQueryRequest;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

struct ScriptedReply {
    delay: Option<Duration>,
    reply: Result<SearchResponse, ClientError>,
}

/// Scripted catalog backend for tests: replies are served in push order,
/// optionally after an artificial delay.
#[derive(Default)]
pub struct FakeCatalog {
    script: Mutex<VecDeque<ScriptedReply>>,
    search_calls: AtomicU64,
}

impl FakeCatalog {
    pub async fn push_ok(&self, response: SearchResponse) {
        self.script.lock().await.push_back(ScriptedReply {
            delay: None,
            reply: Ok(response),
        });
    }

    pub async fn push_ok_after(&self, delay: Duration, response: SearchResponse) {
        self.script.lock().await.push_back(ScriptedReply {
            delay: Some(delay),
            reply: Ok(response),
        });
    }

    pub async fn push_err(&self, error: ClientError) {
        self.script.lock().await.push_back(ScriptedReply {
            delay: None,
            reply: Err(error),
        });
    }

    #[must_use]
    pub fn calls(&self) -> u64 {
        self.search_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogBackend for FakeCatalog {
    async fn search_biomodels(
        &self,
        _request: &BiomodelQueryRequest,
    ) -> Result<FetchedPage, ClientError> {
        self.search_calls.fetch_add(1, Ordering::Relaxed);
        let scripted = self.script.lock().await.pop_front().ok_or_else(|| {
            ClientError::new(ClientErrorCode::Network, "fake catalog script exhausted")
        })?;
        if let Some(delay) = scripted.delay {
            tokio::time::sleep(delay).await;
        }
        let response = scripted.reply?;
        let raw = serde_json::to_value(&response)
            .map_err(|e| ClientError::new(ClientErrorCode::Decode, e.to_string()))?;
        Ok(FetchedPage { response, raw })
    }
}
