// SPDX-License-Identifier: Apache-2.0

use crate::error::ClientError;
use async_trait::async_trait;
use biocat_model::SearchResponse;
use biocat_query::BiomodelQueryRequest;
use serde_json::Value;

/// A decoded result page together with the wire payload it came from. The
/// raw value feeds the response inspector and may carry fields the typed
/// model does not know about.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub response: SearchResponse,
    pub raw: Value,
}

/// The catalog query service boundary. The session awaits this as its only
/// suspension point.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    async fn search_biomodels(
        &self,
        request: &BiomodelQueryRequest,
    ) -> Result<FetchedPage, ClientError>;
}
