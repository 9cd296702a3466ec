// SPDX-License-Identifier: Apache-2.0

use crate::backend::{CatalogBackend, FetchedPage};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientErrorCode};
use async_trait::async_trait;
use biocat_model::SearchResponse;
use biocat_query::{to_query_pairs, BiomodelQueryRequest};
use serde_json::Value;

/// REST/JSON adapter for a VCell-style catalog service:
/// `GET {base}/biomodel?<urlencoded filters>`.
pub struct HttpCatalogBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogBackend {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::new(ClientErrorCode::Network, e.to_string()))?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/biomodel", self.base_url)
    }
}

#[async_trait]
impl CatalogBackend for HttpCatalogBackend {
    async fn search_biomodels(
        &self,
        request: &BiomodelQueryRequest,
    ) -> Result<FetchedPage, ClientError> {
        let pairs = to_query_pairs(request);
        let response = self
            .client
            .get(self.search_url())
            .query(&pairs)
            .send()
            .await
            .map_err(|e| ClientError::new(ClientErrorCode::Network, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                ClientErrorCode::Status,
                format!("catalog query returned status {status}"),
            ));
        }

        let raw: Value = response
            .json()
            .await
            .map_err(|e| ClientError::new(ClientErrorCode::Decode, e.to_string()))?;
        let parsed: SearchResponse = serde_json::from_value(raw.clone())
            .map_err(|e| ClientError::new(ClientErrorCode::Decode, e.to_string()))?;
        parsed
            .validate()
            .map_err(|e| ClientError::new(ClientErrorCode::Decode, e.to_string()))?;

        Ok(FetchedPage {
            response: parsed,
            raw,
        })
    }
}
