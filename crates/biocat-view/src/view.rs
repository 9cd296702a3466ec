// SPDX-License-Identifier: Apache-2.0

use crate::format::format_saved_date;
use biocat_model::{BiomodelSummary, SearchResponse};
use serde::Serialize;

/// Display unit for one model record, ready for any rendering shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BiomodelCard {
    pub bm_id: u64,
    pub name: String,
    pub owner_name: String,
    pub annot: String,
    pub saved_label: String,
    pub simulations: u64,
    pub privacy_label: &'static str,
    /// Rendered only when `show_shared` is set; an empty set draws nothing.
    pub shared_with: Vec<String>,
    pub show_shared: bool,
}

/// Projection of one result page. `shown_count` is the page length, never
/// the catalog-wide total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub shown_count: usize,
    pub total_count: u64,
    pub cards: Vec<BiomodelCard>,
    pub is_empty: bool,
}

fn card_for(record: &BiomodelSummary) -> BiomodelCard {
    BiomodelCard {
        bm_id: record.bm_id,
        name: record.name.clone(),
        owner_name: record.owner_name.clone(),
        annot: record.annot.clone(),
        saved_label: format_saved_date(&record.saved_date),
        simulations: record.simulations,
        privacy_label: record.privacy.as_label(),
        shared_with: record.group_users.clone(),
        show_shared: !record.group_users.is_empty(),
    }
}

/// Pure projection from a response to its display description. Records keep
/// the order the service returned; an empty page projects cleanly.
#[must_use]
pub fn present(response: &SearchResponse) -> ResultView {
    let cards: Vec<BiomodelCard> = response.bio_model_infos.iter().map(card_for).collect();
    ResultView {
        shown_count: cards.len(),
        total_count: response.total_count,
        is_empty: cards.is_empty(),
        cards,
    }
}
