use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryLimits {
    pub min_start_row: u32,
    pub max_rows_cap: u32,
    pub default_max_rows: u32,
    pub max_term_len: usize,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            min_start_row: 1,
            max_rows_cap: 100,
            default_max_rows: 10,
            max_term_len: 256,
        }
    }
}

impl QueryLimits {
    /// Start row is clamped to the lower bound only; the catalog is free to
    /// return an empty page past the end.
    #[must_use]
    pub fn clamp_start_row(&self, requested: u32) -> u32 {
        requested.max(self.min_start_row)
    }

    /// Max rows is clamped into [1, cap]; a zero request falls back to the
    /// default page size rather than an empty page.
    #[must_use]
    pub fn clamp_max_rows(&self, requested: u32) -> u32 {
        if requested == 0 {
            return self.default_max_rows.min(self.max_rows_cap);
        }
        requested.clamp(1, self.max_rows_cap)
    }
}
