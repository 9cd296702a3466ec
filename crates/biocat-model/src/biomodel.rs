// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const NAME_MAX_LEN: usize = 256;
pub const USERNAME_MAX_LEN: usize = 128;
pub const ANNOT_MAX_LEN: usize = 16_384;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    Empty(&'static str),
    Trimmed(&'static str),
    TooLong(&'static str, usize),
    InvalidFormat(&'static str),
    CountInvariant { total: u64, page_len: usize },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(name) => write!(f, "{name} must not be empty"),
            Self::Trimmed(name) => {
                write!(f, "{name} must not contain leading/trailing whitespace")
            }
            Self::TooLong(name, max) => write!(f, "{name} exceeds max length {max}"),
            Self::InvalidFormat(msg) => f.write_str(msg),
            Self::CountInvariant { total, page_len } => write!(
                f,
                "total match count {total} is below returned page length {page_len}"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A username granted shared access to a model record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct Username(String);

impl Username {
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty("username"));
        }
        if input.trim() != input {
            return Err(ParseError::Trimmed("username"));
        }
        if input.len() > USERNAME_MAX_LEN {
            return Err(ParseError::TooLong("username", USERNAME_MAX_LEN));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Visibility of a model record. Carried as a 0/1 integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum Privacy {
    Public,
    Private,
}

impl Privacy {
    #[must_use]
    pub const fn from_flag(flag: u8) -> Self {
        match flag {
            1 => Self::Private,
            _ => Self::Public,
        }
    }

    #[must_use]
    pub const fn as_flag(self) -> u8 {
        match self {
            Self::Public => 0,
            Self::Private => 1,
        }
    }

    #[must_use]
    pub const fn as_label(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Private => "Private",
        }
    }
}

/// Coarse classification filter over catalog records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Category {
    #[default]
    All,
    Public,
    Shared,
    Tutorial,
    Educational,
}

impl Category {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "all" => Ok(Self::All),
            "public" => Ok(Self::Public),
            "shared" => Ok(Self::Shared),
            "tutorial" => Ok(Self::Tutorial),
            "educational" => Ok(Self::Educational),
            _ => Err(ParseError::InvalidFormat(
                "category must be one of 'all', 'public', 'shared', 'tutorial', 'educational'",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Public => "public",
            Self::Shared => "shared",
            Self::Tutorial => "tutorial",
            Self::Educational => "educational",
        }
    }
}

/// Service-side ordering of a result page. The presenter never re-sorts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    NameDesc,
    NameAsc,
}

impl SortOrder {
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "date_desc" => Ok(Self::DateDesc),
            "date_asc" => Ok(Self::DateAsc),
            "name_desc" => Ok(Self::NameDesc),
            "name_asc" => Ok(Self::NameAsc),
            _ => Err(ParseError::InvalidFormat(
                "sort order must be one of 'date_desc', 'date_asc', 'name_desc', 'name_asc'",
            )),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateDesc => "date_desc",
            Self::DateAsc => "date_asc",
            Self::NameDesc => "name_desc",
            Self::NameAsc => "name_asc",
        }
    }
}

/// One catalog entry as returned by the query service.
///
/// Decoding is intentionally lenient about unknown fields: the upstream
/// schema is not ours and may grow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct BiomodelSummary {
    pub bm_id: u64,
    pub name: String,
    pub owner_name: String,
    pub owner_key: u64,
    pub saved_date: DateTime<Utc>,
    #[serde(default)]
    pub annot: String,
    pub branch_id: u64,
    pub model_key: u64,
    #[serde(default)]
    pub simulations: u64,
    #[serde(with = "crate::serde_helpers::privacy_flag")]
    pub privacy: Privacy,
    #[serde(default)]
    pub group_users: Vec<String>,
}

impl BiomodelSummary {
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.name.is_empty() {
            return Err(ParseError::Empty("name"));
        }
        if self.name.len() > NAME_MAX_LEN {
            return Err(ParseError::TooLong("name", NAME_MAX_LEN));
        }
        if self.annot.len() > ANNOT_MAX_LEN {
            return Err(ParseError::TooLong("annot", ANNOT_MAX_LEN));
        }
        for user in &self.group_users {
            Username::parse(user)?;
        }
        Ok(())
    }
}

/// One page of search results plus the catalog-wide match count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchResponse {
    #[serde(default)]
    pub bio_model_infos: Vec<BiomodelSummary>,
    pub total_count: u64,
}

impl SearchResponse {
    #[must_use]
    pub fn new(bio_model_infos: Vec<BiomodelSummary>, total_count: u64) -> Self {
        Self {
            bio_model_infos,
            total_count,
        }
    }

    /// Total match count must cover at least the returned page; pagination
    /// may truncate but never inflate. Records are checked record by record.
    pub fn validate(&self) -> Result<(), ParseError> {
        let page_len = self.bio_model_infos.len();
        if (self.total_count as usize) < page_len {
            return Err(ParseError::CountInvariant {
                total: self.total_count,
                page_len,
            });
        }
        for record in &self.bio_model_infos {
            record.validate()?;
        }
        Ok(())
    }
}
