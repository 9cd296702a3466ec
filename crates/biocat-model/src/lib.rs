#![forbid(unsafe_code)]

pub const CRATE_NAME: &str = "biocat-model";

mod biomodel;
pub mod canonical;
pub mod serde_helpers;

pub use biomodel::{
    BiomodelSummary, Category, ParseError, Privacy, SearchResponse, SortOrder, Username,
    ANNOT_MAX_LEN, NAME_MAX_LEN, USERNAME_MAX_LEN,
};
