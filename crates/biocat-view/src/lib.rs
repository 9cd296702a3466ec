#![forbid(unsafe_code)]

pub const CRATE_NAME: &str = "biocat-view";

mod format;
mod state;
mod view;

pub use format::format_saved_date;
pub use state::{FailureNotice, SearchViewState};
pub use view::{present, BiomodelCard, ResultView};
