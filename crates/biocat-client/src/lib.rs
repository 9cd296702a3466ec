#![forbid(unsafe_code)]

pub const CRATE_NAME: &str = "biocat-client";

mod backend;
mod config;
mod error;
mod fake;
mod http;
mod session;

pub use backend::{CatalogBackend, FetchedPage};
pub use config::{ClientConfig, ENV_BIOCAT_BASE_URL, ENV_BIOCAT_TIMEOUT_MS};
pub use error::{ClientError, ClientErrorCode};
pub use fake::FakeCatalog;
pub use http::HttpCatalogBackend;
pub use session::{SearchOutcome, SearchPhase, SearchSession, SessionSnapshot};
