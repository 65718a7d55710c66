// Adapters layer: concrete implementations for external systems (backend http, output files).

pub mod http;
pub mod output;

pub use http::{ApiClient, DEFAULT_TIMEOUT};
pub use output::LocalOutput;
