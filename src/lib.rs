#![recursion_limit = "512"]

pub mod adapters;
pub mod app;
pub mod config;
pub mod content;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{ApiClient, LocalOutput};
pub use app::HomePage;
pub use config::SiteSettings;
pub use content::FallbackContent;
pub use render::{render_home_page, render_home_page_with, RenderOptions};
pub use utils::error::{Result, SiteError};
