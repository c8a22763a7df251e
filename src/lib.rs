pub mod client;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use client::FilingApi;
pub use config::ClientConfig;
pub use domain::ports::ConfigProvider;
pub use utils::error::{ClientError, Result};
