pub mod client;
pub mod config;
pub mod types;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::ClientConfig;

pub use client::InventoryClient;
pub use utils::error::{InventoryError, Result};
