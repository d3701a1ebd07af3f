pub mod client;
pub mod concurrency;
pub mod config;
pub mod connectors;
pub mod error;
mod macros;
pub mod progress;
pub mod state;
pub mod step;
pub mod types;
