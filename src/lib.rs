pub mod config;
pub mod observability;
pub mod render;
pub mod snapshot;

pub use config::Config;
