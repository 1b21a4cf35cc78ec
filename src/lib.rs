pub mod browse;
pub mod breeds;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod photos;
