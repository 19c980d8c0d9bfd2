pub mod analysis;
pub mod config;
pub mod display;
pub mod error;
pub mod ingest;
