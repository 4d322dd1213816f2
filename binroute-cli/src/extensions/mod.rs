//! Module provides various helper functionality.

pub mod analyze;
pub mod export;
pub mod generate;
pub mod import;
pub mod plan;
