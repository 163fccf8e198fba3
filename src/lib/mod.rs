//! Open Graph, Twitter Card and generic social-preview metadata for rendered
//! pages.
pub mod assembler;
pub mod config;
pub mod plugin;
pub mod resolve;
pub mod sink;
pub mod types;
pub mod utils;
