pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod render;
