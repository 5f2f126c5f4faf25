pub mod allocator;
pub mod assessment;
pub mod config;
mod content_table;
pub mod error;
pub mod generator;
pub mod io;
pub mod library;
pub mod paths;
pub mod plan;
pub mod review;
pub mod rotation;
pub mod store;
pub mod tier;
pub mod types;

pub use error::{PdpError, Result};
