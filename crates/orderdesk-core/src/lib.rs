pub mod changelog;
pub mod config;
pub mod credential;
pub mod error;
pub mod export;
pub mod filter;
pub mod kpi;
pub mod order;
pub mod session;
pub mod store;
pub mod token;
pub mod types;

pub use error::{OrderdeskError, Result};
