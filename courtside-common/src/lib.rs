//! # Courtside Common Library
//!
//! Shared code for the Courtside service including:
//! - Database models and schema initialization
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod db;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
