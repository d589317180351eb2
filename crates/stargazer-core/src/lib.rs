//! # stargazer-core
//!
//! Core types, traits, configuration, and error handling for Stargazer.

pub mod config;
pub mod error;
pub mod message;
pub mod space;
pub mod traits;
