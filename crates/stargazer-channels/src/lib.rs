//! # stargazer-channels
//!
//! Messaging platform integrations for Stargazer.

pub mod telegram;
pub mod utils;
