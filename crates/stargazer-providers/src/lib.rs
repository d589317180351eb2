//! # stargazer-providers
//!
//! Upstream clients for Stargazer: NASA open data and machine translation.

pub mod nasa;
pub mod translate;
