//! Hamilton Insights - Content service for the Hamilton Investment blog.
//!
//! Serves the public listing pages (valuation reports, corporate finance,
//! investment insights) and the password-gated admin API for managing posts.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
