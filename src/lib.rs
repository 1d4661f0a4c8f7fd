// src/lib.rs

//! cg-exporter library
//!
//! Scrapes paginated score listings from Cardinal-Gate IIDX profile pages
//! and normalizes them into Tachi BATCH-MANUAL export documents.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod storage;
pub mod utils;
