//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod report;

pub use report::{Report, ReportBody, ReportMetadataView};
