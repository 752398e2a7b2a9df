//! Catalog use-case services.
//!
//! # Responsibility
//! - Orchestrate registry calls into use-case level APIs.
//! - Own the cross-registry checks no single registry can perform.

pub mod catalog_service;
