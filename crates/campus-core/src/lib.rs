//! # campus-core
//!
//! Core types and error types for Campus.
//!
//! This crate provides the foundational types shared across all Campus crates:
//! - The [`Institution`](entities::Institution) entity in its wire shape
//! - The [`Category`](enums::Category) partition enum
//! - Catalog-level validation (unique ids)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod validation;
