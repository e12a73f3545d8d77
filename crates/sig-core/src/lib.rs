//! # sig-core
//!
//! Core types shared by every crate of the signal equipment service:
//! - Entity structs for signals and their aspects
//! - The `AspectType` enumeration and its mutual-exclusivity table
//! - Cross-cutting domain error types
//! - Read-only projections returned to callers
//! - Input validation for caller-supplied identity fields

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod validation;
