//! # estudia-core
//!
//! Core types and primitives for Estudia, a PMP exam-prep tutoring chat.
//!
//! This crate provides the foundational types shared across all Estudia crates:
//! - Entity structs for the domain objects (users, sessions, messages)
//! - Closed enums for study modes, message roles, and derived classifications
//! - ID prefix constants
//! - The opaque credential primitive (hash/verify) and registration validation
//! - The controlled PMP topic vocabulary used by analytics
//! - Analytics report types consumed by any presentation layer
//! - Cross-cutting error types

pub mod auth;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod report;
pub mod topics;
