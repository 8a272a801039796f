//! Repository modules implementing CRUD operations for all Estudia entities.
//!
//! Each module adds methods to `EstudiaService` via `impl EstudiaService` blocks.

pub mod analytics;
pub mod message;
pub mod session;
pub mod user;
