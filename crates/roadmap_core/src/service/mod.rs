//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into board-level operations.
//! - Keep UI/FFI layers decoupled from card storage details.

pub mod roadmap_store;
pub mod session;
