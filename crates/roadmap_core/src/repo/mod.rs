//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented card access contracts.
//! - Isolate list bookkeeping from store/session orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Card::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`);
//!   callers decide which of them are silent.

pub mod card_repo;
