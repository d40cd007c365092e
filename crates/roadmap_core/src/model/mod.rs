//! Roadmap domain model.
//!
//! # Responsibility
//! - Define the card record and its closed category/column enumerations.
//! - Derive the category x column grid view from the flat card list.
//!
//! # Invariants
//! - Every card is identified by a stable `CardId`.
//! - The grid is always recomputed from cards, never stored.

pub mod card;
pub mod grid;
pub mod seed;
