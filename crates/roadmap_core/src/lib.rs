//! Core state logic for the payroll product roadmap board.
//! This crate is the single source of truth for card invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, init_logging_with, logging_status, LoggingConfig};
pub use model::card::{
    Card, CardId, CardValidationError, Category, ColumnId, UnknownCategory, UnknownColumn,
};
pub use model::grid::{CardSummary, GridCell, RoadmapGrid, SwimLane};
pub use model::seed::initial_cards;
pub use repo::card_repo::{CardRepository, InMemoryCardRepository, RepoError, RepoResult};
pub use service::roadmap_store::{RoadmapStore, StoreError, StoreResult};
pub use service::session::{
    blank_draft, EditorDraft, EditorState, EventOutcome, RoadmapEvent, RoadmapSession,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
