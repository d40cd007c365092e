//! Roadmap board store.
//!
//! # Responsibility
//! - Funnel every card mutation through move/create/update/remove.
//! - Derive the category x column projection on demand.
//!
//! # Invariants
//! - Operations referencing an unknown card id are silent no-ops.
//! - `create_card`/`update_card` reject blank titles without mutating.
//! - `update_card` never changes a card's column.
//! - Log events carry ids and enum labels only, never titles.

use crate::model::card::{validate_title, Card, CardId, CardValidationError, Category, ColumnId};
use crate::model::grid::RoadmapGrid;
use crate::model::seed::initial_cards;
use crate::repo::card_repo::{CardRepository, InMemoryCardRepository, RepoError};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error surfaced to callers.
///
/// Unknown ids never produce an error; see module invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Input violates a card invariant.
    Validation(CardValidationError),
    /// Storage-layer failure other than a missing card.
    Repo(RepoError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<CardValidationError> for StoreError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

/// Card store over a repository implementation.
#[derive(Debug, Clone, Default)]
pub struct RoadmapStore<R: CardRepository = InMemoryCardRepository> {
    repo: R,
}

impl RoadmapStore<InMemoryCardRepository> {
    /// Store with no cards.
    pub fn empty() -> Self {
        Self::new(InMemoryCardRepository::new())
    }

    /// Store preloaded with the initial roadmap cards.
    pub fn seeded() -> Self {
        let mut store = Self::empty();
        for card in initial_cards() {
            if let Err(err) = store.repo.insert_card(card) {
                error!("event=seed_load module=store status=error error={err}");
            }
        }
        store
    }

    /// Flat card list in insertion order without cloning.
    pub fn cards(&self) -> &[Card] {
        self.repo.cards()
    }
}

impl<R: CardRepository> RoadmapStore<R> {
    /// Creates a store using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Relocates a card to `(target_category, target_column)`.
    ///
    /// Unknown ids are ignored.
    pub fn move_card(
        &mut self,
        card_id: &CardId,
        target_column: ColumnId,
        target_category: Category,
    ) -> StoreResult<()> {
        let Some(mut card) = self.repo.get_card(card_id)? else {
            log_ignored("card_move", card_id);
            return Ok(());
        };

        card.column_id = target_column;
        card.category = target_category;
        self.apply_update(&card, "card_move")?;
        debug!(
            "event=card_move module=store status=ok card_id={} column={} category={}",
            card_id, target_column, target_category
        );
        Ok(())
    }

    /// Appends a new card and returns its freshly allocated id.
    ///
    /// # Errors
    /// - Returns `StoreError::Validation(EmptyTitle)` for blank titles; the
    ///   card list is left untouched.
    pub fn create_card(
        &mut self,
        column_id: ColumnId,
        category: Category,
        title: impl Into<String>,
    ) -> StoreResult<CardId> {
        let card = Card::new(column_id, category, title)?;
        let card_id = self.repo.insert_card(card)?;
        debug!(
            "event=card_create module=store status=ok card_id={} column={} category={}",
            card_id, column_id, category
        );
        Ok(card_id)
    }

    /// Overwrites title and category of an existing card.
    ///
    /// Unknown ids are ignored. The column is never changed.
    ///
    /// # Errors
    /// - Returns `StoreError::Validation(EmptyTitle)` for blank titles, even
    ///   when the id is unknown.
    pub fn update_card(
        &mut self,
        card_id: &CardId,
        title: impl Into<String>,
        category: Category,
    ) -> StoreResult<()> {
        let title = title.into();
        validate_title(&title)?;

        let Some(mut card) = self.repo.get_card(card_id)? else {
            log_ignored("card_update", card_id);
            return Ok(());
        };

        card.title = title;
        card.category = category;
        self.apply_update(&card, "card_update")?;
        debug!(
            "event=card_update module=store status=ok card_id={} category={}",
            card_id, category
        );
        Ok(())
    }

    /// Deletes a card. Unknown ids are ignored.
    pub fn remove_card(&mut self, card_id: &CardId) -> StoreResult<()> {
        match self.repo.delete_card(card_id) {
            Ok(_) => {
                debug!(
                    "event=card_remove module=store status=ok card_id={}",
                    card_id
                );
                Ok(())
            }
            Err(RepoError::NotFound(_)) => {
                log_ignored("card_remove", card_id);
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Gets one card by id.
    pub fn get_card(&self, card_id: &CardId) -> StoreResult<Option<Card>> {
        Ok(self.repo.get_card(card_id)?)
    }

    /// Lists all cards in insertion order.
    pub fn list_cards(&self) -> StoreResult<Vec<Card>> {
        Ok(self.repo.list_cards()?)
    }

    pub fn card_count(&self) -> StoreResult<usize> {
        Ok(self.repo.list_cards()?.len())
    }

    /// Groups current cards by category, then by column.
    pub fn project(&self) -> StoreResult<RoadmapGrid> {
        let cards = self.repo.list_cards()?;
        Ok(RoadmapGrid::from_cards(&cards))
    }

    fn apply_update(&mut self, card: &Card, event: &str) -> StoreResult<()> {
        match self.repo.update_card(card) {
            Ok(()) => Ok(()),
            // The card vanished between read and write; same policy as a miss.
            Err(RepoError::NotFound(_)) => {
                log_ignored(event, &card.id);
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn log_ignored(event: &str, card_id: &CardId) {
    info!(
        "event={} module=store status=ignored reason=not_found card_id={}",
        event, card_id
    );
}
