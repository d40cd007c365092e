//! Card repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the board's card list.
//! - Keep list ordering semantics inside the storage boundary.
//!
//! # Invariants
//! - Write paths must call `Card::validate()` before mutating state.
//! - Listing returns cards in insertion order; updates keep position.
//! - Ids are unique across stored cards.

use crate::model::card::{Card, CardId, CardValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for card storage operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(CardValidationError),
    NotFound(CardId),
    DuplicateId(CardId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "card not found: {id}"),
            Self::DuplicateId(id) => write!(f, "card id already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<CardValidationError> for RepoError {
    fn from(value: CardValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for card CRUD operations.
pub trait CardRepository {
    fn insert_card(&mut self, card: Card) -> RepoResult<CardId>;
    fn update_card(&mut self, card: &Card) -> RepoResult<()>;
    fn get_card(&self, id: &CardId) -> RepoResult<Option<Card>>;
    fn list_cards(&self) -> RepoResult<Vec<Card>>;
    fn delete_card(&mut self, id: &CardId) -> RepoResult<Card>;
}

/// Vector-backed card repository.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCardRepository {
    cards: Vec<Card>,
}

impl InMemoryCardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a repository from existing cards, preserving their order.
    ///
    /// # Errors
    /// - Returns `RepoError::Validation` for any invalid card.
    /// - Returns `RepoError::DuplicateId` when two cards share an id.
    pub fn with_cards(cards: impl IntoIterator<Item = Card>) -> RepoResult<Self> {
        let mut repo = Self::new();
        for card in cards {
            repo.insert_card(card)?;
        }
        Ok(repo)
    }

    /// Borrowed view of stored cards in insertion order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|card| &card.id == id)
    }
}

impl CardRepository for InMemoryCardRepository {
    fn insert_card(&mut self, card: Card) -> RepoResult<CardId> {
        card.validate()?;
        if self.position(&card.id).is_some() {
            return Err(RepoError::DuplicateId(card.id));
        }

        let id = card.id.clone();
        self.cards.push(card);
        Ok(id)
    }

    fn update_card(&mut self, card: &Card) -> RepoResult<()> {
        card.validate()?;

        let index = self
            .position(&card.id)
            .ok_or_else(|| RepoError::NotFound(card.id.clone()))?;
        self.cards[index] = card.clone();
        Ok(())
    }

    fn get_card(&self, id: &CardId) -> RepoResult<Option<Card>> {
        Ok(self.position(id).map(|index| self.cards[index].clone()))
    }

    fn list_cards(&self) -> RepoResult<Vec<Card>> {
        Ok(self.cards.clone())
    }

    fn delete_card(&mut self, id: &CardId) -> RepoResult<Card> {
        let index = self
            .position(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        Ok(self.cards.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{CardRepository, InMemoryCardRepository, RepoError};
    use crate::model::card::{Card, CardId, CardValidationError, Category, ColumnId};

    fn card(id: &str, title: &str) -> Card {
        Card::with_id(
            CardId::parse(id).unwrap(),
            ColumnId::Pi1,
            Category::TechDebt,
            title,
        )
        .unwrap()
    }

    #[test]
    fn insert_rejects_duplicate_id() {
        let mut repo = InMemoryCardRepository::new();
        repo.insert_card(card("c1", "first")).unwrap();

        let err = repo.insert_card(card("c1", "again")).unwrap_err();
        assert_eq!(err, RepoError::DuplicateId(CardId::parse("c1").unwrap()));
        assert_eq!(repo.cards().len(), 1);
    }

    #[test]
    fn update_keeps_position() {
        let mut repo = InMemoryCardRepository::with_cards([
            card("c1", "one"),
            card("c2", "two"),
            card("c3", "three"),
        ])
        .unwrap();

        let mut changed = card("c2", "two v2");
        changed.column_id = ColumnId::Pi4;
        repo.update_card(&changed).unwrap();

        let ids = repo
            .list_cards()
            .unwrap()
            .into_iter()
            .map(|card| card.id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["c1", "c2", "c3"]);
        assert_eq!(repo.cards()[1].title, "two v2");
    }

    #[test]
    fn update_rejects_blank_title_without_mutation() {
        let mut repo = InMemoryCardRepository::with_cards([card("c1", "one")]).unwrap();

        let mut changed = card("c1", "one");
        changed.title = "  ".to_string();
        let err = repo.update_card(&changed).unwrap_err();
        assert_eq!(err, RepoError::Validation(CardValidationError::EmptyTitle));
        assert_eq!(repo.cards()[0].title, "one");
    }

    #[test]
    fn delete_missing_returns_not_found() {
        let mut repo = InMemoryCardRepository::new();
        let missing = CardId::parse("nope").unwrap();
        let err = repo.delete_card(&missing).unwrap_err();
        assert!(matches!(err, RepoError::NotFound(id) if id == missing));
    }
}
