//! Card domain model.
//!
//! # Responsibility
//! - Define the canonical roadmap card record and its closed enumerations.
//! - Provide validation helpers shared by store and boundary parsing.
//!
//! # Invariants
//! - `id` is stable and never reused for another card.
//! - `category` and `column_id` are always members of their fixed sets.
//! - `title` trimmed is non-empty for every constructed or decoded card.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const GENERATED_ID_PREFIX: &str = "card-";

/// Opaque stable identifier of one card.
///
/// Serialized as a plain string. Decoding rejects blank values.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId(pub(crate) String);

impl CardId {
    /// Allocates a fresh identifier.
    ///
    /// Generated ids use a random UUID suffix, so they never collide with
    /// sequential ids such as `card-1`.
    pub fn generate() -> Self {
        Self(format!(
            "{GENERATED_ID_PREFIX}{}",
            Uuid::new_v4().as_simple()
        ))
    }

    /// Parses a caller-provided identifier.
    ///
    /// # Errors
    /// - Returns `CardValidationError::EmptyId` for empty or whitespace text.
    pub fn parse(value: impl Into<String>) -> Result<Self, CardValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(CardValidationError::EmptyId);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for CardId {
    type Error = CardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CardId> for String {
    fn from(value: CardId) -> Self {
        value.0
    }
}

/// Work-stream swim lane of the roadmap.
///
/// Declaration order is the fixed lane order of the board. The default is
/// the category an editor preselects when opened without context.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Category {
    #[default]
    #[serde(rename = "Payroll Data Foundation")]
    PayrollDataFoundation,
    #[serde(rename = "Deduction Code Configuration")]
    DeductionCodeConfiguration,
    #[serde(rename = "Pension Support")]
    PensionSupport,
    #[serde(rename = "Tech Debt")]
    TechDebt,
    #[serde(rename = "Small Enhancements")]
    SmallEnhancements,
}

impl Category {
    /// All categories in board lane order.
    pub const ALL: [Category; 5] = [
        Category::PayrollDataFoundation,
        Category::DeductionCodeConfiguration,
        Category::PensionSupport,
        Category::TechDebt,
        Category::SmallEnhancements,
    ];

    /// Display label, also used as the wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PayrollDataFoundation => "Payroll Data Foundation",
            Self::DeductionCodeConfiguration => "Deduction Code Configuration",
            Self::PensionSupport => "Pension Support",
            Self::TechDebt => "Tech Debt",
            Self::SmallEnhancements => "Small Enhancements",
        }
    }

    /// Parses an exact display label (surrounding whitespace ignored).
    pub fn parse(value: &str) -> Result<Self, UnknownCategory> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| UnknownCategory(normalized.to_string()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planning-interval column of the roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnId {
    Pi1,
    Pi2,
    Pi3,
    Pi4,
}

impl ColumnId {
    /// All columns in board order.
    pub const ALL: [ColumnId; 4] = [ColumnId::Pi1, ColumnId::Pi2, ColumnId::Pi3, ColumnId::Pi4];

    /// Stable identifier used on the wire (`pi1`..`pi4`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pi1 => "pi1",
            Self::Pi2 => "pi2",
            Self::Pi3 => "pi3",
            Self::Pi4 => "pi4",
        }
    }

    /// Column header label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Pi1 => "PI 1 2026",
            Self::Pi2 => "PI 2 2026",
            Self::Pi3 => "PI 3 2026",
            Self::Pi4 => "PI 4 2026",
        }
    }

    /// Parses a column identifier, case-insensitive.
    pub fn parse(value: &str) -> Result<Self, UnknownColumn> {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "pi1" => Ok(Self::Pi1),
            "pi2" => Ok(Self::Pi2),
            "pi3" => Ok(Self::Pi3),
            "pi4" => Ok(Self::Pi4),
            _ => Err(UnknownColumn(trimmed.to_string())),
        }
    }
}

impl Display for ColumnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category label outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl Display for UnknownCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown category `{}`", self.0)
    }
}

impl Error for UnknownCategory {}

/// Column identifier outside `pi1..pi4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColumn(pub String);

impl Display for UnknownColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown column `{}`; expected pi1|pi2|pi3|pi4", self.0)
    }
}

impl Error for UnknownColumn {}

/// Card invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardValidationError {
    /// Identifier is empty or whitespace.
    EmptyId,
    /// Title is empty after trimming.
    EmptyTitle,
}

impl Display for CardValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "card id cannot be empty"),
            Self::EmptyTitle => write!(f, "card title cannot be empty"),
        }
    }
}

impl Error for CardValidationError {}

/// Canonical roadmap card record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CardRecord")]
pub struct Card {
    pub id: CardId,
    pub category: Category,
    /// Stored as entered; only the trimmed form must be non-empty.
    pub title: String,
    #[serde(rename = "columnId")]
    pub column_id: ColumnId,
}

impl Card {
    /// Creates a card with a freshly generated id.
    ///
    /// # Errors
    /// - Returns `CardValidationError::EmptyTitle` for blank titles.
    pub fn new(
        column_id: ColumnId,
        category: Category,
        title: impl Into<String>,
    ) -> Result<Self, CardValidationError> {
        Self::with_id(CardId::generate(), column_id, category, title)
    }

    /// Creates a card with a caller-provided id.
    ///
    /// Used by seed data and tests where identity is already known.
    pub fn with_id(
        id: CardId,
        column_id: ColumnId,
        category: Category,
        title: impl Into<String>,
    ) -> Result<Self, CardValidationError> {
        let card = Self {
            id,
            category,
            title: title.into(),
            column_id,
        };
        card.validate()?;
        Ok(card)
    }

    /// Checks card invariants.
    pub fn validate(&self) -> Result<(), CardValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CardValidationError::EmptyId);
        }
        validate_title(&self.title)
    }

    /// Returns whether the card sits in the given grid cell.
    pub fn is_in_cell(&self, column_id: ColumnId, category: Category) -> bool {
        self.column_id == column_id && self.category == category
    }
}

/// Rejects titles that are empty after trimming.
pub fn validate_title(title: &str) -> Result<(), CardValidationError> {
    if title.trim().is_empty() {
        return Err(CardValidationError::EmptyTitle);
    }
    Ok(())
}

#[derive(Deserialize)]
struct CardRecord {
    id: CardId,
    category: Category,
    title: String,
    #[serde(rename = "columnId")]
    column_id: ColumnId,
}

impl TryFrom<CardRecord> for Card {
    type Error = CardValidationError;

    fn try_from(value: CardRecord) -> Result<Self, Self::Error> {
        Card::with_id(value.id, value.column_id, value.category, value.title)
    }
}

#[cfg(test)]
mod tests {
    use super::{CardId, Category, ColumnId, UnknownColumn};

    #[test]
    fn generated_ids_are_prefixed_and_distinct() {
        let first = CardId::generate();
        let second = CardId::generate();
        assert!(first.as_str().starts_with("card-"));
        assert_ne!(first, second);
    }

    #[test]
    fn category_parse_accepts_every_label() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()), Ok(category));
        }
        assert!(Category::parse("Payroll").is_err());
    }

    #[test]
    fn column_parse_is_case_insensitive() {
        assert_eq!(ColumnId::parse(" PI3 "), Ok(ColumnId::Pi3));
        let err = ColumnId::parse("pi5").unwrap_err();
        assert!(err.to_string().contains("pi5"));
    }

    #[test]
    fn unknown_column_reports_input_as_given() {
        let err = ColumnId::parse(" PI9 ").unwrap_err();
        assert_eq!(err, UnknownColumn("PI9".to_string()));
        assert!(err.to_string().contains("`PI9`"));
    }
}
