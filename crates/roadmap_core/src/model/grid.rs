//! Category x column grid projection.
//!
//! # Responsibility
//! - Derive the board view from the flat card list.
//!
//! # Invariants
//! - Every category and every column is present, in fixed order, even when
//!   empty.
//! - Cards inside a cell keep the insertion order of the source list.

use crate::model::card::{Card, CardId, Category, ColumnId};
use serde::Serialize;

/// Card fields rendered inside one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub id: CardId,
    pub title: String,
}

/// One `(category, column)` cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    #[serde(rename = "id")]
    pub column_id: ColumnId,
    pub cards: Vec<CardSummary>,
}

/// One category row with all of its column cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwimLane {
    pub category: Category,
    pub columns: Vec<GridCell>,
}

impl SwimLane {
    pub fn cell(&self, column_id: ColumnId) -> &[CardSummary] {
        self.columns
            .iter()
            .find(|cell| cell.column_id == column_id)
            .map(|cell| cell.cards.as_slice())
            .unwrap_or(&[])
    }
}

/// Derived board view: lanes in category order, cells in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoadmapGrid {
    lanes: Vec<SwimLane>,
}

impl RoadmapGrid {
    /// Groups cards by category, then by column.
    pub fn from_cards<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let mut lanes = Category::ALL
            .into_iter()
            .map(|category| SwimLane {
                category,
                columns: ColumnId::ALL
                    .into_iter()
                    .map(|column_id| GridCell {
                        column_id,
                        cards: Vec::new(),
                    })
                    .collect(),
            })
            .collect::<Vec<_>>();

        for card in cards {
            let lane = &mut lanes[lane_index(card.category)];
            lane.columns[column_index(card.column_id)]
                .cards
                .push(CardSummary {
                    id: card.id.clone(),
                    title: card.title.clone(),
                });
        }

        Self { lanes }
    }

    pub fn lanes(&self) -> &[SwimLane] {
        &self.lanes
    }

    pub fn lane(&self, category: Category) -> &SwimLane {
        &self.lanes[lane_index(category)]
    }

    /// Cards in one cell, in insertion order.
    pub fn cell(&self, category: Category, column_id: ColumnId) -> &[CardSummary] {
        self.lane(category).cell(column_id)
    }

    /// Total number of cards across all cells.
    pub fn card_count(&self) -> usize {
        self.lanes
            .iter()
            .flat_map(|lane| lane.columns.iter())
            .map(|cell| cell.cards.len())
            .sum()
    }

    /// Finds the cell holding `card_id`.
    pub fn locate(&self, card_id: &CardId) -> Option<(Category, ColumnId)> {
        self.lanes.iter().find_map(|lane| {
            lane.columns
                .iter()
                .find(|cell| cell.cards.iter().any(|card| &card.id == card_id))
                .map(|cell| (lane.category, cell.column_id))
        })
    }
}

fn lane_index(category: Category) -> usize {
    match category {
        Category::PayrollDataFoundation => 0,
        Category::DeductionCodeConfiguration => 1,
        Category::PensionSupport => 2,
        Category::TechDebt => 3,
        Category::SmallEnhancements => 4,
    }
}

fn column_index(column_id: ColumnId) -> usize {
    match column_id {
        ColumnId::Pi1 => 0,
        ColumnId::Pi2 => 1,
        ColumnId::Pi3 => 2,
        ColumnId::Pi4 => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::{column_index, lane_index, RoadmapGrid};
    use crate::model::card::{Category, ColumnId};

    #[test]
    fn indexes_follow_declaration_order() {
        for (expected, category) in Category::ALL.into_iter().enumerate() {
            assert_eq!(lane_index(category), expected);
        }
        for (expected, column_id) in ColumnId::ALL.into_iter().enumerate() {
            assert_eq!(column_index(column_id), expected);
        }
    }

    #[test]
    fn empty_grid_has_every_cell() {
        let grid = RoadmapGrid::from_cards(std::iter::empty());
        assert_eq!(grid.lanes().len(), 5);
        for lane in grid.lanes() {
            assert_eq!(lane.columns.len(), 4);
            assert!(lane.columns.iter().all(|cell| cell.cards.is_empty()));
        }
        assert_eq!(grid.card_count(), 0);
    }
}
