//! Board session: store plus card editor state.
//!
//! # Responsibility
//! - Translate presentation events (drop, add, edit, dialog save/delete)
//!   into store operations.
//! - Track whether the card editor is closed, adding, or editing.
//!
//! # Invariants
//! - A rejected save (blank title) leaves both cards and editor unchanged.
//! - A drop onto the card's current cell is ignored.
//! - The editor only opens in editing mode for a card that exists.
//! - Saving or deleting an unknown card is `Ignored` and closes the editor.

use crate::model::card::{CardId, CardValidationError, Category, ColumnId};
use crate::model::grid::RoadmapGrid;
use crate::repo::card_repo::{CardRepository, InMemoryCardRepository};
use crate::service::roadmap_store::{RoadmapStore, StoreError, StoreResult};
use log::debug;

/// Card editor mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    /// Add flow opened from one grid cell.
    Adding {
        column_id: ColumnId,
        category: Category,
    },
    /// Edit flow for one existing card.
    Editing { card_id: CardId },
}

/// Initial editor field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorDraft {
    /// `None` when adding a new card.
    pub card_id: Option<CardId>,
    pub title: String,
    pub category: Category,
}

/// Presentation-layer event delivered to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoadmapEvent {
    CardDropped {
        card_id: CardId,
        target_column: ColumnId,
        target_category: Category,
    },
    AddRequested {
        column_id: ColumnId,
        category: Category,
    },
    EditRequested {
        card_id: CardId,
    },
    DialogSaved {
        card_id: Option<CardId>,
        title: String,
        category: Category,
    },
    DialogDeleted {
        card_id: CardId,
    },
    DialogClosed,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Cards or editor state changed.
    Applied,
    /// A new card was appended.
    Created(CardId),
    /// The editor opened with these field values.
    EditorOpened(EditorDraft),
    /// Nothing to do for this event.
    Ignored,
    /// Input was refused; state is unchanged.
    Rejected(CardValidationError),
}

/// Event-driven facade over `RoadmapStore`.
#[derive(Debug, Clone, Default)]
pub struct RoadmapSession<R: CardRepository = InMemoryCardRepository> {
    store: RoadmapStore<R>,
    editor: EditorState,
}

impl RoadmapSession<InMemoryCardRepository> {
    /// Session over the initial roadmap cards.
    pub fn seeded() -> Self {
        Self::new(RoadmapStore::seeded())
    }
}

impl<R: CardRepository> RoadmapSession<R> {
    pub fn new(store: RoadmapStore<R>) -> Self {
        Self {
            store,
            editor: EditorState::Closed,
        }
    }

    pub fn store(&self) -> &RoadmapStore<R> {
        &self.store
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn project(&self) -> StoreResult<RoadmapGrid> {
        self.store.project()
    }

    /// Field values the editor shows for its current mode.
    ///
    /// Falls back to `blank_draft()` when closed or when the edited card is
    /// gone.
    pub fn current_draft(&self) -> StoreResult<EditorDraft> {
        match &self.editor {
            EditorState::Closed => Ok(blank_draft()),
            EditorState::Adding { category, .. } => Ok(EditorDraft {
                category: *category,
                ..blank_draft()
            }),
            EditorState::Editing { card_id } => Ok(self
                .store
                .get_card(card_id)?
                .map(|card| EditorDraft {
                    card_id: Some(card.id),
                    title: card.title,
                    category: card.category,
                })
                .unwrap_or_else(blank_draft)),
        }
    }

    /// Applies one presentation event.
    ///
    /// # Errors
    /// - Returns storage errors other than blank titles and unknown ids,
    ///   which map to `Rejected` and no-ops respectively.
    pub fn apply(&mut self, event: RoadmapEvent) -> StoreResult<EventOutcome> {
        match event {
            RoadmapEvent::CardDropped {
                card_id,
                target_column,
                target_category,
            } => self.drop_card(&card_id, target_column, target_category),
            RoadmapEvent::AddRequested {
                column_id,
                category,
            } => Ok(self.open_for_add(column_id, category)),
            RoadmapEvent::EditRequested { card_id } => self.open_for_edit(card_id),
            RoadmapEvent::DialogSaved {
                card_id,
                title,
                category,
            } => self.save(card_id, title, category),
            RoadmapEvent::DialogDeleted { card_id } => {
                let existed = self.store.get_card(&card_id)?.is_some();
                self.store.remove_card(&card_id)?;
                self.editor = EditorState::Closed;
                Ok(if existed {
                    EventOutcome::Applied
                } else {
                    EventOutcome::Ignored
                })
            }
            RoadmapEvent::DialogClosed => {
                self.editor = EditorState::Closed;
                Ok(EventOutcome::Applied)
            }
        }
    }

    fn drop_card(
        &mut self,
        card_id: &CardId,
        target_column: ColumnId,
        target_category: Category,
    ) -> StoreResult<EventOutcome> {
        let same_cell = self
            .store
            .get_card(card_id)?
            .is_some_and(|card| card.is_in_cell(target_column, target_category));
        if same_cell {
            debug!(
                "event=card_drop module=session status=ignored reason=same_cell card_id={}",
                card_id
            );
            return Ok(EventOutcome::Ignored);
        }

        self.store
            .move_card(card_id, target_column, target_category)?;
        Ok(EventOutcome::Applied)
    }

    fn open_for_add(&mut self, column_id: ColumnId, category: Category) -> EventOutcome {
        self.editor = EditorState::Adding {
            column_id,
            category,
        };
        debug!(
            "event=editor_open module=session mode=add column={} category={}",
            column_id, category
        );
        EventOutcome::EditorOpened(EditorDraft {
            category,
            ..blank_draft()
        })
    }

    fn open_for_edit(&mut self, card_id: CardId) -> StoreResult<EventOutcome> {
        if self.store.get_card(&card_id)?.is_none() {
            return Ok(EventOutcome::Ignored);
        }

        debug!(
            "event=editor_open module=session mode=edit card_id={}",
            card_id
        );
        self.editor = EditorState::Editing { card_id };
        Ok(EventOutcome::EditorOpened(self.current_draft()?))
    }

    fn save(
        &mut self,
        card_id: Option<CardId>,
        title: String,
        category: Category,
    ) -> StoreResult<EventOutcome> {
        let outcome = match (card_id, &self.editor) {
            (Some(card_id), _) => {
                let existed = self.store.get_card(&card_id)?.is_some();
                self.store
                    .update_card(&card_id, title, category)
                    .map(|()| {
                        if existed {
                            EventOutcome::Applied
                        } else {
                            EventOutcome::Ignored
                        }
                    })
            }
            (None, EditorState::Adding { column_id, .. }) => self
                .store
                .create_card(*column_id, category, title)
                .map(EventOutcome::Created),
            (None, _) => return Ok(EventOutcome::Ignored),
        };

        match outcome {
            Ok(outcome) => {
                self.editor = EditorState::Closed;
                Ok(outcome)
            }
            Err(StoreError::Validation(err)) => Ok(EventOutcome::Rejected(err)),
            Err(err) => Err(err),
        }
    }
}

/// Field values an editor shows when opened without an edit or add context.
pub fn blank_draft() -> EditorDraft {
    EditorDraft {
        card_id: None,
        title: String::new(),
        category: Category::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::{blank_draft, EditorState, RoadmapSession};
    use crate::model::card::Category;

    #[test]
    fn new_session_starts_closed() {
        let session = RoadmapSession::seeded();
        assert_eq!(session.editor(), &EditorState::Closed);
        assert_eq!(session.store().cards().len(), 18);
    }

    #[test]
    fn blank_draft_preselects_first_category() {
        let draft = blank_draft();
        assert_eq!(draft.category, Category::PayrollDataFoundation);
        assert!(draft.card_id.is_none());
        assert!(draft.title.is_empty());
    }
}
