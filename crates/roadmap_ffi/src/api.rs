//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the roadmap board to Dart via FRB as one opaque handle.
//! - Parse string payloads from the UI into typed core values.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A payload that fails to parse never reaches the store.

use log::warn;
use roadmap_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    CardId, Category, ColumnId, EditorDraft, EventOutcome, RoadmapEvent, RoadmapSession,
    StoreResult,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Column identifiers in board order (`pi1`..`pi4`).
#[flutter_rust_bridge::frb(sync)]
pub fn column_ids() -> Vec<String> {
    ColumnId::ALL
        .iter()
        .map(|column| column.as_str().to_string())
        .collect()
}

/// Column header labels, aligned with `column_ids()`.
#[flutter_rust_bridge::frb(sync)]
pub fn column_titles() -> Vec<String> {
    ColumnId::ALL
        .iter()
        .map(|column| column.title().to_string())
        .collect()
}

/// Category labels in lane order.
#[flutter_rust_bridge::frb(sync)]
pub fn categories() -> Vec<String> {
    Category::ALL
        .iter()
        .map(|category| category.as_str().to_string())
        .collect()
}

/// Card item rendered in one board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCard {
    pub id: String,
    pub title: String,
}

/// One `(category, column)` cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    pub column_id: String,
    pub cards: Vec<BoardCard>,
}

/// One swim lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLane {
    pub category: String,
    pub columns: Vec<BoardCell>,
}

/// Editor dialog field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDraft {
    /// `None` in add mode.
    pub card_id: Option<String>,
    pub title: String,
    pub category: String,
}

/// Generic action response envelope for board events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether the event was accepted.
    pub ok: bool,
    /// Created card id for successful add-saves.
    pub card_id: Option<String>,
    /// Editor values when the event opened the dialog.
    pub draft: Option<BoardDraft>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            card_id: None,
            draft: None,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            card_id: None,
            draft: None,
            message: message.into(),
        }
    }
}

/// Opaque board handle owned by the Dart side.
///
/// FRB guards the handle, so mutation goes through `&mut self`.
#[flutter_rust_bridge::frb(opaque)]
pub struct RoadmapBoard {
    session: RoadmapSession,
}

impl RoadmapBoard {
    /// Board preloaded with the initial roadmap cards.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new_seeded() -> RoadmapBoard {
        RoadmapBoard {
            session: RoadmapSession::seeded(),
        }
    }

    /// Board without cards.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new_empty() -> RoadmapBoard {
        RoadmapBoard {
            session: RoadmapSession::default(),
        }
    }

    /// Current category x column projection.
    ///
    /// Returns an empty list if the projection cannot be built.
    #[flutter_rust_bridge::frb(sync)]
    pub fn project(&self) -> Vec<BoardLane> {
        match self.session.project() {
            Ok(grid) => grid
                .lanes()
                .iter()
                .map(|lane| BoardLane {
                    category: lane.category.as_str().to_string(),
                    columns: lane
                        .columns
                        .iter()
                        .map(|cell| BoardCell {
                            column_id: cell.column_id.as_str().to_string(),
                            cards: cell
                                .cards
                                .iter()
                                .map(|card| BoardCard {
                                    id: card.id.to_string(),
                                    title: card.title.clone(),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
            Err(err) => {
                warn!("event=board_project module=ffi status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Current editor field values.
    #[flutter_rust_bridge::frb(sync)]
    pub fn editor_draft(&self) -> Option<BoardDraft> {
        self.session.current_draft().ok().map(to_board_draft)
    }

    /// Drag completion onto `(target_column_id, target_category)`.
    #[flutter_rust_bridge::frb(sync)]
    pub fn drop_card(
        &mut self,
        card_id: String,
        target_column_id: String,
        target_category: String,
    ) -> BoardActionResponse {
        let event = parse_card_id(card_id).and_then(|card_id| {
            Ok(RoadmapEvent::CardDropped {
                card_id,
                target_column: parse_column(&target_column_id)?,
                target_category: parse_category(&target_category)?,
            })
        });
        self.dispatch("drop_card", event)
    }

    /// Add button clicked in one cell.
    #[flutter_rust_bridge::frb(sync)]
    pub fn request_add(&mut self, column_id: String, category: String) -> BoardActionResponse {
        let event = parse_column(&column_id).and_then(|column_id| {
            Ok(RoadmapEvent::AddRequested {
                column_id,
                category: parse_category(&category)?,
            })
        });
        self.dispatch("request_add", event)
    }

    /// Card clicked for editing.
    #[flutter_rust_bridge::frb(sync)]
    pub fn request_edit(&mut self, card_id: String) -> BoardActionResponse {
        let event = parse_card_id(card_id).map(|card_id| RoadmapEvent::EditRequested { card_id });
        self.dispatch("request_edit", event)
    }

    /// Dialog save; `card_id` is `None` in add mode.
    #[flutter_rust_bridge::frb(sync)]
    pub fn save_dialog(
        &mut self,
        card_id: Option<String>,
        title: String,
        category: String,
    ) -> BoardActionResponse {
        let event = card_id
            .map(parse_card_id)
            .transpose()
            .and_then(|card_id| {
                Ok(RoadmapEvent::DialogSaved {
                    card_id,
                    title,
                    category: parse_category(&category)?,
                })
            });
        self.dispatch("save_dialog", event)
    }

    /// Dialog delete button.
    #[flutter_rust_bridge::frb(sync)]
    pub fn delete_card(&mut self, card_id: String) -> BoardActionResponse {
        let event = parse_card_id(card_id).map(|card_id| RoadmapEvent::DialogDeleted { card_id });
        self.dispatch("delete_card", event)
    }

    /// Dialog dismissed without saving.
    #[flutter_rust_bridge::frb(sync)]
    pub fn close_dialog(&mut self) -> BoardActionResponse {
        self.dispatch("close_dialog", Ok(RoadmapEvent::DialogClosed))
    }

    fn dispatch(
        &mut self,
        action: &str,
        event: Result<RoadmapEvent, String>,
    ) -> BoardActionResponse {
        let event = match event {
            Ok(event) => event,
            Err(err) => return BoardActionResponse::failure(format!("{action} failed: {err}")),
        };
        to_response(action, self.session.apply(event))
    }
}

fn to_response(action: &str, outcome: StoreResult<EventOutcome>) -> BoardActionResponse {
    match outcome {
        Ok(EventOutcome::Applied) => BoardActionResponse::success("Board updated."),
        Ok(EventOutcome::Created(card_id)) => BoardActionResponse {
            card_id: Some(card_id.to_string()),
            ..BoardActionResponse::success("Card created.")
        },
        Ok(EventOutcome::EditorOpened(draft)) => BoardActionResponse {
            draft: Some(to_board_draft(draft)),
            ..BoardActionResponse::success("Editor opened.")
        },
        Ok(EventOutcome::Ignored) => BoardActionResponse::success("No change."),
        Ok(EventOutcome::Rejected(err)) => {
            BoardActionResponse::failure(format!("{action} rejected: {err}"))
        }
        Err(err) => BoardActionResponse::failure(format!("{action} failed: {err}")),
    }
}

fn to_board_draft(draft: EditorDraft) -> BoardDraft {
    BoardDraft {
        card_id: draft.card_id.map(|id| id.to_string()),
        title: draft.title,
        category: draft.category.as_str().to_string(),
    }
}

fn parse_card_id(value: String) -> Result<CardId, String> {
    CardId::parse(value).map_err(|err| err.to_string())
}

fn parse_column(value: &str) -> Result<ColumnId, String> {
    ColumnId::parse(value).map_err(|err| err.to_string())
}

fn parse_category(value: &str) -> Result<Category, String> {
    Category::parse(value).map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use super::{categories, column_ids, column_titles, core_version, init_logging, ping};
    use super::RoadmapBoard;

    fn cell_titles(board: &RoadmapBoard, category: &str, column_id: &str) -> Vec<String> {
        board
            .project()
            .into_iter()
            .find(|lane| lane.category == category)
            .and_then(|lane| lane.columns.into_iter().find(|cell| cell.column_id == column_id))
            .map(|cell| cell.cards.into_iter().map(|card| card.title).collect())
            .unwrap_or_default()
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn header_lists_follow_board_order() {
        assert_eq!(column_ids(), ["pi1", "pi2", "pi3", "pi4"]);
        assert_eq!(column_titles()[0], "PI 1 2026");
        assert_eq!(categories().len(), 5);
        assert_eq!(categories()[3], "Tech Debt");
    }

    #[test]
    fn drop_card_moves_between_cells() {
        let mut board = RoadmapBoard::new_seeded();

        let response = board.drop_card(
            "card-4".to_string(),
            "pi3".to_string(),
            "Pension Support".to_string(),
        );

        assert!(response.ok, "{}", response.message);
        assert!(cell_titles(&board, "Tech Debt", "pi1").is_empty());
        assert!(cell_titles(&board, "Pension Support", "pi3")
            .contains(&"Payroll Files Historical Source of Data".to_string()));
    }

    #[test]
    fn unknown_category_is_reported_and_ignored() {
        let mut board = RoadmapBoard::new_seeded();
        let before = board.project();

        let response = board.drop_card(
            "card-4".to_string(),
            "pi3".to_string(),
            "Marketing".to_string(),
        );

        assert!(!response.ok);
        assert!(response.message.contains("unknown category"));
        assert_eq!(board.project(), before);
    }

    #[test]
    fn add_flow_returns_created_card_id() {
        let mut board = RoadmapBoard::new_empty();

        let opened = board.request_add("pi2".to_string(), "Small Enhancements".to_string());
        assert!(opened.ok, "{}", opened.message);
        let draft = opened.draft.expect("add should open editor");
        assert_eq!(draft.card_id, None);
        assert_eq!(draft.category, "Small Enhancements");

        let saved = board.save_dialog(None, "New item".to_string(), draft.category);
        assert!(saved.ok, "{}", saved.message);
        assert!(saved.card_id.is_some());
        assert_eq!(
            cell_titles(&board, "Small Enhancements", "pi2"),
            ["New item"]
        );
    }

    #[test]
    fn blank_title_save_is_rejected() {
        let mut board = RoadmapBoard::new_seeded();
        board.request_edit("card-1".to_string());

        let response = board.save_dialog(
            Some("card-1".to_string()),
            "   ".to_string(),
            "Payroll Data Foundation".to_string(),
        );

        assert!(!response.ok);
        assert!(response.message.contains("title"));
        assert_eq!(
            board.editor_draft().and_then(|draft| draft.card_id),
            Some("card-1".to_string())
        );
    }

    #[test]
    fn delete_card_removes_it_from_projection() {
        let mut board = RoadmapBoard::new_seeded();

        let response = board.delete_card("card-2".to_string());

        assert!(response.ok, "{}", response.message);
        assert!(!cell_titles(&board, "Deduction Code Configuration", "pi1")
            .contains(&"Attribute Expansion".to_string()));
    }
}
