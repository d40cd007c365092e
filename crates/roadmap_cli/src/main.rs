//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roadmap_core` linkage.
//! - Print the seeded board deterministically, as text or `--json`.
//! - Reject unknown flags through clap.

use clap::Parser;
use roadmap_core::{ColumnId, LoggingConfig, RoadmapGrid, RoadmapStore};
use std::process::ExitCode;

/// Print the seeded payroll roadmap board.
#[derive(Debug, Parser)]
#[command(name = "roadmap_cli", version)]
struct Cli {
    /// Print the board projection as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env().and_then(|config| match config {
        Some(config) => roadmap_core::init_logging_with(config),
        None => Ok(()),
    });
    if let Err(err) = logging {
        eprintln!("logging disabled: {err}");
    }

    println!("roadmap_core ping={}", roadmap_core::ping());
    println!("roadmap_core version={}", roadmap_core::core_version());

    let grid = match RoadmapStore::seeded().project() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("failed to project board: {err}");
            return ExitCode::FAILURE;
        }
    };

    if cli.json {
        match render_json(&grid) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("failed to encode board: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!("{}", render_text(&grid));
    }

    ExitCode::SUCCESS
}

fn render_json(grid: &RoadmapGrid) -> serde_json::Result<String> {
    serde_json::to_string_pretty(grid)
}

fn render_text(grid: &RoadmapGrid) -> String {
    let mut out = String::new();
    for lane in grid.lanes() {
        out.push_str(&format!("\n[{}]\n", lane.category));
        for column_id in ColumnId::ALL {
            let cards = lane.cell(column_id);
            out.push_str(&format!("  {} ({})\n", column_id.title(), cards.len()));
            for card in cards {
                out.push_str(&format!("    - {} ({})\n", card.title, card.id));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{render_json, render_text, Cli};
    use clap::Parser;
    use roadmap_core::RoadmapStore;

    #[test]
    fn json_flag_is_parsed() {
        let cli = Cli::try_parse_from(["roadmap_cli", "--json"]).unwrap();
        assert!(cli.json);

        let cli = Cli::try_parse_from(["roadmap_cli"]).unwrap();
        assert!(!cli.json);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["roadmap_cli", "--jsno"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn json_rendering_lists_lanes_in_board_order() {
        let grid = RoadmapStore::seeded().project().unwrap();
        let json: serde_json::Value = serde_json::from_str(&render_json(&grid).unwrap()).unwrap();

        let lanes = json.as_array().unwrap();
        assert_eq!(lanes.len(), 5);
        assert_eq!(lanes[0]["category"], "Payroll Data Foundation");
        assert_eq!(lanes[1]["columns"][0]["id"], "pi1");
        assert_eq!(lanes[1]["columns"][0]["cards"][1]["id"], "card-3");
        assert_eq!(lanes[1]["columns"][0]["cards"][1]["title"], "UI Redesign");
    }

    #[test]
    fn text_rendering_lists_every_lane_and_column() {
        let grid = RoadmapStore::seeded().project().unwrap();
        let text = render_text(&grid);

        assert!(text.contains("[Payroll Data Foundation]"));
        assert!(text.contains("[Small Enhancements]"));
        assert_eq!(text.matches("PI 4 2026").count(), 5);
        assert!(text.contains("- UI Redesign (card-3)"));
    }

    #[test]
    fn empty_board_renders_zero_counts() {
        let grid = RoadmapStore::empty().project().unwrap();
        let text = render_text(&grid);

        assert_eq!(text.matches("(0)").count(), 20);
    }
}
