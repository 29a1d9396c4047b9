//! Inspect command - summarise a board file
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: summarise(), report()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use catan_board_core::{Board, HexCoordinate, Tile};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct InspectArgs {
    /// Board JSON file (array of tile records)
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// One line of the summary
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TileSummary {
    coordinates: HexCoordinate,
    tile_type: &'static str,
    number: Option<i32>,
    num_dots: i32,
    has_robber: bool,
    robbable: bool,
    port: Option<&'static str>,
}

impl From<&Tile> for TileSummary {
    fn from(tile: &Tile) -> Self {
        Self {
            coordinates: tile.coordinates(),
            tile_type: tile.tile_type().as_str(),
            number: tile.number(),
            num_dots: tile.num_dots(),
            has_robber: tile.has_robber(),
            robbable: tile.is_robbable(),
            port: tile.port().map(|p| p.kind.as_str()),
        }
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run inspect command
pub fn run(args: InspectArgs) -> Result<()> {
    let board = Board::load(&args.board)?;
    let summary = summarise(&board);
    report(&summary, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn summarise(board: &Board) -> Vec<TileSummary> {
    board.tiles().iter().map(TileSummary::from).collect()
}

fn report(summary: &[TileSummary], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!(
        "{:<16} {:<7} {:>3} {:>4} {:<6} {:<8} PORT",
        "HEX", "TYPE", "NUM", "DOTS", "ROBBER", "ROBBABLE"
    );
    for line in summary {
        println!("{}", format_line(line));
    }
    let robbable = summary.iter().filter(|s| s.robbable).count();
    println!("{} tiles, {} robbable", summary.len(), robbable);
    Ok(())
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn format_coordinate(h: HexCoordinate) -> String {
    format!("({},{},{})", h.x, h.y, h.z)
}

fn format_line(s: &TileSummary) -> String {
    format!(
        "{:<16} {:<7} {:>3} {:>4} {:<6} {:<8} {}",
        format_coordinate(s.coordinates),
        s.tile_type,
        s.number.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string()),
        s.num_dots,
        if s.has_robber { "yes" } else { "" },
        if s.robbable { "yes" } else { "" },
        s.port.unwrap_or("-"),
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catan_board_core::TileType;

    #[test]
    fn test_format_line() {
        let tile = Tile::new(HexCoordinate::new(1.0, -1.0, 0.0), TileType::Ore, Some(8), false, None);
        let line = format_line(&TileSummary::from(&tile));
        assert!(line.starts_with("(1,-1,0)"));
        assert!(line.contains("ORE"));
        assert!(line.ends_with('-'));
    }

    #[test]
    fn test_summary_of_sea() {
        let tile = Tile::new(HexCoordinate::new(3.0, -3.0, 0.0), TileType::Sea, None, false, None);
        let s = TileSummary::from(&tile);
        assert_eq!(s.num_dots, 0);
        assert!(!s.robbable);
    }
}
