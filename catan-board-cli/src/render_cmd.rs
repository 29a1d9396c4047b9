//! Render command - print visual state for a board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_config(), render_board(), write_output()
//! - Level 3: (delegated to catan-board-core render)
//! - Level 4: viewport validation

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use catan_board_core::{Board, RenderConfig, Viewport, VisualState};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RenderArgs {
    /// Board JSON file (array of tile records)
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Horizontal pan in pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub trans_x: f64,

    /// Vertical pan in pixels
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub trans_y: f64,

    /// Pixels per hex unit
    #[arg(long, default_value = "100")]
    pub scale: f64,

    /// Render size ratios (JSON); defaults apply to missing fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Render as if robber placement mode were active
    #[arg(long)]
    pub place_robber: bool,

    /// Output file; prints to stdout if omitted
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run render command
pub fn run(args: RenderArgs) -> Result<()> {
    let viewport = Viewport::new(args.trans_x, args.trans_y, args.scale);
    validate_viewport(&viewport)?;
    let config = load_config(args.config.as_ref())?;

    let mut board = Board::load(&args.board)?;
    if args.place_robber {
        let targets = board.enter_place_robber_mode();
        tracing::info!("Robber placement mode: {} targets", targets);
    }

    let states = render_board(&board, viewport, &config);
    write_output(&states, args.output.as_ref())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_config(path: Option<&PathBuf>) -> Result<RenderConfig> {
    match path {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("Failed to load render config {}", path.display())),
        None => Ok(RenderConfig::default()),
    }
}

fn render_board(board: &Board, viewport: Viewport, config: &RenderConfig) -> Vec<VisualState> {
    tracing::debug!(
        "Rendering {} tiles at ({}, {}) x{}",
        board.len(),
        viewport.trans_x,
        viewport.trans_y,
        viewport.scale
    );
    board.render_with(viewport, config)
}

fn write_output(states: &[VisualState], output: Option<&PathBuf>) -> Result<()> {
    let content = serde_json::to_string_pretty(states)?;
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", content),
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - VALIDATION
// ============================================================================

fn validate_viewport(viewport: &Viewport) -> Result<()> {
    if !(viewport.scale.is_finite() && viewport.scale > 0.0) {
        anyhow::bail!("Scale must be a positive number, got {}", viewport.scale);
    }
    if !viewport.trans_x.is_finite() || !viewport.trans_y.is_finite() {
        anyhow::bail!("Translation must be finite");
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
