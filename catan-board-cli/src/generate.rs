//! Generate command - write a shuffled standard board
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_records(), write_records()
//! - Level 3: (delegated to catan-board-core layout)

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use catan_board_core::{standard_layout, TileRecord};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct GenerateArgs {
    /// Random seed (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file; prints to stdout if omitted
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Generating standard board with seed {}", seed);

    let records = build_records(seed);
    write_records(&records, args.output.as_ref())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_records(seed: u64) -> Vec<TileRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    standard_layout(&mut rng)
}

fn write_records(records: &[TileRecord], output: Option<&PathBuf>) -> Result<()> {
    let content = serde_json::to_string_pretty(records)?;
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} tiles to {}", records.len(), path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_records_is_seeded() {
        assert_eq!(build_records(99), build_records(99));
        assert_eq!(build_records(99).len(), 37);
    }
}
