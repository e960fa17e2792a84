//! Command-line and environment configuration for the `blocktris` binary.
//!
//! Every flag has an environment fallback so the game can be configured
//! without touching the command line:
//!
//! | Flag | Env | Default |
//! |------|-----|---------|
//! | `--seed` | `BLOCKTRIS_SEED` | time-based |
//! | `--drop-interval-ms` | `BLOCKTRIS_DROP_INTERVAL_MS` | 1000 |
//! | `--scoring` | `BLOCKTRIS_SCORING` | `doubling:10` |
//! | `--log-path` | `BLOCKTRIS_LOG_PATH` | none (logging off) |
//! | `--log-level` | `BLOCKTRIS_LOG_LEVEL` | `info` |

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::Level;

use crate::core::{ScoringPolicy, SessionConfig};
use crate::types::DROP_INTERVAL_MS;

/// blocktris - falling-block puzzle game for the terminal
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Seed for piece selection (random when omitted)
    #[arg(short, long, env = "BLOCKTRIS_SEED")]
    pub seed: Option<u32>,

    /// Milliseconds between forced drops
    #[arg(
        short,
        long,
        env = "BLOCKTRIS_DROP_INTERVAL_MS",
        default_value_t = DROP_INTERVAL_MS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub drop_interval_ms: u32,

    /// Line clear scoring: off, doubling, doubling:<base>, per-line:<points>
    #[arg(
        long,
        env = "BLOCKTRIS_SCORING",
        default_value = "doubling",
        value_parser = parse_scoring
    )]
    pub scoring: ScoringPolicy,

    /// Write logs to this file (stdout belongs to the game screen)
    #[arg(long, env = "BLOCKTRIS_LOG_PATH")]
    pub log_path: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, env = "BLOCKTRIS_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,
}

impl Args {
    /// Seed to use, picking one from the clock when none was given.
    pub fn resolved_seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            seed: self.resolved_seed(),
            drop_interval_ms: self.drop_interval_ms,
            scoring: self.scoring,
        }
    }
}

fn parse_scoring(s: &str) -> Result<ScoringPolicy, String> {
    ScoringPolicy::from_str(s).ok_or_else(|| {
        format!(
            "unknown scoring policy `{}` (expected off, doubling, doubling:<base> or per-line:<points>)",
            s
        )
    })
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
