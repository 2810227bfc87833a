//! Command-line definitions for the `bridgehand` binary.

use bridgehand_engine::board::Seat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "bridgehand",
    version,
    about = "Deal contract bridge boards and evaluate hands"
)]
pub struct BridgehandCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deal one or more boards and show each hand with its point count
    Deal {
        /// RNG seed (defaults to config, then OS randomness)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of boards to deal
        #[arg(long)]
        boards: Option<u32>,
        /// Number of the first board
        #[arg(long)]
        start: Option<u32>,
        /// Print one JSON record per board instead of diagrams
        #[arg(long)]
        json: bool,
        /// Also write the boards to this JSONL file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Evaluate a hand given in S.H.D.C notation, e.g. AKQJT...98765432
    Eval {
        /// Hand notation; use `-` or nothing between dots for a void
        hand: String,
    },
    /// Deal boards until a seat holds a suit of at least the given biddability
    Hunt {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum)]
        seat: Option<SeatArg>,
        #[arg(long, default_value_t = 3)]
        min_biddable: u8,
        /// Give up after this many boards (defaults to config)
        #[arg(long)]
        max_boards: Option<u32>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}

/// Seat names accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeatArg {
    North,
    East,
    South,
    West,
}

impl From<SeatArg> for Seat {
    fn from(arg: SeatArg) -> Self {
        match arg {
            SeatArg::North => Seat::North,
            SeatArg::East => Seat::East,
            SeatArg::South => Seat::South,
            SeatArg::West => Seat::West,
        }
    }
}
