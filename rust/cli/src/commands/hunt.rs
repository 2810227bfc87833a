//! Hunt command handler.
//!
//! Deals boards from one seeded deck until the chosen seat holds a suit at
//! least as biddable as requested, then shows that board and the hand.

use super::{load_config, resolve_seed};
use crate::error::CliError;
use crate::formatters::{format_dealt_board, format_holding, format_stats_table};
use bridgehand_engine::board::Seat;
use bridgehand_engine::deck::Deck;
use std::io::Write;

/// Handle the hunt command.
///
/// Board numbers start at the configured `start_board`. At most
/// `max_boards` (flag, else config) boards are dealt.
///
/// # Errors
///
/// Returns `CliError::NotFound` when every board has been dealt without a
/// match, `CliError::InvalidInput` for a zero board limit.
pub fn handle_hunt_command(
    seed: Option<u64>,
    seat: Option<Seat>,
    min_biddable: u8,
    max_boards: Option<u32>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = resolve_seed(seed, &cfg);
    let seat = seat.unwrap_or(cfg.seat);
    let max_boards = max_boards.unwrap_or(cfg.max_boards);
    if max_boards == 0 {
        return Err(CliError::InvalidInput("--max-boards must be >0".into()));
    }

    let mut deck = Deck::new_with_seed(seed);
    tracing::info!(seed, %seat, min_biddable, max_boards, "hunting for a biddable suit");

    for i in 0..max_boards {
        let number = cfg.start_board.checked_add(i).ok_or_else(|| {
            CliError::InvalidInput("board numbers overflow".into())
        })?;
        let dealt = deck.deal_board(number)?;
        let hand = dealt.hand(seat);
        let Some(holding) = hand
            .holdings()
            .find(|h| h.stats().biddable >= min_biddable)
        else {
            tracing::debug!(board = number, bpc = hand.bpc(), "no match");
            continue;
        };

        writeln!(
            out,
            "Found after {} board(s) (seed {}): {} holds {} (biddable {})",
            i + 1,
            seed,
            seat,
            format_holding(&holding),
            holding.stats().biddable
        )?;
        write!(out, "{}", format_dealt_board(&dealt))?;
        write!(out, "{}", format_stats_table(hand))?;
        return Ok(());
    }

    Err(CliError::NotFound(format!(
        "no suit with biddable >= {} for {} in {} board(s) (seed {})",
        min_biddable, seat, max_boards, seed
    )))
}
