//! Deal command handler.
//!
//! Shuffles and deals a run of boards from one seeded deck, printing each
//! as a four-hand diagram or as a JSON record. With `--output` the records
//! are also appended to a JSONL board history.

use super::{load_config, resolve_seed};
use crate::error::CliError;
use crate::formatters::format_dealt_board;
use bridgehand_engine::deck::Deck;
use bridgehand_engine::logger::{BoardLogger, BoardRecord, format_board_id};
use chrono::Utc;
use std::io::Write;
use std::path::PathBuf;

/// Handle the deal command.
///
/// Flags override configuration: `seed` falls back to the configured seed
/// and then to OS randomness, `boards` and `start` to the configured counts.
/// Boards are numbered consecutively from `start`. Board ids come from the
/// history logger when `output` is given, so they continue the file.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for a zero board count or start, or a
/// range past `u32::MAX`; `CliError::Io` if the history file can't be
/// written.
pub fn handle_deal_command(
    seed: Option<u64>,
    boards: Option<u32>,
    start: Option<u32>,
    json: bool,
    output: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = load_config()?;
    let seed = resolve_seed(seed, &cfg);
    let boards = boards.unwrap_or(cfg.boards);
    let start = start.unwrap_or(cfg.start_board);

    if boards == 0 {
        return Err(CliError::InvalidInput("--boards must be >0".into()));
    }
    if start == 0 {
        return Err(CliError::InvalidInput("--start must be >=1".into()));
    }
    let last = start
        .checked_add(boards - 1)
        .ok_or_else(|| CliError::InvalidInput("board numbers overflow".into()))?;

    let mut logger = output.map(BoardLogger::append).transpose()?;
    let date = Utc::now().format("%Y%m%d").to_string();
    let mut deck = Deck::new_with_seed(seed);
    tracing::info!(seed, start, boards, "dealing boards");

    for (seq, number) in (start..=last).enumerate() {
        let dealt = deck.deal_board(number)?;
        if json || logger.is_some() {
            let id = match logger.as_mut() {
                Some(logger) => logger.next_id(),
                None => format_board_id(&date, seq as u32 + 1),
            };
            let record = BoardRecord::from_dealt(id, Some(deck.seed()), &dealt);
            if let Some(logger) = logger.as_mut() {
                logger.write(&record)?;
            }
            if json {
                let line = serde_json::to_string(&record).map_err(std::io::Error::other)?;
                writeln!(out, "{}", line)?;
                continue;
            }
        }
        write!(out, "{}", format_dealt_board(&dealt))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_command_deterministic() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();

        handle_deal_command(Some(12345), Some(2), Some(1), false, None, &mut out1).unwrap();
        handle_deal_command(Some(12345), Some(2), Some(1), false, None, &mut out2).unwrap();

        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    fn test_deal_command_numbers_boards_from_start() {
        let mut out = Vec::new();
        handle_deal_command(Some(9), Some(3), Some(7), false, None, &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.contains("Board 7  Dealer: East  Vul: None"));
        assert!(s.contains("Board 8  Dealer: South  Vul: E/W"));
        assert!(s.contains("Board 9  Dealer: West  Vul: Both"));
        assert!(!s.contains("Board 10"));
    }

    #[test]
    fn test_deal_command_rejects_zero_boards() {
        let mut out = Vec::new();
        let err = handle_deal_command(Some(1), Some(0), Some(1), false, None, &mut out);
        assert!(matches!(err, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
