//! Eval command handler: per-suit statistics for one hand.

use crate::error::CliError;
use crate::formatters::format_stats_table;
use bridgehand_engine::hand::Hand;
use std::io::Write;

/// Parse a hand in `S.H.D.C` notation and print its suit table and BPC.
///
/// # Errors
///
/// Returns `CliError::Engine` for notation the engine rejects (wrong number
/// of suits, unknown ranks, not 13 distinct cards).
pub fn handle_eval_command(notation: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let hand: Hand = notation.parse()?;
    tracing::info!(hand = %hand, "evaluating hand");
    writeln!(out, "Hand: {}", hand)?;
    write!(out, "{}", format_stats_table(&hand))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridgehand_engine::errors::EngineError;

    #[test]
    fn test_eval_prints_table_and_bpc() {
        let mut out = Vec::new();
        handle_eval_command("AKQJT...98765432", &mut out).unwrap();
        let s = String::from_utf8(out).unwrap();
        assert!(s.starts_with("Hand: AKQJT...98765432\n"));
        assert!(s.contains("BPC 18"));
    }

    #[test]
    fn test_eval_rejects_short_hand() {
        let mut out = Vec::new();
        let err = handle_eval_command("AKQ...", &mut out).unwrap_err();
        assert!(matches!(err, CliError::Engine(EngineError::MalformedHand(_))));
        assert!(out.is_empty());
    }
}
