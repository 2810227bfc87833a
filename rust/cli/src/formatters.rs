//! Board diagram and suit table formatters for terminal display.
//!
//! Pure functions from engine types to strings. Suit symbols use Unicode with
//! an ASCII letter fallback for terminals that can't render them.
//!
//! ## Example
//!
//! ```rust
//! use bridgehand_engine::cards::Suit;
//! use bridgehand_engine::hand::Hand;
//! use bridgehand_cli::formatters::format_holding;
//!
//! let hand: Hand = "AKQJT...98765432".parse().unwrap();
//! let spades = format_holding(&hand.holding(Suit::Spades));
//! assert!(spades == "♠ AKQJT" || spades == "S AKQJT");
//! assert!(format_holding(&hand.holding(Suit::Hearts)).ends_with(" -"));
//! ```

use bridgehand_engine::board::{DealtBoard, Seat};
use bridgehand_engine::cards::Suit;
use bridgehand_engine::hand::Hand;
use bridgehand_engine::holding::Holding;

/// Width of the West column in a board diagram; North and South are
/// indented by half of it.
const COLUMN: usize = 30;

/// Check if the terminal supports Unicode suit symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Suit symbol: ♠ ♥ ♦ ♣, or S H D C without Unicode.
pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
        .to_string()
    } else {
        suit.to_char().to_string()
    }
}

/// One suit as `"♠ AKT52"`; a void shows as `"♠ -"`.
pub fn format_holding(holding: &Holding<'_>) -> String {
    let ranks = if holding.is_empty() {
        "-".to_string()
    } else {
        holding.rank_symbols()
    };
    format!("{} {}", format_suit(holding.suit()), ranks)
}

fn seat_block(dealt: &DealtBoard, seat: Seat) -> Vec<String> {
    let hand = dealt.hand(seat);
    let mut marks = String::new();
    if dealt.board.dealer() == seat {
        marks.push_str(" (D)");
    }
    if dealt.board.vulnerability().is_vulnerable(seat) {
        marks.push_str(" vul");
    }
    let mut lines = vec![format!(
        "{}{}  HCP {} BPC {}",
        seat,
        marks,
        hand.hcp(),
        hand.bpc()
    )];
    lines.extend(hand.holdings().map(|h| format_holding(&h)));
    lines
}

/// Classic four-hand diagram: North on top, West and East side by side,
/// South at the bottom. Ends with a blank line.
pub fn format_dealt_board(dealt: &DealtBoard) -> String {
    let board = &dealt.board;
    let indent = " ".repeat(COLUMN / 2);
    let mut out = format!(
        "Board {}  Dealer: {}  Vul: {}\n",
        board.number(),
        board.dealer(),
        board.vulnerability()
    );

    for line in seat_block(dealt, Seat::North) {
        out.push_str(&format!("{}{}\n", indent, line));
    }
    let west = seat_block(dealt, Seat::West);
    let east = seat_block(dealt, Seat::East);
    for (w, e) in west.iter().zip(east.iter()) {
        let pad = COLUMN.saturating_sub(w.chars().count());
        out.push_str(&format!("{}{}{}\n", w, " ".repeat(pad), e));
    }
    for line in seat_block(dealt, Seat::South) {
        out.push_str(&format!("{}{}\n", indent, line));
    }
    out.push('\n');
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Per-suit statistics of a hand, one row per suit in display order,
/// followed by a totals line.
pub fn format_stats_table(hand: &Hand) -> String {
    let mut out = format!(
        "{:<4} {:<13} {:>3} {:>3} {:>4} {:>3} {:>5} {:>4} {:>4} {:>3} {:>3}\n",
        "Suit", "Cards", "Len", "HCP", "Hnrs", "Top", "Solid", "Semi", "QT", "Bid", "Unp"
    );
    for holding in hand.holdings() {
        let s = holding.stats();
        let cards = if holding.is_empty() {
            "-".to_string()
        } else {
            holding.rank_symbols()
        };
        out.push_str(&format!(
            "{:<4} {:<13} {:>3} {:>3} {:>4} {:>3} {:>5} {:>4} {:>4.1} {:>3} {:>3}\n",
            format_suit(holding.suit()),
            cards,
            s.length,
            s.hcp,
            s.hnrs,
            s.top_hnrs,
            yes_no(s.solid),
            yes_no(s.semi_solid),
            s.hnr_tricks(),
            s.biddable,
            s.unprotected_hnrs
        ));
    }
    out.push_str(&format!("HCP {}  BPC {}\n", hand.hcp(), hand.bpc()));
    out
}
