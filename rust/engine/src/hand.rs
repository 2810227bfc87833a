use std::fmt;
use std::str::FromStr;

use crate::cards::{Card, Rank, Suit};
use crate::errors::{EngineError, MalformedHand};
use crate::holding::{Holding, SuitStats};

/// Cards dealt to each seat.
pub const CARDS_PER_HAND: usize = 13;

/// Thirteen cards held by one seat, sorted best first and split into suits.
///
/// Suit statistics and the bidding point count are computed once, at
/// construction. Suits are listed in [`Suit::DISPLAY_ORDER`].
///
/// # Examples
///
/// ```
/// use bridgehand_engine::hand::Hand;
///
/// let hand: Hand = "AKQJT...98765432".parse().unwrap();
/// assert_eq!(hand.distribution(), [5, 0, 0, 8]);
/// assert_eq!(hand.hcp(), 10);
/// assert_eq!(hand.bpc(), 18);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// Descending by card id, so suits form contiguous runs Spades..Clubs.
    cards: Vec<Card>,
    distribution: [u8; 4],
    stats: [SuitStats; 4],
    bpc: i32,
}

impl Hand {
    /// Builds a hand from exactly 13 distinct cards in any order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedHand`] for a wrong card count or a
    /// repeated card.
    pub fn new(mut cards: Vec<Card>) -> Result<Self, EngineError> {
        if cards.len() != CARDS_PER_HAND {
            return Err(MalformedHand::WrongCardCount { count: cards.len() }.into());
        }
        cards.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(pair) = cards.windows(2).find(|w| w[0] == w[1]) {
            return Err(MalformedHand::DuplicateCard { card: pair[0] }.into());
        }

        let mut distribution = [0u8; 4];
        for card in &cards {
            distribution[card.suit().display_index()] += 1;
        }

        let mut stats = [SuitStats::default(); 4];
        let mut start = 0;
        for (slot, &len) in stats.iter_mut().zip(distribution.iter()) {
            let end = start + len as usize;
            let ranks: Vec<Rank> = cards[start..end].iter().map(|c| c.rank()).collect();
            *slot = SuitStats::evaluate(&ranks);
            start = end;
        }
        let bpc = stats.iter().map(SuitStats::contribution).sum();

        let hand = Self {
            cards,
            distribution,
            stats,
            bpc,
        };
        tracing::debug!(hand = %hand, bpc, "hand evaluated");
        Ok(hand)
    }

    /// Cards best first: spades down to clubs, high to low within a suit.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Suit lengths in Spades, Hearts, Diamonds, Clubs order.
    pub fn distribution(&self) -> [u8; 4] {
        self.distribution
    }

    pub fn holding(&self, suit: Suit) -> Holding<'_> {
        let i = suit.display_index();
        let start: usize = self.distribution[..i].iter().map(|&n| n as usize).sum();
        let end = start + self.distribution[i] as usize;
        Holding::new(suit, &self.cards[start..end], &self.stats[i])
    }

    /// The four suits in display order.
    pub fn holdings(&self) -> impl Iterator<Item = Holding<'_>> + '_ {
        Suit::DISPLAY_ORDER.into_iter().map(|s| self.holding(s))
    }

    pub fn hcp(&self) -> u8 {
        self.stats.iter().map(|s| s.hcp).sum()
    }

    /// Bidding point count: per suit, `hcp + biddable - unprotected_hnrs`.
    pub fn bpc(&self) -> i32 {
        self.bpc
    }
}

/// `S.H.D.C` rank groups, an empty group for a void.
impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups: Vec<String> = self.holdings().map(|h| h.rank_symbols()).collect();
        write!(f, "{}", groups.join("."))
    }
}

/// Parses `S.H.D.C` notation; a void may be empty or `-`.
impl FromStr for Hand {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Vec<&str> = s.trim().split('.').collect();
        if groups.len() != Suit::DISPLAY_ORDER.len() {
            return Err(EngineError::InvalidNotation(format!(
                "expected 4 suits separated by '.', got {} in {:?}",
                groups.len(),
                s
            )));
        }

        let mut cards = Vec::with_capacity(CARDS_PER_HAND);
        for (suit, group) in Suit::DISPLAY_ORDER.into_iter().zip(groups) {
            if group == "-" {
                continue;
            }
            for c in group.chars() {
                let rank = Rank::from_char(c).ok_or_else(|| {
                    EngineError::InvalidNotation(format!("unknown rank {:?} in {:?}", c, s))
                })?;
                cards.push(Card::new(suit, rank));
            }
        }
        Hand::new(cards)
    }
}
