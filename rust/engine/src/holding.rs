//! Single-suit evaluation.
//!
//! A [`SuitStats`] is computed once from the ranks a hand holds in one suit,
//! best first. [`Holding`] is the read-only view a [`crate::hand::Hand`]
//! hands out: the suit, its cards, and the precomputed statistics.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};

/// Shortest holding considered for solidity and biddability.
const LONG_SUIT: usize = 4;

#[derive(Debug, Clone, Copy)]
enum Length {
    Any,
    AtLeast(usize),
    Exactly(usize),
}

impl Length {
    fn admits(self, len: usize) -> bool {
        match self {
            Length::Any => true,
            Length::AtLeast(n) => len >= n,
            Length::Exactly(n) => len == n,
        }
    }
}

/// One row of the solidity table.
#[derive(Debug)]
struct SolidPattern {
    /// Exact ranks the holding must start with.
    head: &'static [Rank],
    length: Length,
    /// Minimum rank at a position, if any.
    floor: Option<(usize, Rank)>,
}

impl SolidPattern {
    fn matches(&self, ranks: &[Rank]) -> bool {
        if !ranks.starts_with(self.head) || !self.length.admits(ranks.len()) {
            return false;
        }
        match self.floor {
            Some((i, min)) => ranks.get(i).is_some_and(|&r| r >= min),
            None => true,
        }
    }
}

// Holdings that lose no trick to any split of the outstanding cards.
// AKQ with seven cards, or six headed by AKQ and the Ten, is not listed.
const SOLID_PATTERNS: [SolidPattern; 5] = [
    SolidPattern {
        head: &[Rank::Ace],
        length: Length::AtLeast(11),
        floor: None,
    },
    SolidPattern {
        head: &[Rank::Ace],
        length: Length::Exactly(10),
        floor: Some((1, Rank::Queen)),
    },
    SolidPattern {
        head: &[Rank::Ace, Rank::King],
        length: Length::Exactly(9),
        floor: None,
    },
    SolidPattern {
        head: &[Rank::Ace, Rank::King],
        length: Length::Exactly(8),
        floor: Some((2, Rank::Jack)),
    },
    SolidPattern {
        head: &[Rank::Ace, Rank::King, Rank::Queen, Rank::Jack],
        length: Length::Any,
        floor: None,
    },
];

// Quick tricks from top-honor combinations, in half tricks. First match wins.
const QUICK_TRICKS: [(&[Rank], u8); 5] = [
    (&[Rank::Ace, Rank::King], 4),
    (&[Rank::Ace, Rank::Queen, Rank::Jack], 4),
    (&[Rank::Ace], 2),
    (&[Rank::King, Rank::Queen, Rank::Jack], 3),
    (&[Rank::King], 2),
];

/// Top honors tried, in order, when testing for semi-solidity.
const TOP_SEQUENCE: [Rank; 4] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack];

/// True if the holding (ranks best first) is a solid suit.
///
/// Holdings shorter than four cards are never solid.
pub fn is_solid(ranks: &[Rank]) -> bool {
    ranks.len() >= LONG_SUIT && SOLID_PATTERNS.iter().any(|p| p.matches(ranks))
}

/// True if replacing the lowest card with the highest missing top honor
/// would make the holding solid. Works on a copy of `ranks`.
pub fn is_semi_solid(ranks: &[Rank]) -> bool {
    if ranks.len() < LONG_SUIT {
        return false;
    }
    let missing = TOP_SEQUENCE
        .iter()
        .enumerate()
        .find(|&(i, honor)| ranks.get(i) != Some(honor))
        .map(|(_, &honor)| honor);
    let Some(missing) = missing else {
        return false;
    };

    let mut hypothetical = ranks.to_vec();
    if let Some(lowest) = hypothetical.last_mut() {
        *lowest = missing;
    }
    hypothetical.sort_unstable_by(|a, b| b.cmp(a));
    is_solid(&hypothetical)
}

/// Quick tricks held by the top honors, in half tricks.
pub fn quick_half_tricks(ranks: &[Rank]) -> u8 {
    QUICK_TRICKS
        .iter()
        .find(|(head, _)| ranks.starts_with(head))
        .map_or(0, |&(_, half_tricks)| half_tricks)
}

/// Length/strength score for a suit as a bid suit.
///
/// A four-card suit needs three honors or four points; any five-card suit
/// qualifies. Each card past the qualifying length adds to the score.
pub fn biddability(len: usize, hnrs: u8, hcp: u8) -> u8 {
    if len < LONG_SUIT {
        return 0;
    }
    let base = if hnrs >= 3 || hcp >= 4 {
        LONG_SUIT
    } else if len > LONG_SUIT {
        LONG_SUIT + 1
    } else {
        return 0;
    };
    match len - base {
        0 => 1,
        1 => 2,
        2 => 3,
        extra => 3 * (extra as u8 - 1),
    }
}

/// 1 for a singleton honor or a doubleton whose second card is the Jack.
pub fn unprotected_honors(ranks: &[Rank]) -> u8 {
    match ranks {
        [r] if r.is_honor() => 1,
        [_, Rank::Jack] => 1,
        _ => 0,
    }
}

/// Evaluation of one suit of a hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitStats {
    pub length: u8,
    pub hcp: u8,
    /// Jack or better.
    pub hnrs: u8,
    /// Queen or better.
    pub top_hnrs: u8,
    pub solid: bool,
    pub semi_solid: bool,
    pub hnr_half_tricks: u8,
    pub biddable: u8,
    pub unprotected_hnrs: u8,
}

impl SuitStats {
    /// Evaluates a holding given its ranks in any order.
    pub fn evaluate(ranks: &[Rank]) -> Self {
        let mut ranks = ranks.to_vec();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        let ranks = ranks.as_slice();

        let (mut hcp, mut hnrs, mut top_hnrs) = (0u8, 0u8, 0u8);
        for &r in ranks {
            hcp += r.hcp();
            hnrs += u8::from(r.is_honor());
            top_hnrs += u8::from(r.is_top_honor());
        }
        let solid = is_solid(ranks);
        let semi_solid = !solid && is_semi_solid(ranks);

        Self {
            length: ranks.len() as u8,
            hcp,
            hnrs,
            top_hnrs,
            solid,
            semi_solid,
            hnr_half_tricks: quick_half_tricks(ranks),
            biddable: biddability(ranks.len(), hnrs, hcp),
            unprotected_hnrs: unprotected_honors(ranks),
        }
    }

    /// Quick tricks: 0, 1, 1.5 or 2.
    pub fn hnr_tricks(&self) -> f32 {
        f32::from(self.hnr_half_tricks) / 2.0
    }

    /// This suit's share of the hand's bidding point count.
    pub fn contribution(&self) -> i32 {
        i32::from(self.hcp) + i32::from(self.biddable) - i32::from(self.unprotected_hnrs)
    }
}

/// Borrowed view of one suit of a hand.
#[derive(Debug, Clone, Copy)]
pub struct Holding<'a> {
    suit: Suit,
    cards: &'a [Card],
    stats: &'a SuitStats,
}

impl<'a> Holding<'a> {
    pub(crate) fn new(suit: Suit, cards: &'a [Card], stats: &'a SuitStats) -> Self {
        Self { suit, cards, stats }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Cards best first.
    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn ranks(&self) -> impl Iterator<Item = Rank> + 'a {
        self.cards.iter().map(|c| c.rank())
    }

    /// Rank symbols best to worst, e.g. `"AKT52"`; empty for a void.
    pub fn rank_symbols(&self) -> String {
        self.ranks().map(Rank::to_char).collect()
    }

    pub fn stats(&self) -> &'a SuitStats {
        self.stats
    }
}
