use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::EngineError;
use crate::hand::{Hand, CARDS_PER_HAND};

/// Table seat, in the order boards rotate the deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Seat {
    #[default]
    South,
    West,
    North,
    East,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::South, Seat::West, Seat::North, Seat::East];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Seat at `i mod 4`.
    pub fn from_index(i: usize) -> Self {
        Seat::ALL[i % Seat::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            Seat::South => "South",
            Seat::West => "West",
            Seat::North => "North",
            Seat::East => "East",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NorthSouth,
    EastWest,
    Both,
}

/// Vulnerability by `board number mod 16`.
const VULNERABILITY_CYCLE: [Vulnerability; 16] = [
    V::None,
    V::NorthSouth,
    V::EastWest,
    V::Both,
    V::NorthSouth,
    V::EastWest,
    V::Both,
    V::None,
    V::EastWest,
    V::Both,
    V::None,
    V::NorthSouth,
    V::Both,
    V::None,
    V::NorthSouth,
    V::EastWest,
];

type V = Vulnerability;

impl Vulnerability {
    pub fn from_board_number(number: u32) -> Self {
        VULNERABILITY_CYCLE[(number % 16) as usize]
    }

    pub fn label(self) -> &'static str {
        match self {
            Vulnerability::None => "None",
            Vulnerability::NorthSouth => "N/S",
            Vulnerability::EastWest => "E/W",
            Vulnerability::Both => "Both",
        }
    }

    pub fn is_vulnerable(self, seat: Seat) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::NorthSouth => matches!(seat, Seat::North | Seat::South),
            Vulnerability::EastWest => matches!(seat, Seat::East | Seat::West),
            Vulnerability::Both => true,
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Board metadata: number, dealer and vulnerability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    number: u32,
    dealer: Seat,
    vulnerability: Vulnerability,
}

impl Board {
    /// Board with the dealer taken from `number mod 4`.
    pub fn new(number: u32) -> Result<Self, EngineError> {
        Self::with_dealer(number, Seat::from_index(number as usize))
    }

    pub fn with_dealer(number: u32, dealer: Seat) -> Result<Self, EngineError> {
        if number == 0 {
            return Err(EngineError::InvalidBoardNumber(number));
        }
        Ok(Self {
            number,
            dealer,
            vulnerability: Vulnerability::from_board_number(number),
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn vulnerability(&self) -> Vulnerability {
        self.vulnerability
    }
}

/// A board together with the hand dealt to each seat.
#[derive(Debug, Clone)]
pub struct DealtBoard {
    pub board: Board,
    /// Indexed by [`Seat::index`].
    pub hands: [Hand; 4],
}

impl DealtBoard {
    /// Pairs a board with one hand per seat, in any seat order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPartition`] unless every seat appears
    /// exactly once.
    pub fn new(board: Board, dealt: Vec<(Seat, Hand)>) -> Result<Self, EngineError> {
        let recipients = dealt.len();
        let mut slots: [Option<Hand>; 4] = Default::default();
        for (seat, hand) in dealt {
            if slots[seat.index()].replace(hand).is_some() {
                return Err(EngineError::InvalidPartition {
                    cards: recipients * CARDS_PER_HAND,
                    recipients,
                });
            }
        }
        let [s, w, n, e] = slots;
        match (s, w, n, e) {
            (Some(s), Some(w), Some(n), Some(e)) => Ok(Self {
                board,
                hands: [s, w, n, e],
            }),
            _ => Err(EngineError::InvalidPartition {
                cards: recipients * CARDS_PER_HAND,
                recipients,
            }),
        }
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn dealer_rotates_with_board_number() {
        assert_eq!(Board::new(1).unwrap().dealer(), Seat::West);
        assert_eq!(Board::new(2).unwrap().dealer(), Seat::North);
        assert_eq!(Board::new(3).unwrap().dealer(), Seat::East);
        assert_eq!(Board::new(4).unwrap().dealer(), Seat::South);
        assert_eq!(Board::new(5).unwrap().dealer(), Seat::West);
    }

    #[test]
    fn dealer_override() {
        let b = Board::with_dealer(1, Seat::North).unwrap();
        assert_eq!(b.dealer(), Seat::North);
        assert_eq!(b.vulnerability(), Vulnerability::NorthSouth);
    }

    #[test]
    fn vulnerability_cycles_every_sixteen() {
        assert_eq!(Vulnerability::from_board_number(16), Vulnerability::None);
        assert_eq!(Vulnerability::from_board_number(3), Vulnerability::Both);
        assert_eq!(Vulnerability::from_board_number(7), Vulnerability::None);
        for n in 1..=16 {
            assert_eq!(
                Vulnerability::from_board_number(n),
                Vulnerability::from_board_number(n + 16)
            );
        }
    }

    #[test]
    fn board_zero_is_rejected() {
        assert_eq!(Board::new(0), Err(EngineError::InvalidBoardNumber(0)));
    }

    #[test]
    fn vulnerable_seats() {
        assert!(Vulnerability::NorthSouth.is_vulnerable(Seat::South));
        assert!(!Vulnerability::NorthSouth.is_vulnerable(Seat::West));
        assert!(Vulnerability::Both.is_vulnerable(Seat::East));
        assert!(!Vulnerability::None.is_vulnerable(Seat::North));
    }

    #[test]
    fn dealt_board_indexes_by_seat() {
        let mut deck = Deck::new_with_seed(11);
        deck.shuffle();
        let mut dealt = deck.deal_hands(&Seat::ALL).unwrap();
        dealt.reverse();
        let north = dealt
            .iter()
            .find(|(s, _)| *s == Seat::North)
            .map(|(_, h)| h.clone())
            .unwrap();
        let db = DealtBoard::new(Board::new(1).unwrap(), dealt).unwrap();
        assert_eq!(db.hand(Seat::North), &north);
    }

    #[test]
    fn dealt_board_rejects_missing_seat() {
        let mut deck = Deck::new_with_seed(11);
        deck.shuffle();
        let mut dealt = deck.deal_hands(&Seat::ALL).unwrap();
        dealt.pop();
        assert!(DealtBoard::new(Board::new(1).unwrap(), dealt).is_err());
    }
}
