use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of cards in each suit.
pub const CARDS_PER_SUIT: u8 = 13;
/// Number of cards in a full deck.
pub const CARDS_PER_DECK: u8 = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Declaration order matches card identity: clubs lowest, spades highest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    /// Suits in card-identity order (0 = Clubs .. 3 = Spades).
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Order in which a hand lists and evaluates its suits.
    ///
    /// This is the only place the Spades-first convention lives; card
    /// comparison keeps the identity order above.
    pub const DISPLAY_ORDER: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Position of this suit within [`Suit::DISPLAY_ORDER`].
    pub fn display_index(self) -> usize {
        3 - self.index()
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the rank index used by card identity (Two = 0, Ace = 12).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 0,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// High-card points: Ace 4, King 3, Queen 2, Jack 1, others 0.
    pub fn hcp(self) -> u8 {
        self.index().saturating_sub(Rank::Ten.index())
    }

    /// Jack or better.
    pub fn is_honor(self) -> bool {
        self >= Rank::Jack
    }

    /// Queen or better.
    pub fn is_top_honor(self) -> bool {
        self >= Rank::Queen
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        match c.to_ascii_uppercase() {
            '2' => Some(Rank::Two),
            '3' => Some(Rank::Three),
            '4' => Some(Rank::Four),
            '5' => Some(Rank::Five),
            '6' => Some(Rank::Six),
            '7' => Some(Rank::Seven),
            '8' => Some(Rank::Eight),
            '9' => Some(Rank::Nine),
            'T' => Some(Rank::Ten),
            'J' => Some(Rank::Jack),
            'Q' => Some(Rank::Queen),
            'K' => Some(Rank::King),
            'A' => Some(Rank::Ace),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card identified by `id ∈ [0, 52)`.
///
/// `suit = id / 13` and `rank = id % 13`, so ordering by id sorts clubs
/// lowest and spades highest, and low to high within a suit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Card(u8);

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Card {
        Card(suit.index() as u8 * CARDS_PER_SUIT + rank.index())
    }

    /// Builds a card from its identity, `None` outside `[0, 52)`.
    pub fn from_id(id: u8) -> Option<Card> {
        (id < CARDS_PER_DECK).then_some(Card(id))
    }

    pub fn id(self) -> u8 {
        self.0
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / CARDS_PER_SUIT) as usize]
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % CARDS_PER_SUIT) as usize]
    }

    /// Two-character symbol: suit letter followed by rank symbol (e.g. `SA`).
    pub fn symbol(self) -> String {
        format!("{}{}", self.suit(), self.rank())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit(), self.rank())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.suit(), self.rank())
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = u8::deserialize(deserializer)?;
        Card::from_id(id)
            .ok_or_else(|| serde::de::Error::custom(format!("card id {id} out of range")))
    }
}

pub fn full_deck() -> Vec<Card> {
    (0..CARDS_PER_DECK).map(Card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_maps_to_suit_and_rank() {
        let c = Card::from_id(0).unwrap();
        assert_eq!((c.suit(), c.rank()), (Suit::Clubs, Rank::Two));

        let c = Card::from_id(12).unwrap();
        assert_eq!((c.suit(), c.rank()), (Suit::Clubs, Rank::Ace));

        let c = Card::from_id(13).unwrap();
        assert_eq!((c.suit(), c.rank()), (Suit::Diamonds, Rank::Two));

        let c = Card::from_id(51).unwrap();
        assert_eq!((c.suit(), c.rank()), (Suit::Spades, Rank::Ace));

        assert!(Card::from_id(52).is_none());
    }

    #[test]
    fn new_is_inverse_of_accessors() {
        for card in full_deck() {
            assert_eq!(Card::new(card.suit(), card.rank()), card);
        }
    }

    #[test]
    fn symbols() {
        assert_eq!(Card::new(Suit::Spades, Rank::Ace).symbol(), "SA");
        assert_eq!(Card::new(Suit::Hearts, Rank::Ten).symbol(), "HT");
        assert_eq!(Card::new(Suit::Clubs, Rank::Two).to_string(), "C2");
    }

    #[test]
    fn ordering_follows_id() {
        let c2 = Card::new(Suit::Clubs, Rank::Two);
        let ca = Card::new(Suit::Clubs, Rank::Ace);
        let d2 = Card::new(Suit::Diamonds, Rank::Two);
        let sa = Card::new(Suit::Spades, Rank::Ace);
        assert!(c2 < ca);
        assert!(ca < d2);
        assert!(d2 < sa);
    }

    #[test]
    fn rank_points() {
        assert_eq!(Rank::Ace.hcp(), 4);
        assert_eq!(Rank::King.hcp(), 3);
        assert_eq!(Rank::Queen.hcp(), 2);
        assert_eq!(Rank::Jack.hcp(), 1);
        assert_eq!(Rank::Ten.hcp(), 0);
        assert_eq!(Rank::Two.hcp(), 0);
        assert!(Rank::Jack.is_honor());
        assert!(!Rank::Ten.is_honor());
        assert!(Rank::Queen.is_top_honor());
        assert!(!Rank::Jack.is_top_honor());
    }

    #[test]
    fn display_order_is_spades_first() {
        for (i, suit) in Suit::DISPLAY_ORDER.iter().enumerate() {
            assert_eq!(suit.display_index(), i);
        }
    }

    #[test]
    fn card_serializes_as_id() {
        let c = Card::new(Suit::Hearts, Rank::King);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, c.id().to_string());
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
        assert!(serde_json::from_str::<Card>("52").is_err());
    }
}
