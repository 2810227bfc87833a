use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::board::{Board, DealtBoard, Seat};
use crate::cards::{full_deck, Card, CARDS_PER_DECK};
use crate::errors::EngineError;
use crate::hand::{Hand, CARDS_PER_HAND};

/// Number of recipients a bridge deal is split between.
pub const SEATS_PER_DEAL: usize = 4;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    seed: u64,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Creates a deck seeded from OS randomness.
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep id order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            seed,
            rng,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Restores all 52 cards and permutes them uniformly.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        tracing::debug!(seed = self.seed, "deck shuffled");
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Splits the deck, in its current order, into consecutive runs of 13
    /// cards, one per seat in the order given. The deck is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPartition`] unless there are exactly four
    /// seats and a full deck; the deck is untouched in that case.
    pub fn deal(&mut self, seats: &[Seat]) -> Result<Vec<(Seat, Vec<Card>)>, EngineError> {
        let cards = self.cards.len();
        let per_seat = CARDS_PER_HAND;
        if seats.len() != SEATS_PER_DEAL
            || cards != CARDS_PER_DECK as usize
            || cards % per_seat != 0
            || seats.len() * per_seat > cards
        {
            return Err(EngineError::InvalidPartition {
                cards,
                recipients: seats.len(),
            });
        }

        let mut drained = self.cards.drain(..);
        let dealt: Vec<(Seat, Vec<Card>)> = seats
            .iter()
            .map(|&seat| (seat, drained.by_ref().take(per_seat).collect::<Vec<_>>()))
            .collect();
        drop(drained);
        tracing::debug!(seed = self.seed, seats = seats.len(), "deck dealt");
        Ok(dealt)
    }

    /// Deals and builds one [`Hand`] per seat.
    pub fn deal_hands(&mut self, seats: &[Seat]) -> Result<Vec<(Seat, Hand)>, EngineError> {
        self.deal(seats)?
            .into_iter()
            .map(|(seat, cards)| Hand::new(cards).map(|hand| (seat, hand)))
            .collect()
    }

    /// Shuffles and deals board `number` to all four seats.
    pub fn deal_board(&mut self, number: u32) -> Result<DealtBoard, EngineError> {
        let board = Board::new(number)?;
        self.shuffle();
        let hands = self.deal_hands(&Seat::ALL)?;
        DealtBoard::new(board, hands)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_is_in_id_order() {
        let deck = Deck::new_with_seed(3);
        let ids: Vec<u8> = deck.cards().iter().map(|c| c.id()).collect();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }

    #[test]
    fn deal_assigns_consecutive_runs() {
        let mut deck = Deck::new_with_seed(9);
        deck.shuffle();
        let order = deck.cards().to_vec();
        let dealt = deck.deal(&Seat::ALL).unwrap();
        for (i, (seat, cards)) in dealt.iter().enumerate() {
            assert_eq!(*seat, Seat::ALL[i]);
            assert_eq!(cards.as_slice(), &order[i * 13..(i + 1) * 13]);
        }
        assert!(deck.is_empty());
    }

    #[test]
    fn deal_rejects_wrong_seat_count() {
        let mut deck = Deck::new_with_seed(1);
        let err = deck.deal(&Seat::ALL[..3]).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPartition {
                cards: 52,
                recipients: 3
            }
        );
        assert_eq!(deck.len(), 52);
    }

    #[test]
    fn deal_rejects_empty_deck() {
        let mut deck = Deck::new_with_seed(1);
        deck.deal(&Seat::ALL).unwrap();
        let err = deck.deal(&Seat::ALL).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidPartition {
                cards: 0,
                recipients: 4
            }
        );
    }

    #[test]
    fn deal_board_numbers_the_board() {
        let mut deck = Deck::new_with_seed(5);
        let db = deck.deal_board(6).unwrap();
        assert_eq!(db.board.number(), 6);
        assert_eq!(db.board.dealer(), Seat::North);
        let hcp: u32 = Seat::ALL.iter().map(|&s| u32::from(db.hand(s).hcp())).sum();
        assert_eq!(hcp, 40);
        assert_eq!(deck.deal_board(0).unwrap_err(), EngineError::InvalidBoardNumber(0));
        // rejected before shuffling
        assert!(deck.is_empty());
    }

    #[test]
    fn shuffle_refills_after_deal() {
        let mut deck = Deck::new_with_seed(5);
        deck.shuffle();
        deck.deal(&Seat::ALL).unwrap();
        deck.shuffle();
        assert_eq!(deck.len(), 52);
    }
}
