//! # bridgehand-engine: Contract Bridge Deal Core
//!
//! Deals four-seat bridge boards from a seeded deck and evaluates each hand
//! the way a bidder sizes it up: suit by suit, with a single Bidding Point
//! Count summarizing the whole hand.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic shuffling with ChaCha20 RNG and the four-way deal
//! - [`holding`] - Per-suit evaluation (honors, solidity, quick tricks, biddability)
//! - [`hand`] - Thirteen-card hands and the Bidding Point Count
//! - [`board`] - Seats, board numbers, dealer and vulnerability rotation
//! - [`logger`] - Board history records in JSONL
//! - [`errors`] - Error types for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use bridgehand_engine::cards::Suit;
//! use bridgehand_engine::hand::Hand;
//!
//! let hand: Hand = "AKQJT...98765432".parse().unwrap();
//! let spades = hand.holding(Suit::Spades);
//! assert!(spades.stats().solid);
//! assert_eq!(hand.bpc(), 18);
//! ```
//!
//! ## Deterministic Deals
//!
//! The same seed always produces the same four hands:
//!
//! ```rust
//! use bridgehand_engine::board::Seat;
//! use bridgehand_engine::deck::Deck;
//!
//! let mut d1 = Deck::new_with_seed(42);
//! let mut d2 = Deck::new_with_seed(42);
//! d1.shuffle();
//! d2.shuffle();
//! assert_eq!(d1.deal(&Seat::ALL).unwrap(), d2.deal(&Seat::ALL).unwrap());
//! ```

pub mod board;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod holding;
pub mod logger;
