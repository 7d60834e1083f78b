//! Playing-card decks and hands with optional `no_std` support.
//!
//! A [`Deck`] and a [`Hand`] are generic over a [`Variant`] marker
//! ([`War`], [`Belote`], [`SixtySix`]) that fixes the rank set, the rank order,
//! the full deck size and the hand size. Variant-specific rules live on the
//! concrete hand types: [`WarHand`] plays cards, [`BeloteHand`] checks
//! declarations, [`SixtySixHand`] checks marriages.
//!
//! # Example
//!
//! ```
//! use decks::{BeloteDeck, Suit};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = BeloteDeck::new();
//! deck.shuffle(&mut rng);
//!
//! let hand = deck.deal().unwrap();
//! assert_eq!(hand.size(), 8);
//! assert_eq!(deck.size(), 24);
//! let _ = hand.highest_of_suit(Suit::Hearts);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

mod belote;
pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod rank_order;
mod sixty_six;
pub mod variant;
mod war;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use deck::{BeloteDeck, Deck, SixtySixDeck, WarDeck};
pub use error::{CardError, DealError, DeckError, ParseVariantError, PlayError};
pub use hand::{BeloteHand, Hand, SixtySixHand, WarHand};
pub use rank_order::RankOrder;
pub use variant::{Belote, SixtySix, Variant, VariantKind, War};
