//! Error types for deck and hand operations.

use thiserror::Error;

use crate::card::{Card, Rank};
use crate::variant::VariantKind;

/// Errors from drawing or peeking at a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("the deck is empty")]
    Empty,
}

/// Errors from dealing a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Fewer cards remain than a hand needs.
    #[error("not enough cards to deal: need {needed}, {remaining} remaining")]
    InsufficientCards {
        /// Hand size of the variant.
        needed: usize,
        /// Cards left in the deck.
        remaining: usize,
    },
}

/// Errors from playing a card out of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The hand has no cards left.
    #[error("the hand is empty")]
    EmptyHand,
}

/// Errors from building cards, decks or hands from explicit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not used by the variant.
    #[error("{rank} is not a {variant} rank")]
    InvalidCard {
        /// Offending rank.
        rank: Rank,
        /// Variant the card was built for.
        variant: VariantKind,
    },
    /// The same card appears more than once.
    #[error("duplicate card: {card}")]
    DuplicateCard {
        /// The repeated card.
        card: Card,
    },
    /// More cards than a full deck holds.
    #[error("too many cards: {count} given, a full deck has {max}")]
    TooManyCards {
        /// Cards given.
        count: usize,
        /// Full deck size of the variant.
        max: usize,
    },
}

/// Error returned when parsing an unknown variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown variant (expected war, belote or sixty-six)")]
pub struct ParseVariantError;
