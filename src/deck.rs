//! Decks and dealing.

use core::fmt;
use core::marker::PhantomData;

use alloc::collections::VecDeque;
use alloc::collections::vec_deque::Iter;
use alloc::vec::Vec;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Suit};
use crate::error::{CardError, DealError, DeckError};
use crate::hand::Hand;
use crate::variant::{Belote, SixtySix, Variant, War};

/// A War deck.
pub type WarDeck = Deck<War>;
/// A Belote deck.
pub type BeloteDeck = Deck<Belote>;
/// A Sixty-Six deck.
pub type SixtySixDeck = Deck<SixtySix>;

/// An ordered deck of unique cards for variant `V`.
///
/// The first card is the top of the deck. A deck never grows: it shrinks
/// through [`Deck::draw_top`], [`Deck::draw_bottom`] and [`Deck::deal`].
///
/// ```
/// use decks::{BeloteDeck, Card, Rank, Suit};
///
/// let mut deck = BeloteDeck::new();
/// assert_eq!(deck.size(), 32);
/// assert_eq!(deck.peek_top(), Ok(&Card::new(Rank::Seven, Suit::Spades)));
///
/// let hand = deck.deal().unwrap();
/// assert_eq!(hand.size(), 8);
/// assert_eq!(deck.size(), 24);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<V: Variant> {
    cards: VecDeque<Card>,
    variant: PhantomData<V>,
}

impl<V: Variant> Deck<V> {
    /// Creates a full deck: for each rank of the variant, lowest first, one
    /// card of each suit in [`Suit::ALL`] order.
    #[must_use]
    pub fn new() -> Self {
        let kind = V::KIND;
        let mut cards = VecDeque::with_capacity(kind.deck_size());
        for &rank in kind.ranks() {
            for suit in Suit::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
        debug!("built {kind} deck with {} cards", cards.len());

        Self {
            cards,
            variant: PhantomData,
        }
    }

    /// Creates a deck holding exactly `cards`, top first.
    ///
    /// # Errors
    ///
    /// Returns an error if a card's rank is not part of the variant, a card
    /// appears twice, or there are more cards than a full deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CardError> {
        check_cards::<V>(&cards)?;
        Ok(Self {
            cards: cards.into(),
            variant: PhantomData,
        })
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is empty.
    pub fn draw_top(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::Empty)?;
        trace!("drew {card} from the top");
        Ok(card)
    }

    /// Removes and returns the bottom card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is empty.
    pub fn draw_bottom(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_back().ok_or(DeckError::Empty)?;
        trace!("drew {card} from the bottom");
        Ok(card)
    }

    /// Returns the top card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is empty.
    pub fn peek_top(&self) -> Result<&Card, DeckError> {
        self.cards.front().ok_or(DeckError::Empty)
    }

    /// Returns the bottom card without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck is empty.
    pub fn peek_bottom(&self) -> Result<&Card, DeckError> {
        self.cards.back().ok_or(DeckError::Empty)
    }

    /// Randomly permutes the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
        debug!("shuffled {} {} cards", self.cards.len(), V::KIND);
    }

    /// Sorts the remaining cards in place by suit, then rank, highest first.
    pub fn sort(&mut self) {
        V::KIND
            .rank_order()
            .sort_descending(self.cards.make_contiguous());
    }

    /// Deals one hand from the top of the deck.
    ///
    /// The hand takes the first [`hand_size`](crate::VariantKind::hand_size)
    /// cards in the deck's current order. The deck is not shuffled first.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::InsufficientCards`] if fewer cards remain than a
    /// hand needs. The deck is left unchanged.
    pub fn deal(&mut self) -> Result<Hand<V>, DealError> {
        let needed = V::KIND.hand_size();
        let remaining = self.cards.len();
        if remaining < needed {
            return Err(DealError::InsufficientCards { needed, remaining });
        }

        let cards: Vec<Card> = self.cards.drain(..needed).collect();
        debug!(
            "dealt {needed} {} cards, {} left in deck",
            V::KIND,
            self.cards.len()
        );
        Ok(Hand::dealt(cards))
    }

    /// Iterates over the remaining cards, top first.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }
}

impl<V: Variant> Default for Deck<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V: Variant> IntoIterator for &'a Deck<V> {
    type Item = &'a Card;
    type IntoIter = Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<V: Variant> fmt::Display for Deck<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Checks that every card belongs to `V`, none repeats, and there are no more
/// than a full deck.
pub(crate) fn check_cards<V: Variant>(cards: &[Card]) -> Result<(), CardError> {
    let kind = V::KIND;
    if cards.len() > kind.deck_size() {
        return Err(CardError::TooManyCards {
            count: cards.len(),
            max: kind.deck_size(),
        });
    }

    // One bit per (rank, suit) pair.
    let mut seen: u64 = 0;
    for &card in cards {
        let checked = V::card(card.rank, card.suit)?;
        let slot = checked.rank.index() * Suit::ALL.len() + checked.suit.sort_key() as usize;
        let bit = 1u64 << slot;
        if seen & bit != 0 {
            return Err(CardError::DuplicateCard { card });
        }
        seen |= bit;
    }
    Ok(())
}
