//! Hands dealt from a deck.

use core::fmt;
use core::marker::PhantomData;

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::deck::check_cards;
use crate::error::CardError;
use crate::variant::{Belote, SixtySix, Variant, War};

/// A War hand.
pub type WarHand = Hand<War>;
/// A Belote hand.
pub type BeloteHand = Hand<Belote>;
/// A Sixty-Six hand.
pub type SixtySixHand = Hand<SixtySix>;

/// Cards dealt to one player in variant `V`.
///
/// The hand owns its cards. Its size is fixed at deal time except where the
/// variant plays cards out of it, as War does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand<V: Variant> {
    /// Cards in the hand, in dealt order.
    pub(crate) cards: Vec<Card>,
    variant: PhantomData<V>,
}

impl<V: Variant> Hand<V> {
    pub(crate) const fn dealt(cards: Vec<Card>) -> Self {
        Self {
            cards,
            variant: PhantomData,
        }
    }

    /// Creates a hand holding exactly `cards`.
    ///
    /// # Errors
    ///
    /// Returns an error if a card's rank is not part of the variant, a card
    /// appears twice, or there are more cards than a full deck.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, CardError> {
        check_cards::<V>(&cards)?;
        Ok(Self::dealt(cards))
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterates over the cards in the hand.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns whether the hand holds `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the cards ordered by suit, then rank, highest first.
    ///
    /// The hand itself is not reordered.
    #[must_use]
    pub fn sorted(&self) -> Vec<Card> {
        let mut cards = self.cards.clone();
        V::KIND.rank_order().sort_descending(&mut cards);
        cards
    }

    /// Returns whether the hand holds both the King and the Queen of any of
    /// `suits`.
    pub(crate) fn has_marriage_in<I>(&self, suits: I) -> bool
    where
        I: IntoIterator<Item = Suit>,
    {
        suits.into_iter().any(|suit| {
            self.contains(&Card::new(Rank::Queen, suit))
                && self.contains(&Card::new(Rank::King, suit))
        })
    }
}

impl<'a, V: Variant> IntoIterator for &'a Hand<V> {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl<V: Variant> fmt::Display for Hand<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        Ok(())
    }
}
