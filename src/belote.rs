//! Belote hand declarations.
//!
//! Runs are checked on the hand sorted by suit, then rank, highest first. Any
//! window of the requested length that is a same-suit run counts, so a quint
//! also satisfies [`Hand::quarte`] and [`Hand::tierce`].

use crate::card::{Card, Rank, Suit};
use crate::hand::Hand;
use crate::variant::{Belote, Variant};

impl Hand<Belote> {
    /// Returns the highest card of `suit` in the hand, or `None` if the hand
    /// holds no card of that suit.
    #[must_use]
    pub fn highest_of_suit(&self, suit: Suit) -> Option<Card> {
        let order = Belote::KIND.rank_order();
        self.cards
            .iter()
            .filter(|card| card.suit == suit)
            .max_by_key(|card| order.key(card.rank))
            .copied()
    }

    /// Returns whether the hand holds the King and Queen of the same suit.
    #[must_use]
    pub fn belote(&self) -> bool {
        self.has_marriage_in(Suit::ALL)
    }

    /// Returns whether the hand holds three consecutive cards of one suit.
    #[must_use]
    pub fn tierce(&self) -> bool {
        self.has_run(3)
    }

    /// Returns whether the hand holds four consecutive cards of one suit.
    #[must_use]
    pub fn quarte(&self) -> bool {
        self.has_run(4)
    }

    /// Returns whether the hand holds five consecutive cards of one suit.
    #[must_use]
    pub fn quint(&self) -> bool {
        self.has_run(5)
    }

    /// Returns whether the hand holds all four Jacks.
    #[must_use]
    pub fn carre_of_jacks(&self) -> bool {
        self.carre_of(Rank::Jack)
    }

    /// Returns whether the hand holds all four Nines.
    #[must_use]
    pub fn carre_of_nines(&self) -> bool {
        self.carre_of(Rank::Nine)
    }

    /// Returns whether the hand holds all four Aces.
    #[must_use]
    pub fn carre_of_aces(&self) -> bool {
        self.carre_of(Rank::Ace)
    }

    fn carre_of(&self, rank: Rank) -> bool {
        self.cards.iter().filter(|card| card.rank == rank).count() == Suit::ALL.len()
    }

    fn has_run(&self, length: usize) -> bool {
        let order = Belote::KIND.rank_order();
        self.sorted()
            .windows(length)
            .any(|window| order.is_run(window))
    }
}
