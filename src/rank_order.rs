//! Per-variant rank ordering.

use core::cmp::Ordering;

use crate::card::{Card, Rank};

/// A total order over the ranks of one variant.
///
/// Each rank in the variant's list is mapped to its position in that list, so
/// the first rank has key 0. Ranks outside the list have no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankOrder {
    keys: [Option<u8>; Rank::COUNT],
    len: usize,
}

impl RankOrder {
    /// Builds an order from ranks listed lowest first.
    ///
    /// A rank listed twice keeps its first position.
    #[must_use]
    pub const fn new(ranks: &[Rank]) -> Self {
        let mut keys = [None; Rank::COUNT];
        let mut len = 0;
        let mut i = 0;
        while i < ranks.len() {
            let slot = ranks[i].index();
            if keys[slot].is_none() {
                keys[slot] = Some(len as u8);
                len += 1;
            }
            i += 1;
        }
        Self { keys, len }
    }

    /// Returns the order key of `rank`, or `None` if the variant omits it.
    #[must_use]
    pub const fn key(&self, rank: Rank) -> Option<u8> {
        self.keys[rank.index()]
    }

    /// Returns whether the variant uses `rank`.
    #[must_use]
    pub const fn contains(&self, rank: Rank) -> bool {
        self.key(rank).is_some()
    }

    /// Number of ranks in the order.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the order has no ranks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compares two ranks. Ranks outside the order sort below every member.
    #[must_use]
    pub fn compare(&self, a: Rank, b: Rank) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    /// Key for sorting cards by suit, then rank.
    #[must_use]
    pub const fn card_key(&self, card: &Card) -> (u8, Option<u8>) {
        (card.suit.sort_key(), self.key(card.rank))
    }

    /// Sorts `cards` by suit, then rank, highest first.
    pub fn sort_descending(&self, cards: &mut [Card]) {
        cards.sort_by(|a, b| self.card_key(b).cmp(&self.card_key(a)));
    }

    /// Returns whether the cards share one suit and each step down is exactly
    /// one rank.
    ///
    /// Cards are expected highest first, as produced by [`Self::sort_descending`].
    #[must_use]
    pub fn is_run(&self, cards: &[Card]) -> bool {
        let Some(first) = cards.first() else {
            return false;
        };
        if !cards.iter().all(|card| card.suit == first.suit) {
            return false;
        }

        cards.windows(2).all(|pair| {
            match (self.key(pair[0].rank), self.key(pair[1].rank)) {
                (Some(high), Some(low)) => high.checked_sub(low) == Some(1),
                _ => false,
            }
        })
    }
}
