//! War hand actions.

use log::trace;
use rand::Rng;

use crate::card::Card;
use crate::error::PlayError;
use crate::hand::Hand;
use crate::variant::War;

/// Hand size at or below which cards may be played face up.
const FACE_UP_LIMIT: usize = 3;

impl Hand<War> {
    /// Removes and returns a uniformly random card from the hand.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::EmptyHand`] if the hand is empty.
    pub fn play_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, PlayError> {
        if self.cards.is_empty() {
            return Err(PlayError::EmptyHand);
        }

        let index = rng.random_range(0..self.cards.len());
        let card = self.cards.remove(index);
        trace!("played {card}, {} left in hand", self.cards.len());
        Ok(card)
    }

    /// Returns whether the end-game face-up rule applies: three or fewer cards
    /// left.
    #[must_use]
    pub fn allow_face_up(&self) -> bool {
        self.cards.len() <= FACE_UP_LIMIT
    }
}
