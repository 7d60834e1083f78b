//! Sixty-Six marriages.

use crate::card::Suit;
use crate::hand::Hand;
use crate::variant::SixtySix;

impl Hand<SixtySix> {
    /// Returns whether the hand holds King and Queen of the same non-trump
    /// suit.
    #[must_use]
    pub fn twenty(&self, trump: Suit) -> bool {
        self.has_marriage_in(Suit::ALL.into_iter().filter(|&suit| suit != trump))
    }

    /// Returns whether the hand holds King and Queen of the trump suit.
    #[must_use]
    pub fn forty(&self, trump: Suit) -> bool {
        self.has_marriage_in([trump])
    }
}
