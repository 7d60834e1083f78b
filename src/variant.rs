//! Game variants and their deck rules.

use core::fmt;
use core::str::FromStr;

use crate::card::{Card, Rank, Suit};
use crate::error::{CardError, ParseVariantError};
use crate::rank_order::RankOrder;

const WAR_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

// 10 ranks above King in both trick-taking games.
const BELOTE_RANKS: [Rank; 8] = [
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

const SIXTY_SIX_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

const WAR_ORDER: RankOrder = RankOrder::new(&WAR_RANKS);
const BELOTE_ORDER: RankOrder = RankOrder::new(&BELOTE_RANKS);
const SIXTY_SIX_ORDER: RankOrder = RankOrder::new(&SIXTY_SIX_RANKS);

/// Runtime selection of a card game.
///
/// Each kind fixes the rank set, rank order, full deck size and hand size.
///
/// ```
/// use decks::VariantKind;
///
/// let kind: VariantKind = "belote".parse().unwrap();
/// assert_eq!(kind.deck_size(), 32);
/// assert_eq!(kind.hand_size(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// War: 52 cards, two hands of 26.
    War,
    /// Belote: 32 cards, hands of 8.
    Belote,
    /// Sixty-Six: 24 cards, hands of 6.
    SixtySix,
}

impl VariantKind {
    /// All variants.
    pub const ALL: [Self; 3] = [Self::War, Self::Belote, Self::SixtySix];

    /// Ranks used by the variant, lowest first.
    #[must_use]
    pub const fn ranks(self) -> &'static [Rank] {
        match self {
            Self::War => &WAR_RANKS,
            Self::Belote => &BELOTE_RANKS,
            Self::SixtySix => &SIXTY_SIX_RANKS,
        }
    }

    /// Rank order of the variant.
    #[must_use]
    pub const fn rank_order(self) -> &'static RankOrder {
        match self {
            Self::War => &WAR_ORDER,
            Self::Belote => &BELOTE_ORDER,
            Self::SixtySix => &SIXTY_SIX_ORDER,
        }
    }

    /// Number of cards in a full deck.
    #[must_use]
    pub const fn deck_size(self) -> usize {
        self.ranks().len() * Suit::ALL.len()
    }

    /// Number of cards dealt per hand.
    #[must_use]
    pub const fn hand_size(self) -> usize {
        match self {
            Self::War => 26,
            Self::Belote => 8,
            Self::SixtySix => 6,
        }
    }

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::War => "War",
            Self::Belote => "Belote",
            Self::SixtySix => "Sixty-Six",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VariantKind {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("war") {
            Ok(Self::War)
        } else if s.eq_ignore_ascii_case("belote") {
            Ok(Self::Belote)
        } else if s.eq_ignore_ascii_case("sixty-six")
            || s.eq_ignore_ascii_case("sixtysix")
            || s == "66"
        {
            Ok(Self::SixtySix)
        } else {
            Err(ParseVariantError)
        }
    }
}

/// Compile-time variant tag used to parameterize [`Deck`](crate::deck::Deck)
/// and [`Hand`](crate::hand::Hand).
///
/// Implemented by the zero-sized markers [`War`], [`Belote`] and
/// [`SixtySix`]. All rules come from [`Variant::KIND`].
pub trait Variant: Copy + fmt::Debug + 'static {
    /// Rule table for this variant.
    const KIND: VariantKind;

    /// Creates a card, checking that the variant uses its rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidCard`] if the rank is not part of this
    /// variant.
    fn card(rank: Rank, suit: Suit) -> Result<Card, CardError> {
        if Self::KIND.rank_order().contains(rank) {
            Ok(Card::new(rank, suit))
        } else {
            Err(CardError::InvalidCard {
                rank,
                variant: Self::KIND,
            })
        }
    }
}

/// War marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct War;

/// Belote marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Belote;

/// Sixty-Six marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SixtySix;

impl Variant for War {
    const KIND: VariantKind = VariantKind::War;
}

impl Variant for Belote {
    const KIND: VariantKind = VariantKind::Belote;
}

impl Variant for SixtySix {
    const KIND: VariantKind = VariantKind::SixtySix;
}
