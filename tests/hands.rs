//! Hand integration tests.

use decks::{
    Belote, BeloteHand, Card, CardError, ParseVariantError, PlayError, Rank, SixtySixHand, Suit,
    Variant, VariantKind, WarDeck, WarHand,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn belote_hand(cards: &[Card]) -> BeloteHand {
    BeloteHand::from_cards(cards.to_vec()).unwrap()
}

fn sixty_six_hand(cards: &[Card]) -> SixtySixHand {
    SixtySixHand::from_cards(cards.to_vec()).unwrap()
}

#[test]
fn card_display_is_human_readable() {
    assert_eq!(card(Rank::Queen, Suit::Spades).to_string(), "Queen of Spades");
    assert_eq!(card(Rank::Ten, Suit::Hearts).to_string(), "10 of Hearts");
    assert_eq!(card(Rank::Two, Suit::Clubs).to_string(), "2 of Clubs");
}

#[test]
fn hand_display_lists_one_card_per_line() {
    let hand = belote_hand(&[card(Rank::Queen, Suit::Spades), card(Rank::King, Suit::Spades)]);
    assert_eq!(hand.to_string(), "Queen of Spades\nKing of Spades\n");
}

#[test]
fn variant_card_checks_rank_membership() {
    assert_eq!(
        Belote::card(Rank::Ace, Suit::Clubs),
        Ok(card(Rank::Ace, Suit::Clubs))
    );
    assert_eq!(
        Belote::card(Rank::Six, Suit::Clubs),
        Err(CardError::InvalidCard {
            rank: Rank::Six,
            variant: VariantKind::Belote,
        })
    );
    assert!(SixtySixHand::from_cards(vec![card(Rank::Eight, Suit::Hearts)]).is_err());
}

#[test]
fn variant_kind_parses_and_displays() {
    assert_eq!("War".parse::<VariantKind>(), Ok(VariantKind::War));
    assert_eq!(" belote ".parse::<VariantKind>(), Ok(VariantKind::Belote));
    assert_eq!("sixty-six".parse::<VariantKind>(), Ok(VariantKind::SixtySix));
    assert_eq!("66".parse::<VariantKind>(), Ok(VariantKind::SixtySix));
    assert_eq!("poker".parse::<VariantKind>(), Err(ParseVariantError));
    assert_eq!(VariantKind::SixtySix.to_string(), "Sixty-Six");
}

#[test]
fn rank_orders_differ_per_variant() {
    let war = VariantKind::War.rank_order();
    let belote = VariantKind::Belote.rank_order();
    let sixty_six = VariantKind::SixtySix.rank_order();

    assert!(war.key(Rank::Ten) < war.key(Rank::Jack));
    assert!(belote.key(Rank::Ten) > belote.key(Rank::King));
    assert_eq!(sixty_six.key(Rank::Nine), Some(0));
    assert_eq!(sixty_six.key(Rank::Eight), None);
    assert_eq!(war.len(), 13);
    assert_eq!(belote.len(), 8);
    assert_eq!(sixty_six.len(), 6);
}

#[test]
fn war_play_card_removes_a_card_from_hand() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut deck = WarDeck::new();
    deck.shuffle(&mut rng);
    let mut hand = deck.deal().unwrap();
    let before = hand.clone();

    let played = hand.play_card(&mut rng).unwrap();
    assert!(before.contains(&played));
    assert!(!hand.contains(&played));
    assert_eq!(hand.size(), 25);
}

#[test]
fn war_play_card_on_empty_hand_errors() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut hand = WarHand::from_cards(vec![card(Rank::Two, Suit::Hearts)]).unwrap();

    assert_eq!(hand.play_card(&mut rng), Ok(card(Rank::Two, Suit::Hearts)));
    assert!(hand.is_empty());
    assert_eq!(hand.play_card(&mut rng), Err(PlayError::EmptyHand));
}

#[test]
fn war_face_up_allowed_at_three_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut hand = WarHand::from_cards(vec![
        card(Rank::Two, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
    ])
    .unwrap();

    assert!(!hand.allow_face_up());
    hand.play_card(&mut rng).unwrap();
    assert!(hand.allow_face_up());
}

#[test]
fn belote_needs_king_and_queen_of_one_suit() {
    let hand = belote_hand(&[
        card(Rank::Queen, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
    ]);
    assert!(hand.belote());

    let split = belote_hand(&[card(Rank::Queen, Suit::Spades), card(Rank::King, Suit::Hearts)]);
    assert!(!split.belote());
}

#[test]
fn tierce_found_in_unsorted_hand() {
    let hand = belote_hand(&[
        card(Rank::Jack, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Spades),
    ]);
    assert!(hand.tierce());
    assert!(!hand.quarte());
    assert!(!hand.quint());
}

#[test]
fn runs_follow_belote_rank_order() {
    // 9 and Jack are adjacent once 10 moves above King.
    let hand = belote_hand(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Queen, Suit::Hearts),
    ]);
    assert!(hand.tierce());

    let gap = belote_hand(&[
        card(Rank::Ace, Suit::Clubs),
        card(Rank::King, Suit::Clubs),
        card(Rank::Queen, Suit::Clubs),
    ]);
    assert!(!gap.tierce());

    let mixed = belote_hand(&[
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Jack, Suit::Hearts),
    ]);
    assert!(!mixed.tierce());
}

#[test]
fn quint_implies_shorter_runs() {
    let hand = belote_hand(&[
        card(Rank::Seven, Suit::Diamonds),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ten, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Queen, Suit::Spades),
        card(Rank::Jack, Suit::Spades),
        card(Rank::Eight, Suit::Clubs),
    ]);
    assert!(hand.quint());
    assert!(hand.quarte());
    assert!(hand.tierce());
}

#[test]
fn quarte_without_quint() {
    let hand = belote_hand(&[
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
    ]);
    assert!(hand.quarte());
    assert!(!hand.quint());
}

#[test]
fn carre_needs_all_four_cards_of_a_rank() {
    let jacks = belote_hand(&[
        card(Rank::Jack, Suit::Spades),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Jack, Suit::Clubs),
    ]);
    assert!(jacks.carre_of_jacks());
    assert!(!jacks.carre_of_nines());
    assert!(!jacks.carre_of_aces());

    let three = belote_hand(&[
        card(Rank::Jack, Suit::Spades),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Jack, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
    ]);
    assert!(!three.carre_of_jacks());

    let mixed = belote_hand(&[
        card(Rank::Nine, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Ace, Suit::Clubs),
    ]);
    assert!(mixed.carre_of_nines());
    assert!(mixed.carre_of_aces());
}

#[test]
fn highest_of_suit_uses_belote_order() {
    let hand = belote_hand(&[
        card(Rank::Seven, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Ace, Suit::Spades),
    ]);
    assert_eq!(
        hand.highest_of_suit(Suit::Hearts),
        Some(card(Rank::Ten, Suit::Hearts))
    );
    assert_eq!(
        hand.highest_of_suit(Suit::Spades),
        Some(card(Rank::Ace, Suit::Spades))
    );
    assert_eq!(hand.highest_of_suit(Suit::Clubs), None);
}

#[test]
fn sorted_returns_copy_without_reordering_hand() {
    let cards = [
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Ten, Suit::Spades),
        card(Rank::King, Suit::Hearts),
    ];
    let hand = belote_hand(&cards);

    let sorted = hand.sorted();
    assert_eq!(
        sorted,
        vec![
            card(Rank::Ten, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
            card(Rank::King, Suit::Hearts),
            card(Rank::Seven, Suit::Clubs),
        ]
    );
    assert_eq!(hand.cards(), cards.as_slice());

    let again = belote_hand(&sorted).sorted();
    assert_eq!(again, sorted);
}

#[test]
fn twenty_and_forty_depend_on_trump() {
    let spades = sixty_six_hand(&[
        card(Rank::Queen, Suit::Spades),
        card(Rank::King, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
    ]);
    assert!(spades.twenty(Suit::Hearts));
    assert!(!spades.forty(Suit::Hearts));

    let hearts = sixty_six_hand(&[
        card(Rank::Queen, Suit::Hearts),
        card(Rank::King, Suit::Hearts),
        card(Rank::Ace, Suit::Clubs),
    ]);
    assert!(hearts.forty(Suit::Hearts));
    assert!(!hearts.twenty(Suit::Hearts));
}

#[test]
fn no_marriage_without_both_cards() {
    let hand = sixty_six_hand(&[
        card(Rank::Queen, Suit::Diamonds),
        card(Rank::King, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
    ]);
    for trump in Suit::ALL {
        assert!(!hand.twenty(trump));
        assert!(!hand.forty(trump));
    }
}

#[test]
fn dealt_belote_hand_matches_variant_rules() {
    let mut deck = decks::BeloteDeck::new();
    deck.shuffle(&mut ChaCha8Rng::seed_from_u64(11));
    let hand = deck.deal().unwrap();

    assert_eq!(hand.size(), Belote::KIND.hand_size());
    for suit in Suit::ALL {
        if let Some(top) = hand.highest_of_suit(suit) {
            assert_eq!(top.suit, suit);
            assert!(hand.contains(&top));
        }
    }
}

#[test]
fn hand_from_cards_rejects_more_than_a_deck() {
    assert_eq!(
        SixtySixHand::from_cards(vec![card(Rank::Ace, Suit::Spades); 25]).unwrap_err(),
        CardError::TooManyCards { count: 25, max: 24 }
    );
    assert_eq!(
        BeloteHand::from_cards(vec![
            card(Rank::Ace, Suit::Spades),
            card(Rank::Ace, Suit::Spades),
        ])
        .unwrap_err(),
        CardError::DuplicateCard {
            card: card(Rank::Ace, Suit::Spades),
        }
    );
}

#[test]
fn hand_is_empty_tracks_size() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut hand = WarHand::from_cards(vec![
        card(Rank::Two, Suit::Spades),
        card(Rank::Ace, Suit::Clubs),
    ])
    .unwrap();

    assert!(!hand.is_empty());
    hand.play_card(&mut rng).unwrap();
    hand.play_card(&mut rng).unwrap();
    assert!(hand.is_empty());
    assert_eq!(hand.size(), 0);
}
