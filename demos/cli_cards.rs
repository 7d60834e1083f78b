//! CLI card table example.
//!
//! Run with `RUST_LOG=debug` to see deck activity.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use decks::{BeloteDeck, BeloteHand, Card, Rank, SixtySixDeck, Suit, VariantKind, WarDeck};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();
    println!("Card table CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    loop {
        let input = prompt_line("\nVariant (war, belote, sixty-six): ");
        if input.is_empty() || input == "q" || input == "quit" {
            println!("Goodbye.");
            break;
        }

        let kind = match input.parse::<VariantKind>() {
            Ok(kind) => kind,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        println!(
            "{kind}: {} cards, hands of {}",
            kind.deck_size(),
            kind.hand_size()
        );

        match kind {
            VariantKind::War => play_war(&mut rng),
            VariantKind::Belote => show_belote(&mut rng),
            VariantKind::SixtySix => show_sixty_six(&mut rng),
        }
    }
}

fn play_war(rng: &mut ChaCha8Rng) {
    let mut deck = WarDeck::new();
    deck.shuffle(rng);

    let (mut first, mut second) = match (deck.deal(), deck.deal()) {
        (Ok(first), Ok(second)) => (first, second),
        (Err(err), _) | (_, Err(err)) => {
            println!("Deal error: {err}");
            return;
        }
    };
    let order = VariantKind::War.rank_order();

    while !first.is_empty() && !second.is_empty() {
        let input = prompt_line("Press enter to play a card, 'q' to stop: ");
        if input == "q" || input == "quit" {
            return;
        }

        let (Ok(a), Ok(b)) = (first.play_card(rng), second.play_card(rng)) else {
            break;
        };
        let winner = match order.compare(a.rank, b.rank) {
            core::cmp::Ordering::Greater => "you",
            core::cmp::Ordering::Less => "opponent",
            core::cmp::Ordering::Equal => "nobody",
        };
        println!(
            "You: {}  Opponent: {}  -> {winner}",
            format_card(&a),
            format_card(&b)
        );

        if first.allow_face_up() {
            println!("{} card(s) left: face-up play allowed.", first.size());
        }
    }
    println!("Out of cards.");
}

fn show_belote(rng: &mut ChaCha8Rng) {
    let mut deck = BeloteDeck::new();
    deck.shuffle(rng);
    let hand = match deck.deal() {
        Ok(hand) => hand,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };

    println!("\nYour hand: {}", format_cards(&hand.sorted()));
    for suit in Suit::ALL {
        if let Some(card) = hand.highest_of_suit(suit) {
            println!("  highest {suit}: {}", format_card(&card));
        }
    }
    println!("Declarations: {}", belote_declarations(&hand).join(", "));
}

fn belote_declarations(hand: &BeloteHand) -> Vec<&'static str> {
    let checks = [
        ("belote", hand.belote()),
        ("tierce", hand.tierce()),
        ("quarte", hand.quarte()),
        ("quint", hand.quint()),
        ("carre of jacks", hand.carre_of_jacks()),
        ("carre of nines", hand.carre_of_nines()),
        ("carre of aces", hand.carre_of_aces()),
    ];
    let found: Vec<&str> = checks
        .iter()
        .filter(|(_, held)| *held)
        .map(|(name, _)| *name)
        .collect();
    if found.is_empty() { vec!["none"] } else { found }
}

fn show_sixty_six(rng: &mut ChaCha8Rng) {
    let mut deck = SixtySixDeck::new();
    deck.shuffle(rng);
    let hand = match deck.deal() {
        Ok(hand) => hand,
        Err(err) => {
            println!("Deal error: {err}");
            return;
        }
    };
    let trump = deck.peek_bottom().map_or(Suit::Hearts, |card| card.suit);

    println!("\nYour hand: {}", format_cards(hand.cards()));
    println!("Trump: {trump} ({} cards in stock)", deck.size());
    println!("Twenty: {}", yes_no(hand.twenty(trump)));
    println!("Forty: {}", yes_no(hand.forty(trump)));
}

const fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::from("q");
    }
    input.trim().to_lowercase()
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
        number => number.name(),
    };
    colorize(&format!("{rank}{suit}"), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
