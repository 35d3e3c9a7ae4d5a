//! Terminal blackjack session built on the round engine.
//!
//! Everything the engine excludes lives here: the bet prompt with its
//! re-prompt loop and QUIT sentinel, the hit/stand/double prompt, ASCII card
//! art with a concealed dealer hole card, and the session loop that ends on
//! bankruptcy or quit.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Card, DealerHand, DecisionProvider, EventSink, Hand, Outcome, PlayerMove, Suit, Table,
    TableEvent,
};

const STARTING_BANKROLL: usize = 5000;

fn main() {
    println!(
        "
Rules:

    Try to get as close to 21 without going over.
    Kings, Queens, and Jacks are worth 10 points.
    Aces are worth either 1 or 11 points.
    Cards 2 through 10 are worth their face value.
    (H)it to take another card.
    (S)tand to stop taking cards.
    On your first play, you can (D)ouble down to increase
    your bet but must hit exactly one more time before
    standing. In case of a tie, the bet is returned to
    the player. The dealer stops hitting at 17.
"
    );

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(seed);
    let mut bankroll = STARTING_BANKROLL;

    loop {
        if bankroll == 0 {
            println!("You're broke!");
            println!("Good thing you weren't playing with real money.");
            println!("Thanks for playing!");
            return;
        }

        println!("Money: {bankroll}");
        let Some(bet) = prompt_bet(bankroll) else {
            println!("Thanks for playing!");
            return;
        };
        println!("Bet: {bet}");

        let mut provider = PromptProvider;
        let mut renderer = TermRenderer;
        match table.play_round(bankroll, bet, &mut provider, &mut renderer) {
            Ok(result) => {
                bankroll = result.bankroll;
            }
            Err(err) => {
                // Both engine errors are invariant violations, not
                // recoverable table states.
                eprintln!("internal error: {err}");
                return;
            }
        }

        prompt_line("Press Enter to continue...");
        println!();
    }
}

/// Asks for a bet in `1..=max_bet`, re-prompting on anything else.
/// Returns `None` when the player quits.
fn prompt_bet(max_bet: usize) -> Option<usize> {
    loop {
        println!("How much do you bet? (1 - {max_bet}), or QUIT");
        let input = prompt_line("> ");
        if input.eq_ignore_ascii_case("quit") {
            return None;
        }

        match input.parse::<usize>() {
            Ok(bet) if (1..=max_bet).contains(&bet) => return Some(bet),
            _ => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

/// Interactive decision provider: the engine only ever sees pre-validated
/// moves, all re-prompting happens here.
struct PromptProvider;

impl DecisionProvider for PromptProvider {
    fn get_move(&mut self, hand: &Hand, available: usize) -> PlayerMove {
        let can_double = hand.len() == 2 && available > 0;
        loop {
            let prompt = if can_double {
                "(H)it,  (S)tand,  (D)ouble down> "
            } else {
                "(H)it,  (S)tand> "
            };

            match prompt_line(prompt).to_lowercase().as_str() {
                "h" | "hit" => return PlayerMove::Hit,
                "s" | "stand" => return PlayerMove::Stand,
                "d" | "double" if can_double => return PlayerMove::DoubleDown,
                _ => {}
            }
        }
    }

    fn get_raise(&mut self, max_raise: usize) -> usize {
        match prompt_bet(max_raise) {
            Some(raise) => raise,
            None => {
                println!("Thanks for playing!");
                process::exit(0);
            }
        }
    }
}

/// Renders table events as text and card art.
struct TermRenderer;

impl EventSink for TermRenderer {
    fn publish(&mut self, event: TableEvent) {
        match event {
            TableEvent::Deal { player, dealer } => display_hands(&player, &dealer),
            TableEvent::PlayerDraw { card, .. } => {
                println!("You drew a {} of {}.", rank_label(&card), suit_symbol(card.suit));
            }
            TableEvent::PlayerStand { .. } => {}
            TableEvent::BetRaised { bet } => println!("Bet increased to {bet}."),
            TableEvent::DealerReveal { .. } => {}
            TableEvent::DealerDraw { dealer, .. } => {
                println!("Dealer hits...");
                display_cards(dealer.cards(), false);
            }
            TableEvent::Settled {
                outcome,
                bet,
                player,
                dealer,
                ..
            } => {
                display_hands(&player, &dealer);
                match outcome {
                    Outcome::DealerBust => println!("Dealer busts! You win ${bet}!"),
                    Outcome::Win => println!("You won ${bet}!"),
                    Outcome::Lose | Outcome::PlayerBust => println!("You lost!"),
                    Outcome::Push => println!("It's a tie, the bet is returned to you..."),
                }
            }
        }
    }
}

/// Shows both hands. The dealer's hole card is drawn as a card back until
/// the hand snapshot says it has been revealed.
fn display_hands(player: &Hand, dealer: &DealerHand) {
    println!();
    if dealer.is_hole_revealed() {
        println!("DEALER: {}", dealer.value());
        display_cards(dealer.cards(), false);
    } else {
        println!("DEALER: ???");
        display_cards(dealer.cards(), true);
    }

    println!("PLAYER: {}", player.value());
    display_cards(player.cards(), false);
}

/// Draws a row of card fronts, optionally replacing the first card with a
/// face-down back.
fn display_cards(cards: &[Card], conceal_first: bool) {
    let mut rows = [String::new(), String::new(), String::new(), String::new()];

    for (i, card) in cards.iter().enumerate() {
        rows[0].push_str(" ____ ");
        if conceal_first && i == 0 {
            rows[1].push_str("|## | ");
            rows[2].push_str("|###| ");
            rows[3].push_str("|_##| ");
        } else {
            let rank = rank_label(card);
            rows[1].push_str(&format!("|{:<2} | ", rank));
            rows[2].push_str(&format!("| {} | ", suit_symbol(card.suit)));
            rows[3].push_str(&format!("|_{:_>2}| ", rank));
        }
    }

    for row in rows {
        println!("{row}");
    }
}

fn rank_label(card: &Card) -> String {
    match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    }
}

const fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Hearts => '\u{2665}',
        Suit::Diamonds => '\u{2666}',
        Suit::Spades => '\u{2660}',
        Suit::Clubs => '\u{2663}',
    }
}
