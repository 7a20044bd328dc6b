use ventuno_engine::cards::{Card, Rank, Suit};
use ventuno_engine::events::{EventSink, NullSink, RoundEvent, Seat};
use ventuno_engine::hand::Hand;
use ventuno_engine::player::Player;
use ventuno_engine::round::{Decisions, Engine};
use ventuno_engine::rules::PlayerAction;
use ventuno_engine::settlement::Outcome;
use ventuno_engine::supply::Supply;

#[test]
fn events_serialize_with_stable_shapes() {
    let event = RoundEvent::CardDealt {
        seat: Seat::Player(0),
        hand: 0,
        card: Card {
            rank: Rank::Ace,
            suit: Suit::Spades,
        },
        hidden: false,
    };
    let json = serde_json::to_string(&event).expect("serialize event");
    assert!(json.contains("CardDealt"));
    assert!(json.contains("Ace"));

    let back: RoundEvent = serde_json::from_str(&json).expect("deserialize event");
    assert_eq!(back, event);
}

#[test]
fn settled_outcomes_use_snake_case_categories() {
    let event = RoundEvent::HandSettled {
        seat: 0,
        hand: 0,
        outcome: Outcome::NaturalWin,
        wager: 10,
        credit: 25,
        score: 21,
    };
    let json = serde_json::to_string(&event).expect("serialize event");
    assert!(json.contains("natural_win"));
}

/// A table that stands on everything and drops every event.
struct Headless(NullSink);

impl Decisions for Headless {
    fn wager(&mut self, _player: &Player, min: u32, _max: u32) -> u32 {
        min
    }

    fn action(&mut self, _player: &Player, _hand: &Hand, _options: &[PlayerAction]) -> PlayerAction {
        PlayerAction::Stand
    }
}

impl EventSink for Headless {
    fn on_event(&mut self, event: &RoundEvent) {
        self.0.on_event(event);
    }
}

#[test]
fn a_round_plays_headless_against_a_null_sink() {
    let mut supply = Supply::new_with_seed(4, 21);
    supply.shuffle();
    let mut engine = Engine::new(supply, vec![Player::new(1, "Alice", 1_000)]);
    let mut io = Headless(NullSink);

    let summary = engine.play_round(&mut io).expect("round completes");
    assert_eq!(summary.round, 1);
    assert_eq!(summary.wagers, vec![("Alice".to_string(), 1)]);
    assert_eq!(engine.supply().card_count(), 208);
}
