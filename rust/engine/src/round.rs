use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::cards::Rank;
use crate::errors::EngineError;
use crate::events::{EventSink, RoundEvent, Seat};
use crate::hand::{Hand, HandState};
use crate::player::{Dealer, Player};
use crate::rules::{self, PlayerAction, BLACKJACK};
use crate::settlement::{self, Outcome};
use crate::supply::Supply;

/// Source of validated choices for the round engine. Implementations own the
/// prompt loop: they keep asking until they hold a value inside the offered
/// range or set, so the engine never sees a malformed input. The engine still
/// validates and re-prompts as local recovery if a source misbehaves.
pub trait Decisions {
    /// A wager in `min..=max` for the player entering the round.
    fn wager(&mut self, player: &Player, min: u32, max: u32) -> u32;

    /// One of `options` for the focus hand.
    fn action(&mut self, player: &Player, hand: &Hand, options: &[PlayerAction]) -> PlayerAction;
}

/// One settled wager in a finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementEntry {
    pub seat: usize,
    pub name: String,
    pub hand: usize,
    pub outcome: Outcome,
    pub wager: u32,
    pub credit: u32,
}

/// What a round did to the table, for logging and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub wagers: Vec<(String, u32)>,
    pub settlements: Vec<SettlementEntry>,
    pub balances: Vec<(String, u32)>,
}

/// Orchestrates rounds over a single table: the shared supply, the seated
/// players, and the dealer. All round state lives here; nothing is global.
#[derive(Debug)]
pub struct Engine {
    supply: Supply,
    players: Vec<Player>,
    dealer: Dealer,
    round: u32,
}

impl Engine {
    pub fn new(supply: Supply, players: Vec<Player>) -> Self {
        Self {
            supply,
            players,
            dealer: Dealer::new(),
            round: 0,
        }
    }

    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn has_players(&self) -> bool {
        !self.players.is_empty()
    }

    /// Removes players who can no longer stake a minimum wager and returns
    /// them, so the caller can announce their departure.
    pub fn remove_broke_players(&mut self) -> Vec<Player> {
        let (keep, gone): (Vec<Player>, Vec<Player>) =
            self.players.drain(..).partition(|p| !p.is_broke());
        self.players = keep;
        gone
    }

    /// Plays one full round: reshuffle check, wagers, initial deal, decision
    /// phase, dealer play, settlement, cleanup. Only a truly exhausted supply
    /// aborts the round; every other error is recovered in place.
    pub fn play_round<IO>(&mut self, io: &mut IO) -> Result<RoundSummary, EngineError>
    where
        IO: Decisions + EventSink + ?Sized,
    {
        self.round += 1;
        io.on_event(&RoundEvent::RoundStarted { round: self.round });

        if self.supply.needs_reshuffle() {
            self.supply.rebuild();
            self.supply.shuffle();
            io.on_event(&RoundEvent::SupplyReshuffled {
                undealt: self.supply.undealt_len(),
            });
        }

        // Strict FIFO over seats; each is dequeued exactly once no matter how
        // many hands it ends up playing.
        let queue: VecDeque<usize> = (0..self.players.len()).collect();

        let mut wagers = Vec::with_capacity(self.players.len());
        for &seat in &queue {
            let max = self.players[seat].chips();
            let wager = loop {
                let w = io.wager(&self.players[seat], 1, max);
                if (1..=max).contains(&w) {
                    break w;
                }
            };
            self.players[seat].stake(wager)?;
            self.players[seat].hands_mut().push(Hand::staked(wager));
            io.on_event(&RoundEvent::WagerPlaced {
                seat,
                wager,
                chips: self.players[seat].chips(),
            });
            wagers.push((self.players[seat].name().to_string(), wager));
        }

        self.deal_initial(&queue, io)?;

        let dealer_natural = self.dealer.hand().is_natural();
        if dealer_natural {
            io.on_event(&RoundEvent::DealerNatural);
        }

        let mut queue = queue;
        while let Some(seat) = queue.pop_front() {
            // With a dealer natural the decision phase is skipped entirely;
            // hands settle as dealt.
            if !dealer_natural {
                self.play_seat(seat, io)?;
            }
        }

        self.play_dealer(dealer_natural, io)?;

        let settlements = self.settle(io);
        self.supply.discard_hand(self.dealer.hand_mut());

        let balances: Vec<(String, u32)> = self
            .players
            .iter()
            .map(|p| (p.name().to_string(), p.chips()))
            .collect();
        io.on_event(&RoundEvent::RoundComplete {
            balances: balances.clone(),
        });

        Ok(RoundSummary {
            round: self.round,
            wagers,
            settlements,
            balances,
        })
    }

    /// One card to every seated hand then the dealer, twice over. The
    /// dealer's second card is the hole card.
    fn deal_initial<IO>(&mut self, queue: &VecDeque<usize>, io: &mut IO) -> Result<(), EngineError>
    where
        IO: EventSink + ?Sized,
    {
        for pass in 0..2 {
            for &seat in queue {
                let card = self.supply.draw()?;
                self.players[seat].hands_mut()[0].push(card);
                io.on_event(&RoundEvent::CardDealt {
                    seat: Seat::Player(seat),
                    hand: 0,
                    card,
                    hidden: false,
                });
            }
            let card = self.supply.draw()?;
            self.dealer.hand_mut().push(card);
            io.on_event(&RoundEvent::CardDealt {
                seat: Seat::Dealer,
                hand: 0,
                card,
                hidden: pass == 1,
            });
        }
        io.on_event(&RoundEvent::DealerUpcard {
            card: self.dealer.hand().cards()[0],
        });
        Ok(())
    }

    /// Plays every hand a seat holds, left to right. The worklist is an
    /// index cursor so a split can insert its new hand at `cursor + 1`
    /// without invalidating anything.
    fn play_seat<IO>(&mut self, seat: usize, io: &mut IO) -> Result<(), EngineError>
    where
        IO: Decisions + EventSink + ?Sized,
    {
        let mut cursor = 0;
        while cursor < self.players[seat].hands().len() {
            // Doubled hands completed their turn at the moment of doubling;
            // split aces completed theirs at the split.
            if !self.players[seat].hands()[cursor].state().is_terminal() {
                self.play_hand(seat, cursor, io)?;
            }
            cursor += 1;
        }
        Ok(())
    }

    fn play_hand<IO>(&mut self, seat: usize, idx: usize, io: &mut IO) -> Result<(), EngineError>
    where
        IO: Decisions + EventSink + ?Sized,
    {
        loop {
            if self.players[seat].hands()[idx].state().is_terminal() {
                return Ok(());
            }

            let score = self.players[seat].hands()[idx].score();
            io.on_event(&RoundEvent::HandScored {
                seat: Seat::Player(seat),
                hand: idx,
                cards: self.players[seat].hands()[idx].cards().to_vec(),
                score,
            });

            if score > BLACKJACK {
                self.players[seat].hands_mut()[idx].set_state(HandState::Busted);
                io.on_event(&RoundEvent::HandBusted {
                    seat,
                    hand: idx,
                    score,
                });
                return Ok(());
            }
            if score == BLACKJACK {
                self.players[seat].hands_mut()[idx].set_state(HandState::Standing);
                io.on_event(&RoundEvent::HandStands {
                    seat,
                    hand: idx,
                    score,
                });
                return Ok(());
            }

            let chips = self.players[seat].chips();
            let options = rules::available_actions(&self.players[seat].hands()[idx], chips);
            let requested = io.action(
                &self.players[seat],
                &self.players[seat].hands()[idx],
                &options,
            );
            let action =
                match rules::validate_action(&self.players[seat].hands()[idx], chips, requested) {
                    Ok(a) => a,
                    Err(err) => {
                        io.on_event(&RoundEvent::ActionRejected {
                            seat,
                            hand: idx,
                            reason: err.to_string(),
                        });
                        continue;
                    }
                };
            io.on_event(&RoundEvent::ActionTaken {
                seat,
                hand: idx,
                action,
            });

            match action {
                PlayerAction::Hit => {
                    let card = self.supply.draw()?;
                    self.players[seat].hands_mut()[idx].push(card);
                    io.on_event(&RoundEvent::CardDealt {
                        seat: Seat::Player(seat),
                        hand: idx,
                        card,
                        hidden: false,
                    });
                }
                PlayerAction::Stand => {
                    self.players[seat].hands_mut()[idx].set_state(HandState::Standing);
                    return Ok(());
                }
                PlayerAction::DoubleDown => {
                    let wager = self.players[seat].hands()[idx].wager();
                    self.players[seat].stake(wager)?;
                    self.players[seat].hands_mut()[idx].double_wager();
                    let card = self.supply.draw()?;
                    self.players[seat].hands_mut()[idx].push(card);
                    io.on_event(&RoundEvent::CardDealt {
                        seat: Seat::Player(seat),
                        hand: idx,
                        card,
                        hidden: false,
                    });
                    // Terminal even if the forced draw busts.
                    self.players[seat].hands_mut()[idx].set_state(HandState::DoubledComplete);
                    io.on_event(&RoundEvent::HandScored {
                        seat: Seat::Player(seat),
                        hand: idx,
                        cards: self.players[seat].hands()[idx].cards().to_vec(),
                        score: self.players[seat].hands()[idx].score(),
                    });
                    return Ok(());
                }
                PlayerAction::Split => {
                    self.split_hand(seat, idx, io)?;
                    // Play continues on the original hand; the new hand waits
                    // at cursor + 1.
                }
            }
        }
    }

    fn split_hand<IO>(&mut self, seat: usize, idx: usize, io: &mut IO) -> Result<(), EngineError>
    where
        IO: EventSink + ?Sized,
    {
        let wager = self.players[seat].hands()[idx].wager();
        self.players[seat].stake(wager)?;

        let aces = self.players[seat].hands()[idx].cards()[0].rank == Rank::Ace;

        let moved = match self.players[seat].hands_mut()[idx].pop() {
            Some(card) => card,
            None => {
                return Err(EngineError::InvalidAction {
                    reason: "cannot split this hand".to_string(),
                })
            }
        };
        let mut new_hand = Hand::split_from(wager);
        new_hand.push(moved);

        let replacement = self.supply.draw()?;
        self.players[seat].hands_mut()[idx].push(replacement);
        io.on_event(&RoundEvent::CardDealt {
            seat: Seat::Player(seat),
            hand: idx,
            card: replacement,
            hidden: false,
        });

        let replacement = self.supply.draw()?;
        new_hand.push(replacement);
        self.players[seat].hands_mut().insert(idx + 1, new_hand);
        io.on_event(&RoundEvent::CardDealt {
            seat: Seat::Player(seat),
            hand: idx + 1,
            card: replacement,
            hidden: false,
        });

        if aces {
            // Split aces take their one replacement card and stand; no
            // further draws on either hand.
            for h in [idx, idx + 1] {
                self.players[seat].hands_mut()[h].set_state(HandState::Standing);
                io.on_event(&RoundEvent::HandScored {
                    seat: Seat::Player(seat),
                    hand: h,
                    cards: self.players[seat].hands()[h].cards().to_vec(),
                    score: self.players[seat].hands()[h].score(),
                });
            }
            io.on_event(&RoundEvent::SplitAcesStand { seat });
        }
        Ok(())
    }

    fn play_dealer<IO>(&mut self, dealer_natural: bool, io: &mut IO) -> Result<(), EngineError>
    where
        IO: EventSink + ?Sized,
    {
        io.on_event(&RoundEvent::DealerRevealed {
            cards: self.dealer.hand().cards().to_vec(),
            score: self.dealer.hand().score(),
        });
        if dealer_natural {
            return Ok(());
        }
        while rules::dealer_should_draw(self.dealer.hand().score()) {
            let card = self.supply.draw()?;
            self.dealer.hand_mut().push(card);
            io.on_event(&RoundEvent::CardDealt {
                seat: Seat::Dealer,
                hand: 0,
                card,
                hidden: false,
            });
            io.on_event(&RoundEvent::HandScored {
                seat: Seat::Dealer,
                hand: 0,
                cards: self.dealer.hand().cards().to_vec(),
                score: self.dealer.hand().score(),
            });
        }
        io.on_event(&RoundEvent::DealerStands {
            score: self.dealer.hand().score(),
        });
        Ok(())
    }

    /// Settles every wagered hand against the dealer in hand order, then
    /// discards all hands (wagered or not) and prunes the emptied slots.
    fn settle<IO>(&mut self, io: &mut IO) -> Vec<SettlementEntry>
    where
        IO: EventSink + ?Sized,
    {
        let mut settlements = Vec::new();
        for seat in 0..self.players.len() {
            for idx in 0..self.players[seat].hands().len() {
                let wager = self.players[seat].hands()[idx].wager();
                if wager > 0 {
                    let outcome =
                        settlement::judge(&self.players[seat].hands()[idx], self.dealer.hand());
                    let credit = settlement::payout(outcome, wager);
                    let score = self.players[seat].hands()[idx].score();
                    self.players[seat].add_chips(credit);
                    io.on_event(&RoundEvent::HandSettled {
                        seat,
                        hand: idx,
                        outcome,
                        wager,
                        credit,
                        score,
                    });
                    settlements.push(SettlementEntry {
                        seat,
                        name: self.players[seat].name().to_string(),
                        hand: idx,
                        outcome,
                        wager,
                        credit,
                    });
                }
                self.supply
                    .discard_hand(&mut self.players[seat].hands_mut()[idx]);
            }
            self.players[seat].prune_empty_hands();
        }
        settlements
    }
}
