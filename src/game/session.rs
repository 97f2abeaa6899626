//! A single playthrough: one player, the planet currently in orbit, and the
//! communications log. Every front-end drives the game through this type so
//! turn counting, leaving orbit, hostile markets and game over behave the same
//! everywhere.

use crate::game::actions::{self, ExploreOutcome, ScanOutcome};
use crate::game::dice::Dice;
use crate::game::planet::{generate_planet, Planet};
use crate::game::player::Player;
use crate::game::trade::{self, TradeOutcome};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::collections::VecDeque;
use std::ops::RangeInclusive;
use tracing::{debug, info};

pub const LEAVE_FUEL: RangeInclusive<u32> = 2..=6;

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub seed: u64,
    /// Swap in a fresh planet after every turn-consuming action.
    pub auto_next_planet: bool,
    pub log_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            auto_next_planet: false,
            log_capacity: 12,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Active,
    OutOfFuel,
    HullCollapsed,
}

impl Status {
    pub fn of(player: &Player) -> Self {
        if player.fuel == 0 {
            Status::OutOfFuel
        } else if player.hull == 0 {
            Status::HullCollapsed
        } else {
            Status::Active
        }
    }

    pub fn is_over(self) -> bool {
        self != Status::Active
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Status::Active => None,
            Status::OutOfFuel => Some("You ran out of fuel. GAME OVER."),
            Status::HullCollapsed => Some("Your hull collapsed. GAME OVER."),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeaveOutcome {
    pub messages: Vec<String>,
    pub fuel_used: u32,
    pub next_planet: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MarketQuote {
    pub resource: String,
    pub buy_price: u32,
    pub sell_price: u32,
}

/// Everything a dashboard needs to draw one frame.
#[derive(Debug, Serialize)]
pub struct SessionView<'a> {
    pub planet: &'a Planet,
    pub player: &'a Player,
    pub status: Status,
    pub last_message: Option<&'a str>,
    pub log: Vec<&'a str>,
    pub market: Option<MarketQuote>,
    pub auto_next_planet: bool,
}

pub struct Session<D = ChaCha8Rng> {
    dice: D,
    player: Player,
    planet: Planet,
    log: VecDeque<String>,
    config: SessionConfig,
}

impl Session<ChaCha8Rng> {
    pub fn new(config: SessionConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self::with_dice(rng, config)
    }
}

impl<D: Dice> Session<D> {
    pub fn with_dice(mut dice: D, config: SessionConfig) -> Self {
        let planet = generate_planet(&mut dice);
        info!(seed = config.seed, planet = %planet.name, "session started");
        Self {
            dice,
            player: Player::default(),
            planet,
            log: VecDeque::with_capacity(config.log_capacity),
            config,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn planet(&self) -> &Planet {
        &self.planet
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn status(&self) -> Status {
        Status::of(&self.player)
    }

    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn last_message(&self) -> Option<&str> {
        self.log.back().map(String::as_str)
    }

    pub fn set_auto_next_planet(&mut self, enabled: bool) {
        self.config.auto_next_planet = enabled;
    }

    /// Rolls a new planet without spending a turn.
    pub fn new_planet(&mut self) -> &Planet {
        self.planet = generate_planet(&mut self.dice);
        self.record(format!("Generated planet {}", self.planet.name));
        &self.planet
    }

    /// `None` once the game is over.
    pub fn explore(&mut self) -> Option<ExploreOutcome> {
        if self.refuse_when_over() {
            return None;
        }
        let outcome = actions::explore(&mut self.dice, &mut self.player, &self.planet);
        self.record_all(&outcome.messages);
        self.finish_turn(true);
        Some(outcome)
    }

    /// `None` once the game is over.
    pub fn scan(&mut self) -> Option<ScanOutcome> {
        if self.refuse_when_over() {
            return None;
        }
        let outcome = actions::scan(&mut self.dice, &mut self.player, &self.planet);
        self.record_all(&outcome.messages);
        self.finish_turn(true);
        Some(outcome)
    }

    /// Burns a little fuel breaking orbit and moves on to a new planet.
    pub fn leave(&mut self) -> Option<LeaveOutcome> {
        if self.refuse_when_over() {
            return None;
        }
        let fuel_used = self.dice.roll(LEAVE_FUEL);
        self.player.burn_fuel(fuel_used);
        self.planet = generate_planet(&mut self.dice);

        let messages = vec![
            format!("Left planet. Fuel -{fuel_used}"),
            format!("Generated planet {}", self.planet.name),
        ];
        self.record_all(&messages);
        self.finish_turn(false);
        Some(LeaveOutcome {
            messages,
            fuel_used,
            next_planet: self.planet.name.clone(),
        })
    }

    /// A fresh quote, or `None` when the locals won't trade.
    pub fn market(&mut self) -> Option<MarketQuote> {
        if self.planet.is_hostile() {
            return None;
        }
        let (buy_price, sell_price) = trade::get_trade_prices(&mut self.dice, &self.planet);
        Some(MarketQuote {
            resource: self.planet.resource_name().to_string(),
            buy_price,
            sell_price,
        })
    }

    pub fn buy(&mut self, qty: u32) -> TradeOutcome {
        let outcome = match self.trade_refusal(qty) {
            Some(refused) => refused,
            None => trade::buy(&mut self.dice, &mut self.player, &self.planet, qty),
        };
        self.record_all(&outcome.messages);
        outcome
    }

    pub fn sell(&mut self, qty: u32) -> TradeOutcome {
        let outcome = match self.trade_refusal(qty) {
            Some(refused) => refused,
            None => trade::sell(&mut self.dice, &mut self.player, &self.planet, qty),
        };
        self.record_all(&outcome.messages);
        outcome
    }

    /// Back to a fresh ship over a fresh planet with auto-advance switched
    /// off. Keeps the dice stream going.
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.config.auto_next_planet = false;
        self.planet = generate_planet(&mut self.dice);
        self.log.clear();
        self.record("Game restarted.".to_string());
        info!(planet = %self.planet.name, "session restarted");
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Takes `&mut self` because the market quote is re-rolled on every view.
    pub fn snapshot(&mut self) -> SessionView<'_> {
        let market = self.market();
        SessionView {
            planet: &self.planet,
            player: &self.player,
            status: self.status(),
            last_message: self.log.back().map(String::as_str),
            log: self.log.iter().map(String::as_str).collect(),
            market,
            auto_next_planet: self.config.auto_next_planet,
        }
    }

    fn trade_refusal(&self, qty: u32) -> Option<TradeOutcome> {
        if let Some(msg) = self.status().message() {
            return Some(TradeOutcome::refused(msg));
        }
        if self.planet.is_hostile() {
            return Some(TradeOutcome::refused("Locals hostile. Trade unavailable."));
        }
        if qty == 0 {
            return Some(TradeOutcome::refused("Quantity must be at least 1."));
        }
        None
    }

    fn refuse_when_over(&mut self) -> bool {
        match self.status().message() {
            Some(msg) => {
                self.record(msg.to_string());
                true
            }
            None => false,
        }
    }

    fn finish_turn(&mut self, auto_advance: bool) {
        let turn = self.player.advance_turn();
        let status = self.status();
        debug!(turn, ?status, fuel = self.player.fuel, hull = self.player.hull, "turn finished");

        match status {
            Status::OutOfFuel => self.record("Game Over: out of fuel.".to_string()),
            Status::HullCollapsed => self.record("Game Over: hull collapsed.".to_string()),
            Status::Active if auto_advance && self.config.auto_next_planet => {
                self.planet = generate_planet(&mut self.dice);
                self.record(format!("Auto-generated planet {}", self.planet.name));
            }
            Status::Active => {}
        }
    }

    fn record_all(&mut self, messages: &[String]) {
        for msg in messages {
            self.record(msg.clone());
        }
    }

    fn record(&mut self, line: String) {
        if self.config.log_capacity == 0 {
            return;
        }
        while self.log.len() >= self.config.log_capacity {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::dice::ScriptedDice;

    // Draws that generate a low-danger, friendly "Zorath" selling rare crystals at 30.
    const FRIENDLY_PLANET: [u32; 13] = [2, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 30];
    // Same, but the locals are hostile.
    const HOSTILE_PLANET: [u32; 13] = [2, 0, 1, 0, 0, 0, 0, 0, 0, 3, 0, 0, 30];

    fn scripted(planet: &[u32], draws: &[u32]) -> Session<ScriptedDice> {
        let all: Vec<u32> = planet.iter().chain(draws).copied().collect();
        Session::with_dice(ScriptedDice::new(&all), SessionConfig::default())
    }

    #[test]
    fn explore_and_scan_consume_turns() {
        let mut session = Session::new(SessionConfig {
            seed: 1,
            ..SessionConfig::default()
        });
        let name = session.planet().name.clone();

        assert!(session.explore().is_some());
        assert!(session.scan().is_some());

        assert_eq!(session.player().turns, 2);
        assert_eq!(session.planet().name, name);
        assert!(session.last_message().unwrap().starts_with("Fuel used: -"));
    }

    #[test]
    fn trades_do_not_consume_turns() {
        let mut session = scripted(&FRIENDLY_PLANET, &[10, 1]);
        let out = session.buy(1);
        assert!(out.success);
        assert_eq!(session.player().turns, 0);
        assert_eq!(session.player().cargo_quantity("rare crystals"), 1);
    }

    #[test]
    fn leaving_moves_to_a_new_planet() {
        let mut draws = vec![4];
        draws.extend_from_slice(&HOSTILE_PLANET);
        let mut session = scripted(&FRIENDLY_PLANET, &draws);

        let out = session.leave().unwrap();

        assert_eq!(out.fuel_used, 4);
        assert_eq!(out.next_planet, "Zorath");
        assert_eq!(session.player().fuel, 96);
        assert_eq!(session.player().turns, 1);
        assert!(session.planet().is_hostile());
        assert_eq!(
            session.log().collect::<Vec<_>>(),
            vec!["Left planet. Fuel -4", "Generated planet Zorath"]
        );
    }

    #[test]
    fn hostile_locals_refuse_trade() {
        let mut session = scripted(&HOSTILE_PLANET, &[]);
        assert!(session.market().is_none());

        let out = session.buy(1);
        assert!(!out.success);
        assert_eq!(out.messages, vec!["Locals hostile. Trade unavailable."]);
        assert_eq!(session.player().credits, 50);
    }

    #[test]
    fn zero_quantity_is_refused_without_rolling() {
        let mut session = scripted(&FRIENDLY_PLANET, &[]);
        let out = session.sell(0);
        assert!(!out.success);
        assert_eq!(out.messages, vec!["Quantity must be at least 1."]);
    }

    #[test]
    fn game_over_blocks_further_turns() {
        // safe landing on fuel 100 with 12 fuel a turn runs dry on the ninth
        let mut session = scripted(&FRIENDLY_PLANET, &[50, 12].repeat(9));
        for _ in 0..9 {
            session.explore().unwrap();
        }
        assert_eq!(session.status(), Status::OutOfFuel);
        assert_eq!(session.last_message(), Some("Game Over: out of fuel."));

        assert!(session.explore().is_none());
        assert!(session.scan().is_none());
        assert!(session.leave().is_none());
        assert_eq!(session.player().turns, 9);
        assert_eq!(
            session.last_message(),
            Some("You ran out of fuel. GAME OVER.")
        );
    }

    #[test]
    fn hull_collapse_is_reported() {
        let mut draws = Vec::new();
        for _ in 0..4 {
            draws.extend_from_slice(&[1, 25, 5]);
        }
        let mut session = scripted(&FRIENDLY_PLANET, &draws);
        for _ in 0..4 {
            session.explore().unwrap();
        }
        assert_eq!(session.player().hull, 0);
        assert_eq!(session.status(), Status::HullCollapsed);
        assert_eq!(session.last_message(), Some("Game Over: hull collapsed."));
    }

    #[test]
    fn auto_next_swaps_planet_after_a_turn() {
        let mut draws = vec![7];
        draws.extend_from_slice(&HOSTILE_PLANET);
        let mut session = scripted(&FRIENDLY_PLANET, &draws);
        session.set_auto_next_planet(true);

        session.scan().unwrap();

        assert!(session.planet().is_hostile());
        assert_eq!(session.last_message(), Some("Auto-generated planet Zorath"));
    }

    #[test]
    fn restart_resets_player_and_log() {
        let mut session = Session::new(SessionConfig {
            seed: 8,
            ..SessionConfig::default()
        });
        session.set_auto_next_planet(true);
        session.explore();
        session.scan();
        session.restart();

        assert_eq!(session.player(), &Player::default());
        assert!(!session.config().auto_next_planet);
        assert_eq!(session.log().collect::<Vec<_>>(), vec!["Game restarted."]);
    }

    #[test]
    fn log_keeps_only_the_newest_lines() {
        let mut session = Session::new(SessionConfig {
            seed: 4,
            log_capacity: 3,
            ..SessionConfig::default()
        });
        for _ in 0..5 {
            session.new_planet();
        }
        let name = session.planet().name.clone();
        assert_eq!(session.log().count(), 3);
        let expected = format!("Generated planet {name}");
        assert_eq!(session.last_message(), Some(expected.as_str()));

        session.clear_log();
        assert!(session.last_message().is_none());
    }

    #[test]
    fn snapshot_serializes_for_the_dashboard() {
        let mut session = Session::new(SessionConfig::default());
        session.scan();
        let hostile = session.planet().is_hostile();

        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["status"], "active");
        assert_eq!(json["player"]["turns"], 1);
        assert_eq!(json["market"].is_null(), hostile);
        assert!(json["planet"]["name"].is_string());
        assert_eq!(json["log"].as_array().unwrap().len(), 2);
    }
}
