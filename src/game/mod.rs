pub mod actions;
pub mod danger;
pub mod dice;
pub mod naming;
pub mod planet;
pub mod player;
pub mod session;
pub mod tables;
pub mod trade;

pub use actions::{explore, scan, ExploreOutcome, Find, ScanOutcome};
pub use dice::Dice;
pub use planet::{generate_planet, Assessment, Planet};
pub use player::{default_player, CargoEntry, Player};
pub use session::{LeaveOutcome, MarketQuote, Session, SessionConfig, SessionView, Status};
pub use trade::{buy, get_trade_prices, sell, TradeOutcome};
