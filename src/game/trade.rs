//! Market prices and buy/sell against the current planet.
//!
//! Prices are re-rolled on every call; there is no market state pinned to a
//! planet visit, so a quote shown to the player may differ from the price a
//! following trade actually uses.

use crate::game::dice::Dice;
use crate::game::planet::Planet;
use crate::game::player::Player;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

pub const BUY_DISCOUNT: RangeInclusive<u32> = 1..=10;
pub const SELL_MARKUP: RangeInclusive<u32> = 1..=15;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TradeOutcome {
    pub success: bool,
    pub messages: Vec<String>,
    pub credits_delta: i64,
}

impl TradeOutcome {
    pub fn refused(message: impl Into<String>) -> Self {
        Self {
            success: false,
            messages: vec![message.into()],
            credits_delta: 0,
        }
    }
}

/// Returns `(buy_price, sell_price)` for the planet's resource. Draws the
/// discount first, then the markup.
pub fn get_trade_prices<D: Dice + ?Sized>(dice: &mut D, planet: &Planet) -> (u32, u32) {
    let base = planet.value;
    let buy_price = base.saturating_sub(dice.roll(BUY_DISCOUNT)).max(1);
    let sell_price = base.saturating_add(dice.roll(SELL_MARKUP));
    (buy_price, sell_price)
}

pub fn buy<D: Dice + ?Sized>(
    dice: &mut D,
    player: &mut Player,
    planet: &Planet,
    qty: u32,
) -> TradeOutcome {
    let (buy_price, _) = get_trade_prices(dice, planet);
    let total = i64::from(buy_price) * i64::from(qty);
    if player.credits < total {
        debug!(buy_price, qty, credits = player.credits, "buy refused");
        return TradeOutcome::refused("Not enough credits.");
    }

    let resource = planet.resource_name();
    player.credits -= total;
    player.add_to_cargo(resource, qty, buy_price);
    debug!(resource, buy_price, qty, total, "bought");

    TradeOutcome {
        success: true,
        messages: vec![format!("Bought {qty} x {resource} for {total} credits.")],
        credits_delta: -total,
    }
}

/// Sells at a fresh market price. What the cargo originally cost plays no part.
pub fn sell<D: Dice + ?Sized>(
    dice: &mut D,
    player: &mut Player,
    planet: &Planet,
    qty: u32,
) -> TradeOutcome {
    let (_, sell_price) = get_trade_prices(dice, planet);
    let resource = planet.resource_name();
    if !player.remove_from_cargo(resource, qty) {
        debug!(resource, qty, "sell refused");
        return TradeOutcome::refused("You don't have that resource.");
    }

    let total = i64::from(sell_price) * i64::from(qty);
    player.credits += total;
    debug!(resource, sell_price, qty, total, "sold");

    TradeOutcome {
        success: true,
        messages: vec![format!("Sold {qty} x {resource} for {total} credits.")],
        credits_delta: total,
    }
}
