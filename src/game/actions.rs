use crate::game::dice::Dice;
use crate::game::planet::Planet;
use crate::game::player::Player;
use serde::Serialize;
use std::ops::RangeInclusive;
use tracing::debug;

pub const RISK_ROLL: RangeInclusive<u32> = 1..=100;
pub const EXPLORE_DAMAGE: RangeInclusive<u32> = 5..=25;
pub const EXPLORE_FUEL: RangeInclusive<u32> = 5..=12;
pub const SCAN_FUEL: RangeInclusive<u32> = 3..=7;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Find {
    pub resource: String,
    pub value: u32,
}

/// Either `damage > 0` and nothing found, or `damage == 0` and `found` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExploreOutcome {
    pub success: bool,
    pub messages: Vec<String>,
    pub damage: u32,
    pub found: Option<Find>,
    pub fuel_used: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanOutcome {
    pub messages: Vec<String>,
    pub fuel_used: u32,
}

/// Lands on the planet. A risk roll below the planet's danger percentage
/// damages the hull; anything else brings one unit of the local resource
/// aboard at its base value. Fuel is spent either way.
pub fn explore<D: Dice + ?Sized>(
    dice: &mut D,
    player: &mut Player,
    planet: &Planet,
) -> ExploreOutcome {
    let risk = planet.risk_percent();
    let roll = dice.roll(RISK_ROLL);
    let mut messages = Vec::with_capacity(2);

    let (damage, found) = if roll < risk {
        let damage = dice.roll(EXPLORE_DAMAGE);
        player.take_damage(damage);
        messages.push(format!("Encountered danger! Hull -{damage}"));
        (damage, None)
    } else {
        let resource = planet.resource_name().to_string();
        player.add_to_cargo(&resource, 1, planet.value);
        messages.push(format!("Found {resource} worth {} credits.", planet.value));
        (
            0,
            Some(Find {
                resource,
                value: planet.value,
            }),
        )
    };

    let fuel_used = dice.roll(EXPLORE_FUEL);
    player.burn_fuel(fuel_used);
    messages.push(format!("Fuel used: -{fuel_used}"));

    debug!(
        planet = %planet.name,
        risk,
        roll,
        damage,
        fuel_used,
        "explore resolved"
    );

    ExploreOutcome {
        success: found.is_some(),
        messages,
        damage,
        found,
        fuel_used,
    }
}

/// Reads the planet's flavour event from orbit. Costs a little fuel, never fails.
pub fn scan<D: Dice + ?Sized>(dice: &mut D, player: &mut Player, planet: &Planet) -> ScanOutcome {
    let mut messages = vec![format!("Scan detected: {}", planet.event)];
    let fuel_used = dice.roll(SCAN_FUEL);
    player.burn_fuel(fuel_used);
    messages.push(format!("Fuel used: -{fuel_used}"));

    debug!(planet = %planet.name, fuel_used, "scan resolved");

    ScanOutcome {
        messages,
        fuel_used,
    }
}
