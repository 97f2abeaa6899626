use crate::game::danger::{self, DangerTier};
use crate::game::dice::Dice;
use crate::game::naming::generate_planet_name;
use crate::game::tables::{
    ATMOSPHERES, BIOMES, CIVILIZATIONS, CLIMATES, DANGERS, EVENTS, LIFE_TRAITS, TEMPERAMENTS,
    TRADE_GOODS,
};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const VALUE_RANGE: RangeInclusive<u32> = 10..=50;
pub const UNKNOWN_RESOURCE: &str = "Unknown";

/// A generated world. The dashboard can hand one back to `assess_planet` as
/// JSON, so missing fields deserialize to empty strings and a zero value
/// instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Planet {
    pub name: String,
    pub climate: String,
    pub biome: String,
    pub life: String,
    pub atmosphere: String,
    pub danger: String,
    pub civilization: String,
    pub temperament: String,
    pub event: String,
    pub resource: String,
    /// Base trade value of `resource`.
    pub value: u32,
}

impl Planet {
    pub fn resource_name(&self) -> &str {
        if self.resource.is_empty() {
            UNKNOWN_RESOURCE
        } else {
            &self.resource
        }
    }

    pub fn risk_percent(&self) -> u32 {
        danger::risk_percent(&self.danger)
    }

    pub fn is_hostile(&self) -> bool {
        self.temperament.trim().eq_ignore_ascii_case("hostile")
    }

    pub fn assess(&self) -> Assessment {
        Assessment {
            name: self.name.clone(),
            danger: DangerTier::from_label(&self.danger),
            risk_percent: self.risk_percent(),
            hostile: self.is_hostile(),
            resource: self.resource_name().to_string(),
            value: self.value,
        }
    }
}

/// What a landing party needs to know before committing. `danger` is `None`
/// for labels we don't recognise, in which case the fallback risk applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub name: String,
    pub danger: Option<DangerTier>,
    pub risk_percent: u32,
    pub hostile: bool,
    pub resource: String,
    pub value: u32,
}

/// Rolls a fresh planet. Fields are drawn in declaration order.
pub fn generate_planet<D: Dice + ?Sized>(dice: &mut D) -> Planet {
    Planet {
        name: generate_planet_name(dice),
        climate: dice.pick(CLIMATES).to_string(),
        biome: dice.pick(BIOMES).to_string(),
        life: dice.pick(LIFE_TRAITS).to_string(),
        atmosphere: dice.pick(ATMOSPHERES).to_string(),
        danger: dice.pick(DANGERS).to_string(),
        civilization: dice.pick(CIVILIZATIONS).to_string(),
        temperament: dice.pick(TEMPERAMENTS).to_string(),
        event: dice.pick(EVENTS).to_string(),
        resource: dice.pick(TRADE_GOODS).to_string(),
        value: dice.roll(VALUE_RANGE),
    }
}
