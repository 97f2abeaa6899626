use serde::Serialize;
use std::collections::BTreeMap;

pub const STARTING_FUEL: u32 = 100;
pub const STARTING_HULL: u32 = 100;
pub const STARTING_CREDITS: i64 = 50;

/// One line of the hold. `value` is what the first unit cost us, not what it sells for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CargoEntry {
    pub quantity: u32,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    pub fuel: u32,
    pub hull: u32,
    pub credits: i64,
    pub turns: u32,
    pub cargo: BTreeMap<String, CargoEntry>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            fuel: STARTING_FUEL,
            hull: STARTING_HULL,
            credits: STARTING_CREDITS,
            turns: 0,
            cargo: BTreeMap::new(),
        }
    }
}

pub fn default_player() -> Player {
    Player::default()
}

impl Player {
    /// Upserts `resource`. A new entry records `unit_value`; an existing one
    /// keeps its first price and only grows.
    pub fn add_to_cargo(&mut self, resource: &str, qty: u32, unit_value: u32) {
        let entry = self
            .cargo
            .entry(resource.to_string())
            .or_insert(CargoEntry {
                quantity: 0,
                value: unit_value,
            });
        entry.quantity = entry.quantity.saturating_add(qty);
    }

    /// Takes `qty` units out of the hold, dropping the entry once it is empty.
    /// Returns false and leaves the hold alone if there aren't enough.
    pub fn remove_from_cargo(&mut self, resource: &str, qty: u32) -> bool {
        let depleted = match self.cargo.get_mut(resource) {
            Some(entry) if entry.quantity >= qty => {
                entry.quantity -= qty;
                entry.quantity == 0
            }
            _ => return false,
        };
        if depleted {
            self.cargo.remove(resource);
        }
        true
    }

    pub fn cargo_quantity(&self, resource: &str) -> u32 {
        self.cargo.get(resource).map_or(0, |e| e.quantity)
    }

    pub fn burn_fuel(&mut self, amount: u32) {
        self.fuel = self.fuel.saturating_sub(amount);
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hull = self.hull.saturating_sub(amount);
    }

    pub fn advance_turn(&mut self) -> u32 {
        self.turns = self.turns.saturating_add(1);
        self.turns
    }
}
