pub const SYLLABLES: &[&str] = &["zor", "ath", "mar", "qu", "bel", "tri", "ul", "rax", "ven"];

pub const CLIMATES: &[&str] = &[
    "frozen",
    "tropical",
    "arid",
    "stormy",
    "toxic",
    "radioactive",
    "temperate",
    "oceanic",
    "volcanic",
];
pub const BIOMES: &[&str] = &[
    "crystal forests",
    "lava plains",
    "fog swamps",
    "floating islands",
    "sapphire oceans",
];
pub const LIFE_TRAITS: &[&str] = &[
    "bioluminescent",
    "telepathic",
    "amphibious",
    "metallic",
    "moss-covered",
];
pub const ATMOSPHERES: &[&str] = &["breathable", "acidic", "hallucinogenic", "toxic", "metallic"];
pub const DANGERS: &[&str] = &["low", "moderate", "high", "extreme"];

pub const CIVILIZATIONS: &[&str] = &[
    "primitive tribes",
    "steam-tech cultures",
    "cybernetic hive minds",
    "galactic merchants",
    "AI-run empires",
];
pub const TEMPERAMENTS: &[&str] = &["friendly", "neutral", "suspicious", "hostile", "weirdly flirty"];

pub const TRADE_GOODS: &[&str] = &["rare crystals", "alien spices", "molecular circuits", "void gems"];
pub const EVENTS: &[&str] = &[
    "A solar flare sweeps the orbit.",
    "You detect ancient ruins.",
    "A strange signal pierces your scanners.",
    "Time seems to run slightly backward here.",
    "Gravity bends light in odd ways.",
];
