use serde::Serialize;

/// Risk used when a planet carries a danger label we don't recognise.
pub const FALLBACK_RISK: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DangerTier {
    Low,
    Moderate,
    High,
    Extreme,
}

impl DangerTier {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(DangerTier::Low),
            "moderate" => Some(DangerTier::Moderate),
            "high" => Some(DangerTier::High),
            "extreme" => Some(DangerTier::Extreme),
            _ => None,
        }
    }

    /// Chance out of 100 that landing goes wrong.
    pub fn risk_percent(self) -> u32 {
        match self {
            DangerTier::Low => 10,
            DangerTier::Moderate => 20,
            DangerTier::High => 35,
            DangerTier::Extreme => 50,
        }
    }
}

pub fn risk_percent(danger: &str) -> u32 {
    DangerTier::from_label(danger).map_or(FALLBACK_RISK, DangerTier::risk_percent)
}
