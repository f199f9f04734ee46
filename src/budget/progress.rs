use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Indicator color when a group is over its limit.
pub const ALERT_RED: &str = "#ef4444";
/// Indicator color when a group is within 10% of its limit.
pub const WARNING_ORANGE: &str = "#f97316";

/// Spend-vs-limit classification used to color progress indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Normal,
    Near,
    Over,
}

impl Tier {
    /// Indicator color for this tier. `base` is the caller's color for
    /// the normal case.
    pub fn color<'a>(&self, base: &'a str) -> &'a str {
        match self {
            Self::Over => ALERT_RED,
            Self::Near => WARNING_ORANGE,
            Self::Normal => base,
        }
    }
}

/// Clamped fill ratio and tier for one spent/limit pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Fill ratio in [0, 1].
    pub ratio: f64,
    pub tier: Tier,
}

impl Progress {
    /// Rounded display percentage of the clamped ratio.
    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0).round() as u32
    }
}

/// Derive the fill ratio and tier for a progress indicator.
///
/// A zero (or negative) limit yields ratio 0 and `Tier::Normal`; the
/// division never produces NaN or infinity. The tier is decided on the
/// raw unclamped quotient with exact decimal comparison: `Over` strictly
/// above 1, `Near` strictly above 0.9.
pub fn progress_of(spent: Decimal, limit: Decimal) -> Progress {
    if limit <= Decimal::ZERO {
        return Progress {
            ratio: 0.0,
            tier: Tier::Normal,
        };
    }
    let raw = spent / limit;
    let tier = if raw > Decimal::ONE {
        Tier::Over
    } else if raw > Decimal::new(9, 1) {
        Tier::Near
    } else {
        Tier::Normal
    };
    Progress {
        ratio: raw.to_f64().unwrap_or(0.0).clamp(0.0, 1.0),
        tier,
    }
}
