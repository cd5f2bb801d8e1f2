//! Entry synthesizer: trend, volatility and support levels into three entries

use tracing::{debug, warn};

use super::error::EngineError;
use super::validate_live_price;
use crate::common::math;
use crate::models::entry::{EntryLevel, EntrySuggestion};
use crate::models::indicators::{Indicators, Trend};

/// Every entry sits at least this fraction below the live price.
pub const MIN_UNDER_LIVE: f64 = 0.005;

pub const MAX_USER_DISCOUNT_PCT: f64 = 50.0;

/// Dip size for one level: `max(floor, atr_pct * atr_multiple)`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DipRule {
    floor: f64,
    atr_multiple: f64,
}

impl DipRule {
    const fn new(floor: f64, atr_multiple: f64) -> Self {
        Self { floor, atr_multiple }
    }

    fn size(&self, atr_pct: f64) -> f64 {
        self.floor.max(atr_pct * self.atr_multiple)
    }
}

// Uptrends expect shallow mean-reverting pullbacks, downtrends deeper capitulation.
const UP_DIPS: [DipRule; 3] = [
    DipRule::new(0.03, 1.2),
    DipRule::new(0.06, 2.0),
    DipRule::new(0.10, 3.0),
];

const DOWN_DIPS: [DipRule; 3] = [
    DipRule::new(0.07, 2.0),
    DipRule::new(0.12, 3.0),
    DipRule::new(0.18, 4.0),
];

/// Fractions of the live price to subtract, per level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipSizes {
    pub near: f64,
    pub mid: f64,
    pub deep: f64,
}

pub fn dip_sizes(trend: Trend, atr_pct: f64) -> DipSizes {
    let rules = match trend {
        Trend::Up => &UP_DIPS,
        Trend::Down => &DOWN_DIPS,
    };

    DipSizes {
        near: rules[0].size(atr_pct),
        mid: rules[1].size(atr_pct),
        deep: rules[2].size(atr_pct),
    }
}

/// Per-user extra haircut in percent, clamped to `[0, 50]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserDiscount(f64);

impl UserDiscount {
    pub fn new(pct: f64) -> Self {
        Self(math::clamp_finite(pct, 0.0, MAX_USER_DISCOUNT_PCT))
    }

    /// A missing setting means no discount.
    pub fn from_setting(pct: Option<f64>) -> Self {
        pct.map(Self::new).unwrap_or_default()
    }

    pub fn pct(&self) -> f64 {
        self.0
    }

    pub fn multiplier(&self) -> f64 {
        1.0 - self.0 / 100.0
    }
}

/// Support level used to cap the near entry.
///
/// Once price trades below the 61.8% retracement that level is no longer
/// support and the 78.6% one takes over.
pub fn support_mid(live_price: f64, indicators: &Indicators) -> f64 {
    if live_price > indicators.fib618 {
        indicators.fib618
    } else {
        indicators.fib786
    }
}

/// Build the EX1/EX2/EX3 suggestions.
///
/// Each entry is the lower of its volatility dip and its support level,
/// scaled by the user discount and capped at `MIN_UNDER_LIVE` below live.
/// Prices are non-increasing from EX1 to EX3.
///
/// Prices are not floored at zero. Once a dip exceeds 100% (a downtrend with
/// `atr_pct` above 0.25 reaches it at EX3) the entry goes negative and its
/// `pct_under_live` exceeds 100.
pub fn synthesize_entries(
    trend: Trend,
    indicators: &Indicators,
    live_price: f64,
    discount: UserDiscount,
) -> Result<[EntrySuggestion; 3], EngineError> {
    let live_price = validate_live_price(live_price)?;
    if let Some(name) = indicators.first_non_finite() {
        return Err(EngineError::IndicatorUnavailable(name));
    }

    let dips = dip_sizes(trend, indicators.atr_pct);
    let support = support_mid(live_price, indicators);

    let raw = [
        (live_price * (1.0 - dips.near)).min(support),
        (live_price * (1.0 - dips.mid)).min(indicators.fib786),
        (live_price * (1.0 - dips.deep)).min(indicators.swing_low),
    ];

    let max_allowed = live_price * (1.0 - MIN_UNDER_LIVE);
    let disc_mul = discount.multiplier();
    let mut prices = raw.map(|price| (price * disc_mul).min(max_allowed));

    for i in 1..prices.len() {
        if prices[i] > prices[i - 1] {
            warn!(
                trend = %trend,
                level = EntryLevel::ALL[i].name(),
                price = prices[i],
                cap = prices[i - 1],
                "entry deeper level above shallower one, clamping"
            );
            prices[i] = prices[i - 1];
        }
    }

    debug!(
        trend = %trend,
        live_price,
        atr_pct = indicators.atr_pct,
        dip_near = dips.near,
        dip_mid = dips.mid,
        dip_deep = dips.deep,
        support_mid = support,
        user_discount_pct = discount.pct(),
        ex1 = prices[0],
        ex2 = prices[1],
        ex3 = prices[2],
        "entries synthesized"
    );

    Ok([
        EntrySuggestion::new(EntryLevel::Near, prices[0], live_price),
        EntrySuggestion::new(EntryLevel::Mid, prices[1], live_price),
        EntrySuggestion::new(EntryLevel::Deep, prices[2], live_price),
    ])
}
