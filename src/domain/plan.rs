use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A monetary amount in BRL with cent precision.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Price(pub Decimal);

impl Price {
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Rounded to whole cents, halves away from zero.
    pub fn rounded(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Amount with exactly two decimals and a dot separator, e.g. `29.90`.
    pub fn to_fixed(&self) -> String {
        format!("{:.2}", self.rounded().0)
    }

    /// Amount as shown to Brazilian customers, e.g. `R$ 29,90`.
    pub fn to_brl(&self) -> String {
        format!("R$ {}", self.to_fixed().replace('.', ","))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    #[default]
    Basic,
    Premium,
    Pro,
}

impl PlanId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanId::Basic => "basic",
            PlanId::Premium => "premium",
            PlanId::Pro => "pro",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(PlanId::Basic),
            "premium" => Ok(PlanId::Premium),
            "pro" => Ok(PlanId::Pro),
            other => Err(format!("unknown plan: {other}")),
        }
    }
}

/// A subscription tier. Defined by the static catalog, never mutated.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct Plan {
    pub id: PlanId,
    pub name: &'static str,
    pub monthly_price: Price,
}

/// Share of the first month waived by the 7-day free trial.
const TRIAL_DISCOUNT_RATE: Decimal = dec!(0.23);

/// The order summary shown beside the checkout form, in whole cents.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub trial_discount: Price,
    pub total_today: Price,
}

static CATALOG: [Plan; 3] = [
    Plan {
        id: PlanId::Basic,
        name: "Básico",
        monthly_price: Price::new(dec!(29.90)),
    },
    Plan {
        id: PlanId::Premium,
        name: "Premium",
        monthly_price: Price::new(dec!(49.90)),
    },
    Plan {
        id: PlanId::Pro,
        name: "Pro",
        monthly_price: Price::new(dec!(79.90)),
    },
];

impl Plan {
    pub fn get(id: PlanId) -> &'static Plan {
        CATALOG
            .iter()
            .find(|plan| plan.id == id)
            .unwrap_or(&CATALOG[0])
    }

    /// Resolves a plan from an untrusted identifier (e.g. a `?plan=` query value).
    ///
    /// Missing or unrecognized identifiers resolve to the basic plan.
    pub fn lookup(id: Option<&str>) -> &'static Plan {
        let id = id
            .and_then(|raw| raw.trim().parse::<PlanId>().ok())
            .unwrap_or_default();
        Self::get(id)
    }

    /// Subtotal, trial discount and the amount due today for one month.
    pub fn order_summary(&self) -> OrderSummary {
        let subtotal = self.monthly_price.0;
        OrderSummary {
            subtotal: self.monthly_price.rounded(),
            trial_discount: Price::new(subtotal * TRIAL_DISCOUNT_RATE).rounded(),
            total_today: Price::new(subtotal * (Decimal::ONE - TRIAL_DISCOUNT_RATE)).rounded(),
        }
    }
}
