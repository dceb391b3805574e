pub mod engine;

use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::types::{Beneficiary, BillingPeriod};

pub use engine::ProrationEngine;

/// how an allocation was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AllocationBasis {
    /// no occupancy bound considered: the amount is halved
    EvenSplit,
    /// amount weighted by days inside the billing period
    DayWeighted,
}

/// one beneficiary's part of an amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Share {
    pub days: u32,
    pub proportion: Rate,
    pub amount: Money,
}

/// per-beneficiary split of a single amount over a billing period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub total: Money,
    pub period: BillingPeriod,
    pub basis: AllocationBasis,
    pub upper: Share,
    pub lower: Share,
}

impl Allocation {
    pub fn share(&self, beneficiary: Beneficiary) -> &Share {
        match beneficiary {
            Beneficiary::Upper => &self.upper,
            Beneficiary::Lower => &self.lower,
        }
    }

    pub fn amount(&self, beneficiary: Beneficiary) -> Money {
        self.share(beneficiary).amount
    }

    pub fn proportion(&self, beneficiary: Beneficiary) -> Rate {
        self.share(beneficiary).proportion
    }

    /// sum of both beneficiary amounts; may differ from `total` when occupancy
    /// does not cover the whole period
    pub fn allocated(&self) -> Money {
        self.upper.amount + self.lower.amount
    }
}
