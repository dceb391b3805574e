use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decimal::Money;
use crate::errors::{BillingError, Result};
use crate::proration::Allocation;
use crate::types::Beneficiary;

/// one billed sub-component (e.g. water, solid waste) with its own proration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceComponent {
    pub name: String,
    pub allocation: Allocation,
}

impl ServiceComponent {
    pub fn new(name: impl Into<String>, allocation: Allocation) -> Self {
        Self {
            name: name.into(),
            allocation,
        }
    }

    pub fn total(&self) -> Money {
        self.allocation.total
    }
}

/// part of the aggregate discount carried by one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDiscount {
    pub name: String,
    pub total: Money,
    pub discount: Money,
    pub upper: Money,
    pub lower: Money,
}

impl ComponentDiscount {
    pub fn for_beneficiary(&self, beneficiary: Beneficiary) -> Money {
        match beneficiary {
            Beneficiary::Upper => self.upper,
            Beneficiary::Lower => self.lower,
        }
    }
}

/// early-payment discount split across components and beneficiaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountDistribution {
    pub aggregate: Money,
    pub components: Vec<ComponentDiscount>,
    pub upper_discount: Money,
    pub lower_discount: Money,
    pub upper_after_discount: Money,
    pub lower_after_discount: Money,
}

impl DiscountDistribution {
    pub fn discount(&self, beneficiary: Beneficiary) -> Money {
        match beneficiary {
            Beneficiary::Upper => self.upper_discount,
            Beneficiary::Lower => self.lower_discount,
        }
    }

    pub fn after_discount(&self, beneficiary: Beneficiary) -> Money {
        match beneficiary {
            Beneficiary::Upper => self.upper_after_discount,
            Beneficiary::Lower => self.lower_after_discount,
        }
    }
}

/// apportions an aggregate discount by component share, then by the
/// proportions each component's allocation already holds
pub struct DiscountApportioner;

impl DiscountApportioner {
    pub fn apportion(components: &[ServiceComponent], discount: Money) -> Result<DiscountDistribution> {
        if discount.is_negative() {
            return Err(BillingError::InvalidAmount {
                input: discount.to_string(),
            });
        }

        let combined = components
            .iter()
            .try_fold(Money::ZERO, |acc, component| acc.checked_add(component.total()))
            .ok_or_else(|| BillingError::InvalidAmount {
                input: "combined component total".to_string(),
            })?;

        let mut shares = Vec::with_capacity(components.len());
        let mut upper_discount = Money::ZERO;
        let mut lower_discount = Money::ZERO;
        let mut upper_amount = Money::ZERO;
        let mut lower_amount = Money::ZERO;

        for component in components {
            let allocation = &component.allocation;
            let component_discount = discount.pro_rata(component.total(), combined);

            let (upper, lower) = if component.total().is_zero() {
                (Money::ZERO, Money::ZERO)
            } else {
                (
                    component_discount.share(allocation.proportion(Beneficiary::Upper)),
                    component_discount.share(allocation.proportion(Beneficiary::Lower)),
                )
            };
            debug!(
                component = %component.name,
                discount = %component_discount,
                %upper,
                %lower,
                "apportioned component discount"
            );

            upper_discount += upper;
            lower_discount += lower;
            upper_amount += allocation.amount(Beneficiary::Upper);
            lower_amount += allocation.amount(Beneficiary::Lower);

            shares.push(ComponentDiscount {
                name: component.name.clone(),
                total: component.total(),
                discount: component_discount.round_cents(),
                upper,
                lower,
            });
        }

        Ok(DiscountDistribution {
            aggregate: discount,
            components: shares,
            upper_discount,
            lower_discount,
            upper_after_discount: (upper_amount - upper_discount).round_cents(),
            lower_after_discount: (lower_amount - lower_discount).round_cents(),
        })
    }
}
