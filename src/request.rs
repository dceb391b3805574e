use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::dates::{parse_date, split_date_range};
use crate::decimal::Money;
use crate::discount::{DiscountApportioner, DiscountDistribution, ServiceComponent};
use crate::errors::{BillingError, Result};
use crate::proration::ProrationEngine;
use crate::statement::{DiscountSection, Statement};
use crate::types::{Beneficiary, BillingPeriod, ConsiderBounds, OccupancyWindow, Service};

pub const WATER_COMPONENT: &str = "Water";
pub const WASTE_COMPONENT: &str = "Solid Waste";

/// largest amount accepted from raw input
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// raw inputs as collected by a front-end; nothing is parsed yet
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingRequest {
    pub service: Option<String>,
    /// bill amount for single-amount services
    pub amount: Option<String>,
    /// water/sewer amount for the combined service
    pub water_amount: Option<String>,
    /// solid waste amount for the combined service
    pub waste_amount: Option<String>,
    pub period_from: Option<String>,
    pub period_to: Option<String>,
    /// "<from> to <to>", used when the separate bounds are absent
    pub period_range: Option<String>,
    pub upper_start: Option<String>,
    pub lower_start: Option<String>,
    pub upper_end: Option<String>,
    pub lower_end: Option<String>,
    pub consider_start: Option<bool>,
    pub consider_end: Option<bool>,
    pub due_date: Option<String>,
    pub early_payment_date: Option<String>,
    pub early_payment_discount: Option<String>,
    pub late_amount: Option<String>,
}

/// computed statement plus everything needed to persist or inspect it
#[derive(Debug, Clone)]
pub struct BillingOutcome {
    pub statement: Statement,
    pub text: String,
    pub components: Vec<ServiceComponent>,
    pub discount: Option<DiscountDistribution>,
    /// updated defaults to persist; `None` when nothing changed
    pub config: Option<Config>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str> {
    present(value).ok_or_else(|| BillingError::missing(field))
}

fn parse_money(raw: &str) -> Result<Money> {
    let amount: Money = raw.parse().map_err(|_| BillingError::InvalidAmount {
        input: raw.to_string(),
    })?;
    if amount.is_negative() || amount > Money::from_major(MAX_AMOUNT) {
        return Err(BillingError::InvalidAmount {
            input: raw.to_string(),
        });
    }
    Ok(amount)
}

fn checked_sum(amounts: impl IntoIterator<Item = Money>) -> Result<Money> {
    amounts.into_iter().try_fold(Money::ZERO, |acc, amount| {
        acc.checked_add(amount).ok_or_else(|| BillingError::InvalidAmount {
            input: format!("{} + {}", acc, amount),
        })
    })
}

fn required_money(value: &Option<String>, field: &str) -> Result<Money> {
    parse_money(required(value, field)?)
}

fn optional_money(value: &Option<String>) -> Result<Option<Money>> {
    present(value).map(parse_money).transpose()
}

impl BillingRequest {
    /// raw period bounds, from the separate fields or the range string
    pub fn period_bounds(&self) -> Result<(&str, &str)> {
        if let (Some(from), Some(to)) = (present(&self.period_from), present(&self.period_to)) {
            return Ok((from, to));
        }
        match present(&self.period_range) {
            Some(range) => split_date_range(range).ok_or_else(|| BillingError::InvalidDateFormat {
                input: range.to_string(),
            }),
            None => Err(BillingError::missing("period")),
        }
    }

    /// consider-start is mandatory; consider-end defaults to off
    pub fn consider_bounds(&self) -> Result<ConsiderBounds> {
        let start = self
            .consider_start
            .ok_or_else(|| BillingError::missing("consider_start"))?;
        Ok(ConsiderBounds {
            start,
            end: self.consider_end.unwrap_or(false),
        })
    }

    fn occupancy(
        &self,
        config: &Config,
        beneficiary: Beneficiary,
        consider: ConsiderBounds,
        period: &BillingPeriod,
    ) -> Result<OccupancyWindow> {
        let end = match beneficiary {
            Beneficiary::Upper => present(&self.upper_end),
            Beneficiary::Lower => present(&self.lower_end),
        };
        let end = if consider.end { end } else { None };
        if consider.start {
            return config.occupancy(beneficiary, end);
        }
        // the engine ignores the start here; keep it from invalidating the window
        let end = end.map(parse_date).transpose()?;
        let start = end.map_or(period.from(), |end| end.min(period.from()));
        OccupancyWindow::new(start, end)
    }
}

/// run one request against the stored defaults
///
/// Every raw input is validated before the stored start dates are touched.
pub fn process(request: &BillingRequest, mut config: Config) -> Result<BillingOutcome> {
    let service = Service::parse(required(&request.service, "service")?);
    let consider = request.consider_bounds()?;
    info!(service = service.label(), ?consider, "processing billing request");

    let (from_raw, to_raw) = request.period_bounds()?;
    let period = BillingPeriod::parse(from_raw, to_raw)?;
    let due_date = required(&request.due_date, "due_date")?;

    let amounts = if service.is_combined() {
        vec![
            (WATER_COMPONENT, required_money(&request.water_amount, "water_amount")?),
            (WASTE_COMPONENT, required_money(&request.waste_amount, "waste_amount")?),
        ]
    } else {
        vec![(service.label(), required_money(&request.amount, "amount")?)]
    };
    let aggregate_discount = optional_money(&request.early_payment_discount)?;
    let late_payment = optional_money(&request.late_amount)?;

    let config_changed = consider.start
        && config.apply_start_dates(present(&request.upper_start), present(&request.lower_start))?;

    let upper = request.occupancy(&config, Beneficiary::Upper, consider, &period)?;
    let lower = request.occupancy(&config, Beneficiary::Lower, consider, &period)?;
    let engine = ProrationEngine::new(consider);

    let components = amounts
        .into_iter()
        .map(|(name, amount)| ServiceComponent::new(name, engine.allocate(amount, &period, &upper, &lower)))
        .collect::<Vec<_>>();

    let discount = aggregate_discount
        .map(|aggregate| DiscountApportioner::apportion(&components, aggregate))
        .transpose()?;

    let total = checked_sum(components.iter().map(|c| c.total()))?;
    let upper_amount = checked_sum(components.iter().map(|c| c.allocation.amount(Beneficiary::Upper)))?;
    let lower_amount = checked_sum(components.iter().map(|c| c.allocation.amount(Beneficiary::Lower)))?;
    debug!(%total, %upper_amount, %lower_amount, "allocated bill");

    let statement = Statement {
        service_label: service.label().to_string(),
        total,
        upper_amount,
        lower_amount,
        period_from: from_raw.to_string(),
        period_to: to_raw.to_string(),
        due_date: due_date.to_string(),
        discount: discount.clone().map(|distribution| DiscountSection {
            early_payment_date: present(&request.early_payment_date).map(str::to_string),
            distribution,
        }),
        late_payment,
    };
    let text = statement.render();

    Ok(BillingOutcome {
        statement,
        text,
        components,
        discount,
        config: config_changed.then_some(config),
    })
}
