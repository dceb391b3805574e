use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::proration::{Allocation, AllocationBasis, Share};
use crate::types::{days_inclusive, BillingPeriod, ConsiderBounds, OccupancyWindow};

/// engine splitting an amount by occupied days
///
/// Bounds that are not considered are replaced by the period's own bound.
/// Whenever at least one side is considered, each beneficiary receives
/// `proportion * amount`; the amount is never halved first.
#[derive(Debug, Clone, Copy)]
pub struct ProrationEngine {
    pub consider: ConsiderBounds,
}

impl ProrationEngine {
    pub fn new(consider: ConsiderBounds) -> Self {
        Self { consider }
    }

    /// occupancy window with ignored bounds replaced by the period's bounds
    pub fn effective_window(
        &self,
        period: &BillingPeriod,
        window: &OccupancyWindow,
    ) -> (NaiveDate, NaiveDate) {
        let start = if self.consider.start {
            window.start()
        } else {
            period.from()
        };
        let end = match (self.consider.end, window.end()) {
            (true, Some(end)) => end,
            _ => period.to(),
        };
        (start, end)
    }

    /// days of the period inside the effective window
    pub fn occupied_days(&self, period: &BillingPeriod, window: &OccupancyWindow) -> u32 {
        let (start, end) = self.effective_window(period, window);
        days_inclusive(start.max(period.from()), end.min(period.to()))
    }

    fn weighted_share(
        &self,
        amount: Money,
        period: &BillingPeriod,
        window: &OccupancyWindow,
    ) -> Share {
        let days = self.occupied_days(period, window);
        let proportion = Rate::from_ratio(days, period.day_count());
        Share {
            days,
            proportion,
            amount: amount.share(proportion),
        }
    }

    /// split `amount` between the upper and lower units
    pub fn allocate(
        &self,
        amount: Money,
        period: &BillingPeriod,
        upper: &OccupancyWindow,
        lower: &OccupancyWindow,
    ) -> Allocation {
        if !self.consider.any() {
            let half = Share {
                days: period.day_count(),
                proportion: Rate::from_decimal(dec!(0.5)),
                amount: (amount / dec!(2)).round_cents(),
            };
            debug!(%amount, half = %half.amount, "no occupancy bounds considered, splitting evenly");
            return Allocation {
                total: amount,
                period: *period,
                basis: AllocationBasis::EvenSplit,
                upper: half,
                lower: half,
            };
        }

        let upper = self.weighted_share(amount, period, upper);
        let lower = self.weighted_share(amount, period, lower);
        debug!(
            %amount,
            period_days = period.day_count(),
            upper_days = upper.days,
            lower_days = lower.days,
            upper_amount = %upper.amount,
            lower_amount = %lower.amount,
            "prorated by occupancy"
        );

        Allocation {
            total: amount,
            period: *period,
            basis: AllocationBasis::DayWeighted,
            upper,
            lower,
        }
    }
}
