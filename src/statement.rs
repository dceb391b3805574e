use std::fmt;

use crate::decimal::Money;
use crate::discount::DiscountDistribution;
use crate::types::Beneficiary;

/// currency printed on the late-payment line
pub const CURRENCY: &str = "CAD";

const DEPOSIT_REMINDER: &str = "Make sure that the deposit is made before the due date.";

/// discount data attached to a statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountSection {
    /// raw "paid before" date, printed verbatim (upper-cased) when present
    pub early_payment_date: Option<String>,
    pub distribution: DiscountDistribution,
}

/// fixed-structure statement text
///
/// Date strings are kept exactly as supplied and only upper-cased on output;
/// they are never parsed or reformatted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub service_label: String,
    pub total: Money,
    pub upper_amount: Money,
    pub lower_amount: Money,
    pub period_from: String,
    pub period_to: String,
    pub due_date: String,
    pub discount: Option<DiscountSection>,
    pub late_payment: Option<Money>,
}

impl Statement {
    pub fn amount(&self, beneficiary: Beneficiary) -> Money {
        match beneficiary {
            Beneficiary::Upper => self.upper_amount,
            Beneficiary::Lower => self.lower_amount,
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_discount(&self, f: &mut fmt::Formatter<'_>, section: &DiscountSection) -> fmt::Result {
        match &section.early_payment_date {
            Some(date) => write!(f, "\n\nDiscount distribution if paid before {}:", date.to_uppercase())?,
            None => write!(f, "\n\nDiscount distribution if paid early:")?,
        }

        let distribution = &section.distribution;
        for beneficiary in Beneficiary::ALL {
            write!(f, "\n{}: {}", beneficiary, distribution.discount(beneficiary))?;
            let parts = distribution
                .components
                .iter()
                .map(|c| format!("{} - {}", c.name, c.for_beneficiary(beneficiary)))
                .collect::<Vec<_>>();
            if !parts.is_empty() {
                write!(f, " ({})", parts.join(", "))?;
            }
        }

        write!(f, "\n\nTotal after discount:")?;
        for beneficiary in Beneficiary::ALL {
            write!(f, "\n{}: {}", beneficiary, distribution.after_discount(beneficiary))?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\nTotal: {}", self.service_label, self.total)?;
        for beneficiary in Beneficiary::ALL {
            write!(f, "\n{}: {}", beneficiary, self.amount(beneficiary))?;
        }

        let due = self.due_date.to_uppercase();
        write!(
            f,
            "\n\nPeriod: {} TO {}\n\nDUE DATE: {}\n\n{}",
            self.period_from.to_uppercase(),
            self.period_to.to_uppercase(),
            due,
            DEPOSIT_REMINDER,
        )?;

        if let Some(section) = &self.discount {
            self.write_discount(f, section)?;
        }

        if let Some(late) = self.late_payment {
            write!(
                f,
                "\n\nIf payment is made after {}, then the payment should be {} {}",
                due, late, CURRENCY
            )?;
        }
        Ok(())
    }
}
