pub mod config;
pub mod dates;
pub mod decimal;
pub mod discount;
pub mod errors;
pub mod logging;
pub mod proration;
pub mod request;
pub mod statement;
pub mod types;

// re-export key types
pub use config::{Config, ConfigStore, JsonFileStore};
pub use dates::parse_date;
pub use decimal::{Money, Rate};
pub use discount::{ComponentDiscount, DiscountApportioner, DiscountDistribution, ServiceComponent};
pub use errors::{BillingError, Result};
pub use proration::{Allocation, AllocationBasis, ProrationEngine, Share};
pub use request::{process, BillingOutcome, BillingRequest};
pub use statement::{DiscountSection, Statement};
pub use types::{Beneficiary, BillingPeriod, ConsiderBounds, OccupancyWindow, Service};

// re-export commonly used external types
pub use chrono;
pub use rust_decimal::Decimal;
