//! Data access port trait.

use crate::domain::error::SatstackerError;
use crate::domain::series::PriceSeries;
use chrono::NaiveDateTime;

pub trait DataPort {
    /// Fetch the price series identified by `source`, keeping only bars at
    /// or after `cutoff`. Implementations must return a validated series
    /// (strictly increasing timestamps, positive prices).
    fn fetch_series(
        &self,
        source: &str,
        cutoff: NaiveDateTime,
    ) -> Result<PriceSeries, SatstackerError>;
}
