//! Configuration types for the timeclock engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::paysheet::NisBracket;

/// One NIS contribution table file, effective for a single year.
#[derive(Debug, Clone, Deserialize)]
pub struct NisConfig {
    /// The calendar year these brackets take effect.
    pub effective_year: i32,
    /// Earnings brackets in ascending order.
    pub brackets: Vec<NisBracket>,
}
