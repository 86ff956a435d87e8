//! NIS weekly contribution lookup.
//!
//! The statutory deduction is a bracket table: gross weekly earnings map
//! to a fixed contribution per earnings class. The table itself is data
//! (it changes yearly) and is loaded from YAML by the config loader; the
//! lookup here is a pure function over the loaded brackets.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One earnings class of the NIS contribution table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisBracket {
    /// The earnings class label (e.g. "I", "XVI").
    pub class: String,
    /// Minimum weekly earnings for this class (inclusive).
    pub min_earnings: Decimal,
    /// Maximum weekly earnings for this class (inclusive); `None` for the
    /// open-ended top class.
    pub max_earnings: Option<Decimal>,
    /// The fixed weekly contribution for this class.
    pub contribution: Decimal,
}

impl NisBracket {
    fn contains(&self, gross: Decimal) -> bool {
        gross >= self.min_earnings && self.max_earnings.is_none_or(|max| gross <= max)
    }
}

/// The NIS contribution table for one effective year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NisTable {
    brackets: Vec<NisBracket>,
}

impl NisTable {
    /// Creates a table from brackets ordered by ascending earnings.
    pub fn new(brackets: Vec<NisBracket>) -> Self {
        Self { brackets }
    }

    /// The brackets of the table, in ascending earnings order.
    pub fn brackets(&self) -> &[NisBracket] {
        &self.brackets
    }

    /// Looks up the weekly contribution for gross weekly earnings.
    ///
    /// Earnings below the lowest bracket (or falling in a gap between
    /// brackets) contribute nothing.
    pub fn contribution_for(&self, gross: Decimal) -> Decimal {
        self.brackets
            .iter()
            .find(|bracket| bracket.contains(gross))
            .map(|bracket| bracket.contribution)
            .unwrap_or(Decimal::ZERO)
    }
}
