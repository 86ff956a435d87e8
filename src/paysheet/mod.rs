//! Paysheet assembly.
//!
//! Joins reconstructed weekly hours with the employee master directory
//! (employee number → hourly rate) and the NIS contribution table to
//! produce payroll-ready rows: gross pay, statutory deduction, net pay,
//! and a per-row review status.

mod nis;

pub use nis::{NisBracket, NisTable};

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::EmployeeWeekResult;

/// Weekly hours above this are unusual enough to warrant review.
const HIGH_HOURS_THRESHOLD: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Read-only employee master data: employee number → hourly rate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeDirectory {
    rates: BTreeMap<String, Decimal>,
}

impl EmployeeDirectory {
    /// Builds a directory from `(employee_number, hourly_rate)` pairs.
    pub fn new(rates: impl IntoIterator<Item = (String, Decimal)>) -> Self {
        Self {
            rates: rates.into_iter().collect(),
        }
    }

    /// Looks up the hourly rate for an employee number.
    pub fn hourly_rate(&self, employee_number: &str) -> Option<Decimal> {
        self.rates.get(employee_number).copied()
    }
}

/// Review status of a paysheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    /// Rate found, hours within the usual range.
    Valid,
    /// No hourly rate on file for the employee; paid zero pending review.
    MissingRate,
    /// Unusually high weekly hours.
    Anomaly,
}

/// One payroll-ready row of the weekly paysheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaysheetRow {
    /// The employee's display name.
    pub employee_name: String,
    /// The employee's number.
    pub employee_number: String,
    /// ISO week number carried over from reconstruction.
    pub week_number: u32,
    /// Week-ending date (`DD/MM/YYYY`) carried over from reconstruction.
    pub week_ending_date: String,
    /// Reconstructed hours for the week.
    pub hours_worked: Decimal,
    /// The reconstruction review comment, empty when clean.
    pub comments: String,
    /// The hourly rate applied; zero when no rate is on file.
    pub hourly_rate: Decimal,
    /// Gross pay: hours × rate, rounded to 2 decimal places.
    pub amount_to_pay: Decimal,
    /// NIS weekly contribution deducted from gross pay.
    pub nis_deduction: Decimal,
    /// Net pay after the NIS deduction.
    pub net_pay: Decimal,
    /// Review status of the row.
    pub status: RowStatus,
    /// Explanation for non-valid statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
}

/// A complete weekly paysheet with totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paysheet {
    /// ISO week number, when the paysheet has any rows.
    pub week_number: Option<u32>,
    /// Week-ending date, when the paysheet has any rows.
    pub week_ending_date: Option<String>,
    /// One row per employee, in reconstruction order.
    pub rows: Vec<PaysheetRow>,
    /// Sum of hours over all rows.
    pub total_hours: Decimal,
    /// Sum of gross pay over all rows.
    pub total_amount: Decimal,
}

/// Builds the weekly paysheet from reconstructed employee weeks.
///
/// Each entry is joined with its hourly rate and the NIS table:
///
/// - no rate on file → status [`RowStatus::MissingRate`], rate 0;
/// - hours above 60 → status [`RowStatus::Anomaly`];
/// - otherwise [`RowStatus::Valid`].
///
/// Reconstruction flags travel along in `comments` but do not affect the
/// status; they are reviewed on the audit screen, not the paysheet.
pub fn build_paysheet(
    entries: &[EmployeeWeekResult],
    directory: &EmployeeDirectory,
    nis_table: &NisTable,
) -> Paysheet {
    let rows: Vec<PaysheetRow> = entries
        .iter()
        .map(|entry| build_row(entry, directory, nis_table))
        .collect();

    let total_hours = rows.iter().map(|r| r.hours_worked).sum();
    let total_amount = rows.iter().map(|r| r.amount_to_pay).sum();

    Paysheet {
        week_number: entries.first().map(|e| e.week_number),
        week_ending_date: entries.first().map(|e| e.week_ending_date.clone()),
        rows,
        total_hours,
        total_amount,
    }
}

fn build_row(
    entry: &EmployeeWeekResult,
    directory: &EmployeeDirectory,
    nis_table: &NisTable,
) -> PaysheetRow {
    let rate = directory.hourly_rate(&entry.employee_number);

    let (status, warning_message) = match rate {
        None => (
            RowStatus::MissingRate,
            Some("No pay rate found in database".to_string()),
        ),
        Some(_) if entry.total_hours > HIGH_HOURS_THRESHOLD => (
            RowStatus::Anomaly,
            Some("Unusually high hours reported".to_string()),
        ),
        Some(_) => (RowStatus::Valid, None),
    };

    let hourly_rate = rate.unwrap_or(Decimal::ZERO);
    let amount_to_pay = round_money(entry.total_hours * hourly_rate);
    let nis_deduction = nis_table.contribution_for(amount_to_pay);
    let net_pay = amount_to_pay - nis_deduction;

    PaysheetRow {
        employee_name: entry.employee_name.clone(),
        employee_number: entry.employee_number.clone(),
        week_number: entry.week_number,
        week_ending_date: entry.week_ending_date.clone(),
        hours_worked: entry.total_hours,
        comments: entry.comments(),
        hourly_rate,
        amount_to_pay,
        nis_deduction,
        net_pay,
        status,
        warning_message,
    }
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
