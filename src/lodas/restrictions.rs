//! Field-level export restrictions.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::fields::MappedRecord;
use crate::core::{Scalar, normalized};

/// LODAS key of the weekly working hours, governed by [`weekly_hours_gate`].
pub const WEEKLY_HOURS_KEY: &str = "az_wtl_indiv";

/// Configured suppression flags, LODAS field key to "never export".
///
/// Serializes as a plain map (`st_klasse: true`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestrictionSet {
    flags: BTreeMap<String, bool>,
}

impl RestrictionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the suppression flag of `field`.
    pub fn set(&mut self, field: impl Into<String>, suppress: bool) {
        self.flags.insert(field.into(), suppress);
    }

    /// Whether `field` is configured and suppressed.
    pub fn is_suppressed(&self, field: &str) -> bool {
        self.flags.get(field).copied().unwrap_or(false)
    }

    /// Keys of all suppressed fields.
    pub fn suppressed(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, suppress)| **suppress)
            .map(|(field, _)| field.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for RestrictionSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Blank every suppressed field present in `record`.
///
/// Keys unknown to the record are ignored. Applying the same set twice
/// gives the same result as applying it once.
pub fn apply_restrictions(mut record: MappedRecord, restrictions: &RestrictionSet) -> MappedRecord {
    for field in restrictions.suppressed() {
        if record.blank(field) {
            debug!(pnr = record.pnr(), field, "restricted field blanked");
        }
    }
    record
}

/// Outcome of the weekly-hours comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Export the current value.
    Allow,
    /// Blank the field; the value is unchanged since the last export.
    Suppress,
}

/// Decide whether the weekly hours are exported.
///
/// An empty stored value (missing, blank or `None`) allows the export.
/// Equal values suppress it, different values allow it. Values that both
/// parse as numbers are compared numerically, so `40` equals `40.00`.
pub fn weekly_hours_gate(current: Option<&Scalar>, stored: Option<&Scalar>) -> GateDecision {
    let stored = normalized(stored);
    if stored.is_empty() {
        return GateDecision::Allow;
    }
    let current = normalized(current);
    if same_value(&current, &stored) {
        GateDecision::Suppress
    } else {
        GateDecision::Allow
    }
}

fn same_value(a: &str, b: &str) -> bool {
    match (a.parse::<Decimal>(), b.parse::<Decimal>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}

/// Blank [`WEEKLY_HOURS_KEY`] when the gate suppresses it.
pub fn apply_weekly_hours_gate(
    record: &mut MappedRecord,
    current: Option<&Scalar>,
    stored: Option<&Scalar>,
) -> GateDecision {
    let decision = weekly_hours_gate(current, stored);
    debug!(pnr = record.pnr(), ?decision, "weekly hours gate");
    if decision == GateDecision::Suppress {
        record.blank(WEEKLY_HOURS_KEY);
    }
    decision
}
