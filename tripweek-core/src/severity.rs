//! Constraint types and their hard/soft classification.
//!
//! The [`SeverityTable`] is an explicit, validated mapping built once at
//! startup. Every [`ConstraintKind`] must be mapped; unknown type names are
//! reported as [`ConfigurationError`]s instead of being scored with a guess.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::ConfigurationError;

/// Whether violating a constraint is forbidden or merely undesirable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Must never be violated.
    Hard,
    /// A preference that may be traded away.
    Soft,
}

/// Kinds of calendar constraint a planner can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ConstraintKind {
    /// Personal time off.
    Vacation,
    /// Public or company holiday.
    Holiday,
    /// Period in which no travel may be scheduled.
    Blackout,
    /// Business period best kept free of travel.
    BusinessSoft,
    /// Personal scheduling preference.
    Preference,
}

impl ConstraintKind {
    /// Every constraint kind, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Vacation,
        Self::Holiday,
        Self::Blackout,
        Self::BusinessSoft,
        Self::Preference,
    ];

    /// Return the canonical type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vacation => "vacation",
            Self::Holiday => "holiday",
            Self::Blackout => "blackout",
            Self::BusinessSoft => "business-soft",
            Self::Preference => "preference",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConstraintKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ConfigurationError::UnknownConstraintType {
                value: s.to_owned(),
            })
    }
}

/// Validated constraint-kind to severity mapping.
///
/// # Examples
/// ```
/// use tripweek_core::{ConstraintKind, Severity, SeverityTable};
///
/// let table = SeverityTable::default();
/// assert_eq!(table.severity_of(ConstraintKind::Blackout), Severity::Hard);
/// assert_eq!(table.severity_of(ConstraintKind::Preference), Severity::Soft);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityTable {
    vacation: Severity,
    holiday: Severity,
    blackout: Severity,
    business_soft: Severity,
    preference: Severity,
}

impl SeverityTable {
    /// Build a table from named entries, typically loaded from configuration.
    ///
    /// # Errors
    /// Returns [`ConfigurationError::UnknownConstraintType`] when a name is
    /// not a known constraint kind, and
    /// [`ConfigurationError::UnmappedConstraintType`] when a kind is missing.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (K, Severity)>,
        K: AsRef<str>,
    {
        let mut mapped = BTreeMap::new();
        for (name, severity) in entries {
            let kind = name.as_ref().parse::<ConstraintKind>()?;
            mapped.insert(kind, severity);
        }
        let lookup = |kind: ConstraintKind| {
            mapped
                .get(&kind)
                .copied()
                .ok_or(ConfigurationError::UnmappedConstraintType { kind })
        };
        Ok(Self {
            vacation: lookup(ConstraintKind::Vacation)?,
            holiday: lookup(ConstraintKind::Holiday)?,
            blackout: lookup(ConstraintKind::Blackout)?,
            business_soft: lookup(ConstraintKind::BusinessSoft)?,
            preference: lookup(ConstraintKind::Preference)?,
        })
    }

    /// Resolve the severity configured for `kind`.
    #[must_use]
    pub const fn severity_of(&self, kind: ConstraintKind) -> Severity {
        match kind {
            ConstraintKind::Vacation => self.vacation,
            ConstraintKind::Holiday => self.holiday,
            ConstraintKind::Blackout => self.blackout,
            ConstraintKind::BusinessSoft => self.business_soft,
            ConstraintKind::Preference => self.preference,
        }
    }
}

impl Default for SeverityTable {
    fn default() -> Self {
        Self {
            vacation: Severity::Hard,
            holiday: Severity::Hard,
            blackout: Severity::Hard,
            business_soft: Severity::Soft,
            preference: Severity::Soft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("vacation", ConstraintKind::Vacation)]
    #[case("Holiday", ConstraintKind::Holiday)]
    #[case(" blackout ", ConstraintKind::Blackout)]
    #[case("business-soft", ConstraintKind::BusinessSoft)]
    #[case("business_soft", ConstraintKind::BusinessSoft)]
    #[case("preference", ConstraintKind::Preference)]
    fn parses_known_kinds(#[case] raw: &str, #[case] expected: ConstraintKind) {
        assert_eq!(raw.parse::<ConstraintKind>(), Ok(expected));
    }

    #[rstest]
    fn unknown_kind_is_a_configuration_error() {
        let err = "sabbatical".parse::<ConstraintKind>().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnknownConstraintType {
                value: "sabbatical".into()
            }
        );
    }

    #[rstest]
    #[case(ConstraintKind::Vacation, Severity::Hard)]
    #[case(ConstraintKind::Holiday, Severity::Hard)]
    #[case(ConstraintKind::Blackout, Severity::Hard)]
    #[case(ConstraintKind::BusinessSoft, Severity::Soft)]
    #[case(ConstraintKind::Preference, Severity::Soft)]
    fn default_table_matches_fixed_mapping(#[case] kind: ConstraintKind, #[case] expected: Severity) {
        assert_eq!(SeverityTable::default().severity_of(kind), expected);
    }

    #[rstest]
    fn entries_must_cover_every_kind() {
        let err = SeverityTable::from_entries([("vacation", Severity::Hard)]).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnmappedConstraintType {
                kind: ConstraintKind::Holiday
            }
        );
    }

    #[rstest]
    fn entries_reject_unknown_names() {
        let err = SeverityTable::from_entries([("sick-leave", Severity::Hard)]).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::UnknownConstraintType { .. }
        ));
    }

    #[rstest]
    fn entries_may_reclassify_kinds() {
        let entries = ConstraintKind::ALL.map(|kind| (kind.as_str(), Severity::Soft));
        let table = SeverityTable::from_entries(entries).expect("complete table");
        assert_eq!(table.severity_of(ConstraintKind::Vacation), Severity::Soft);
    }
}
