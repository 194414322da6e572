//! Vacation types and the compatibility rule.
//!
//! Each vacation type is a fixed slot in the calendar and happens in exactly one
//! month. A destination can only be planned into a slot when that month is one of
//! the destination's travel months.

use crate::error::PlannerError;
use crate::model::destination::Destination;
use crate::model::month::Month;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four vacation slots of a planning year, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VacationType {
    #[serde(rename = "Annual Break")]
    AnnualBreak,
    #[serde(rename = "Summer Vacation")]
    SummerVacation,
    #[serde(rename = "Puja")]
    Puja,
    #[serde(rename = "Christmas")]
    Christmas,
}

impl VacationType {
    pub const ALL: [VacationType; 4] = [
        VacationType::AnnualBreak,
        VacationType::SummerVacation,
        VacationType::Puja,
        VacationType::Christmas,
    ];

    /// The month this vacation always falls in.
    pub fn required_month(self) -> Month {
        match self {
            VacationType::AnnualBreak => Month::March,
            VacationType::SummerVacation => Month::May,
            VacationType::Puja => Month::October,
            VacationType::Christmas => Month::December,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VacationType::AnnualBreak => "Annual Break",
            VacationType::SummerVacation => "Summer Vacation",
            VacationType::Puja => "Puja",
            VacationType::Christmas => "Christmas",
        }
    }

    /// URL-safe form used in API paths, e.g. `summer-vacation`.
    pub fn slug(self) -> &'static str {
        match self {
            VacationType::AnnualBreak => "annual-break",
            VacationType::SummerVacation => "summer-vacation",
            VacationType::Puja => "puja",
            VacationType::Christmas => "christmas",
        }
    }
}

impl fmt::Display for VacationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts either the slug or the display label.
impl FromStr for VacationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        VacationType::ALL
            .into_iter()
            .find(|vt| vt.slug() == wanted || vt.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown vacation type: {}", s))
    }
}

/// True iff `vacation_type`'s month is one of the destination's travel months.
pub fn is_compatible(destination: &Destination, vacation_type: VacationType) -> bool {
    destination.months.contains(&vacation_type.required_month())
}

/// Same as [`is_compatible`] but yields the rejection as an error.
pub fn check_compatible(
    destination: &Destination,
    vacation_type: VacationType,
) -> Result<(), PlannerError> {
    if is_compatible(destination, vacation_type) {
        Ok(())
    } else {
        Err(PlannerError::IncompatibleAssignment {
            destination: destination.name.clone(),
            vacation_type,
            required: vacation_type.required_month(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::destination::DestinationId;
    use std::collections::BTreeSet;

    fn destination(months: &[Month]) -> Destination {
        Destination {
            id: DestinationId::from("x"),
            name: "Somewhere".to_string(),
            days: 5,
            months: months.iter().copied().collect::<BTreeSet<_>>(),
        }
    }

    #[test]
    fn required_months_are_fixed() {
        assert_eq!(VacationType::AnnualBreak.required_month(), Month::March);
        assert_eq!(VacationType::SummerVacation.required_month(), Month::May);
        assert_eq!(VacationType::Puja.required_month(), Month::October);
        assert_eq!(VacationType::Christmas.required_month(), Month::December);
    }

    #[test]
    fn compatibility_matches_month_membership_for_every_slot() {
        let candidates = [
            destination(&[Month::March]),
            destination(&[Month::May, Month::October]),
            destination(&[Month::September]),
            destination(&Month::ALL),
        ];
        for d in &candidates {
            for vt in VacationType::ALL {
                assert_eq!(
                    is_compatible(d, vt),
                    d.months.contains(&vt.required_month()),
                    "{:?} / {}",
                    d.months,
                    vt
                );
            }
        }
    }

    #[test]
    fn check_reports_required_month() {
        let d = destination(&[Month::March]);
        let err = check_compatible(&d, VacationType::Christmas).unwrap_err();
        assert_eq!(
            err,
            PlannerError::IncompatibleAssignment {
                destination: "Somewhere".to_string(),
                vacation_type: VacationType::Christmas,
                required: Month::December,
            }
        );
    }

    #[test]
    fn parses_slugs_and_labels() {
        assert_eq!("puja".parse::<VacationType>(), Ok(VacationType::Puja));
        assert_eq!(
            "Summer Vacation".parse::<VacationType>(),
            Ok(VacationType::SummerVacation)
        );
        assert!("easter".parse::<VacationType>().is_err());
    }

    #[test]
    fn serializes_with_display_label() {
        let json = serde_json::to_string(&VacationType::AnnualBreak).unwrap();
        assert_eq!(json, "\"Annual Break\"");
    }
}
