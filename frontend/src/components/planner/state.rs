//! Component state for the planner.
//!
//! The component owns a `Planner` wired to the REST API, the current drag
//! session, which page is shown and the destination form while it is open.

use std::collections::BTreeSet;

use common::model::destination::{Destination, DestinationDraft, DestinationId, MIN_DAYS};
use common::model::month::Month;
use common::planner::drag::DragSession;
use common::planner::Planner;

use crate::repository::HttpRepository;

/// First planning year shown in the grid.
pub const FIRST_YEAR: i32 = 2026;
/// Number of consecutive years shown in the grid.
pub const YEAR_COUNT: i32 = 8;
/// Months offered as checkboxes in the destination form.
pub const FORM_MONTHS: [Month; 4] = [Month::March, Month::May, Month::October, Month::December];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Planner,
    Admin,
}

/// Inputs of the add/edit destination form.
#[derive(Clone, PartialEq, Debug)]
pub struct DestinationForm {
    /// `None` while adding a new destination.
    pub editing: Option<DestinationId>,
    pub name: String,
    pub days: u32,
    pub months: BTreeSet<Month>,
}

impl DestinationForm {
    pub fn blank() -> Self {
        DestinationForm {
            editing: None,
            name: String::new(),
            days: MIN_DAYS,
            months: BTreeSet::new(),
        }
    }

    pub fn edit(destination: &Destination) -> Self {
        DestinationForm {
            editing: Some(destination.id.clone()),
            name: destination.name.clone(),
            days: destination.days,
            months: destination.months.clone(),
        }
    }

    pub fn draft(&self) -> DestinationDraft {
        DestinationDraft {
            name: self.name.clone(),
            days: self.days,
            months: self.months.clone(),
        }
    }

    /// The submit button stays disabled until a name and a month are given.
    pub fn is_submittable(&self) -> bool {
        !self.name.trim().is_empty() && !self.months.is_empty()
    }

    /// Checkbox months: the standard four plus any other month already set.
    pub fn offered_months(&self) -> Vec<Month> {
        let mut months: BTreeSet<Month> = FORM_MONTHS.into_iter().collect();
        months.extend(self.months.iter().copied());
        months.into_iter().collect()
    }
}

pub struct PlannerComponent {
    pub planner: Planner<HttpRepository>,
    pub drag: DragSession,
    pub view: View,
    /// True until the initial fetch has answered.
    pub loading: bool,
    /// Guard so the initial fetch runs only once.
    pub loaded: bool,
    pub form: Option<DestinationForm>,
}

impl PlannerComponent {
    pub fn new() -> Self {
        Self {
            planner: Planner::new(HttpRepository::new()),
            drag: DragSession::new(),
            view: View::Planner,
            loading: true,
            loaded: false,
            form: None,
        }
    }

    pub fn years(&self) -> impl Iterator<Item = i32> {
        FIRST_YEAR..FIRST_YEAR + YEAR_COUNT
    }
}
