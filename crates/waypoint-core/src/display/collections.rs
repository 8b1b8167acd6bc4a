//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::PlanSummary;

/// Newtype wrapper around the result of [`PlanManager::list`].
///
/// Serializes as a plain JSON array and displays as one markdown heading per
/// plan, or a placeholder line when there are none.
///
/// # Examples
///
/// ```rust
/// use waypoint_core::{
///     display::PlanSummaries,
///     models::{PlanStatus, PlanSummary},
/// };
///
/// let summaries = PlanSummaries(vec![PlanSummary {
///     name: "release".to_string(),
///     status: PlanStatus::Todo,
///     total_steps: 3,
///     completed_steps: 1,
/// }]);
/// assert_eq!(summaries.to_string(), "## release (TODO) (1/3)\n");
/// assert_eq!(PlanSummaries(vec![]).to_string(), "No plans found.\n");
/// ```
///
/// [`PlanManager::list`]: crate::PlanManager::list
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&PlanSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl Index<usize> for PlanSummaries {
    type Output = PlanSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlanSummaries {
    type Item = &'a PlanSummary;
    type IntoIter = std::slice::Iter<'a, PlanSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}
