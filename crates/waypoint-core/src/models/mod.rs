//! Data models for plans and steps.
//!
//! This module contains the value types of the waypoint tracker. Display
//! implementations for these models live in [`crate::display::models`] so the
//! data structures stay free of presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use waypoint_core::models::{Plan, StepStatus};
//!
//! let mut plan: Plan = serde_json::from_str(r#"{"id": "release", "steps": []}"#).unwrap();
//! plan.add_step("tag", "Tag the release", vec!["tag pushed".to_string()]).unwrap();
//! plan.mark_as_completed("tag").unwrap();
//!
//! assert_eq!(plan.steps()[0].status(), &StepStatus::Done);
//! assert!(plan.is_completed());
//! ```

pub mod plan;
pub mod status;
pub mod step;
pub mod summary;


pub use plan::Plan;
pub use status::{PlanStatus, StepStatus};
pub use step::Step;
pub use summary::PlanSummary;
