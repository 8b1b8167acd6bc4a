//! Core library for the waypoint plan tracker.
//!
//! A plan is a named, ordered list of steps, each with a description, a
//! `TODO`/`DONE` status and ordered acceptance criteria. This crate provides
//! the plan/step value types and their mutation API, durable stores, and the
//! [`PlanManager`] that ties them together.
//!
//! # Quick Start
//!
//! ```rust
//! use waypoint_core::{Backend, PlanManagerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut manager = PlanManagerBuilder::new()
//!     .with_backend(Backend::Files)
//!     .with_plan_directory(Some(dir.path()))
//!     .build()?;
//!
//! let mut plan = manager.create("p1")?;
//! plan.add_step("a", "desc-a", vec!["c1".to_string()])?;
//! plan.add_step("b", "desc-b", vec![])?;
//! manager.save(&plan)?;
//!
//! let plan = manager.get("p1")?;
//! assert_eq!(plan.next_step().map(|step| step.id()), Some("a"));
//! println!("{}", plan.inspect());
//!
//! for summary in &manager.list()? {
//!     println!("{summary}");
//! }
//! manager.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod display;
pub mod error;
pub mod manager;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use display::{OperationStatus, PlanSummaries};
pub use error::{PlanError, Result};
pub use manager::{Backend, PlanManager, PlanManagerBuilder};
pub use models::{Plan, PlanStatus, PlanSummary, Step, StepStatus};
pub use store::{FileStore, SqliteStore, Store};
