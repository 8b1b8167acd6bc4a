//! Display formatting for plans, steps and listings.
//!
//! Domain models implement [`std::fmt::Display`] in [`models`]; collections and
//! operation feedback get newtype wrappers here. Everything renders as
//! markdown, which the CLI either styles for the terminal or prints as is.
//!
//! - [`models`]: `Display` for `Plan` (the inspection document), `Step`,
//!   `PlanSummary` and the status enums
//! - [`collections`]: [`PlanSummaries`]
//! - [`status`]: [`OperationStatus`] confirmation messages

pub mod collections;
pub mod models;
pub mod status;

pub use collections::PlanSummaries;
pub use status::OperationStatus;
