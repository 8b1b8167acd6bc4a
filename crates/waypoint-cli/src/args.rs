//! Command-line interface definitions using clap

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Track named plans made of ordered, checkable steps
///
/// Plans are stored in a SQLite database by default, or as one JSON file per
/// plan when `--plan-dir` is given. Running `wp` without a subcommand lists
/// all plans.
#[derive(Parser)]
#[command(version, about, name = "wp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true, conflicts_with = "plan_dir")]
    pub database_file: Option<PathBuf>,

    /// Store plans as JSON files in this directory instead of SQLite
    #[arg(long, global = true)]
    pub plan_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage steps within a plan
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a new, empty plan
    #[command(alias = "c")]
    Create(PlanNameArgs),
    /// Show every step of a plan
    #[command(alias = "s")]
    Show(PlanNameArgs),
    /// List stored plans with their progress
    #[command(alias = "l")]
    List(ListPlansArgs),
    /// Show the first step that is not done
    #[command(alias = "n")]
    Next(PlanNameArgs),
    /// Delete every plan whose steps are all done
    Compact,
}

#[derive(ClapArgs)]
pub struct PlanNameArgs {
    /// Name of the plan
    pub name: String,
}

#[derive(ClapArgs)]
pub struct ListPlansArgs {
    /// Print summaries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum StepCommands {
    /// Append a step to a plan
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Remove steps from a plan; unknown ids are ignored
    #[command(aliases = ["rm"])]
    Remove(StepIdsArgs),
    /// Put the plan's steps in the given order
    #[command(alias = "r")]
    Reorder(StepIdsArgs),
    /// Mark a step as done
    #[command(alias = "d")]
    Done(StepArgs),
    /// Mark a step as not done
    #[command(alias = "u")]
    Undo(StepArgs),
}

#[derive(ClapArgs)]
pub struct AddStepArgs {
    /// Name of the plan to add the step to
    pub plan: String,
    /// Identifier of the new step, unique within the plan
    pub id: String,
    /// Description of what needs to be done
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Acceptance criterion; repeat for several, order is kept
    #[arg(short, long = "acceptance")]
    pub acceptance: Vec<String>,
}

#[derive(ClapArgs)]
pub struct StepIdsArgs {
    /// Name of the plan
    pub plan: String,
    /// Step identifiers
    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(ClapArgs)]
pub struct StepArgs {
    /// Name of the plan
    pub plan: String,
    /// Step identifier
    pub id: String,
}
