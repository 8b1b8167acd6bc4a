//! Command handlers that drive the plan manager and render the results.

use anyhow::{Context, Result};
use log::debug;
use waypoint_core::{OperationStatus, Plan, PlanManager};

use crate::{
    args::{AddStepArgs, Commands, PlanCommands, StepArgs, StepCommands, StepIdsArgs},
    renderer::TerminalRenderer,
};

/// Executes one parsed command against a manager.
pub struct Cli {
    manager: PlanManager,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(manager: PlanManager, renderer: TerminalRenderer) -> Self {
        Self { manager, renderer }
    }

    /// Runs `command` (listing plans when absent) and closes the store.
    pub fn run(mut self, command: Option<Commands>) -> Result<()> {
        let outcome = match command {
            Some(Commands::Plan { command }) => self.handle_plan_command(command),
            Some(Commands::Step { command }) => self.handle_step_command(command),
            None => self.list_plans(false),
        };

        let closed = self.manager.close().context("Failed to close plan store");
        outcome.and(closed)
    }

    fn handle_plan_command(&mut self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => {
                let plan = self
                    .manager
                    .create(&args.name)
                    .with_context(|| format!("Failed to create plan '{}'", args.name))?;
                self.manager.save(&plan).context("Failed to save plan")?;
                self.status(format!("Created plan '{}'", plan.name()))
            }
            PlanCommands::Show(args) => {
                let plan = self.load(&args.name)?;
                self.renderer.render(&plan.inspect())
            }
            PlanCommands::List(args) => self.list_plans(args.json),
            PlanCommands::Next(args) => {
                let plan = self.load(&args.name)?;
                match plan.next_step() {
                    Some(step) => self.renderer.render(&step.to_string()),
                    None => self.status(format!("All steps in plan '{}' are complete", plan.name())),
                }
            }
            PlanCommands::Compact => {
                let removed = self.manager.compact().context("Failed to compact plans")?;
                if removed.is_empty() {
                    self.status("No completed plans to remove")
                } else {
                    self.status(format!(
                        "Removed {} completed plan(s): {}",
                        removed.len(),
                        removed.join(", ")
                    ))
                }
            }
        }
    }

    fn handle_step_command(&mut self, command: StepCommands) -> Result<()> {
        match command {
            StepCommands::Add(AddStepArgs {
                plan,
                id,
                description,
                acceptance,
            }) => {
                self.update(&plan, |p| p.add_step(id.as_str(), description, acceptance))?;
                self.status(format!("Added step '{id}' to plan '{plan}'"))
            }
            StepCommands::Remove(StepIdsArgs { plan, ids }) => {
                let mut removed = 0;
                self.update(&plan, |p| {
                    removed = p.remove_steps(&ids);
                    Ok(())
                })?;
                self.status(format!("Removed {removed} step(s) from plan '{plan}'"))
            }
            StepCommands::Reorder(StepIdsArgs { plan, ids }) => {
                let updated = self.update(&plan, |p| p.reorder(&ids))?;
                self.renderer.render(&updated.inspect())
            }
            StepCommands::Done(StepArgs { plan, id }) => {
                self.update(&plan, |p| p.mark_as_completed(&id))?;
                self.status(format!("Marked step '{id}' in plan '{plan}' as DONE"))
            }
            StepCommands::Undo(StepArgs { plan, id }) => {
                self.update(&plan, |p| p.mark_as_incomplete(&id))?;
                self.status(format!("Marked step '{id}' in plan '{plan}' as TODO"))
            }
        }
    }

    fn list_plans(&self, json: bool) -> Result<()> {
        let summaries = self.manager.list().context("Failed to list plans")?;
        if json {
            let text =
                serde_json::to_string_pretty(&summaries).context("Failed to encode summaries")?;
            println!("{text}");
            Ok(())
        } else {
            self.renderer.render(&summaries.to_string())
        }
    }

    fn load(&self, name: &str) -> Result<Plan> {
        self.manager
            .get(name)
            .with_context(|| format!("Failed to load plan '{name}'"))
    }

    /// Loads a plan, applies `edit`, and saves it back.
    fn update<F>(&mut self, name: &str, edit: F) -> Result<Plan>
    where
        F: FnOnce(&mut Plan) -> waypoint_core::Result<()>,
    {
        let mut plan = self.load(name)?;
        edit(&mut plan).with_context(|| format!("Failed to update plan '{name}'"))?;
        debug!("Saving plan '{name}' with {} steps", plan.len());
        self.manager
            .save(&plan)
            .with_context(|| format!("Failed to save plan '{name}'"))?;
        Ok(plan)
    }

    fn status(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }
}
