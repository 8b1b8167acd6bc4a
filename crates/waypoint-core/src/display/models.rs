//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can hand it to its terminal renderer
//! unchanged. Output depends only on model state, so rendering the same plan
//! twice yields identical text.

use std::fmt;

use crate::models::{Plan, PlanStatus, PlanSummary, Step, StepStatus};

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No steps in this plan.");
        }

        for (index, step) in self.steps().iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            step.fmt_numbered(f, index + 1)?;
        }

        Ok(())
    }
}

impl Step {
    /// Heading with position and status, then the numbered acceptance list.
    fn fmt_numbered(&self, f: &mut fmt::Formatter<'_>, position: usize) -> fmt::Result {
        writeln!(f, "### {}. {} ({})", position, self.title(), self.status())?;

        if !self.acceptance().is_empty() {
            writeln!(f)?;
            for (index, criterion) in self.acceptance().iter().enumerate() {
                writeln!(f, "{}. {criterion}", index + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.title(), self.status())?;
        writeln!(f)?;
        writeln!(f, "- **Id**: {}", self.id())?;

        if !self.acceptance().is_empty() {
            writeln!(f)?;
            for (index, criterion) in self.acceptance().iter().enumerate() {
                writeln!(f, "{}. {criterion}", index + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}) ({}/{})",
            self.name, self.status, self.completed_steps, self.total_steps
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::models::Plan;

    fn sample_plan() -> Plan {
        let mut plan = Plan::new("p1");
        plan.add_step("a", "desc-a", vec!["c1".to_string(), "c2".to_string()])
            .unwrap();
        plan.add_step("b", "", vec![]).unwrap();
        plan
    }

    #[test]
    fn test_inspect_layout() {
        let mut plan = sample_plan();
        plan.mark_as_completed("a").unwrap();

        let expected = "\
### 1. desc-a (DONE)

1. c1
2. c2

### 2. b (TODO)
";
        assert_eq!(plan.inspect(), expected);
    }

    #[test]
    fn test_inspect_is_deterministic() {
        let plan = sample_plan();
        assert_eq!(plan.inspect(), plan.inspect());
        assert_eq!(plan.inspect(), plan.clone().inspect());
    }

    #[test]
    fn test_inspect_empty_plan() {
        let plan = Plan::new("empty");
        assert_eq!(plan.inspect(), "No steps in this plan.\n");
    }

    #[test]
    fn test_inspect_uppercases_unknown_status() {
        let json = r#"{"id": "p", "steps": [{"id": "a", "status": "blocked"}]}"#;
        let plan: Plan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.inspect(), "### 1. a (BLOCKED)\n");
    }

    #[test]
    fn test_step_display() {
        let plan = sample_plan();
        let output = plan.steps()[0].to_string();
        assert!(output.contains("### desc-a (TODO)"));
        assert!(output.contains("- **Id**: a"));
        assert!(output.contains("2. c2"));
    }

    #[test]
    fn test_plan_summary_display() {
        let mut plan = sample_plan();
        plan.mark_as_completed("b").unwrap();
        let summary = crate::models::PlanSummary::from(&plan);
        assert_eq!(summary.to_string(), "## p1 (TODO) (1/2)\n");
    }
}
