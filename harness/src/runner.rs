//! Scenario orchestration and plan artifact bundles.
//!
//! The runner solves a scenario, renders the result, and packages both as
//! a self-contained bundle directory: `plan.json` (the snapshot sequence),
//! `report.json` (termination and counters), and `states.txt` (the column
//! display). Worlds never touch the filesystem.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use gantry_search::engine::{solve, SolveOutcome};
use gantry_search::policy::SearchPolicy;

use crate::render::render_plan;
use crate::worlds::Scenario;

/// Bundle file holding the plan artifact.
pub const PLAN_FILE: &str = "plan.json";
/// Bundle file holding the search report.
pub const REPORT_FILE: &str = "report.json";
/// Bundle file holding the rendered column display.
pub const STATES_FILE: &str = "states.txt";

/// Typed failure for bundle writing.
#[derive(Debug)]
pub enum BundleError {
    /// A filesystem operation failed.
    Io { path: PathBuf, detail: String },
}

impl fmt::Display for BundleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => {
                write!(f, "bundle write failed at {}: {detail}", path.display())
            }
        }
    }
}

impl std::error::Error for BundleError {}

/// A solved scenario plus its rendered display.
#[derive(Debug)]
pub struct ScenarioRun {
    /// The engine outcome: optional plan plus report.
    pub outcome: SolveOutcome,
    /// Column display of the plan, or a fixed no-plan notice.
    pub rendered: String,
}

/// Solve a scenario and render its plan.
#[must_use]
pub fn run_scenario(scenario: &Scenario, policy: &SearchPolicy) -> ScenarioRun {
    let outcome = solve(&scenario.start, &scenario.goal, policy);
    let rendered = match &outcome.plan {
        Some(plan) => render_plan(plan, &scenario.table),
        None => format!("no plan found ({})\n", outcome.report.termination.label()),
    };
    ScenarioRun { outcome, rendered }
}

/// Write `plan.json`, `report.json`, and `states.txt` for a run.
///
/// The directory is created if missing; existing files are overwritten.
/// A run without a plan writes `null` as the plan artifact.
///
/// # Errors
///
/// Returns [`BundleError::Io`] if the directory or any file cannot be
/// written.
pub fn write_bundle(dir: &Path, scenario: &Scenario, run: &ScenarioRun) -> Result<(), BundleError> {
    fs::create_dir_all(dir).map_err(|err| io_error(dir, &err))?;

    let plan_json = run
        .outcome
        .plan
        .as_ref()
        .map_or(serde_json::Value::Null, |plan| {
            plan.to_json(&scenario.table)
        });
    write_text(&dir.join(PLAN_FILE), &pretty(&plan_json))?;
    write_text(&dir.join(REPORT_FILE), &pretty(&run.outcome.report.to_json()))?;
    write_text(&dir.join(STATES_FILE), &run.rendered)?;
    Ok(())
}

fn pretty(value: &serde_json::Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    text.push('\n');
    text
}

fn write_text(path: &Path, content: &str) -> Result<(), BundleError> {
    fs::write(path, content).map_err(|err| io_error(path, &err))
}

fn io_error(path: &Path, err: &std::io::Error) -> BundleError {
    BundleError::Io {
        path: path.to_path_buf(),
        detail: err.to_string(),
    }
}
