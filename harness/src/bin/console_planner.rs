//! Console front end: define start and goal worlds interactively, solve,
//! and display the plan as stacked columns.
//!
//! The universe is the fixed reference domain — blocks A through J over
//! locations L1 through L4.

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use gantry_harness::interactive::define_world;
use gantry_harness::render::render_plan;
use gantry_kernel::entity::EntityTable;
use gantry_kernel::fact::Fact;
use gantry_search::engine::solve;
use gantry_search::policy::SearchPolicy;

const BLOCK_NAMES: [&str; 10] = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
const LOCATION_NAMES: [&str; 4] = ["L1", "L2", "L3", "L4"];

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut table = EntityTable::new();
    for name in BLOCK_NAMES {
        table.add_block(name)?;
    }
    for name in LOCATION_NAMES {
        table.add_location(name)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    writeln!(output, "Define the initial state.")?;
    let start = define_world(&mut input, &mut output, &table)?;
    writeln!(output, "Define the goal state.")?;
    let goal = define_world(&mut input, &mut output, &table)?;

    writeln!(output, "\nInit State:")?;
    print_facts(&mut output, &start, &table)?;
    writeln!(output, "\nGoal State:")?;
    print_facts(&mut output, &goal, &table)?;
    writeln!(output)?;

    let began = Instant::now();
    let outcome = solve(&start, &goal, &SearchPolicy::default());
    let elapsed = began.elapsed();

    if let Some(plan) = &outcome.plan {
        writeln!(output, "Solution found!\n")?;
        write!(output, "{}", render_plan(plan, &table))?;
        writeln!(output, "Solution found in {} seconds.", elapsed.as_secs_f64())?;
        Ok(ExitCode::SUCCESS)
    } else {
        writeln!(
            output,
            "No solution found ({}).",
            outcome.report.termination.label()
        )?;
        Ok(ExitCode::FAILURE)
    }
}

fn print_facts(
    output: &mut impl Write,
    facts: &[Fact],
    table: &EntityTable,
) -> Result<(), io::Error> {
    for fact in facts {
        writeln!(output, "{}", fact.render(table))?;
    }
    Ok(())
}
