//! Column rendering of world snapshots and plans.
//!
//! Presentation only: everything here is derived from the kernel's
//! per-location stack view, never from engine internals. Every location
//! renders as a column of fixed depth with `_` padding above the stack, a
//! rule line under each state header, and a footer naming the locations.
//! Any location count and multi-character block names are supported.

use gantry_kernel::entity::EntityTable;
use gantry_kernel::fact::Fact;
use gantry_kernel::world;
use gantry_search::plan::Plan;

/// Rows rendered per column. The reference universe holds at most ten
/// blocks, so no stack outgrows this.
pub const STACK_DEPTH: usize = 10;

/// Render one snapshot as per-location columns, top row first.
#[must_use]
pub fn render_world(facts: &[Fact], table: &EntityTable) -> String {
    let stacks = world::stacks(facts, table);
    let stride = cell_stride(table);

    let mut out = String::new();
    for depth in (0..STACK_DEPTH).rev() {
        out.push_str("|   ");
        for column in &stacks {
            let cell = column
                .get(depth)
                .map_or("_", |&block| table.block_name(block));
            out.push_str(&format!("{cell:<stride$}"));
        }
        out.push_str("|\n");
    }
    out.push_str(&footer(table, stride));
    out.push('\n');
    out
}

/// Render every snapshot of a plan, numbered from the start state.
#[must_use]
pub fn render_plan(plan: &Plan, table: &EntityTable) -> String {
    let stride = cell_stride(table);
    let rule_len = 4 + table.location_count() * stride + 1;

    let mut out = String::new();
    for (index, step) in plan.steps.iter().enumerate() {
        out.push_str(&format!("State {index}:\n"));
        out.push_str(&"_".repeat(rule_len));
        out.push('\n');
        out.push_str(&render_world(&step.facts, table));
        out.push('\n');
    }
    out
}

/// Column stride: the widest block name plus a three-space gap.
fn cell_stride(table: &EntityTable) -> usize {
    let widest = table
        .blocks()
        .map(|b| table.block_name(b).len())
        .max()
        .unwrap_or(1);
    widest + 3
}

fn footer(table: &EntityTable, stride: usize) -> String {
    let mut line = String::from("    ");
    for place in table.locations() {
        let name = table.location_name(place);
        line.push_str(&format!("{name:<stride$}"));
    }
    line.trim_end().to_string()
}
