use prettytable::{Cell, Row, Table};

use crate::solver::constraint::Constraint;
use crate::solver::engine::{ConstraintId, PerConstraintStats, SearchStats};

/// Renders a solve's statistics as a human-readable table, one row per
/// constraint, heaviest first.
pub fn render_stats_table(stats: &SearchStats, constraints: &[Box<dyn Constraint>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Constraint"),
        Cell::new("ID"),
        Cell::new("Description"),
        Cell::new("Revise Calls"),
        Cell::new("Prunings"),
        Cell::new("Time / Call (us)"),
        Cell::new("Total Time (ms)"),
    ]));

    let mut sorted_stats: Vec<(&ConstraintId, &PerConstraintStats)> =
        stats.constraint_stats.iter().collect();
    sorted_stats.sort_by_key(|(_, stats)| std::cmp::Reverse(stats.time_spent_micros));

    for (constraint_id, constraint_stats) in sorted_stats {
        let descriptor = constraints[*constraint_id].descriptor();
        let avg_time = if constraint_stats.revisions > 0 {
            constraint_stats.time_spent_micros as f64 / constraint_stats.revisions as f64
        } else {
            0.0
        };

        table.add_row(Row::new(vec![
            Cell::new(&descriptor.name),
            Cell::new(&constraint_id.to_string()),
            Cell::new(&descriptor.description),
            Cell::new(&constraint_stats.revisions.to_string()),
            Cell::new(&constraint_stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", avg_time)),
            Cell::new(&format!(
                "{:.2}",
                constraint_stats.time_spent_micros as f64 / 1000.0
            )),
        ]));
    }

    format!(
        "nodes visited: {}, backtracks: {}{}\n{}",
        stats.nodes_visited,
        stats.backtracks,
        if stats.budget_exhausted {
            " (node budget exhausted)"
        } else {
            ""
        },
        table
    )
}
