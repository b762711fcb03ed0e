use prettytable::{Cell, Row, Table};

use crate::{
    game::{Code, Feedback},
    solver::engine::SearchStats,
};

/// One played round, ready for reporting: the guess, the feedback it
/// earned and the search effort behind it.
#[derive(Debug, Clone)]
pub struct RoundReport {
    pub round: usize,
    pub guess: Code,
    pub feedback: Feedback,
    pub stats: SearchStats,
}

pub fn render_rounds_table(rounds: &[RoundReport]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Round"),
        Cell::new("Guess"),
        Cell::new("Bulls"),
        Cell::new("Cows"),
        Cell::new("Nodes"),
        Cell::new("Backtracks"),
        Cell::new("Checks"),
        Cell::new("Rejections"),
    ]));

    for report in rounds {
        let guess = report
            .guess
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        table.add_row(Row::new(vec![
            Cell::new(&report.round.to_string()),
            Cell::new(&guess),
            Cell::new(&report.feedback.bulls.to_string()),
            Cell::new(&report.feedback.cows.to_string()),
            Cell::new(&report.stats.nodes_visited.to_string()),
            Cell::new(&report.stats.backtracks.to_string()),
            Cell::new(&report.stats.consistency_checks.to_string()),
            Cell::new(&report.stats.rejections.to_string()),
        ]));
    }

    table.to_string()
}
