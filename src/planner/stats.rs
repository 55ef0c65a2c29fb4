use prettytable::{Cell, Row, Table};

/// Counters collected during one breadth-first solve.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes dequeued and expanded (including the goal node, if any).
    pub expanded: u64,
    /// Nodes admitted to the frontier, the initial state included.
    pub enqueued: u64,
    /// Generated neighbors rejected by the safety predicate.
    pub pruned_unsafe: u64,
    /// Generated neighbors rejected because their state was already visited.
    pub duplicates: u64,
    /// Largest number of open nodes held at once.
    pub peak_frontier: usize,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));

    let rows: [(&str, u64); 5] = [
        ("Nodes expanded", stats.expanded),
        ("Nodes enqueued", stats.enqueued),
        ("Unsafe neighbors pruned", stats.pruned_unsafe),
        ("Duplicate neighbors", stats.duplicates),
        ("Peak frontier size", stats.peak_frontier as u64),
    ];

    for (name, count) in rows {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&count.to_string()),
        ]));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_stats_table, SearchStats};

    #[test]
    fn table_lists_every_counter() {
        let stats = SearchStats {
            expanded: 12,
            enqueued: 30,
            pruned_unsafe: 4,
            duplicates: 9,
            peak_frontier: 7,
        };
        let rendered = render_stats_table(&stats);
        for needle in ["12", "30", "4", "9", "7", "Nodes expanded"] {
            assert!(rendered.contains(needle), "missing {needle} in:\n{rendered}");
        }
    }
}
