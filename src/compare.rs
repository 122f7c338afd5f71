use crate::config::SpeedModel;
use crate::layouts::Layout;
use crate::sim::{self, Summary};
use rayon::prelude::*;
use serde::Serialize;

/// A scored line from a batch comparison. `index` is the line's zero-based
/// position in the original input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineScore {
    pub index: usize,
    pub line: String,
    pub summary: Summary,
}

fn score_line(layout: &Layout, model: &SpeedModel, index: usize, line: &str) -> LineScore {
    let trace = sim::simulate(layout, line);
    LineScore {
        index,
        line: line.to_string(),
        summary: sim::aggregate(&trace, model),
    }
}

// Max by total distance; on a tie the earlier input line wins. This is a
// max under a total order on (distance, index), so a sequential fold and
// any parallel reduction tree agree on the result.
fn pick_better(a: LineScore, b: LineScore) -> LineScore {
    if b.summary.total_distance > a.summary.total_distance
        || (b.summary.total_distance == a.summary.total_distance && b.index < a.index)
    {
        b
    } else {
        a
    }
}

/// Score every non-empty line of `text` and return the costliest one, or
/// `None` when there is nothing to score. Line scoring is pure and
/// independent; `parallel` fans it out over the rayon pool, and both modes
/// return identical results.
pub fn compare(layout: &Layout, text: &str, model: &SpeedModel, parallel: bool) -> Option<LineScore> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .collect();

    if parallel {
        lines
            .into_par_iter()
            .map(|(i, line)| score_line(layout, model, i, line))
            .reduce_with(pick_better)
    } else {
        lines
            .into_iter()
            .map(|(i, line)| score_line(layout, model, i, line))
            .reduce(pick_better)
    }
}
