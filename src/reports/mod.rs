use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;
use typometer::compare::LineScore;
use typometer::geometry::Finger;
use typometer::sim::{Summary, Trace};

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn print_summary(layout_name: &str, summary: &Summary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Layout").add_attribute(Attribute::Bold),
        Cell::new("Chars"),
        Cell::new("Skipped"),
        Cell::new("Distance (u)"),
        Cell::new("Altern."),
        Cell::new("Ratio"),
        Cell::new("Time (s)"),
        Cell::new("WPM").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(layout_name).add_attribute(Attribute::Bold),
        Cell::new(summary.chars_typed.to_string()),
        Cell::new(summary.chars_skipped.to_string()),
        Cell::new(format!("{:.2}", summary.total_distance)),
        Cell::new(format!("{}/{}", summary.alternations, summary.transitions)),
        Cell::new(format!("{:.2}", summary.alternation_ratio)),
        Cell::new(format!("{:.2}", summary.duration_secs)),
        Cell::new(format!("{:.0}", summary.wpm)).fg(Color::Cyan),
    ]);
    right_align(&mut table, 1..=7);
    println!("\n{table}");

    print_finger_usage(summary);
}

fn print_finger_usage(summary: &Summary) {
    if summary.chars_typed == 0 {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Finger").add_attribute(Attribute::Bold),
        Cell::new("Presses"),
        Cell::new("Usage %"),
    ]);
    for finger in Finger::iter() {
        let count = summary.finger_counts[finger.index()];
        if count == 0 {
            continue;
        }
        table.add_row(vec![
            Cell::new(finger.to_string()),
            Cell::new(count.to_string()),
            Cell::new(format!("{:.1}", summary.usage_percent(finger))),
        ]);
    }
    right_align(&mut table, 1..=2);
    println!("\n{table}");
}

/// Terminal stand-in for the finger animation: one row per keystroke.
pub fn print_trace(trace: &Trace) {
    if trace.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Char"),
        Cell::new("Finger"),
        Cell::new("Hand"),
        Cell::new("Travel (u)"),
        Cell::new("Alt"),
    ]);
    for (i, event) in trace.events.iter().enumerate() {
        let alt = if event.alternates {
            Cell::new("*").fg(Color::Green)
        } else {
            Cell::new("")
        };
        table.add_row(vec![
            Cell::new((i + 1).to_string()),
            Cell::new(event.ch.to_string()),
            Cell::new(event.finger.to_string()),
            Cell::new(event.hand.to_string()),
            Cell::new(format!("{:.2}", event.distance)),
            alt,
        ]);
    }
    right_align(&mut table, 4..=4);
    println!("\n{table}");
}

pub fn print_best_line(layout_name: &str, best: &LineScore) {
    println!(
        "\ncostliest line: #{} {:?}",
        best.index + 1,
        best.line
    );
    print_summary(layout_name, &best.summary);
}
