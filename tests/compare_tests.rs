use typometer::compare::compare;
use typometer::config::SpeedModel;
use typometer::layouts::{KnownLayout, Layout};
use typometer::sim;

fn qwerty() -> Layout {
    Layout::builtin(KnownLayout::Qwerty)
}

#[test]
fn longest_word_wins() {
    let lay = qwerty();
    let model = SpeedModel::default();
    let text = "cat\nelephant\nox";

    let per_line: Vec<f32> = text
        .lines()
        .map(|line| {
            let trace = sim::simulate(&lay, line);
            sim::aggregate(&trace, &model).total_distance
        })
        .collect();
    assert!(per_line[1] > per_line[0] && per_line[1] > per_line[2]);

    let best = compare(&lay, text, &model, false).unwrap();
    assert_eq!(best.line, "elephant");
    assert_eq!(best.index, 1);
    assert_eq!(best.summary.total_distance, per_line[1]);
}

#[test]
fn empty_input_has_no_result() {
    let lay = qwerty();
    let model = SpeedModel::default();

    assert!(compare(&lay, "", &model, false).is_none());
    assert!(compare(&lay, "\n\n\n", &model, false).is_none());
    assert!(compare(&lay, "", &model, true).is_none());
}

#[test]
fn blank_lines_are_not_simulation_units() {
    let lay = qwerty();
    let model = SpeedModel::default();
    let text = "cat\n\nelephant\n\nox";

    let best = compare(&lay, text, &model, false).unwrap();
    assert_eq!(best.line, "elephant");
    // Index refers to the original input, blank lines included.
    assert_eq!(best.index, 2);
}

#[test]
fn ties_break_toward_the_earliest_line() {
    let lay = qwerty();
    let model = SpeedModel::default();
    let text = "same words\nsame words\nsame words";

    let sequential = compare(&lay, text, &model, false).unwrap();
    assert_eq!(sequential.index, 0);

    let parallel = compare(&lay, text, &model, true).unwrap();
    assert_eq!(parallel.index, 0);
}

#[test]
fn parallel_matches_sequential() {
    let lay = qwerty();
    let model = SpeedModel::default();
    let text = "the quick brown fox\njumps over\nthe lazy dog\npack my box\nwith five dozen\nliquor jugs";

    let sequential = compare(&lay, text, &model, false).unwrap();
    let parallel = compare(&lay, text, &model, true).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn single_line_input_is_its_own_best() {
    let lay = qwerty();
    let model = SpeedModel::default();

    let best = compare(&lay, "elephant", &model, false).unwrap();
    assert_eq!(best.index, 0);
    assert_eq!(best.line, "elephant");
}

#[test]
fn picks_the_max_distance_line_on_every_builtin_layout() {
    let model = SpeedModel::default();
    let text = "cat\nelephant\nox";

    for which in [KnownLayout::Qwerty, KnownLayout::Dvorak, KnownLayout::Colemak] {
        let lay = Layout::builtin(which);

        // Expected winner: max distance, earliest line on a tie.
        let mut expected = 0usize;
        let mut expected_dist = f32::MIN;
        for (i, line) in text.lines().enumerate() {
            let trace = sim::simulate(&lay, line);
            let dist = sim::aggregate(&trace, &model).total_distance;
            if dist > expected_dist {
                expected = i;
                expected_dist = dist;
            }
        }

        for parallel in [false, true] {
            let best = compare(&lay, text, &model, parallel).unwrap();
            assert_eq!(best.index, expected, "layout {}", which);
            assert_eq!(best.summary.total_distance, expected_dist, "layout {}", which);
        }
    }
}
