//! Year-by-year life report rendering.

use sylva_core::{Aging, TreeHistory};
use sylva_tree::AppleTree;

/// Render the life of an apple tree as report lines.
///
/// Drives a fresh [`AppleTree`] through the entire `history`, so every
/// invocation re-simulates from scratch. Reporting starts the first year
/// the tree holds apples after growing: that year also emits the leading
/// summary line. Each reported year is picked clean, so its harvest
/// figures cover that year alone.
///
/// Returns one string per output line, including the blank separator
/// after each year block, ending with the death notice.
pub fn life_report(history: &TreeHistory, color: &str) -> Vec<String> {
    let mut tree = AppleTree::new(color, history.clone());
    let mut lines = Vec::new();

    for _ in 0..history.len() {
        tree.grow();
        if !tree.has_apples() {
            continue;
        }
        if lines.is_empty() {
            lines.push(format!(
                "Tree is {} years old and {} feet tall",
                tree.age(),
                tree.height()
            ));
        }
        lines.push(format!("Year {} Report", tree.age()));
        lines.push(format!("Tree height: {} feet", tree.height()));
        lines.push(harvest_line(&mut tree));
        lines.push(String::new());
    }

    lines.push("Alas, the tree, she is dead!".to_string());
    lines
}

/// Summarize the current harvest and pick the tree clean.
fn harvest_line(tree: &mut AppleTree) -> String {
    let count = tree.apple_count();
    let mut total = 0.0;
    while let Ok(apple) = tree.pick_apple() {
        total += apple.diameter();
    }
    // Callers only report bearing years, so count is never zero here.
    let mean = round2(total / count as f64);
    // The label is padded so the figures align with the height line.
    format!("Harvest:     {count} apples with an average diameter of {mean} inches")
}

/// Round to two decimal places for display.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use sylva_core::TreeRecord;

    #[test]
    fn rounds_means_to_two_decimals() {
        assert_eq!(round2(11.0 / 5.0), 2.2);
        assert_eq!(round2(78.0 / 28.0), 2.79);
        assert_eq!(round2(653.0 / 160.0), 4.08);
    }

    #[test]
    fn fruitless_life_is_only_a_death_notice() {
        let history = TreeHistory::new([TreeRecord::new(1.0), TreeRecord::new(2.0)]);
        assert_eq!(life_report(&history, "red"), vec!["Alas, the tree, she is dead!"]);
    }

    #[test]
    fn each_block_reports_its_own_year() {
        let history = TreeHistory::new([
            TreeRecord::with_harvest(1.0, [2.0]),
            TreeRecord::with_harvest(2.0, [4.0, 4.0]),
        ]);
        let lines = life_report(&history, "red");
        assert_eq!(lines[0], "Tree is 1 years old and 1 feet tall");
        assert_eq!(lines[3], "Harvest:     1 apples with an average diameter of 2 inches");
        // Year one was picked clean, so year two reports two apples.
        assert_eq!(lines[7], "Harvest:     2 apples with an average diameter of 4 inches");
    }
}
