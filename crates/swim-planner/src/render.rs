// ABOUTME: Plain-text rendering of a WorkoutPlan with uppercase section headers
// ABOUTME: Pure projection: the same plan always renders to the same text
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text rendering
//!
//! Layout:
//!
//! ```text
//! 2000m swim workout (25m pool)
//!
//! WARM
//! 1 x 200 easy swim, mixed strokes
//! 2 x 50 build each length
//!
//! MAIN
//! 6 x 100 freestyle at threshold effort
//! 6 x 50 fast, hold form
//!
//! Total: 2000m
//! ```
//!
//! Every header stands alone on its line and every section ends with a blank
//! line, so a reader can scan from `MAIN` to the next blank line.

use crate::timing::format_clock;
use std::fmt::Write;
use swim_core::models::{Section, SectionKind, SwimSet, WorkoutPlan};

/// Format a distance without a trailing `.0` for whole values
#[must_use]
pub fn format_distance(distance: f64) -> String {
    let rounded = distance.round();
    if (distance - rounded).abs() < 1e-6 {
        format!("{rounded:.0}")
    } else {
        format!("{distance:.1}")
    }
}

/// Render a plan as the multi-line workout text
#[must_use]
pub fn render_text(plan: &WorkoutPlan) -> String {
    let mut text = String::new();
    let unit = plan.pool.unit;

    let _ = write!(
        text,
        "{}{unit} swim workout ({} pool",
        format_distance(plan.total_distance()),
        plan.pool
    );
    if plan.distance_unit != unit {
        let _ = write!(
            text,
            ", converted from {}{}",
            format_distance(plan.requested_distance),
            plan.distance_unit
        );
    }
    text.push_str(")\n\n");

    for section in &plan.sections {
        render_section(&mut text, section);
        text.push('\n');
    }

    let _ = write!(text, "Total: {}{unit}", format_distance(plan.total_distance()));
    if let Some(seconds) = plan.estimated_seconds() {
        let _ = write!(text, " (~{})", format_clock(seconds));
    }
    text.push('\n');
    text
}

fn render_section(text: &mut String, section: &Section) {
    text.push_str(section.kind.header());
    if let Some(seconds) = section.estimated_seconds() {
        let _ = write!(text, "  (~{})", format_clock(seconds));
    }
    text.push('\n');

    for set in &section.sets {
        render_set(text, set);
    }
}

fn render_set(text: &mut String, set: &SwimSet) {
    let _ = write!(
        text,
        "{} x {}",
        set.repetitions,
        format_distance(set.distance_per_rep)
    );
    if !set.description.is_empty() {
        let _ = write!(text, " {}", set.description);
    }
    if let (Some(per_rep), Some(total)) =
        (set.estimated_seconds_per_rep, set.estimated_total_seconds())
    {
        let _ = write!(
            text,
            " (@ {} each, {} total)",
            format_clock(per_rep),
            format_clock(total)
        );
    }
    text.push('\n');
}

/// Lines of the MAIN block in rendered text, header excluded
///
/// Reads from the first line starting with `MAIN` up to the next blank line.
#[must_use]
pub fn main_section_lines(text: &str) -> Vec<&str> {
    text.lines()
        .skip_while(|line| !line.starts_with(SectionKind::Main.header()))
        .skip(1)
        .take_while(|line| !line.trim().is_empty())
        .collect()
}

/// Parse the leading `<reps> x <distance>` of a set line
#[must_use]
pub fn parse_set_line(line: &str) -> Option<(u32, f64)> {
    let (reps, rest) = line.trim().split_once(" x ")?;
    let distance = rest.split_whitespace().next()?;
    Some((reps.trim().parse().ok()?, distance.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use swim_core::models::{PoolLength, PoolUnit};

    fn plan(distance_unit: PoolUnit, pace: Option<f64>) -> WorkoutPlan {
        let set = |repetitions, distance_per_rep: f64, description: &str| SwimSet {
            repetitions,
            distance_per_rep,
            description: description.to_owned(),
            estimated_seconds_per_rep: pace.map(|pace| distance_per_rep / 100.0 * pace),
        };
        WorkoutPlan {
            requested_distance: 500.0,
            distance_unit,
            pool: PoolLength::new(25.0, PoolUnit::Yards).unwrap(),
            sections: vec![
                Section {
                    kind: SectionKind::Warm,
                    sets: vec![set(1, 100.0, "easy")],
                },
                Section {
                    kind: SectionKind::Main,
                    sets: vec![set(4, 50.0, "fast"), set(1, 100.0, "")],
                },
                Section {
                    kind: SectionKind::Cool,
                    sets: vec![set(1, 100.0, "easy choice")],
                },
            ],
        }
    }

    #[test]
    fn test_render_without_pace() {
        let text = render_text(&plan(PoolUnit::Yards, None));
        assert_eq!(
            text,
            "500yd swim workout (25yd pool)\n\n\
             WARM\n1 x 100 easy\n\n\
             MAIN\n4 x 50 fast\n1 x 100\n\n\
             COOL\n1 x 100 easy choice\n\n\
             Total: 500yd\n"
        );
    }

    #[test]
    fn test_render_with_pace() {
        let text = render_text(&plan(PoolUnit::Yards, Some(90.0)));
        assert!(text.contains("MAIN  (~4:30)\n"));
        assert!(text.contains("4 x 50 fast (@ 0:45 each, 3:00 total)\n"));
        assert!(text.ends_with("Total: 500yd (~7:30)\n"));
    }

    #[test]
    fn test_render_mentions_conversion() {
        let text = render_text(&plan(PoolUnit::Meters, None));
        assert!(text.starts_with("500yd swim workout (25yd pool, converted from 500m)"));
    }

    #[test]
    fn test_render_is_deterministic_and_em_dash_free() {
        let plan = plan(PoolUnit::Yards, Some(100.0));
        assert_eq!(render_text(&plan), render_text(&plan));
        assert!(!render_text(&plan).contains('\u{2014}'));
    }

    #[test]
    fn test_main_section_scan() {
        let text = render_text(&plan(PoolUnit::Yards, None));
        let lines = main_section_lines(&text);
        assert_eq!(lines, vec!["4 x 50 fast", "1 x 100"]);
        assert_eq!(parse_set_line(lines[0]), Some((4, 50.0)));
        assert_eq!(parse_set_line("PRE-MAIN"), None);
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(100.0), "100");
        assert_eq!(format_distance(66.666_666), "66.7");
        assert_eq!(format_distance(199.999_999_9), "200");
    }
}
