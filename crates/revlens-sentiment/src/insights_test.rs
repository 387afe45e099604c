use std::collections::HashMap;

use super::*;
use crate::classify::analyze_reviews;
use crate::scorer::PolarityScorer;
use crate::types::PolarityScores;

/// Stub scorer keyed on processed text; unknown text scores 0.0 (neutral).
struct FixedScorer(HashMap<String, f64>);

impl FixedScorer {
    fn new(entries: &[(&str, f64)]) -> Self {
        Self(
            entries
                .iter()
                .map(|&(text, compound)| (text.to_string(), compound))
                .collect(),
        )
    }
}

impl PolarityScorer for FixedScorer {
    fn score(&self, text: &str) -> PolarityScores {
        let compound = self.0.get(text).copied().unwrap_or(0.0);
        PolarityScores {
            positive: compound.max(0.0),
            negative: (-compound).max(0.0),
            neutral: 0.0,
            compound,
        }
    }
}

fn report_for(entries: &[(&str, f64)]) -> AggregateReport {
    let scorer = FixedScorer::new(entries);
    let reviews: Vec<String> = entries.iter().map(|(text, _)| (*text).to_string()).collect();
    analyze_reviews(&scorer, &reviews)
}

fn empty_report() -> AggregateReport {
    analyze_reviews(&FixedScorer::new(&[]), &[])
}

// ---------------------------------------------------------------------------
// Shape invariant
// ---------------------------------------------------------------------------

#[test]
fn always_exactly_five_insights() {
    assert_eq!(generate_insights(&empty_report()).len(), 5);

    let small = report_for(&[("lovely machine overall", 0.8)]);
    assert_eq!(generate_insights(&small).len(), 5);

    let entries: Vec<(String, f64)> = (0..60)
        .map(|i| (format!("review number {i}"), 0.0))
        .collect();
    let entry_refs: Vec<(&str, f64)> = entries
        .iter()
        .map(|(text, compound)| (text.as_str(), *compound))
        .collect();
    let large = report_for(&entry_refs);
    assert_eq!(generate_insights(&large).len(), 5);
}

#[test]
fn empty_report_gets_all_fallback_slots() {
    let insights = generate_insights(&empty_report());

    assert!(insights[0].contains("mixed reviews"));
    assert!(insights[1].contains("only 0 reviews"));
    assert_eq!(insights[2], "No positive reviews to extract key features from.");
    assert_eq!(insights[3], "No negative reviews to extract issues from.");
    assert!(insights[4].starts_with("Hold steady"));
}

// ---------------------------------------------------------------------------
// Slot 1 — overall assessment
// ---------------------------------------------------------------------------

#[test]
fn slot1_positive_phrasing_interpolates_positive_percentage() {
    let report = report_for(&[
        ("first praise", 0.8),
        ("second praise", 0.7),
        ("third praise", 0.6),
        ("fourth praise", 0.5),
    ]);
    let insights = generate_insights(&report);
    assert!(insights[0].contains("well-received with 100.0% positive"));
}

#[test]
fn slot1_negative_phrasing_interpolates_negative_percentage() {
    let report = report_for(&[
        ("first complaint", -0.8),
        ("second complaint", -0.7),
        ("third complaint", -0.6),
    ]);
    let insights = generate_insights(&report);
    assert!(insights[0].contains("significant issues with 100.0% negative"));
}

#[test]
fn slot1_mixed_phrasing_names_all_three_percentages() {
    let report = report_for(&[("praise", 0.8), ("complaint", -0.8)]);
    let insights = generate_insights(&report);
    assert!(insights[0].contains("50.0% positive"));
    assert!(insights[0].contains("50.0% negative"));
    assert!(insights[0].contains("0.0% neutral"));
}

// ---------------------------------------------------------------------------
// Slot 2 — engagement volume tiers
// ---------------------------------------------------------------------------

fn neutral_report_of_size(n: usize) -> AggregateReport {
    let entries: Vec<(String, f64)> = (0..n).map(|i| (format!("review {i}"), 0.0)).collect();
    let entry_refs: Vec<(&str, f64)> = entries
        .iter()
        .map(|(text, compound)| (text.as_str(), *compound))
        .collect();
    report_for(&entry_refs)
}

#[test]
fn slot2_fifty_or_more_is_high_engagement() {
    let insights = generate_insights(&neutral_report_of_size(50));
    assert!(insights[1].starts_with("High engagement: 50 reviews"));
}

#[test]
fn slot2_twenty_to_forty_nine_is_moderate() {
    let insights = generate_insights(&neutral_report_of_size(20));
    assert!(insights[1].starts_with("Moderate engagement: 20 reviews"));

    let insights = generate_insights(&neutral_report_of_size(49));
    assert!(insights[1].starts_with("Moderate engagement: 49 reviews"));
}

#[test]
fn slot2_below_twenty_names_the_exact_count() {
    let insights = generate_insights(&neutral_report_of_size(7));
    assert!(insights[1].contains("only 7 reviews"));
}

// ---------------------------------------------------------------------------
// Slots 3 & 4 — theme extraction
// ---------------------------------------------------------------------------

#[test]
fn slot3_ranks_positive_theme_words_by_frequency() {
    let report = report_for(&[
        ("battery life excellent battery", 0.8),
        ("battery design sleek", 0.7),
    ]);
    let insights = generate_insights(&report);
    assert!(
        insights[2].contains("Key positive features mentioned: Battery, Life, Design"),
        "got: {}",
        insights[2]
    );
}

#[test]
fn theme_ties_break_by_first_encountered_order() {
    let report = report_for(&[("zipper handle strap", 0.8)]);
    let insights = generate_insights(&report);
    // All three words appear once; accumulation order decides.
    assert!(
        insights[2].contains("Zipper, Handle, Strap"),
        "got: {}",
        insights[2]
    );
}

#[test]
fn theme_words_exclude_stopwords_and_short_words() {
    // "great"/"recommend" are stopwords, "fan" is too short — only
    // "motor" qualifies.
    let report = report_for(&[("great motor fan recommend", 0.8)]);
    let insights = generate_insights(&report);
    assert!(insights[2].contains("mentioned: Motor."), "got: {}", insights[2]);
}

#[test]
fn slot3_distinguishes_no_words_from_no_reviews() {
    // Positive review exists but every token is stopworded/short.
    let report = report_for(&[("great good best", 0.8)]);
    let insights = generate_insights(&report);
    assert_eq!(
        insights[2],
        "No specific features were frequently mentioned in positive reviews."
    );

    // No positive reviews at all.
    let report = report_for(&[("meh whatever entirely", 0.0)]);
    let insights = generate_insights(&report);
    assert_eq!(
        insights[2],
        "No positive reviews to extract key features from."
    );
}

#[test]
fn slot4_mirrors_over_negative_reviews() {
    let report = report_for(&[
        ("motor stalled and leaked", -0.8),
        ("motor leaked again", -0.7),
        ("praise handle", 0.8),
    ]);
    let insights = generate_insights(&report);
    assert!(
        insights[3].contains("Main issues reported: Motor, Leaked, Stalled"),
        "got: {}",
        insights[3]
    );
}

#[test]
fn slot4_negative_stopwords_are_separate_from_positive_ones() {
    // "terrible" is only in the negative stop-list; it must not surface as
    // an issue word, while a concrete noun does.
    let report = report_for(&[("terrible packaging", -0.8)]);
    let insights = generate_insights(&report);
    assert!(insights[3].contains("Packaging"), "got: {}", insights[3]);
    assert!(!insights[3].contains("Terrible"), "got: {}", insights[3]);
}

// ---------------------------------------------------------------------------
// Slot 5 — strategic recommendation tiers
// ---------------------------------------------------------------------------

#[test]
fn slot5_expansion_tier_above_seventy_percent_positive() {
    let entries: Vec<(String, f64)> = (0..8)
        .map(|i| (format!("praise {i}"), 0.8))
        .chain((0..2).map(|i| (format!("meh {i}"), 0.0)))
        .collect();
    let entry_refs: Vec<(&str, f64)> = entries
        .iter()
        .map(|(text, compound)| (text.as_str(), *compound))
        .collect();
    let insights = generate_insights(&report_for(&entry_refs));
    assert!(
        insights[4].contains("ready for expanded marketing"),
        "got: {}",
        insights[4]
    );
}

#[test]
fn slot5_expansion_tier_requires_strictly_above_seventy() {
    // Exactly 70% positive: falls through to later tiers.
    let entries: Vec<(String, f64)> = (0..7)
        .map(|i| (format!("praise {i}"), 0.8))
        .chain((0..3).map(|i| (format!("complaint {i}"), -0.8)))
        .collect();
    let entry_refs: Vec<(&str, f64)> = entries
        .iter()
        .map(|(text, compound)| (text.as_str(), *compound))
        .collect();
    let insights = generate_insights(&report_for(&entry_refs));
    assert!(
        !insights[4].contains("expanded marketing"),
        "got: {}",
        insights[4]
    );
}

#[test]
fn slot5_urgent_tier_above_half_negative() {
    let report = report_for(&[
        ("complaint one here", -0.8),
        ("complaint two here", -0.7),
        ("complaint three here", -0.9),
        ("praise here", 0.8),
    ]);
    let insights = generate_insights(&report);
    assert!(
        insights[4].starts_with("Urgent remediation needed: 75.0%"),
        "got: {}",
        insights[4]
    );
}

#[test]
fn slot5_indifference_tier_when_neutral_heavy() {
    // 1 positive, 1 negative, 3 neutral: neither polar tier fires and
    // neutral count (3) exceeds 0.4 * total (2).
    let report = report_for(&[
        ("praise here", 0.8),
        ("complaint here", -0.8),
        ("meh one", 0.0),
        ("meh two", 0.0),
        ("meh three", 0.0),
    ]);
    let insights = generate_insights(&report);
    assert!(
        insights[4].starts_with("Customer indifference risk"),
        "got: {}",
        insights[4]
    );
}

#[test]
fn slot5_default_tier_holds_steady() {
    // 50/50 split, no neutrals: no earlier tier fires.
    let report = report_for(&[("praise here", 0.8), ("complaint here", -0.8)]);
    let insights = generate_insights(&report);
    assert!(insights[4].starts_with("Hold steady"), "got: {}", insights[4]);
}
