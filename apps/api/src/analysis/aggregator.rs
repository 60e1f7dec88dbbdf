//! Aggregator: pure function from the four stage scores to a `Summary`.

use crate::analysis::models::Summary;

const EXCELLENT: &str = "Excellent match! Optimize your resume to push the score above 90.";
const GOOD: &str = "Good match. Resume optimization is recommended before applying.";
const MODERATE: &str = "Moderate match. Consider targeting roles that better match your profile.";
const LOW: &str = "Low match. Consider upskilling before applying to similar roles.";

pub const BASELINE_STRENGTH: &str = "Baseline qualifications met";

/// Per-stage threshold with the strength emitted at or above it and the
/// improvement emitted below it. Order matches the score order.
const CHECKS: [(u32, &str, &str); 4] = [
    (
        70,
        "Strong keyword alignment",
        "Improve keyword alignment with the job description",
    ),
    (
        70,
        "Relevant experience fit",
        "Highlight experience more relevant to the role",
    ),
    (
        85,
        "High optimization potential",
        "Apply the suggested optimizations to strengthen the resume",
    ),
    (
        60,
        "Favorable hiring conditions",
        "Hiring conditions are competitive; strengthen networking and referrals",
    ),
];

/// Builds the summary for scores ordered as
/// (match, role fit, optimization potential, selection probability).
pub fn summarize(scores: [u32; 4]) -> Summary {
    let average_score = average(scores);

    let mut strengths = Vec::new();
    let mut improvements = Vec::new();
    for (score, (threshold, strength, improvement)) in scores.iter().zip(CHECKS) {
        if *score >= threshold {
            strengths.push(strength.to_string());
        } else {
            improvements.push(improvement.to_string());
        }
    }
    if strengths.is_empty() {
        strengths.push(BASELINE_STRENGTH.to_string());
    }

    Summary {
        average_score,
        recommendation: recommendation(average_score).to_string(),
        strengths,
        improvements,
    }
}

/// round(mean), halves rounding up.
fn average(scores: [u32; 4]) -> u32 {
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    ((sum as f64) / 4.0).round() as u32
}

/// Recommendation bands are inclusive at their lower bound.
fn recommendation(average: u32) -> &'static str {
    if average >= 80 {
        EXCELLENT
    } else if average >= 60 {
        GOOD
    } else if average >= 40 {
        MODERATE
    } else {
        LOW
    }
}
