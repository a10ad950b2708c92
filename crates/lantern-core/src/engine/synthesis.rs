use crate::core::labels::{connection_label, type_label};
use crate::core::models::part::PartType;
use crate::core::models::verdict::{AssemblyVerdict, ScoreComponents, VerdictDetails};
use crate::engine::config::EvaluationConfig;

/// A joint attempt passes at this rounded accuracy or above.
pub const PASS_THRESHOLD_PERCENT: i32 = 60;

const POSITION_WEIGHT: f64 = 0.6;
const ROTATION_WEIGHT: f64 = 0.4;

/// Each difficulty step above 1 removes this fraction of the achievable score.
const DIFFICULTY_STEP: f64 = 0.1;

/// Component score below which the fail message singles that component out.
const LOW_COMPONENT_THRESHOLD: f64 = 0.6;
/// Component score below which improvement suggestions are generated.
const SUGGESTION_THRESHOLD: f64 = 0.7;

const PERFECT_PERCENT: i32 = 90;
const EXCELLENT_PERCENT: i32 = 75;

/// Combines the component scores into the final verdict: difficulty-adjusted
/// aggregation, pass/fail decision, feedback message, and suggestions.
pub fn synthesize(
    scores: ScoreComponents,
    difficulty: u32,
    type_a: PartType,
    type_b: PartType,
    config: &EvaluationConfig,
) -> AssemblyVerdict {
    let raw = scores.position * POSITION_WEIGHT + scores.rotation * ROTATION_WEIGHT;
    let mut final_score = (raw * difficulty_factor(difficulty)).min(1.0);
    if config.clamp_final_score {
        final_score = final_score.max(0.0);
    }

    let accuracy = (final_score * 100.0).round() as i32;
    let assembled = accuracy >= PASS_THRESHOLD_PERCENT;

    let message = feedback(assembled, accuracy, &scores, type_a, type_b);
    let suggestions = if assembled {
        Vec::new()
    } else {
        suggestions(&scores)
    };

    let details = VerdictDetails {
        position_score: scores.position_percent(),
        rotation_score: scores.rotation_percent(),
        difficulty,
        connection_type: connection_label(type_a, type_b),
    };

    AssemblyVerdict::scored(assembled, accuracy, message, details, suggestions)
}

/// Tightens the achievable score as the difficulty rating rises. Not clamped
/// from below: ratings of 11 and above turn the factor negative, which the
/// caller may neutralize via [`EvaluationConfig::clamped`].
fn difficulty_factor(difficulty: u32) -> f64 {
    1.0 - (difficulty as f64 - 1.0) * DIFFICULTY_STEP
}

fn feedback(
    assembled: bool,
    accuracy: i32,
    scores: &ScoreComponents,
    type_a: PartType,
    type_b: PartType,
) -> String {
    let label_a = type_label(type_a);
    let label_b = type_label(type_b);

    if assembled {
        let praise = if accuracy >= PERFECT_PERCENT {
            "Perfect!"
        } else if accuracy >= EXCELLENT_PERCENT {
            "Excellent!"
        } else {
            "Acceptable!"
        };
        return format!("{praise} The {label_a} and the {label_b} are joined ({accuracy}% accurate)");
    }

    let mut message = format!("The {label_a} and the {label_b} need adjustment:");
    if scores.position < LOW_COMPONENT_THRESHOLD {
        message.push_str(" the position deviation is too large");
        if scores.rotation < LOW_COMPONENT_THRESHOLD {
            message.push_str(", and the angle also needs adjusting");
        }
    } else if scores.rotation < LOW_COMPONENT_THRESHOLD {
        message.push_str(" the angle needs adjusting");
    } else {
        message.push_str(" overall precision is insufficient");
    }
    message.push_str(&format!(
        " (currently {accuracy}%, at least {PASS_THRESHOLD_PERCENT}% needed)"
    ));
    message
}

fn suggestions(scores: &ScoreComponents) -> Vec<String> {
    let mut suggestions = Vec::new();

    if scores.position < SUGGESTION_THRESHOLD {
        suggestions.push("try moving the parts closer together".to_string());
        suggestions.push("check that the connection points line up".to_string());
    }
    if scores.rotation < SUGGESTION_THRESHOLD {
        suggestions.push("adjust the part's rotation angle".to_string());
        suggestions.push("make sure the joint faces the right way".to_string());
    }
    if suggestions.is_empty() {
        suggestions.push("fine-tune the position and angle".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesize_default(position: f64, rotation: f64, difficulty: u32) -> AssemblyVerdict {
        synthesize(
            ScoreComponents::new(position, rotation),
            difficulty,
            PartType::Frame,
            PartType::Panel,
            &EvaluationConfig::default(),
        )
    }

    #[test]
    fn ideal_components_at_difficulty_one_reach_full_accuracy() {
        let verdict = synthesize_default(1.0, 1.0, 1);
        assert!(verdict.ok);
        assert!(verdict.assembled);
        assert_eq!(verdict.accuracy, 100);
        assert_eq!(verdict.score, 1000);
        assert!(verdict.message.starts_with("Perfect!"));
        assert!(verdict.suggestions.is_empty());
    }

    #[test]
    fn praise_tiers_follow_the_accuracy_thresholds() {
        assert!(synthesize_default(0.8, 0.8, 1).message.starts_with("Excellent!"));
        assert!(synthesize_default(0.65, 0.65, 1).message.starts_with("Acceptable!"));
    }

    #[test]
    fn pass_decision_matches_the_sixty_percent_threshold() {
        assert!(synthesize_default(0.6, 0.6, 1).assembled);
        assert!(!synthesize_default(0.59, 0.59, 1).assembled);
    }

    #[test]
    fn low_position_leads_the_fail_message() {
        let verdict = synthesize_default(0.3, 0.8, 1);
        assert!(!verdict.assembled);
        assert!(verdict.message.contains("position deviation is too large"));
        assert!(!verdict.message.contains("angle"));
        assert!(verdict.message.contains("at least 60% needed"));
    }

    #[test]
    fn low_rotation_is_appended_when_position_is_also_low() {
        let verdict = synthesize_default(0.4, 0.4, 1);
        assert!(verdict.message.contains("position deviation is too large"));
        assert!(verdict.message.contains("and the angle also needs adjusting"));
    }

    #[test]
    fn rotation_only_failures_cite_the_angle() {
        let verdict = synthesize_default(0.9, 0.1, 1);
        assert!(!verdict.assembled);
        assert!(verdict.message.contains("the angle needs adjusting"));
        assert!(!verdict.message.contains("position deviation"));
    }

    #[test]
    fn difficulty_failures_cite_insufficient_precision() {
        // Both components healthy; the difficulty factor alone sinks the score.
        let verdict = synthesize_default(0.9, 0.9, 5);
        assert!(!verdict.assembled);
        assert_eq!(verdict.accuracy, 54);
        assert!(verdict.message.contains("overall precision is insufficient"));
        assert_eq!(verdict.suggestions, ["fine-tune the position and angle"]);
    }

    #[test]
    fn suggestions_cover_each_weak_component() {
        let verdict = synthesize_default(0.4, 0.4, 1);
        assert_eq!(
            verdict.suggestions,
            [
                "try moving the parts closer together",
                "check that the connection points line up",
                "adjust the part's rotation angle",
                "make sure the joint faces the right way",
            ]
        );

        let position_only = synthesize_default(0.3, 0.8, 1);
        assert_eq!(position_only.suggestions.len(), 2);
        assert!(position_only.suggestions[0].contains("closer"));
    }

    #[test]
    fn passing_verdicts_carry_no_suggestions() {
        assert!(synthesize_default(0.95, 0.9, 1).suggestions.is_empty());
    }

    #[test]
    fn details_report_components_difficulty_and_pairing_label() {
        let verdict = synthesize_default(0.875, 0.5, 3);
        let details = verdict.details.unwrap();
        assert_eq!(details.position_score, 88);
        assert_eq!(details.rotation_score, 50);
        assert_eq!(details.difficulty, 3);
        assert_eq!(details.connection_type, "frame-to-panel joint");
    }

    #[test]
    fn difficulty_eleven_zeroes_a_perfect_attempt() {
        let verdict = synthesize_default(1.0, 1.0, 11);
        assert_eq!(verdict.accuracy, 0);
        assert!(!verdict.assembled);
    }

    #[test]
    fn the_default_config_lets_extreme_difficulty_go_negative() {
        let verdict = synthesize_default(1.0, 1.0, 13);
        assert_eq!(verdict.accuracy, -20);
        assert_eq!(verdict.score, -200);
        assert!(!verdict.assembled);
    }

    #[test]
    fn the_clamped_config_floors_accuracy_at_zero() {
        let verdict = synthesize(
            ScoreComponents::new(1.0, 1.0),
            13,
            PartType::Frame,
            PartType::Panel,
            &EvaluationConfig::clamped(),
        );
        assert_eq!(verdict.accuracy, 0);
        assert_eq!(verdict.score, 0);
    }

    #[test]
    fn accuracy_never_exceeds_one_hundred() {
        let verdict = synthesize_default(1.0, 1.0, 1);
        assert_eq!(verdict.accuracy, 100);
    }
}
