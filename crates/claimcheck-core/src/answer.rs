//! Answer synthesis: final veracity → templated natural-language verdict.

use claimcheck_contracts::state::EnvironmentState;

/// Veracity strictly above this is reported "with high confidence".
pub const HIGH_CONFIDENCE: f64 = 0.5;

const METHODOLOGY: &str = " I arrived at this conclusion by using my own knowledge about the world \
                           as well as social media as an external source of knowledge.";

/// Build the answer for a finished evaluation.
///
/// | veracity           | verdict                          |
/// |--------------------|----------------------------------|
/// | `> 0.5`            | true, with high confidence       |
/// | `(0, 0.5]`         | true                             |
/// | `== 0`             | inconclusive (no further clauses)|
/// | `[-0.5, 0)`        | false                            |
/// | `< -0.5`           | false, with high confidence      |
///
/// Every conclusive answer is followed by the methodology sentence and then
/// both source explanations, one per line.
pub fn construct_answer(
    env: &EnvironmentState,
    knowledge_explanation: &str,
    sentiment_explanation: &str,
) -> String {
    let veracity = env.veracity;
    let scenario = &env.scenario;

    if veracity == 0.0 {
        return format!(
            "I could not come to a conclusion whether the statement \"{scenario}\" is true, \
             because there is contradicting evidence."
        );
    }

    let verdict = if veracity > 0.0 { "true" } else { "false" };
    let mut answer = if veracity.abs() > HIGH_CONFIDENCE {
        format!("I concluded with high confidence that the statement \"{scenario}\" is {verdict}.")
    } else {
        format!("I concluded that the statement \"{scenario}\" is {verdict}.")
    };

    answer.push_str(METHODOLOGY);
    answer.push('\n');
    answer.push_str(knowledge_explanation);
    answer.push('\n');
    answer.push_str(sentiment_explanation);
    answer
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "Sugar is good for people";

    fn answer_for(veracity: f64) -> String {
        let env = EnvironmentState { scenario: SCENARIO.to_string(), veracity };
        construct_answer(&env, "KB says so.", "Feed agrees.")
    }

    fn first_line(answer: &str) -> &str {
        answer.lines().next().unwrap_or_default()
    }

    #[test]
    fn zero_is_inconclusive_without_explanations() {
        let answer = answer_for(0.0);
        assert_eq!(
            answer,
            "I could not come to a conclusion whether the statement \"Sugar is good for people\" \
             is true, because there is contradicting evidence."
        );
        assert!(!answer.contains("KB says so."));
    }

    #[test]
    fn negative_zero_is_inconclusive() {
        assert!(answer_for(-0.0).starts_with("I could not come to a conclusion"));
    }

    #[test]
    fn exactly_half_is_plain_true() {
        let answer = answer_for(0.5);
        assert!(first_line(&answer)
            .starts_with("I concluded that the statement \"Sugar is good for people\" is true."));
        assert!(!answer.contains("high confidence"));
    }

    #[test]
    fn just_above_half_is_high_confidence_true() {
        let answer = answer_for(0.50001);
        assert!(first_line(&answer).starts_with(
            "I concluded with high confidence that the statement \"Sugar is good for people\" is true."
        ));
    }

    #[test]
    fn exactly_minus_half_is_plain_false() {
        let answer = answer_for(-0.5);
        assert!(first_line(&answer)
            .starts_with("I concluded that the statement \"Sugar is good for people\" is false."));
    }

    #[test]
    fn below_minus_half_is_high_confidence_false() {
        let answer = answer_for(-0.75);
        assert!(first_line(&answer).starts_with(
            "I concluded with high confidence that the statement \"Sugar is good for people\" is false."
        ));
    }

    #[test]
    fn tiny_values_still_conclude() {
        assert!(first_line(&answer_for(1e-12)).starts_with("I concluded that"));
        assert!(answer_for(1e-12).contains("is true."));
        assert!(answer_for(-1e-12).contains("is false."));
    }

    #[test]
    fn conclusive_answer_appends_methodology_and_both_explanations() {
        let answer = answer_for(0.25);
        let lines: Vec<&str> = answer.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("as an external source of knowledge."));
        assert_eq!(lines[1], "KB says so.");
        assert_eq!(lines[2], "Feed agrees.");
    }
}
