// src/scoring.rs

//! Test scoring.
//!
//! A submission maps question IDs to the option the user picked. Anything that
//! is missing or does not parse counts as a wrong answer; scoring never fails.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::question::Question;

/// Options are numbered 1 through 4.
pub const OPTION_RANGE: std::ops::RangeInclusive<i64> = 1..=4;

/// Parses a single submitted option.
///
/// Accepts strings such as `"2"` or `" 3 "` and bare JSON integers.
/// Returns `None` for anything else, including numbers outside 1..=4.
pub fn parse_option(raw: &Value) -> Option<i64> {
    let option = match raw {
        Value::String(s) => s.trim().parse::<i64>().ok()?,
        Value::Number(n) => n.as_i64()?,
        _ => return None,
    };

    OPTION_RANGE.contains(&option).then_some(option)
}

/// The option submitted for `question_id`, looked up by its exact key
/// (`"12"`, never `"012"` or `" 12"`).
pub fn submitted_option(answers: &HashMap<String, Value>, question_id: i64) -> Option<i64> {
    answers.get(&question_id.to_string()).and_then(parse_option)
}

/// Counts the questions whose submitted option equals the correct one.
///
/// Always in `0..=questions.len()`. Keys that are not the exact ID of a
/// question in `questions` are ignored.
pub fn calculate_score(questions: &[Question], answers: &HashMap<String, Value>) -> i64 {
    questions
        .iter()
        .filter(|q| submitted_option(answers, q.id) == Some(q.correct_option))
        .count() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn question(id: i64, correct_option: i64) -> Question {
        Question {
            id,
            text: format!("Question {id}"),
            option_1: "A".into(),
            option_2: "B".into(),
            option_3: "C".into(),
            option_4: "D".into(),
            correct_option,
            created_at: chrono::Utc::now(),
        }
    }

    fn submission(pairs: &[(&str, Value)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn one_of_two_correct() {
        let questions = [question(1, 2), question(2, 4)];
        let answers = submission(&[("1", json!("2")), ("2", json!("1"))]);
        assert_eq!(calculate_score(&questions, &answers), 1);
    }

    #[test]
    fn empty_submission_scores_zero() {
        let questions = [question(1, 3)];
        assert_eq!(calculate_score(&questions, &HashMap::new()), 0);
    }

    #[test]
    fn all_correct_scores_question_count() {
        let questions = [question(1, 1), question(2, 2), question(3, 3), question(4, 4)];
        let answers = submission(&[
            ("1", json!("1")),
            ("2", json!("2")),
            ("3", json!("3")),
            ("4", json!("4")),
        ]);
        assert_eq!(calculate_score(&questions, &answers), 4);
    }

    #[test]
    fn malformed_values_count_as_wrong() {
        let questions = [question(1, 1), question(2, 2), question(3, 3), question(4, 4)];
        let answers = submission(&[
            ("1", json!("one")),
            ("2", json!(null)),
            ("3", json!([3])),
            ("4", json!("")),
        ]);
        assert_eq!(calculate_score(&questions, &answers), 0);
    }

    #[test]
    fn unknown_questions_are_ignored() {
        let questions = [question(1, 2)];
        let answers = submission(&[("1", json!("2")), ("99", json!("2")), ("abc", json!("2"))]);
        assert_eq!(calculate_score(&questions, &answers), 1);
    }

    #[test]
    fn only_exact_id_keys_are_read() {
        let questions = [question(1, 2)];

        let padded_only = submission(&[("01", json!("2")), (" 1", json!("2")), ("1 ", json!("2"))]);
        assert_eq!(submitted_option(&padded_only, 1), None);
        assert_eq!(calculate_score(&questions, &padded_only), 0);

        let mixed = submission(&[("1", json!("2")), ("01", json!("3")), (" 1", json!("4"))]);
        assert_eq!(submitted_option(&mixed, 1), Some(2));
        for _ in 0..200 {
            // Rebuilt each time so HashMap iteration order varies.
            let answers = submission(&[(" 1", json!("4")), ("01", json!("3")), ("1", json!("2"))]);
            assert_eq!(calculate_score(&questions, &answers), 1);
        }
        assert_eq!(calculate_score(&questions, &mixed), 1);
    }

    #[test]
    fn parse_option_accepts_strings_and_integers() {
        assert_eq!(parse_option(&json!("3")), Some(3));
        assert_eq!(parse_option(&json!(" 4 ")), Some(4));
        assert_eq!(parse_option(&json!(1)), Some(1));
        assert_eq!(parse_option(&json!(2.5)), None);
        assert_eq!(parse_option(&json!(true)), None);
    }

    #[test]
    fn parse_option_rejects_out_of_range() {
        assert_eq!(parse_option(&json!("0")), None);
        assert_eq!(parse_option(&json!("5")), None);
        assert_eq!(parse_option(&json!(-1)), None);
    }

    #[test]
    fn score_is_bounded_by_question_count() {
        let questions: Vec<Question> = (1..=10).map(|id| question(id, (id % 4) + 1)).collect();
        for pick in 1..=4 {
            let answers: HashMap<String, Value> = (1..=12)
                .map(|id: i64| (id.to_string(), json!(pick.to_string())))
                .collect();
            let score = calculate_score(&questions, &answers);
            let expected = questions.iter().filter(|q| q.correct_option == pick).count() as i64;
            assert_eq!(score, expected);
            assert!((0..=questions.len() as i64).contains(&score));
        }
    }
}
