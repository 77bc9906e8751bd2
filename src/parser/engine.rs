//! The parsing pipeline.
//!
//! Stages run in a fixed order: date/time extraction, priority inference,
//! title cleanup, category extraction. Priority is inferred from the full
//! original input, category from the already-cleaned title.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{DateMatch, DateRecognizer, NaturalDateRecognizer};
use crate::task::{Priority, Task};

/// Ordered priority keyword table, evaluated top-down; the first level
/// with a matching keyword wins.
pub const PRIORITY_KEYWORDS: &[(Priority, &[&str])] = &[
    (
        Priority::P1,
        &["urgent", "critical", "high priority", "highest priority", "p1"],
    ),
    (Priority::P2, &["important", "medium priority", "p2"]),
    (Priority::P3, &["normal", "low priority", "p3"]),
    (Priority::P4, &["optional", "lowest priority", "p4"]),
];

// One case-insensitive pattern per keyword, in table order. Title cleanup
// strips every occurrence of every keyword, not just the deciding one.
static KEYWORD_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    PRIORITY_KEYWORDS
        .iter()
        .flat_map(|(_, keywords)| keywords.iter())
        .map(|keyword| {
            Regex::new(&format!("(?i){}", regex::escape(keyword)))
                .unwrap_or_else(|e| panic!("Invalid keyword regex: {e}"))
        })
        .collect()
});

static CATEGORY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"#(\w+)").unwrap_or_else(|e| panic!("Invalid category regex: {e}"))
});

/// Parse a line of natural language into a task.
///
/// Returns `None` only for input that is empty after trimming; any other
/// input yields a best-effort task.
///
/// # Examples
///
/// ```
/// use taskline::{parse_task, Priority};
///
/// let task = parse_task("urgent meeting with team #work").unwrap();
/// assert_eq!(task.priority, Priority::P1);
/// assert_eq!(task.title, "meeting with team");
/// assert_eq!(task.category.as_deref(), Some("work"));
///
/// assert!(parse_task("   ").is_none());
/// ```
#[must_use]
pub fn parse_task(input: &str) -> Option<Task> {
    parse_task_with(&NaturalDateRecognizer, input)
}

/// Parse with an explicit date recognizer.
#[must_use]
pub fn parse_task_with(recognizer: &dyn DateRecognizer, input: &str) -> Option<Task> {
    if input.trim().is_empty() {
        return None;
    }

    let recognized = recognizer.recognize(input);
    let due_date = recognized.as_ref().map(|m| m.date);
    let due_time = recognized.as_ref().and_then(DateMatch::to_datetime);

    let priority = infer_priority(input);

    // Title cleanup starts from the original input: the matched date
    // substring goes once, priority keywords go everywhere.
    let mut title = input.to_string();
    if let Some(m) = &recognized {
        title = title.replacen(&m.text, "", 1);
    }
    for pattern in KEYWORD_PATTERNS.iter() {
        title = pattern.replace_all(&title, "").into_owned();
    }
    let mut title = normalize_whitespace(&title);

    let category = extract_category(&mut title);

    Some(Task::new(title, priority, due_date, due_time, category))
}

/// Case-insensitive substring match against the full original input.
fn infer_priority(input: &str) -> Priority {
    let haystack = input.to_lowercase();

    for (priority, keywords) in PRIORITY_KEYWORDS {
        if keywords.iter().any(|keyword| haystack.contains(keyword)) {
            return *priority;
        }
    }

    Priority::default()
}

/// Pull the first `#word` tag out of the cleaned title.
fn extract_category(title: &mut String) -> Option<String> {
    let caps = CATEGORY_PATTERN.captures(title)?;
    let word = caps.get(1)?.as_str().to_string();
    let tag = caps.get(0)?.as_str().to_string();

    *title = normalize_whitespace(&title.replacen(&tag, "", 1));
    Some(word)
}

/// Collapse runs of whitespace left behind by removals.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Local, NaiveDate, NaiveTime};

    use super::*;
    use crate::core::MockDateRecognizer;

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    // ===================
    // Null-result Tests
    // ===================

    #[test]
    fn test_empty_input_returns_none() {
        assert!(parse_task("").is_none());
    }

    #[test]
    fn test_whitespace_input_returns_none() {
        assert!(parse_task("   ").is_none());
        assert!(parse_task("\t\n").is_none());
    }

    // ===================
    // Priority Tests
    // ===================

    #[test]
    fn test_default_priority() {
        let task = parse_task("Buy groceries").unwrap();
        assert_eq!(task.priority, Priority::P3);
        assert_eq!(task.title, "Buy groceries");
        assert!(task.due_date.is_none());
        assert!(task.category.is_none());
    }

    #[test]
    fn test_priority_keywords_per_level() {
        let cases = [
            ("critical task", Priority::P1),
            ("important meeting", Priority::P2),
            ("normal priority task", Priority::P3),
            ("optional reading", Priority::P4),
        ];
        for (input, expected) in cases {
            let task = parse_task(input).unwrap();
            assert_eq!(task.priority, expected, "input: {input}");
        }
    }

    #[test]
    fn test_priority_is_case_insensitive() {
        let task = parse_task("URGENT call with vendor").unwrap();
        assert_eq!(task.priority, Priority::P1);
        assert_eq!(task.title, "call with vendor");
    }

    #[test]
    fn test_priority_level_order_wins() {
        // Contains both a P1 and a P2 keyword; P1 is checked first.
        let task = parse_task("urgent but also important errand").unwrap();
        assert_eq!(task.priority, Priority::P1);
    }

    #[test]
    fn test_p_codes_match() {
        assert_eq!(parse_task("ship it p1").unwrap().priority, Priority::P1);
        assert_eq!(parse_task("ship it P2").unwrap().priority, Priority::P2);
        assert_eq!(parse_task("ship it p4").unwrap().priority, Priority::P4);
    }

    #[test]
    fn test_every_input_gets_exactly_one_priority() {
        for input in ["x", "!!!", "###", "1234", "due diligence"] {
            let task = parse_task(input).unwrap();
            assert!(matches!(
                task.priority,
                Priority::P1 | Priority::P2 | Priority::P3 | Priority::P4
            ));
        }
    }

    // ===================
    // Title Cleanup Tests
    // ===================

    #[test]
    fn test_deciding_keyword_removed_from_title() {
        let task = parse_task("urgent meeting with team").unwrap();
        assert_eq!(task.title, "meeting with team");
    }

    #[test]
    fn test_all_keyword_occurrences_removed() {
        let task = parse_task("urgent urgent fix the build").unwrap();
        assert_eq!(task.priority, Priority::P1);
        assert_eq!(task.title, "fix the build");
    }

    #[test]
    fn test_non_deciding_keywords_also_removed() {
        // "p1" decides, but "p2" is stripped from the title as well.
        let task = parse_task("p1 migrate the p2 queue").unwrap();
        assert_eq!(task.priority, Priority::P1);
        assert_eq!(task.title, "migrate the queue");
    }

    #[test]
    fn test_title_whitespace_collapsed() {
        let task = parse_task("urgent   fix    build").unwrap();
        assert_eq!(task.title, "fix build");
    }

    #[test]
    fn test_title_may_be_empty() {
        let task = parse_task("urgent").unwrap();
        assert_eq!(task.title, "");
        assert_eq!(task.priority, Priority::P1);
    }

    #[test]
    fn test_title_preserves_case() {
        let task = parse_task("Email John about the Q4 report").unwrap();
        assert_eq!(task.title, "Email John about the Q4 report");
    }

    // ===================
    // Date Tests
    // ===================

    #[test]
    fn test_no_date_phrase_leaves_fields_unset() {
        let task = parse_task("Review code John").unwrap();
        assert!(task.due_date.is_none());
        assert!(task.due_time.is_none());
    }

    #[test]
    fn test_date_only_sets_due_date() {
        let task = parse_task("buy milk tomorrow").unwrap();
        assert_eq!(task.due_date, Some(today() + Duration::days(1)));
        assert!(task.due_time.is_none());
        assert_eq!(task.title, "buy milk");
    }

    #[test]
    fn test_date_with_time_sets_both() {
        let task = parse_task("Submit report by tomorrow at 5pm").unwrap();
        let tomorrow = today() + Duration::days(1);

        assert_eq!(task.due_date, Some(tomorrow));
        let due_time = task.due_time.unwrap();
        assert_eq!(due_time.date(), tomorrow);
        assert_eq!(due_time.time(), NaiveTime::from_hms_opt(17, 0, 0).unwrap());
        assert_eq!(task.title, "Submit report");
    }

    #[test]
    fn test_due_time_implies_due_date() {
        for input in ["standup 9am", "ship friday", "plain task"] {
            let task = parse_task(input).unwrap();
            if task.due_time.is_some() {
                assert!(task.due_date.is_some(), "input: {input}");
            }
        }
    }

    #[test]
    fn test_date_phrase_removed_from_title() {
        let task = parse_task("Call client Rajeev tomorrow 5pm").unwrap();
        assert_eq!(task.title, "Call client Rajeev");
    }

    // ===================
    // Category Tests
    // ===================

    #[test]
    fn test_category_extracted_and_stripped() {
        let task = parse_task("Team lunch #social").unwrap();
        assert_eq!(task.category.as_deref(), Some("social"));
        assert_eq!(task.title, "Team lunch");
        assert!(!task.title.contains('#'));
    }

    #[test]
    fn test_category_unset_when_absent() {
        let task = parse_task("No category task").unwrap();
        assert!(task.category.is_none());
    }

    #[test]
    fn test_first_category_wins() {
        let task = parse_task("plan offsite #work #travel").unwrap();
        assert_eq!(task.category.as_deref(), Some("work"));
        // Only the first tag is consumed.
        assert_eq!(task.title, "plan offsite #travel");
    }

    #[test]
    fn test_category_mid_title() {
        let task = parse_task("Review #dev pull requests").unwrap();
        assert_eq!(task.category.as_deref(), Some("dev"));
        assert_eq!(task.title, "Review pull requests");
    }

    // ===================
    // Combined Pipeline Tests
    // ===================

    #[test]
    fn test_all_components_together() {
        let task = parse_task("urgent meeting with team #work").unwrap();
        assert_eq!(task.priority, Priority::P1);
        assert_eq!(task.title, "meeting with team");
        assert_eq!(task.category.as_deref(), Some("work"));
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_reparsing_title_keeps_default_priority() {
        let task = parse_task("urgent meeting with team tomorrow #work").unwrap();
        let reparsed = parse_task(&task.title).unwrap();
        assert_eq!(reparsed.priority, Priority::P3);
        assert_eq!(reparsed.title, task.title);
        assert!(reparsed.category.is_none());
    }

    #[test]
    fn test_unicode_input() {
        let task = parse_task("买牛奶 tomorrow #errands").unwrap();
        assert_eq!(task.title, "买牛奶");
        assert!(task.due_date.is_some());
        assert_eq!(task.category.as_deref(), Some("errands"));
    }

    // ===================
    // Recognizer Contract Tests
    // ===================

    #[test]
    fn test_exact_matched_substring_is_removed() {
        let mut recognizer = MockDateRecognizer::new();
        recognizer.expect_recognize().returning(|_| {
            Some(DateMatch {
                text: "next sprint".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 8, 17).unwrap(),
                time: None,
            })
        });

        let task = parse_task_with(&recognizer, "demo next sprint for stakeholders").unwrap();
        assert_eq!(task.title, "demo for stakeholders");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2026, 8, 17));
        assert!(task.due_time.is_none());
    }

    #[test]
    fn test_hour_flag_gates_due_time() {
        let mut recognizer = MockDateRecognizer::new();
        recognizer.expect_recognize().returning(|_| {
            Some(DateMatch {
                text: "tomorrow 3pm".to_string(),
                date: NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
                time: NaiveTime::from_hms_opt(15, 0, 0),
            })
        });

        let task = parse_task_with(&recognizer, "sync tomorrow 3pm").unwrap();
        let due_time = task.due_time.unwrap();
        assert_eq!(
            due_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "2026-08-07T15:00:00"
        );
    }

    #[test]
    fn test_recognizer_not_trusted_for_empty_check() {
        let mut recognizer = MockDateRecognizer::new();
        recognizer.expect_recognize().never();

        assert!(parse_task_with(&recognizer, "  ").is_none());
    }
}
