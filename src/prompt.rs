//! Few-shot prompt construction for tag suggestion

use crate::samples::LogEntry;

/// Role preamble and few-shot examples shown before every entry
///
/// The examples simulate previous user tagging so the model mirrors the
/// user's own vocabulary instead of inventing categories.
const PROMPT_HEADER: &str = r#"You are a personal activity tagger for a Korean user's work log.

Previous user tagging examples:
- "코딩 작업" → tags: work, coding
- "점심 먹음" → tags: personal, break
- "회의" → tags: work, meeting
- "넷플릭스 시청" → tags: personal, leisure
"#;

/// Instruction trailer: allowed categories and the bare output format
const PROMPT_TRAILER: &str = r#"Suggest 1-3 relevant tags from these categories:
- work, personal, coding, meeting, break, leisure, documentation, bugfix, design, sideproject, communication, commute

Output ONLY in this exact format (no explanation):
tag1,tag2,tag3
"#;

/// Builds the tagging prompt for one entry
///
/// Pure function of the entry; `task` and `time` are assumed non-empty
/// (enforced by `BenchConfig::validate`).
pub fn build_tagging_prompt(entry: &LogEntry) -> String {
    format!(
        "{}\nCurrent entry:\n- \"{}\" ({})\n\n{}",
        PROMPT_HEADER, entry.task, entry.time, PROMPT_TRAILER
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_entry() {
        let entry = LogEntry::new("11:30:00", "코딩 - 사용자 인증 API 구현");
        let prompt = build_tagging_prompt(&entry);

        assert!(prompt.contains("코딩 - 사용자 인증 API 구현"));
        assert!(prompt.contains("(11:30:00)"));
    }

    #[test]
    fn test_prompt_lists_all_categories() {
        let entry = LogEntry::new("09:00:00", "출근");
        let prompt = build_tagging_prompt(&entry);

        for category in crate::samples::ALLOWED_CATEGORIES {
            assert!(prompt.contains(category), "missing category {}", category);
        }
    }

    #[test]
    fn test_prompt_mandates_bare_format() {
        let entry = LogEntry::new("09:00:00", "출근");
        let prompt = build_tagging_prompt(&entry);

        assert!(prompt.contains("tag1,tag2,tag3"));
        assert!(prompt.contains("no explanation"));
    }

    #[test]
    fn test_prompt_includes_few_shot_examples() {
        let entry = LogEntry::new("09:00:00", "출근");
        let prompt = build_tagging_prompt(&entry);

        assert!(prompt.contains("넷플릭스 시청"));
        assert!(prompt.contains("Previous user tagging examples"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let entry = LogEntry::new("09:00:00", "출근");
        assert_eq!(build_tagging_prompt(&entry), build_tagging_prompt(&entry));
    }
}
