//! Fixed validation sample set
//!
//! Twelve realistic Korean work-log entries with hand-labeled ground-truth
//! tags. The entries and the expectation table are keyed 1:1 by exact task
//! text; an entry missing from the table scores against an empty expectation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One work-log entry to be tagged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock time of the entry (e.g. "09:15:00")
    pub time: String,

    /// Free-text task description
    pub task: String,
}

impl LogEntry {
    pub fn new(time: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            task: task.into(),
        }
    }
}

/// The 12 tag categories the model is allowed to choose from
pub const ALLOWED_CATEGORIES: [&str; 12] = [
    "work",
    "personal",
    "coding",
    "meeting",
    "break",
    "leisure",
    "documentation",
    "bugfix",
    "design",
    "sideproject",
    "communication",
    "commute",
];

/// The fixed sample entries, in run order
pub fn sample_entries() -> Vec<LogEntry> {
    vec![
        LogEntry::new("09:15:00", "출근, 사무실 도착"),
        LogEntry::new("09:30:00", "이메일 확인 및 답장"),
        LogEntry::new("10:00:00", "팀 미팅 - 주간 스프린트 계획"),
        LogEntry::new("11:30:00", "코딩 - 사용자 인증 API 구현"),
        LogEntry::new("12:00:00", "점심 식사"),
        LogEntry::new("13:00:00", "유튜브 시청"),
        LogEntry::new("14:00:00", "디자인 리뷰 미팅"),
        LogEntry::new("15:30:00", "버그 수정 - 로그인 에러"),
        LogEntry::new("16:00:00", "커피 브레이크"),
        LogEntry::new("16:30:00", "문서 작성 - API 가이드"),
        LogEntry::new("17:00:00", "사이드 프로젝트 아이디어 정리"),
        LogEntry::new("17:30:00", "퇴근 준비"),
    ]
}

/// Human-labeled ground-truth tags, keyed by exact task text
pub fn expected_tags() -> HashMap<String, Vec<String>> {
    let labels: [(&str, &[&str]); 12] = [
        ("출근, 사무실 도착", &["work", "commute"]),
        ("이메일 확인 및 답장", &["work", "communication"]),
        ("팀 미팅 - 주간 스프린트 계획", &["work", "meeting"]),
        ("코딩 - 사용자 인증 API 구현", &["work", "coding"]),
        ("점심 식사", &["personal", "break"]),
        ("유튜브 시청", &["personal", "leisure"]),
        ("디자인 리뷰 미팅", &["work", "meeting", "design"]),
        ("버그 수정 - 로그인 에러", &["work", "coding", "bugfix"]),
        ("커피 브레이크", &["personal", "break"]),
        ("문서 작성 - API 가이드", &["work", "documentation"]),
        ("사이드 프로젝트 아이디어 정리", &["personal", "sideproject"]),
        ("퇴근 준비", &["work", "personal"]),
    ];

    labels
        .into_iter()
        .map(|(task, tags)| {
            (
                task.to_string(),
                tags.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_entries().len(), 12);
    }

    #[test]
    fn test_every_sample_has_a_label() {
        let expected = expected_tags();
        for entry in sample_entries() {
            assert!(
                expected.contains_key(&entry.task),
                "no ground-truth label for {:?}",
                entry.task
            );
        }
    }

    #[test]
    fn test_labels_use_allowed_categories() {
        for tags in expected_tags().values() {
            for tag in tags {
                assert!(
                    ALLOWED_CATEGORIES.contains(&tag.as_str()),
                    "label {:?} is not an allowed category",
                    tag
                );
            }
        }
    }

    #[test]
    fn test_entry_serialization_preserves_korean() {
        let entry = LogEntry::new("12:00:00", "점심 식사");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("점심 식사"));
    }
}
