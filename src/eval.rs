//! Evaluation loop, threshold tiers, and the GO/NO-GO decision
//!
//! Drives the prompt builder, backend, and scorer over the configured sample
//! list, strictly one entry at a time. Failed entries are displayed and
//! skipped; they never abort the run and never enter the statistics.

use crate::backend::TagBackend;
use crate::config::BenchConfig;
use crate::prompt::build_tagging_prompt;
use crate::report::{run_timestamp, Report, ScoredRecord, Summary};
use crate::scoring::jaccard;
use std::time::Instant;
use tracing::{debug, warn};

/// Latency assessment over the successful subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatencyTier {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl LatencyTier {
    /// Classifies an average response time in seconds
    pub fn classify(avg_secs: f64) -> Self {
        if avg_secs < 0.5 {
            LatencyTier::Excellent
        } else if avg_secs < 1.0 {
            LatencyTier::Good
        } else if avg_secs < 2.0 {
            LatencyTier::Acceptable
        } else {
            LatencyTier::Poor
        }
    }

    fn console_line(&self) -> &'static str {
        match self {
            LatencyTier::Excellent => "  ✓ Response time: EXCELLENT (<500ms)",
            LatencyTier::Good => "  ✓ Response time: GOOD (<1s)",
            LatencyTier::Acceptable => "  ⚠ Response time: ACCEPTABLE (<2s)",
            LatencyTier::Poor => "  ✗ Response time: POOR (>2s)",
        }
    }
}

/// Accuracy assessment over the successful subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyTier {
    Excellent,
    Good,
    Acceptable,
    Poor,
}

impl AccuracyTier {
    /// Classifies an average Jaccard accuracy
    pub fn classify(avg_accuracy: f64) -> Self {
        if avg_accuracy > 0.7 {
            AccuracyTier::Excellent
        } else if avg_accuracy > 0.5 {
            AccuracyTier::Good
        } else if avg_accuracy > 0.3 {
            AccuracyTier::Acceptable
        } else {
            AccuracyTier::Poor
        }
    }

    fn console_line(&self) -> &'static str {
        match self {
            AccuracyTier::Excellent => "  ✓ Accuracy: EXCELLENT (>70%)",
            AccuracyTier::Good => "  ✓ Accuracy: GOOD (>50%)",
            AccuracyTier::Acceptable => "  ⚠ Accuracy: ACCEPTABLE (>30%)",
            AccuracyTier::Poor => "  ✗ Accuracy: POOR (<30%)",
        }
    }
}

/// Operational decision derived from the two averages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Go,
    ConditionalGo,
    NoGo,
}

impl Verdict {
    /// Applies the two threshold rules, in order
    pub fn decide(avg_time: f64, avg_accuracy: f64) -> Self {
        if avg_time < 2.0 && avg_accuracy > 0.5 {
            Verdict::Go
        } else if avg_time < 3.0 && avg_accuracy > 0.3 {
            Verdict::ConditionalGo
        } else {
            Verdict::NoGo
        }
    }

    fn console_lines(&self) -> [&'static str; 2] {
        match self {
            Verdict::Go => [
                "  ✓✓✓ GO - Proceed to Phase 1",
                "  Local LLM performance is sufficient for production use",
            ],
            Verdict::ConditionalGo => [
                "  ⚠⚠ CONDITIONAL GO - Consider optimizations",
                "  May need to tune model or use hybrid approach",
            ],
            Verdict::NoGo => [
                "  ✗✗✗ NO-GO - Need alternative approach",
                "  Consider cloud API or simpler rule-based tagging",
            ],
        }
    }
}

/// Result of one full validation run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: Report,

    /// None when every entry failed; tiers and verdict are then meaningless
    pub latency_tier: Option<LatencyTier>,
    pub accuracy_tier: Option<AccuracyTier>,
    pub verdict: Option<Verdict>,
}

/// Guarded mean: 0.0 when there is nothing to average
///
/// Single averaging helper used for both response time and accuracy so the
/// console summary and the persisted summary cannot diverge.
fn average(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Runs the full validation over `config.samples` against `backend`
///
/// Processes entries sequentially, prints per-entry progress and the final
/// assessment to stdout, and returns the aggregate report. Never fails: the
/// worst case is a report with zero successes.
pub async fn run_validation(config: &BenchConfig, backend: &dyn TagBackend) -> RunOutcome {
    println!("{}", "=".repeat(60));
    println!("Phase 0 Validation: Local LLM Tagging Test");
    println!("Model: {}", config.model);
    println!("Samples: {} entries", config.samples.len());
    println!("{}", "=".repeat(60));
    println!();

    let mut records: Vec<ScoredRecord> = Vec::new();
    let mut successful = 0usize;
    let mut total_time = 0.0f64;
    let mut total_tokens = 0u64;
    let mut accuracy_sum = 0.0f64;

    for (i, entry) in config.samples.iter().enumerate() {
        println!(
            "[{}/{}] Testing: {}",
            i + 1,
            config.samples.len(),
            entry.task
        );

        let prompt = build_tagging_prompt(entry);
        debug!(task = %entry.task, prompt_len = prompt.len(), "Built tagging prompt");

        let call_start = Instant::now();
        match backend.suggest(&prompt).await {
            Ok(suggestion) => {
                let expected = config
                    .expected
                    .get(&entry.task)
                    .cloned()
                    .unwrap_or_default();
                let accuracy = jaccard(&suggestion.tags, &expected);
                let response_time = suggestion.elapsed.as_secs_f64();

                println!("  ✓ Response time: {:.2}s", response_time);
                println!("  ✓ Suggested: {:?}", suggestion.tags);
                println!("  ✓ Expected: {:?}", expected);
                println!("  ✓ Accuracy: {:.1}%", accuracy * 100.0);

                successful += 1;
                total_time += response_time;
                total_tokens += u64::from(suggestion.eval_tokens);
                accuracy_sum += accuracy;

                records.push(ScoredRecord {
                    entry: entry.clone(),
                    suggested: suggestion.tags,
                    expected,
                    accuracy,
                    response_time,
                });
            }
            Err(error) => {
                // Best-effort elapsed time for failed calls; logged, not
                // accumulated into the latency statistics.
                warn!(
                    task = %entry.task,
                    elapsed_secs = call_start.elapsed().as_secs_f64(),
                    "Inference failed: {}",
                    error
                );
                println!("  ✗ Error: {}", error);
            }
        }

        println!();
    }

    let avg_time = average(total_time, successful);
    let avg_accuracy = average(accuracy_sum, successful);

    println!("{}", "=".repeat(60));
    println!("VALIDATION RESULTS");
    println!("{}", "=".repeat(60));

    let (latency_tier, accuracy_tier, verdict) = if successful > 0 {
        println!(
            "Success rate: {}/{} ({:.1}%)",
            successful,
            config.samples.len(),
            successful as f64 / config.samples.len() as f64 * 100.0
        );
        println!("Average response time: {:.2}s", avg_time);
        println!("Average accuracy: {:.1}%", avg_accuracy * 100.0);
        println!("Total tokens generated: {}", total_tokens);
        println!();

        let latency_tier = LatencyTier::classify(avg_time);
        let accuracy_tier = AccuracyTier::classify(avg_accuracy);
        let verdict = Verdict::decide(avg_time, avg_accuracy);

        println!("ASSESSMENT:");
        println!("{}", latency_tier.console_line());
        println!("{}", accuracy_tier.console_line());
        println!();

        println!("GO/NO-GO DECISION:");
        for line in verdict.console_lines() {
            println!("{}", line);
        }

        (Some(latency_tier), Some(accuracy_tier), Some(verdict))
    } else {
        println!("✗ All tests failed. Check Ollama service and model.");
        (None, None, None)
    };

    let report = Report {
        model: config.model.clone(),
        timestamp: run_timestamp(),
        summary: Summary {
            total_samples: config.samples.len(),
            successful,
            avg_response_time: avg_time,
            avg_accuracy,
            total_tokens,
        },
        results: records,
    };

    RunOutcome {
        report,
        latency_tier,
        accuracy_tier,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, MockReply, MockTagBackend};

    #[test]
    fn test_average_guards_zero_count() {
        assert_eq!(average(1.5, 0), 0.0);
        assert_eq!(average(3.0, 2), 1.5);
    }

    #[test]
    fn test_latency_tier_thresholds() {
        assert_eq!(LatencyTier::classify(0.49), LatencyTier::Excellent);
        assert_eq!(LatencyTier::classify(0.5), LatencyTier::Good);
        assert_eq!(LatencyTier::classify(0.99), LatencyTier::Good);
        assert_eq!(LatencyTier::classify(1.0), LatencyTier::Acceptable);
        assert_eq!(LatencyTier::classify(1.99), LatencyTier::Acceptable);
        assert_eq!(LatencyTier::classify(2.0), LatencyTier::Poor);
    }

    #[test]
    fn test_accuracy_tier_thresholds() {
        assert_eq!(AccuracyTier::classify(0.71), AccuracyTier::Excellent);
        assert_eq!(AccuracyTier::classify(0.7), AccuracyTier::Good);
        assert_eq!(AccuracyTier::classify(0.51), AccuracyTier::Good);
        assert_eq!(AccuracyTier::classify(0.5), AccuracyTier::Acceptable);
        assert_eq!(AccuracyTier::classify(0.31), AccuracyTier::Acceptable);
        assert_eq!(AccuracyTier::classify(0.3), AccuracyTier::Poor);
    }

    #[test]
    fn test_verdict_rules_in_order() {
        assert_eq!(Verdict::decide(1.0, 0.6), Verdict::Go);
        assert_eq!(Verdict::decide(2.5, 0.6), Verdict::ConditionalGo);
        assert_eq!(Verdict::decide(1.0, 0.4), Verdict::ConditionalGo);
        assert_eq!(Verdict::decide(3.5, 0.6), Verdict::NoGo);
        assert_eq!(Verdict::decide(1.0, 0.2), Verdict::NoGo);
    }

    #[tokio::test]
    async fn test_all_failures_yield_no_verdict() {
        let config = BenchConfig::default();
        let backend = MockTagBackend::new();
        backend.add_replies((0..12).map(|_| {
            MockReply::error(BackendError::NetworkError {
                message: "connection refused".to_string(),
            })
        }));

        let outcome = run_validation(&config, &backend).await;

        assert_eq!(outcome.report.summary.successful, 0);
        assert_eq!(outcome.report.summary.avg_response_time, 0.0);
        assert_eq!(outcome.report.summary.avg_accuracy, 0.0);
        assert!(outcome.report.results.is_empty());
        assert!(outcome.verdict.is_none());
        assert!(outcome.latency_tier.is_none());
        assert!(outcome.accuracy_tier.is_none());
    }

    #[tokio::test]
    async fn test_failures_are_skipped_not_fatal() {
        let config = BenchConfig::default();
        let backend = MockTagBackend::new();
        // The fourth entry times out; the other eleven answer "work,coding"
        for i in 0..12 {
            if i == 3 {
                backend.add_reply(MockReply::error(BackendError::TimeoutError {
                    seconds: 10,
                }));
            } else {
                backend.add_reply(MockReply::text("work,coding"));
            }
        }

        let outcome = run_validation(&config, &backend).await;

        assert_eq!(outcome.report.summary.total_samples, 12);
        assert_eq!(outcome.report.summary.successful, 11);
        assert_eq!(outcome.report.results.len(), 11);
        // The failed entry's task never appears in the records
        assert!(outcome
            .report
            .results
            .iter()
            .all(|r| r.entry.task != "코딩 - 사용자 인증 API 구현"));
    }

    #[tokio::test]
    async fn test_missing_expectation_scores_zero() {
        let mut config = BenchConfig::default();
        config.samples = vec![crate::samples::LogEntry::new("09:00:00", "unlabeled task")];
        let backend = MockTagBackend::echoing("work,coding", 1);

        let outcome = run_validation(&config, &backend).await;

        assert_eq!(outcome.report.summary.successful, 1);
        assert_eq!(outcome.report.results[0].accuracy, 0.0);
        assert!(outcome.report.results[0].expected.is_empty());
    }

    #[tokio::test]
    async fn test_token_counts_accumulate() {
        let mut config = BenchConfig::default();
        config.samples.truncate(2);
        let backend = MockTagBackend::new();
        backend.add_reply(MockReply::with_tokens("work,coding", 7));
        backend.add_reply(MockReply::with_tokens("work,coding", 5));

        let outcome = run_validation(&config, &backend).await;

        assert_eq!(outcome.report.summary.total_tokens, 12);
    }
}
