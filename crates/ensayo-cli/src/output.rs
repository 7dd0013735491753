//! Terminal output and report formatting

use console::{style, Style, Term};
use ensayo::{CoverageDetail, CoverageSummary, ThresholdResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Status reporter for command output
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Start a spinner with a message; call `finish_*` on the result
    #[must_use]
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if self.quiet {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("✓").green().bold().to_string()
        } else {
            "OK".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a failure message. Always printed, even in quiet mode.
    pub fn failure(&self, message: &str) {
        let prefix = if self.use_color {
            style("✗").red().bold().to_string()
        } else {
            "FAIL".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("⚠").yellow().bold().to_string()
        } else {
            "WARN".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let prefix = if self.use_color {
            style("ℹ").blue().bold().to_string()
        } else {
            "INFO".to_string()
        };
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.quiet {
            return;
        }
        let styled = if self.use_color {
            style(title).bold().underlined().to_string()
        } else {
            format!("=== {title} ===")
        };
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&styled);
    }
}

/// Format a coverage summary as a per-metric table with bars.
#[must_use]
pub fn format_coverage(summary: &CoverageSummary, use_color: bool) -> String {
    let mut lines = Vec::with_capacity(5);
    lines.push(
        if use_color {
            style("Coverage:").bold().to_string()
        } else {
            "Coverage:".to_string()
        },
    );
    for (name, detail) in summary.metrics() {
        lines.push(format_coverage_detail(name, detail, use_color));
    }
    lines.join("\n")
}

fn format_coverage_detail(label: &str, detail: CoverageDetail, use_color: bool) -> String {
    let pct = format!("{:6.2}%", detail.pct);
    let counts = format!("{}/{}", detail.covered, detail.total);
    let bar = coverage_bar(detail.pct, 20, use_color);
    if use_color {
        let color = coverage_style(detail.pct);
        format!(
            "  {:<10} {} {bar} {}",
            label,
            color.apply_to(pct),
            color.apply_to(counts)
        )
    } else {
        format!("  {label:<10} {pct} {bar} {counts}")
    }
}

fn coverage_style(pct: f64) -> Style {
    if pct >= 80.0 {
        Style::new().green()
    } else if pct >= 60.0 {
        Style::new().yellow()
    } else {
        Style::new().red()
    }
}

fn coverage_bar(pct: f64, width: usize, use_color: bool) -> String {
    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    let empty = width - filled;
    if use_color {
        format!(
            "{}{}",
            coverage_style(pct).apply_to("█".repeat(filled)),
            style("░".repeat(empty)).dim()
        )
    } else {
        format!("{}{}", "#".repeat(filled), "-".repeat(empty))
    }
}

/// Format per-metric threshold failures, one line each.
#[must_use]
pub fn format_threshold_failures(result: &ThresholdResult) -> String {
    result
        .failures
        .iter()
        .map(|f| {
            format!(
                "  - {}: {:.2}% < {}%",
                f.metric, f.actual, f.expected
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a millisecond duration for display (`950ms`, `2.50s`, `1m 5s`).
#[must_use]
pub fn format_duration(ms: u64) -> String {
    if ms < 1000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let minutes = ms / 60_000;
        let seconds = (ms % 60_000) / 1000;
        format!("{minutes}m {seconds}s")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use ensayo::ThresholdFailure;

    fn detail(pct: f64) -> CoverageDetail {
        CoverageDetail {
            total: 100,
            covered: pct.round() as u64,
            skipped: 0,
            pct,
        }
    }

    mod reporter_tests {
        use super::*;

        #[test]
        fn test_messages_do_not_panic() {
            let reporter = Reporter::new(false, false);
            reporter.success("passed");
            reporter.failure("failed");
            reporter.warning("careful");
            reporter.info("note");
            reporter.header("Section");
        }

        #[test]
        fn test_quiet_spinner_is_hidden() {
            let reporter = Reporter::new(false, true);
            let pb = reporter.spinner("working");
            assert!(pb.is_hidden());
            pb.finish_and_clear();
        }
    }

    mod format_tests {
        use super::*;

        #[test]
        fn test_format_duration() {
            assert_eq!(format_duration(950), "950ms");
            assert_eq!(format_duration(2500), "2.50s");
            assert_eq!(format_duration(65_000), "1m 5s");
        }

        #[test]
        fn test_format_coverage_plain() {
            let summary = CoverageSummary {
                lines: detail(90.0),
                statements: detail(90.0),
                functions: detail(75.0),
                branches: detail(80.0),
            };
            let out = format_coverage(&summary, false);
            assert!(out.contains("Coverage:"));
            assert!(out.contains("statements"));
            assert!(out.contains("75.00%"));
            assert!(out.contains("90/100"));
        }

        #[test]
        fn test_coverage_bar_extremes() {
            assert_eq!(coverage_bar(100.0, 10, false), "##########");
            assert_eq!(coverage_bar(0.0, 10, false), "----------");
        }

        #[test]
        fn test_format_threshold_failures() {
            let result = ThresholdResult {
                passed: false,
                failures: vec![ThresholdFailure {
                    metric: "branches".to_string(),
                    actual: 72.5,
                    expected: 80.0,
                }],
            };
            let out = format_threshold_failures(&result);
            assert_eq!(out, "  - branches: 72.50% < 80%");
        }
    }
}
