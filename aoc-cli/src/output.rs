//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Printed in place of an answer for a part that failed
pub const FAILED_ANSWER: &str = "0";

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    ///
    /// A failed part still prints [`FAILED_ANSWER`] on stdout so every
    /// selected part produces one line; the error itself goes to stderr.
    pub fn print_result(&self, result: &SolverResult) {
        if let Err(e) = &result.answer {
            eprintln!(
                "Error: {}/{:02} Part {}: {}",
                result.year, result.day, result.part, e
            );
        }
        if self.quiet {
            println!("{}", answer_text(result));
        } else {
            println!("{}", format_full(result));
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;

        let total_parse_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .filter_map(|r| r.parse_duration)
            .sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} solved, {} failed", successes, failures);
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn answer_text(result: &SolverResult) -> &str {
    result.answer.as_deref().unwrap_or(FAILED_ANSWER)
}

/// `YYYY/DD Part P: answer (parse: .., solve: ..)`
fn format_full(result: &SolverResult) -> String {
    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    if result.answer.is_err() {
        return format!("{}: {}", prefix, FAILED_ANSWER);
    }

    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!(
        "{}: {} ({}solve: {})",
        prefix,
        answer_text(result),
        parse_timing,
        format_duration(result.solve_duration)
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecutorError;

    fn result(answer: Result<String, ExecutorError>) -> SolverResult {
        SolverResult {
            year: 2020,
            day: 5,
            part: 2,
            answer,
            parse_duration: Some(TimeDelta::microseconds(12)),
            solve_duration: TimeDelta::microseconds(2500),
        }
    }

    #[test]
    fn test_format_full() {
        assert_eq!(
            format_full(&result(Ok("711".to_string()))),
            "2020/05 Part 2: 711 (parse: 12µs, solve: 2.50ms)"
        );
    }

    #[test]
    fn test_failed_part_prints_zero() {
        let failed = result(Err(ExecutorError::Unavailable {
            year: 2020,
            day: 5,
            message: "no such file".to_string(),
        }));
        assert_eq!(answer_text(&failed), "0");
        assert_eq!(format_full(&failed), "2020/05 Part 2: 0");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2250)), "2.25s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }
}
