//! Output formatting for solver results
//!
//! Answers go to stdout and failures to stderr, one line per part. Lines
//! are built by plain functions so their layout can be tested without
//! capturing the terminal.

use crate::executor::SolverResult;
use chrono::TimeDelta;
use std::time::Instant;

/// Prints results as they are released and a summary at the end
pub struct OutputFormatter {
    quiet: bool,
    start_time: Instant,
}

impl OutputFormatter {
    /// The wall-clock used by the summary starts here.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: Instant::now(),
        }
    }

    pub fn print_result(&self, result: &SolverResult) {
        match result_line(result, self.quiet) {
            Ok(line) => println!("{}", line),
            Err(line) => eprintln!("{}", line),
        }
    }

    /// Print the summary block; quiet mode prints nothing.
    ///
    /// # Arguments
    /// * `results` - Every result printed so far, failures included
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let summary = Summary::of(results);
        println!();
        for line in summary.lines(self.start_time.elapsed()) {
            println!("{}", line);
        }
    }
}

/// The line to print for `result`.
///
/// # Returns
/// * `Ok(line)` - An answer, meant for stdout
/// * `Err(line)` - A failure, meant for stderr
fn result_line(result: &SolverResult, quiet: bool) -> Result<String, String> {
    let answer = match (&result.answer, quiet) {
        (Ok(answer), true) => return Ok(answer.clone()),
        (Err(e), true) => return Err(format!("Error: {}", e)),
        (answer, false) => answer,
    };

    let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);
    match answer {
        Ok(answer) => {
            let parse_timing = result
                .parse_duration
                .map(|d| format!("parse: {}, ", format_duration(d)))
                .unwrap_or_default();
            Ok(format!(
                "{}: {} ({}solve: {})",
                prefix,
                answer,
                parse_timing,
                format_duration(result.solve_duration)
            ))
        }
        Err(e) => Err(format!("{}: Error - {}", prefix, e)),
    }
}

/// Totals over the successful results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Summary {
    solved: usize,
    failed: usize,
    parse_time: TimeDelta,
    solve_time: TimeDelta,
}

impl Summary {
    fn of(results: &[SolverResult]) -> Self {
        let solved: Vec<_> = results.iter().filter(|r| r.answer.is_ok()).collect();
        Self {
            solved: solved.len(),
            failed: results.len() - solved.len(),
            parse_time: solved.iter().filter_map(|r| r.parse_duration).sum(),
            solve_time: solved.iter().map(|r| r.solve_duration).sum(),
        }
    }

    /// Speedup compares summed compute time with `elapsed` wall-clock time,
    /// and is left out when nothing measurable elapsed.
    fn lines(&self, elapsed: std::time::Duration) -> Vec<String> {
        let mut lines = vec![
            "--- Summary ---".to_string(),
            format!("Solvers: {} solved, {} failed", self.solved, self.failed),
            format!("Total parse time: {}", format_duration(self.parse_time)),
            format!("Total solve time: {}", format_duration(self.solve_time)),
            format!("Elapsed wall-clock time: {}", format_std_duration(elapsed)),
        ];
        if !elapsed.is_zero() {
            let compute = self.parse_time + self.solve_time;
            let compute_secs = compute.num_microseconds().unwrap_or(0) as f64 / 1_000_000.0;
            lines.push(format!(
                "Speedup factor: {:.2}x",
                compute_secs / elapsed.as_secs_f64()
            ));
        }
        lines
    }
}

/// µs below a millisecond, ms below a second, seconds above
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

fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}
