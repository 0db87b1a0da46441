//! Links Notation (Lino) Complexity Report
//!
//! Records one decrease-key measurement per graph size and renders the
//! collection in Links Notation, a simple indentation-based format of named
//! links with values:
//!
//! ```text
//! complexity_report:
//!   timestamp '2026-01-01T00:00:00Z'
//!   source 0
//!
//! results:
//!   size_16:
//!     edges 120
//!     decrease_keys 37
//!     time_ms 0.015
//! ```
//!
//! The same data can be read back with [`parse_lino_report`] and turned
//! into a Markdown table (see the `lino2md` binary).

use std::fmt::Write;
use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

use crate::error::{Error, Result};

/// Decrease-key measurement for one graph size.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepResult {
    /// Number of vertices |V|
    pub vertices: usize,
    /// Number of undirected edges |E|
    pub edges: usize,
    /// Decrease-key operations performed by the run
    pub decrease_keys: usize,
    /// Wall time of the shortest-path run in milliseconds
    pub time_ms: f64,
}

impl SweepResult {
    /// Decrease-keys per vertex.
    pub fn per_vertex(&self) -> f64 {
        ratio(self.decrease_keys, self.vertices as f64)
    }

    /// Decrease-keys per `|V| log2 |V|`.
    pub fn per_n_log_n(&self) -> f64 {
        let n = self.vertices as f64;
        if self.vertices < 2 {
            return 0.0;
        }
        ratio(self.decrease_keys, n * n.log2())
    }

    /// Decrease-keys per edge.
    pub fn per_edge(&self) -> f64 {
        ratio(self.decrease_keys, self.edges as f64)
    }
}

fn ratio(count: usize, denominator: f64) -> f64 {
    if denominator > 0.0 {
        count as f64 / denominator
    } else {
        0.0
    }
}

/// A complete decrease-key sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexityReport {
    /// RFC 3339 timestamp of the run
    pub timestamp: String,
    pub description: String,
    /// Source vertex used for every run
    pub source: usize,
    /// RNG seed, if graph generation was seeded
    pub seed: Option<u64>,
    pub results: Vec<SweepResult>,
}

impl ComplexityReport {
    pub fn new(description: &str, source: usize, seed: Option<u64>) -> Self {
        ComplexityReport {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            description: description.to_string(),
            source,
            seed,
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: SweepResult) {
        self.results.push(result);
    }

    /// Results ordered by vertex count.
    fn sorted_results(&self) -> Vec<&SweepResult> {
        let mut results: Vec<&SweepResult> = self.results.iter().collect();
        results.sort_by_key(|r| r.vertices);
        results
    }

    /// Decrease-key growth between consecutive sizes:
    /// `(vertices, vertex ratio, decrease-key ratio)` for every size after the first.
    pub fn growth(&self) -> Vec<(usize, f64, f64)> {
        self.sorted_results()
            .windows(2)
            .map(|pair| {
                let (prev, next) = (pair[0], pair[1]);
                (
                    next.vertices,
                    ratio(next.vertices, prev.vertices as f64),
                    ratio(next.decrease_keys, prev.decrease_keys as f64),
                )
            })
            .collect()
    }

    /// Generate the report in Links Notation format
    pub fn to_lino(&self) -> String {
        let mut output = String::new();

        // infallible: fmt::Write for String never errors
        let _ = self.write_lino(&mut output);
        output
    }

    fn write_lino(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "complexity_report:")?;
        writeln!(output, "  timestamp '{}'", self.timestamp)?;
        writeln!(output, "  description '{}'", escape_lino_string(&self.description))?;
        writeln!(output, "  source {}", self.source)?;
        if let Some(seed) = self.seed {
            writeln!(output, "  seed {}", seed)?;
        }

        writeln!(output)?;
        writeln!(output, "results:")?;
        for result in self.sorted_results() {
            writeln!(output, "  size_{}:", result.vertices)?;
            writeln!(output, "    edges {}", result.edges)?;
            writeln!(output, "    decrease_keys {}", result.decrease_keys)?;
            writeln!(output, "    time_ms {:.3}", result.time_ms)?;
        }

        let growth = self.growth();
        if !growth.is_empty() {
            writeln!(output)?;
            writeln!(output, "growth:")?;
            for (vertices, vertex_ratio, decrease_key_ratio) in growth {
                writeln!(output, "  size_{}:", vertices)?;
                writeln!(output, "    vertex_ratio {:.2}", vertex_ratio)?;
                writeln!(output, "    decrease_key_ratio {:.2}", decrease_key_ratio)?;
            }
        }
        Ok(())
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_lino())?;
        Ok(())
    }

    /// Generate a markdown table from the report
    pub fn to_markdown_table(&self) -> String {
        let mut output = String::new();
        let _ = self.write_markdown(&mut output);
        output
    }

    fn write_markdown(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "# Dijkstra Decrease-Key Report")?;
        writeln!(output)?;
        writeln!(output, "**Timestamp:** {}", self.timestamp)?;
        writeln!(output, "**Description:** {}", self.description)?;
        writeln!(output, "**Source vertex:** {}", self.source)?;
        if let Some(seed) = self.seed {
            writeln!(output, "**Seed:** {}", seed)?;
        }
        writeln!(output)?;

        writeln!(output, "## Results")?;
        writeln!(output)?;
        writeln!(
            output,
            "| Vertices | Edges | Decrease-keys | per V | per V log V | per E | Time (ms) |"
        )?;
        writeln!(
            output,
            "|----------|-------|---------------|-------|-------------|-------|-----------|"
        )?;
        for result in self.sorted_results() {
            writeln!(
                output,
                "| {} | {} | {} | {:.3} | {:.3} | {:.4} | {:.3} |",
                format_size(result.vertices),
                result.edges,
                result.decrease_keys,
                result.per_vertex(),
                result.per_n_log_n(),
                result.per_edge(),
                result.time_ms
            )?;
        }
        writeln!(output)?;

        let growth = self.growth();
        if !growth.is_empty() {
            writeln!(output, "## Growth Between Sizes")?;
            writeln!(output)?;
            writeln!(output, "| Vertices | V ratio | Decrease-key ratio |")?;
            writeln!(output, "|----------|---------|--------------------|")?;
            for (vertices, vertex_ratio, decrease_key_ratio) in growth {
                writeln!(
                    output,
                    "| {} | {:.2}x | {:.2}x |",
                    format_size(vertices),
                    vertex_ratio,
                    decrease_key_ratio
                )?;
            }
            writeln!(output)?;
        }

        writeln!(output, "---")?;
        writeln!(output, "*Report generated by dijkstra-sorting*")?;
        Ok(())
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_markdown_table())?;
        Ok(())
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

/// Format a size as a human-readable string (e.g., "1K", "1M")
fn format_size(size: usize) -> String {
    if size >= 1 << 20 && size % (1 << 20) == 0 {
        format!("{}M", size >> 20)
    } else if size >= 1 << 10 && size % (1 << 10) == 0 {
        format!("{}K", size >> 10)
    } else {
        size.to_string()
    }
}

/// Parse a Links Notation complexity report.
///
/// Only the header and `results:` section are read; `growth:` is derived
/// data and is recomputed from the results.
pub fn parse_lino_report(content: &str) -> Result<ComplexityReport> {
    let mut report = ComplexityReport {
        timestamp: String::new(),
        description: String::new(),
        source: 0,
        seed: None,
        results: Vec::new(),
    };
    let mut current: Option<SweepResult> = None;
    let mut in_results_section = false;

    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Section headers sit at column zero
        if !line.starts_with(' ') && trimmed.ends_with(':') {
            if let Some(result) = current.take() {
                report.results.push(result);
            }
            in_results_section = trimmed == "results:";
            continue;
        }

        if !in_results_section {
            if let Some(ts) = extract_quoted_value(trimmed, "timestamp") {
                report.timestamp = ts;
            } else if let Some(desc) = extract_quoted_value(trimmed, "description") {
                report.description = desc;
            } else if let Some(value) = trimmed.strip_prefix("source ") {
                report.source = parse_number(value, number)?;
            } else if let Some(value) = trimmed.strip_prefix("seed ") {
                report.seed = Some(parse_number(value, number)?);
            }
            continue;
        }

        if let Some(size) = trimmed
            .strip_prefix("size_")
            .and_then(|rest| rest.strip_suffix(':'))
        {
            if let Some(result) = current.take() {
                report.results.push(result);
            }
            current = Some(SweepResult {
                vertices: parse_number(size, number)?,
                edges: 0,
                decrease_keys: 0,
                time_ms: 0.0,
            });
            continue;
        }

        let result = current.as_mut().ok_or_else(|| {
            Error::ReportParse(format!(
                "line {}: property outside of a size block",
                number + 1
            ))
        })?;
        if let Some(value) = trimmed.strip_prefix("edges ") {
            result.edges = parse_number(value, number)?;
        } else if let Some(value) = trimmed.strip_prefix("decrease_keys ") {
            result.decrease_keys = parse_number(value, number)?;
        } else if let Some(value) = trimmed.strip_prefix("time_ms ") {
            result.time_ms = parse_number(value, number)?;
        }
    }

    if let Some(result) = current {
        report.results.push(result);
    }

    if report.results.is_empty() {
        return Err(Error::ReportParse(
            "no results section with size blocks found".to_string(),
        ));
    }
    Ok(report)
}

fn parse_number<T: std::str::FromStr>(value: &str, line: usize) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::ReportParse(format!("line {}: invalid number '{}'", line + 1, value)))
}

fn extract_quoted_value(line: &str, prefix: &str) -> Option<String> {
    let quoted = line.strip_prefix(prefix)?.trim();
    if quoted.len() >= 2 && quoted.starts_with('\'') && quoted.ends_with('\'') {
        Some(quoted[1..quoted.len() - 1].replace("\\'", "'"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ComplexityReport {
        let mut report = ComplexityReport::new("Test sweep", 0, Some(7));
        report.add_result(SweepResult {
            vertices: 32,
            edges: 496,
            decrease_keys: 80,
            time_ms: 0.25,
        });
        report.add_result(SweepResult {
            vertices: 16,
            edges: 120,
            decrease_keys: 40,
            time_ms: 0.1,
        });
        report
    }

    #[test]
    fn test_report_to_lino() {
        let lino = sample_report().to_lino();
        assert!(lino.contains("complexity_report:"));
        assert!(lino.contains("  seed 7"));
        assert!(lino.contains("  size_16:\n    edges 120\n    decrease_keys 40\n    time_ms 0.100"));
        // sizes are emitted in ascending order
        assert!(lino.find("size_16").unwrap() < lino.find("size_32").unwrap());
        assert!(lino.contains("decrease_key_ratio 2.00"));
    }

    #[test]
    fn test_growth() {
        let growth = sample_report().growth();
        assert_eq!(growth, vec![(32, 2.0, 2.0)]);
    }

    #[test]
    fn test_ratios() {
        let result = SweepResult {
            vertices: 16,
            edges: 120,
            decrease_keys: 64,
            time_ms: 0.0,
        };
        assert_eq!(result.per_vertex(), 4.0);
        assert_eq!(result.per_n_log_n(), 1.0);
        assert!((result.per_edge() - 64.0 / 120.0).abs() < 1e-12);

        let tiny = SweepResult {
            vertices: 1,
            edges: 0,
            decrease_keys: 0,
            time_ms: 0.0,
        };
        assert_eq!(tiny.per_n_log_n(), 0.0);
        assert_eq!(tiny.per_edge(), 0.0);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500");
        assert_eq!(format_size(1000), "1000");
        assert_eq!(format_size(1024), "1K");
        assert_eq!(format_size(1_048_576), "1M");
    }

    #[test]
    fn test_escape_lino_string() {
        assert_eq!(escape_lino_string("hello"), "hello");
        assert_eq!(escape_lino_string("it's"), "it\\'s");
    }

    #[test]
    fn test_parse_lino_reads_back_results() {
        let report = sample_report();
        let parsed = parse_lino_report(&report.to_lino()).unwrap();

        assert_eq!(parsed.timestamp, report.timestamp);
        assert_eq!(parsed.description, "Test sweep");
        assert_eq!(parsed.seed, Some(7));
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].vertices, 16);
        assert_eq!(parsed.results[1].decrease_keys, 80);
    }

    #[test]
    fn test_parse_quoted_description() {
        let report = ComplexityReport::new("it's a sweep", 3, None);
        let mut lino = report.to_lino();
        lino.push_str("results:\n  size_4:\n    decrease_keys 3\n");
        let parsed = parse_lino_report(&lino).unwrap();
        assert_eq!(parsed.description, "it's a sweep");
        assert_eq!(parsed.source, 3);
        assert_eq!(parsed.seed, None);
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(matches!(parse_lino_report(""), Err(Error::ReportParse(_))));
        assert!(matches!(
            parse_lino_report("results:\n  size_x:\n"),
            Err(Error::ReportParse(_))
        ));
        assert!(matches!(
            parse_lino_report("results:\n    edges 3\n"),
            Err(Error::ReportParse(_))
        ));
    }

    #[test]
    fn test_markdown_table() {
        let markdown = sample_report().to_markdown_table();
        assert!(markdown.starts_with("# Dijkstra Decrease-Key Report"));
        assert!(markdown.contains("| 16 | 120 | 40 | 2.500 | 0.625 | 0.3333 | 0.100 |"));
        assert!(markdown.contains("| 32 | 2.00x | 2.00x |"));
    }
}
