//! Console reporter with colored output

use crate::analysis::FrequencyReport;
use crate::{BruteForceReport, TransformOutput};
use colored::{ColoredString, Colorize};

const TABLE_RULE_WIDTH: usize = 30;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Set colors on or off
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// "Encrypted text: ..." / "Decrypted text: ..."
    pub fn render_transform(&self, output: &TransformOutput) -> String {
        let label = match output.direction {
            crate::Direction::Encrypt => "Encrypted text:",
            crate::Direction::Decrypt => "Decrypted text:",
        };
        format!("{} {}\n", self.paint(label.bold()), output.text)
    }

    /// Frequency table with a `#` bar per letter
    pub fn render_frequency(&self, report: &FrequencyReport) -> String {
        let mut lines = vec![
            self.paint("=== Frequency Analysis ===".bold()),
            format!("Total Letters: {}", report.total_letters),
            String::new(),
        ];

        if report.is_empty() {
            lines.push(self.paint("No letters to analyze.".yellow()));
        } else {
            lines.push("Letter | Count | Percentage | Bar".to_string());
            lines.push(format!("-------|-------|------------|{}", "-".repeat(TABLE_RULE_WIDTH)));
            lines.extend(report.entries.iter().map(|entry| {
                format!(
                    "   {}   |  {:>4} |   {:>5.2}%  | {}",
                    entry.letter,
                    entry.count,
                    entry.percentage,
                    self.paint("#".repeat(entry.bar_length).cyan())
                )
            }));
        }

        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            self.paint("Most common English letters:".dimmed()),
            report.english_order
        ));
        join_lines(&lines)
    }

    /// One line per shift, marking the most English-like candidate
    pub fn render_brute_force(&self, report: &BruteForceReport) -> String {
        let mut lines = vec![self.paint("=== Caesar Cipher Brute Force Attack ===".bold())];
        lines.extend(report.candidates.iter().map(|candidate| {
            let line = format!("Shift {:>2}: {}", candidate.shift, candidate.plaintext);
            if report.most_likely == Some(candidate.shift) {
                format!(
                    "{} {}",
                    self.paint(line.green().bold()),
                    self.paint("<- most likely".dimmed())
                )
            } else {
                line
            }
        }));
        join_lines(&lines)
    }

    /// Print the transformed text to stdout
    pub fn report_transform(&self, output: &TransformOutput) {
        print!("{}", self.render_transform(output));
    }

    /// Print the frequency table to stdout
    pub fn report_frequency(&self, report: &FrequencyReport) {
        print!("{}", self.render_frequency(report));
    }

    /// Print the brute-force listing to stdout
    pub fn report_brute_force(&self, report: &BruteForceReport) {
        print!("{}", self.render_brute_force(report));
    }

    fn paint(&self, styled: ColoredString) -> String {
        if self.use_colors {
            styled.to_string()
        } else {
            styled.clear().to_string()
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Newline-terminate every line
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
