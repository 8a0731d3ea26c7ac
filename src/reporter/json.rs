//! JSON reporter for machine-readable output

use crate::analysis::FrequencyReport;
use crate::{BruteForceReport, TransformOutput};
use serde::Serialize;

/// Reporter for JSON output
pub struct JsonReporter {
    /// Whether to pretty-print JSON
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Enable pretty-printing
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn report_transform(&self, output: &TransformOutput) -> String {
        self.to_json(output)
    }

    pub fn report_frequency(&self, report: &FrequencyReport) -> String {
        self.to_json(report)
    }

    pub fn report_brute_force(&self, report: &BruteForceReport) -> String {
        self.to_json(report)
    }

    fn to_json<T: Serialize>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
        }
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::{CipherKind, Direction};

    #[test]
    fn transform_fields_are_camel_case() {
        let output = TransformOutput {
            cipher: CipherKind::Vigenere,
            direction: Direction::Encrypt,
            text: "LXFOPVEFRNHR".to_string(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&JsonReporter::new().report_transform(&output)).unwrap();
        assert_eq!(json["cipher"], "vigenere");
        assert_eq!(json["direction"], "encrypt");
        assert_eq!(json["text"], "LXFOPVEFRNHR");
    }

    #[test]
    fn frequency_report_json() {
        let json: serde_json::Value = serde_json::from_str(
            &JsonReporter::new().pretty().report_frequency(&analyze("AAAB")),
        )
        .unwrap();
        assert_eq!(json["totalLetters"], 4);
        assert_eq!(json["entries"][0]["letter"], "A");
        assert_eq!(json["entries"][0]["count"], 3);
        assert_eq!(json["entries"][0]["barLength"], 37);
        assert_eq!(json["englishOrder"], "E T A O I N S H R D L C U");
    }

    #[test]
    fn brute_force_json_has_all_candidates() {
        let report = BruteForceReport::new("KHOOR");
        let json: serde_json::Value =
            serde_json::from_str(&JsonReporter::new().report_brute_force(&report)).unwrap();
        assert_eq!(json["candidates"].as_array().map(Vec::len), Some(25));
        assert_eq!(json["candidates"][2]["shift"], 3);
        assert_eq!(json["candidates"][2]["plaintext"], "HELLO");
    }
}
