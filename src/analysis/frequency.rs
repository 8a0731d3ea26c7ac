//! Letter frequency counting

use crate::cipher::letter_index;
use serde::Serialize;

/// Most common English letters, most frequent first
pub const ENGLISH_ORDER: &str = "E T A O I N S H R D L C U";

/// Bar characters drawn per percentage point
pub const BAR_SCALE: f64 = 0.5;

/// Relative frequency of A-Z in English prose
const ENGLISH_FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

/// Occurrences of a single letter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LetterCount {
    /// Uppercase letter
    pub letter: char,
    pub count: usize,
    /// Share of all letters, 0-100
    pub percentage: f64,
    /// Length of the `#` bar, `floor(percentage * 0.5)`
    pub bar_length: usize,
}

/// Result of a frequency analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyReport {
    /// Number of letters seen; other characters are not counted
    pub total_letters: usize,
    /// Letters seen at least once, by count descending then alphabetically
    pub entries: Vec<LetterCount>,
    pub english_order: &'static str,
}

impl FrequencyReport {
    pub fn is_empty(&self) -> bool {
        self.total_letters == 0
    }

    pub fn count_of(&self, letter: char) -> usize {
        let letter = letter.to_ascii_uppercase();
        self.entries
            .iter()
            .find(|e| e.letter == letter)
            .map_or(0, |e| e.count)
    }
}

/// Case-folded count of each letter A-Z
fn letter_counts(text: &str) -> [usize; 26] {
    let mut counts = [0usize; 26];
    for index in text.chars().filter_map(letter_index) {
        counts[index as usize] += 1;
    }
    counts
}

/// Count letters in `text` and rank them.
///
/// Text with no letters yields an empty report instead of dividing by zero.
pub fn analyze(text: &str) -> FrequencyReport {
    let counts = letter_counts(text);
    let total_letters: usize = counts.iter().sum();

    let mut entries: Vec<LetterCount> = counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(index, &count)| {
            let percentage = count as f64 / total_letters as f64 * 100.0;
            LetterCount {
                letter: (b'A' + index as u8) as char,
                count,
                percentage,
                bar_length: (percentage * BAR_SCALE).floor() as usize,
            }
        })
        .collect();
    // Stable sort over alphabetical input: ties stay alphabetical
    entries.sort_by(|a, b| b.count.cmp(&a.count));

    log::debug!(
        "frequency analysis: {} letters, {} distinct",
        total_letters,
        entries.len()
    );

    FrequencyReport {
        total_letters,
        entries,
        english_order: ENGLISH_ORDER,
    }
}

/// Chi-squared distance between the letter distribution of `text` and English.
///
/// Lower is more English-like. Text without letters scores infinity.
pub fn chi_squared(text: &str) -> f64 {
    let counts = letter_counts(text);
    let total: usize = counts.iter().sum();
    if total == 0 {
        return f64::INFINITY;
    }
    counts
        .iter()
        .zip(ENGLISH_FREQUENCIES.iter())
        .map(|(&observed, &frequency)| {
            let expected = frequency * total as f64;
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}
