//! Structuring narrative text into heading and paragraph blocks.
//!
//! Numbered items (`1.`, `2.`, ...) become headings and start a new block even
//! when the backend ran them together on one line.

use once_cell::sync::Lazy;
use regex::Regex;

/// Heading test on a trimmed fragment. Decimals only stop a split; a line
/// that starts with `1.5` still reads as a heading.
static HEADING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("Invalid heading regex pattern"));

/// Kind of a narrative block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Numbered item such as "1. Revenue by region"
    Heading,
    /// Any other text fragment
    Paragraph,
}

/// One classified unit of the narrative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrativeBlock {
    pub kind: BlockKind,
    pub text: String,
}

impl NarrativeBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Heading,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: BlockKind::Paragraph,
            text: text.into(),
        }
    }

    /// Classify a single fragment. Returns `None` for blank fragments.
    pub fn classify(fragment: &str) -> Option<Self> {
        let text = fragment.trim();
        if text.is_empty() {
            None
        } else if HEADING_REGEX.is_match(text) {
            Some(Self::heading(text))
        } else {
            Some(Self::paragraph(text))
        }
    }

    pub fn is_heading(&self) -> bool {
        self.kind == BlockKind::Heading
    }
}

/// Split narrative text into ordered, classified blocks.
///
/// Splits on line breaks and before every ordinal, trims each fragment and
/// drops empty ones. Empty input yields no blocks.
pub fn classify_narrative(narrative: &str) -> Vec<NarrativeBlock> {
    narrative
        .lines()
        .flat_map(split_at_ordinals)
        .filter_map(NarrativeBlock::classify)
        .collect()
}

/// Break one line before each ordinal that is not at its very start.
fn split_at_ordinals(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;

    for at in 1..bytes.len() {
        if is_ordinal_start(bytes, at) {
            pieces.push(&line[start..at]);
            start = at;
        }
    }
    pieces.push(&line[start..]);
    pieces
}

/// An ordinal is a digit run followed by a dot, where the run is not part of a
/// longer number and the dot is not a decimal point.
fn is_ordinal_start(bytes: &[u8], at: usize) -> bool {
    if !bytes[at].is_ascii_digit() || (at > 0 && bytes[at - 1].is_ascii_digit()) {
        return false;
    }
    let digits_end = at + bytes[at..].iter().take_while(|b| b.is_ascii_digit()).count();
    bytes.get(digits_end) == Some(&b'.')
        && !bytes
            .get(digits_end + 1)
            .is_some_and(|next| next.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_then_numbered_steps() {
        let blocks = classify_narrative("Explanation text\n1. Step one\n2. Step two");
        assert_eq!(
            blocks,
            vec![
                NarrativeBlock::paragraph("Explanation text"),
                NarrativeBlock::heading("1. Step one"),
                NarrativeBlock::heading("2. Step two"),
            ]
        );
    }

    #[test]
    fn test_ordinals_split_within_a_line() {
        let blocks = classify_narrative("Top regions: 1. North 2. South");
        assert_eq!(
            blocks,
            vec![
                NarrativeBlock::paragraph("Top regions:"),
                NarrativeBlock::heading("1. North"),
                NarrativeBlock::heading("2. South"),
            ]
        );
    }

    #[test]
    fn test_multi_digit_ordinal_is_not_split() {
        let blocks = classify_narrative("12. Twelfth item");
        assert_eq!(blocks, vec![NarrativeBlock::heading("12. Twelfth item")]);
    }

    #[test]
    fn test_decimal_numbers_do_not_split() {
        let blocks = classify_narrative("Revenue grew 3.5% to 1200.75 dollars");
        assert_eq!(
            blocks,
            vec![NarrativeBlock::paragraph("Revenue grew 3.5% to 1200.75 dollars")]
        );
    }

    #[test]
    fn test_leading_decimal_reads_as_heading() {
        let blocks = classify_narrative("Summary\n1.5 million in sales came from the north");
        assert_eq!(
            blocks,
            vec![
                NarrativeBlock::paragraph("Summary"),
                NarrativeBlock::heading("1.5 million in sales came from the north"),
            ]
        );
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let blocks = classify_narrative("First\n\n   \nSecond\r\n");
        assert_eq!(
            blocks,
            vec![
                NarrativeBlock::paragraph("First"),
                NarrativeBlock::paragraph("Second"),
            ]
        );
    }

    #[test]
    fn test_indented_heading_is_trimmed() {
        let blocks = classify_narrative("   3. Indented");
        assert_eq!(blocks, vec![NarrativeBlock::heading("3. Indented")]);
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert!(classify_narrative("").is_empty());
        assert!(classify_narrative("\n\n").is_empty());
    }

    #[test]
    fn test_reclassifying_block_text_is_stable() {
        let blocks = classify_narrative("Summary 1. North leads 2. South trails\nDone.");
        for block in &blocks {
            assert_eq!(classify_narrative(&block.text), vec![block.clone()]);
        }
    }

    #[test]
    fn test_classify_blank_fragment() {
        assert_eq!(NarrativeBlock::classify("   "), None);
        assert!(NarrativeBlock::classify("4. Four").unwrap().is_heading());
        assert!(!NarrativeBlock::classify("Four.").unwrap().is_heading());
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        let blocks = classify_narrative("Umsatz für Köln 1. Quartal");
        assert_eq!(
            blocks,
            vec![
                NarrativeBlock::paragraph("Umsatz für Köln"),
                NarrativeBlock::heading("1. Quartal"),
            ]
        );
    }
}
