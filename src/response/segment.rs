//! Splitting a raw backend answer into narrative text and an embedded SQL block.
//!
//! The backend returns one opaque blob that may carry a fenced code block:
//!
//! ````text
//! Here is the data.
//! ```sql
//! SELECT * FROM t
//! ```
//! ````
//!
//! Everything before the first fence is narrative, everything between the
//! first and second fence is SQL. Text after the closing fence is dropped.

use once_cell::sync::Lazy;
use regex::Regex;

/// Code fence, with an optional `sql` language tag on the opening marker.
static FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:sql\b)?").expect("Invalid fence regex pattern"));

/// The two parts of a raw answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segments {
    /// Trimmed narrative text (may be empty)
    pub narrative: String,
    /// Trimmed SQL text, present only for a closed, non-empty fence.
    /// A closed fence with nothing but whitespace inside counts as no SQL.
    pub sql: Option<String>,
}

/// Split `raw` into narrative and SQL on the first two fence markers.
///
/// With fewer than two markers there is no SQL. A lone opening fence keeps the
/// text that follows it as narrative so nothing the backend sent is lost.
pub fn segment_response(raw: &str) -> Segments {
    let mut fences = FENCE_REGEX.find_iter(raw);

    let Some(open) = fences.next() else {
        return Segments {
            narrative: raw.trim().to_string(),
            sql: None,
        };
    };

    let before = raw[..open.start()].trim();

    match fences.next() {
        Some(close) => {
            let sql = raw[open.end()..close.start()].trim();
            Segments {
                narrative: before.to_string(),
                sql: (!sql.is_empty()).then(|| sql.to_string()),
            }
        }
        None => {
            let rest = raw[open.end()..].trim();
            let narrative = [before, rest]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            Segments {
                narrative,
                sql: None,
            }
        }
    }
}
