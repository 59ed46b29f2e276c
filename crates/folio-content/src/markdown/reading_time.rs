//! Word count and reading-time estimation.
//!
//! Text is cleaned before counting so markup does not inflate the total.
//! HTML tags, fenced code blocks and inline code are deleted outright, so
//! `foo<br>bar` counts as one word. Links are replaced by their display
//! text, and the remaining markdown punctuation (`#*_~` and backticks) is
//! stripped.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

const SLOW_WORDS_PER_MINUTE: u32 = 150;
const FAST_WORDS_PER_MINUTE: u32 = 250;

static HTML_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));
static FENCED_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").expect("Invalid fenced code regex"));
static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]*`").expect("Invalid inline code regex"));
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("Invalid link regex"));
static MARKDOWN_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*_~`]").expect("Invalid markdown punctuation regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Estimated reading time for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Whole minutes, never less than 1.
    pub minutes: u32,
    /// Words counted after cleaning.
    pub words: usize,
}

impl ReadingTime {
    /// Human-readable label, e.g. `"3 min read"`.
    pub fn label(&self) -> String {
        format!("{} min read", self.minutes)
    }
}

impl fmt::Display for ReadingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Reading time at three reading speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTimeEstimates {
    pub slow: ReadingTime,
    pub average: ReadingTime,
    pub fast: ReadingTime,
}

/// Strip markup from text so only readable words remain.
pub fn clean_text(text: &str) -> String {
    let text = HTML_TAG_RE.replace_all(text, "");
    let text = FENCED_CODE_RE.replace_all(&text, "");
    let text = INLINE_CODE_RE.replace_all(&text, "");
    let text = LINK_RE.replace_all(&text, "$1");
    let text = MARKDOWN_PUNCT_RE.replace_all(&text, "");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Count the words of `text` after cleaning.
pub fn count_words(text: &str) -> usize {
    clean_text(text).split_whitespace().count()
}

/// Estimate reading time for `text`.
///
/// `words_per_minute` of 0 falls back to [`DEFAULT_WORDS_PER_MINUTE`].
///
/// ```rust
/// use folio_content::markdown::estimate_reading_time;
///
/// let text = "word ".repeat(400);
/// let estimate = estimate_reading_time(&text, 200);
/// assert_eq!(estimate.words, 400);
/// assert_eq!(estimate.minutes, 2);
/// assert_eq!(estimate_reading_time("", 200).minutes, 1);
/// ```
pub fn estimate_reading_time(text: &str, words_per_minute: u32) -> ReadingTime {
    minutes_for(count_words(text), words_per_minute)
}

/// Estimate reading time at slow, average and fast reading speeds.
pub fn reading_time_estimates(text: &str) -> ReadingTimeEstimates {
    let words = count_words(text);
    ReadingTimeEstimates {
        slow: minutes_for(words, SLOW_WORDS_PER_MINUTE),
        average: minutes_for(words, DEFAULT_WORDS_PER_MINUTE),
        fast: minutes_for(words, FAST_WORDS_PER_MINUTE),
    }
}

fn minutes_for(words: usize, words_per_minute: u32) -> ReadingTime {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    } as usize;
    let minutes = words.div_ceil(wpm).max(1);
    ReadingTime {
        minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
        words,
    }
}
