//! Markdown parsing utilities.
//!
//! - [`frontmatter`]: YAML frontmatter extraction
//! - [`headings`]: Line-oriented heading outline extraction
//! - [`parser`]: First-paragraph extraction (pulldown-cmark)
//! - [`reading_time`]: Word count and reading-time estimation
//!
//! Everything here is a pure function of the input text.

pub mod frontmatter;
pub mod headings;
pub mod parser;
pub mod reading_time;

pub use frontmatter::{Frontmatter, extract_frontmatter, strip_frontmatter};
pub use headings::{extract_headings, find_heading_by_text, Heading};
pub use parser::extract_first_paragraph;
pub use reading_time::{
    estimate_reading_time, reading_time_estimates, ReadingTime, ReadingTimeEstimates,
    DEFAULT_WORDS_PER_MINUTE,
};
