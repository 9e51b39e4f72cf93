//! Page-title formatting policies.
//!
//! Titles are derived from the page name (`club_home`, `ClassSchedule`).
//! The policy receives the render instant instead of reading a clock.

use crate::domain::foundation::Timestamp;

/// Turns a page name into a title for a given instant.
pub trait TitlePolicy: Send + Sync {
    fn title(&self, page: &str, at: &Timestamp) -> String;
}

/// Splits a page name on underscores and before each uppercase letter.
pub fn page_words(page: &str) -> Vec<String> {
    let stem = page
        .rsplit('/')
        .next()
        .unwrap_or(page)
        .split('.')
        .next()
        .unwrap_or_default();

    let mut words = Vec::new();
    let mut current = String::new();
    for c in stem.chars() {
        if c == '_' || c.is_uppercase() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            if c == '_' {
                continue;
            }
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Capitalized words on even minutes, lowercase words on odd minutes.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinuteParityTitle;

impl MinuteParityTitle {
    /// True when `at` renders capitalized titles.
    pub fn is_capitalized(at: &Timestamp) -> bool {
        at.minute() % 2 == 0
    }
}

impl TitlePolicy for MinuteParityTitle {
    fn title(&self, page: &str, at: &Timestamp) -> String {
        let words = page_words(page);
        let words: Vec<String> = if Self::is_capitalized(at) {
            words.iter().map(|w| capitalize(w)).collect()
        } else {
            words.iter().map(|w| w.to_lowercase()).collect()
        };
        words.join(" ")
    }
}

/// Always capitalized words.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedTitle;

impl TitlePolicy for CapitalizedTitle {
    fn title(&self, page: &str, _at: &Timestamp) -> String {
        page_words(page)
            .iter()
            .map(|w| capitalize(w))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
