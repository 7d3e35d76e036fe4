//! Stage 2 — whole-artifact lexical-glossary detection.
//!
//! Dictionary/word-list artifacts carry translations that are never
//! line-aligned in the source; per-line matching on them produces
//! systematic false positives, so the whole translation set is excluded
//! up front.

use crate::config::GlossaryConfig;

/// Shape of a dictionary gloss: a short lowercase word or phrase, optionally
/// parenthetical, optionally semicolon-joined ("to go; to walk (said of
/// animals)"). Digits or capitals disqualify; narrative translations
/// routinely carry both.
pub fn is_gloss_shape(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.len() > 80 {
        return false;
    }
    if !trimmed
        .chars()
        .next()
        .map(|c| c.is_ascii_lowercase() || c == '(')
        .unwrap_or(false)
    {
        return false;
    }
    let mut has_letter = false;
    for c in trimmed.chars() {
        match c {
            'a'..='z' => has_letter = true,
            ' ' | '-' | '\'' | ',' | ';' | '(' | ')' => {}
            _ => return false,
        }
    }
    has_letter
}

/// Whole-set test: large enough, and a high enough fraction gloss-shaped.
pub fn detect(config: &GlossaryConfig, texts: &[&str]) -> bool {
    if texts.len() < config.min_records {
        return false;
    }
    let gloss_count = texts.iter().filter(|t| is_gloss_shape(t)).count();
    gloss_count as f64 / texts.len() as f64 >= config.majority
}
