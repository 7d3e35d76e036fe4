//! Stage 4 — positional fallback.
//!
//! When an artifact's translators used no notation at all but translated
//! line-by-line, order is the only signal left: the k-th notation-free
//! translation maps to the k-th content line. The mapping is refused
//! outright when any explicit notation resolved in stage 3 (mixed styles
//! mean the set is not a clean per-line sequence) or when the counts are
//! too far apart to plausibly be one-to-one.

use crate::config::PositionalConfig;

pub const CONF_POSITIONAL: f64 = 0.50;

/// Whether the whole artifact qualifies for positional mapping.
///
/// `remaining` counts unfinalized records that carried no extractable
/// notation; records whose notation failed to resolve disqualify nothing
/// individually but stay out of this count, since they still represent an
/// attempt at explicit reference.
pub fn eligible(
    config: &PositionalConfig,
    any_explicit_match: bool,
    remaining: usize,
    content_lines: usize,
) -> bool {
    if any_explicit_match || remaining == 0 || content_lines == 0 {
        return false;
    }
    let ratio = remaining as f64 / content_lines as f64;
    ratio >= config.min_ratio && ratio <= config.max_ratio
}
