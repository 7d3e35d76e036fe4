//! Engine driver: runs the four stages over one artifact and tallies the
//! outcomes. Pure with respect to its inputs; rerunning on the same lines
//! and records yields byte-identical results.

use tabula_core::{LineRef, MatchMethod, Outcome, StructuralLine, TranslationRecord, UnmatchReason};

use crate::cascade;
use crate::classify::ShapeClassifiers;
use crate::config::AlignConfig;
use crate::glossary;
use crate::positional::{self, CONF_POSITIONAL};
use crate::summary::{compute_summary, AlignSummary};

#[derive(Debug, Clone)]
pub struct AlignResult {
    pub records: Vec<TranslationRecord>,
    pub summary: AlignSummary,
}

/// Disposition of a record while the stages are still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outcome is final; later stages must not touch it.
    Final,
    /// Carried explicit notation that failed to resolve. Not a candidate
    /// for positional mapping: the translator was referencing lines, just
    /// not lines this transliteration has.
    CarriedNotation,
    /// No notation found; available to the positional fallback.
    Free,
}

pub fn run(
    config: &AlignConfig,
    lines: &[StructuralLine],
    mut records: Vec<TranslationRecord>,
) -> AlignResult {
    // Outcomes are recomputed from scratch, never patched.
    for record in &mut records {
        record.outcome = Outcome::Unresolved;
    }
    let mut states = vec![State::Free; records.len()];

    // Stage 1: shape pre-classification.
    let classifiers = ShapeClassifiers::new();
    for (record, state) in records.iter_mut().zip(&mut states) {
        if let Some(reason) = classifiers.classify(&record.text) {
            record.outcome = Outcome::Unmatchable { reason };
            *state = State::Final;
        }
    }

    // Stage 2: whole-artifact glossary detection. The shape test runs over
    // every record, finalized or not; a dictionary tablet is a dictionary
    // tablet regardless of its damaged entries.
    let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
    if glossary::detect(&config.glossary, &texts) {
        for (record, state) in records.iter_mut().zip(&mut states) {
            if *state != State::Final {
                record.outcome = Outcome::Unmatchable {
                    reason: UnmatchReason::LexicalGlossary,
                };
                *state = State::Final;
            }
        }
    }

    // Stage 3: explicit-pattern cascade.
    let mut any_explicit_match = false;
    for (record, state) in records.iter_mut().zip(&mut states) {
        if *state == State::Final {
            continue;
        }
        let Some(candidate) = cascade::extract(&record.text) else {
            continue;
        };
        match cascade::resolve(&candidate, lines) {
            Some(line) => {
                record.outcome = Outcome::Matched {
                    line: LineRef {
                        face: line.face,
                        line_id: line.line_id,
                        sequence_index: line.sequence_index,
                    },
                    confidence: candidate.confidence,
                    method: candidate.method,
                };
                *state = State::Final;
                any_explicit_match = true;
            }
            None => *state = State::CarriedNotation,
        }
    }

    // Stage 4: positional fallback over notation-free records.
    let content: Vec<&StructuralLine> = lines.iter().filter(|l| l.is_content()).collect();
    let free = states.iter().filter(|s| **s == State::Free).count();
    if positional::eligible(&config.positional, any_explicit_match, free, content.len()) {
        let mut next = 0usize;
        for (record, state) in records.iter_mut().zip(&mut states) {
            if *state != State::Free {
                continue;
            }
            let Some(line) = content.get(next) else {
                break;
            };
            next += 1;
            record.outcome = Outcome::Matched {
                line: LineRef {
                    face: line.face,
                    line_id: line.line_id,
                    sequence_index: line.sequence_index,
                },
                confidence: CONF_POSITIONAL,
                method: MatchMethod::Positional,
            };
            *state = State::Final;
        }
    }

    // Anything not finalized stays Unresolved.
    let summary = compute_summary(&records);
    AlignResult { records, summary }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabula_core::{Face, LineId};

    fn content_line(face: Face, primary: u32, seq: usize) -> StructuralLine {
        StructuralLine {
            artifact_id: "P1".into(),
            face: Some(face),
            column: None,
            line_id: LineId::new(primary),
            raw_text: format!("line {primary}"),
            tokens: vec![format!("line{primary}")],
            is_editorial: false,
            is_ruling: false,
            is_blank: false,
            sequence_index: seq,
        }
    }

    fn record(text: &str, seq: usize) -> TranslationRecord {
        TranslationRecord::new(text, "en", seq)
    }

    fn front_lines(n: u32) -> Vec<StructuralLine> {
        (1..=n)
            .map(|i| content_line(Face::Front, i, (i - 1) as usize))
            .collect()
    }

    #[test]
    fn explicit_face_prime_match() {
        let mut lines = front_lines(2);
        lines[1].line_id = LineId::primed(3);
        let records = vec![record("o 3' the broken passage", 0)];
        let result = run(&AlignConfig::default(), &lines, records);
        match &result.records[0].outcome {
            Outcome::Matched { line, confidence, method } => {
                assert_eq!(line.line_id, LineId::primed(3));
                assert_eq!(*confidence, 0.90);
                assert_eq!(*method, MatchMethod::FacePrimeLine);
            }
            other => panic!("expected match, got {other:?}"),
        }
    }

    #[test]
    fn positional_fills_notation_free_set() {
        let lines = front_lines(3);
        let records = vec![
            record("the king", 0),
            record("went forth", 1),
            record("to the temple", 2),
        ];
        let result = run(&AlignConfig::default(), &lines, records);
        for (i, r) in result.records.iter().enumerate() {
            match &r.outcome {
                Outcome::Matched { line, confidence, method } => {
                    assert_eq!(line.sequence_index, i);
                    assert_eq!(*confidence, CONF_POSITIONAL);
                    assert_eq!(*method, MatchMethod::Positional);
                }
                other => panic!("record {i}: expected positional match, got {other:?}"),
            }
        }
        assert_eq!(result.summary.matched, 3);
    }

    #[test]
    fn explicit_match_suppresses_positional() {
        let lines = front_lines(3);
        let records = vec![
            record("o 1 first line", 0),
            record("something else", 1),
            record("a third thing", 2),
        ];
        let result = run(&AlignConfig::default(), &lines, records);
        assert!(result.records[0].outcome.is_matched());
        assert_eq!(result.records[1].outcome, Outcome::Unresolved);
        assert_eq!(result.records[2].outcome, Outcome::Unresolved);
    }

    #[test]
    fn quantity_is_not_notation() {
        let lines = front_lines(3);
        let records = vec![
            record("22 mana copper:", 0),
            record("the king", 1),
            record("went forth", 2),
        ];
        let result = run(&AlignConfig::default(), &lines, records);
        // 3 free records / 3 content lines: still positional.
        assert!(result.records[0].outcome.is_matched());
    }

    #[test]
    fn failed_resolution_excluded_from_positional() {
        let lines = front_lines(2);
        // `o 9` resolves nowhere; its record carries notation and the two
        // free records map positionally (2/2 within band).
        let records = vec![
            record("o 9 missing line", 0),
            record("the king", 1),
            record("went forth", 2),
        ];
        let result = run(&AlignConfig::default(), &lines, records);
        assert_eq!(result.records[0].outcome, Outcome::Unresolved);
        assert!(result.records[1].outcome.is_matched());
        assert!(result.records[2].outcome.is_matched());
    }

    #[test]
    fn ratio_out_of_band_leaves_unresolved() {
        let lines = front_lines(10);
        let records = vec![record("one stray note", 0)];
        let result = run(&AlignConfig::default(), &lines, records);
        assert_eq!(result.records[0].outcome, Outcome::Unresolved);
        assert_eq!(result.summary.unresolved, 1);
    }

    #[test]
    fn shape_classification_wins_first() {
        let lines = front_lines(2);
        let records = vec![record("xxx", 0), record("...", 1)];
        let result = run(&AlignConfig::default(), &lines, records);
        assert_eq!(
            result.records[0].outcome,
            Outcome::Unmatchable { reason: UnmatchReason::Placeholder }
        );
        assert_eq!(
            result.records[1].outcome,
            Outcome::Unmatchable { reason: UnmatchReason::Broken }
        );
    }

    #[test]
    fn glossary_artifact_excluded_wholesale() {
        let lines = front_lines(5);
        let words = [
            "water", "bread", "beer", "sheep", "ox", "barley", "silver", "copper", "king", "queen",
            "temple", "field", "canal", "boat", "fish", "bird", "dog", "house", "door", "grain",
        ];
        let records: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, w)| record(w, i))
            .collect();
        let result = run(&AlignConfig::default(), &lines, records);
        assert_eq!(result.summary.unmatchable, 20);
        for r in &result.records {
            assert_eq!(
                r.outcome,
                Outcome::Unmatchable { reason: UnmatchReason::LexicalGlossary }
            );
        }
    }

    #[test]
    fn glossary_detection_counts_finalized_records_and_keeps_their_reason() {
        let lines = front_lines(5);
        // 19 glosses plus one damaged entry: the whole set of 20 meets the
        // minimum count, and 19/20 meets the majority.
        let words = [
            "water", "bread", "beer", "sheep", "ox", "barley", "silver", "copper", "king",
            "queen", "temple", "field", "canal", "boat", "fish", "bird", "dog", "house", "door",
        ];
        let mut records: Vec<_> = words
            .iter()
            .enumerate()
            .map(|(i, w)| record(w, i))
            .collect();
        records.push(record("...", 19));
        let result = run(&AlignConfig::default(), &lines, records);
        assert_eq!(result.summary.unmatchable, 20);
        assert_eq!(result.summary.by_reason["lexical_glossary"], 19);
        assert_eq!(result.summary.by_reason["broken"], 1);
    }

    #[test]
    fn rerun_is_idempotent() {
        let lines = front_lines(3);
        let records = vec![
            record("o 1 first", 0),
            record("o 2 second", 1),
            record("xxx", 2),
        ];
        let first = run(&AlignConfig::default(), &lines, records);
        let second = run(&AlignConfig::default(), &lines, first.records.clone());
        assert_eq!(first.records, second.records);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn editorial_lines_not_positional_targets() {
        let mut lines = front_lines(2);
        lines[1].is_editorial = true;
        lines[1].is_ruling = true;
        let records = vec![record("only real line", 0)];
        let result = run(&AlignConfig::default(), &lines, records);
        match &result.records[0].outcome {
            Outcome::Matched { line, .. } => assert_eq!(line.sequence_index, 0),
            other => panic!("expected match, got {other:?}"),
        }
    }
}
