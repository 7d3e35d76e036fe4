//! End-to-end runs over parsed transliterations: the parser builds the
//! structural lines and the engine aligns real-shaped translation sets
//! against them.

use tabula_align::{run, AlignConfig};
use tabula_core::{Face, MatchMethod, Outcome, TranslationRecord, UnmatchReason};
use tabula_parser::parse_artifact;

const RECEIPT: &str = "\
&P100542 = Ur III receipt
@tablet
@obverse
1. 2(disz) udu niga
2. ki ab-ba-sa6-ga-ta
3. mu-kux(DU) lugal
@reverse
1. sza3 mu-kux(DU)
2. iti ezem-me-ki-gal2
";

const BROKEN_TOP: &str = "\
&P200001 = fragment
@obverse
1'. [x] broken opening
2'. lugal-e mu-na-du3
3'. e2-gal-la-na
";

fn records(texts: &[&str]) -> Vec<TranslationRecord> {
    texts
        .iter()
        .enumerate()
        .map(|(i, t)| TranslationRecord::new(*t, "en", i))
        .collect()
}

#[test]
fn notation_free_set_aligns_positionally() {
    let parsed = parse_artifact("x", RECEIPT);
    let input = records(&[
        "2 grain-fed sheep",
        "from Abbasaga",
        "royal delivery",
        "within the delivery",
        "month: festival of Mekigal",
    ]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);

    assert_eq!(result.summary.matched, 5);
    assert_eq!(result.summary.by_method["positional"], 5);
    for (i, record) in result.records.iter().enumerate() {
        match &record.outcome {
            Outcome::Matched { line, confidence, method } => {
                assert_eq!(line.sequence_index, i);
                assert_eq!(*confidence, 0.50);
                assert_eq!(*method, MatchMethod::Positional);
            }
            other => panic!("record {i}: {other:?}"),
        }
    }
    // Faces carried through from the parse.
    let faces: Vec<_> = result
        .records
        .iter()
        .map(|r| match &r.outcome {
            Outcome::Matched { line, .. } => line.face,
            _ => None,
        })
        .collect();
    assert_eq!(faces[2], Some(Face::Front));
    assert_eq!(faces[3], Some(Face::Back));
}

#[test]
fn face_prime_notation_resolves_on_broken_fragment() {
    let parsed = parse_artifact("x", BROKEN_TOP);
    let input = records(&["o 3' of his palace"]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);

    match &result.records[0].outcome {
        Outcome::Matched { line, confidence, method } => {
            assert_eq!(line.line_id.to_string(), "3'");
            assert_eq!(line.face, Some(Face::Front));
            assert_eq!(*confidence, 0.90);
            assert_eq!(*method, MatchMethod::FacePrimeLine);
        }
        other => panic!("{other:?}"),
    }
}

#[test]
fn leading_quantity_is_never_a_line_reference() {
    let parsed = parse_artifact("x", RECEIPT);
    // One explicit match disables positional; the quantity record must then
    // stay unresolved rather than being misread as line 22.
    let input = records(&["o 1 two grain-fed sheep", "22 mana copper:"]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);

    assert!(result.records[0].outcome.is_matched());
    assert_eq!(result.records[1].outcome, Outcome::Unresolved);
    assert_eq!(result.summary.unresolved, 1);
}

#[test]
fn quantity_with_failing_ratio_stays_unresolved() {
    let text = "&P5 = tiny tablet\n@obverse\n1. only line\n";
    let parsed = parse_artifact("x", text);
    // Far more records than lines: the ratio check refuses the mapping, and
    // "22" must not be misread as a reference to a line 22.
    let input = records(&[
        "22 mana copper:",
        "a note",
        "another note",
        "a fourth note",
    ]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);
    assert_eq!(result.summary.unresolved, 4);
    assert_eq!(result.summary.matched, 0);
}

#[test]
fn placeholder_record_is_unmatchable() {
    let parsed = parse_artifact("x", RECEIPT);
    let input = records(&["xxx", "o 2 from Abbasaga"]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);

    assert_eq!(
        result.records[0].outcome,
        Outcome::Unmatchable { reason: UnmatchReason::Placeholder }
    );
    assert!(result.records[1].outcome.is_matched());
    assert_eq!(result.summary.by_reason["placeholder"], 1);
}

#[test]
fn glossary_tablet_is_excluded_wholesale() {
    let parsed = parse_artifact("x", RECEIPT);
    let glosses = [
        "water", "bread", "beer", "sheep", "ox", "barley", "silver", "copper", "to go; to walk",
        "shepherd (of the flock)", "temple", "field", "canal", "boat", "fish", "bird", "dog",
        "house", "door", "grain", "king", "queen", "scribe", "tablet", "seal", "oil", "wool",
        "garment", "to build", "to give", "to receive", "mountain", "river", "city", "wall",
        "gate", "road", "year", "month", "day",
    ];
    let input = records(&glosses);
    assert_eq!(input.len(), 40);
    let result = run(&AlignConfig::default(), &parsed.lines, input);

    assert_eq!(result.summary.unmatchable, 40);
    assert_eq!(result.summary.by_reason["lexical_glossary"], 40);
    assert_eq!(result.summary.matched, 0);
}

#[test]
fn positional_refused_when_counts_diverge() {
    let parsed = parse_artifact("x", RECEIPT);
    // 2 free records over 5 content lines: ratio 0.4, below the band.
    let input = records(&["a note", "another note"]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);
    assert_eq!(result.summary.unresolved, 2);
    assert_eq!(result.summary.matched, 0);
}

#[test]
fn rerun_over_prior_outcomes_is_identical() {
    let parsed = parse_artifact("x", RECEIPT);
    let input = records(&["o 1 sheep", "22 mana copper:", "xxx"]);
    let first = run(&AlignConfig::default(), &parsed.lines, input);
    let second = run(&AlignConfig::default(), &parsed.lines, first.records.clone());
    assert_eq!(first.records, second.records);
    assert_eq!(
        serde_json::to_string(&first.summary).unwrap(),
        serde_json::to_string(&second.summary).unwrap()
    );
}

#[test]
fn editorial_lines_never_receive_matches() {
    let text = "\
&P3 = with ruling
@obverse
1. first entry
$ single ruling
2. second entry
";
    let parsed = parse_artifact("x", text);
    let input = records(&["the first", "the second"]);
    let result = run(&AlignConfig::default(), &parsed.lines, input);

    let targets: Vec<usize> = result
        .records
        .iter()
        .filter_map(|r| match &r.outcome {
            Outcome::Matched { line, .. } => Some(line.sequence_index),
            _ => None,
        })
        .collect();
    // Sequence 1 is the ruling; matches land on 0 and 2.
    assert_eq!(targets, vec![0, 2]);
}
