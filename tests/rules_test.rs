//! Tests for guess normalization and per-position classification.

use fordle::{Classification, FeedbackColor, classify, normalize};

fn verdicts(guess: &str, target: &str) -> Vec<Classification> {
    classify(guess, target).iter().map(|c| *c.verdict()).collect()
}

#[test]
fn test_all_absent() {
    assert_eq!(
        verdicts("ABC", "MMM"),
        vec![
            Classification::Absent,
            Classification::Absent,
            Classification::Absent
        ]
    );
}

#[test]
fn test_exact_and_absent_mix() {
    // M matches at positions 0 and 2; N never occurs in MMM.
    assert_eq!(
        verdicts("MNM", "MMM"),
        vec![
            Classification::Exact,
            Classification::Absent,
            Classification::Exact
        ]
    );
}

#[test]
fn test_present_letters() {
    // T and C both occur in CAT, just not where they were guessed.
    assert_eq!(
        verdicts("TAC", "CAT"),
        vec![
            Classification::Present,
            Classification::Exact,
            Classification::Present
        ]
    );
}

#[test]
fn test_classification_length_matches_target() {
    for target in ["A", "GE", "CAT", "AAPL"] {
        let guess = normalize("ZZZZ", target.chars().count());
        assert_eq!(classify(&guess, target).len(), target.chars().count());
    }
}

#[test]
fn test_classification_is_idempotent() {
    let first = classify("MNM", "MMM");
    let second = classify("MNM", "MMM");
    assert_eq!(first, second);
}

#[test]
fn test_normalize_uppercases() {
    assert_eq!(normalize("aapl", 4), "AAPL");
}

#[test]
fn test_normalize_pads_short_input() {
    assert_eq!(normalize("ab", 4), "AB  ");
}

#[test]
fn test_normalize_truncates_long_input() {
    assert_eq!(normalize("ABCDEF", 4), "ABCD");
}

#[test]
fn test_padded_blanks_classify_absent() {
    let verdicts = verdicts(&normalize("A", 4), "AAPL");
    assert_eq!(verdicts[0], Classification::Exact);
    assert_eq!(verdicts[1], Classification::Absent);
    assert_eq!(verdicts[2], Classification::Absent);
    assert_eq!(verdicts[3], Classification::Absent);
}

#[test]
fn test_color_mapping_is_pure_function_of_verdict() {
    assert_eq!(Classification::Exact.color(), FeedbackColor::Green);
    assert_eq!(Classification::Present.color(), FeedbackColor::Amber);
    assert_eq!(Classification::Absent.color(), FeedbackColor::Grey);
}

#[test]
fn test_classification_law_holds_per_position() {
    let target = "CVX";
    for guess in ["CXV", "XXX", "VVC", "ABC", "CVX"] {
        for (i, cell) in classify(guess, target).iter().enumerate() {
            let g = guess.chars().nth(i).unwrap();
            let t = target.chars().nth(i).unwrap();
            let expected = if g == t {
                Classification::Exact
            } else if target.contains(g) {
                Classification::Present
            } else {
                Classification::Absent
            };
            assert_eq!(*cell.verdict(), expected, "guess {} position {}", guess, i);
        }
    }
}
