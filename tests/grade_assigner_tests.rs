use scorix::grade::{GradeThresholds, ThresholdError, assign_grade};

fn custom(table: &[(&str, f64)]) -> GradeThresholds {
    table
        .iter()
        .map(|(letter, minimum)| ((*letter).to_string(), *minimum))
        .collect()
}

fn rank(letter: &str) -> usize {
    ["F", "D", "C", "B", "A"]
        .iter()
        .position(|l| *l == letter)
        .expect("known letter")
}

#[test]
fn default_table_examples() {
    let thresholds = GradeThresholds::default();
    assert_eq!(thresholds.assign(0.72), "B");
    assert_eq!(thresholds.assign(0.40), "D");
    assert_eq!(thresholds.assign(0.39), "F");
    assert_eq!(thresholds.assign(0.90), "A");
    assert_eq!(thresholds.assign(0.60), "C");
}

#[test]
fn zero_score_earns_the_lowest_letter() {
    let thresholds = GradeThresholds::default();
    assert_eq!(thresholds.assign(0.0), "F");
    assert_eq!(thresholds.lowest(), "F");
}

#[test]
fn perfect_score_earns_the_top_letter() {
    assert_eq!(GradeThresholds::default().assign(1.0), "A");
}

#[test]
fn assignment_is_monotonic() {
    let thresholds = GradeThresholds::default();
    let mut previous = rank(&thresholds.assign(0.0));
    for step in 1..=100 {
        let score = f64::from(step) / 100.0;
        let current = rank(&thresholds.assign(score));
        assert!(
            current >= previous,
            "grade regressed between {} and {}",
            f64::from(step - 1) / 100.0,
            score
        );
        previous = current;
    }
}

#[test]
fn below_every_band_falls_back_to_the_lowest_letter() {
    // No zero-minimum letter: scores under every band still get a grade.
    let thresholds = custom(&[("A", 85.0), ("B", 70.0)]);
    assert_eq!(thresholds.assign(0.10), "B");
    assert_eq!(thresholds.lowest(), "B");
}

#[test]
fn per_teacher_tables_shift_the_bands() {
    let strict = custom(&[("A", 90.0), ("B", 80.0), ("C", 70.0), ("D", 60.0), ("F", 0.0)]);
    assert_eq!(strict.assign(0.72), "C");
    assert_eq!(strict.assign(0.86), "B");
}

#[test]
fn free_function_matches_the_method() {
    let thresholds = GradeThresholds::default();
    assert_eq!(assign_grade(0.72, &thresholds), thresholds.assign(0.72));
}

#[test]
fn default_table_validates() {
    assert_eq!(GradeThresholds::default().validate(), Ok(()));
}

#[test]
fn empty_table_is_rejected() {
    assert_eq!(custom(&[]).validate(), Err(ThresholdError::Empty));
}

#[test]
fn out_of_range_minimum_is_rejected() {
    let err = custom(&[("A", 150.0), ("F", 0.0)]).validate();
    assert!(matches!(err, Err(ThresholdError::OutOfRange { .. })));
}

#[test]
fn non_descending_minimums_are_rejected() {
    let err = custom(&[("A", 70.0), ("B", 85.0), ("F", 0.0)]).validate();
    assert!(matches!(err, Err(ThresholdError::NotDescending { .. })));
}

#[test]
fn tied_minimums_are_rejected() {
    let err = custom(&[("A", 85.0), ("B", 85.0), ("F", 0.0)]).validate();
    assert!(matches!(err, Err(ThresholdError::NotDescending { .. })));
}

#[test]
fn letters_outside_the_canonical_order_are_only_range_checked() {
    let table = custom(&[("A+", 95.0), ("A", 85.0), ("B", 70.0), ("F", 0.0)]);
    assert_eq!(table.validate(), Ok(()));
    assert_eq!(table.assign(0.97), "A+");
}
