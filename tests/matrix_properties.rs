//! Property tests for pairwise matrices and the solver.

use proptest::prelude::*;

use ahp_sherpa::config::AppConfig;
use ahp_sherpa::domain::analysis::{AhpSolver, ConsistencyChecker, CONSISTENCY_THRESHOLD};
use ahp_sherpa::domain::foundation::{InputPolicy, Judgment};
use ahp_sherpa::domain::matrix::PairwiseMatrix;
use ahp_sherpa::domain::session::{AhpCommand, AhpSession};

/// Upper-triangle judgments on the 1-9 scale, each possibly inverted.
fn complete_matrix(max_size: usize) -> impl Strategy<Value = PairwiseMatrix> {
    (2..=max_size).prop_flat_map(|n| {
        let pairs = n * (n - 1) / 2;
        prop::collection::vec((1u8..=9, any::<bool>()), pairs).prop_map(move |cells| {
            let mut matrix = PairwiseMatrix::new(n);
            let mut cells = cells.into_iter();
            for i in 0..n {
                for j in (i + 1)..n {
                    if let Some((value, invert)) = cells.next() {
                        let value = f64::from(value);
                        let value = if invert { 1.0 / value } else { value };
                        matrix.set_cell(i, j, Judgment::Value(value)).unwrap();
                    }
                }
            }
            matrix
        })
    })
}

/// Off-diagonal `(n, row, col)`.
fn off_diagonal_cell() -> impl Strategy<Value = (usize, usize, usize)> {
    (2usize..=10)
        .prop_flat_map(|n| (Just(n), 0..n, 1..n))
        .prop_map(|(n, row, offset)| (n, row, (row + offset) % n))
}

proptest! {
    #[test]
    fn edit_sets_reciprocal(
        (n, row, col) in off_diagonal_cell(),
        value in 0.01f64..100.0,
    ) {
        let mut matrix = PairwiseMatrix::new(n);
        matrix.set_cell(row, col, Judgment::Value(value)).unwrap();

        let mirrored = matrix.get(col, row).and_then(|j| j.value()).unwrap();
        prop_assert!((mirrored - 1.0 / value).abs() < 1e-9);
    }

    #[test]
    fn clearing_input_unsets_both_cells(
        (n, row, col) in off_diagonal_cell(),
        digit in 1u8..=9,
        clear in prop::sample::select(vec!["", "0"]),
    ) {
        let mut matrix = PairwiseMatrix::new(n);
        let set = Judgment::parse_input(&digit.to_string(), InputPolicy::SingleDigit).unwrap();
        matrix.set_cell(row, col, set).unwrap();

        let cleared = Judgment::parse_input(clear, InputPolicy::SingleDigit).unwrap();
        matrix.set_cell(row, col, cleared).unwrap();

        prop_assert_eq!(matrix.get(row, col), Some(Judgment::Unset));
        prop_assert_eq!(matrix.get(col, row), Some(Judgment::Unset));
    }

    #[test]
    fn weights_and_normalized_columns_sum_to_one(matrix in complete_matrix(10)) {
        let solved = AhpSolver::solve(&matrix).unwrap();

        let total: f64 = solved.weights.iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-9);

        let n = matrix.size();
        for j in 0..n {
            let column: f64 = (0..n).map(|i| solved.normalized[i][j]).sum();
            prop_assert!((column - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn verdict_follows_threshold(matrix in complete_matrix(8)) {
        let solved = AhpSolver::solve(&matrix).unwrap();
        let result = ConsistencyChecker::check(&matrix, &solved.weights, CONSISTENCY_THRESHOLD).unwrap();

        prop_assert_eq!(result.is_consistent, result.consistency_ratio <= CONSISTENCY_THRESHOLD);
    }

    #[test]
    fn criteria_grow_then_shrink_keeps_cells(
        (matrix, larger) in complete_matrix(10)
            .prop_flat_map(|m| {
                let n = m.size();
                (Just(m), n..=10)
            }),
    ) {
        let config = AppConfig::default();
        let n = matrix.size();
        let mut session = AhpSession::new(&config.limits)
            .apply(&AhpCommand::SetCriteriaCount { count: n }, &config)
            .unwrap();
        for i in 0..n {
            for j in (i + 1)..n {
                // Enter whichever side of the pair holds the whole number.
                let (row, col, value) = match matrix.get(i, j).and_then(|c| c.value()) {
                    Some(v) if v >= 1.0 => (i, j, v),
                    Some(v) => (j, i, 1.0 / v),
                    None => continue,
                };
                let command = AhpCommand::SetCriteriaCell {
                    row,
                    col,
                    input: format!("{}", value.round()),
                };
                session = session.apply(&command, &config).unwrap();
            }
        }
        prop_assert!(session.criteria_matrix().is_complete());

        let round_trip = session
            .apply(&AhpCommand::SetCriteriaCount { count: larger }, &config)
            .and_then(|s| s.apply(&AhpCommand::SetCriteriaCount { count: n }, &config))
            .unwrap();

        prop_assert_eq!(round_trip.criteria_matrix(), session.criteria_matrix());
        prop_assert_eq!(round_trip.criteria(), session.criteria());
    }

    #[test]
    fn alternative_resize_round_trip_loses_comparisons(
        detour in 2usize..=15,
        digit in 1u8..=9,
    ) {
        let config = AppConfig::default();
        let session = AhpSession::new(&config.limits)
            .apply(
                &AhpCommand::SetAlternativeCell {
                    criterion: 0,
                    row: 0,
                    col: 1,
                    input: digit.to_string(),
                },
                &config,
            )
            .unwrap();
        prop_assume!(detour != session.alternatives().len());

        let round_trip = session
            .apply(&AhpCommand::SetAlternativeCount { count: detour }, &config)
            .and_then(|s| s.apply(&AhpCommand::SetAlternativeCount { count: 3 }, &config))
            .unwrap();

        prop_assert!(round_trip.alternative_matrices().is_empty());
        prop_assert_eq!(round_trip.alternatives(), session.alternatives());
    }

    #[test]
    fn fresh_matrix_is_incomplete(n in 2usize..=15) {
        prop_assert!(!PairwiseMatrix::new(n).is_complete());
        prop_assert_eq!(PairwiseMatrix::new(n).missing_count(), n * (n - 1));
    }
}
