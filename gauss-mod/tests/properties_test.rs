use gauss_mod::config::SolverConfig;
use gauss_mod::errors::SolverError;
use gauss_mod::gauss::GaussSolver;
use gauss_mod::ring::matrix_ops::satisfies;
use gauss_mod::ring::{Matrix, Ring};

use itertools::Itertools;
use quickcheck::{Arbitrary, Gen, TestResult, quickcheck};

/// A random system small enough to check against exhaustive search.
#[derive(Debug, Clone)]
struct SmallSystem {
    modulus: u64,
    matrix: Matrix,
}

impl Arbitrary for SmallSystem {
    fn arbitrary(g: &mut Gen) -> Self {
        let modulus = *g
            .choose(&[1u64, 2, 3, 4, 6, 8, 9, 10, 12, 15, 16, 18])
            .unwrap();
        let rows = usize::arbitrary(g) % 4 + 1;
        let unknowns = usize::arbitrary(g) % 3 + 1;
        let matrix = (0..rows)
            .map(|_| {
                (0..=unknowns)
                    .map(|_| i64::from(i8::arbitrary(g)))
                    .collect()
            })
            .collect();

        SmallSystem { modulus, matrix }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let modulus = self.modulus;
        Box::new(
            self.matrix
                .shrink()
                .filter(|m| !m.is_empty() && m.iter().map(Vec::len).all_equal() && m[0].len() >= 2)
                .map(move |matrix| SmallSystem { modulus, matrix }),
        )
    }
}

fn brute_force(system: &SmallSystem) -> Matrix {
    let ring = Ring::try_with(system.modulus).unwrap();
    let unknowns = system.matrix[0].len() - 1;
    (0..unknowns)
        .map(|_| 0..system.modulus as i64)
        .multi_cartesian_product()
        .filter(|x| satisfies(&system.matrix, x, &ring).unwrap())
        .collect()
}

fn check_against_brute_force(system: &SmallSystem, config: SolverConfig) -> TestResult {
    let solver = GaussSolver::with_config(system.modulus, config).unwrap();
    let expected = brute_force(system);

    match solver.solve(&system.matrix) {
        Ok(result) => {
            if result.solutions != expected {
                return TestResult::error(format!(
                    "solver returned {:?}, exhaustive search found {:?}",
                    result.solutions, expected
                ));
            }
            // Only a bound: a branch opened by a zero-divisor pivot can still
            // die at an earlier column (see multiplicity_bounds_solutions_from_above).
            TestResult::from_bool(result.len() as u64 <= result.multiplicity)
        }
        Err(SolverError::RankMismatch { .. }) | Err(SolverError::NoValueAtColumn { .. }) => {
            TestResult::from_bool(expected.is_empty())
        }
        Err(SolverError::NoPivot { .. }) if !config.free_columns => TestResult::discard(),
        Err(SolverError::TooManySolutions { count, .. }) => {
            TestResult::from_bool(expected.len() as u64 <= count)
        }
        Err(err) => TestResult::error(format!("unexpected failure: {}", err)),
    }
}

quickcheck! {
    fn prop_lenient_solver_finds_exactly_all_solutions(system: SmallSystem) -> TestResult {
        let config = SolverConfig::default()
            .with_free_columns(true)
            .with_max_solutions(u64::MAX);
        check_against_brute_force(&system, config)
    }

    fn prop_default_solver_never_returns_wrong_solutions(system: SmallSystem) -> TestResult {
        check_against_brute_force(&system, SolverConfig::default())
    }

    fn prop_ceiling_never_leaks_partial_output(system: SmallSystem) -> TestResult {
        let config = SolverConfig::default()
            .with_free_columns(true)
            .with_max_solutions(1);
        let solver = GaussSolver::with_config(system.modulus, config).unwrap();

        match solver.solve(&system.matrix) {
            Ok(result) => TestResult::from_bool(result.len() <= 1 && result.multiplicity <= 1),
            Err(SolverError::TooManySolutions { count, limit }) => TestResult::from_bool(count > limit),
            Err(err) => TestResult::from_bool(err.is_ordinary()),
        }
    }
}
