//! End-to-end solver scenarios exercising the public API.

use approx::assert_relative_eq;
use linsolve::{Error, IterationConfig, LinearSystem, Matrix, Method, Solution};
use ndarray::{array, Array1};

const DIRECT_METHODS: [Method; 4] = [
    Method::Cramer,
    Method::Matrix,
    Method::GaussianElimination,
    Method::LuDecomposition,
];

fn system(rows: Vec<Vec<f64>>, constants: Array1<f64>, names: &[&str]) -> LinearSystem<f64> {
    LinearSystem::new(
        Matrix::from_rows(rows).unwrap(),
        constants,
        names.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap()
}

/// Scenario A: x = 1.4, x + y = -1.5, x + y + z = 3.2.
#[test]
fn all_direct_methods_solve_the_triangular_system() {
    let system = system(
        vec![
            vec![1.0, 0.0, 0.0],
            vec![1.0, 1.0, 0.0],
            vec![1.0, 1.0, 1.0],
        ],
        array![1.4, -1.5, 3.2],
        &["x", "y", "z"],
    );

    for method in DIRECT_METHODS {
        let solution = system.solve(method).unwrap();
        assert_relative_eq!(solution.get("x").unwrap(), 1.4, epsilon = 1e-9);
        assert_relative_eq!(solution.get("y").unwrap(), -2.9, epsilon = 1e-9);
        assert_relative_eq!(solution.get("z").unwrap(), 4.7, epsilon = 1e-9);
    }
}

#[test]
fn direct_methods_agree_on_a_well_conditioned_system() {
    let system = system(
        vec![
            vec![1.24, -0.87, -3.17],
            vec![2.11, -0.45, 1.44],
            vec![0.48, 1.25, -0.63],
        ],
        array![0.46, 1.5, 0.35],
        &["x", "y", "z"],
    );

    let reference = system.solve(Method::Cramer).unwrap();
    for method in &DIRECT_METHODS[1..] {
        let solution = system.solve(*method).unwrap();
        for name in ["x", "y", "z"] {
            assert_relative_eq!(
                solution.get(name).unwrap(),
                reference.get(name).unwrap(),
                epsilon = 1e-9
            );
        }
    }
}

/// Scenario B: both iterative methods converge to (1.4, 0.2), Gauss-Seidel
/// in no more iterations than Jacobi.
#[test]
fn iterative_methods_converge_on_the_diagonally_dominant_system() {
    let system = system(
        vec![vec![2.0, 1.0], vec![1.0, -2.0]],
        array![3.0, 1.0],
        &["x", "y"],
    );
    let config = IterationConfig::default();

    let jacobi: Vec<Solution<f64>> = system
        .solve_iteratively(Method::Jacobi, &config)
        .unwrap()
        .collect();
    let gauss_seidel: Vec<Solution<f64>> = system
        .solve_iteratively(Method::GaussSeidel, &config)
        .unwrap()
        .collect();

    for iterates in [&jacobi, &gauss_seidel] {
        assert!(!iterates.is_empty());
        let last = iterates.last().unwrap();
        assert!((last.get("x").unwrap() - 1.4).abs() < 1e-3);
        assert!((last.get("y").unwrap() - 0.2).abs() < 1e-3);
    }
    assert!(gauss_seidel.len() <= jacobi.len());
}

#[test]
fn every_intermediate_iterate_is_observable() {
    let system = system(
        vec![vec![2.0, 1.0], vec![1.0, -2.0]],
        array![3.0, 1.0],
        &["x", "y"],
    );
    let iterates: Vec<Solution<f64>> = system
        .solve_iteratively(Method::Jacobi, &IterationConfig::default())
        .unwrap()
        .collect();

    // x_0 = b' = (1.5, -0.5) is the unseen seed; the first yielded iterate
    // is x_1 = b' + A' * x_0.
    assert_relative_eq!(iterates[0].get("x").unwrap(), 1.75);
    assert_relative_eq!(iterates[0].get("y").unwrap(), 0.25);

    // Successive deltas shrink and the last one is below the accuracy.
    let mut deltas = Vec::new();
    for pair in iterates.windows(2) {
        let dx = (pair[1].get("x").unwrap() - pair[0].get("x").unwrap()).abs();
        let dy = (pair[1].get("y").unwrap() - pair[0].get("y").unwrap()).abs();
        deltas.push(dx.max(dy));
    }
    assert!(*deltas.last().unwrap() < 1e-3);

    // Restarting produces the same forward-only sequence.
    let again: Vec<Solution<f64>> = system
        .solve_iteratively(Method::Jacobi, &IterationConfig::default())
        .unwrap()
        .collect();
    assert_eq!(again.len(), iterates.len());
    assert_eq!(again[0], iterates[0]);
}

/// Scenario C: a singular coefficient matrix yields no numeric solution.
#[test]
fn singular_systems_fail_for_determinant_based_methods() {
    let system = system(
        vec![vec![1.0, 2.0], vec![2.0, 4.0]],
        array![1.0, 1.0],
        &["x", "y"],
    );
    assert_eq!(system.solve(Method::Cramer), Err(Error::SingularMatrix));
    assert_eq!(system.solve(Method::Matrix), Err(Error::SingularMatrix));
}

/// Scenario D: a failed row-sum test refuses to iterate at all.
#[test]
fn divergence_risk_yields_no_approximations() {
    let system = system(
        vec![vec![1.0, 2.0], vec![3.0, 1.0]],
        array![1.0, 1.0],
        &["x", "y"],
    );
    for method in [Method::Jacobi, Method::GaussSeidel] {
        match system.solve_iteratively(method, &IterationConfig::default()) {
            Err(Error::DivergenceRisk { row: 0, row_sum }) => assert_eq!(row_sum, 2.0),
            other => panic!("expected DivergenceRisk, got {:?}", other.map(|_| ())),
        }
    }
}

#[test]
fn unknown_method_tags_are_rejected_everywhere() {
    assert_eq!(
        "cholesky".parse::<Method>(),
        Err(Error::UnknownMethod("cholesky".to_string()))
    );

    let system = system(
        vec![vec![2.0, 1.0], vec![1.0, -2.0]],
        array![3.0, 1.0],
        &["x", "y"],
    );
    assert!(matches!(
        system.solve(Method::GaussSeidel),
        Err(Error::UnknownMethod(_))
    ));
    assert!(matches!(
        system.solve_iteratively(Method::LuDecomposition, &IterationConfig::default()),
        Err(Error::UnknownMethod(_))
    ));
}

#[test]
fn a_larger_system_stays_consistent_across_methods() {
    // Diagonally dominant 4x4, solvable by every method including the
    // iterative pair.
    let system = system(
        vec![
            vec![10.0, -1.0, 2.0, 0.0],
            vec![-1.0, 11.0, -1.0, 3.0],
            vec![2.0, -1.0, 10.0, -1.0],
            vec![0.0, 3.0, -1.0, 8.0],
        ],
        array![6.0, 25.0, -11.0, 15.0],
        &["a", "b", "c", "d"],
    );

    let reference = system.solve(Method::LuDecomposition).unwrap();
    for method in DIRECT_METHODS {
        let solution = system.solve(method).unwrap();
        for name in ["a", "b", "c", "d"] {
            assert_relative_eq!(
                solution.get(name).unwrap(),
                reference.get(name).unwrap(),
                epsilon = 1e-9
            );
        }
    }

    let config = IterationConfig {
        accuracy: 1e-7,
        ..IterationConfig::default()
    };
    for method in [Method::Jacobi, Method::GaussSeidel] {
        let last = system
            .solve_iteratively(method, &config)
            .unwrap()
            .last()
            .unwrap();
        for name in ["a", "b", "c", "d"] {
            assert!((last.get(name).unwrap() - reference.get(name).unwrap()).abs() < 1e-5);
        }
    }
}
