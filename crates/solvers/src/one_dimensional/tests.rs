use approx::assert_abs_diff_eq;

use super::{Config, Dichotomy, Fibonacci, GoldenSection, LineSearch, Solution};

const EPSILONS: [f64; 8] = [0.5, 1e-1, 1e-2, 1e-3, 1e-4, 1e-5, 1e-6, 1e-7];

/// Runs all three methods with the same inputs.
fn run_all<F>(f: F, bracket: [f64; 2], config: &Config) -> [Solution; 3]
where
    F: Fn(f64) -> f64 + Copy,
{
    [
        Dichotomy.search(f, bracket, config),
        GoldenSection.search(f, bracket, config),
        Fibonacci::new(config.max_iters()).search(f, bracket, config),
    ]
}

fn assert_all_find<F>(f: F, expected: f64, bracket: [f64; 2], max_iters: usize)
where
    F: Fn(f64) -> f64 + Copy,
{
    for eps in EPSILONS {
        let config = Config::new(max_iters, eps).unwrap();
        for solution in run_all(f, bracket, &config) {
            assert_abs_diff_eq!(solution.x, expected, epsilon = eps);
        }
    }
}

#[test]
fn finds_shifted_parabola_minimum() {
    assert_all_find(|x| (x - 3.0).powi(2) + 8.0, 3.0, [-500.0, 500.0], 100);
}

#[test]
fn finds_minimum_with_large_budget() {
    assert_all_find(|x| (x + 5.5).powi(2), -5.5, [-500.0, 500.0], 1000);
}

#[test]
fn finds_minimum_at_left_bound() {
    assert_all_find(|x| (x + 5.5).powi(2) - 100.0, 0.0, [0.0, 1000.0], 100);
}

#[test]
fn finds_minimum_at_right_bound() {
    assert_all_find(|x| -x, 100.0, [0.0, 100.0], 100);
}

#[test]
fn finds_minimum_of_rational_function() {
    let f = |x: f64| (x - 1.0) / (1.0 - x.powi(3));
    assert_all_find(f, -0.5, [-500.0, 500.0], 100);
    assert_all_find(f, -0.5, [-1.0, 1.0], 100);
}

#[test]
fn methods_agree_with_each_other() {
    let f = |x: f64| (x - 3.0).powi(2) + 8.0;

    for eps in EPSILONS {
        let config = Config::new(100, eps).unwrap();
        let [d, g, fib] = run_all(f, [-500.0, 500.0], &config);

        assert_abs_diff_eq!(d.x, g.x, epsilon = eps);
        assert_abs_diff_eq!(d.x, fib.x, epsilon = eps);
        assert_abs_diff_eq!(g.x, fib.x, epsilon = eps);
    }
}

#[test]
fn evaluation_counts_match_each_method() {
    let f = |x: f64| (x - 3.0).powi(2) + 8.0;
    let config = Config::new(100, 1e-3).unwrap();

    let [d, g, fib] = run_all(f, [-500.0, 500.0], &config);

    assert_eq!(d.evals, 2 * d.iters);
    assert_eq!(g.evals, g.iters + 1);
    assert_eq!(fib.evals, fib.iters + 2);

    // Reusing an interior point makes the single-evaluation methods cheaper.
    assert!(g.evals < d.evals);
    assert!(fib.evals < d.evals);
}

#[test]
fn reversed_bracket_is_swapped() {
    let f = |x: f64| (x - 3.0).powi(2) + 8.0;
    let config = Config::new(100, 1e-3).unwrap();

    let forward = run_all(f, [-500.0, 500.0], &config);
    let reversed = run_all(f, [500.0, -500.0], &config);

    assert_eq!(forward, reversed);
}

#[test]
fn iteration_budget_is_respected() {
    let f = |x: f64| (x - 3.0).powi(2) + 8.0;
    let config = Config::new(3, 1e-3).unwrap();

    let solution = Dichotomy.search(f, [-500.0, 500.0], &config);

    assert_eq!(solution.iters, 3);
    assert_eq!(solution.evals, 6);
}

#[test]
fn golden_section_stops_on_tie() {
    // Interior points of a symmetric bracket have equal values.
    let config = Config::new(100, 0.1).unwrap();

    let solution = GoldenSection.search(f64::abs, [-10.0, 10.0], &config);

    assert_eq!(solution.iters, 1);
    assert_abs_diff_eq!(solution.x, 0.0);
}

#[test]
fn rejects_non_positive_eps() {
    assert!(Config::new(10, 0.0).is_err());
    assert!(Config::new(10, -1e-3).is_err());
    assert!(Config::new(10, f64::NAN).is_err());
}
