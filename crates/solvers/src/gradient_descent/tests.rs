use std::convert::Infallible;

use approx::assert_abs_diff_eq;
use methopt_core::Iteration;

use crate::{
    ConfigError, Error, Status,
    step::{BracketedConfig, DichotomyStep, DivideStep, FibonacciStep, GoldenSectionStep},
};

use super::{Config, StoppingCriterion, minimize_named, minimize_unobserved};

/// f(x) = (x - 3)² + 8, minimum at x = 3.
fn parabola(x: &[f64; 1]) -> f64 {
    (x[0] - 3.0).powi(2) + 8.0
}

fn parabola_grad(x: &[f64; 1]) -> [f64; 1] {
    [2.0 * (x[0] - 3.0)]
}

fn strategy_config() -> BracketedConfig {
    BracketedConfig::with_search(1000.0, 20, 1e-8).unwrap()
}

#[test]
fn divide_step_by_name() {
    let solution = minimize_named(
        &parabola,
        &parabola_grad,
        [-6.0],
        "divide_step",
        &Config::default(),
        (),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x[0], 3.0, epsilon = 1e-7);
    assert_abs_diff_eq!(solution.objective, 8.0, epsilon = 1e-7);
}

#[test]
fn dichotomy_strategy_with_function_margin() {
    let strategy = DichotomyStep::new(&parabola, &parabola_grad, &strategy_config());
    let config = Config::default().with_criterion(StoppingCriterion::FunctionMargin);

    let solution = minimize_unobserved(&parabola, &parabola_grad, [-6.0], &strategy, &config)
        .expect("should converge");

    assert_abs_diff_eq!(solution.x[0], 3.0, epsilon = 1e-4);
}

#[test]
fn golden_section_strategy_with_argument_margin() {
    let strategy = GoldenSectionStep::new(&parabola, &parabola_grad, &strategy_config());

    let solution = minimize_unobserved(
        &parabola,
        &parabola_grad,
        [-6.0],
        &strategy,
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x[0], 3.0, epsilon = 1e-7);
}

#[test]
fn fibonacci_strategy_with_argument_margin() {
    let strategy = FibonacciStep::new(&parabola, &parabola_grad, &strategy_config());

    let solution = minimize_unobserved(
        &parabola,
        &parabola_grad,
        [-6.0],
        &strategy,
        &Config::default(),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_abs_diff_eq!(solution.x[0], 3.0, epsilon = 1e-7);
}

#[test]
fn minimizes_two_dimensional_quadratics() {
    let f = |x: &[f64; 2]| 2.0 * x[0].powi(2) + x[1].powi(2);
    let grad = |x: &[f64; 2]| [4.0 * x[0], 2.0 * x[1]];
    let strategy = DivideStep::new(&f, &grad);

    let solution = minimize_unobserved(&f, &grad, [1.0, 10.0], &strategy, &Config::default())
        .expect("should converge");

    assert_abs_diff_eq!(solution.x[0], 0.0, epsilon = 1e-7);
    assert_abs_diff_eq!(solution.x[1], 0.0, epsilon = 1e-7);

    let f = |x: &[f64; 2]| x[0].powi(2) + 10.0 * x[1].powi(2) + 5.0;
    let grad = |x: &[f64; 2]| [2.0 * x[0], 20.0 * x[1]];
    let strategy = DivideStep::new(&f, &grad);

    let solution = minimize_unobserved(&f, &grad, [5.0, -7.0], &strategy, &Config::default())
        .expect("should converge");

    assert_abs_diff_eq!(solution.x[0], 0.0, epsilon = 1e-7);
    assert_abs_diff_eq!(solution.x[1], 0.0, epsilon = 1e-7);
    assert_abs_diff_eq!(solution.objective, 5.0, epsilon = 1e-7);
}

#[test]
fn n_iterations_runs_full_budget() {
    let f = |x: &[f64; 1]| x[0].powi(2) - 5.0;
    let grad = |x: &[f64; 1]| [2.0 * x[0]];
    let config = Config::new(50, 1e-7)
        .unwrap()
        .with_criterion(StoppingCriterion::NIterations);

    let mut trajectory = Vec::new();
    let observer = |event: &Iteration<1>| -> Result<(), Infallible> {
        trajectory.push((event.x, f(&event.x)));
        Ok(())
    };

    let solution = minimize_named(&f, &grad, [8.0], "divide_step", &config, observer)
        .expect("should complete");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 50);
    assert_eq!(trajectory.len(), 50);

    let (first_x, first_fx) = trajectory[0];
    assert_eq!(first_x, [8.0]);
    assert_abs_diff_eq!(first_fx, 59.0);

    let (last_x, last_fx) = trajectory[49];
    assert_abs_diff_eq!(last_x[0], 0.0, epsilon = 1e-7);
    assert_abs_diff_eq!(last_fx, -5.0, epsilon = 1e-7);
}

#[test]
fn iteration_indices_start_at_zero_and_increase() {
    let mut indices = Vec::new();
    let observer = |event: &Iteration<1>| -> Result<(), Infallible> {
        indices.push(event.iter);
        Ok(())
    };
    let config = Config::new(10, 1e-7)
        .unwrap()
        .with_criterion(StoppingCriterion::NIterations);

    minimize_named(&parabola, &parabola_grad, [-6.0], "divide_step", &config, observer)
        .expect("should complete");

    assert_eq!(indices, (0..10).collect::<Vec<_>>());
}

#[test]
fn returns_current_point_at_iteration_limit() {
    let config = Config::new(1, 1e-7).unwrap();

    let solution = minimize_named(&parabola, &parabola_grad, [-6.0], "divide_step", &config, ())
        .expect("should complete");

    // The single step lands exactly on the minimum.
    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 1);
    assert_abs_diff_eq!(solution.x[0], 3.0);
}

#[test]
fn converged_point_is_a_fixed_point() {
    let solution = minimize_named(
        &parabola,
        &parabola_grad,
        [3.0],
        "divide_step",
        &Config::default(),
        (),
    )
    .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 0);
    assert_abs_diff_eq!(solution.x[0], 3.0);
}

#[test]
fn unknown_strategy_fails_before_iterating() {
    let mut events = 0;
    let observer = |_: &Iteration<1>| -> Result<(), Infallible> {
        events += 1;
        Ok(())
    };

    let result = minimize_named(
        &parabola,
        &parabola_grad,
        [-6.0],
        "halve_step",
        &Config::default(),
        observer,
    );

    assert!(matches!(
        result,
        Err(Error::InvalidConfig(ConfigError::UnknownStrategy(name))) if name == "halve_step"
    ));
    assert_eq!(events, 0);
}

#[derive(Debug, thiserror::Error)]
#[error("halted by observer")]
struct Halt;

#[test]
fn observer_error_aborts_the_run() {
    let mut events = 0;
    let observer = |event: &Iteration<1>| {
        events += 1;
        if event.iter == 2 {
            return Err(Halt);
        }
        Ok(())
    };
    let config = Config::default().with_criterion(StoppingCriterion::NIterations);

    let result = minimize_named(
        &parabola,
        &parabola_grad,
        [-6.0],
        "divide_step",
        &config,
        observer,
    );

    let Err(Error::Observer(source)) = result else {
        panic!("expected an observer error");
    };
    assert!(source.downcast_ref::<Halt>().is_some());
    assert_eq!(events, 3);
}

#[test]
fn rejects_invalid_config() {
    assert_eq!(Config::new(10, 0.0), Err(ConfigError::Eps));
    assert_eq!(
        Config::default().with_initial_step(-1.0),
        Err(ConfigError::InitialStep)
    );
}
