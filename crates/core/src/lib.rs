//! Core traits and types for the methopt toolkit.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`Objective`], [`Gradient`], [`Hessian`] — the capabilities a solver
//!   needs from the function being minimized
//! - [`GradientComponents`], [`HessianComponents`] — the same capabilities
//!   given as grids of scalar component functions
//! - [`Observer`] — receives solver events as a synchronous side channel
//! - [`Iteration`] — the per-iteration event every solver emits
//! - [`linalg`] — small fixed-size vector and matrix helpers

pub mod linalg;

mod components;
mod observer;
mod problems;

pub use components::{GradientComponents, HessianComponents, ScalarFn};
pub use observer::{Iteration, Observer};
pub use problems::{Gradient, Hessian, Objective};
