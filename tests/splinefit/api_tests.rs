#![cfg(feature = "dev")]
//! Tests for the high-level spline API.
//!
//! These tests verify the builder pattern, configuration options, and complete
//! workflows, including:
//! - Builder defaults and adapter conversion
//! - Duplicate and unsupported options
//! - Build-time and fit-time validation
//! - Option propagation to the adapters
//!
//! ## Test Organization
//!
//! 1. **Builder Construction** - Defaults, adapter conversion
//! 2. **Builder Validation** - Duplicates, unsupported options, ranges
//! 3. **Fit Validation** - Errors surfaced from the data
//! 4. **Adapter Propagation** - Options reach the fit

use approx::assert_relative_eq;

use splinefit::internals::api::{FixedKnots, Resumable, Smoothing, SplineBuilder as Spline};
use splinefit::internals::engine::output::FitStatus;
use splinefit::internals::primitives::errors::{ErrorKind, SplineError};

// ============================================================================
// Helper Functions
// ============================================================================

fn wave(m: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..m).map(|i| i as f64 * 0.25).collect();
    let y = x
        .iter()
        .enumerate()
        .map(|(i, &v)| v.sin() + 0.04 * ((i % 4) as f64 - 1.5))
        .collect();
    (x, y)
}

// ============================================================================
// Builder Construction Tests
// ============================================================================

/// Test the builder defaults.
///
/// Verifies that a fresh builder has no options set.
#[test]
fn test_builder_defaults() {
    let builder = Spline::<f64>::new();

    assert!(builder.degree.is_none());
    assert!(builder.smoothing_factor.is_none());
    assert!(builder.knot_storage.is_none());
    assert!(builder.interior_knots.is_none());
    assert!(builder.duplicate_param.is_none());
}

/// Test the adapter defaults.
///
/// Verifies degree 3, tolerance 0.001, and 20 iterations.
#[test]
fn test_adapter_defaults() {
    let builder = Spline::<f64>::new().adapter(Smoothing);

    assert_eq!(builder.degree, 3);
    assert_relative_eq!(builder.tolerance, 0.001);
    assert_eq!(builder.max_iterations, 20);
    assert!(builder.smoothing_factor.is_none());
    assert!(!builder.return_residuals);
}

/// Test conversion to each adapter.
///
/// Verifies that all adapters build with default options.
#[test]
fn test_builder_converts_to_adapters() {
    assert!(Spline::<f64>::new().adapter(Smoothing).build().is_ok());
    assert!(Spline::<f64>::new().adapter(FixedKnots).build().is_ok());
    assert!(Spline::<f64>::new().adapter(Resumable).build().is_ok());
}

/// Test the default smoothing factor.
///
/// Verifies that `s` resolves to the number of points.
#[test]
fn test_default_smoothing_factor() {
    let (x, y) = wave(33);
    let result = Spline::new()
        .adapter(Smoothing)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(result.smoothing_factor, 33.0);
    assert_eq!(result.status, FitStatus::Polynomial);
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test duplicate parameters.
///
/// Verifies that setting an option twice fails at build time.
#[test]
fn test_duplicate_parameter() {
    let res = Spline::<f64>::new()
        .degree(3)
        .degree(2)
        .adapter(Smoothing)
        .build();
    assert_eq!(
        res.unwrap_err(),
        SplineError::DuplicateParameter { parameter: "degree" }
    );

    let res = Spline::<f64>::new()
        .interior_knots(&[1.0])
        .interior_knots(&[2.0])
        .adapter(FixedKnots)
        .build();
    assert_eq!(
        res.unwrap_err(),
        SplineError::DuplicateParameter {
            parameter: "interior_knots"
        }
    );
}

/// Test adapter setters.
///
/// Verifies that setting an option on the adapter builder overrides the generic one.
#[test]
fn test_adapter_setter_overrides() {
    let builder = Spline::<f64>::new()
        .smoothing_factor(1.0)
        .adapter(Smoothing)
        .smoothing_factor(2.0);

    assert_eq!(builder.smoothing_factor, Some(2.0));
    assert!(builder.build().is_ok());
}

/// Test interior knots on the smoothing adapter.
///
/// Verifies UnsupportedOption.
#[test]
fn test_unsupported_interior_knots() {
    let res = Spline::new()
        .interior_knots(&[1.0, 2.0])
        .adapter(Smoothing)
        .build();

    assert_eq!(
        res.unwrap_err(),
        SplineError::UnsupportedOption {
            adapter: "Smoothing",
            option: "interior_knots"
        }
    );
}

/// Test adaptive options on the fixed-knot adapter.
///
/// Verifies UnsupportedOption for each of them.
#[test]
fn test_unsupported_adaptive_options() {
    let cases = [
        (Spline::<f64>::new().smoothing_factor(1.0), "smoothing_factor"),
        (Spline::<f64>::new().tolerance(0.01), "tolerance"),
        (Spline::<f64>::new().max_iterations(5), "max_iterations"),
    ];

    for (builder, option) in cases {
        let err = builder.adapter(FixedKnots).build().unwrap_err();
        assert_eq!(
            err,
            SplineError::UnsupportedOption {
                adapter: "FixedKnots",
                option
            }
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }
}

/// Test the degree range.
///
/// Verifies that degrees 0 and 6 are rejected and 1 to 5 accepted.
#[test]
fn test_degree_range() {
    for k in [0, 6] {
        let res = Spline::<f64>::new().degree(k).adapter(Smoothing).build();
        assert_eq!(res.unwrap_err(), SplineError::InvalidDegree(k));

        let res = Spline::<f64>::new().degree(k).adapter(FixedKnots).build();
        assert_eq!(res.unwrap_err(), SplineError::InvalidDegree(k));
    }
    for k in 1..=5 {
        assert!(Spline::<f64>::new().degree(k).adapter(Smoothing).build().is_ok());
    }
}

/// Test the numeric parameter ranges.
///
/// Verifies smoothing factor, tolerance, and iteration checks.
#[test]
fn test_parameter_ranges() {
    let res = Spline::new().smoothing_factor(-0.5).adapter(Smoothing).build();
    assert_eq!(res.unwrap_err(), SplineError::InvalidSmoothingFactor(-0.5));

    let res = Spline::new().tolerance(0.0).adapter(Smoothing).build();
    assert_eq!(res.unwrap_err(), SplineError::InvalidTolerance(0.0));

    let res = Spline::<f64>::new().max_iterations(0).adapter(Smoothing).build();
    assert_eq!(res.unwrap_err(), SplineError::InvalidIterations(0));

    assert!(Spline::new().smoothing_factor(0.0).adapter(Smoothing).build().is_ok());
}

// ============================================================================
// Fit Validation Tests
// ============================================================================

/// Test data errors.
///
/// Verifies errors for empty, mismatched, non-finite, and unsorted input.
#[test]
fn test_fit_input_errors() {
    let fitter = Spline::<f64>::new().adapter(Smoothing).build().unwrap();

    assert_eq!(fitter.fit(&[], &[]).unwrap_err(), SplineError::EmptyInput);
    assert_eq!(
        fitter.fit(&[0.0, 1.0, 2.0, 3.0, 4.0], &[1.0; 4]).unwrap_err(),
        SplineError::MismatchedInputs {
            x_len: 5,
            other_len: 4
        }
    );

    let x = [0.0, 1.0, 2.0, f64::NAN, 4.0];
    assert!(matches!(
        fitter.fit(&x, &[1.0; 5]),
        Err(SplineError::InvalidNumericValue(_))
    ));

    let x = [0.0, 1.0, 1.0, 3.0, 4.0];
    assert_eq!(
        fitter.fit(&x, &[1.0; 5]).unwrap_err(),
        SplineError::UnsortedAbscissas { index: 2 }
    );
}

/// Test a domain not covering the data.
///
/// Verifies InvalidDomain.
#[test]
fn test_fit_invalid_domain() {
    let (x, y) = wave(20);
    let res = Spline::new()
        .domain(0.5, 10.0)
        .adapter(Smoothing)
        .build()
        .unwrap()
        .fit(&x, &y);

    assert!(matches!(res, Err(SplineError::InvalidDomain { .. })));
}

/// Test a weight vector of the wrong length.
///
/// Verifies MismatchedInputs on weighted fits.
#[test]
fn test_fit_weight_length() {
    let (x, y) = wave(20);
    let res = Spline::new()
        .adapter(Smoothing)
        .build()
        .unwrap()
        .fit_weighted(&x, &y, &[1.0; 19]);

    assert_eq!(
        res.unwrap_err(),
        SplineError::MismatchedInputs {
            x_len: 20,
            other_len: 19
        }
    );
}

/// Test error classification.
///
/// Verifies that error kinds separate input problems from numerical failures.
#[test]
fn test_error_kinds() {
    assert_eq!(SplineError::EmptyInput.kind(), ErrorKind::Validation);
    assert_eq!(
        SplineError::SchoenbergWhitney { basis: 2 }.kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        SplineError::SingularSystem { row: 3 }.kind(),
        ErrorKind::AlgorithmInvariant
    );
    assert_eq!(
        SplineError::ConvexityViolated {
            iteration: 4,
            p: 1.0
        }
        .kind(),
        ErrorKind::AlgorithmInvariant
    );
}

// ============================================================================
// Adapter Propagation Tests
// ============================================================================

/// Test option propagation to the smoothing adapter.
///
/// Verifies degree, domain, and output options reach the fit.
#[test]
fn test_smoothing_propagation() {
    let (x, y) = wave(40);
    let result = Spline::new()
        .degree(2)
        .smoothing_factor(0.3)
        .domain(-1.0, 11.0)
        .return_residuals()
        .return_diagnostics()
        .adapter(Smoothing)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    assert_eq!(result.degree, 2);
    assert_eq!(result.domain(), (-1.0, 11.0));
    assert_eq!(result.smoothing_factor, 0.3);
    assert!(result.residuals.is_some());
    assert!(result.has_diagnostics());
}

/// Test option propagation to the fixed-knot adapter.
///
/// Verifies the interior knots and storage reach the fit.
#[test]
fn test_fixed_knot_propagation() {
    let (x, y) = wave(40);
    let fitter = Spline::new()
        .interior_knots(&[3.0, 6.0])
        .knot_storage(9)
        .adapter(FixedKnots)
        .build()
        .unwrap();

    assert_eq!(
        fitter.fit(&x, &y).unwrap_err(),
        SplineError::InsufficientStorage { got: 9, min: 10 }
    );

    let result = Spline::new()
        .interior_knots(&[3.0, 6.0])
        .adapter(FixedKnots)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    assert_eq!(result.interior_knots(), &[3.0, 6.0]);
    assert_eq!(result.status, FitStatus::LeastSquares);
    assert_eq!(result.smoothing_factor, result.residual);
}

/// Test a small tolerance and iteration cap.
///
/// Verifies that an exhausted penalty search is a status, not an error.
#[test]
fn test_iteration_cap_status() {
    let (x, y) = wave(60);
    let result = Spline::new()
        .smoothing_factor(0.1)
        .tolerance(1e-9)
        .max_iterations(1)
        .adapter(Smoothing)
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();

    if result.penalty.is_some() {
        assert_eq!(result.status, FitStatus::NotConverged);
        assert_eq!(result.penalty_iterations, Some(1));
        assert!(!result.status.is_success());
    }
}
