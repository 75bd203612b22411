//! Smoothing Spline Examples
//!
//! This example walks through the main fitting scenarios:
//! - Smoothing noisy data with a chosen smoothing factor
//! - Interpolation (`s = 0`) and the polynomial limit (large `s`)
//! - Least-squares fits on fixed knots
//! - Resumable sessions that refine the fit step by step
//! - Derivatives and diagnostics

use splinefit::prelude::*;

fn main() -> Result<(), SplineError> {
    println!("{}", "=".repeat(80));
    println!("Smoothing Spline - Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_smoothing()?;
    example_2_interpolation_and_polynomial()?;
    example_3_fixed_knots()?;
    example_4_resumable_session()?;
    example_5_derivatives()?;

    Ok(())
}

/// Deterministic noisy sine data.
fn noisy_sine(m: usize) -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..m).map(|i| i as f64 * 6.0 / (m - 1) as f64).collect();
    let y = x
        .iter()
        .enumerate()
        .map(|(i, &v)| v.sin() + 0.05 * ((i * 37 % 11) as f64 - 5.0) / 5.0)
        .collect();
    (x, y)
}

/// Example 1: Basic Smoothing
/// Fits a cubic smoothing spline whose residual matches the smoothing factor
fn example_1_basic_smoothing() -> Result<(), SplineError> {
    println!("Example 1: Basic Smoothing");
    println!("{}", "-".repeat(80));

    let (x, y) = noisy_sine(50);

    let model = Spline::new()
        .degree(3)
        .smoothing_factor(0.05)
        .return_residuals()
        .return_diagnostics()
        .adapter(Smoothing)
        .build()?;

    let result = model.fit(&x, &y)?;
    println!("{}", result);
    println!("Interior knots: {:?}", result.interior_knots());
    println!();
    Ok(())
}

/// Example 2: The two limits of the smoothing factor
fn example_2_interpolation_and_polynomial() -> Result<(), SplineError> {
    println!("Example 2: Interpolation and Polynomial Limits");
    println!("{}", "-".repeat(80));

    let (x, y) = noisy_sine(15);

    let interp = Spline::new()
        .smoothing_factor(0.0)
        .adapter(Smoothing)
        .build()?
        .fit(&x, &y)?;
    println!(
        "s = 0:    status={}, knots={}, residual={:.3e}",
        interp.status,
        interp.knots.len(),
        interp.residual
    );

    let poly = Spline::new()
        .smoothing_factor(1.0e6)
        .adapter(Smoothing)
        .build()?
        .fit(&x, &y)?;
    println!(
        "s = 1e6:  status={}, knots={}, residual={:.4}",
        poly.status,
        poly.knots.len(),
        poly.residual
    );
    println!();
    Ok(())
}

/// Example 3: Least-squares spline on caller-supplied knots
fn example_3_fixed_knots() -> Result<(), SplineError> {
    println!("Example 3: Fixed Knots");
    println!("{}", "-".repeat(80));

    let (x, y) = noisy_sine(40);

    let model = Spline::new()
        .interior_knots(&[1.5, 3.0, 4.5])
        .return_diagnostics()
        .adapter(FixedKnots)
        .build()?;

    let result = model.fit(&x, &y)?;
    println!("{}", result);
    println!();
    Ok(())
}

/// Example 4: Resumable session
/// Each fit continues knot placement from the previous one
fn example_4_resumable_session() -> Result<(), SplineError> {
    println!("Example 4: Resumable Session");
    println!("{}", "-".repeat(80));

    let (x, y) = noisy_sine(80);

    let mut session = Spline::new().adapter(Resumable).build()?;
    for s in [10.0, 1.0, 0.2, 0.1] {
        session.set_smoothing_factor(s)?;
        let result = session.fit(&x, &y)?;
        println!(
            "s = {:>5}: knots={:>3}, residual={:.5}, status={}",
            s,
            result.knots.len(),
            result.residual,
            result.status
        );
    }
    println!();
    Ok(())
}

/// Example 5: Evaluating derivatives of a fitted spline
fn example_5_derivatives() -> Result<(), SplineError> {
    println!("Example 5: Derivatives");
    println!("{}", "-".repeat(80));

    let (x, y) = noisy_sine(60);

    let result = Spline::new()
        .smoothing_factor(0.05)
        .adapter(Smoothing)
        .build()?
        .fit(&x, &y)?;

    println!("{:>8} {:>12} {:>12} {:>12}", "X", "s(x)", "s'(x)", "cos(x)");
    for &t in &[0.5, 1.5, 2.5, 3.5, 4.5, 5.5] {
        println!(
            "{:>8.2} {:>12.6} {:>12.6} {:>12.6}",
            t,
            result.evaluate(t),
            result.derivative(t, 1),
            f64::cos(t)
        );
    }
    println!();
    Ok(())
}
