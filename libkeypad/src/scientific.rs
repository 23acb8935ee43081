//! Scientific function evaluator
//!
//! Stateless unary transforms of the displayed value. Each function checks
//! its domain before computing, so nothing here can panic or produce a
//! NaN from a bad argument. Angles are in degrees.

use crate::config::EngineConfig;
use crate::error::CalcError;
use crate::readout::round_fixed;
use crate::types::ScientificFn;

/// Apply `function` to `x`, rounded to `options.precision` decimal places.
pub fn evaluate(function: ScientificFn, x: f64, options: &EngineConfig) -> Result<f64, CalcError> {
    let result = match function {
        ScientificFn::Sin => x.to_radians().sin(),
        ScientificFn::Cos => x.to_radians().cos(),
        ScientificFn::Tan => {
            if (x % 180.0).abs() == 90.0 {
                return Err(CalcError::Undefined);
            }
            x.to_radians().tan()
        }
        ScientificFn::Sqrt => {
            if x < 0.0 {
                return Err(CalcError::Domain);
            }
            x.sqrt()
        }
        ScientificFn::Square => x.powi(2),
        ScientificFn::Log10 => {
            if x <= 0.0 {
                return Err(CalcError::Domain);
            }
            x.log10()
        }
        ScientificFn::Ln => {
            if x <= 0.0 {
                return Err(CalcError::Domain);
            }
            x.ln()
        }
        ScientificFn::Factorial => factorial(x, options.max_factorial)?,
        ScientificFn::Reciprocal => {
            if x == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            1.0 / x
        }
        ScientificFn::Exp => x.exp(),
    };

    Ok(round_fixed(result, options.precision))
}

/// n! for a non-negative integer n no larger than `max`.
fn factorial(x: f64, max: u32) -> Result<f64, CalcError> {
    if x < 0.0 || x.fract() != 0.0 || !x.is_finite() {
        return Err(CalcError::Domain);
    }
    if x > f64::from(max) {
        return Err(CalcError::Overflow);
    }

    let n = x as u32;
    let mut product = 1.0_f64;
    for k in 2..=n {
        product *= f64::from(k);
        if !product.is_finite() {
            return Err(CalcError::Overflow);
        }
    }
    Ok(product)
}
