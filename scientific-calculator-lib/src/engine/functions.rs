use anyhow::anyhow;
use std::f64::consts;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// The unit trigonometric functions interpret their arguments and results in.
///
/// Only `sin`/`cos`/`tan` and their inverses are affected; the hyperbolic
/// functions always work in radians.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Converts a value in this unit into radians.
    pub fn to_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value * consts::PI / 180.0,
            AngleUnit::Radians => value,
        }
    }

    /// Converts a value in radians into this unit.
    pub fn from_radians(&self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value * 180.0 / consts::PI,
            AngleUnit::Radians => value,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Degrees => write!(f, "deg"),
            AngleUnit::Radians => write!(f, "rad"),
        }
    }
}

impl str::FromStr for AngleUnit {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<AngleUnit, Self::Err> {
        match input {
            "deg" | "degrees" => Ok(AngleUnit::Degrees),
            "rad" | "radians" => Ok(AngleUnit::Radians),
            input => Err(anyhow!("unknown angle unit: {}", input)),
        }
    }
}

/// Computes `n!` over floats.
///
/// Returns `NaN` for negative or non-integer `n` and `∞` for any `n`
/// greater than 170, the largest argument whose factorial fits in an `f64`.
/// The magnitude check runs before the integrality check, so `170.5` is `∞`
/// rather than `NaN`.
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    if n > 170.0 {
        return f64::INFINITY;
    }
    if n.fract() != 0.0 {
        return f64::NAN;
    }
    let mut result = 1.0;
    let mut factor = 2.0;
    while factor <= n {
        result *= factor;
        factor += 1.0;
    }
    result
}

/// Applies the named function to the given argument.
///
/// Unknown names evaluate to `NaN` rather than raising; the result only
/// surfaces as an error once it is formatted for display.
pub fn apply_function(name: &str, argument: f64, angle_unit: AngleUnit) -> f64 {
    match name {
        "sin" => angle_unit.to_radians(argument).sin(),
        "cos" => angle_unit.to_radians(argument).cos(),
        "tan" => angle_unit.to_radians(argument).tan(),
        "asin" => angle_unit.from_radians(argument.asin()),
        "acos" => angle_unit.from_radians(argument.acos()),
        "atan" => angle_unit.from_radians(argument.atan()),
        "sinh" => argument.sinh(),
        "cosh" => argument.cosh(),
        "tanh" => argument.tanh(),
        "log" => argument.log10(),
        "ln" => argument.ln(),
        "log2" => argument.log2(),
        "sqrt" | "√" => argument.sqrt(),
        "cbrt" => argument.cbrt(),
        "abs" => argument.abs(),
        "ceil" => argument.ceil(),
        "floor" => argument.floor(),
        "round" => round_half_toward_positive(argument),
        "exp" => argument.exp(),
        _ => f64::NAN,
    }
}

/// Rounds to the nearest integer, with half-way cases toward positive
/// infinity. Comparing against the fractional part keeps values just below
/// one half from being carried up, which adding `0.5` before flooring
/// would do.
fn round_half_toward_positive(value: f64) -> f64 {
    if value - value.floor() < 0.5 {
        value.floor()
    } else {
        value.ceil()
    }
}
