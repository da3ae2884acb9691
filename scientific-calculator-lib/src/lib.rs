//! # Scientific calculator expression engine
//!
//! Evaluates infix expressions the way a hand-held scientific calculator
//! does: a tokenizer turns the input text into a flat token sequence, and a
//! recursive-descent evaluator reduces that sequence to a single `f64` in one
//! pass, without building an intermediate syntax tree.
//!
//! Operators, starting from highest priority:
//! * `!` - postfix factorial
//! * `^` - power (right-associative, so `2^3^2` is `2^(3^2)`)
//! * `*`, `/`, `%` - multiplication, division, remainder
//! * `+`, `-` - addition, subtraction
//!
//! The display glyphs `×` and `÷` are accepted and normalized during
//! tokenization. A `-` directly after an operator or an opening parenthesis
//! (or at the very start) is read as the sign of the following number.
//!
//! The list of supported functions:
//! * trigonometric functions (including inverted ones): sin, cos, tan,
//!   asin, acos, atan - these honor the configured [angle unit]
//! * hyperbolic functions: sinh, cosh, tanh - always radians
//! * logarithms: log (base 10), ln, log2
//! * roots: sqrt, cbrt
//! * rounding: ceil, floor, round
//! * absolute value and exponential: abs, exp
//!
//! Predefined constants:
//! * `pi` (or `π`) - 3.14159...
//! * `e` - 2.71828... (only when not immediately followed by `(`, so the
//!   `exp` function stays unambiguous)
//!
//! The engine never returns a structured error: undefined operations
//! propagate as `NaN` or `±∞` per IEEE-754, and malformed fragments (a bare
//! function name, an expression that ends early) degrade to `0`. Callers
//! that need a hard failure check the result before display;
//! [`engine::format::format_number`] renders `NaN` as `"Error"`.
//!
//! [angle unit]: engine::functions::AngleUnit

pub mod engine;
