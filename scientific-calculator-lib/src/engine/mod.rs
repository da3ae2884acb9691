pub mod evaluator;
pub mod format;
pub mod functions;
pub mod history;
pub mod lexer;
pub mod token;

use crate::debug;
use crate::engine::functions::AngleUnit;
use crate::engine::token::Token;
use anyhow::{Context, Result};
use string_builder::Builder;

/// Evaluates the given expression to a single number.
///
/// Tokenization and evaluation run in one pass over the input; the call is
/// pure, so identical inputs always produce bit-identical results. The
/// result may be `NaN` or `±∞`: the engine signals undefined mathematics
/// through the number itself rather than through an error (see
/// [`format::format_number`] for the display mapping).
///
/// # Arguments
///
/// * `expression`: A text expression in infix format. The display glyphs
///   `×`, `÷` and `π` are accepted directly; a display minus `−` must be
///   normalized to `-` by the caller.
/// * `angle_unit`: The unit trigonometric functions work in.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use scientific_calculator::engine::evaluate_expression;
/// use scientific_calculator::engine::functions::AngleUnit;
///
/// let result = evaluate_expression("2+3*4", AngleUnit::Degrees);
/// assert_eq!(result, 14.0);
/// ```
pub fn evaluate_expression(expression: &str, angle_unit: AngleUnit) -> f64 {
    let tokens = lexer::tokenize(expression);
    debug!(&tokens);
    evaluator::evaluate(&tokens, angle_unit)
}

/// Evaluates the given expression and formats the result for display.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `angle_unit`: The unit trigonometric functions work in.
///
/// returns: The display text of the result; `"Error"` when the expression
/// has no defined value.
///
/// # Examples
///
/// ```
/// use scientific_calculator::engine::calculate;
/// use scientific_calculator::engine::functions::AngleUnit;
///
/// assert_eq!(calculate("2^3^2", AngleUnit::Degrees), "512");
/// assert_eq!(calculate("0/0", AngleUnit::Degrees), "Error");
/// ```
pub fn calculate(expression: &str, angle_unit: AngleUnit) -> String {
    format::format_number(evaluate_expression(expression, angle_unit))
}

/// Pretty-prints the given tokens with conventional spacing: binary
/// operators are padded, while `^`, `!` and parentheses stay tight.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use scientific_calculator::engine::{lexer, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = lexer::tokenize("2+3*4");
/// assert_eq!(tokens_to_string(&tokens)?, "2 + 3 * 4");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator('+' | '-' | '*' | '/' | '%') => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {
        ()
    };
}
