use crate::engine::functions::{apply_function, factorial, AngleUnit};
use crate::engine::token::Token;

/// The value of a reduced subexpression together with the index of the first
/// token the reduction did not consume. Threading the index through every
/// precedence level is what lets the parser evaluate during descent without
/// building a syntax tree.
struct ParseResult {
    value: f64,
    position: usize,
}

/// Evaluates a token sequence to a single number.
///
/// The evaluator never fails: mathematically undefined operations propagate
/// as `NaN` or `±∞`, and structurally malformed fragments (a token stream
/// that ends early, a function name without a call) degrade to `0`. Tokens
/// left over after the outermost expression has been reduced are ignored.
///
/// # Arguments
///
/// * `tokens`: The tokens to evaluate, in infix order.
/// * `angle_unit`: The unit trigonometric functions interpret their
///   arguments and results in.
///
/// returns: The value of the expression.
pub fn evaluate(tokens: &[Token], angle_unit: AngleUnit) -> f64 {
    parse_expression(tokens, 0, angle_unit).value
}

/// `E := T (('+' | '-') T)*`, left-associative.
fn parse_expression(tokens: &[Token], position: usize, angle_unit: AngleUnit) -> ParseResult {
    let mut left = parse_term(tokens, position, angle_unit);
    while let Some(Token::Operator(operator @ ('+' | '-'))) = tokens.get(left.position) {
        let right = parse_term(tokens, left.position + 1, angle_unit);
        let value = match *operator {
            '+' => left.value + right.value,
            _ => left.value - right.value,
        };
        left = ParseResult {
            value,
            position: right.position,
        };
    }
    left
}

/// `T := P (('*' | '/' | '%') P)*`, left-associative.
fn parse_term(tokens: &[Token], position: usize, angle_unit: AngleUnit) -> ParseResult {
    let mut left = parse_power(tokens, position, angle_unit);
    while let Some(Token::Operator(operator @ ('*' | '/' | '%'))) = tokens.get(left.position) {
        let right = parse_power(tokens, left.position + 1, angle_unit);
        let value = match *operator {
            '*' => left.value * right.value,
            '/' => left.value / right.value,
            _ => left.value % right.value,
        };
        left = ParseResult {
            value,
            position: right.position,
        };
    }
    left
}

/// `P := U ('^' P)? ('!')*`.
///
/// The power is right-associative through the recursion on the exponent.
/// Because that recursion also runs the factorial loop, a `!` directly after
/// the exponent binds into it (`2^3!` is `2^(3!)`), while a `^` after a
/// factorial is never consumed (`2!^3` reduces to `2` and the tail is
/// ignored by the caller).
fn parse_power(tokens: &[Token], position: usize, angle_unit: AngleUnit) -> ParseResult {
    let mut base = parse_unary(tokens, position, angle_unit);
    if let Some(true) = tokens.get(base.position).map(|token| token.is_operator('^')) {
        let exponent = parse_power(tokens, base.position + 1, angle_unit); // right-associative
        base = ParseResult {
            value: base.value.powf(exponent.value),
            position: exponent.position,
        };
    }
    // Postfix factorial
    while let Some(true) = tokens.get(base.position).map(|token| token.is_operator('!')) {
        base = ParseResult {
            value: factorial(base.value),
            position: base.position + 1,
        };
    }
    base
}

/// `U := NUMBER | FUNCTION '(' E ')' | '(' E ')' | FUNCTION`.
///
/// A bare function name and a missing token both degrade to `0` rather than
/// raising; the closing parenthesis of a call or group is skipped by
/// position without being checked.
fn parse_unary(tokens: &[Token], position: usize, angle_unit: AngleUnit) -> ParseResult {
    match tokens.get(position) {
        None => ParseResult {
            value: 0.0,
            position,
        },
        Some(Token::Function(name)) => {
            if let Some(Token::OpenParenthesis) = tokens.get(position + 1) {
                let argument = parse_expression(tokens, position + 2, angle_unit);
                ParseResult {
                    value: apply_function(name, argument.value, angle_unit),
                    position: argument.position + 1, // skip ')'
                }
            } else {
                // Function without call parentheses degrades to zero.
                ParseResult {
                    value: 0.0,
                    position: position + 1,
                }
            }
        }
        Some(Token::OpenParenthesis) => {
            let inner = parse_expression(tokens, position + 1, angle_unit);
            ParseResult {
                value: inner.value,
                position: inner.position + 1, // skip ')'
            }
        }
        Some(Token::Number(value)) => ParseResult {
            value: *value,
            position: position + 1,
        },
        Some(_) => ParseResult {
            value: 0.0,
            position: position + 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn operator(symbol: char) -> Token {
        Token::Operator(symbol)
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 2 + 3 * 4
        let tokens = vec![
            number(2.0),
            operator('+'),
            number(3.0),
            operator('*'),
            number(4.0),
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 14.0);
    }

    #[test]
    fn parentheses_override_precedence() {
        // (2 + 3) * 4
        let tokens = vec![
            Token::OpenParenthesis,
            number(2.0),
            operator('+'),
            number(3.0),
            Token::CloseParenthesis,
            operator('*'),
            number(4.0),
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 20.0);
    }

    #[test]
    fn subtraction_is_left_associative() {
        // 10 - 4 - 3
        let tokens = vec![
            number(10.0),
            operator('-'),
            number(4.0),
            operator('-'),
            number(3.0),
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 3.0);
    }

    #[test]
    fn power_is_right_associative() {
        // 2 ^ 3 ^ 2 = 2 ^ 9
        let tokens = vec![
            number(2.0),
            operator('^'),
            number(3.0),
            operator('^'),
            number(2.0),
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 512.0);
    }

    #[test]
    fn factorial_applies_postfix() {
        // 5!
        let tokens = vec![number(5.0), operator('!')];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 120.0);
    }

    #[test]
    fn chained_factorials_apply_repeatedly() {
        // 3!! = 6!
        let tokens = vec![number(3.0), operator('!'), operator('!')];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 720.0);
    }

    #[test]
    fn factorial_in_exponent_binds_into_the_exponent() {
        // 2 ^ 3! = 2 ^ 6
        let tokens = vec![number(2.0), operator('^'), number(3.0), operator('!')];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 64.0);
    }

    #[test]
    fn power_after_factorial_is_not_consumed() {
        // 2! ^ 3 reduces to 2!; the trailing ^ 3 is ignored
        let tokens = vec![number(2.0), operator('!'), operator('^'), number(3.0)];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 2.0);
    }

    #[test]
    fn remainder_shares_precedence_with_multiplication() {
        // 10 % 3 * 2
        let tokens = vec![
            number(10.0),
            operator('%'),
            number(3.0),
            operator('*'),
            number(2.0),
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 2.0);
    }

    #[test]
    fn missing_right_operand_degrades_to_zero() {
        // 2 +
        let tokens = vec![number(2.0), operator('+')];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 2.0);
    }

    #[test]
    fn empty_token_sequence_evaluates_to_zero() {
        assert_eq!(evaluate(&[], AngleUnit::Radians), 0.0);
    }

    #[test]
    fn function_without_call_parentheses_degrades_to_zero() {
        let tokens = vec![Token::Function("sin".to_string())];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 0.0);
    }

    #[test]
    fn unterminated_group_still_evaluates() {
        // (2 + 3
        let tokens = vec![
            Token::OpenParenthesis,
            number(2.0),
            operator('+'),
            number(3.0),
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 5.0);
    }

    #[test]
    fn unknown_function_evaluates_to_nan() {
        // frobnicate(2)
        let tokens = vec![
            Token::Function("frobnicate".to_string()),
            Token::OpenParenthesis,
            number(2.0),
            Token::CloseParenthesis,
        ];

        assert!(evaluate(&tokens, AngleUnit::Radians).is_nan());
    }

    #[test]
    fn division_by_zero_follows_ieee_754() {
        let positive = vec![number(1.0), operator('/'), number(0.0)];
        let indeterminate = vec![number(0.0), operator('/'), number(0.0)];

        assert_eq!(evaluate(&positive, AngleUnit::Radians), f64::INFINITY);
        assert!(evaluate(&indeterminate, AngleUnit::Radians).is_nan());
    }

    #[test]
    fn trailing_tokens_after_the_expression_are_ignored() {
        // 4 ) ), stray closing parentheses after a complete expression
        let tokens = vec![
            number(4.0),
            Token::CloseParenthesis,
            Token::CloseParenthesis,
        ];

        assert_eq!(evaluate(&tokens, AngleUnit::Radians), 4.0);
    }
}
