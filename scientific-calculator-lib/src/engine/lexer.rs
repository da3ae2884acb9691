use crate::engine::token::Token;
use itertools::Itertools;
use std::f64::consts;

/// Converts the given expression text into a flat sequence of tokens.
///
/// Tokenization never fails: characters that fit no rule are silently
/// skipped, so the resulting token sequence may describe a shorter
/// expression than the user typed.
///
/// A `-` found at the start of the expression, directly after another
/// operator or directly after `(` is absorbed into the following number
/// literal; there is no separate unary-minus token.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent tokens.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let stripped: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
    let mut characters = stripped.chars().peekable();
    let mut tokens = Vec::new();

    while let Some(&character) = characters.peek() {
        if is_number_start(character) || (character == '-' && minus_starts_number(&tokens)) {
            let mut literal = String::new();
            if character == '-' {
                literal.push('-');
                characters.next();
            }
            literal.extend(characters.peeking_take_while(|c| is_number_part(*c)));
            tokens.push(Token::Number(parse_number_prefix(&literal)));
        } else if character.is_ascii_alphabetic() || character == 'π' {
            let name: String = characters
                .peeking_take_while(|c| c.is_ascii_alphanumeric() || *c == 'π')
                .collect();
            // The constants resolve to number tokens; every other identifier
            // becomes a function name, looked up at evaluation time.
            if name == "pi" || name == "π" {
                tokens.push(Token::Number(consts::PI));
            } else if name == "e" && characters.peek() != Some(&'(') {
                tokens.push(Token::Number(consts::E));
            } else {
                tokens.push(Token::Function(name));
            }
        } else if character == '(' {
            characters.next();
            tokens.push(Token::OpenParenthesis);
        } else if character == ')' {
            characters.next();
            tokens.push(Token::CloseParenthesis);
        } else if let Some(operator) = normalize_operator(character) {
            characters.next();
            tokens.push(Token::Operator(operator));
        } else {
            characters.next(); // skip unknown
        }
    }

    tokens
}

fn is_number_start(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

fn is_number_part(character: char) -> bool {
    character.is_ascii_digit() || character == '.' || character == 'e' || character == 'E'
}

/// A `-` reads as the sign of a number literal only when no left operand can
/// precede it.
fn minus_starts_number(tokens: &[Token]) -> bool {
    match tokens.last() {
        None => true,
        Some(Token::Operator(_)) | Some(Token::OpenParenthesis) => true,
        Some(_) => false,
    }
}

fn normalize_operator(character: char) -> Option<char> {
    match character {
        '×' => Some('*'),
        '÷' => Some('/'),
        '+' | '-' | '*' | '/' | '^' | '%' | '!' => Some(character),
        _ => None,
    }
}

/// Converts the greedily consumed literal text to a number using
/// longest-valid-prefix semantics: `1.2.3` reads as `1.2`, and a literal
/// with no valid prefix (such as a lone `-`) reads as `NaN`.
fn parse_number_prefix(literal: &str) -> f64 {
    // The literal only ever contains `-`, digits, `.`, `e` and `E`, so byte
    // slicing cannot split a character.
    let mut end = literal.len();
    while end > 0 {
        if let Ok(value) = literal[..end].parse::<f64>() {
            return value;
        }
        end -= 1;
    }
    f64::NAN
}
