//! Tokenizer for normalised arithmetic input.
//!
//! Produces the flat token stream consumed by the parser. Input is expected
//! to have been normalised already (display operators translated, inline
//! percentages rewritten), so only digits, `.`, `+ - * /` and parentheses are
//! accepted. Whitespace is skipped.

use crate::error::CalcError;

/// Lexical atoms of an arithmetic expression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Scan `input` into a token list.
///
/// Number literals are a run of digits with at most one `.` (`12`, `1.5`,
/// `.5`, `5.`). A second `.` starts a new literal, which the parser then
/// rejects as a trailing token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, CalcError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let token = match ch {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            c if c.is_whitespace() => continue,
            c if c.is_ascii_digit() || c == '.' => {
                let mut end = start + c.len_utf8();
                let mut seen_dot = c == '.';

                while let Some(&(idx, next)) = chars.peek() {
                    if next == '.' {
                        if seen_dot {
                            break;
                        }
                        seen_dot = true;
                    } else if !next.is_ascii_digit() {
                        break;
                    }
                    end = idx + next.len_utf8();
                    chars.next();
                }

                let literal = &input[start..end];
                let value = literal
                    .parse::<f64>()
                    .map_err(|_| CalcError::parse(format!("invalid number `{}`", literal)))?;
                Token::Number(value)
            }
            other => return Err(CalcError::Lex(other)),
        };

        tokens.push(token);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operators_and_numbers() {
        let tokens = tokenize("3*(4+2.5)").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Number(3.0),
                Token::Star,
                Token::LParen,
                Token::Number(4.0),
                Token::Plus,
                Token::Number(2.5),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped() {
        assert_eq!(
            tokenize(" 1 -  2 ").unwrap(),
            vec![Token::Number(1.0), Token::Minus, Token::Number(2.0)]
        );
    }

    #[test]
    fn test_leading_and_trailing_dot() {
        assert_eq!(tokenize(".5").unwrap(), vec![Token::Number(0.5)]);
        assert_eq!(tokenize("5.").unwrap(), vec![Token::Number(5.0)]);
    }

    #[test]
    fn test_second_dot_starts_new_literal() {
        assert_eq!(
            tokenize("1.2.3").unwrap(),
            vec![Token::Number(1.2), Token::Number(0.3)]
        );
    }

    #[test]
    fn test_lone_dot_rejected() {
        assert!(matches!(tokenize("."), Err(CalcError::Parse(_))));
    }

    #[test]
    fn test_illegal_character() {
        assert_eq!(tokenize("2^3"), Err(CalcError::Lex('^')));
        assert_eq!(tokenize("50%"), Err(CalcError::Lex('%')));
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
    }
}
