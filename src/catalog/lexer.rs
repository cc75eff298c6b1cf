//! Lexer (tokenizer) for the level catalog language.

use crate::error::{EulerlineError, Result};

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token
    pub kind: TokenKind,
    /// The token's text (unquoted and unescaped for strings)
    pub text: String,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed)
    pub column: usize,
}

/// Token types in the catalog language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A bare word (hint step flags)
    Identifier,
    /// A non-negative integer
    Number,
    /// A directive (starts with '.')
    Directive,
    /// A double-quoted string
    String,
    /// Open parenthesis '('
    OpenParen,
    /// Close parenthesis ')'
    CloseParen,
    /// Newline
    Newline,
    /// End of file
    Eof,
}

/// Lexer for tokenizing catalog input.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Get the next token.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();

        let start_line = self.line;
        let start_column = self.column;
        let token = |kind, text: String| Token {
            kind,
            text,
            line: start_line,
            column: start_column,
        };

        let Some(&ch) = self.chars.peek() else {
            return Ok(token(TokenKind::Eof, String::new()));
        };

        match ch {
            '\n' => {
                self.advance();
                Ok(token(TokenKind::Newline, "\n".to_string()))
            }
            '.' => {
                self.advance();
                let name = self.read_word();
                if name.is_empty() {
                    return Err(EulerlineError::lexer(
                        start_line,
                        start_column,
                        "expected a directive name after '.'",
                    ));
                }
                Ok(token(TokenKind::Directive, format!(".{}", name)))
            }
            '(' => {
                self.advance();
                Ok(token(TokenKind::OpenParen, "(".to_string()))
            }
            ')' => {
                self.advance();
                Ok(token(TokenKind::CloseParen, ")".to_string()))
            }
            '"' => {
                self.advance();
                let text = self.read_string(start_line, start_column)?;
                Ok(token(TokenKind::String, text))
            }
            '0'..='9' => {
                let text = self.read_word();
                if !text.chars().all(|c| c.is_ascii_digit()) {
                    return Err(EulerlineError::lexer(
                        start_line,
                        start_column,
                        format!("invalid number '{}'", text),
                    ));
                }
                Ok(token(TokenKind::Number, text))
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let text = self.read_word();
                Ok(token(TokenKind::Identifier, text))
            }
            _ => Err(EulerlineError::lexer(
                start_line,
                start_column,
                format!("unexpected character '{}'", ch),
            )),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch == ' ' || ch == '\t' || ch == '\r' || ch == ',' {
                self.advance();
            } else if ch == '#' || ch == ';' {
                // Skip comment until end of line
                while let Some(&c) = self.chars.peek() {
                    if c == '\n' {
                        break;
                    }
                    self.advance();
                }
            } else {
                break;
            }
        }
    }

    fn read_word(&mut self) -> String {
        let mut text = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        text
    }

    fn read_string(&mut self, line: usize, column: usize) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.advance() {
                Some('"') => return Ok(text),
                Some('\\') => match self.advance() {
                    Some('n') => text.push('\n'),
                    Some(c @ ('"' | '\\')) => text.push(c),
                    Some(c) => {
                        return Err(EulerlineError::lexer(
                            self.line,
                            self.column - 1,
                            format!("unknown escape '\\{}'", c),
                        ));
                    }
                    None => break,
                },
                Some('\n') | None => break,
                Some(c) => text.push(c),
            }
        }
        Err(EulerlineError::lexer(line, column, "unterminated string"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut kinds = Vec::new();
        loop {
            let tok = lexer.next_token().unwrap();
            kinds.push(tok.kind);
            if tok.kind == TokenKind::Eof {
                return kinds;
            }
        }
    }

    #[test]
    fn test_lexer_level_header() {
        let mut lexer = Lexer::new(".level 12 \"The Fish\"");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Directive);
        assert_eq!(tok.text, ".level");

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::Number);
        assert_eq!(tok.text, "12");
        assert_eq!(tok.column, 8);

        let tok = lexer.next_token().unwrap();
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!(tok.text, "The Fish");
    }

    #[test]
    fn test_lexer_edge_list() {
        use TokenKind::*;
        assert_eq!(
            kinds(".edges (0 1), (1 2) # ring\n"),
            vec![
                Directive, OpenParen, Number, Number, CloseParen, OpenParen, Number, Number,
                CloseParen, Newline, Eof
            ]
        );
    }

    #[test]
    fn test_lexer_string_escapes() {
        let mut lexer = Lexer::new(r#""Say \"hi\"""#);
        assert_eq!(lexer.next_token().unwrap().text, "Say \"hi\"");
    }

    #[test]
    fn test_lexer_errors() {
        let mut lexer = Lexer::new("\n  \"open");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Newline);
        let err = lexer.next_token().unwrap_err();
        assert!(matches!(
            err,
            EulerlineError::LexerError { line: 2, column: 3, .. }
        ));

        assert!(Lexer::new("-1").next_token().is_err());
        assert!(Lexer::new("12a").next_token().is_err());
    }
}
