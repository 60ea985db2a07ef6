//! Scanner implementation for the Lox language
//!
//! A single left-to-right pass over the source. Faults are collected as
//! [`ScanError`]s and scanning carries on with the next character.

use crate::error::{ScanError, ScanResult, SourceLocation};
use super::token::{Keyword, Token, TokenType};

/// Tokens and errors produced by one scan
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<ScanError>,
}

impl ScanOutput {
    /// Whether any error was recorded during the scan
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All-or-nothing view of the scan: the tokens if the scan was clean,
    /// otherwise only the errors.
    pub fn into_result(self) -> ScanResult<Vec<Token>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scanner for Lox source code
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<ScanError>,
    start: usize,
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    filename: Option<String>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(source: &str, filename: Option<&str>) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            filename: filename.map(|s| s.to_string()),
        }
    }

    /// Scan the whole source, returning every token and every error found
    pub fn scan_tokens(&mut self) -> ScanOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;

            if let Err(error) = self.scan_token() {
                self.errors.push(error);
            }
        }

        ScanOutput {
            tokens: std::mem::take(&mut self.tokens),
            errors: std::mem::take(&mut self.errors),
        }
    }

    /// Current line (1-based). After a scan this is one more than the
    /// number of newlines in the source.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scan a single token
    fn scan_token(&mut self) -> Result<(), ScanError> {
        let c = self.advance();

        match c {
            // Whitespace (skip). Newlines are counted in `advance`.
            ' ' | '\r' | '\t' | '\n' => Ok(()),

            // Single-character tokens
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            // One or two character tokens
            '!' => {
                let token_type = self.either('=', TokenType::BangEqual, TokenType::Bang);
                self.add_token(token_type)
            }
            '=' => {
                let token_type = self.either('=', TokenType::EqualEqual, TokenType::Equal);
                self.add_token(token_type)
            }
            '<' => {
                let token_type = self.either('=', TokenType::LessEqual, TokenType::Less);
                self.add_token(token_type)
            }
            '>' => {
                let token_type = self.either('=', TokenType::GreaterEqual, TokenType::Greater);
                self.add_token(token_type)
            }

            // Comments
            '/' => {
                if self.match_char('/') {
                    // Single-line comment: skip until end of line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                    Ok(())
                } else {
                    self.add_token(TokenType::Slash)
                }
            }

            '"' => self.scan_string(),

            c if c.is_ascii_digit() => self.scan_number(),

            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),

            _ => Err(ScanError::unexpected_character(c, self.start_location())),
        }
    }

    /// Scan a string literal. The lexeme excludes both quotes.
    fn scan_string(&mut self) -> Result<(), ScanError> {
        while self.peek() != '"' && !self.is_at_end() {
            self.advance();
        }

        if self.is_at_end() {
            return Err(ScanError::unterminated_string(self.start_location()));
        }

        // Consume closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.push_token(TokenType::String, value);
        Ok(())
    }

    /// Scan a number literal. A trailing '.' only belongs to the number when
    /// a digit follows it.
    fn scan_number(&mut self) -> Result<(), ScanError> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        self.add_token(TokenType::Number)
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) -> Result<(), ScanError> {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();

        let token_type = match Keyword::from_str(&lexeme) {
            Some(keyword) => TokenType::Keyword(keyword),
            None => TokenType::Identifier,
        };

        self.push_token(token_type, lexeme);
        Ok(())
    }

    /// Add a token whose lexeme is the current source run
    fn add_token(&mut self, token_type: TokenType) -> Result<(), ScanError> {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.push_token(token_type, lexeme);
        Ok(())
    }

    fn push_token(&mut self, token_type: TokenType, lexeme: String) {
        let location = self.start_location();
        self.tokens.push(Token::new(token_type, lexeme, location));
    }

    /// Advance to the next character, keeping line and column current
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        c
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Pick the two-character kind when `expected` follows, else the
    /// one-character kind
    fn either(&mut self, expected: char, matched: TokenType, otherwise: TokenType) -> TokenType {
        if self.match_char(expected) {
            matched
        } else {
            otherwise
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Location of the first character of the token being scanned
    fn start_location(&self) -> SourceLocation {
        SourceLocation::new(self.start_line, self.start_column, self.filename.clone())
    }
}
