use crate::MK_TOKEN;

use super::tokens::{lookup_ident, Token, TokenKind};

/// Pull-based tokenizer over a borrowed source string.
///
/// The cursor walks the source one code point at a time. `position` is the
/// byte offset of `ch`, `read_position` the byte offset just past it.
pub struct Lexer<'a> {
    source: &'a str,
    position: usize,
    read_position: usize,
    ch: char,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        let mut lexer = Lexer {
            source,
            position: 0,
            read_position: 0,
            ch: '\0',
            finished: false,
        };
        lexer.read_char();
        lexer
    }

    /// Scans and returns the next token.
    ///
    /// Never fails: unknown code points come back as `Illegal` tokens, and
    /// once the input is exhausted every call returns `EOF`.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            '=' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::Equals, "==")
                } else {
                    MK_TOKEN!(TokenKind::Assignment, self.ch)
                }
            }
            '!' => {
                if self.peek_char() == '=' {
                    self.read_char();
                    MK_TOKEN!(TokenKind::NotEquals, "!=")
                } else {
                    MK_TOKEN!(TokenKind::Not, self.ch)
                }
            }
            '+' => MK_TOKEN!(TokenKind::Plus, self.ch),
            '-' => MK_TOKEN!(TokenKind::Dash, self.ch),
            '*' => MK_TOKEN!(TokenKind::Star, self.ch),
            '/' => MK_TOKEN!(TokenKind::Slash, self.ch),
            '<' => MK_TOKEN!(TokenKind::Less, self.ch),
            '>' => MK_TOKEN!(TokenKind::Greater, self.ch),
            ',' => MK_TOKEN!(TokenKind::Comma, self.ch),
            ';' => MK_TOKEN!(TokenKind::Semicolon, self.ch),
            '(' => MK_TOKEN!(TokenKind::OpenParen, self.ch),
            ')' => MK_TOKEN!(TokenKind::CloseParen, self.ch),
            '{' => MK_TOKEN!(TokenKind::OpenCurly, self.ch),
            '}' => MK_TOKEN!(TokenKind::CloseCurly, self.ch),
            '\0' => MK_TOKEN!(TokenKind::EOF, ""),
            c if is_letter(c) => {
                // Multi-character branches leave the cursor on the first
                // code point past the lexeme, so they return early.
                let literal = self.read_identifier();
                return MK_TOKEN!(lookup_ident(literal), literal);
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_number();
                return MK_TOKEN!(TokenKind::Integer, literal);
            }
            c => MK_TOKEN!(TokenKind::Illegal, c),
        };

        self.read_char();
        token
    }

    fn read_char(&mut self) {
        self.position = self.read_position;

        match self.source[self.read_position..].chars().next() {
            Some(c) => {
                self.ch = c;
                self.read_position += c.len_utf8();
            }
            None => self.ch = '\0',
        }
    }

    fn peek_char(&self) -> char {
        self.source[self.read_position..]
            .chars()
            .next()
            .unwrap_or('\0')
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.read_char();
        }
    }

    fn read_identifier(&mut self) -> &'a str {
        let source = self.source;
        let start = self.position;
        while is_letter(self.ch) {
            self.read_char();
        }
        &source[start..self.position]
    }

    fn read_number(&mut self) -> &'a str {
        let source = self.source;
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.read_char();
        }
        &source[start..self.position]
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            self.finished = true;
        }
        Some(token)
    }
}

// Digits are not identifier characters, so `x1` scans as `x` then `1`.
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Tokenizes the whole source. The last token is always the single `EOF`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source).collect();
    tracing::trace!(count = tokens.len(), "tokenized source");
    tokens
}
