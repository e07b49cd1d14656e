use super::token::{Bracket, Token, TokenKind};
use crate::error::Error;
use ir::Operator;
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

pub struct Lexer<'a> {
    iter: Peekable<Enumerate<Chars<'a>>>,
    sigil: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(code: &'a str) -> Self {
        Self {
            iter: code.chars().enumerate().peekable(),
            sigil: false,
        }
    }

    /// Reject identifiers without the leading `$`
    pub fn require_sigil(mut self, sigil: bool) -> Self {
        self.sigil = sigil;
        self
    }
}

// ----------------------------------------------------------------------------
// Helpers
// ----------------------------------------------------------------------------

impl<'a> Lexer<'a> {
    fn peek_nth(&self, n: usize) -> Option<(usize, char)> {
        self.iter.clone().nth(n)
    }
    fn consume(&mut self) -> Option<(usize, char)> {
        self.iter.next()
    }
}

// ----------------------------------------------------------------------------
// Lexer
// ----------------------------------------------------------------------------

impl<'a> Lexer<'a> {
    pub fn parse(mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = Vec::new();
        while let Some((pos, ch0)) = self.peek_nth(0) {
            // 0. Skip whitespaces
            if ch0.is_whitespace() {
                self.consume();
                continue;
            }

            // 1. Double character token
            if let Some((_, ch1)) = self.peek_nth(1) {
                if let Some(kind) = double_char_token(ch0, ch1) {
                    self.consume();
                    self.consume();
                    tokens.push(Token::new(kind, pos));
                    continue;
                }
            }

            // 2. Single character token
            if let Some(kind) = single_char_token(ch0) {
                self.consume();
                tokens.push(Token::new(kind, pos));
                continue;
            }

            // 3. Number literal
            let leading_dot = ch0 == '.' && matches!(self.peek_nth(1), Some((_, c)) if c.is_ascii_digit());
            if ch0.is_ascii_digit() || leading_dot {
                tokens.push(Token::new(self.parse_number(pos)?, pos));
                continue;
            }

            // 4. Identifier
            if ch0 == '$' {
                tokens.push(Token::new(self.parse_sigil_ident(pos)?, pos));
                continue;
            }
            if ch0.is_alphabetic() || ch0 == '_' {
                let ident = self.parse_word();
                if self.sigil {
                    return Err(Error::MissingSigil(ident, pos));
                }
                tokens.push(Token::new(TokenKind::Ident(ident), pos));
                continue;
            }

            return Err(Error::UnexpectedChar(ch0, pos));
        }
        Ok(tokens)
    }

    // 123 | 123. | .123 | 123.45
    fn parse_number(&mut self, pos: usize) -> Result<TokenKind, Error> {
        let mut lexeme = String::new();
        let mut dot = false;
        while let Some((_, ch)) = self
            .iter
            .next_if(|(_, ch)| ch.is_ascii_digit() || (*ch == '.' && !dot))
        {
            dot |= ch == '.';
            lexeme.push(ch);
        }

        // A second decimal point
        if let Some((_, '.')) = self.iter.peek() {
            while let Some((_, ch)) = self
                .iter
                .next_if(|(_, ch)| ch.is_ascii_digit() || *ch == '.')
            {
                lexeme.push(ch);
            }
            return Err(Error::MalformedNumber(lexeme, pos));
        }
        Ok(TokenKind::Number(lexeme))
    }

    // "$" ( letter | "_" ) { letter | digit | "_" }
    fn parse_sigil_ident(&mut self, pos: usize) -> Result<TokenKind, Error> {
        self.consume(); // consume '$'
        match self.iter.peek() {
            Some(&(_, ch)) if ch.is_alphabetic() || ch == '_' => {
                let word = self.parse_word();
                Ok(TokenKind::Ident(format!("${word}")))
            }
            _ => Err(Error::MalformedIdent(pos)),
        }
    }

    fn parse_word(&mut self) -> String {
        let mut lexeme = String::new();
        while let Some((_, ch)) = self.iter.next_if(|(_, ch)| ch.is_alphanumeric() || *ch == '_') {
            lexeme.push(ch);
        }
        lexeme
    }
}

fn double_char_token(ch0: char, ch1: char) -> Option<TokenKind> {
    match (ch0, ch1) {
        ('*', '*') => Some(TokenKind::Op(Operator::Pow)),
        _ => None,
    }
}

fn single_char_token(ch: char) -> Option<TokenKind> {
    match ch {
        '+' => Some(TokenKind::Op(Operator::Add)),
        '-' => Some(TokenKind::Op(Operator::Sub)),
        '*' => Some(TokenKind::Op(Operator::Mul)),
        '/' => Some(TokenKind::Op(Operator::Div)),
        '^' => Some(TokenKind::Op(Operator::Pow)),
        '√' => Some(TokenKind::Op(Operator::Root)),
        '(' => Some(TokenKind::Open(Bracket::Paren)),
        ')' => Some(TokenKind::Close(Bracket::Paren)),
        '[' => Some(TokenKind::Open(Bracket::Square)),
        ']' => Some(TokenKind::Close(Bracket::Square)),
        '{' => Some(TokenKind::Open(Bracket::Curly)),
        '}' => Some(TokenKind::Close(Bracket::Curly)),
        _ => None,
    }
}
