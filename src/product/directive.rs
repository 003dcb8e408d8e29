use crate::foundation::error::{MockupError, MockupResult};
use crate::product::descriptor::{ProductCode, ProductDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Word(String),
    LParen,
    RParen,
    Comma,
    Eof,
}

fn is_word_byte(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

fn error_at(offset: usize, msg: impl std::fmt::Display) -> MockupError {
    MockupError::directive(format!("at byte {offset}: {msg}"))
}

pub(crate) fn lex(input: &str) -> MockupResult<Vec<Token>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;
        if is_word_byte(c) {
            while i < bytes.len() && is_word_byte(bytes[i] as char) {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Word(input[start..i].to_owned()),
                span: Span { start, end: i },
            });
            continue;
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            _ => return Err(error_at(start, format!("unexpected character '{c}'"))),
        };
        i += 1;
        out.push(Token {
            kind,
            span: Span { start, end: i },
        });
    }

    out.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len(),
            end: input.len(),
        },
    });
    Ok(out)
}

/// Parse `product(<code>,<params>)` or the short form `<code>(<params>)`.
///
/// Parameters are positional; an empty slot (`S(16,20,,150DW)`) is kept as an empty token so the
/// typed conversion can substitute its default.
pub(crate) fn parse_directive(src: &str) -> MockupResult<ProductDescriptor> {
    let tokens = lex(src.trim())?;
    let mut p = Parser { tokens, pos: 0 };
    let desc = p.parse_directive()?;
    p.expect(TokenKind::Eof)?;
    Ok(desc)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, kind: TokenKind) -> MockupResult<()> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(error_at(
                self.peek().span.start,
                format!("expected {kind:?}, found {:?}", self.peek().kind),
            ))
        }
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn parse_directive(&mut self) -> MockupResult<ProductDescriptor> {
        let head = self.bump();
        let TokenKind::Word(word) = head.kind else {
            return Err(error_at(head.span.start, "expected product code"));
        };

        self.expect(TokenKind::LParen)?;
        let code = if word == "product" {
            let t = self.bump();
            let TokenKind::Word(code) = t.kind else {
                return Err(error_at(t.span.start, "expected product code"));
            };
            let code = self.product_code(&code, t.span)?;
            self.expect(TokenKind::Comma)?;
            code
        } else {
            self.product_code(&word, head.span)?
        };

        let tokens = self.parse_params()?;
        self.expect(TokenKind::RParen)?;
        Ok(ProductDescriptor { code, tokens })
    }

    fn product_code(&self, code: &str, span: Span) -> MockupResult<ProductCode> {
        ProductCode::from_code(code)
            .ok_or_else(|| error_at(span.start, format!("unknown product code \"{code}\"")))
    }

    fn parse_params(&mut self) -> MockupResult<Vec<String>> {
        let mut out = Vec::new();
        loop {
            let value = match &self.peek().kind {
                TokenKind::Word(w) => {
                    let w = w.clone();
                    self.bump();
                    w
                }
                TokenKind::Comma | TokenKind::RParen => String::new(),
                other => {
                    return Err(error_at(
                        self.peek().span.start,
                        format!("expected parameter, found {other:?}"),
                    ));
                }
            };
            out.push(value);
            if !self.consume(TokenKind::Comma) {
                break;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/product/directive.rs"]
mod tests;
