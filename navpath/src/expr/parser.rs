//! Recursive-descent parser for C#-style lambda text.
//!
//! Only member reads, calls and lambdas keep their structure. Operators,
//! literals, casts and indexers collapse into [`Expr::Other`] carrying the
//! source text they were parsed from.

use crate::error::{Error, Result};
use crate::expr::lexer::{Lexer, Token, TokenKind};
use crate::expr::Expr;

/// Default nesting limit while parsing.
pub const DEFAULT_MAX_DEPTH: usize = 256;

const BINARY_OPERATORS: &[&str] = &[
    "==", "!=", "<", "<=", ">", ">=", "&&", "||", "??", "+", "-", "*", "/", "%", "&", "|",
];

const PREFIX_OPERATORS: &[&str] = &["!", "-", "+"];

/// Result of parsing a primary term.
///
/// Identifiers not bound by an enclosing lambda are kept apart so that
/// `Enumerable.Select(a, b)` parses as a static call.
enum Operand {
    Expr(Expr),
    Unbound(String),
}

impl Operand {
    fn into_expr(self) -> Expr {
        match self {
            Self::Expr(expr) => expr,
            Self::Unbound(name) => Expr::Other(name),
        }
    }
}

/// Parser over a tokenized source string.
pub struct Parser<'source> {
    source: &'source str,
    tokens: Vec<Token>,
    pos: usize,
    scope: Vec<String>,
    depth: usize,
    max_depth: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes `source` and prepares a parser.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on lexical errors.
    pub fn new(source: &'source str) -> Result<Self> {
        Ok(Self {
            source,
            tokens: Lexer::new(source).tokenize()?,
            pos: 0,
            scope: Vec::new(),
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        })
    }

    /// Sets the nesting limit.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parses the whole input as a single-parameter lambda.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the input is not a lambda or has trailing
    /// tokens, and [`Error::ExpressionTooDeep`] past the nesting limit.
    pub fn parse_lambda(mut self) -> Result<Expr> {
        if !self.at_lambda_start() {
            return Err(self.error_at(self.peek(), "expected a lambda such as 'o => o.Navigation'"));
        }
        let expr = self.lambda()?;
        self.expect_eof()?;
        Ok(expr)
    }

    /// Parses the whole input as an expression.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed input.
    pub fn parse_expression(mut self) -> Result<Expr> {
        let expr = self.expression()?;
        self.expect_eof()?;
        Ok(expr)
    }

    fn peek(&self) -> Token {
        self.peek_at(0)
    }

    fn peek_at(&self, n: usize) -> Token {
        let last = self.tokens.len() - 1;
        self.tokens[(self.pos + n).min(last)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek();
        if token.0 != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn text(&self, token: Token) -> &'source str {
        token.1.text(self.source)
    }

    fn is_symbol(&self, token: Token, symbol: &str) -> bool {
        token.0 == TokenKind::Symbol && self.text(token) == symbol
    }

    fn prev_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .map_or(0, |i| self.tokens[i].1.end)
    }

    fn error_at(&self, token: Token, message: &str) -> Error {
        let found = match token.0 {
            TokenKind::Eof => "end of input".to_string(),
            _ => format!("'{}'", self.text(token)),
        };
        Error::Parse {
            position: token.1.start,
            message: format!("{message}, found {found}"),
        }
    }

    fn expect_symbol(&mut self, symbol: &str) -> Result<Token> {
        let token = self.peek();
        if self.is_symbol(token, symbol) {
            Ok(self.advance())
        } else {
            Err(self.error_at(token, &format!("expected '{symbol}'")))
        }
    }

    fn expect_ident(&mut self) -> Result<&'source str> {
        let token = self.peek();
        if token.0 == TokenKind::Ident {
            self.advance();
            Ok(self.text(token))
        } else {
            Err(self.error_at(token, "expected identifier"))
        }
    }

    fn expect_eof(&self) -> Result<()> {
        let token = self.peek();
        if token.0 == TokenKind::Eof {
            Ok(())
        } else {
            Err(self.error_at(token, "unexpected trailing input"))
        }
    }

    fn opaque_from(&self, start: usize) -> Expr {
        Expr::Other(self.source[start..self.prev_end()].trim().to_string())
    }

    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.max_depth {
            return Err(Error::ExpressionTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// `x => ...` or `(x) => ...`
    fn at_lambda_start(&self) -> bool {
        let (a, b) = (self.peek_at(0), self.peek_at(1));
        if a.0 == TokenKind::Ident && self.is_symbol(b, "=>") {
            return true;
        }
        self.is_symbol(a, "(")
            && b.0 == TokenKind::Ident
            && self.is_symbol(self.peek_at(2), ")")
            && self.is_symbol(self.peek_at(3), "=>")
    }

    fn lambda(&mut self) -> Result<Expr> {
        let parenthesized = self.is_symbol(self.peek(), "(");
        if parenthesized {
            self.advance();
        }
        let parameter = self.expect_ident()?;
        if parenthesized {
            self.expect_symbol(")")?;
        }
        self.expect_symbol("=>")?;

        self.scope.push(parameter.to_string());
        let body = self.expression();
        self.scope.pop();
        Ok(Expr::lambda(parameter, body?))
    }

    fn expression(&mut self) -> Result<Expr> {
        self.nested(|p| {
            if p.at_lambda_start() {
                return p.lambda();
            }

            let start = p.peek().1.start;
            let first = p.unary()?;
            let mut opaque = false;
            loop {
                let token = p.peek();
                if token.0 == TokenKind::Symbol && BINARY_OPERATORS.contains(&p.text(token)) {
                    p.advance();
                    p.unary()?;
                    opaque = true;
                } else if p.is_symbol(token, "?") {
                    p.advance();
                    p.expression()?;
                    p.expect_symbol(":")?;
                    p.expression()?;
                    opaque = true;
                    break;
                } else {
                    break;
                }
            }

            Ok(if opaque { p.opaque_from(start) } else { first })
        })
    }

    fn unary(&mut self) -> Result<Expr> {
        let token = self.peek();
        if token.0 == TokenKind::Symbol && PREFIX_OPERATORS.contains(&self.text(token)) {
            let start = token.1.start;
            self.advance();
            self.nested(Self::unary)?;
            return Ok(self.opaque_from(start));
        }
        self.postfix()
    }

    fn postfix(&mut self) -> Result<Expr> {
        let start = self.peek().1.start;
        let mut operand = self.primary()?;
        let mut opaque = false;

        loop {
            let token = self.peek();
            if self.is_symbol(token, ".") || self.is_symbol(token, "?.") {
                opaque |= self.is_symbol(token, "?.");
                self.advance();
                let name = self.expect_ident()?;
                operand = if self.is_symbol(self.peek(), "(") {
                    let arguments = self.arguments()?;
                    match operand {
                        // Type.Method(args): static call, no receiver
                        Operand::Unbound(_) => Operand::Expr(Expr::static_call(name, arguments)),
                        Operand::Expr(receiver) => {
                            Operand::Expr(receiver.call(name, arguments))
                        }
                    }
                } else {
                    match operand {
                        // Namespace.Type qualification
                        Operand::Unbound(prefix) => Operand::Unbound(format!("{prefix}.{name}")),
                        Operand::Expr(target) => Operand::Expr(target.member(name)),
                    }
                };
            } else if self.is_symbol(token, "(") {
                if let Operand::Unbound(name) = operand {
                    let arguments = self.arguments()?;
                    operand = Operand::Expr(Expr::static_call(name, arguments));
                } else {
                    return Err(self.error_at(token, "cannot invoke this expression"));
                }
            } else if self.is_symbol(token, "[") {
                self.advance();
                if !self.is_symbol(self.peek(), "]") {
                    self.expression()?;
                    while self.is_symbol(self.peek(), ",") {
                        self.advance();
                        self.expression()?;
                    }
                }
                self.expect_symbol("]")?;
                opaque = true;
            } else {
                break;
            }
        }

        Ok(if opaque {
            self.opaque_from(start)
        } else {
            operand.into_expr()
        })
    }

    fn arguments(&mut self) -> Result<Vec<Expr>> {
        self.expect_symbol("(")?;
        let mut arguments = Vec::new();
        if self.is_symbol(self.peek(), ")") {
            self.advance();
            return Ok(arguments);
        }
        loop {
            arguments.push(self.expression()?);
            let token = self.advance();
            if self.is_symbol(token, ")") {
                return Ok(arguments);
            }
            if !self.is_symbol(token, ",") {
                return Err(self.error_at(token, "expected ',' or ')'"));
            }
        }
    }

    fn primary(&mut self) -> Result<Operand> {
        let token = self.peek();
        match token.0 {
            TokenKind::Ident => {
                self.advance();
                let name = self.text(token);
                if self.scope.iter().any(|p| p == name) {
                    Ok(Operand::Expr(Expr::parameter(name)))
                } else {
                    Ok(Operand::Unbound(name.to_string()))
                }
            }
            TokenKind::Number | TokenKind::String => {
                self.advance();
                Ok(Operand::Expr(Expr::other(self.text(token))))
            }
            TokenKind::Symbol if self.is_symbol(token, "(") => {
                let start = token.1.start;
                self.advance();
                let inner = self.expression()?;
                self.expect_symbol(")")?;
                // (Type)operand
                let next = self.peek();
                let starts_operand = matches!(
                    next.0,
                    TokenKind::Ident | TokenKind::Number | TokenKind::String
                ) || self.is_symbol(next, "(");
                if starts_operand {
                    self.nested(Self::unary)?;
                    return Ok(Operand::Expr(self.opaque_from(start)));
                }
                Ok(Operand::Expr(inner))
            }
            _ => Err(self.error_at(token, "expected expression")),
        }
    }
}
