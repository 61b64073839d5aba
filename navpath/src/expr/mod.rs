//! Navigation expression trees.
//!
//! An [`Expr`] is the closed set of node kinds the resolver understands:
//! member reads, method calls, single-parameter lambdas, the lambda's bound
//! parameter, and an opaque [`Expr::Other`] for everything else (filters,
//! arithmetic, literals, casts).
//!
//! Expressions can be assembled with the fluent builder methods or parsed
//! from C#-style lambda text:
//!
//! ```
//! use navpath::expr::Expr;
//!
//! let built = Expr::lambda(
//!     "o",
//!     Expr::parameter("o")
//!         .member("CollectionNavigation")
//!         .select(Expr::lambda("c", Expr::parameter("c").member("Navigation"))),
//! );
//! let parsed = Expr::parse_lambda("o => o.CollectionNavigation.Select(c => c.Navigation)").unwrap();
//! assert_eq!(built, parsed);
//! assert_eq!(built.to_string(), "o => o.CollectionNavigation.Select(c => c.Navigation)");
//! ```

pub mod lexer;
pub mod parser;

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Error, Result};

/// Method name recognized as a projection by default.
pub const SELECT: &str = "Select";

/// A node of a navigation expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A property or field read: `target.member`.
    MemberAccess {
        /// The expression being read from.
        target: Box<Expr>,
        /// The property or field name.
        member: String,
    },

    /// A method invocation.
    ///
    /// Extension-style calls (`source.Select(f)`) carry their receiver as
    /// `arguments[0]`, so the arity counts it.
    Call {
        /// The invoked method's name.
        method: String,
        /// Call arguments in order.
        arguments: Vec<Expr>,
    },

    /// A single-parameter function: `parameter => body`.
    Lambda {
        /// Name of the bound parameter.
        parameter: String,
        /// The function body.
        body: Box<Expr>,
    },

    /// Reference to a lambda's bound parameter.
    Parameter(String),

    /// Any node that is not a navigation, kept as text for diagnostics.
    Other(String),
}

impl Expr {
    /// Creates a parameter reference.
    #[must_use]
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    /// Creates a single-parameter lambda.
    #[must_use]
    pub fn lambda(parameter: impl Into<String>, body: Expr) -> Self {
        Self::Lambda {
            parameter: parameter.into(),
            body: Box::new(body),
        }
    }

    /// Creates an opaque node from its textual rendering.
    #[must_use]
    pub fn other(text: impl Into<String>) -> Self {
        Self::Other(text.into())
    }

    /// Creates a call whose argument list is given verbatim, such as a
    /// static `Enumerable.Select(source, selector)`.
    #[must_use]
    pub fn static_call(method: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self::Call {
            method: method.into(),
            arguments,
        }
    }

    /// Reads `member` from this expression.
    #[must_use]
    pub fn member(self, member: impl Into<String>) -> Self {
        Self::MemberAccess {
            target: Box::new(self),
            member: member.into(),
        }
    }

    /// Calls `method` with this expression as receiver (`arguments[0]`).
    #[must_use]
    pub fn call(self, method: impl Into<String>, arguments: impl IntoIterator<Item = Expr>) -> Self {
        let mut all = vec![self];
        all.extend(arguments);
        Self::Call {
            method: method.into(),
            arguments: all,
        }
    }

    /// Shorthand for `self.call("Select", [selector])`.
    #[must_use]
    pub fn select(self, selector: Expr) -> Self {
        self.call(SELECT, [selector])
    }

    /// Number of arguments if this node is a call.
    #[must_use]
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Call { arguments, .. } => Some(arguments.len()),
            _ => None,
        }
    }

    /// Short name of the node kind, for logs.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::MemberAccess { .. } => "member access",
            Self::Call { .. } => "call",
            Self::Lambda { .. } => "lambda",
            Self::Parameter(_) => "parameter",
            Self::Other(_) => "other",
        }
    }

    /// Parses lambda text such as `o => o.Navigation`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not a well-formed lambda.
    pub fn parse_lambda(text: &str) -> Result<Self> {
        parser::Parser::new(text)?.parse_lambda()
    }

    /// Parses any expression; identifiers not bound by an enclosing lambda
    /// become [`Expr::Other`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is malformed.
    pub fn parse(text: &str) -> Result<Self> {
        parser::Parser::new(text)?.parse_expression()
    }

    fn fmt_receiver(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if matches!(self, Self::Lambda { .. }) {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MemberAccess { target, member } => {
                target.fmt_receiver(f)?;
                write!(f, ".{member}")
            }
            Self::Call { method, arguments } => {
                let Some((receiver, rest)) = arguments.split_first() else {
                    return write!(f, "{method}()");
                };
                receiver.fmt_receiver(f)?;
                write!(f, ".{method}(")?;
                for (i, argument) in rest.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }
            Self::Lambda { parameter, body } => write!(f, "{parameter} => {body}"),
            Self::Parameter(name) | Self::Other(name) => write!(f, "{name}"),
        }
    }
}

/// A lambda over a query's element type `E`.
///
/// The element type only exists at compile time; it ties the lambda to
/// queries of the same element type (see [`crate::include::TypedInclude`]).
///
/// # Examples
///
/// ```
/// use navpath::expr::Lambda;
///
/// struct Order;
///
/// let lambda = Lambda::<Order>::new("o", |o| o.member("Customer").member("Address"));
/// assert_eq!(lambda.to_string(), "o => o.Customer.Address");
/// ```
pub struct Lambda<E> {
    expr: Expr,
    element: PhantomData<fn(&E)>,
}

impl<E> Lambda<E> {
    /// Builds `parameter => body(parameter)`.
    #[must_use]
    pub fn new(parameter: &str, body: impl FnOnce(Expr) -> Expr) -> Self {
        Self {
            expr: Expr::lambda(parameter, body(Expr::parameter(parameter))),
            element: PhantomData,
        }
    }

    /// Parses lambda text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the text is not a single-parameter lambda.
    pub fn parse(text: &str) -> Result<Self> {
        Self::try_from(Expr::parse_lambda(text)?)
    }

    /// The underlying untyped expression.
    #[must_use]
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Consumes the wrapper, returning the untyped expression.
    #[must_use]
    pub fn into_expr(self) -> Expr {
        self.expr
    }
}

impl<E> TryFrom<Expr> for Lambda<E> {
    type Error = Error;

    fn try_from(expr: Expr) -> Result<Self> {
        if !matches!(expr, Expr::Lambda { .. }) {
            return Err(Error::Parse {
                position: 0,
                message: format!("expected a lambda, found {}: {expr}", expr.kind_name()),
            });
        }
        Ok(Self {
            expr,
            element: PhantomData,
        })
    }
}

impl<E> Clone for Lambda<E> {
    fn clone(&self) -> Self {
        Self {
            expr: self.expr.clone(),
            element: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Lambda<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lambda").field(&self.expr).finish()
    }
}

impl<E> fmt::Display for Lambda<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_chain_display() {
        let expr = Expr::parameter("o").member("a").member("b").member("c");
        assert_eq!(expr.to_string(), "o.a.b.c");
    }

    #[test]
    fn test_call_puts_receiver_first() {
        let expr = Expr::parameter("o")
            .member("Items")
            .call("Where", [Expr::lambda("x", Expr::other("x.Ok"))]);
        assert_eq!(expr.arity(), Some(2));
        assert_eq!(expr.to_string(), "o.Items.Where(x => x.Ok)");
    }

    #[test]
    fn test_static_call_display() {
        let expr = Expr::static_call("Now", vec![]);
        assert_eq!(expr.to_string(), "Now()");
        assert_eq!(expr.arity(), Some(0));
    }

    #[test]
    fn test_lambda_receiver_is_parenthesized() {
        let expr = Expr::lambda("x", Expr::parameter("x")).member("Body");
        assert_eq!(expr.to_string(), "(x => x).Body");
    }

    #[test]
    fn test_arity_is_none_for_non_calls() {
        assert_eq!(Expr::parameter("o").arity(), None);
        assert_eq!(Expr::other("1").arity(), None);
    }

    #[test]
    fn test_typed_lambda_from_non_lambda_fails() {
        struct Order;
        let result = Lambda::<Order>::try_from(Expr::parameter("o").member("Customer"));
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_typed_lambda_parse() {
        struct Order;
        let lambda = Lambda::<Order>::parse("o => o.Lines").unwrap();
        assert_eq!(lambda.expr(), &Expr::lambda("o", Expr::parameter("o").member("Lines")));
        assert_eq!(lambda.clone().into_expr().to_string(), "o => o.Lines");
    }
}
