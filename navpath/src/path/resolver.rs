//! Resolution of navigation expressions into include paths.
//!
//! This module provides the `PathResolver` type, which walks an [`Expr`]
//! top-down and turns member reads and projection calls into an
//! [`IncludePath`].

use crate::config::Config;
use crate::error::{Error, Result};
use crate::expr::{parser::Parser, Expr, Lambda, SELECT};
use crate::path::types::IncludePath;

/// Argument count of a recognized projection call: source and selector.
pub const PROJECTION_ARITY: usize = 2;

/// Where a node sits relative to the expression handed to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// The outermost node, or the body of the outermost lambda.
    Top,
    /// Below a member access or a call.
    Nested,
}

/// Why resolution stopped.
#[derive(Debug)]
enum NoMatch<'a> {
    /// This node cannot contribute a path.
    Node(&'a Expr),
    /// Recursion went past the depth limit.
    TooDeep,
}

/// Resolves navigation expressions into include paths.
///
/// Resolution rules, by node kind:
/// - **Lambda**: resolve the body
/// - **Parameter**: the root path
/// - **Member access**: the target's path followed by the member name
/// - **Projection call** (`source.Select(x => ...)`): the source's path
///   followed by the selector's path
/// - **Anything else**: the root path when it is the whole expression (or
///   the whole lambda body), otherwise a failure
///
/// Projection calls are recognized by method name and arity alone, so any
/// two-argument method named `Select` qualifies regardless of its declaring
/// type. More names can be accepted with
/// [`PathResolver::with_projection_method`].
///
/// # Examples
///
/// ```
/// use navpath::PathResolver;
///
/// let resolver = PathResolver::new();
///
/// let path = resolver
///     .resolve_text("o => o.CollectionNavigation.Select(c => c.Navigation)")
///     .unwrap();
/// assert_eq!(path.to_string(), "CollectionNavigation.Navigation");
///
/// // Filters cannot be eager-loaded
/// assert!(resolver
///     .resolve_text("o => o.CollectionNavigation.Where(x => x.Navigation != null)")
///     .is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    /// Method names treated as projections.
    projection_methods: Vec<String>,
    /// Maximum nesting depth before giving up, unbounded when unset.
    max_depth: Option<usize>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            projection_methods: vec![SELECT.to_string()],
            max_depth: None,
        }
    }
}

impl PathResolver {
    /// Create a new path resolver with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use navpath::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(resolver.projection_methods(), ["Select".to_string()]);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from merged configuration, falling back to the
    /// defaults for unset fields.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let mut resolver = Self::default();
        if let Some(ref methods) = config.projection_methods {
            resolver.projection_methods.clone_from(methods);
        }
        resolver.max_depth = config.max_depth;
        resolver
    }

    /// Accept another method name as a projection.
    ///
    /// # Examples
    ///
    /// ```
    /// use navpath::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_projection_method("Map");
    /// let path = resolver.resolve_text("o => o.Lines.Map(l => l.Product)").unwrap();
    /// assert_eq!(path.to_string(), "Lines.Product");
    /// ```
    #[must_use]
    pub fn with_projection_method(mut self, method: impl Into<String>) -> Self {
        let method = method.into();
        if !self.projection_methods.contains(&method) {
            self.projection_methods.push(method);
        }
        self
    }

    /// Replace the accepted projection method names.
    #[must_use]
    pub fn with_projection_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projection_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    /// Limit the nesting depth of resolved expressions.
    ///
    /// Without a limit, depth is bounded only by the expression itself.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Method names treated as projections.
    #[must_use]
    pub fn projection_methods(&self) -> &[String] {
        &self.projection_methods
    }

    /// Maximum nesting depth, if one was configured.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Resolve an expression into an include path.
    ///
    /// A bare parameter (`o => o`) or an opaque body (`o => 42`) resolves to
    /// the root path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPathExpression`] naming both the expression
    /// and the sub-expression that could not be resolved, or
    /// [`Error::ExpressionTooDeep`] past a configured depth limit.
    pub fn resolve(&self, expr: &Expr) -> Result<IncludePath> {
        match self.matches(expr, Position::Top, 0) {
            Ok(path) => {
                log::debug!("resolved '{expr}' to include path '{path}'");
                Ok(path)
            }
            Err(NoMatch::Node(node)) => {
                log::debug!("cannot resolve '{node}' within '{expr}'");
                Err(Error::InvalidPathExpression {
                    expression: expr.to_string(),
                    unresolved: node.to_string(),
                })
            }
            Err(NoMatch::TooDeep) => Err(Error::ExpressionTooDeep {
                limit: self.max_depth.unwrap_or_default(),
            }),
        }
    }

    /// Resolve a typed lambda.
    ///
    /// # Errors
    ///
    /// See [`PathResolver::resolve`].
    pub fn resolve_lambda<E>(&self, lambda: &Lambda<E>) -> Result<IncludePath> {
        self.resolve(lambda.expr())
    }

    /// Parse lambda text and resolve it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed text, otherwise see
    /// [`PathResolver::resolve`].
    pub fn resolve_text(&self, text: &str) -> Result<IncludePath> {
        let expr = Parser::new(text)?.parse_lambda()?;
        self.resolve(&expr)
    }

    fn is_projection(&self, method: &str) -> bool {
        self.projection_methods.iter().any(|m| m == method)
    }

    fn matches<'a>(
        &self,
        node: &'a Expr,
        position: Position,
        depth: usize,
    ) -> std::result::Result<IncludePath, NoMatch<'a>> {
        if self.max_depth.is_some_and(|limit| depth > limit) {
            return Err(NoMatch::TooDeep);
        }
        log::trace!("matching {} '{node}' at depth {depth}", node.kind_name());

        match node {
            Expr::Lambda { body, .. } => self.matches(body, position, depth + 1),
            Expr::Parameter(_) => Ok(IncludePath::root()),
            Expr::MemberAccess { .. } => {
                // Walk member chains in a loop so long chains do not deepen the stack
                let mut chain = Vec::new();
                let mut current = node;
                while let Expr::MemberAccess { target, member } = current {
                    chain.push((current, member));
                    current = &**target;
                }
                let mut path = self.matches(current, Position::Nested, depth + chain.len())?;
                for (access, member) in chain.into_iter().rev() {
                    path = path.child(member).map_err(|_| NoMatch::Node(access))?;
                }
                Ok(path)
            }
            Expr::Call { method, arguments } => {
                if !self.is_projection(method) || arguments.len() != PROJECTION_ARITY {
                    return Err(NoMatch::Node(node));
                }
                let left = self.matches(&arguments[0], Position::Nested, depth + 1)?;
                let selector = &arguments[1];
                if !matches!(selector, Expr::Lambda { .. }) {
                    return Err(NoMatch::Node(selector));
                }
                let right = self.matches(selector, Position::Nested, depth + 1)?;
                if left.is_root() || right.is_root() {
                    return Err(NoMatch::Node(node));
                }
                Ok(left.join(right))
            }
            Expr::Other(_) => match position {
                Position::Top => Ok(IncludePath::root()),
                Position::Nested => Err(NoMatch::Node(node)),
            },
        }
    }
}
