//! Forwarding include paths to query providers.
//!
//! A query object opts into eager loading by returning its [`EagerLoad`]
//! capability from [`Queryable::eager_loader`]. Queries that never needed
//! eager-load hints keep the default, and including a path on them is a
//! silent no-op.
//!
//! # Examples
//!
//! ```
//! use navpath::include::{EagerLoad, Include, Queryable};
//! use navpath::IncludePath;
//!
//! #[derive(Default)]
//! struct OrderQuery {
//!     includes: Vec<String>,
//! }
//!
//! impl EagerLoad for OrderQuery {
//!     fn eager_load(&mut self, path: &IncludePath) {
//!         self.includes.push(path.to_string());
//!     }
//! }
//!
//! impl Queryable for OrderQuery {
//!     fn eager_loader(&mut self) -> Option<&mut dyn EagerLoad> {
//!         Some(self)
//!     }
//! }
//!
//! let query = OrderQuery::default()
//!     .include("Customer").unwrap()
//!     .include_text("o => o.Lines.Select(l => l.Product)").unwrap();
//! assert_eq!(query.includes, ["Customer", "Lines.Product"]);
//! ```

use std::fmt;

use crate::error::Result;
use crate::expr::{Expr, Lambda};
use crate::path::{IncludePath, PathResolver};

/// Provider capability: accept an include path.
#[cfg_attr(test, mockall::automock)]
pub trait EagerLoad {
    /// Record `path` for eager loading.
    fn eager_load(&mut self, path: &IncludePath);
}

/// A query object that may support eager loading.
pub trait Queryable {
    /// The query's eager-load capability, if it has one.
    fn eager_loader(&mut self) -> Option<&mut dyn EagerLoad> {
        None
    }
}

impl<Q: Queryable + ?Sized> Queryable for Box<Q> {
    fn eager_loader(&mut self) -> Option<&mut dyn EagerLoad> {
        (**self).eager_loader()
    }
}

impl<Q: Queryable + ?Sized> Queryable for &mut Q {
    fn eager_loader(&mut self) -> Option<&mut dyn EagerLoad> {
        (**self).eager_loader()
    }
}

/// A query over a known element type.
pub trait TypedQueryable: Queryable {
    /// The type of the entities the query yields.
    type Element;
}

/// What to include: a literal path or an expression to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeRequest {
    /// A literal dot-separated path.
    Path(String),
    /// A navigation expression.
    Expression(Expr),
}

impl fmt::Display for IncludeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl From<&str> for IncludeRequest {
    fn from(path: &str) -> Self {
        Self::Path(path.to_string())
    }
}

impl From<String> for IncludeRequest {
    fn from(path: String) -> Self {
        Self::Path(path)
    }
}

impl From<Expr> for IncludeRequest {
    fn from(expr: Expr) -> Self {
        Self::Expression(expr)
    }
}

impl<E> From<Lambda<E>> for IncludeRequest {
    fn from(lambda: Lambda<E>) -> Self {
        Self::Expression(lambda.into_expr())
    }
}

/// Resolves include requests and forwards them to queries.
#[derive(Debug, Clone, Default)]
pub struct IncludeDispatcher {
    resolver: PathResolver,
}

impl IncludeDispatcher {
    /// Create a dispatcher that resolves expressions with `resolver`.
    #[must_use]
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }

    /// The resolver used for expression requests.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Turn a request into an include path without touching any query.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIncludePath`] for a malformed literal
    /// path, or the resolver's error for an unresolvable expression.
    pub fn path_for(&self, request: &IncludeRequest) -> Result<IncludePath> {
        match request {
            IncludeRequest::Path(path) => IncludePath::parse(path),
            IncludeRequest::Expression(expr) => self.resolver.resolve(expr),
        }
    }

    /// Resolve `request` and forward it to `query`.
    ///
    /// The query comes back unchanged when it has no eager-load capability.
    ///
    /// # Errors
    ///
    /// See [`IncludeDispatcher::path_for`]. Nothing is forwarded on error.
    pub fn dispatch<Q: Queryable>(&self, mut query: Q, request: impl Into<IncludeRequest>) -> Result<Q> {
        let path = self.path_for(&request.into())?;
        self.forward(&mut query, &path);
        Ok(query)
    }

    /// Forward an already-resolved path. Returns whether the query accepted
    /// it.
    ///
    /// The root path names the queried entity itself and is never
    /// forwarded.
    pub fn forward<Q: Queryable + ?Sized>(&self, query: &mut Q, path: &IncludePath) -> bool {
        if path.is_root() {
            log::debug!("include path is the root; nothing to forward");
            return false;
        }
        match query.eager_loader() {
            Some(loader) => {
                log::debug!("forwarding include path '{path}'");
                loader.eager_load(path);
                true
            }
            None => {
                log::debug!("query has no eager-load capability; skipping '{path}'");
                false
            }
        }
    }
}

/// Include entry points for every [`Queryable`].
pub trait Include: Queryable + Sized {
    /// Include a literal dot-separated path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIncludePath`] if `path` is malformed.
    fn include(self, path: &str) -> Result<Self> {
        IncludeDispatcher::default().dispatch(self, path)
    }

    /// Include the path denoted by a navigation expression.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPathExpression`] if no path can be
    /// derived from `expr`.
    fn include_expr(self, expr: &Expr) -> Result<Self> {
        let mut query = self;
        let path = PathResolver::new().resolve(expr)?;
        IncludeDispatcher::default().forward(&mut query, &path);
        Ok(query)
    }

    /// Parse lambda text and include the path it denotes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Parse`] for malformed text, otherwise as
    /// [`Include::include_expr`].
    fn include_text(self, lambda: &str) -> Result<Self> {
        let expr = Expr::parse_lambda(lambda)?;
        self.include_expr(&expr)
    }

    /// Include an already-resolved path.
    #[must_use]
    fn include_path(self, path: &IncludePath) -> Self {
        let mut query = self;
        IncludeDispatcher::default().forward(&mut query, path);
        query
    }
}

impl<Q: Queryable> Include for Q {}

/// Include entry point taking lambdas over the query's element type.
pub trait TypedInclude: TypedQueryable + Sized {
    /// Include the path denoted by `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPathExpression`] if no path can be
    /// derived from `lambda`.
    fn include_lambda(self, lambda: &Lambda<Self::Element>) -> Result<Self> {
        self.include_expr(lambda.expr())
    }
}

impl<Q: TypedQueryable> TypedInclude for Q {}
