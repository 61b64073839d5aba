//! Include paths and their resolution from navigation expressions.
//!
//! # Key Concepts
//!
//! ## Include paths
//!
//! An [`IncludePath`] is the dot-separated chain of navigation names an
//! eager-loading provider understands, e.g. `Orders.Lines.Product`. It never
//! has empty segments; the path with no segments is the root.
//!
//! ## Resolution
//!
//! [`PathResolver`] walks a navigation expression top-down:
//!
//! - `o => o.Customer.Address` resolves to `Customer.Address`
//! - `o => o.Lines.Select(l => l.Product)` resolves to `Lines.Product`
//! - `o => o.Lines.Where(l => l.Open)` does not resolve: a filter names no
//!   navigation
//!
//! # Examples
//!
//! ```
//! use navpath::path::{IncludePath, PathResolver};
//! use navpath::expr::Expr;
//!
//! let expr = Expr::lambda(
//!     "o",
//!     Expr::parameter("o").member("Lines").select(Expr::lambda(
//!         "l",
//!         Expr::parameter("l").member("Product"),
//!     )),
//! );
//! let path = PathResolver::new().resolve(&expr).unwrap();
//! assert_eq!(path, IncludePath::parse("Lines.Product").unwrap());
//! ```

pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::PathResolver;
pub use types::{IncludePath, SEPARATOR};
