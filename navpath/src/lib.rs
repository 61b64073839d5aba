#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # navpath
//!
//! A library for turning navigation lambdas into eager-loading include paths.
//!
//! A lambda such as `o => o.Lines.Select(l => l.Product)` names a chain of
//! related entities. This library resolves such expressions into the
//! dot-separated path (`Lines.Product`) that query providers understand, and
//! forwards that path to any query object that supports eager loading.
//!
//! ## Core Types
//!
//! - [`Expr`] and [`Lambda`]: Expression trees and typed navigation lambdas
//! - [`IncludePath`] and [`PathResolver`]: Include paths and their resolution
//! - [`Include`] and [`TypedInclude`]: The include operation on query objects
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use navpath::{Expr, PathResolver};
//!
//! let expr = Expr::parse_lambda("o => o.Lines.Select(l => l.Product)").unwrap();
//! let path = PathResolver::new().resolve(&expr).unwrap();
//! assert_eq!(path.to_string(), "Lines.Product");
//!
//! // Filters have no include path
//! let filtered = Expr::parse_lambda("o => o.Lines.Where(l => l.Live)").unwrap();
//! assert!(PathResolver::new().resolve(&filtered).is_err());
//! ```

pub mod config;
pub mod error;
pub mod expr;
pub mod include;
pub mod logging;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use error::{Error, Result};
pub use expr::{Expr, Lambda};
pub use include::{
    EagerLoad, Include, IncludeDispatcher, IncludeRequest, Queryable, TypedInclude,
    TypedQueryable,
};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{IncludePath, PathResolver};
