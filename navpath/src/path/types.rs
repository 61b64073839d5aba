//! Core types for include paths.
//!
//! This module defines [`IncludePath`], the dot-separated chain of
//! navigation names handed to an eager-loading provider.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Separator between include path segments.
pub const SEPARATOR: char = '.';

/// A chain of navigation names, rendered root-to-leaf as `A.B.C`.
///
/// An include path never contains empty segments, so its rendering never
/// has leading, trailing or doubled separators. The path with no segments is
/// the *root*: it names the queried entity itself and renders as `""`.
///
/// # Examples
///
/// ```
/// use navpath::IncludePath;
///
/// let path = IncludePath::root()
///     .child("Customer").unwrap()
///     .child("Address").unwrap();
/// assert_eq!(path.to_string(), "Customer.Address");
///
/// let parsed: IncludePath = "Customer.Address".parse().unwrap();
/// assert_eq!(parsed, path);
///
/// assert!("Customer..Address".parse::<IncludePath>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IncludePath {
    segments: Vec<String>,
}

impl IncludePath {
    /// The empty path.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a literal dot-separated path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIncludePath`] if the text is empty or any
    /// segment is empty or contains whitespace.
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::InvalidIncludePath {
                path: String::new(),
                reason: "path is empty".to_string(),
            });
        }
        let mut path = Self::root();
        for segment in text.split(SEPARATOR) {
            check_segment(segment).map_err(|reason| Error::InvalidIncludePath {
                path: text.to_string(),
                reason,
            })?;
            path.segments.push(segment.to_string());
        }
        Ok(path)
    }

    /// Whether this is the root (empty) path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Same as [`IncludePath::is_root`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    /// The last segment, if any.
    #[must_use]
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Appends one navigation name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIncludePath`] if `name` is empty, contains the
    /// separator, or contains whitespace.
    pub fn child(mut self, name: &str) -> Result<Self> {
        check_segment(name).map_err(|reason| Error::InvalidIncludePath {
            path: format!("{self}{}{name}", if self.is_root() { "" } else { "." }),
            reason,
        })?;
        self.segments.push(name.to_string());
        Ok(self)
    }

    /// Concatenates two paths; the root is the identity on either side.
    #[must_use]
    pub fn join(mut self, other: IncludePath) -> Self {
        self.segments.extend(other.segments);
        self
    }

    /// Whether `prefix` is a leading part of this path (every path starts
    /// with the root and with itself).
    ///
    /// Eager-loading `A.B.C` also loads `A` and `A.B`.
    ///
    /// ```
    /// use navpath::IncludePath;
    ///
    /// let path = IncludePath::parse("A.B.C").unwrap();
    /// assert!(path.starts_with(&IncludePath::parse("A.B").unwrap()));
    /// assert!(!path.starts_with(&IncludePath::parse("A.C").unwrap()));
    /// ```
    #[must_use]
    pub fn starts_with(&self, prefix: &IncludePath) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

fn check_segment(segment: &str) -> std::result::Result<(), String> {
    if segment.is_empty() {
        return Err("empty segment".to_string());
    }
    if segment.contains(SEPARATOR) {
        return Err(format!("segment '{segment}' contains '{SEPARATOR}'"));
    }
    if segment.chars().any(char::is_whitespace) {
        return Err(format!("segment '{segment}' contains whitespace"));
    }
    Ok(())
}

impl fmt::Display for IncludePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromStr for IncludePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for IncludePath {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<IncludePath> for String {
    fn from(path: IncludePath) -> Self {
        path.to_string()
    }
}

impl Serialize for IncludePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IncludePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        if text.is_empty() {
            return Ok(Self::root());
        }
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
