//! Common test utilities for integration tests.
//!
//! This module provides query fixtures for testing the navpath library.

use navpath::{EagerLoad, IncludePath, Queryable, TypedQueryable};

/// Element type the fixture queries yield.
#[allow(dead_code)]
pub struct Entity;

/// A query that records every include path it receives.
#[derive(Debug, Default)]
pub struct RecordingQuery {
    pub includes: Vec<String>,
}

impl EagerLoad for RecordingQuery {
    fn eager_load(&mut self, path: &IncludePath) {
        self.includes.push(path.to_string());
    }
}

impl Queryable for RecordingQuery {
    fn eager_loader(&mut self) -> Option<&mut dyn EagerLoad> {
        Some(self)
    }
}

impl TypedQueryable for RecordingQuery {
    type Element = Entity;
}

/// A query with no eager-load capability.
#[derive(Debug, Default)]
pub struct PlainQuery {
    pub rows: usize,
}

impl Queryable for PlainQuery {}

impl TypedQueryable for PlainQuery {
    type Element = Entity;
}

/// Writes a file into `dir` and returns its path.
#[allow(dead_code)]
pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
