//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use navpath::config::{Config, ConfigMerger};
///
/// let low = Config { max_depth: Some(16), ..Default::default() };
/// let high = Config { max_depth: Some(32), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_depth, Some(32));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when set in `source`; projection
    /// method lists are not accumulated, so a higher-precedence source can
    /// narrow the set.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.projection_methods.is_some() {
            target
                .projection_methods
                .clone_from(&source.projection_methods);
        }

        if source.max_depth.is_some() {
            target.max_depth = source.max_depth;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}
