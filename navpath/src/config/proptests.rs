//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn methods_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][A-Za-z0-9_]{0,10}", 1..4)
}

fn format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Plain), Just(OutputFormat::Json)]
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(methods_strategy()),
        prop::option::of(1usize..512),
        prop::option::of(format_strategy()),
    )
        .prop_map(|(projection_methods, max_depth, output_format)| Config {
            projection_methods,
            max_depth,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // High precedence wins if it's Some, otherwise low persists
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        prop_assert_eq!(
            result.projection_methods,
            high.projection_methods.or(low.projection_methods)
        );
        prop_assert_eq!(result.max_depth, high.max_depth.or(low.max_depth));
        prop_assert_eq!(result.output_format, high.output_format.or(low.output_format));
    }

    // Empty config is identity element for merge
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(&merged, &config);

        let mut from_empty = Config::default();
        ConfigMerger::merge_into(&mut from_empty, &config);
        prop_assert_eq!(from_empty, config);
    }

    // Generated configs are valid and survive YAML serialization
    #[test]
    fn generated_configs_validate_and_serialize(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
