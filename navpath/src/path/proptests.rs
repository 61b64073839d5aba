//! Property-based tests for include path resolution.

use super::resolver::PathResolver;
use super::types::IncludePath;
use crate::error::Error;
use crate::expr::Expr;
use proptest::prelude::*;

// Strategy for generating navigation names
fn segment_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9_]{0,12}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 1..8)
}

fn member_chain(root: Expr, segments: &[String]) -> Expr {
    segments
        .iter()
        .fold(root, |expr, name| expr.member(name.clone()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // A plain member chain resolves to its names joined by dots
    #[test]
    fn member_chain_resolves_to_joined_names(segments in segments_strategy()) {
        let expr = Expr::lambda("o", member_chain(Expr::parameter("o"), &segments));
        let path = PathResolver::new().resolve(&expr).unwrap();
        prop_assert_eq!(path.to_string(), segments.join("."));
    }

    // Projections splice the selector's path after the source's path
    #[test]
    fn projection_concatenates(left in segments_strategy(), right in segments_strategy()) {
        let selector = Expr::lambda("c", member_chain(Expr::parameter("c"), &right));
        let expr = Expr::lambda(
            "o",
            member_chain(Expr::parameter("o"), &left).select(selector),
        );
        let path = PathResolver::new().resolve(&expr).unwrap();
        let expected: Vec<String> = left.iter().chain(right.iter()).cloned().collect();
        prop_assert_eq!(path.segments(), expected.as_slice());
    }

    // Rendered expressions parse back into the same tree
    #[test]
    fn rendered_expression_reparses(left in segments_strategy(), right in segments_strategy()) {
        let selector = Expr::lambda("c", member_chain(Expr::parameter("c"), &right));
        let expr = Expr::lambda(
            "o",
            member_chain(Expr::parameter("o"), &left).select(selector),
        );
        let reparsed = Expr::parse_lambda(&expr.to_string()).unwrap();
        prop_assert_eq!(&reparsed, &expr);

        let resolver = PathResolver::new();
        prop_assert_eq!(resolver.resolve(&reparsed).unwrap(), resolver.resolve(&expr).unwrap());
    }

    // A filter anywhere in the chain makes the whole expression unresolvable
    #[test]
    fn filter_anywhere_fails(segments in segments_strategy(), at in 0usize..8) {
        let at = at.min(segments.len());
        let (before, after) = segments.split_at(at);
        let filtered = member_chain(Expr::parameter("o"), before)
            .call("Where", [Expr::lambda("x", Expr::other("x.Live"))]);
        let expr = Expr::lambda("o", member_chain(filtered, after));
        let result = PathResolver::new().resolve(&expr);
        prop_assert!(
            matches!(result, Err(Error::InvalidPathExpression { .. })),
            "expected InvalidPathExpression, got {:?}",
            result
        );
    }

    // Resolution is deterministic
    #[test]
    fn resolution_is_deterministic(segments in segments_strategy()) {
        let expr = Expr::lambda("o", member_chain(Expr::parameter("o"), &segments));
        let resolver = PathResolver::new();
        prop_assert_eq!(resolver.resolve(&expr).unwrap(), resolver.resolve(&expr).unwrap());
    }

    // Rendered include paths parse back and keep their segments
    #[test]
    fn include_path_text_is_stable(segments in segments_strategy()) {
        let text = segments.join(".");
        let path = IncludePath::parse(&text).unwrap();
        prop_assert_eq!(path.len(), segments.len());
        prop_assert_eq!(path.to_string(), text);
    }

    // Joining adds lengths and keeps the left side as a prefix
    #[test]
    fn join_keeps_prefix(left in segments_strategy(), right in segments_strategy()) {
        let a = IncludePath::parse(&left.join(".")).unwrap();
        let b = IncludePath::parse(&right.join(".")).unwrap();
        let joined = a.clone().join(b.clone());
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert!(joined.starts_with(&a));
    }
}
