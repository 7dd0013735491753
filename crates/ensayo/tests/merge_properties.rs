//! Property tests for the configuration merge
//!
//! The merge rule is "right-most non-absent source wins" per leaf field,
//! with arrays replacing wholesale. These properties pin that down over
//! generated partial configurations.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ensayo::{merge_config, CoverageConfig, TestingConfig, ThresholdConfig};
use proptest::option;
use proptest::prelude::*;

fn pct() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

fn threshold_strategy() -> impl Strategy<Value = ThresholdConfig> {
    (
        option::of(pct()),
        option::of(pct()),
        option::of(pct()),
        option::of(pct()),
    )
        .prop_map(|(branches, functions, lines, statements)| ThresholdConfig {
            branches,
            functions,
            lines,
            statements,
        })
}

fn config_strategy() -> impl Strategy<Value = TestingConfig> {
    (
        option::of(prop_oneof![
            Just("vitest".to_string()),
            Just("jest".to_string())
        ]),
        option::of("[a-z]{1,8}"),
        option::of(proptest::collection::vec("[a-z*./]{1,12}", 0..3)),
        option::of(proptest::bool::ANY),
        option::of(threshold_strategy()),
    )
        .prop_map(|(framework, test_dir, test_match, watch, threshold)| TestingConfig {
            framework,
            test_dir,
            test_match,
            watch,
            coverage: threshold.map(|t| CoverageConfig {
                threshold: Some(t),
                ..CoverageConfig::default()
            }),
            ..TestingConfig::default()
        })
}

fn leaf<T: Clone>(base: &Option<T>, overlay: &Option<T>) -> Option<T> {
    overlay.clone().or_else(|| base.clone())
}

proptest! {
    #[test]
    fn merge_with_none_is_identity(base in config_strategy()) {
        prop_assert_eq!(merge_config(&base, None), base);
    }

    #[test]
    fn merge_with_self_is_idempotent(config in config_strategy()) {
        prop_assert_eq!(merge_config(&config, Some(&config)), config);
    }

    #[test]
    fn rightmost_value_wins_per_leaf(base in config_strategy(), overlay in config_strategy()) {
        let merged = merge_config(&base, Some(&overlay));
        prop_assert_eq!(merged.framework, leaf(&base.framework, &overlay.framework));
        prop_assert_eq!(merged.test_dir, leaf(&base.test_dir, &overlay.test_dir));
        prop_assert_eq!(merged.watch, leaf(&base.watch, &overlay.watch));
        // Arrays replace wholesale, never concatenate
        prop_assert_eq!(merged.test_match, leaf(&base.test_match, &overlay.test_match));

        let base_t = base.coverage.as_ref().and_then(|c| c.threshold);
        let overlay_t = overlay.coverage.as_ref().and_then(|c| c.threshold);
        let merged_t = merged.coverage.as_ref().and_then(|c| c.threshold);
        match (base_t, overlay_t) {
            (None, None) => prop_assert_eq!(merged_t, None),
            (Some(t), None) | (None, Some(t)) => prop_assert_eq!(merged_t, Some(t)),
            (Some(b), Some(o)) => {
                let m = merged_t.unwrap();
                prop_assert_eq!(m.branches, leaf(&b.branches, &o.branches));
                prop_assert_eq!(m.functions, leaf(&b.functions, &o.functions));
                prop_assert_eq!(m.lines, leaf(&b.lines, &o.lines));
                prop_assert_eq!(m.statements, leaf(&b.statements, &o.statements));
            }
        }
    }

    #[test]
    fn three_way_merge_honors_precedence(
        default in config_strategy(),
        preset in config_strategy(),
        user in config_strategy(),
    ) {
        let merged = merge_config(&merge_config(&default, Some(&preset)), Some(&user));
        let expected = leaf(&leaf(&default.framework, &preset.framework), &user.framework);
        prop_assert_eq!(merged.framework, expected);
    }
}
