//! Field-aware deep merge for configuration trees
//!
//! Merge rule: scalars from the overlay win when present; array-valued
//! fields replace the base array wholesale (no element-wise merge); nested
//! record sections recurse field-by-field. `Option` distinguishes "absent"
//! from explicitly-set falsy values, so a threshold set to `0` survives the
//! merge. Every section is merged by its own explicit function rather than
//! a generic recursive walk, which is the only way to guarantee the
//! array-replacement and absent-vs-zero rules hold for every field.

use super::{
    CoverageConfig, E2eConfig, FakerConfig, MockConfig, MswConfig, ParallelConfig, SnapshotConfig,
    TestingConfig, ThresholdConfig, UnitConfig,
};

/// Merge `overlay` onto `base`, overlay taking precedence on every field.
///
/// `None` overlay is a legal input meaning "no override" and yields `base`
/// unchanged. Merge order for a full resolution is
/// `default -> preset -> user config`, applying this same rule at each step.
#[must_use]
pub fn merge_config(base: &TestingConfig, overlay: Option<&TestingConfig>) -> TestingConfig {
    let Some(overlay) = overlay else {
        return base.clone();
    };

    TestingConfig {
        framework: field(&base.framework, &overlay.framework),
        test_dir: field(&base.test_dir, &overlay.test_dir),
        test_match: field(&base.test_match, &overlay.test_match),
        unit: section(&base.unit, &overlay.unit, merge_unit),
        e2e: section(&base.e2e, &overlay.e2e, merge_e2e),
        coverage: section(&base.coverage, &overlay.coverage, merge_coverage),
        mock: section(&base.mock, &overlay.mock, merge_mock),
        snapshot: section(&base.snapshot, &overlay.snapshot, merge_snapshot),
        parallel: section(&base.parallel, &overlay.parallel, merge_parallel),
        ignore: field(&base.ignore, &overlay.ignore),
        watch: field(&base.watch, &overlay.watch),
        env: field(&base.env, &overlay.env),
    }
}

/// Scalar, array and map fields: overlay wins if present, else base.
///
/// Arrays and maps replace wholesale by design of the merge rule.
fn field<T: Clone>(base: &Option<T>, overlay: &Option<T>) -> Option<T> {
    overlay.clone().or_else(|| base.clone())
}

/// Record-valued sections: recurse when both sides are present.
fn section<T: Clone>(
    base: &Option<T>,
    overlay: &Option<T>,
    merge: impl FnOnce(&T, &T) -> T,
) -> Option<T> {
    match (base, overlay) {
        (Some(b), Some(o)) => Some(merge(b, o)),
        (Some(b), None) => Some(b.clone()),
        (None, Some(o)) => Some(o.clone()),
        (None, None) => None,
    }
}

fn merge_unit(base: &UnitConfig, overlay: &UnitConfig) -> UnitConfig {
    UnitConfig {
        test_dir: field(&base.test_dir, &overlay.test_dir),
        test_match: field(&base.test_match, &overlay.test_match),
        setup_files: field(&base.setup_files, &overlay.setup_files),
        timeout: field(&base.timeout, &overlay.timeout),
        clear_mocks: field(&base.clear_mocks, &overlay.clear_mocks),
        reset_mocks: field(&base.reset_mocks, &overlay.reset_mocks),
        restore_mocks: field(&base.restore_mocks, &overlay.restore_mocks),
        globals: field(&base.globals, &overlay.globals),
    }
}

fn merge_e2e(base: &E2eConfig, overlay: &E2eConfig) -> E2eConfig {
    E2eConfig {
        framework: field(&base.framework, &overlay.framework),
        base_url: field(&base.base_url, &overlay.base_url),
        test_dir: field(&base.test_dir, &overlay.test_dir),
        browsers: field(&base.browsers, &overlay.browsers),
        headless: field(&base.headless, &overlay.headless),
        timeout: field(&base.timeout, &overlay.timeout),
        retries: field(&base.retries, &overlay.retries),
        screenshot: field(&base.screenshot, &overlay.screenshot),
        video: field(&base.video, &overlay.video),
    }
}

fn merge_coverage(base: &CoverageConfig, overlay: &CoverageConfig) -> CoverageConfig {
    CoverageConfig {
        enabled: field(&base.enabled, &overlay.enabled),
        provider: field(&base.provider, &overlay.provider),
        reporter: field(&base.reporter, &overlay.reporter),
        reports_directory: field(&base.reports_directory, &overlay.reports_directory),
        include: field(&base.include, &overlay.include),
        exclude: field(&base.exclude, &overlay.exclude),
        threshold: section(&base.threshold, &overlay.threshold, merge_threshold),
    }
}

fn merge_threshold(base: &ThresholdConfig, overlay: &ThresholdConfig) -> ThresholdConfig {
    ThresholdConfig {
        branches: field(&base.branches, &overlay.branches),
        functions: field(&base.functions, &overlay.functions),
        lines: field(&base.lines, &overlay.lines),
        statements: field(&base.statements, &overlay.statements),
    }
}

fn merge_mock(base: &MockConfig, overlay: &MockConfig) -> MockConfig {
    MockConfig {
        clear_mocks: field(&base.clear_mocks, &overlay.clear_mocks),
        reset_mocks: field(&base.reset_mocks, &overlay.reset_mocks),
        restore_mocks: field(&base.restore_mocks, &overlay.restore_mocks),
        faker: section(&base.faker, &overlay.faker, merge_faker),
        msw: section(&base.msw, &overlay.msw, merge_msw),
    }
}

fn merge_faker(base: &FakerConfig, overlay: &FakerConfig) -> FakerConfig {
    FakerConfig {
        locale: field(&base.locale, &overlay.locale),
        seed: field(&base.seed, &overlay.seed),
    }
}

fn merge_msw(base: &MswConfig, overlay: &MswConfig) -> MswConfig {
    MswConfig {
        base_url: field(&base.base_url, &overlay.base_url),
        handlers: field(&base.handlers, &overlay.handlers),
        quiet: field(&base.quiet, &overlay.quiet),
    }
}

fn merge_snapshot(base: &SnapshotConfig, overlay: &SnapshotConfig) -> SnapshotConfig {
    SnapshotConfig {
        snapshot_dir: field(&base.snapshot_dir, &overlay.snapshot_dir),
        update_snapshot: field(&base.update_snapshot, &overlay.update_snapshot),
        threshold: field(&base.threshold, &overlay.threshold),
    }
}

fn merge_parallel(base: &ParallelConfig, overlay: &ParallelConfig) -> ParallelConfig {
    ParallelConfig {
        enabled: field(&base.enabled, &overlay.enabled),
        workers: field(&base.workers, &overlay.workers),
        // Shard indices only make sense together, so the pair replaces wholesale
        shard: field(&base.shard, &overlay.shard),
    }
}
