// Centralized magic numbers & default values
pub const DEFAULT_DEPTH: usize = 4;
pub const DEFAULT_BRANCH_FACTOR: usize = 4;
pub const DEFAULT_MAX_FILES: usize = 5;
pub const DEFAULT_MAX_FILE_SIZE: usize = 1000;
pub const DEFAULT_MAX_TAGS: usize = 3;
pub const DEFAULT_TAG_DENSITY: f64 = 0.3;
pub const DEFAULT_TEST_ROOT: &str = "Tests/Generated";

pub const ID_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const ID_MIN_LENGTH: usize = 8;

pub const FILE_SUFFIX: &str = ".dat";
pub const LEDGER_EXTENSION: &str = "tag";

/// Densities at or above this stop tag assignment after the first tag once
/// the pool is populated.
pub const SATURATED_TAG_DENSITY: f64 = 0.99;
