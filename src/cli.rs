use crate::constants::{
    DEFAULT_BRANCH_FACTOR, DEFAULT_DEPTH, DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILES,
    DEFAULT_MAX_TAGS, DEFAULT_TAG_DENSITY, DEFAULT_TEST_ROOT,
};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fixture-forge", version)]
#[command(
    about = "Generate a reproducible random directory tree of files, plus a ledger \
                   mapping each file to its tags."
)]
pub struct Cli {
    /// Name of the fixture; used for its directory and its `.tag` ledger.
    #[arg(short = 'n', long = "name")]
    pub name: String,

    /// Seed for the random number generator. Drawn and printed when omitted.
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Maximum depth of the directory tree.
    #[arg(short = 'd', long = "depth", default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Maximum number of subdirectories per directory.
    #[arg(short = 'b', long = "branch-factor", default_value_t = DEFAULT_BRANCH_FACTOR)]
    pub branch_factor: usize,

    /// Maximum number of files per directory.
    #[arg(short = 'f', long = "max-files", default_value_t = DEFAULT_MAX_FILES)]
    pub max_files: usize,

    /// Maximum size of each file in bytes.
    #[arg(short = 'z', long = "max-filesize", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    pub max_file_size: usize,

    /// Maximum number of tags per file.
    #[arg(short = 't', long = "max-tags", default_value_t = DEFAULT_MAX_TAGS)]
    pub max_tags: usize,

    /// Probability (0 to 1) of reusing an existing tag instead of minting one.
    #[arg(short = 'p', long = "tag-density", default_value_t = DEFAULT_TAG_DENSITY)]
    pub tag_density: f64,

    /// Give every file at least one tag.
    #[arg(short = 'u', long = "untagged-files-disallowed")]
    pub untagged_files_disallowed: bool,

    /// Directory that holds generated fixtures and their ledgers.
    #[arg(short = 'r', long = "root", default_value = DEFAULT_TEST_ROOT)]
    pub root: PathBuf,

    /// Only log warnings and errors.
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}
