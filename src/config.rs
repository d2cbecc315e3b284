//! Build configuration
//!
//! The driver carries a complete built-in configuration, so it runs with no
//! arguments at all from a project root. A `rbuild.toml` next to the project
//! (or a file named with `--config`) replaces the built-in values wholesale.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    compose::{CompileSpec, FlagGroup},
    constants::{
        DEFAULT_CONFIG_FILENAME, INCLUDE_PATH_INTRODUCER, LIBRARY_PATH_INTRODUCER,
        LINK_LIBRARY_PREFIX,
    },
    error::Error,
    utils::expand_source_patterns,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// The compiler to drive, looked up on PATH
    compiler: String,

    /// Source files, or glob patterns expanded before composition
    sources: Vec<String>,

    /// Warning/error strictness flags
    error_flags: Vec<String>,

    /// Language and debug-info flags
    lang_flags: Vec<String>,

    /// Include directories, each introduced by `-I`
    include_paths: Vec<String>,

    /// Library search directories, each introduced by `-L`
    library_paths: Vec<String>,

    /// Bare library names, each fused with the `-l` prefix
    link_libraries: Vec<String>,

    /// The executable produced by the compile step and removed by the
    /// cleanup step
    output_path: String,
}

impl BuildConfig {
    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn error_flags(&self) -> &[String] {
        &self.error_flags
    }

    pub fn lang_flags(&self) -> &[String] {
        &self.lang_flags
    }

    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }

    pub fn library_paths(&self) -> &[String] {
        &self.library_paths
    }

    pub fn link_libraries(&self) -> &[String] {
        &self.link_libraries
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl BuildConfig {
    /// Load `rbuild.toml` from the working directory, falling back to the
    /// built-in configuration when no file exists
    pub fn load() -> Result<Self, Error> {
        let config_filepath = Path::new(DEFAULT_CONFIG_FILENAME);
        if config_filepath.exists() {
            Self::load_path(config_filepath)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_path<P>(config_filepath: P) -> Result<Self, Error>
    where
        P: AsRef<Path> + std::fmt::Debug,
    {
        let config_filepath = config_filepath.as_ref();
        confy::load_path(config_filepath).map_err(|err| {
            Error::InvalidConfiguration(format!(
                "failed to load configuration {:?}: {}",
                config_filepath, err
            ))
        })
    }

    /// Resolve source patterns and assemble the immutable compile spec
    pub fn to_spec(&self) -> Result<CompileSpec, Error> {
        let sources = expand_source_patterns(&self.sources)?;
        Ok(CompileSpec::new(
            &self.compiler,
            sources,
            self.error_flags.clone(),
            self.lang_flags.clone(),
            FlagGroup::new(INCLUDE_PATH_INTRODUCER, &self.include_paths),
            FlagGroup::new(LIBRARY_PATH_INTRODUCER, &self.library_paths),
            self.link_libraries.clone(),
            LINK_LIBRARY_PREFIX,
            &self.output_path,
        ))
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            compiler: "gcc".into(),
            sources: vec!["./src/*.c".into()],
            error_flags: vec!["-Wall".into(), "-Werror".into(), "-Wextra".into()],
            lang_flags: vec!["-std=c99".into(), "-g".into()],
            include_paths: vec!["./include".into()],
            library_paths: vec!["./lib".into()],
            link_libraries: vec!["m".into()],
            output_path: "build/out".into(),
        }
    }
}
