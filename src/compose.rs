//! Compiler argument composition
//!
//! Turns a [`CompileSpec`] into the ordered token list of a single compiler
//! invocation. Expansion is a pure transform over the configured value lists;
//! nothing here touches the filesystem or the shell.

use crate::{constants::OUTPUT_FLAG, error::Error, utils::is_shell_safe};

/// Expand an ordered group of path values with a separate introducer token.
///
/// Every value is immediately preceded by its own introducer, following the
/// compiler convention where each include or library directory needs its own
/// flag: `["./inc", "./vendor"]` with `-I` becomes
/// `["-I", "./inc", "-I", "./vendor"]`. An empty group expands to nothing.
pub fn expand_flag_group<S>(values: &[S], introducer: &str) -> Vec<String>
where
    S: AsRef<str>,
{
    values
        .iter()
        .flat_map(|value| [introducer.to_string(), value.as_ref().to_string()])
        .collect()
}

/// Expand an ordered group of library names with a fused prefix.
///
/// Unlike [`expand_flag_group`], the prefix is concatenated directly onto
/// each name with no separating token: `["m", "SDL3"]` with `-l` becomes
/// `["-lm", "-lSDL3"]`. The two styles are distinct compiler conventions and
/// are never inferred from one another.
pub fn expand_link_group<S>(names: &[S], prefix: &str) -> Vec<String>
where
    S: AsRef<str>,
{
    names
        .iter()
        .map(|name| format!("{}{}", prefix, name.as_ref()))
        .collect()
}

/// An ordered group of equivalent-role values sharing one introducer token
#[derive(Debug, Clone, Default)]
pub struct FlagGroup {
    introducer: String,
    values: Vec<String>,
}

impl FlagGroup {
    pub fn new<S>(introducer: &str, values: &[S]) -> Self
    where
        S: AsRef<str>,
    {
        Self {
            introducer: introducer.to_string(),
            values: values.iter().map(|x| x.as_ref().to_string()).collect(),
        }
    }

    pub fn introducer(&self) -> &str {
        &self.introducer
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Expand into the interleaved introducer/value token sequence
    pub fn expand(&self) -> Vec<String> {
        expand_flag_group(&self.values, &self.introducer)
    }
}

/// The full configuration of one compiler invocation
///
/// Assembled once per build run and immutable afterwards. Token ordering is
/// part of the contract, as some compilers are order-sensitive for flag
/// scoping: compiler, sources, error flags, language flags, include paths,
/// library paths, link libraries, output.
#[derive(Debug, Clone)]
pub struct CompileSpec {
    compiler: String,
    sources: Vec<String>,
    error_flags: Vec<String>,
    lang_flags: Vec<String>,
    include_paths: FlagGroup,
    library_paths: FlagGroup,
    link_libraries: Vec<String>,
    link_prefix: String,
    output_path: String,
}

impl CompileSpec {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        compiler: &str,
        sources: Vec<String>,
        error_flags: Vec<String>,
        lang_flags: Vec<String>,
        include_paths: FlagGroup,
        library_paths: FlagGroup,
        link_libraries: Vec<String>,
        link_prefix: &str,
        output_path: &str,
    ) -> Self {
        Self {
            compiler: compiler.to_string(),
            sources,
            error_flags,
            lang_flags,
            include_paths,
            library_paths,
            link_libraries,
            link_prefix: link_prefix.to_string(),
            output_path: output_path.to_string(),
        }
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// Produce the validated, ordered token list of the full invocation
    ///
    /// Validation happens before any destructive step of the rebuild sequence
    /// runs, so a bad configuration never costs the previous good artifact.
    pub fn tokens(&self) -> Result<Vec<String>, Error> {
        self.validate()?;

        let mut tokens = vec![self.compiler.clone()];
        tokens.extend(self.sources.iter().cloned());
        tokens.extend(self.error_flags.iter().cloned());
        tokens.extend(self.lang_flags.iter().cloned());
        tokens.extend(self.include_paths.expand());
        tokens.extend(self.library_paths.expand());
        tokens.extend(expand_link_group(&self.link_libraries, &self.link_prefix));
        tokens.push(OUTPUT_FLAG.to_string());
        tokens.push(self.output_path.clone());

        Ok(tokens)
    }

    /// Serialize the invocation into one whitespace-joined command string
    ///
    /// Pure and deterministic: identical specs compose to identical strings.
    pub fn compose(&self) -> Result<String, Error> {
        Ok(self.tokens()?.join(" "))
    }

    fn validate(&self) -> Result<(), Error> {
        if self.compiler.is_empty() {
            return Err(Error::InvalidConfiguration(
                "compiler name must not be empty".into(),
            ));
        }
        if self.output_path.is_empty() {
            return Err(Error::InvalidConfiguration(
                "output path must not be empty".into(),
            ));
        }

        let flags = self.error_flags.iter().chain(self.lang_flags.iter());
        for flag in flags {
            if flag.is_empty() {
                return Err(Error::InvalidConfiguration(
                    "flag values must not be empty".into(),
                ));
            }
        }

        // No quoting or escaping is ever performed, so every path-like value
        // must be usable verbatim as a single token.
        let paths = self
            .sources
            .iter()
            .chain(self.include_paths.values().iter())
            .chain(self.library_paths.values().iter())
            .chain(self.link_libraries.iter())
            .chain(std::iter::once(&self.output_path));
        for path in paths {
            if path.is_empty() {
                return Err(Error::InvalidConfiguration(
                    "path values must not be empty".into(),
                ));
            }
            if !is_shell_safe(path) {
                return Err(Error::MalformedPath(path.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_flag_group_interleaves_introducer() {
        let values = ["./inc", "./vendor", "./third_party"];
        let expanded = expand_flag_group(&values, "-I");

        assert_eq!(expanded.len(), 2 * values.len());
        for (i, value) in values.iter().enumerate() {
            assert_eq!(expanded[2 * i], "-I");
            assert_eq!(expanded[2 * i + 1], *value);
        }
    }

    #[test]
    fn test_expand_flag_group_empty() {
        let values: [&str; 0] = [];
        assert!(expand_flag_group(&values, "-I").is_empty());
    }

    #[test]
    fn test_expand_link_group_fuses_prefix() {
        let names = ["m", "SDL3", "avcodec"];
        let expanded = expand_link_group(&names, "-l");

        assert_eq!(expanded.len(), names.len());
        for (i, name) in names.iter().enumerate() {
            assert_eq!(expanded[i], format!("-l{}", name));
        }
    }

    #[test]
    fn test_expand_link_group_empty() {
        let names: [&str; 0] = [];
        assert!(expand_link_group(&names, "-l").is_empty());
    }

    #[test]
    fn test_flag_group_expand_preserves_order() {
        let group = FlagGroup::new("-L", &["lib", "lib/FFmpeg", "./vendor/lib"]);
        let expanded = group.expand();
        assert_eq!(
            expanded,
            vec!["-L", "lib", "-L", "lib/FFmpeg", "-L", "./vendor/lib"]
        );
    }

    #[test]
    fn test_compose_rejects_empty_values() {
        let spec = CompileSpec::new(
            "gcc",
            vec!["a.c".into(), "".into()],
            vec![],
            vec![],
            FlagGroup::default(),
            FlagGroup::default(),
            vec![],
            "-l",
            "build/out",
        );
        assert!(matches!(
            spec.compose(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_compose_rejects_quoting_hazards() {
        let spec = CompileSpec::new(
            "gcc",
            vec!["my file.c".into()],
            vec![],
            vec![],
            FlagGroup::default(),
            FlagGroup::default(),
            vec![],
            "-l",
            "build/out",
        );
        assert!(matches!(spec.compose(), Err(Error::MalformedPath(_))));
    }
}
