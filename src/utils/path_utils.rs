//! Filepath-related utility functions

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Error;

/// Characters that would require quoting if the token ever reached a shell
static SHELL_UNSAFE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\s'"`\\$&;|<>()]"#).unwrap());

/// Returns `true` if the token can be used verbatim, without quoting
pub fn is_shell_safe(token: &str) -> bool {
    !SHELL_UNSAFE.is_match(token)
}

/// Resolve configured source entries into concrete source paths.
///
/// Entries containing glob metacharacters (the original configurations use
/// patterns like `./src/*.c`) are expanded; matches keep the deterministic
/// order the glob walker yields. A pattern that matches nothing is a
/// configuration error, surfaced before the rebuild sequence touches the
/// previous artifact. Literal entries pass through untouched, so a missing
/// file is left for the compiler to report.
pub fn expand_source_patterns<S>(patterns: &[S]) -> Result<Vec<String>, Error>
where
    S: AsRef<str>,
{
    let mut sources = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !pattern.contains(['*', '?', '[']) {
            sources.push(pattern.to_string());
            continue;
        }

        let mut matched_any = false;
        for entry in glob::glob(pattern)? {
            let path = entry.map_err(|err| Error::Io(err.into_error()))?;
            sources.push(path.to_string_lossy().into_owned());
            matched_any = true;
        }
        if !matched_any {
            return Err(Error::InvalidConfiguration(format!(
                "source pattern `{}` matches no files",
                pattern
            )));
        }
    }
    Ok(sources)
}
