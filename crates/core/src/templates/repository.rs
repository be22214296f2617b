use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

const BUILTIN_NAME: &str = "tidytuesday";
const BUILTIN_BODY: &str = include_str!("assets/tidytuesday.qmd");

#[derive(Debug, Error)]
pub enum TemplateRepoError {
    #[error("failed to read template file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A notebook template ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedTemplate {
    pub logical_name: String,
    /// Origin on disk; `None` for the built-in Quarto notebook.
    pub path: Option<PathBuf>,
    pub body: String,
}

impl LoadedTemplate {
    /// The built-in Tidy Tuesday Quarto notebook.
    pub fn builtin() -> Self {
        Self { logical_name: BUILTIN_NAME.to_string(), path: None, body: BUILTIN_BODY.to_string() }
    }

    /// Load a user template from disk. The logical name is the file stem.
    pub fn from_file(path: &Path) -> Result<Self, TemplateRepoError> {
        let body = fs::read_to_string(path)
            .map_err(|source| TemplateRepoError::Io { path: path.to_path_buf(), source })?;
        let logical_name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| BUILTIN_NAME.to_string());
        Ok(Self { logical_name, path: Some(path.to_path_buf()), body })
    }

    /// Use the configured template if one is set, else the built-in.
    pub fn resolve(configured: Option<&Path>) -> Result<Self, TemplateRepoError> {
        match configured {
            Some(path) => Self::from_file(path),
            None => Ok(Self::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_has_front_matter_keys() {
        let tpl = LoadedTemplate::builtin();
        assert!(tpl.body.starts_with("---\n"));
        for key in ["title:", "author:", "date:", "format:"] {
            assert!(tpl.body.contains(key), "missing {key}");
        }
        assert!(tpl.path.is_none());
    }

    #[test]
    fn from_file_uses_stem_as_name() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("weekly-r.qmd");
        fs::write(&path, "# {{call_tuesday}}\n").unwrap();

        let tpl = LoadedTemplate::resolve(Some(&path)).unwrap();
        assert_eq!(tpl.logical_name, "weekly-r");
        assert_eq!(tpl.body, "# {{call_tuesday}}\n");
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let tmp = tempdir().unwrap();
        let err = LoadedTemplate::from_file(&tmp.path().join("nope.qmd")).unwrap_err();
        assert!(matches!(err, TemplateRepoError::Io { .. }));
    }
}
