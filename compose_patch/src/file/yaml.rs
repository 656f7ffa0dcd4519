//! YAML provider backed by `serde-saphyr`.

use std::path::{Path, PathBuf};

use figment::{
    Metadata, Profile, Provider,
    error::Kind,
    value::{Dict, Map, Value},
};
use serde_saphyr::Options;

/// Figment provider for an in-memory YAML document.
///
/// Booleans are strict: only `true` and `false` are booleans, so values
/// such as `yes` or `on` stay strings.
#[derive(Debug, Clone)]
pub struct SaphyrYaml {
    path: PathBuf,
    contents: String,
}

impl SaphyrYaml {
    /// A provider for `contents`, reporting `path` as its source.
    #[must_use]
    pub fn string(path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            contents: contents.into(),
        }
    }

    fn parse(&self) -> Result<Value, serde_saphyr::Error> {
        serde_saphyr::from_str_with_options(
            &self.contents,
            Options {
                strict_booleans: true,
                ..Options::default()
            },
        )
    }
}

impl Provider for SaphyrYaml {
    fn metadata(&self) -> Metadata {
        Metadata::from("YAML", self.path.as_path())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let value = self.parse().map_err(|err| {
            figment::Error::from(Kind::Message(format!(
                "failed to parse {}: {err}",
                self.path.display()
            )))
        })?;
        let actual = value.to_actual();
        let dict = value
            .into_dict()
            .ok_or_else(|| figment::Error::from(Kind::InvalidType(actual, "map".into())))?;
        Ok(Profile::Default.collect(dict))
    }
}
