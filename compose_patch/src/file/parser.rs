//! Format selection for composition and settings files.

use std::path::Path;

use figment::Figment;
use figment::providers::{Format, Json};
#[cfg(feature = "toml")]
use figment::providers::Toml;

use crate::{ComposeError, ComposeResult};

#[cfg(feature = "yaml")]
use super::yaml::SaphyrYaml;

/// Build a figment holding `data`, parsed according to `path`'s extension.
///
/// # Errors
///
/// Returns [`ComposeError::File`] when the format's feature is disabled or
/// TOML input fails to parse.
pub(crate) fn figment_for(path: &Path, data: &str) -> ComposeResult<Figment> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("json") => Ok(Figment::from(Json::string(data))),
        Some("yaml" | "yml") => yaml_figment(path, data),
        _ => toml_figment(path, data),
    }
}

#[cfg(feature = "yaml")]
fn yaml_figment(path: &Path, data: &str) -> ComposeResult<Figment> {
    Ok(Figment::from(SaphyrYaml::string(path, data)))
}

#[cfg(not(feature = "yaml"))]
fn yaml_figment(path: &Path, _data: &str) -> ComposeResult<Figment> {
    Err(disabled(path, "yaml"))
}

#[cfg(feature = "toml")]
fn toml_figment(path: &Path, data: &str) -> ComposeResult<Figment> {
    // Parse once up front so syntax errors carry the file path.
    toml::from_str::<toml::Value>(data).map_err(|e| ComposeError::file(path, e))?;
    Ok(Figment::from(Toml::string(data)))
}

#[cfg(not(feature = "toml"))]
fn toml_figment(path: &Path, _data: &str) -> ComposeResult<Figment> {
    Err(disabled(path, "toml"))
}

#[cfg(any(not(feature = "yaml"), not(feature = "toml")))]
fn disabled(path: &Path, feature: &str) -> ComposeError {
    ComposeError::file(
        path,
        std::io::Error::other(format!(
            "{feature} feature disabled: enable the '{feature}' feature to read this file"
        )),
    )
}
