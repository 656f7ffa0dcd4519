//! Loading compositions from YAML, JSON and TOML documents.
//!
//! The format is chosen by file extension: `.json` is JSON, `.yaml` and
//! `.yml` are YAML (with the `yaml` feature) and anything else is TOML (with
//! the `toml` feature). Every format is read through a `figment` provider
//! and extracted into a [`CompositionSpec`].

mod parser;
#[cfg(feature = "yaml")]
mod yaml;

use std::io;

use camino::Utf8Path;
use figment::Figment;

use crate::{ComposeError, ComposeResult, CompositionSpec};

pub(crate) use parser::figment_for;
#[cfg(feature = "yaml")]
pub use yaml::SaphyrYaml;

/// Read and parse the composition at `path`.
///
/// Patch sets are not inlined; call
/// [`CompositionSpec::inline_patch_sets`] before rendering.
///
/// # Errors
///
/// Returns [`ComposeError::File`] when the file cannot be read, its format
/// is disabled, or its contents do not describe a composition.
pub fn load_composition(path: &Utf8Path) -> ComposeResult<CompositionSpec> {
    let data = std::fs::read_to_string(path).map_err(|err| {
        let source = if err.kind() == io::ErrorKind::NotFound {
            io::Error::new(io::ErrorKind::NotFound, "composition file not found")
        } else {
            err
        };
        ComposeError::file(path.as_std_path(), source)
    })?;
    tracing::debug!(%path, bytes = data.len(), "loaded composition file");
    parse_composition(path, &data)
}

/// Parse `data` as a composition, choosing the format from `path`'s
/// extension.
///
/// # Errors
///
/// Returns [`ComposeError::File`] when the format is disabled or `data`
/// does not describe a composition.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use compose_patch::file::parse_composition;
///
/// let spec = parse_composition(
///     Utf8Path::new("composition.json"),
///     r#"{"resources": [{"patches": [{"fromFieldPath": "metadata.name"}]}]}"#,
/// )?;
/// assert_eq!(spec.resources.len(), 1);
/// # Ok::<_, compose_patch::ComposeError>(())
/// ```
pub fn parse_composition(path: &Utf8Path, data: &str) -> ComposeResult<CompositionSpec> {
    extract(figment_for(path.as_std_path(), data)?, path)
}

fn extract(figment: Figment, path: &Utf8Path) -> ComposeResult<CompositionSpec> {
    figment
        .extract()
        .map_err(|err| ComposeError::file(path.as_std_path(), err))
}

#[cfg(test)]
mod tests;
