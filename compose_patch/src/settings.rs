//! Layered settings for resolution runs.
//!
//! Settings are merged from, in increasing precedence: defaults, an optional
//! settings file (TOML, YAML or JSON by extension), and `COMPOSE_PATCH_`
//! environment variables. List values may be given in the environment as
//! comma-separated strings:
//!
//! ```text
//! COMPOSE_PATCH_ONLY=FromCompositeFieldPath,FromConstantValue
//! COMPOSE_PATCH_COMPOSITION=compositions/bucket.yaml
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::Serialized;
use serde::{Deserialize, Deserializer, Serialize};

use crate::file::{figment_for, load_composition};
use crate::{ComposeError, ComposeResult, CompositionSpec, CsvEnv, PatchType};

/// Prefix of environment variables read by [`ResolveSettings::load`].
pub const ENV_PREFIX: &str = "COMPOSE_PATCH_";

/// Settings controlling which composition is resolved and how.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveSettings {
    /// Patch types applied by [`CompositionSpec::apply_all`]; empty applies
    /// every type.
    #[serde(deserialize_with = "one_or_many")]
    pub only: Vec<PatchType>,
    /// Composition document to load.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composition: Option<Utf8PathBuf>,
}

impl ResolveSettings {
    /// Build the layered figment without extracting it.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::File`] when `file` cannot be read or its
    /// format is unsupported.
    pub fn figment(file: Option<&Utf8Path>) -> ComposeResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            let data = std::fs::read_to_string(path)
                .map_err(|err| ComposeError::file(path.as_std_path(), err))?;
            figment = figment.merge(figment_for(path.as_std_path(), &data)?);
        }
        Ok(figment.merge(CsvEnv::prefixed(ENV_PREFIX)))
    }

    /// Load settings from defaults, `file` and the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::File`] for an unreadable settings file and
    /// [`ComposeError::Settings`] when the merged values do not deserialise.
    ///
    /// # Examples
    ///
    /// ```
    /// use compose_patch::{PatchType, ResolveSettings};
    ///
    /// figment::Jail::expect_with(|jail| {
    ///     jail.set_env("COMPOSE_PATCH_ONLY", "ToCompositeFieldPath");
    ///     let settings = ResolveSettings::load(None).expect("settings load");
    ///     assert_eq!(settings.only, [PatchType::ToCompositeFieldPath]);
    ///     Ok(())
    /// });
    /// ```
    pub fn load(file: Option<&Utf8Path>) -> ComposeResult<Self> {
        let settings: Self = Self::figment(file)?.extract()?;
        tracing::debug!(
            only = ?settings.only,
            composition = settings.composition.as_deref().map(Utf8Path::as_str),
            "loaded resolve settings"
        );
        Ok(settings)
    }

    /// Load the configured composition and inline its patch sets.
    ///
    /// Returns `None` when no composition is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::File`] when the composition cannot be read or
    /// parsed, or an inlining error.
    pub fn load_composition(&self) -> ComposeResult<Option<CompositionSpec>> {
        let Some(path) = self.composition.as_deref() else {
            return Ok(None);
        };
        let mut spec = load_composition(path)?;
        spec.inline_patch_sets()?;
        Ok(Some(spec))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PatchType),
    Many(Vec<PatchType>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PatchType>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(patch_type) => vec![patch_type],
        OneOrMany::Many(patch_types) => patch_types,
    })
}
