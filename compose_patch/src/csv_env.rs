//! Environment provider that reads comma-separated lists.
//!
//! Wraps `figment::providers::Env` so that a variable such as
//! `COMPOSE_PATCH_ONLY=FromCompositeFieldPath,FromConstantValue` yields a
//! list. Values that look like structured data (starting with `[`, `{` or a
//! quote) are parsed as-is, so a list containing commas can still be written
//! as `["a,b"]`.

use figment::providers::Env;
use figment::{
    Metadata, Profile, Provider,
    error::Error,
    util::nest,
    value::{Dict, Map, Value},
};

/// Prefixed environment provider with CSV list support.
///
/// # Examples
///
/// ```rust
/// use compose_patch::{CsvEnv, PatchType, ResolveSettings};
/// use figment::Figment;
///
/// figment::Jail::expect_with(|jail| {
///     jail.set_env("COMPOSE_PATCH_ONLY", "PatchSet,FromConstantValue");
///     let settings: ResolveSettings = Figment::new()
///         .merge(CsvEnv::prefixed("COMPOSE_PATCH_"))
///         .extract()?;
///     assert_eq!(settings.only, [PatchType::PatchSet, PatchType::FromConstantValue]);
///     Ok(())
/// });
/// ```
#[derive(Clone)]
pub struct CsvEnv {
    inner: Env,
}

impl CsvEnv {
    /// Read variables starting with `prefix`, with the prefix stripped and
    /// the remaining key lowercased.
    #[must_use]
    pub fn prefixed(prefix: &str) -> Self {
        Self {
            inner: Env::prefixed(prefix),
        }
    }

    /// Nest keys at `pattern`, so `A__B=1` becomes `{a: {b: 1}}`.
    #[must_use]
    pub fn split(self, pattern: &str) -> Self {
        Self {
            inner: self.inner.split(pattern),
        }
    }

    fn is_list(value: &str) -> bool {
        value.contains(',') && !matches!(value.chars().next(), Some('[' | '{' | '"' | '\''))
    }

    fn parse_value(raw: &str) -> Value {
        let trimmed = raw.trim();
        if Self::is_list(trimmed) {
            trimmed
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| Value::from(item.to_owned()))
                .collect::<Vec<_>>()
                .into()
        } else {
            trimmed
                .parse()
                .unwrap_or_else(|_| Value::from(trimmed.to_owned()))
        }
    }
}

impl Provider for CsvEnv {
    fn metadata(&self) -> Metadata {
        self.inner.metadata()
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.inner.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut dict = Dict::new();
        for (key, raw) in self.inner.iter() {
            let Some(nested) = nest(key.as_str(), Self::parse_value(&raw)).into_dict() else {
                return Err(Error::from(format!(
                    "environment key `{key}` produced a non-object value"
                )));
            };
            dict.extend(nested);
        }
        Ok(self.inner.profile.collect(dict))
    }
}
