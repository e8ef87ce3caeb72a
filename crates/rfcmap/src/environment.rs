use crate::{Error, Properties, Result};

use serde_yaml::Value as Yaml;
use std::path::Path;

/// Version reporting and configuration loading.
///
/// Configuration documents are YAML, or JSON when the file name ends in
/// `.json`. Nested maps are flattened into dotted keys, so
///
/// ```yaml
/// connection:
///   ashost: 10.0.0.1
///   sysnr: "00"
/// mapping:
///   types: [BAPI_FLIGHT_GETLIST]
/// ```
///
/// yields `connection.ashost`, `connection.sysnr` and `mapping.types`.
/// Sequences of scalars are joined with commas.
#[derive(Debug)]
pub struct Environment;

impl Environment {
    /// The version of this library.
    pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

    /// Configuration file names tried by [`discover`](Environment::discover),
    /// in order.
    pub const FILE_NAMES: [&'static str; 3] = ["rfcmap.yaml", "rfcmap.yml", "rfcmap.json"];

    /// Prefix of the environment variables applied by
    /// [`overlay_env`](Environment::overlay_env).
    pub const ENV_PREFIX: &'static str = "RFCMAP_";

    /// Loads properties from a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Properties> {
        let path = path.as_ref();

        let text = std::fs::read_to_string(path).map_err(|err| {
            Error::invalid_configuration(format!("cannot read `{}`: {err}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let document = if is_json {
            serde_json::from_str::<serde_json::Value>(&text)
                .map_err(|err| err.to_string())
                .and_then(|json| serde_yaml::to_value(json).map_err(|err| err.to_string()))
        } else {
            serde_yaml::from_str::<Yaml>(&text).map_err(|err| err.to_string())
        }
        .map_err(|err| {
            Error::invalid_configuration(format!("cannot parse `{}`: {err}", path.display()))
        })?;

        let mut properties = Properties::new();
        flatten("", &document, &mut properties).map_err(|msg| {
            Error::invalid_configuration(format!("{msg} in `{}`", path.display()))
        })?;

        tracing::debug!(path = %path.display(), properties = properties.len(), "configuration loaded");
        Ok(properties)
    }

    /// Loads the first configuration file found in the working directory.
    pub fn discover() -> Result<Properties> {
        Environment::discover_in(std::env::current_dir()?)
    }

    /// Loads the first configuration file of [`FILE_NAMES`] found in `dir`.
    /// Yields empty properties when there is none.
    ///
    /// [`FILE_NAMES`]: Environment::FILE_NAMES
    pub fn discover_in(dir: impl AsRef<Path>) -> Result<Properties> {
        let dir = dir.as_ref();

        for name in Environment::FILE_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                return Environment::load(path);
            }
        }

        tracing::warn!(dir = %dir.display(), "no rfcmap configuration file found");
        Ok(Properties::new())
    }

    /// Applies `RFCMAP_*` variables on top of `properties`.
    ///
    /// The prefix is removed, the rest is lower-cased and `_` becomes `.`; a
    /// doubled `__` stands for a literal underscore. `RFCMAP_CONNECTION_ASHOST`
    /// sets `connection.ashost`.
    pub fn overlay_env<I>(properties: &mut Properties, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (name, value) in vars {
            let Some(rest) = name.strip_prefix(Environment::ENV_PREFIX) else {
                continue;
            };

            let key = rest
                .to_lowercase()
                .split("__")
                .map(|part| part.replace('_', "."))
                .collect::<Vec<_>>()
                .join("_");

            if !key.is_empty() {
                properties.set(key, value);
            }
        }
    }

    /// Discovers the configuration file and applies the process environment
    /// on top.
    pub fn properties() -> Result<Properties> {
        let mut properties = Environment::discover()?;
        Environment::overlay_env(&mut properties, std::env::vars());
        Ok(properties)
    }
}

fn flatten(prefix: &str, value: &Yaml, out: &mut Properties) -> std::result::Result<(), String> {
    match value {
        Yaml::Mapping(mapping) => {
            for (key, value) in mapping {
                let key = scalar_text(key)
                    .ok_or_else(|| format!("key under `{prefix}` is not a scalar"))?;

                let key = if prefix.is_empty() {
                    key
                } else {
                    format!("{prefix}.{key}")
                };

                flatten(&key, value, out)?;
            }
        }
        Yaml::Sequence(items) => {
            let items = items
                .iter()
                .map(|item| {
                    scalar_text(item).ok_or_else(|| format!("`{prefix}` must be a list of scalars"))
                })
                .collect::<std::result::Result<Vec<_>, _>>()?;

            out.set(prefix, items.join(","));
        }
        Yaml::Null => {}
        Yaml::Tagged(tagged) => flatten(prefix, &tagged.value, out)?,
        scalar => {
            if prefix.is_empty() {
                return Err("the document must be a map of properties".to_string());
            }

            if let Some(text) = scalar_text(scalar) {
                out.set(prefix, text);
            }
        }
    }

    Ok(())
}

fn scalar_text(value: &Yaml) -> Option<String> {
    match value {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
