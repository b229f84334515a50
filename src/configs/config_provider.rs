/* Licensed to the Apache Software Foundation (ASF) under one
 * or more contributor license agreements.  See the NOTICE file
 * distributed with this work for additional information
 * regarding copyright ownership.  The ASF licenses this file
 * to you under the Apache License, Version 2.0 (the
 * "License"); you may not use this file except in compliance
 * with the License.  You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing,
 * software distributed under the License is distributed on an
 * "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
 * KIND, either express or implied.  See the License for the
 * specific language governing permissions and limitations
 * under the License.
 */

use crate::configs::form_access::FormAccessConfig;
use crate::error::ConfigError;
use crate::{FORMLINK_CONFIG_PATH_ENV, FORMLINK_ENV_PREFIX};
use figment::{
    Figment, Metadata, Profile, Provider,
    providers::{Format, Toml},
    value::{Dict, Map as FigmentMap, Tag, Value as FigmentValue},
};
use std::{env, future::Future, path::Path};
use toml::{Value as TomlValue, map::Map};
use tracing::{error, info, warn};

const DEFAULT_CONFIG_PROVIDER: &str = "file";
const DEFAULT_CONFIG_PATH: &str = "configs/formlink.toml";
// The form ID grants write access to the form design and is masked
// whenever an override is echoed.
const SECRET_KEYS: [&str; 1] = ["FORMLINK_FORM_ID"];

pub enum ConfigProviderKind {
    File(FileConfigProvider),
}

impl ConfigProviderKind {
    pub async fn load_config(&self) -> Result<FormAccessConfig, ConfigError> {
        match self {
            Self::File(p) => p.load_config().await,
        }
    }
}

pub trait ConfigProvider {
    fn load_config(&self) -> impl Future<Output = Result<FormAccessConfig, ConfigError>>;
}

#[derive(Debug)]
pub struct FileConfigProvider {
    path: String,
}

impl FileConfigProvider {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

/// Figment provider that maps FORMLINK_* environment variables onto the
/// nested keys of the form-access record. The serialized default record
/// acts as the schema when resolving underscore ambiguity, so
/// FORMLINK_FILL_ITEMS_FIRST_NAME lands on `fill_items.first_name`.
pub struct FormlinkEnvProvider {
    prefix: String,
}

impl FormlinkEnvProvider {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    fn walk_toml_table_to_dict(table: Map<String, TomlValue>, dict: &mut Dict) {
        for (key, value) in table {
            match value {
                TomlValue::Table(inner_table) => {
                    let mut nested_dict = Dict::new();
                    Self::walk_toml_table_to_dict(inner_table, &mut nested_dict);
                    dict.insert(key, FigmentValue::from(nested_dict));
                }
                TomlValue::String(s) => {
                    dict.insert(key, FigmentValue::from(s));
                }
                // The record holds only strings and nested tables.
                _ => {}
            }
        }
    }

    fn insert_overridden_value_from_env(
        source: &Dict,
        target: &mut Dict,
        keys: &[String],
        value: FigmentValue,
    ) {
        let mut current_source = source;
        let mut current_target = target;
        let mut combined_keys: Vec<String> = Vec::new();

        for (i, key) in keys.iter().enumerate() {
            combined_keys.push(key.clone());
            let key_to_check = combined_keys.join("_");

            match current_source.get(&key_to_check) {
                Some(FigmentValue::Dict(_, inner_source_dict)) => {
                    current_target
                        .entry(key_to_check.clone())
                        .or_insert_with(|| FigmentValue::Dict(Tag::Default, Dict::new()));

                    if let Some(FigmentValue::Dict(_, inner_target)) =
                        current_target.get_mut(&key_to_check)
                    {
                        current_source = inner_source_dict;
                        current_target = inner_target;
                        combined_keys.clear();
                    } else {
                        return;
                    }
                }
                Some(_) => {
                    current_target.insert(key_to_check, value);
                    return;
                }
                None if i == keys.len() - 1 => {
                    current_target.insert(key_to_check, value);
                    return;
                }
                _ => continue,
            }
        }
    }
}

impl Provider for FormlinkEnvProvider {
    fn metadata(&self) -> Metadata {
        Metadata::named("formlink config")
    }

    fn data(&self) -> Result<FigmentMap<Profile, Dict>, figment::Error> {
        let default_config = toml::to_string(&FormAccessConfig::default())
            .map_err(|e| figment::Error::from(e.to_string()))?;
        let toml_value: TomlValue =
            toml::from_str(&default_config).map_err(|e| figment::Error::from(e.to_string()))?;
        let mut source_dict = Dict::new();
        if let TomlValue::Table(table) = toml_value {
            Self::walk_toml_table_to_dict(table, &mut source_dict);
        }

        let mut new_dict = Dict::new();
        for (key, value) in env::vars() {
            let env_key = key.to_uppercase();
            if !env_key.starts_with(self.prefix.as_str()) {
                continue;
            }
            let keys: Vec<String> = env_key[self.prefix.len()..]
                .split('_')
                .map(|k| k.to_lowercase())
                .collect();

            let echoed = if SECRET_KEYS.contains(&env_key.as_str()) {
                "******"
            } else {
                value.as_str()
            };
            info!("{env_key} value changed to: {echoed} from environment variable");

            // Every field of the record is an opaque string, so the raw
            // environment value is inserted without type coercion.
            Self::insert_overridden_value_from_env(
                &source_dict,
                &mut new_dict,
                &keys,
                FigmentValue::from(value),
            );
        }

        let mut data = FigmentMap::new();
        data.insert(Profile::default(), new_dict);
        Ok(data)
    }
}

pub fn resolve(config_provider_type: &str) -> Result<ConfigProviderKind, ConfigError> {
    match config_provider_type {
        DEFAULT_CONFIG_PROVIDER => {
            let path = env::var(FORMLINK_CONFIG_PATH_ENV)
                .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
            Ok(ConfigProviderKind::File(FileConfigProvider::new(path)))
        }
        _ => Err(ConfigError::InvalidConfigurationProvider {
            provider_type: config_provider_type.to_string(),
        }),
    }
}

/// This does exactly the same as Figment does internally.
fn file_exists<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();

    if path.is_absolute() {
        return path.is_file();
    }

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(_) => return false,
    };

    let mut current_dir = cwd.as_path();
    loop {
        let file_path = current_dir.join(path);
        if file_path.is_file() {
            return true;
        }

        current_dir = match current_dir.parent() {
            Some(parent) => parent,
            None => return false,
        };
    }
}

impl ConfigProvider for FileConfigProvider {
    async fn load_config(&self) -> Result<FormAccessConfig, ConfigError> {
        info!("Loading config from path: '{}'...", self.path);

        // The embedded template supplies the placeholder defaults, so a
        // missing file or key surfaces later as a placeholder violation
        // with a named key rather than a deserialization error.
        let embedded_template = Toml::string(include_str!("../../configs/formlink.toml"));
        let mut config_builder = Figment::new().merge(embedded_template);

        if file_exists(&self.path) {
            info!("Found configuration file at path: '{}'.", self.path);
            config_builder = config_builder.merge(Toml::file(&self.path));
        } else {
            warn!(
                "Configuration file not found at path: '{}'. Using the embedded template defaults.",
                self.path
            );
        }

        config_builder = config_builder.merge(FormlinkEnvProvider::new(FORMLINK_ENV_PREFIX));

        let config_result: Result<FormAccessConfig, figment::Error> = config_builder.extract();

        match config_result {
            Ok(config) => {
                info!("Config loaded successfully.");
                Ok(config)
            }
            Err(e) => {
                error!("Failed to load config: {e}");
                Err(ConfigError::CannotLoadConfiguration)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_dict() -> Dict {
        let serialized = toml::to_string(&FormAccessConfig::default()).unwrap();
        let toml_value: TomlValue = toml::from_str(&serialized).unwrap();
        let mut dict = Dict::new();
        if let TomlValue::Table(table) = toml_value {
            FormlinkEnvProvider::walk_toml_table_to_dict(table, &mut dict);
        }
        dict
    }

    fn nested_str<'a>(dict: &'a Dict, section: &str, field: &str) -> Option<&'a str> {
        match dict.get(section) {
            Some(FigmentValue::Dict(_, inner)) => match inner.get(field) {
                Some(FigmentValue::String(_, s)) => Some(s),
                _ => None,
            },
            _ => None,
        }
    }

    #[test]
    fn env_key_with_single_underscore_resolves_to_nested_entry() {
        let source = source_dict();
        let mut target = Dict::new();
        let keys = vec!["form".to_string(), "id".to_string()];
        FormlinkEnvProvider::insert_overridden_value_from_env(
            &source,
            &mut target,
            &keys,
            FigmentValue::from("real-form-id"),
        );
        assert_eq!(nested_str(&target, "form", "id"), Some("real-form-id"));
    }

    #[test]
    fn underscores_in_section_and_field_names_are_disambiguated() {
        let source = source_dict();
        let mut target = Dict::new();
        let keys: Vec<String> = ["fill", "items", "first", "name"]
            .iter()
            .map(|k| k.to_string())
            .collect();
        FormlinkEnvProvider::insert_overridden_value_from_env(
            &source,
            &mut target,
            &keys,
            FigmentValue::from("item-42"),
        );
        assert_eq!(
            nested_str(&target, "fill_items", "first_name"),
            Some("item-42")
        );
    }

    #[test]
    fn unknown_provider_type_is_rejected() {
        let result = resolve("consul");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfigurationProvider { provider_type }) if provider_type == "consul"
        ));
    }
}
