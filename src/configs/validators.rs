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

use crate::Validatable;
use crate::configs::COMPONENT;
use crate::configs::defaults::FORMLINK_CONFIG;
use crate::configs::form_access::{
    EditItemIdsConfig, FillItemIdsConfig, FormAccessConfig, FormConfig,
};
use crate::error::ConfigError;
use tracing::error;

/// The template strings an operator is expected to replace. A value equal
/// to any of these means the record was deployed without being filled in.
fn placeholder_values() -> [&'static str; 3] {
    [
        FORMLINK_CONFIG.form.base_url,
        FORMLINK_CONFIG.form.id,
        FORMLINK_CONFIG.edit_items.duration_category,
    ]
}

fn validate_entry(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        error!("{COMPONENT} - required configuration value '{key}' is empty");
        return Err(ConfigError::MissingConfigurationValue {
            key: key.to_string(),
        });
    }
    if placeholder_values().contains(&value) {
        error!("{COMPONENT} - configuration value '{key}' is still the template placeholder");
        return Err(ConfigError::PlaceholderConfigurationValue {
            key: key.to_string(),
        });
    }
    Ok(())
}

impl Validatable<ConfigError> for FormAccessConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.form.validate()?;
        self.edit_items.validate()?;
        self.fill_items.validate()?;
        Ok(())
    }
}

impl Validatable<ConfigError> for FormConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.entries() {
            validate_entry(key, value)?;
        }
        Ok(())
    }
}

impl Validatable<ConfigError> for EditItemIdsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.entries() {
            validate_entry(key, value)?;
        }
        Ok(())
    }
}

impl Validatable<ConfigError> for FillItemIdsConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in self.entries() {
            validate_entry(key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_config() -> FormAccessConfig {
        FormAccessConfig {
            form: FormConfig {
                base_url: "https://forms.example.com/d/e/abc/viewform".to_owned(),
                id: "1FAIpQLSdJ7PqxV".to_owned(),
            },
            edit_items: EditItemIdsConfig {
                duration_category: "100001".to_owned(),
                other_category: "100002".to_owned(),
            },
            fill_items: FillItemIdsConfig {
                email: "200001".to_owned(),
                first_name: "200002".to_owned(),
                last_name: "200003".to_owned(),
                date_performed: "200004".to_owned(),
                duration: "200005".to_owned(),
                description: "200006".to_owned(),
            },
        }
    }

    #[test]
    fn filled_in_record_passes() {
        assert!(filled_config().validate().is_ok());
    }

    #[test]
    fn template_defaults_are_rejected_with_the_first_offending_key() {
        let config = FormAccessConfig::default();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::PlaceholderConfigurationValue { key }) if key == "form.base_url"
        ));
    }

    #[test]
    fn a_single_leftover_placeholder_is_caught() {
        let mut config = filled_config();
        config.fill_items.date_performed = "Your form item ID goes here".to_owned();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::PlaceholderConfigurationValue { key }) if key == "fill_items.date_performed"
        ));
    }

    #[test]
    fn empty_values_are_rejected() {
        let mut config = filled_config();
        config.edit_items.other_category = "  ".to_owned();
        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::MissingConfigurationValue { key }) if key == "edit_items.other_category"
        ));
    }
}
