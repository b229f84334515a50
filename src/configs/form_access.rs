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

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The complete form-access record binding the automation to one hosted
/// form and its spreadsheet. All values are opaque identifiers issued by
/// the form-hosting service and are never parsed or interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormAccessConfig {
    pub form: FormConfig,
    pub edit_items: EditItemIdsConfig,
    pub fill_items: FillItemIdsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FormConfig {
    /// URL that displays the form, allowing a user to record one activity.
    pub base_url: String,
    /// ID providing write access to the form design. Treated as a secret
    /// when the configuration is echoed.
    pub id: String,
}

/// Item IDs addressed when the form design itself is being updated,
/// e.g. when choice lists are rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditItemIdsConfig {
    pub duration_category: String,
    pub other_category: String,
}

/// Item IDs addressed when an instance of the form is being filled out
/// by a user, e.g. when building a pre-filled form URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FillItemIdsConfig {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_performed: String,
    pub duration: String,
    pub description: String,
}

const MASKED_VALUE: &str = "******";

impl FormAccessConfig {
    /// The fixed, exhaustive set of required keys with their current
    /// values. Validation and diagnostics both iterate this, so a field
    /// cannot be added to the record without being covered.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        let [a, b] = self.form.entries();
        let [c, d] = self.edit_items.entries();
        let [e, f, g, h, i, j] = self.fill_items.entries();
        [a, b, c, d, e, f, g, h, i, j]
    }
}

impl FormConfig {
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [("form.base_url", &self.base_url), ("form.id", &self.id)]
    }
}

impl EditItemIdsConfig {
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            ("edit_items.duration_category", &self.duration_category),
            ("edit_items.other_category", &self.other_category),
        ]
    }
}

impl FillItemIdsConfig {
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("fill_items.email", &self.email),
            ("fill_items.first_name", &self.first_name),
            ("fill_items.last_name", &self.last_name),
            ("fill_items.date_performed", &self.date_performed),
            ("fill_items.duration", &self.duration),
            ("fill_items.description", &self.description),
        ]
    }
}

impl Display for FormAccessConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ form: {}, edit_items: {}, fill_items: {} }}",
            self.form, self.edit_items, self.fill_items
        )
    }
}

impl Display for FormConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ base_url: {}, id: {MASKED_VALUE} }}",
            self.base_url
        )
    }
}

impl Display for EditItemIdsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ duration_category: {}, other_category: {} }}",
            self.duration_category, self.other_category
        )
    }
}

impl Display for FillItemIdsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ email: {}, first_name: {}, last_name: {}, date_performed: {}, duration: {}, description: {} }}",
            self.email,
            self.first_name,
            self.last_name,
            self.date_performed,
            self.duration,
            self.description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_cover_every_required_key() {
        let config = FormAccessConfig::default();
        let keys: Vec<&str> = config.entries().iter().map(|(key, _)| *key).collect();
        assert_eq!(
            keys,
            vec![
                "form.base_url",
                "form.id",
                "edit_items.duration_category",
                "edit_items.other_category",
                "fill_items.email",
                "fill_items.first_name",
                "fill_items.last_name",
                "fill_items.date_performed",
                "fill_items.duration",
                "fill_items.description",
            ]
        );
    }

    #[test]
    fn display_masks_the_form_id() {
        let mut config = FormAccessConfig::default();
        config.form.id = "1FAIpQLSdJ7PqxV".to_owned();
        let rendered = config.to_string();
        assert!(!rendered.contains("1FAIpQLSdJ7PqxV"));
        assert!(rendered.contains("******"));
    }
}
