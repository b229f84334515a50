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

use crate::configs::form_access::{
    EditItemIdsConfig, FillItemIdsConfig, FormAccessConfig, FormConfig,
};

static_toml::static_toml! {
    // static_toml always resolves from CARGO_MANIFEST_DIR.
    pub static FORMLINK_CONFIG = include_toml!("configs/formlink.toml");
}

impl Default for FormAccessConfig {
    fn default() -> FormAccessConfig {
        FormAccessConfig {
            form: FormConfig::default(),
            edit_items: EditItemIdsConfig::default(),
            fill_items: FillItemIdsConfig::default(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> FormConfig {
        FormConfig {
            base_url: FORMLINK_CONFIG.form.base_url.to_owned(),
            id: FORMLINK_CONFIG.form.id.to_owned(),
        }
    }
}

impl Default for EditItemIdsConfig {
    fn default() -> EditItemIdsConfig {
        EditItemIdsConfig {
            duration_category: FORMLINK_CONFIG.edit_items.duration_category.to_owned(),
            other_category: FORMLINK_CONFIG.edit_items.other_category.to_owned(),
        }
    }
}

impl Default for FillItemIdsConfig {
    fn default() -> FillItemIdsConfig {
        FillItemIdsConfig {
            email: FORMLINK_CONFIG.fill_items.email.to_owned(),
            first_name: FORMLINK_CONFIG.fill_items.first_name.to_owned(),
            last_name: FORMLINK_CONFIG.fill_items.last_name.to_owned(),
            date_performed: FORMLINK_CONFIG.fill_items.date_performed.to_owned(),
            duration: FORMLINK_CONFIG.fill_items.duration.to_owned(),
            description: FORMLINK_CONFIG.fill_items.description.to_owned(),
        }
    }
}
