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

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "formlink: load and verify the form-access configuration record",
    long_about = r#"formlink - configuration check for a form automation deployment

Loads the form-access configuration record (form base URL, form ID and the
form item IDs the automation addresses), applies environment overrides and
verifies that every required value has been filled in, so an operator can
catch a leftover template placeholder before the automation is wired up.

CONFIGURATION:
    The record is read from a TOML file. By default the tool looks for
    'configs/formlink.toml' in the current working directory. Override the
    path with the FORMLINK_CONFIG_PATH environment variable.

ENVIRONMENT VARIABLES:
    Any configuration value can be overridden using environment variables
    with the FORMLINK_ prefix. Use underscores to separate nested keys.

    Examples:
        FORMLINK_FORM_BASE_URL=https://forms.example.com/d/e/abc/viewform
        FORMLINK_FORM_ID=1FAIpQLSdJ7PqxV
        FORMLINK_FILL_ITEMS_FIRST_NAME=2005841935
"#
)]
pub struct Args {
    /// Source the configuration record is loaded from.
    #[arg(short, long, default_value = "file")]
    pub config_provider: String,
}
