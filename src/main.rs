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
use dotenvy::dotenv;
use figlet_rs::FIGfont;
use formlink::Validatable;
use formlink::args::Args;
use formlink::configs::config_provider;
use formlink::error::ConfigError;
use formlink::log::init_logging;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let standard_font = FIGfont::standard().unwrap();
    let figure = standard_font.convert("formlink");
    println!("{}", figure.unwrap());

    if let Ok(path) = dotenv() {
        println!(
            "Loaded environment variables from .env file at path: {}",
            path.display()
        );
    }

    let args = Args::parse();
    init_logging();

    let config_provider = config_provider::resolve(&args.config_provider)?;
    let config = config_provider.load_config().await?;
    if let Err(e) = config.validate() {
        error!("Form-access configuration is not usable: {e}");
        return Err(e);
    }

    info!("Form-access configuration is complete.");
    info!("Using config: {config}");
    Ok(())
}
