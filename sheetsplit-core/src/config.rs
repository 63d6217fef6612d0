//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Application configuration

use crate::error::Error;
use regex::Regex;
use serde::Deserialize;
use sheet_grid::Scale;
use std::collections::HashMap;
use std::env;
use std::error::Error as StdError;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub grid: GridCfg,
    #[serde(rename = "datasource", default)]
    pub datasources: Vec<DatasourceCfg>,
    pub output: OutputCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Scale denominator (1000000, 100000, 50000 or 25000)
    pub scale: u32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatasourceCfg {
    pub name: Option<String>,
    /// Dataset file or directory of shapefiles
    pub path: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputCfg {
    /// Existing directory receiving one subdirectory per sheet code
    pub dir: String,
    /// Attribute column carrying the sheet code in grid shapefiles
    #[serde(default = "default_sheet_field")]
    pub sheet_field: String,
}

pub const DEFAULT_SHEET_FIELD: &str = "Razgraphka";

pub fn default_sheet_field() -> String {
    DEFAULT_SHEET_FIELD.to_string()
}

impl ApplicationCfg {
    pub fn scale(&self) -> Result<Scale, Error> {
        Scale::from_denominator(self.grid.scale).map_err(Error::from)
    }
}

pub const DEFAULT_CONFIG: &'static str = r#"
[grid]
scale = 100000

[[datasource]]
path = ""

[output]
dir = "sheets"
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, Error> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err(Error::Config("Could not find config file!".to_string()));
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(Error::Config(format!("Error while reading config: [{}]", err)));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, Error> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").unwrap();
    if re.is_match(&config_toml) {
        return Err(Error::Config(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        ));
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| Error::Config(format!("Template error: {}", e)))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera
        .render(path, &context)
        .map_err(|e| match e.source() {
            Some(source) => Error::Config(format!("Template error: {}", source)),
            None => Error::Config(format!("Template error: {}", e)),
        })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| Error::Config(format!("{} - {}", path, err)))
}
