// SPDX-FileCopyrightText: 2025 Timothy Pogue
//
// SPDX-License-Identifier: ISC

use std::path::Path;
use serde::{Serialize, Deserialize};
use figment::{Figment, Error, providers::{Format, Json, Yaml, Env, Serialized}};

use crate::constant::ENV_PREFIX;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(unused)]
#[derive(Default)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
}


#[derive(Debug, Deserialize, Serialize, Clone)]
#[allow(unused)]
pub struct RenderConfig {
    /// Namespace stamped into documents that do not set `metadata.namespace`.
    /// Empty means no default; such documents fail validation.
    #[serde(default)]
    pub default_namespace: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            default_namespace: "".to_string(),
        }
    }
}

pub struct AppConfigBuilder {
    figment: Figment,
}

impl AppConfigBuilder {
    pub fn with_file(&mut self, path: &str) -> &mut Self {
        let extension = Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        self.figment = match extension {
            "json" => self.figment.clone().merge(Json::file(path).nested()),
            "yaml" | "yml" => self.figment.clone().merge(Yaml::file(path).nested()),
            _ => self.figment.clone(),
        };
        self
    }

    pub fn with_env(&mut self) -> &mut Self {
        self.figment = self.figment.clone().merge(Env::prefixed(&format!("{}__", ENV_PREFIX)).split("__"));
        self
    }

    pub fn with_override_option(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.figment = self.figment.clone().merge(Serialized::default(key, value));
        }
        self
    }

    pub fn build(&self) -> Result<AppConfig, Error> {
        self.figment.extract()
    }
}

impl Default for AppConfigBuilder {
    fn default() -> Self {
        AppConfigBuilder {
            figment: Figment::from(Serialized::defaults(AppConfig::default()))
        }
    }
}
