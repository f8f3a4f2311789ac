use config::Config;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    patch: Patch,
}

impl AppConfig {
    pub fn load() -> Self {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default())
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    pub fn patch(&self) -> &Patch {
        &self.patch
    }
}

#[derive(Debug, Deserialize)]
pub struct Patch {
    source: String,
    table: Option<String>,
}

impl Patch {
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                patch: Patch {
                    source: "companies-mock-data.ts".to_string(),
                    table: None,
                },
            },
        }
    }

    pub fn source(mut self, source: String) -> Self {
        self.config.patch.source = source;
        self
    }

    pub fn table(mut self, table: String) -> Self {
        self.config.patch.table = Some(table);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
