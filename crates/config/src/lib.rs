//! Configuration management for stevedore
//!
//! This crate provides functionality for managing the stevedore configuration,
//! including loading, saving, updating, and deleting configuration settings.

/// Error types for the configuration module
pub mod error;

use crate::error::Error;
use clap::Parser;
use serde::{Deserialize, Serialize};
#[allow(deprecated)]
use std::env::home_dir;
use stevedore_common::{
    constants::{ENV_OUTPUT_DIR, ENV_REGISTRY_NAMESPACE, ENV_REGISTRY_URL},
    utils::{
        env::get_env,
        io::file::{delete_path, read_file, write_file},
    },
};
use tracing::{debug, error, info};

/// Command line arguments for the configuration command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Display and edit the current configuration",
    after_help = "For more information, read the wiki: https://github.com/stevedore-tools/stevedore/wiki",
    override_usage = "stevedore config [OPTIONS]"
)]
pub struct ConfigArgs {
    /// The target key to update.
    #[clap(required = false, default_value = "")]
    key: String,

    /// The value to set the key to.
    #[clap(required = false, default_value = "")]
    value: String,
}

/// The [`Configuration`] struct represents the configuration of the CLI. All stevedore core
/// modules will attempt to read from this configuration when possible.
#[derive(Deserialize, Serialize, Debug)]
pub struct Configuration {
    /// The directory manifests are written to when no explicit output
    /// directory is given on the command line
    pub output_dir: String,

    /// The container registry images are expected to be pushed to
    pub registry_url: String,

    /// The namespace within the container registry
    pub registry_namespace: String,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            output_dir: "output".to_string(),
            registry_url: "".to_string(),
            registry_namespace: "".to_string(),
        }
    }
}

#[allow(deprecated)]
impl Configuration {
    /// Returns the current configuration.
    pub fn load() -> Result<Self, Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".stevedore");
        home.push("config.toml");

        // if the config file doesn't exist, create it
        if !home.exists() {
            let config = Configuration::default();
            config.save()?;
        }

        // read the config file
        let contents = read_file(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        )
        .map_err(|e| Error::Generic(format!("failed to read config file: {e}")))?;

        // parse the config file
        let mut config: Configuration = toml::from_str(&contents)
            .map_err(|e| Error::ParseError(format!("failed to parse config file: {e}")))?;

        // the process environment takes precedence over the config file
        if let Some(output_dir) = get_env(ENV_OUTPUT_DIR) {
            debug!("overriding output_dir from the environment");
            config.output_dir = output_dir;
        }
        if let Some(registry_url) = get_env(ENV_REGISTRY_URL) {
            debug!("overriding registry_url from the environment");
            config.registry_url = registry_url;
        }
        if let Some(registry_namespace) = get_env(ENV_REGISTRY_NAMESPACE) {
            debug!("overriding registry_namespace from the environment");
            config.registry_namespace = registry_namespace;
        }

        Ok(config)
    }

    /// Saves the current configuration to disk.
    pub fn save(&self) -> Result<(), Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".stevedore");
        home.push("config.toml");

        write_file(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
            &toml::to_string(&self)
                .map_err(|e| Error::ParseError(format!("failed to serialize config: {e}")))?,
        )
        .map_err(|e| Error::Generic(format!("failed to write config file: {e}")))?;

        Ok(())
    }

    /// Deletes the configuration file at `$HOME/.stevedore/config.toml`.
    pub fn delete() -> Result<(), Error> {
        let mut home = home_dir().ok_or_else(|| {
            Error::Generic(
                "failed to get home directory. does your os support `std::env::home_dir()`?"
                    .to_string(),
            )
        })?;
        home.push(".stevedore");
        home.push("config.toml");

        delete_path(
            home.to_str()
                .ok_or_else(|| Error::Generic("failed to convert path to string".to_string()))?,
        );

        Ok(())
    }

    /// Update a single key/value pair in the configuration.
    pub fn update(&mut self, key: &str, value: &str) -> Result<(), Error> {
        // update the key in the struct and ensure it's the correct type
        match key {
            "output_dir" => {
                self.output_dir = value.to_string();
            }
            "registry_url" => {
                self.registry_url = value.to_string();
            }
            "registry_namespace" => {
                self.registry_namespace = value.to_string();
            }
            _ => {
                return Err(Error::Generic(format!(
                    "invalid key: \'{key}\' is not a valid configuration key."
                )))
            }
        }

        // write the updated config to disk
        self.save()?;

        Ok(())
    }
}

/// The `config` command is used to display and edit the current configuration.
pub fn config(args: ConfigArgs) -> Result<(), Error> {
    if !args.key.is_empty() {
        if !args.value.is_empty() {
            // read the config file and update the key/value pair
            let mut config = Configuration::load()?;
            config.update(&args.key, &args.value)?;
            info!("updated configuration! Set \'{}\' = \'{}\' .", &args.key, &args.value);
        } else {
            // key is set, but no value is set
            error!("found key but no value to set. Please specify a value to set, use `stevedore config --help` for more information.");
        }
    } else {
        // no key is set, print the config file
        println!("{:#?}", Configuration::load()?);
        info!("use `stevedore config <KEY> <VALUE>` to set a key/value pair.");
    }

    Ok(())
}

#[allow(deprecated)]
#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Test default configuration
    #[test]
    #[serial]
    fn test_default_configuration() {
        let config = Configuration::default();
        assert_eq!(config.output_dir, "output");
        assert_eq!(config.registry_url, "");
        assert_eq!(config.registry_namespace, "");
    }

    // Test loading configuration from a file
    #[test]
    #[serial]
    fn test_load_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config.output_dir, "output");
        assert_eq!(config.registry_url, "");
        assert_eq!(config.registry_namespace, "");
    }

    // Test saving configuration to a file
    #[test]
    #[serial]
    fn test_save_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::default();

        // update registry_url
        config.update("registry_url", "quay.io").expect("failed to update registry_url");

        // save the config file
        config.save().expect("failed to save config file");

        // load the config file
        let loaded_config = Configuration::load().expect("failed to load config file");

        // ensure the config file was saved correctly
        assert_eq!(loaded_config.output_dir, "output");
        assert_eq!(loaded_config.registry_url, "quay.io");
        assert_eq!(loaded_config.registry_namespace, "");
    }

    // Test deleting configuration file
    #[test]
    #[serial]
    fn test_delete_configuration() {
        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let mut config = Configuration::load().expect("failed to load config file");

        // save some values to the config file
        config.update("registry_url", "quay.io").expect("failed to update registry_url");
        config
            .update("registry_namespace", "stevedore")
            .expect("failed to update registry_namespace");

        // delete config file if it exists
        Configuration::delete().expect("failed to delete config file");
        let config = Configuration::load().expect("failed to load config file");

        assert_eq!(config.output_dir, "output");
        assert_eq!(config.registry_url, "");
        assert_eq!(config.registry_namespace, "");
    }
}
