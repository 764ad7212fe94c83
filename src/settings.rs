use std::path::{Path, PathBuf};

use alloy::primitives::Address;
use anyhow::{Context, Result};
use async_trait::async_trait;
use auto_impl::auto_impl;
use etcetera::{choose_base_strategy, BaseStrategy};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use url::Url;

use crate::network::Network;

/// Environment variable that points the CLI at a different settings file.
pub const SETTINGS_PATH_ENV: &str = "LOTTERY_CONFIG";

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde_as(as = "DisplayFromStr")]
    pub network: Network,
    #[serde_as(as = "DisplayFromStr")]
    pub contract_address: Address,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc: Option<Url>,
}

#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait SettingsSource {
    async fn load_settings(&self) -> Result<Settings>;
}

/// Settings persisted as TOML on disk.
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl Settings {
    /// The RPC endpoint in effect: the configured one, or the network's public default.
    pub fn rpc_url(&self) -> Url {
        self.rpc
            .clone()
            .unwrap_or_else(|| self.network.default_rpc())
    }
}

impl SettingsFile {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    /// Resolves the settings location from `LOTTERY_CONFIG`, falling back to the platform
    /// config directory.
    pub fn locate() -> Result<Self> {
        match std::env::var(SETTINGS_PATH_ENV) {
            Ok(value) if !value.trim().is_empty() => Ok(Self::new(
                shellexpand::tilde(value.trim()).into_owned(),
            )),
            _ => Ok(Self::new(Self::default_path()?)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Settings> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .with_context(|| format!("unable to access {}", self.path.display()))?;
        if !exists {
            anyhow::bail!(
                "settings file not found at {}; run `setup` to create it",
                self.path.display()
            );
        }

        let buffer = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("unable to read {}", self.path.display()))?;

        let settings = toml::from_str(&buffer)
            .with_context(|| format!("invalid settings in {}", self.path.display()))?;

        Ok(settings)
    }

    pub async fn save(&self, settings: &Settings) -> Result<()> {
        let serialized = toml::to_string_pretty(settings)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&self.path, serialized.as_bytes())
            .await
            .with_context(|| format!("unable to write {}", self.path.display()))?;

        Ok(())
    }

    fn default_path() -> Result<PathBuf> {
        let strategy = choose_base_strategy()
            .map_err(|_| anyhow::anyhow!("unable to find the config directory"))?;
        let mut path = strategy.config_dir();
        path.push("lottery");
        path.push("settings.toml");
        Ok(path)
    }
}

#[async_trait]
impl SettingsSource for SettingsFile {
    async fn load_settings(&self) -> Result<Settings> {
        self.load().await
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    fn sample() -> Settings {
        Settings {
            network: Network::Worldchain,
            contract_address: address!("0x1111111111111111111111111111111111111111"),
            rpc: None,
        }
    }

    #[tokio::test]
    async fn saved_settings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join("nested").join("settings.toml"));

        let mut settings = sample();
        settings.rpc = Some(Url::parse("http://localhost:8545").unwrap());
        file.save(&settings).await.unwrap();

        assert_eq!(file.load_settings().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn missing_file_points_at_setup() {
        let dir = tempfile::tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join("settings.toml"));

        let err = file.load().await.unwrap_err();
        assert!(err.to_string().contains("run `setup`"));
    }

    #[tokio::test]
    async fn inaccessible_path_is_not_reported_as_missing() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("plain-file");
        std::fs::write(&not_a_dir, "").unwrap();

        let err = SettingsFile::new(not_a_dir.join("settings.toml"))
            .load()
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("unable to access"));
        assert!(!format!("{err:#}").contains("run `setup`"));
    }

    #[tokio::test]
    async fn unknown_network_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "network = \"goerli\"\ncontract_address = \"0x1111111111111111111111111111111111111111\"\n",
        )
        .unwrap();

        let err = SettingsFile::new(path).load().await.unwrap_err();
        assert!(format!("{err:#}").contains("unknown network"));
    }

    #[tokio::test]
    async fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            "network = \"mainnet\"\ncontract_address = \"0x1111111111111111111111111111111111111111\"\nprivate_key = \"0x01\"\n",
        )
        .unwrap();

        assert!(SettingsFile::new(path).load().await.is_err());
    }

    #[test]
    fn rpc_falls_back_to_network_default() {
        let settings = sample();
        assert_eq!(settings.rpc_url(), Network::Worldchain.default_rpc());

        let custom = Settings {
            rpc: Some(Url::parse("http://127.0.0.1:8545").unwrap()),
            ..sample()
        };
        assert_eq!(custom.rpc_url().as_str(), "http://127.0.0.1:8545/");
    }
}
