use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::settings::{Settings, SettingsFile};

#[derive(Debug, Parser)]
pub struct Config {}

impl Config {
    pub async fn run(self) -> Result<()> {
        let settings_file = SettingsFile::locate()?;
        let settings = settings_file.load().await?;

        print!("{}", render_settings(&settings_file, &settings));

        Ok(())
    }
}

fn render_settings(settings_file: &SettingsFile, settings: &Settings) -> String {
    let rpc = match &settings.rpc {
        Some(rpc) => rpc.to_string(),
        None => format!(
            "{} {}",
            settings.network.default_rpc(),
            "(network default)".dimmed()
        ),
    };

    format!(
        "⚙️ Settings ({}):\n\
         🌐 Network: {} (chain id {})\n\
         📜 Contract Address: {}\n\
         🔌 RPC Endpoint: {}\n",
        settings_file.path().display(),
        settings.network,
        settings.network.chain_id(),
        settings.contract_address,
        rpc
    )
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;
    use url::Url;

    use super::*;
    use crate::network::Network;

    #[test]
    fn shows_configured_endpoint() {
        let settings = Settings {
            network: Network::Sepolia,
            contract_address: address!("0x3333333333333333333333333333333333333333"),
            rpc: Some(Url::parse("http://localhost:8545").unwrap()),
        };

        let rendered = render_settings(&SettingsFile::new("/tmp/settings.toml"), &settings);

        assert_eq!(
            rendered,
            "⚙️ Settings (/tmp/settings.toml):\n\
             🌐 Network: sepolia (chain id 11155111)\n\
             📜 Contract Address: 0x3333333333333333333333333333333333333333\n\
             🔌 RPC Endpoint: http://localhost:8545/\n"
        );
    }

    #[test]
    fn marks_network_default_endpoint() {
        let settings = Settings {
            network: Network::Worldchain,
            contract_address: address!("0x3333333333333333333333333333333333333333"),
            rpc: None,
        };

        let rendered = render_settings(&SettingsFile::new("settings.toml"), &settings);

        assert!(rendered.contains("🌐 Network: worldchain (chain id 480)\n"));
        assert!(rendered.contains("https://worldchain-mainnet.g.alchemy.com/public"));
        assert!(rendered.contains("(network default)"));
    }
}
