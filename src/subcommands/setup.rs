use alloy::primitives::Address;
use anyhow::Result;
use clap::Parser;
use url::Url;

use crate::{
    network::Network,
    settings::{Settings, SettingsFile},
};

#[derive(Debug, Parser)]
pub struct Setup {
    #[clap(long, help = "Address of the lottery contract")]
    contract: Address,
    #[clap(
        long,
        value_enum,
        default_value_t = Network::Worldchain,
        help = "Network the contract is deployed on"
    )]
    network: Network,
    #[clap(long, help = "JSON-RPC endpoint; defaults to a public endpoint of the network")]
    rpc: Option<Url>,
}

impl Setup {
    pub async fn run(self) -> Result<()> {
        let settings_file = SettingsFile::locate()?;

        let settings = Settings {
            network: self.network,
            contract_address: self.contract,
            rpc: self.rpc,
        };
        settings_file.save(&settings).await?;

        println!(
            "✅ Settings saved to {}",
            settings_file.path().display()
        );

        Ok(())
    }
}
