use alloy::providers::RootProvider;
use anyhow::Result;

use crate::{game::GameInfoSource, settings::Settings};

/// Builds the read-only chain client for a set of settings.
pub trait ClientFactory {
    type Client: GameInfoSource + Send + Sync;

    fn create_client(&self, settings: &Settings) -> Result<Self::Client>;
}

/// Plain JSON-RPC over HTTP(S).
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpClientFactory;

impl ClientFactory for HttpClientFactory {
    type Client = RootProvider;

    fn create_client(&self, settings: &Settings) -> Result<Self::Client> {
        let url = settings.rpc_url();

        match url.scheme() {
            "http" | "https" => {}
            scheme => anyhow::bail!(
                "unsupported RPC scheme \"{}\" in {}: only http and https are supported",
                scheme,
                url
            ),
        }

        if url.host_str().is_none() {
            anyhow::bail!("RPC endpoint has no host: {}", url);
        }

        if settings.rpc.is_none() {
            log::info!(
                "no RPC endpoint configured; using the public {} endpoint {}",
                settings.network,
                url
            );
        }

        log::debug!("connecting to {} via {}", settings.network, url);

        Ok(RootProvider::new_http(url))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;
    use url::Url;

    use super::*;
    use crate::network::Network;

    fn settings_with_rpc(rpc: &str) -> Settings {
        Settings {
            network: Network::Mainnet,
            contract_address: Address::ZERO,
            rpc: Some(Url::parse(rpc).unwrap()),
        }
    }

    #[test]
    fn http_endpoints_are_accepted() {
        assert!(HttpClientFactory
            .create_client(&settings_with_rpc("http://127.0.0.1:8545"))
            .is_ok());
        assert!(HttpClientFactory
            .create_client(&settings_with_rpc("https://rpc.example.com/v1"))
            .is_ok());
    }

    #[test]
    fn non_http_endpoints_are_rejected() {
        let err = HttpClientFactory
            .create_client(&settings_with_rpc("ws://127.0.0.1:8546"))
            .unwrap_err();

        assert!(err.to_string().contains("unsupported RPC scheme \"ws\""));
    }

    #[test]
    fn network_default_is_used_without_rpc() {
        let settings = Settings {
            network: Network::Worldchain,
            contract_address: Address::ZERO,
            rpc: None,
        };

        assert!(HttpClientFactory.create_client(&settings).is_ok());
    }
}
