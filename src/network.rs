use std::{fmt::Display, str::FromStr};

use anyhow::Result;
use clap::{builder::PossibleValue, ValueEnum};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Worldchain,
    WorldchainSepolia,
    Mainnet,
    Sepolia,
}

impl Network {
    /// Ticker of the native currency that prize pools are denominated in.
    pub fn native_currency(&self) -> &'static str {
        match self {
            Self::Worldchain => "WLD",
            Self::WorldchainSepolia | Self::Mainnet | Self::Sepolia => "ETH",
        }
    }

    /// Public JSON-RPC endpoint used when the settings don't name one.
    pub fn default_rpc(&self) -> Url {
        let raw = match self {
            Self::Worldchain => "https://worldchain-mainnet.g.alchemy.com/public",
            Self::WorldchainSepolia => "https://worldchain-sepolia.g.alchemy.com/public",
            Self::Mainnet => "https://ethereum-rpc.publicnode.com",
            Self::Sepolia => "https://ethereum-sepolia-rpc.publicnode.com",
        };

        // Hard-coded endpoints above are always valid URLs.
        Url::parse(raw).unwrap()
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Self::Worldchain => 480,
            Self::WorldchainSepolia => 4801,
            Self::Mainnet => 1,
            Self::Sepolia => 11155111,
        }
    }
}

impl ValueEnum for Network {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Worldchain,
            Self::WorldchainSepolia,
            Self::Mainnet,
            Self::Sepolia,
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Network::Worldchain => {
                Some(PossibleValue::new("worldchain").aliases(["world", "worldchain-mainnet"]))
            }
            Network::WorldchainSepolia => {
                Some(PossibleValue::new("worldchain-sepolia").aliases(["world-sepolia"]))
            }
            Network::Mainnet => {
                Some(PossibleValue::new("mainnet").aliases(["ethereum", "eth-mainnet"]))
            }
            Network::Sepolia => Some(PossibleValue::new("sepolia").aliases(["eth-sepolia"])),
        }
    }
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "worldchain" | "world" | "worldchain-mainnet" => Ok(Self::Worldchain),
            "worldchain-sepolia" | "world-sepolia" => Ok(Self::WorldchainSepolia),
            "mainnet" | "ethereum" | "eth-mainnet" => Ok(Self::Mainnet),
            "sepolia" | "eth-sepolia" => Ok(Self::Sepolia),
            _ => Err(anyhow::anyhow!("unknown network: {}", s)),
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Worldchain => write!(f, "worldchain"),
            Self::WorldchainSepolia => write!(f, "worldchain-sepolia"),
            Self::Mainnet => write!(f, "mainnet"),
            Self::Sepolia => write!(f, "sepolia"),
        }
    }
}
