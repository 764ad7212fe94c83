use std::io::Write;

use alloy::{
    primitives::U256,
    transports::{RpcError, TransportError},
};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("unable to decode game info: {0}")]
    Decode(#[from] alloy::sol_types::Error),
    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: U256 },
}

/// Failure of the `status` command, tagged by the step that failed.
#[derive(Debug, thiserror::Error)]
pub enum StatusError {
    #[error("{0:#}")]
    Config(anyhow::Error),
    #[error("{0:#}")]
    Client(anyhow::Error),
    #[error(transparent)]
    Query(QueryError),
}

impl QueryError {
    /// Error payload message reported by the node, without the transport framing.
    pub fn short_message(&self) -> Option<String> {
        match self {
            Self::Transport(RpcError::ErrorResp(payload)) => {
                Some(payload.message.trim().to_owned())
            }
            _ => None,
        }
    }
}

impl StatusError {
    pub fn short_message(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::Client(_) => None,
            Self::Query(err) => err.short_message(),
        }
    }

    /// The message shown to users: the short form when one exists.
    pub fn summary(&self) -> String {
        self.short_message().unwrap_or_else(|| self.to_string())
    }

    pub fn report<W>(&self, out: &mut W) -> std::io::Result<()>
    where
        W: Write,
    {
        writeln!(out, "❌ Error: {}", self.summary())?;
        writeln!(out, "⚠️ Make sure your settings are correct.")?;
        writeln!(
            out,
            "🔧 Run 'config' to view them and 'setup' to reset them."
        )?;

        Ok(())
    }
}

impl From<QueryError> for StatusError {
    fn from(value: QueryError) -> Self {
        Self::Query(value)
    }
}
