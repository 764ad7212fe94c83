use alloy::{
    network::TransactionBuilder,
    primitives::{Address, U256},
    providers::{Provider, RootProvider},
    rpc::types::TransactionRequest,
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;
use auto_impl::auto_impl;

use crate::error::QueryError;

sol! {
    /// Read-only view of the lottery contract.
    interface ILottery {
        function getCurrentGameInfo()
            external
            view
            returns (
                uint256 gameNumber,
                uint256 difficulty,
                uint256 prizePool,
                uint256 drawTime,
                uint256 timeUntilDraw
            );
    }
}

/// Snapshot of the current game round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameInfo {
    pub game_number: U256,
    pub difficulty: U256,
    /// Amount in the smallest unit of the native currency.
    pub prize_pool: U256,
    /// Unix timestamp in seconds.
    pub draw_time: u64,
    pub time_until_draw: u64,
}

#[async_trait]
#[auto_impl(&, Box, Arc)]
pub trait GameInfoSource {
    async fn get_game_info(&self, contract_address: Address) -> Result<GameInfo, QueryError>;
}

impl TryFrom<ILottery::getCurrentGameInfoReturn> for GameInfo {
    type Error = QueryError;

    fn try_from(value: ILottery::getCurrentGameInfoReturn) -> Result<Self, Self::Error> {
        Ok(Self {
            game_number: value.gameNumber,
            difficulty: value.difficulty,
            prize_pool: value.prizePool,
            draw_time: narrow("drawTime", value.drawTime)?,
            time_until_draw: narrow("timeUntilDraw", value.timeUntilDraw)?,
        })
    }
}

#[async_trait]
impl GameInfoSource for RootProvider {
    async fn get_game_info(&self, contract_address: Address) -> Result<GameInfo, QueryError> {
        let request = TransactionRequest::default()
            .with_to(contract_address)
            .with_input(ILottery::getCurrentGameInfoCall {}.abi_encode());

        let output = self.call(request).await?;
        log::debug!("getCurrentGameInfo returned {} bytes", output.len());

        let decoded = ILottery::getCurrentGameInfoCall::abi_decode_returns(&output)?;

        decoded.try_into()
    }
}

fn narrow(field: &'static str, value: U256) -> Result<u64, QueryError> {
    u64::try_from(value).map_err(|_| QueryError::OutOfRange { field, value })
}
