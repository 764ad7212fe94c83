use anyhow::Result;
use chrono::{Local, Locale, TimeZone};
use clap::Parser;

use crate::{
    error::StatusError,
    format::{
        format_difficulty, format_draw_time, format_native_amount, format_time_until,
        system_locale,
    },
    game::{GameInfo, GameInfoSource},
    network::Network,
    provider::{ClientFactory, HttpClientFactory},
    settings::{SettingsFile, SettingsSource},
};

#[derive(Debug, Parser)]
pub struct Status {}

impl Status {
    pub async fn run(self) -> Result<()> {
        println!("🔍 Fetching current game status...");

        let settings_file = SettingsFile::locate().map_err(StatusError::Config)?;
        let report = fetch_status(&settings_file, &HttpClientFactory).await?;

        print!("{}", report.render(&Local, system_locale()));

        Ok(())
    }
}

/// Game info together with what is needed to render it.
#[derive(Debug, Clone)]
pub struct StatusReport {
    pub network: Network,
    pub game_info: GameInfo,
}

pub async fn fetch_status<S, F>(
    settings_source: &S,
    client_factory: &F,
) -> Result<StatusReport, StatusError>
where
    S: SettingsSource + Sync,
    F: ClientFactory,
{
    let settings = settings_source
        .load_settings()
        .await
        .map_err(StatusError::Config)?;
    log::debug!(
        "loaded settings for {} (contract {})",
        settings.network,
        settings.contract_address
    );

    let client = client_factory
        .create_client(&settings)
        .map_err(StatusError::Client)?;

    let game_info = client.get_game_info(settings.contract_address).await?;
    log::debug!("fetched game info: {:?}", game_info);

    Ok(StatusReport {
        network: settings.network,
        game_info,
    })
}

impl StatusReport {
    pub fn render<Tz>(&self, tz: &Tz, locale: Locale) -> String
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let info = &self.game_info;
        let fields = [
            ("🎮 Current Game Round", info.game_number.to_string()),
            ("🎯 Difficulty", format_difficulty(info.difficulty)),
            (
                "💰 Prize Pool",
                format!(
                    "{} {} ✨",
                    format_native_amount(info.prize_pool),
                    self.network.native_currency()
                ),
            ),
            (
                "📅 Next Possible Draw Time",
                format_draw_time(info.draw_time, tz, locale),
            ),
            (
                "⏳ Time Until Draw",
                format_time_until(info.time_until_draw),
            ),
        ];

        let mut rendered = String::from("📊 Status:\n");
        for (label, value) in fields {
            rendered.push_str(&format!("{label}: {value}\n"));
        }

        rendered
    }
}
