use alloy::primitives::U256;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Locale, TimeZone, Utc};
use num_bigint::{BigInt, Sign};

/// Decimals of the native currency on every supported network.
pub const NATIVE_DECIMALS: i64 = 18;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Converts an amount in the smallest unit into a decimal string without trailing zeros.
pub fn format_native_amount(raw: U256) -> String {
    let raw = BigInt::from_bytes_be(Sign::Plus, &raw.to_be_bytes::<32>());
    let plain = BigDecimal::new(raw, NATIVE_DECIMALS).to_plain_string();

    match plain.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_owned()
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => plain,
    }
}

pub fn format_difficulty(difficulty: U256) -> String {
    group_thousands(&difficulty.to_string())
}

/// Locale of the running process, falling back to `en_US` when it's unknown.
pub fn system_locale() -> Locale {
    sys_locale::get_locale()
        .and_then(|tag| parse_locale(&tag))
        .unwrap_or(Locale::en_US)
}

/// Accepts both BCP 47 (`de-DE`) and POSIX (`de_DE.UTF-8`) locale tags.
fn parse_locale(tag: &str) -> Option<Locale> {
    let name = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .replace('-', "_");

    Locale::try_from(name.as_str()).ok()
}

/// Renders a unix timestamp in seconds as a calendar date and time in `tz`, laid out for
/// `locale`.
pub fn format_draw_time<Tz>(draw_time: u64, tz: &Tz, locale: Locale) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let datetime = draw_time
        .checked_mul(1000)
        .and_then(|millis| i64::try_from(millis).ok())
        .and_then(DateTime::<Utc>::from_timestamp_millis);

    let Some(datetime) = datetime else {
        return "Invalid Date".to_owned();
    };
    let datetime = datetime.with_timezone(tz);

    match locale {
        // The `en_US` locale data zero-pads dates; keep the unpadded US layout.
        Locale::en_US => datetime.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        locale => datetime.format_localized("%x, %X", locale).to_string(),
    }
}

/// Renders a countdown using its two most significant units, e.g. `2h 15m`.
pub fn format_time_until(seconds: u64) -> String {
    if seconds == 0 {
        return "now".to_owned();
    }

    let days = seconds / SECONDS_PER_DAY;
    let hours = (seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let secs = seconds % SECONDS_PER_MINUTE;

    if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (ind, ch) in digits.chars().enumerate() {
        if ind > 0 && (digits.len() - ind) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
