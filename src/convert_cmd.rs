//! Convert command: print the lunar date for one Gregorian date.

use anyhow::{Context, Result, ensure};
use chrono::{FixedOffset, Local, Utc};
use tracing::{info, info_span, warn};

use lunkalendaro::Date;
use lunkalendaro::chinese::{Converter, NamedLunarDate, YearWalk};

use crate::cli::{ConvertArgs, Form};
use crate::config::AppConfig;

/// Run the conversion.
pub fn run(args: ConvertArgs, config: AppConfig) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    // CLI flags override config file values
    let mut options = config.conversion;
    if args.legacy {
        options.year_walk = YearWalk::Legacy;
    }
    let form = args.form.unwrap_or(config.output.form);

    let date = match args.date {
        Some(date) => date,
        None => today(args.utc_offset.or(config.output.utc_offset_hours))?,
    };
    info!(%date, year_walk = ?options.year_walk, "converting");

    let lunar = Converter::new(options)
        .solar_to_lunar(date)
        .with_context(|| format!("cannot convert {date}"))?;
    if let Some(degradation) = lunar.degradation {
        warn!(%date, ?degradation, "result is not calendrically authoritative");
    }

    println!("{}", render(&lunar, form)?);
    Ok(())
}

fn render(lunar: &NamedLunarDate, form: Form) -> Result<String> {
    Ok(match form {
        Form::Long => lunar.long_form(),
        Form::Short => lunar.short_form(),
        Form::Both => format!("{}\n{}", lunar.short_form(), lunar.long_form()),
        Form::Json => serde_json::to_string_pretty(lunar).context("failed to serialize result")?,
    })
}

/// Today's civil date at the given UTC offset, or in local time.
fn today(utc_offset_hours: Option<f64>) -> Result<Date> {
    let naive = match utc_offset_hours {
        Some(hours) => {
            ensure!(hours.is_finite(), "invalid UTC offset: {hours} hours");
            let seconds = (hours * 3600.0).round() as i32;
            let offset = FixedOffset::east_opt(seconds)
                .with_context(|| format!("invalid UTC offset: {hours} hours"))?;
            Utc::now().with_timezone(&offset).date_naive()
        }
        None => Local::now().date_naive(),
    };
    Date::try_from(naive).context("today's date is out of range")
}
