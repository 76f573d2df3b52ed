//! Year command: print the month table of one lunar year.

use anyhow::{Result, bail};
use tracing::debug;

use lunkalendaro::chinese::table::{self, FIRST_YEAR, LAST_YEAR};
use lunkalendaro::chinese::{Month, fmt};

use crate::cli::YearArgs;

pub fn run(args: YearArgs) -> Result<()> {
    let year = args.year;
    if !table::contains(year) {
        bail!("lunar year {year} is outside the table ({FIRST_YEAR}..={LAST_YEAR})");
    }
    debug!(year, raw = ?table::lookup_year(year), "describing year");
    print!("{}", describe(year));
    Ok(())
}

fn describe(year: i32) -> String {
    let mut rt = format!("{} {}年\n", fmt::year_name(year), fmt::zodiac(year));
    rt += &match table::leap_month(year) {
        0 => "闰月：无\n".to_owned(),
        m => format!("闰月：{}\n", fmt::month_name(Month::Leap(m))),
    };
    for month in table::months(year) {
        rt += &format!("{}\t{}\n", month.name(), table::month_days(year, month));
    }
    rt += &format!("共 {} 日\n", table::year_days(year));
    rt
}
