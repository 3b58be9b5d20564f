use anyhow::Result;
use mealprep::render::WeekText;

use super::Format;

pub fn week(date: &str, format: Format) -> Result<()> {
    let dates = mealprep_mealplan::compute_week_dates(date)?;
    let keys = dates.map(mealprep_mealplan::format_date_key);

    super::print(format, &keys, WeekText(&dates))
}
