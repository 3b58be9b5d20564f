use anyhow::Result;
use mealprep::{config::Config, render::CalendarText, snapshot};
use mealprep_mealplan::CalendarPage;

use super::Format;

#[tracing::instrument(skip(config))]
pub fn calendar(config: &Config, source: &str, format: Format, today: Option<&str>) -> Result<()> {
    let plans = snapshot::load_plans(source)?;

    let today = match today {
        Some(value) => mealprep_mealplan::date_key(value)?,
        None => mealprep_mealplan::today(&config.calendar.timezone),
    };

    let page = CalendarPage::build(&plans, today, config.calendar.preview_limit)?;
    tracing::info!(plans = page.plans.len(), "Rendering meal prep calendar");

    super::print(format, &page, CalendarText(&page))
}
