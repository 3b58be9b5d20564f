use anyhow::Result;
use mealprep::{render::DayText, snapshot};
use mealprep_mealplan::DayDetail;

use super::Format;

#[tracing::instrument]
pub fn day(date: &str, source: &str, format: Format) -> Result<()> {
    let slots = snapshot::load_slots(source)?;
    let detail = DayDetail::build(date, &slots)?;
    tracing::info!(
        loaded = slots.len(),
        shown = detail.slots.len(),
        "Rendering meal prep day"
    );

    super::print(format, &detail, DayText(&detail))
}
