use mealprep_shared::{MealPrepPlan, MealSlot, PlanStatus, SlotType};
use serde::Serialize;
use time::Date;

use crate::{
    DetailGroups, FoodOptionDisplay, Preview, Result, classify, date_key, detail_groups,
    format_date_key, group_slots_by_date, is_today, order_slots_within_day, preview_labels,
    week_dates,
};

pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const NO_PLANS: &str = "No meal prep plans found.";
pub const NO_MEALS: &str = "No meals";
pub const NO_SLOTS_FOR_DATE: &str = "No meal slots found for this date.";
pub const NO_FOOD_OPTIONS: &str = "No food options specified for this meal slot.";

/// Every plan laid out as a weekly calendar.
#[derive(Debug, Serialize)]
pub struct CalendarPage<'a> {
    pub plans: Vec<PlanCalendar<'a>>,
    pub empty_message: Option<&'static str>,
}

impl<'a> CalendarPage<'a> {
    pub fn build(plans: &'a [MealPrepPlan], today: Date, preview_limit: usize) -> Result<Self> {
        let plans = plans
            .iter()
            .map(|plan| PlanCalendar::build(plan, today, preview_limit))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            empty_message: plans.is_empty().then_some(NO_PLANS),
            plans,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PlanCalendar<'a> {
    pub id: &'a str,
    pub title: &'a str,
    /// e.g. `June 8 - 14, 2025`
    pub range_label: String,
    pub status: PlanStatus,
    pub status_label: &'static str,
    pub status_color: &'static str,
    pub days: Vec<CalendarDay<'a>>,
}

#[derive(Debug, Serialize)]
pub struct CalendarDay<'a> {
    pub date: String,
    pub weekday: &'static str,
    pub day_of_month: u8,
    pub href: String,
    pub is_today: bool,
    pub slots: Vec<CalendarSlot<'a>>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CalendarSlot<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub slot_type: &'a SlotType,
    pub label: &'a str,
    pub color: &'static str,
    pub preview: Preview,
}

impl<'a> PlanCalendar<'a> {
    pub fn build(plan: &'a MealPrepPlan, today: Date, preview_limit: usize) -> Result<Self> {
        let dates = week_dates(date_key(&plan.week_start_date)?)?;
        let mut slots_by_date = group_slots_by_date(&plan.slots)?;

        let days = dates
            .iter()
            .zip(DAYS_OF_WEEK)
            .map(|(&date, weekday)| {
                let slots = slots_by_date.remove(&date).unwrap_or_default();
                let slots = order_slots_within_day(slots)
                    .into_iter()
                    .map(|slot| CalendarSlot::build(slot, preview_limit))
                    .collect::<Vec<_>>();
                let key = format_date_key(date);

                CalendarDay {
                    href: format!("/meal-prep/{key}"),
                    date: key,
                    weekday,
                    day_of_month: date.day(),
                    is_today: is_today(date, today),
                    empty_message: slots.is_empty().then_some(NO_MEALS),
                    slots,
                }
            })
            .collect::<Vec<_>>();

        if !slots_by_date.is_empty() {
            tracing::debug!(
                plan = plan.id.as_str(),
                days = slots_by_date.len(),
                "meal slots outside the plan week are not shown"
            );
        }

        Ok(Self {
            id: &plan.id,
            title: &plan.title,
            range_label: range_label(dates[0], dates[6]),
            status: plan.status,
            status_label: plan.status.label(),
            status_color: plan.status.color(),
            days,
        })
    }
}

impl<'a> CalendarSlot<'a> {
    fn build(slot: &'a MealSlot, preview_limit: usize) -> Self {
        if !slot.slot_type.is_recognized() {
            tracing::debug!(
                slot = slot.id.as_str(),
                slot_type = slot.slot_type.label(),
                "unrecognized slot type"
            );
        }

        let unrecognized = slot
            .food_options
            .iter()
            .filter(|option| classify(option).is_none())
            .count();
        if unrecognized > 0 {
            tracing::debug!(
                slot = slot.id.as_str(),
                unrecognized,
                "food options of unknown type are not shown"
            );
        }

        Self {
            id: &slot.id,
            title: &slot.title,
            slot_type: &slot.slot_type,
            label: slot.slot_type.label(),
            color: slot.slot_type.color(),
            preview: preview_labels(&slot.food_options, preview_limit),
        }
    }
}

/// All slots of one calendar day with their full food options.
#[derive(Debug, Serialize)]
pub struct DayDetail<'a> {
    pub date: String,
    /// e.g. `Sunday, June 8, 2025`
    pub heading: String,
    pub count_label: String,
    pub slots: Vec<SlotDetail<'a>>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SlotDetail<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub label: &'a str,
    pub color: &'static str,
    pub plan: Option<PlanSummary<'a>>,
    pub recipes: Vec<RecipeLine<'a>>,
    pub ingredients: Vec<IngredientLine<'a>>,
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PlanSummary<'a> {
    pub title: &'a str,
    pub week_start: String,
}

#[derive(Debug, Serialize)]
pub struct RecipeLine<'a> {
    pub name: &'a str,
    pub href: Option<String>,
    pub quantity: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct IngredientLine<'a> {
    pub name: &'a str,
    pub href: Option<String>,
    pub quantity: Option<String>,
    pub image_url: Option<&'a str>,
    pub image_alt: Option<&'a str>,
}

impl<'a> DayDetail<'a> {
    /// Builds the day view from slots fetched for `date`. Slots dated on
    /// another day are ignored.
    pub fn build(date: &str, slots: &'a [MealSlot]) -> Result<Self> {
        let date = date_key(date)?;
        let slots = group_slots_by_date(slots)?
            .remove(&date)
            .unwrap_or_default();

        let slots = order_slots_within_day(slots)
            .into_iter()
            .map(SlotDetail::build)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            date: format_date_key(date),
            heading: format!(
                "{}, {} {}, {}",
                date.weekday(),
                date.month(),
                date.day(),
                date.year()
            ),
            count_label: count_label(slots.len()),
            empty_message: slots.is_empty().then_some(NO_SLOTS_FOR_DATE),
            slots,
        })
    }
}

impl<'a> SlotDetail<'a> {
    fn build(slot: &'a MealSlot) -> Result<Self> {
        let plan = match &slot.plan {
            Some(plan) => Some(PlanSummary {
                title: &plan.title,
                week_start: format_date_key(date_key(&plan.week_start_date)?),
            }),
            None => None,
        };

        let DetailGroups {
            recipes,
            ingredients,
        } = detail_groups(&slot.food_options);

        let recipes = recipes
            .into_iter()
            .map(|item| RecipeLine {
                name: item.display_name(),
                href: item.href(),
                quantity: item.quantity_label(),
                unit: item.unit_label(),
            })
            .collect::<Vec<_>>();

        let ingredients = ingredients
            .into_iter()
            .map(|item| IngredientLine {
                name: item.display_name(),
                href: item.href(),
                quantity: item.quantity_label(),
                image_url: item
                    .ingredient
                    .as_ref()
                    .and_then(|i| i.image.as_ref())
                    .map(|image| image.url.as_str()),
                image_alt: item.ingredient.as_ref().and_then(|i| i.image_alt()),
            })
            .collect::<Vec<_>>();

        Ok(Self {
            id: &slot.id,
            title: &slot.title,
            label: slot.slot_type.label(),
            color: slot.slot_type.color(),
            plan,
            empty_message: slot.food_options.is_empty().then_some(NO_FOOD_OPTIONS),
            recipes,
            ingredients,
        })
    }
}

fn range_label(start: Date, end: Date) -> String {
    if start.year() != end.year() {
        format!(
            "{} {}, {} - {} {}, {}",
            start.month(),
            start.day(),
            start.year(),
            end.month(),
            end.day(),
            end.year()
        )
    } else if start.month() != end.month() {
        format!(
            "{} {} - {} {}, {}",
            start.month(),
            start.day(),
            end.month(),
            end.day(),
            start.year()
        )
    } else {
        format!(
            "{} {} - {}, {}",
            start.month(),
            start.day(),
            end.day(),
            start.year()
        )
    }
}

fn count_label(count: usize) -> String {
    match count {
        1 => "1 meal slot scheduled".to_owned(),
        n => format!("{n} meal slots scheduled"),
    }
}
