use std::fmt::{self, Display, Formatter};

use mealprep_mealplan::{CalendarPage, DayDetail, PlanCalendar, SlotDetail, format_date_key};
use serde::Serialize;
use time::Date;

/// Plain-text rendering of the weekly calendars.
pub struct CalendarText<'a>(pub &'a CalendarPage<'a>);

/// Plain-text rendering of a single day.
pub struct DayText<'a>(pub &'a DayDetail<'a>);

/// One date per line, Sunday first.
pub struct WeekText<'a>(pub &'a [Date; 7]);

impl Display for CalendarText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(message) = self.0.empty_message {
            return writeln!(f, "{message}");
        }

        for (index, plan) in self.0.plans.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write_plan(f, plan)?;
        }

        Ok(())
    }
}

fn write_plan(f: &mut Formatter<'_>, plan: &PlanCalendar<'_>) -> fmt::Result {
    writeln!(f, "{} [{}]", plan.title, plan.status_label)?;
    writeln!(f, "{}", plan.range_label)?;

    for day in &plan.days {
        writeln!(f)?;
        write!(f, "{} {:>2} ({})", day.weekday, day.day_of_month, day.date)?;
        if day.is_today {
            write!(f, " *today*")?;
        }
        writeln!(f)?;

        if let Some(message) = day.empty_message {
            writeln!(f, "  {message}")?;
        }

        for slot in &day.slots {
            writeln!(f, "  {}: {}", slot.label, slot.title)?;
            for label in &slot.preview.labels {
                writeln!(f, "    - {label}")?;
            }
            if let Some(more) = slot.preview.more_label() {
                writeln!(f, "    {more}")?;
            }
        }
    }

    Ok(())
}

impl Display for DayText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.heading)?;
        writeln!(f, "{}", self.0.count_label)?;

        if let Some(message) = self.0.empty_message {
            writeln!(f)?;
            return writeln!(f, "{message}");
        }

        for slot in &self.0.slots {
            writeln!(f)?;
            write_slot(f, slot)?;
        }

        Ok(())
    }
}

fn write_slot(f: &mut Formatter<'_>, slot: &SlotDetail<'_>) -> fmt::Result {
    writeln!(f, "== {} ({}) ==", slot.title, slot.label)?;

    if let Some(plan) = &slot.plan {
        writeln!(f, "Plan: {} (week of {})", plan.title, plan.week_start)?;
    }

    if let Some(message) = slot.empty_message {
        return writeln!(f, "{message}");
    }

    if !slot.recipes.is_empty() {
        writeln!(f, "Recipes:")?;
        for recipe in &slot.recipes {
            write!(f, "  - {}", recipe.name)?;
            match (&recipe.quantity, &recipe.unit) {
                (Some(quantity), Some(unit)) => write!(f, "  {quantity} {unit}")?,
                (Some(quantity), None) => write!(f, "  {quantity}")?,
                (None, Some(unit)) => write!(f, "  {unit}")?,
                (None, None) => {}
            }
            if let Some(href) = &recipe.href {
                write!(f, "  {href}")?;
            }
            writeln!(f)?;
        }
    }

    if !slot.ingredients.is_empty() {
        writeln!(f, "Ingredients:")?;
        for ingredient in &slot.ingredients {
            write!(f, "  - {}", ingredient.name)?;
            if let Some(quantity) = &ingredient.quantity {
                write!(f, "  x{quantity}")?;
            }
            if let Some(href) = &ingredient.href {
                write!(f, "  {href}")?;
            }
            writeln!(f)?;
        }
    }

    Ok(())
}

impl Display for WeekText<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for date in self.0 {
            writeln!(f, "{} {}", date.weekday(), format_date_key(*date))?;
        }

        Ok(())
    }
}

pub fn json<T: Serialize>(view: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn week_text_lists_seven_days() {
        let dates = mealprep_mealplan::week_dates(date!(2025 - 06 - 12)).unwrap();
        let text = WeekText(&dates).to_string();

        assert_eq!(text.lines().count(), 7);
        assert_eq!(text.lines().next(), Some("Sunday 2025-06-08"));
        assert_eq!(text.lines().last(), Some("Saturday 2025-06-14"));
    }

    #[test]
    fn empty_calendar_text() {
        let page = CalendarPage::build(&[], date!(2025 - 06 - 10), 3).unwrap();
        assert_eq!(
            CalendarText(&page).to_string(),
            format!("{}\n", mealprep_mealplan::NO_PLANS)
        );
    }
}
