//! Reads meal-prep data captured from the CMS GraphQL endpoint.
//!
//! Accepted bodies, with or without the GraphQL `{"data": ...}` envelope:
//! `{"mealPrepPlans": [...]}`, `{"mealPrepPlan": {...}}`, `{"mealSlots": [...]}`
//! or a bare array of plans/slots.

use std::io::Read;

use anyhow::{Context, Result, bail};
use mealprep_shared::{MealPrepPlan, MealSlot};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Path meaning "read from stdin".
pub const STDIN: &str = "-";

pub fn load_plans(source: &str) -> Result<Vec<MealPrepPlan>> {
    parse_plans(&read_body(source)?).with_context(|| format!("failed to load plans from {source}"))
}

pub fn load_slots(source: &str) -> Result<Vec<MealSlot>> {
    parse_slots(&read_body(source)?).with_context(|| format!("failed to load slots from {source}"))
}

pub fn parse_plans(body: &str) -> Result<Vec<MealPrepPlan>> {
    let Some(value) = unwrap_data(serde_json::from_str(body).context("invalid JSON")?) else {
        return Ok(vec![]);
    };

    match value {
        Value::Array(_) => decode(value),
        Value::Object(mut fields) => {
            if let Some(plans) = fields.remove("mealPrepPlans") {
                return Ok(decode::<Option<Vec<MealPrepPlan>>>(plans)?.unwrap_or_default());
            }

            if let Some(plan) = fields.remove("mealPrepPlan") {
                return Ok(decode::<Option<MealPrepPlan>>(plan)?.into_iter().collect());
            }

            bail!("expected a `mealPrepPlans` or `mealPrepPlan` field")
        }
        _ => bail!("expected an object or an array of plans"),
    }
}

pub fn parse_slots(body: &str) -> Result<Vec<MealSlot>> {
    let Some(value) = unwrap_data(serde_json::from_str(body).context("invalid JSON")?) else {
        return Ok(vec![]);
    };

    match value {
        Value::Array(_) => decode(value),
        Value::Object(mut fields) => match fields.remove("mealSlots") {
            Some(slots) => Ok(decode::<Option<Vec<MealSlot>>>(slots)?.unwrap_or_default()),
            None => bail!("expected a `mealSlots` field"),
        },
        _ => bail!("expected an object or an array of slots"),
    }
}

fn read_body(source: &str) -> Result<String> {
    if source == STDIN {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .context("failed to read stdin")?;

        return Ok(body);
    }

    std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))
}

/// Strips the GraphQL envelope. GraphQL errors are logged; a response whose
/// `data` is null yields `None`.
fn unwrap_data(value: Value) -> Option<Value> {
    let Value::Object(mut fields) = value else {
        return Some(value);
    };

    if !fields.contains_key("data") && !fields.contains_key("errors") {
        return Some(Value::Object(fields));
    }

    if let Some(Value::Array(errors)) = fields.remove("errors") {
        for error in &errors {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            tracing::error!(error = message, "GraphQL error in snapshot");
        }
    }

    fields.remove("data").filter(|data| !data.is_null())
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).context("unexpected snapshot shape")
}
