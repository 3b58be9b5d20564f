mod option;

pub use option::*;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Meal order used to lay out a day. Slot types missing from this list sort after it.
pub const SLOT_ORDER: [SlotType; 5] = [
    SlotType::Breakfast,
    SlotType::Brunch,
    SlotType::Lunch,
    SlotType::EveningSnack,
    SlotType::Dinner,
];

const NEUTRAL_COLOR: &str = "bg-gray-100 text-gray-800 border-gray-300";

#[derive(
    EnumString, Display, AsRefStr, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(from = "String", into = "String")]
pub enum SlotType {
    Breakfast,
    Brunch,
    Lunch,
    EveningSnack,
    Dinner,
    /// A value the CMS knows about but this build does not.
    #[strum(default, transparent)]
    Other(String),
}

impl SlotType {
    /// Position in [`SLOT_ORDER`], or `SLOT_ORDER.len()` when unrecognized.
    pub fn position(&self) -> usize {
        SLOT_ORDER
            .iter()
            .position(|slot_type| slot_type == self)
            .unwrap_or(SLOT_ORDER.len())
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SlotType::Other(_))
    }

    pub fn label(&self) -> &str {
        match self {
            SlotType::Breakfast => "Breakfast",
            SlotType::Brunch => "Brunch",
            SlotType::Lunch => "Lunch",
            SlotType::EveningSnack => "Evening Snack",
            SlotType::Dinner => "Dinner",
            SlotType::Other(value) => value,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            SlotType::Breakfast => "bg-yellow-100 text-yellow-800 border-yellow-300",
            SlotType::Brunch => "bg-orange-100 text-orange-800 border-orange-300",
            SlotType::Lunch => "bg-green-100 text-green-800 border-green-300",
            SlotType::EveningSnack => "bg-purple-100 text-purple-800 border-purple-300",
            SlotType::Dinner => "bg-blue-100 text-blue-800 border-blue-300",
            SlotType::Other(_) => NEUTRAL_COLOR,
        }
    }
}

impl From<String> for SlotType {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(slot_type) => slot_type,
            Err(never) => match never {},
        }
    }
}

impl From<SlotType> for String {
    fn from(value: SlotType) -> Self {
        match value {
            SlotType::Other(value) => value,
            recognized => recognized.to_string(),
        }
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

impl PlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::Draft => "Draft",
            PlanStatus::Active => "Active",
            PlanStatus::Archived => "Archived",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PlanStatus::Active => "bg-green-100 text-green-800 border-green-300",
            PlanStatus::Draft => NEUTRAL_COLOR,
            PlanStatus::Archived => "bg-red-100 text-red-800 border-red-300",
        }
    }
}

/// Plan summary embedded in a slot fetched on its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRef {
    #[serde(rename = "documentId")]
    pub id: String,
    pub title: String,
    pub week_start_date: String,
    #[serde(rename = "statusOfThePlan")]
    pub status: PlanStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSlot {
    #[serde(rename = "documentId")]
    pub id: String,
    #[serde(rename = "titleOfMealSlot", default)]
    pub title: String,
    /// Raw CMS value, either `YYYY-MM-DD` or a full timestamp.
    pub date: String,
    pub slot_type: SlotType,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub food_options: Vec<FoodOption>,
    #[serde(rename = "meal_prep_plan", default)]
    pub plan: Option<PlanRef>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPrepPlan {
    #[serde(rename = "documentId")]
    pub id: String,
    pub title: String,
    pub week_start_date: String,
    #[serde(rename = "statusOfThePlan")]
    pub status: PlanStatus,
    #[serde(rename = "meal_slots", default, deserialize_with = "null_as_empty")]
    pub slots: Vec<MealSlot>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
