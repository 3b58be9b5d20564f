use mealprep_shared::{FoodOption, MealPrepPlan, MealSlot};
use serde_json::{Value, json};

#[allow(dead_code)]
pub fn slot(id: &str, date: &str, slot_type: &str) -> MealSlot {
    slot_with_options(id, date, slot_type, json!([]))
}

#[allow(dead_code)]
pub fn slot_with_options(id: &str, date: &str, slot_type: &str, food_options: Value) -> MealSlot {
    serde_json::from_value(json!({
        "documentId": id,
        "titleOfMealSlot": format!("slot {id}"),
        "date": date,
        "slotType": slot_type,
        "foodOptions": food_options,
    }))
    .unwrap()
}

#[allow(dead_code)]
pub fn plan(week_start_date: &str, slots: Vec<MealSlot>) -> MealPrepPlan {
    let mut plan: MealPrepPlan = serde_json::from_value(json!({
        "documentId": "plan-1",
        "title": "Summer prep",
        "weekStartDate": week_start_date,
        "statusOfThePlan": "active",
        "meal_slots": []
    }))
    .unwrap();
    plan.slots = slots;
    plan
}

#[allow(dead_code)]
pub fn recipe(id: &str, title: &str) -> Value {
    json!({
        "__typename": "ComponentPlanItemRecipeItem",
        "quantity": 1,
        "unit": "serving",
        "recipe": { "documentId": id, "title": title }
    })
}

#[allow(dead_code)]
pub fn ingredient(slug: &str, name: &str) -> Value {
    json!({
        "__typename": "ComponentPlanItemIngredientItem",
        "quantity": 100,
        "ingredient": { "documentId": format!("id-{slug}"), "name": name, "slug": slug }
    })
}

#[allow(dead_code)]
pub fn options(values: Value) -> Vec<FoodOption> {
    serde_json::from_value(values).unwrap()
}
