use mealprep_mealplan::{
    DEFAULT_PREVIEW_LIMIT, FoodOptionDisplay, FoodOptionKind, UNKNOWN_INGREDIENT, UNKNOWN_RECIPE,
    classify, detail_groups, preview_labels,
};
use serde_json::json;

mod helpers;

#[test]
fn preview_truncates_to_limit_and_reports_overflow() {
    let options = helpers::options(json!([
        helpers::recipe("r1", "Shakshuka"),
        helpers::ingredient("feta", "Feta"),
        helpers::recipe("r2", "Flatbread"),
        helpers::ingredient("olives", "Olives"),
        helpers::recipe("r3", "Hummus"),
    ]));

    let preview = preview_labels(&options, DEFAULT_PREVIEW_LIMIT);
    assert_eq!(preview.labels, ["Shakshuka", "Flatbread", "Hummus"]);
    assert_eq!(preview.overflow, 2);
    assert_eq!(preview.more_label().as_deref(), Some("+2 more"));
}

#[test]
fn preview_overflow_ignores_deleted_references() {
    let options = helpers::options(json!([
        helpers::recipe("r1", "Porridge"),
        { "__typename": "ComponentPlanItemRecipeItem", "quantity": 1, "unit": "bowl", "recipe": null },
        { "__typename": "ComponentPlanItemIngredientItem", "quantity": 2, "ingredient": null },
        helpers::ingredient("blueberry", "Blueberries"),
        helpers::ingredient("walnut", "Walnuts"),
    ]));

    let preview = preview_labels(&options, 3);
    assert_eq!(preview.labels, ["Porridge", "Blueberries", "Walnuts"]);
    assert_eq!(preview.overflow, 0);
}

#[test]
fn preview_with_custom_limit() {
    let options = helpers::options(json!([
        helpers::ingredient("kale", "Kale"),
        helpers::ingredient("lemon", "Lemon"),
    ]));

    let preview = preview_labels(&options, 1);
    assert_eq!(preview.labels, ["Kale"]);
    assert_eq!(preview.overflow, 1);
}

#[test]
fn detail_partition_counts_recognized_options() {
    let options = helpers::options(json!([
        helpers::recipe("r1", "Curry"),
        { "__typename": "ComponentPlanItemDrinkItem", "drink": "Lassi" },
        helpers::ingredient("rice", "Basmati"),
        { "__typename": "ComponentPlanItemRecipeItem", "quantity": null, "unit": null, "recipe": null },
        helpers::ingredient("naan", "Naan"),
    ]));

    let recognized = options.iter().filter_map(classify).count();
    let groups = detail_groups(&options);

    assert_eq!(recognized, 4);
    assert_eq!(groups.recipes.len() + groups.ingredients.len(), recognized);
    assert_eq!(groups.len(), recognized);

    let names = groups
        .recipes
        .iter()
        .map(|r| r.display_name())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Curry", UNKNOWN_RECIPE]);

    let names = groups
        .ingredients
        .iter()
        .map(|i| i.display_name())
        .collect::<Vec<_>>();
    assert_eq!(names, ["Basmati", "Naan"]);
}

#[test]
fn detail_of_only_unknown_options_is_empty() {
    let options = helpers::options(json!([
        { "__typename": "ComponentPlanItemNote" },
    ]));

    assert_eq!(classify(&options[0]), None);
    assert!(detail_groups(&options).is_empty());
}

#[test]
fn classify_never_looks_at_fields() {
    let options = helpers::options(json!([
        { "__typename": "ComponentPlanItemIngredientItem", "quantity": 1, "ingredient": null },
    ]));

    assert_eq!(classify(&options[0]), Some(FoodOptionKind::Ingredient));
    assert_eq!(
        detail_groups(&options).ingredients[0].display_name(),
        UNKNOWN_INGREDIENT
    );
}

#[test]
fn unknown_unit_keeps_the_option() {
    let options = helpers::options(json!([
        { "__typename": "ComponentPlanItemRecipeItem", "quantity": 2, "unit": "cup",
          "recipe": { "documentId": "r1", "title": "Miso soup" } },
        helpers::ingredient("tofu", "Tofu"),
    ]));

    let groups = detail_groups(&options);
    assert_eq!(groups.recipes.len(), 1);
    assert_eq!(groups.recipes[0].display_name(), "Miso soup");
    assert_eq!(groups.recipes[0].unit_label().as_deref(), Some("cup"));
    assert_eq!(preview_labels(&options, 3).labels, ["Miso soup", "Tofu"]);
}

#[test]
fn component_without_typename_is_skipped() {
    let options = helpers::options(json!([
        { "quantity": 1, "ingredient": { "documentId": "i1", "name": "Salt", "slug": "salt" } },
        helpers::recipe("r1", "Risotto"),
    ]));

    assert_eq!(classify(&options[0]), None);
    let groups = detail_groups(&options);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.recipes[0].display_name(), "Risotto");
}
