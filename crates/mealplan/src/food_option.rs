use mealprep_shared::{FoodOption, IngredientOption, RecipeOption};
use serde::Serialize;

/// Number of food labels shown in a calendar cell.
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

pub const UNKNOWN_RECIPE: &str = "Unknown Recipe";
pub const UNKNOWN_INGREDIENT: &str = "Unknown Ingredient";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodOptionKind {
    Recipe,
    Ingredient,
}

/// Kind of a food option, decided by its component type only.
pub fn classify(option: &FoodOption) -> Option<FoodOptionKind> {
    match option {
        FoodOption::Recipe(_) => Some(FoodOptionKind::Recipe),
        FoodOption::Ingredient(_) => Some(FoodOptionKind::Ingredient),
        FoodOption::Unrecognized => None,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub labels: Vec<String>,
    /// Labelable entries that did not fit in `labels`.
    pub overflow: usize,
}

impl Preview {
    pub fn more_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

/// Bounded list of labels for a calendar cell: recipe titles first, then
/// ingredient names, each in input order.
///
/// Options whose recipe or ingredient is missing (or has an empty name) have
/// nothing to show and are left out of both `labels` and `overflow`.
pub fn preview_labels(options: &[FoodOption], limit: usize) -> Preview {
    let recipes = options.iter().filter_map(|option| match option {
        FoodOption::Recipe(item) => item.recipe.as_ref().map(|r| r.title.as_str()),
        _ => None,
    });

    let ingredients = options.iter().filter_map(|option| match option {
        FoodOption::Ingredient(item) => item.ingredient.as_ref().map(|i| i.name.as_str()),
        _ => None,
    });

    let labelable = recipes
        .chain(ingredients)
        .filter(|label| !label.is_empty())
        .collect::<Vec<_>>();

    Preview {
        overflow: labelable.len().saturating_sub(limit),
        labels: labelable.into_iter().take(limit).map(str::to_owned).collect(),
    }
}

#[derive(Debug, Default, PartialEq, Serialize)]
pub struct DetailGroups<'a> {
    pub recipes: Vec<&'a RecipeOption>,
    pub ingredients: Vec<&'a IngredientOption>,
}

impl DetailGroups<'_> {
    pub fn len(&self) -> usize {
        self.recipes.len() + self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty() && self.ingredients.is_empty()
    }
}

/// Unbounded split of a slot's options for the day view. Options with a
/// missing reference stay in their group.
pub fn detail_groups(options: &[FoodOption]) -> DetailGroups<'_> {
    let mut groups = DetailGroups::default();

    for option in options {
        match option {
            FoodOption::Recipe(item) => groups.recipes.push(item),
            FoodOption::Ingredient(item) => groups.ingredients.push(item),
            FoodOption::Unrecognized => {}
        }
    }

    groups
}

/// How a food option reads on the day view.
pub trait FoodOptionDisplay {
    /// Name shown for the option, with a placeholder when the reference is gone.
    fn display_name(&self) -> &str;

    /// Detail page of the referenced entry.
    fn href(&self) -> Option<String>;

    fn quantity_label(&self) -> Option<String>;

    fn unit_label(&self) -> Option<String>;
}

impl FoodOptionDisplay for RecipeOption {
    fn display_name(&self) -> &str {
        self.recipe
            .as_ref()
            .map(|r| r.title.as_str())
            .filter(|title| !title.is_empty())
            .unwrap_or(UNKNOWN_RECIPE)
    }

    fn href(&self) -> Option<String> {
        self.recipe.as_ref().map(|r| format!("/recipes/{}", r.id))
    }

    fn quantity_label(&self) -> Option<String> {
        self.quantity.map(format_quantity)
    }

    fn unit_label(&self) -> Option<String> {
        self.unit.as_ref().map(|unit| unit.label(self.quantity))
    }
}

impl FoodOptionDisplay for IngredientOption {
    fn display_name(&self) -> &str {
        self.ingredient
            .as_ref()
            .map(|i| i.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_INGREDIENT)
    }

    fn href(&self) -> Option<String> {
        self.ingredient
            .as_ref()
            .map(|i| format!("/ingredients/{}", i.slug))
    }

    fn quantity_label(&self) -> Option<String> {
        self.quantity.map(format_quantity)
    }

    fn unit_label(&self) -> Option<String> {
        None
    }
}

fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < i64::MAX as f64 {
        format!("{}", quantity as i64)
    } else {
        format!("{quantity}")
    }
}
