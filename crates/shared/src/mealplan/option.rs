use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};

use crate::recipe::{IngredientRef, RecipeRef, RecipeUnit};

pub const RECIPE_ITEM_TYPENAME: &str = "ComponentPlanItemRecipeItem";
pub const INGREDIENT_ITEM_TYPENAME: &str = "ComponentPlanItemIngredientItem";

/// One recipe-or-ingredient choice attached to a meal slot, discriminated by
/// the CMS component `__typename`.
///
/// Components with an unknown or missing `__typename` decode as
/// [`FoodOption::Unrecognized`]. A known component with a malformed body is
/// still an error.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "__typename")]
pub enum FoodOption {
    #[serde(rename = "ComponentPlanItemRecipeItem")]
    Recipe(RecipeOption),
    #[serde(rename = "ComponentPlanItemIngredientItem")]
    Ingredient(IngredientOption),
    Unrecognized,
}

#[derive(Deserialize)]
#[serde(tag = "__typename")]
enum TypedComponent {
    #[serde(rename = "ComponentPlanItemRecipeItem")]
    Recipe(RecipeOption),
    #[serde(rename = "ComponentPlanItemIngredientItem")]
    Ingredient(IngredientOption),
    #[serde(other)]
    Unrecognized,
}

#[derive(Deserialize)]
struct UntypedComponent {
    #[serde(rename = "__typename")]
    typename: Option<IgnoredAny>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Component {
    Typed(TypedComponent),
    Untyped(UntypedComponent),
}

impl<'de> Deserialize<'de> for FoodOption {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Component::deserialize(deserializer)? {
            Component::Typed(TypedComponent::Recipe(option)) => Ok(FoodOption::Recipe(option)),
            Component::Typed(TypedComponent::Ingredient(option)) => {
                Ok(FoodOption::Ingredient(option))
            }
            Component::Typed(TypedComponent::Unrecognized) => Ok(FoodOption::Unrecognized),
            Component::Untyped(UntypedComponent { typename: None }) => Ok(FoodOption::Unrecognized),
            Component::Untyped(UntypedComponent { typename: Some(_) }) => Err(
                serde::de::Error::custom("malformed recipe or ingredient component"),
            ),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeOption {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<RecipeUnit>,
    #[serde(default)]
    pub recipe: Option<RecipeRef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientOption {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub ingredient: Option<IngredientRef>,
}
