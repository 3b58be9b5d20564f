use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Portion unit a recipe option is measured in.
#[derive(EnumString, Display, AsRefStr, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum RecipeUnit {
    Serving,
    Bowl,
    Plate,
    /// Unit added in the CMS after this build, shown as sent.
    #[strum(default, transparent)]
    Other(String),
}

impl RecipeUnit {
    /// Unit label for the given quantity.
    ///
    /// Only quantities strictly greater than one take the plural form, so
    /// `0.5 serving`, `1 serving` and an unspecified quantity stay singular.
    /// Unrecognized units are never pluralised.
    pub fn label(&self, quantity: Option<f64>) -> String {
        match (self, quantity) {
            (RecipeUnit::Other(raw), _) => raw.clone(),
            (unit, Some(q)) if q > 1.0 => format!("{unit}s"),
            (unit, _) => unit.to_string(),
        }
    }
}

impl From<String> for RecipeUnit {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(unit) => unit,
            Err(never) => match never {},
        }
    }
}

impl From<RecipeUnit> for String {
    fn from(value: RecipeUnit) -> Self {
        match value {
            RecipeUnit::Other(raw) => raw,
            known => known.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeRef {
    #[serde(rename = "documentId")]
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientImage {
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientRef {
    #[serde(rename = "documentId")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<IngredientImage>,
}

impl IngredientRef {
    /// Alt text for the ingredient picture, falling back to its name.
    pub fn image_alt(&self) -> Option<&str> {
        let image = self.image.as_ref()?;

        Some(
            image
                .alternative_text
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .unwrap_or(&self.name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_label_plural_only_above_one() {
        assert_eq!(RecipeUnit::Serving.label(Some(2.0)), "servings");
        assert_eq!(RecipeUnit::Bowl.label(Some(1.5)), "bowls");
        assert_eq!(RecipeUnit::Plate.label(Some(1.0)), "plate");
        assert_eq!(RecipeUnit::Serving.label(Some(0.5)), "serving");
        assert_eq!(RecipeUnit::Serving.label(None), "serving");
    }

    #[test]
    fn unit_parses_from_cms_value() {
        let unit: RecipeUnit = serde_json::from_str("\"bowl\"").unwrap();
        assert_eq!(unit, RecipeUnit::Bowl);
        assert_eq!("plate".parse::<RecipeUnit>().unwrap(), RecipeUnit::Plate);
    }

    #[test]
    fn unknown_unit_is_kept_verbatim() {
        let unit: RecipeUnit = serde_json::from_str("\"cup\"").unwrap();
        assert_eq!(unit, RecipeUnit::Other("cup".to_owned()));
        assert_eq!(unit.label(Some(3.0)), "cup");
        assert_eq!(serde_json::to_string(&unit).unwrap(), "\"cup\"");
    }

    #[test]
    fn image_alt_falls_back_to_name() {
        let mut ingredient = IngredientRef {
            id: "i1".to_owned(),
            name: "Oats".to_owned(),
            slug: "oats".to_owned(),
            image: None,
        };
        assert_eq!(ingredient.image_alt(), None);

        ingredient.image = Some(IngredientImage {
            url: "/uploads/oats.png".to_owned(),
            alternative_text: None,
            width: None,
            height: None,
        });
        assert_eq!(ingredient.image_alt(), Some("Oats"));
    }
}
