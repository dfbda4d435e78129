use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A trimmed, non-empty dish name typed by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub recipe: Vec<String>,
}

impl Dish {
    /// One ingredient per line.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join("\n")
    }

    /// Numbered steps, `1. first` on the first line.
    pub fn recipe_text(&self) -> String {
        self.recipe
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {}", index + 1, step))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Generated photographs as `data:` URIs, in the order the provider returned them.
pub type ImageSet = Vec<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Ingredients,
    Recipe,
}

impl CopyTarget {
    pub fn render(&self, dish: &Dish) -> String {
        match self {
            CopyTarget::Ingredients => dish.ingredients_text(),
            CopyTarget::Recipe => dish.recipe_text(),
        }
    }
}

impl std::str::FromStr for CopyTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ingredients" => Ok(CopyTarget::Ingredients),
            "recipe" => Ok(CopyTarget::Recipe),
            other => Err(format!("Nothing to copy for '{}'. Use ingredients or recipe", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbonara() -> Dish {
        Dish {
            name: "Spaghetti Carbonara".into(),
            description: "Roman pasta".into(),
            ingredients: vec!["200g spaghetti".into(), "2 eggs".into()],
            recipe: vec!["Boil pasta".into(), "Mix eggs".into()],
        }
    }

    #[test]
    fn query_is_trimmed() {
        assert_eq!(SearchQuery::parse("  Pad Thai \n").unwrap().as_str(), "Pad Thai");
    }

    #[test]
    fn blank_query_is_rejected() {
        assert_eq!(SearchQuery::parse(""), Err(ValidationError::EmptyQuery));
        assert_eq!(SearchQuery::parse(" \t\n"), Err(ValidationError::EmptyQuery));
    }

    #[test]
    fn ingredients_copy_is_newline_joined() {
        assert_eq!(carbonara().ingredients_text(), "200g spaghetti\n2 eggs");
    }

    #[test]
    fn recipe_copy_is_numbered_from_one() {
        assert_eq!(carbonara().recipe_text(), "1. Boil pasta\n2. Mix eggs");
    }

    #[test]
    fn empty_lists_copy_as_empty_text() {
        let dish = Dish {
            name: "Water".into(),
            description: String::new(),
            ingredients: vec![],
            recipe: vec![],
        };
        assert_eq!(dish.ingredients_text(), "");
        assert_eq!(dish.recipe_text(), "");
    }

    #[test]
    fn copy_target_dispatches() {
        let dish = carbonara();
        let target: CopyTarget = "Recipe".parse().unwrap();
        assert_eq!(target.render(&dish), dish.recipe_text());
        assert!("steps".parse::<CopyTarget>().is_err());
    }
}
