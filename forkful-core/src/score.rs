//! Advisory quality heuristics logged with experiment records.

use crate::Recipe;

const REQUIRED_FIELDS: f64 = 5.0;

/// Fraction of input ingredients that appear (case-insensitively) somewhere
/// in the recipe's ingredient list. 0.0 for an empty input list.
pub fn ingredient_usage(inputs: &[String], recipe_ingredients: &[String]) -> f64 {
    if inputs.is_empty() {
        return 0.0;
    }

    let recipe_text = recipe_ingredients.join(" ").to_lowercase();
    let used = inputs
        .iter()
        .filter(|ingredient| recipe_text.contains(&ingredient.to_lowercase()))
        .count();

    used as f64 / inputs.len() as f64
}

/// Completeness of a recipe over its five required fields, with a 0.5 bonus
/// each for non-empty ingredient and instruction lists, capped at 1.0.
pub fn recipe_completeness(recipe: &Recipe) -> f64 {
    let mut present = 0.0;
    if !recipe.name.is_empty() {
        present += 1.0;
    }
    if !recipe.ingredients.is_empty() {
        present += 1.0;
    }
    if !recipe.instructions.is_empty() {
        present += 1.0;
    }
    if !recipe.cooking_time.is_empty() {
        present += 1.0;
    }
    if recipe.servings > 0 {
        present += 1.0;
    }

    if !recipe.ingredients.is_empty() {
        present += 0.5;
    }
    if !recipe.instructions.is_empty() {
        present += 0.5;
    }

    (present / REQUIRED_FIELDS).min(1.0)
}
