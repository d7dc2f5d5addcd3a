//! Prompt construction for recipe generation.
//!
//! Both functions are pure: the same ingredients and dietary restrictions
//! always produce the same prompt text.

/// System instruction sent with every generation request.
pub fn recipe_system_prompt() -> &'static str {
    "You are a helpful cooking assistant who creates safe, delicious recipes. \
     Always carefully consider any dietary requirements, allergies, or \
     restrictions provided by the user. Generate recipes in valid JSON format \
     and ensure all ingredients and suggestions are safe for the user's \
     dietary needs."
}

/// Build the user prompt from an ingredient list and optional dietary
/// restrictions. Every token appears verbatim; the dietary block is only
/// emitted when at least one restriction is given.
pub fn build_user_prompt(ingredients: &[String], dietary: Option<&[String]>) -> String {
    let ingredients_list = ingredients.join(", ");

    let dietary_section = match dietary {
        Some(restrictions) if !restrictions.is_empty() => format!(
            "\nIMPORTANT DIETARY REQUIREMENTS & ALLERGIES: {}\n\
             Please ensure this recipe is completely safe for someone with \
             these dietary restrictions/allergies.",
            restrictions.join(", ")
        ),
        _ => String::new(),
    };

    format!(
        "Create a recipe using these available ingredients: {ingredients_list}\n\
         {dietary_section}\n\
         \n\
         Rules:\n\
         - Use as many of the provided ingredients as possible\n\
         - Add reasonable quantities for each ingredient\n\
         - Include common pantry items (salt, pepper, oil, etc.) if needed\n\
         - Provide clear, step-by-step instructions\n\
         - Make it practical and delicious\n\
         - CRITICAL: If dietary requirements are specified, absolutely avoid \
         any ingredients or suggestions that conflict with those restrictions\n\
         - Double-check that all ingredients (including pantry items) are \
         safe for the specified dietary needs\n\
         - Aim for 4 servings"
    )
}
