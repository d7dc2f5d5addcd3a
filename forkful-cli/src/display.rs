use forkful_core::{GenerationMetadata, Recipe, TraceInfo};

const RULE: &str = "============================================================";

pub fn print_welcome() {
    println!("Welcome to Forkful!");
    println!("Enter ingredients separated by commas, or 'quit' to exit.");
    println!("Example: chicken, rice, bell peppers, soy sauce");
    println!();
}

pub fn print_recipe(recipe: &Recipe, metadata: &GenerationMetadata) {
    println!("\n{RULE}");
    println!("  {}", recipe.name);
    println!("{RULE}");

    println!("\nServings: {}", recipe.servings);
    println!("Cooking time: {}", recipe.cooking_time);

    println!("\nIngredients:");
    for (index, ingredient) in recipe.ingredients.iter().enumerate() {
        println!("  {}. {}", index + 1, ingredient);
    }

    println!("\nInstructions:");
    for (index, instruction) in recipe.instructions.iter().enumerate() {
        println!("  {}. {}", index + 1, instruction);
    }

    println!("\nGeneration stats:");
    println!("  model:   {}", metadata.model);
    println!("  tokens:  {}", metadata.total_tokens);
    println!("  latency: {:.2}s", metadata.latency_seconds);
    println!("  cost:    ${:.4}", metadata.cost_usd);
    println!("{RULE}");
}

pub fn print_failure(message: &str) {
    eprintln!("Error generating recipe: {message}");
}

pub fn print_trace_info(tracer_name: &str, info: &TraceInfo) {
    match &info.error {
        Some(error) => println!("[{tracer_name}] tracing failed: {error}"),
        None => {
            let mut line = format!("[{tracer_name}] recorded via {}", info.method);
            if let Some(trace_id) = &info.trace_id {
                line.push_str(&format!(" (trace: {trace_id}"));
                if let Some(observation_id) = &info.observation_id {
                    line.push_str(&format!(", observation: {observation_id}"));
                }
                line.push(')');
            }
            println!("{line}");
        }
    }
}
