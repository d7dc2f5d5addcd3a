use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use secrecy::ExposeSecret;

use forkful_braintrust::BraintrustTracer;
use forkful_core::{ForkfulError, GenerationResult, Tracer};
use forkful_langfuse::LangfuseTracer;
use forkful_llm::RecipeClient;

use crate::config::Settings;
use crate::display;
use crate::input::{is_exit_command, parse_ingredient_list};

pub struct App {
    client: RecipeClient,
    tracers: Vec<Box<dyn Tracer>>,
}

impl App {
    /// Resolve the enabled tracer set once from configuration; afterwards
    /// the app only iterates it, never branching on a specific backend.
    pub fn new(settings: &Settings) -> Result<Self, ForkfulError> {
        let mut builder = RecipeClient::builder()
            .api_key(settings.openai_api_key.expose_secret())
            .model(&settings.model)
            .temperature(settings.temperature)
            .max_tokens(settings.max_tokens);
        if let Some(base_url) = &settings.openai_base_url {
            builder = builder.base_url(base_url)?;
        }
        let client = builder.build()?;

        let mut tracers: Vec<Box<dyn Tracer>> = Vec::new();
        match &settings.langfuse {
            Some(config) => {
                tracers.push(Box::new(LangfuseTracer::new(config.clone())));
                println!("Langfuse tracing enabled");
            }
            None => println!("Langfuse tracing disabled (missing API keys)"),
        }
        match &settings.braintrust {
            Some(config) => {
                tracers.push(Box::new(
                    BraintrustTracer::new(config.clone())
                        .with_generation_params(settings.temperature, settings.max_tokens),
                ));
                println!("Braintrust experiment logging enabled");
            }
            None => println!("Braintrust experiment logging disabled (missing API key)"),
        }

        Ok(Self { client, tracers })
    }

    /// One generation: call the provider, render, then fan the result out to
    /// every enabled tracer. Returns whether the generation succeeded.
    pub async fn generate_and_display(
        &self,
        ingredients: &[String],
        dietary: Option<&[String]>,
    ) -> bool {
        if let Some(restrictions) = dietary.filter(|r| !r.is_empty()) {
            println!("Dietary considerations: {}", restrictions.join(", "));
        }
        println!("Generating recipe for: {}...", ingredients.join(", "));

        let result = self.client.generate(ingredients, dietary).await;
        match &result {
            GenerationResult::Success {
                recipe, metadata, ..
            } => display::print_recipe(recipe, metadata),
            GenerationResult::Failure { message, .. } => display::print_failure(message),
        }

        for tracer in &self.tracers {
            let info = tracer.report(ingredients, &result).await;
            display::print_trace_info(tracer.name(), &info);
        }

        result.is_success()
    }

    pub async fn run_single(&self, ingredients: &[String], dietary: Option<&[String]>) -> bool {
        self.generate_and_display(ingredients, dietary).await
    }

    pub async fn run_interactive(&self) -> Result<(), ForkfulError> {
        display::print_welcome();
        let mut editor = DefaultEditor::new()
            .map_err(|err| ForkfulError::Io(std::io::Error::other(err.to_string())))?;

        loop {
            let line = match editor.readline("Enter ingredients: ") {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Input error: {err}");
                    break;
                }
            };

            let trimmed = line.trim();
            if is_exit_command(trimmed) {
                break;
            }
            let ingredients = parse_ingredient_list(trimmed);
            if ingredients.is_empty() {
                println!("Please enter some ingredients, separated by commas.");
                continue;
            }
            let _ = editor.add_history_entry(trimmed);

            let dietary = match editor
                .readline("Any dietary requirements or allergies? (press Enter to skip): ")
            {
                Ok(answer) => {
                    let restrictions = parse_ingredient_list(&answer);
                    (!restrictions.is_empty()).then_some(restrictions)
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Input error: {err}");
                    break;
                }
            };

            // Per-iteration failures are printed and the loop continues.
            self.generate_and_display(&ingredients, dietary.as_deref())
                .await;
        }

        println!("Thanks for using Forkful!");
        Ok(())
    }

    /// Flush every tracer and print any viewable URLs before exit.
    pub async fn finish(&self) {
        for tracer in &self.tracers {
            if let Some(url) = tracer.finish().await {
                println!("View {} results: {url}", tracer.name());
            }
        }
    }
}
