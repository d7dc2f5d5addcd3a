//! Forkful binary entry point.

mod app;
mod config;
mod display;
mod input;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "forkful")]
#[command(about = "Generate recipes from ingredients using an LLM")]
struct Cli {
    /// Ingredients (use quotes for multi-word ingredients)
    ingredients: Vec<String>,

    /// Run the interactive loop even when ingredients are given
    #[arg(short, long)]
    interactive: bool,

    /// Dietary requirements or allergies (e.g. --dietary vegetarian "no nuts")
    #[arg(short, long, num_args = 0..)]
    dietary: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let app = match App::new(&settings) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let succeeded = if cli.interactive || cli.ingredients.is_empty() {
        match app.run_interactive().await {
            Ok(()) => true,
            Err(err) => {
                eprintln!("{err}");
                false
            }
        }
    } else {
        let dietary = (!cli.dietary.is_empty()).then_some(cli.dietary.as_slice());
        app.run_single(&cli.ingredients, dietary).await
    };

    app.finish().await;

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
