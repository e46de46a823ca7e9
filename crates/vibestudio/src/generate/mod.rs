use crate::ollama::{ModelArgs, OllamaClient};
use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use std::path::PathBuf;
use vibestudio_core::generation::{build_instruction, parse_generation, GenerationResult};

#[derive(Debug, clap::Parser)]
#[command(name = "generate")]
#[command(about = "Generate project files from a prompt using Ollama")]
pub struct GenerateOptions {
    /// What to build
    pub prompt: String,

    /// Additional context appended to the instruction
    #[clap(long)]
    pub context: Option<String>,

    /// Also write the generated files under this directory
    #[clap(long)]
    pub root: Option<PathBuf>,

    /// Output the generation result as JSON
    #[arg(long)]
    pub json: bool,

    #[clap(flatten)]
    pub model: ModelArgs,
}

pub async fn run(options: GenerateOptions, global: crate::Global) -> Result<()> {
    let client = OllamaClient::new(options.model.into())?;

    if global.verbose {
        eprintln!("Ollama URL: {}", client.config().base_url);
        eprintln!("Model: {}", client.config().model);
    }

    let result = generate_data(&client, &options.prompt, options.context.as_deref()).await?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output_formatted(&result);
    }

    if let Some(root) = options.root {
        let outcome = crate::write::write_files(root.clone(), result.files).await?;
        eprintln!(
            "{} {} file(s) under {}",
            "Wrote".green().bold(),
            outcome.written,
            root.display()
        );
    }

    Ok(())
}

fn output_formatted(result: &GenerationResult) {
    if result.files.is_empty() {
        println!("{}", "The model returned no files".yellow());
        return;
    }

    let mut table = new_table();
    table.add_row(prettytable::row!["Path".bold().cyan(), "Bytes".bold().cyan()]);
    for file in &result.files {
        table.add_row(prettytable::row![file.path, file.content.len()]);
    }
    table.printstd();

    if !result.meta.is_empty() {
        println!();
        println!(
            "{}: {}",
            "Meta".green(),
            serde_json::Value::Object(result.meta.clone())
        );
    }
}

/// Run one generation: build the instruction, call the model, sanitize the reply.
pub async fn generate_data(
    client: &OllamaClient,
    prompt: &str,
    context: Option<&str>,
) -> Result<GenerationResult, Error> {
    let instruction = build_instruction(prompt, context);
    let raw = client.generate(&instruction).await?;

    match parse_generation(&raw) {
        Ok(result) => {
            log::info!("Model returned {} file(s)", result.files.len());
            Ok(result)
        }
        Err(e) => {
            log::debug!("Unparseable model reply: {raw}");
            Err(e.into())
        }
    }
}
