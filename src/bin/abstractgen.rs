use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode
};
use anyhow::Context;
use clap::Parser;

use abstractgen::{
    utils::init_logger,
    AbstractGenerator,
    Config,
    OpenAIAgent
};

/// Generates a prize-winning paper title and abstract for an academic field.
#[derive(Debug, Parser)]
#[command(name = "abstractgen", version)]
struct Args {
    /// Academic field; prompted for on stdin when omitted
    #[arg(short, long)]
    field: Option<String>,

    /// Completion model, overrides OPENAI_MODEL
    #[arg(short, long)]
    model: Option<String>,

    /// Env file to load instead of ./.env
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env(args.env_file.as_deref())
        .context("failed to load configuration")?
        .with_model(args.model);
    let generator = AbstractGenerator::new(OpenAIAgent::from_config(&config));

    let mut stdout = io::stdout();
    generator
        .run(args.field.as_deref(), &mut io::stdin().lock(), &mut stdout)
        .await
        .with_context(|| format!("failed to generate an abstract with {}", config.model))?;
    stdout.flush()?;
    Ok(())
}
