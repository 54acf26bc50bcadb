use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{AppError, Result};

pub const FIELD_PROMPT: &str =
    "Enter academic field (e.g. \"sociolinguistics of queer communities\"):";

/// Logs go to stderr; stdout only carries the prompt and the generated paper.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "abstractgen=debug" } else { "abstractgen=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

// only the line terminator is removed; the field is used verbatim.
pub fn read_field<R: BufRead, W: Write>(input: &mut R, prompt_out: &mut W) -> Result<String> {
    prompt_out.write_all(FIELD_PROMPT.as_bytes())?;
    prompt_out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::EmptyInput);
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
