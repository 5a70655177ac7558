mod exit_code;
mod progress;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use exit_code::ExitCode;
use gqlurl_introspect::{IntrospectionClient, IntrospectionResponse};
use gqlurl_synth::{normalize_base_url, synthesize, PlaceholderStyle, SynthesisOptions};
use std::io::Write;

#[derive(Parser, Debug)]
#[command(name = "gqlurl")]
#[command(
    about = "Extract and construct URLs for GraphQL queries and mutations",
    long_about = "Runs an introspection query against a GraphQL endpoint and prints one \
                  sample URL per field of the Query and Mutation root types. Argument \
                  values are written as <Type> placeholders to be filled in by hand."
)]
#[command(version)]
struct Cli {
    /// URL of the GraphQL API
    #[arg(
        short,
        long,
        value_name = "URL",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    url: String,

    /// Write wrapped argument types in full (`<ID!>`) instead of the bare
    /// type name, which is empty for `NON_NULL` and `LIST` arguments
    #[arg(long)]
    unwrap_arg_types: bool,
}

impl Cli {
    fn synthesis_options(&self) -> SynthesisOptions {
        SynthesisOptions {
            placeholder_style: if self.unwrap_arg_types {
                PlaceholderStyle::Unwrapped
            } else {
                PlaceholderStyle::Immediate
            },
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let stdout = std::io::stdout();
    let code = run(&cli, &mut stdout.lock()).await?;
    tracing::debug!(%code, "Finished");
    if code != ExitCode::Success {
        code.exit();
    }
    Ok(())
}

/// Fetch once, synthesize, write the report to `out`.
///
/// Nothing is written to `out` when the fetch fails.
#[tracing::instrument(skip_all, fields(url = %cli.url))]
async fn run(cli: &Cli, out: &mut impl Write) -> Result<ExitCode> {
    let endpoint = normalize_base_url(&cli.url);

    let Some(document) = fetch_document(endpoint).await else {
        return Ok(ExitCode::FetchError);
    };

    let urls = synthesize(&document, &cli.url, cli.synthesis_options());

    out.write_all(report::render(&urls).as_bytes())
        .context("Failed to write to stdout")?;
    out.flush().context("Failed to write to stdout")?;

    Ok(ExitCode::Success)
}

/// Runs the introspection request, reporting any failure on stderr.
///
/// A failure is not an error for the caller: there is simply no document.
async fn fetch_document(endpoint: &str) -> Option<IntrospectionResponse> {
    let spinner = progress::spinner(&format!("Fetching schema from {endpoint}..."));
    let result = IntrospectionClient::new().execute(endpoint).await;
    spinner.finish_and_clear();

    match result {
        Ok(document) => Some(document),
        Err(e) => {
            tracing::debug!(kind = e.kind(), "Introspection failed");
            eprintln!(
                "{} {}",
                "error:".red().bold(),
                report::describe_failure(endpoint, &e)
            );
            None
        }
    }
}

/// Logs go to stderr so stdout carries only the report. Off unless `RUST_LOG` is set.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}
