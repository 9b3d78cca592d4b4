//! Analyze command - resolve pointers against a single PDF file.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use pinpoint_core::{AnalysisResponse, PdfReader, QueryResolver};

use super::{build_completion, load_config, PointerArgs};
use crate::document::read_pages;

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    #[command(flatten)]
    pointers: PointerArgs,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON response, as served over HTTP
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.pointers.no_fallback {
        config.resolution.semantic_fallback = false;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let pointers = args.pointers.resolve()?;

    info!(
        "Analyzing {} with {} pointers",
        args.input.display(),
        pointers.len()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message("Reading PDF...");

    let data = fs::read(&args.input)?;
    let reader = Arc::new(PdfReader::new().with_max_pages(config.pdf.max_pages));
    let pages = match read_pages(reader, data).await {
        Ok(pages) => pages,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    };

    pb.set_message("Resolving pointers...");
    let completion = build_completion(&config);
    let resolver = QueryResolver::from_config(completion.as_ref(), &config);
    let response = resolver.resolve(&pages, &pointers).await;
    pb.finish_and_clear();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
        OutputFormat::Text => format_text(&response),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a response as a human-readable report.
pub fn format_text(response: &AnalysisResponse) -> String {
    if response.results.is_empty() {
        return "No results.\n".to_string();
    }

    let mut output = String::new();

    for entry in &response.results {
        output.push_str(&format!("Pointer: {}\n", entry.pointer));
        output.push_str(&format!("  Strategy: {}\n", entry.rationale.description()));

        for snippet in &entry.snippets {
            match snippet.page {
                Some(page) => output.push_str(&format!(
                    "  [page {}, {}..{}] {}\n",
                    page, snippet.offset.start, snippet.offset.end, snippet.text
                )),
                None => output.push_str(&format!("  [answer] {}\n", snippet.text)),
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "{} entries, {} from fallback\n",
        response.results.len(),
        response.fallback_count()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinpoint_core::{Rationale, ResultEntry, Snippet};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_text_lists_located_and_generated_snippets() {
        let response = AnalysisResponse {
            results: vec![
                ResultEntry {
                    pointer: "List all dates".to_string(),
                    snippets: vec![Snippet::located("12/05/2023", 1, 14, 24)],
                    rationale: Rationale::DatePattern,
                },
                ResultEntry {
                    pointer: "Who signed it?".to_string(),
                    snippets: vec![Snippet::generated("Jane Roe")],
                    rationale: Rationale::SemanticFallback,
                },
            ],
        };

        let text = format_text(&response);
        assert_eq!(
            text,
            "Pointer: List all dates\n  Strategy: Date pattern search (regex)\n  [page 1, 14..24] 12/05/2023\n\n\
             Pointer: Who signed it?\n  Strategy: AI-powered semantic search\n  [answer] Jane Roe\n\n\
             2 entries, 1 from fallback\n"
        );
    }

    #[test]
    fn test_format_text_empty() {
        let response = AnalysisResponse { results: vec![] };
        assert_eq!(format_text(&response), "No results.\n");
    }
}
