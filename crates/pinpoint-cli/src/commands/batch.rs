//! Batch command - resolve the same pointers against many PDF files.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use pinpoint_core::{AnalysisResponse, DocumentReader, PdfReader, QueryResolver};

use super::analyze::{format_text, OutputFormat};
use super::{build_completion, load_config, PointerArgs};
use crate::document::read_pages;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching input PDFs
    #[arg(required = true)]
    input: String,

    #[command(flatten)]
    pointers: PointerArgs,

    /// Output directory for per-file results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome of analyzing a single file.
struct FileResult {
    path: PathBuf,
    pages: usize,
    response: Option<AnalysisResponse>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if args.pointers.no_fallback {
        config.resolution.semantic_fallback = false;
    }

    let pointers = args.pointers.resolve()?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let completion = build_completion(&config);
    let reader: Arc<dyn DocumentReader> =
        Arc::new(PdfReader::new().with_max_pages(config.pdf.max_pages));
    let resolver = QueryResolver::from_config(completion.as_ref(), &config);

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = analyze_file(&path, &reader, &resolver, &pointers).await;
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match outcome {
            Ok((pages, response)) => results.push(FileResult {
                path,
                pages,
                response: Some(response),
                error: None,
                processing_time_ms,
            }),
            Err(e) => {
                let error_msg = e.to_string();
                if !args.continue_on_error {
                    pb.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
                warn!("Failed to process {}: {}", path.display(), error_msg);
                results.push(FileResult {
                    path,
                    pages: 0,
                    response: None,
                    error: Some(error_msg),
                    processing_time_ms,
                });
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(response) = &result.response {
                write_output(output_dir, &result.path, response, args.format)?;
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(results.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

async fn analyze_file(
    path: &Path,
    reader: &Arc<dyn DocumentReader>,
    resolver: &QueryResolver<'_>,
    pointers: &[String],
) -> anyhow::Result<(usize, AnalysisResponse)> {
    let data = fs::read(path)?;
    let pages = read_pages(Arc::clone(reader), data).await?;
    let response = resolver.resolve(&pages, pointers).await;
    debug!(
        "{}: {} pages, {} entries",
        path.display(),
        pages.len(),
        response.results.len()
    );
    Ok((pages.len(), response))
}

fn write_output(
    output_dir: &Path,
    source: &Path,
    response: &AnalysisResponse,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");

    let (extension, content) = match format {
        OutputFormat::Json => ("json", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => ("txt", format_text(response)),
    };

    let output_path = output_dir.join(format!("{}.{}", stem, extension));
    fs::write(&output_path, content)?;
    debug!("Wrote output to {}", output_path.display());

    Ok(())
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "pages",
        "entries",
        "fallback_entries",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        match &result.response {
            Some(response) => wtr.write_record([
                filename,
                "success",
                &result.pages.to_string(),
                &response.results.len().to_string(),
                &response.fallback_count().to_string(),
                &result.processing_time_ms.to_string(),
                "",
            ])?,
            None => wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                &result.processing_time_ms.to_string(),
                result.error.as_deref().unwrap_or(""),
            ])?,
        }
    }

    wtr.flush()?;
    Ok(())
}
