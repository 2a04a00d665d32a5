//! CLI tool for extracting text from PDF, PPTX, DOCX, and XLSX files.

use anyhow::{Context, Result};
use clap::Parser;
use doctext::{
    assemble, extract_document_from_file, require_text, DocumentFormat, DocumentPart,
    ExtractOptions, SlideOrder, SourceFile,
};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Upload limit applied before extraction (10 MiB).
const DEFAULT_MAX_SIZE: u64 = 10 * 1024 * 1024;

/// Extract plain text from documents for question generation.
#[derive(Parser, Debug)]
#[command(name = "doctext")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document(s) (.pdf, .pptx, .docx, or .xlsx)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Emit the extracted parts and text as JSON
    #[arg(long)]
    json: bool,

    /// Skip speaker notes in presentations
    #[arg(long)]
    no_notes: bool,

    /// Keep slides in archive order instead of slide number order
    #[arg(long)]
    archive_order: bool,

    /// Reject files larger than this many bytes
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: u64,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// JSON form of one extracted file.
#[derive(Serialize)]
struct JsonOutput<'a> {
    filename: &'a str,
    format: DocumentFormat,
    size: u64,
    parts: &'a [DocumentPart],
    text: &'a str,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let options = ExtractOptions::new()
        .with_notes(!args.no_notes)
        .with_slide_order(if args.archive_order {
            SlideOrder::Archive
        } else {
            SlideOrder::Numeric
        });

    let mut failures = 0usize;
    for input_path in &args.input {
        log::info!("Processing: {}", input_path.display());

        let result = process_file(input_path, &args, &options)
            .await
            .and_then(|output| emit(input_path, &args, &output));

        if let Err(e) = result {
            eprintln!("Error processing {}: {:#}", input_path.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} files failed", failures, args.input.len());
    }

    Ok(())
}

/// Extract a single document and render it for output.
async fn process_file(input_path: &Path, args: &Args, options: &ExtractOptions) -> Result<String> {
    let size = std::fs::metadata(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?
        .len();
    if size > args.max_size {
        anyhow::bail!(
            "File is {} bytes, larger than the {} byte limit",
            size,
            args.max_size
        );
    }

    let file = SourceFile::from_path(input_path)
        .with_context(|| format!("Failed to read {}", input_path.display()))?;
    let filename = file.name.clone();

    let document = extract_document_from_file(file, options.clone()).await?;
    log::debug!("  Found {} parts", document.parts.len());

    let text = require_text(assemble(&document))?;
    log::debug!("  Extracted {} characters", text.chars().count());

    if args.json {
        let json = JsonOutput {
            filename: &filename,
            format: document.format,
            size,
            parts: &document.parts,
            text: &text,
        };
        Ok(serde_json::to_string_pretty(&json)?)
    } else {
        Ok(text)
    }
}

/// Print the rendered output or write it next to the input (or into `--output`).
fn emit(input_path: &Path, args: &Args, output: &str) -> Result<()> {
    if args.print {
        println!("{}", output);
        return Ok(());
    }

    let ext = if args.json { "json" } else { "txt" };
    let output_path = get_output_path(input_path, args.output.as_ref(), ext)?;
    write_output(&output_path, output)?;
    log::info!("Written to: {}", output_path.display());
    Ok(())
}

/// Determine the output path for a processed file.
fn get_output_path(input_path: &Path, output_dir: Option<&PathBuf>, ext: &str) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, ext);

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
