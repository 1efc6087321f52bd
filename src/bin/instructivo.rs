//! Instructivo CLI - admissions guide content formatter

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use instructivo::{
    format_text_with_options, google_viewer_url, render_step, ContentCatalog,
    FormatOptions, InstructivoError, InstructivoResult, RenderedStep,
};
#[cfg(feature = "cli")]
use serde::Deserialize;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::{Path, PathBuf};
#[cfg(feature = "cli")]
use std::process::ExitCode;
#[cfg(feature = "cli")]
use tracing_subscriber::{fmt, EnvFilter};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "instructivo")]
#[command(version)]
#[command(about = "Instructivo - admissions guide content formatter (markup → HTML)", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input markup file (reads from stdin if not provided)
    input_file: Option<PathBuf>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file with a [format] table of style classes
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Emit tags without class attributes
    #[arg(long, global = true)]
    bare: bool,

    /// Verbose logging to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Format a markup file to HTML (default action)
    Format {
        /// Input file path
        input: Option<PathBuf>,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the content catalog's formatted blocks
    Render {
        /// Content catalog (TOML or .json); the built-in content if omitted
        #[arg(long)]
        content: Option<PathBuf>,

        /// Only render this step number
        #[arg(short, long)]
        step: Option<u32>,

        /// Page origin for PDF viewer URLs (e.g. https://admisiones.usco.edu.co)
        #[arg(long)]
        origin: Option<String>,

        /// Print JSON instead of HTML fragments
        #[arg(long)]
        json: bool,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the embedded viewer URL for a PDF path
    ViewerUrl {
        /// PDF path relative to the site origin
        pdf: String,

        /// Page origin
        #[arg(long)]
        origin: Option<String>,
    },

    /// Check a content catalog for authoring issues
    Check {
        /// Content catalog (TOML or .json); the built-in content if omitted
        #[arg(long)]
        content: Option<PathBuf>,
    },

    /// Show version and feature info
    Info,
}

/// CLI configuration file
#[cfg(feature = "cli")]
#[derive(Debug, Default, Deserialize)]
struct CliConfig {
    #[serde(default)]
    format: FormatOptions,
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "instructivo=debug"
    } else {
        "instructivo=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    // A second init (tests, embedding) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(feature = "cli")]
fn run(cli: Cli) -> InstructivoResult<ExitCode> {
    let options = load_options(cli.config.as_deref(), cli.bare)?;

    match cli.command {
        None => {
            format_command(cli.input_file.as_deref(), cli.output.as_deref(), &options)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Format { input, output }) => {
            format_command(input.as_deref(), output.as_deref(), &options)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Render {
            content,
            step,
            origin,
            json,
            output,
        }) => {
            let catalog = load_catalog(content.as_deref())?;
            // Explicit CLI style flags win over the catalog's [format] table.
            let options = if cli.config.is_some() || cli.bare {
                options
            } else {
                catalog.format_options()
            };

            let rendered: Vec<RenderedStep> = match step {
                Some(number) => {
                    let step = catalog.step(number).ok_or_else(|| {
                        InstructivoError::invalid(format!("no step numbered {}", number))
                    })?;
                    vec![render_step(step, &options, origin.as_deref())]
                }
                None => catalog
                    .steps
                    .iter()
                    .map(|step| render_step(step, &options, origin.as_deref()))
                    .collect(),
            };

            let result = if json {
                serde_json::to_string_pretty(&rendered)?
            } else {
                rendered_to_html(&rendered)
            };
            write_output(&result, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::ViewerUrl { pdf, origin }) => {
            println!("{}", google_viewer_url(origin.as_deref(), &pdf));
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Check { content }) => {
            let catalog = load_catalog(content.as_deref())?;
            let issues = catalog.validate();

            if issues.is_empty() {
                eprintln!("✓ {} step(s), no issues", catalog.steps.len());
                return Ok(ExitCode::SUCCESS);
            }
            for issue in &issues {
                println!("{}", issue);
            }
            let errors = issues.iter().filter(|i| i.is_error()).count();
            eprintln!(
                "\n{} issue(s): {} error(s), {} warning(s)",
                issues.len(),
                errors,
                issues.len() - errors
            );
            Ok(if errors > 0 {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        Some(Commands::Info) => {
            println!("Instructivo - admissions guide content formatter");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Markup:");
            println!("  **text**        → <h5> heading");
            println!("  • item          → <li>, consecutive items grouped in <ul>");
            println!("  blank line      → paragraph break");
            println!("  newline         → <br>");
            println!("  <table>…</table> passed through verbatim");
            println!();
            println!("Commands: format, render, viewer-url, check, info");
            println!();
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(feature = "cli")]
fn load_options(config: Option<&Path>, bare: bool) -> InstructivoResult<FormatOptions> {
    if bare {
        return Ok(FormatOptions::bare());
    }
    match config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| InstructivoError::io(path, e))?;
            let config: CliConfig = toml::from_str(&text)?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config.format)
        }
        None => Ok(FormatOptions::default()),
    }
}

#[cfg(feature = "cli")]
fn load_catalog(path: Option<&Path>) -> InstructivoResult<ContentCatalog> {
    match path {
        Some(path) => ContentCatalog::from_path(path),
        None => ContentCatalog::builtin(),
    }
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&Path>) -> InstructivoResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| InstructivoError::io(path, e)),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| InstructivoError::io("<stdin>", e))?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn format_command(
    input: Option<&Path>,
    output: Option<&Path>,
    options: &FormatOptions,
) -> InstructivoResult<()> {
    let content = read_input(input)?;
    // Editors leave a final newline that would otherwise become a <br>.
    let content = content.strip_suffix('\n').unwrap_or(&content);
    let result = format_text_with_options(Some(content), options);
    write_output(&result, output)
}

#[cfg(feature = "cli")]
fn write_output(result: &str, output: Option<&Path>) -> InstructivoResult<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path).map_err(|e| InstructivoError::io(path, e))?;
            writeln!(file, "{}", result).map_err(|e| InstructivoError::io(path, e))?;
            eprintln!("✓ Output written to: {}", path.display());
        }
        None => {
            println!("{}", result);
        }
    }
    Ok(())
}

/// Plain HTML dump of rendered steps, one commented section per step
#[cfg(feature = "cli")]
fn rendered_to_html(steps: &[RenderedStep]) -> String {
    let mut html = String::new();
    for step in steps {
        html.push_str(&format!("<!-- step {}: {} -->\n", step.number, step.title));
        html.push_str(&format!("<h3>{}</h3>\n<p>{}</p>\n", step.title, step.description));
        for block in [&step.detailed_info, &step.requirements, &step.tips] {
            if !block.is_empty() {
                html.push_str(block);
                html.push('\n');
            }
        }
        for pdf in &step.pdfs {
            html.push_str(&format!(
                "<iframe title=\"{}\" src=\"{}\"></iframe>\n",
                pdf.name, pdf.viewer_url
            ));
        }
        for modality in &step.modalities {
            html.push_str(&format!("<!-- modality: {} -->\n", modality.name));
            html.push_str(&modality.html);
            html.push('\n');
        }
        html.push('\n');
    }
    html.trim_end().to_string()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install instructivo --features cli");
    eprintln!("  instructivo [OPTIONS] [INPUT_FILE]");
}
