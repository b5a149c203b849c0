use anyhow::Result;
use clap::{Parser, Subcommand};

use tag_format::cli::orchestration::{run_render_workflow, RenderWorkflowArgs};
use tag_format::config;
use tag_format::domain::{refname, TagFormat};
use tag_format::{logging, ui};

#[derive(Parser)]
#[command(
    name = "tag-format",
    version,
    about = "Render and validate git tag names from tag format strings"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render tags for a version from explicit or configured formats
    Render {
        #[arg(help = "Tag formats to render (defaults to configured formats)")]
        formats: Vec<String>,

        #[arg(long = "version", value_name = "VERSION", help = "Version to render, e.g. 1.2.3")]
        version: String,

        #[arg(short, long, help = "Release date, YYYY-MM-DD or RFC 3339 timestamp")]
        date: Option<String>,

        #[arg(short, long, help = "Use the formats configured for this package")]
        package: Option<String>,

        #[arg(long, help = "Print only the first rendered tag")]
        first: bool,
    },
    /// Check tag names against git ref-name rules
    Validate {
        #[arg(required = true)]
        tags: Vec<String>,
    },
    /// Parse tag formats and report their commands
    Check {
        #[arg(required = true)]
        formats: Vec<String>,
    },
    /// List the available format commands
    Commands,
    /// Show the configured tag formats
    List,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    match args.command {
        Commands::Render {
            formats,
            version,
            date,
            package,
            first,
        } => {
            let config = load_config_or_exit(args.config.as_deref());
            let workflow_args = RenderWorkflowArgs {
                formats,
                version,
                date,
                package,
            };
            let result = match run_render_workflow(&workflow_args, &config) {
                Ok(result) => result,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };

            if first {
                match result.first_tag() {
                    Some(tag) => println!("{}", tag),
                    None => {
                        for (format, e) in result.set.failures() {
                            ui::display_error(&format!("{}: {}", format, e));
                        }
                        std::process::exit(1);
                    }
                }
                return Ok(());
            }

            ui::display_candidates(&result.set);
            if !result.set.has_tags() {
                std::process::exit(1);
            }
        }
        Commands::Validate { tags } => {
            let mut all_valid = true;
            for tag in &tags {
                let violations = refname::validate(tag).err().unwrap_or_default();
                all_valid &= violations.is_empty();
                ui::display_validation(tag, &violations);
            }
            if !all_valid {
                std::process::exit(1);
            }
        }
        Commands::Check { formats } => {
            let mut all_ok = true;
            for format in &formats {
                match TagFormat::parse(format) {
                    Ok(parsed) => ui::display_success(&ui::format_parsed(&parsed)),
                    Err(e) => {
                        all_ok = false;
                        ui::display_error(&format!("{}: {}", format, e));
                    }
                }
            }
            if !all_ok {
                std::process::exit(1);
            }
        }
        Commands::Commands => ui::display_commands(),
        Commands::List => {
            let config = load_config_or_exit(args.config.as_deref());
            ui::display_config(&config);
        }
    }

    Ok(())
}

fn load_config_or_exit(config_path: Option<&str>) -> config::Config {
    match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    }
}
