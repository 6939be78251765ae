//! digit-mirror CLI: ASCII digits and their mirror images.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use digit_mirror::config::MirrorConfig;
use digit_mirror::field::{Mirror, build_coordinate_field};
use digit_mirror::input::parse_digits;
use digit_mirror::number::Number;
use digit_mirror::render::{RenderConfig, render_digit_table, render_json, render_to_terminal};
use digit_mirror::session::Session;

#[derive(Parser)]
#[command(name = "digit-mirror", version, about = "ASCII digits mirrored across two axes")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Color bars with ANSI codes even when stdout is not a terminal.
    #[arg(long, global = true)]
    color: bool,

    /// Log debug events to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a number's coordinate field.
    Render {
        /// The number to draw (1-4 digits by default).
        number: String,

        /// Mirror to fill: x (horizontal), y (vertical) or xy (both). Repeatable.
        #[arg(short, long = "mirror")]
        mirrors: Vec<Mirror>,

        /// Fill all three mirrors.
        #[arg(long)]
        all: bool,

        /// Print the field as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the glyph for every digit.
    Digits,

    /// Prompt for a number and mirror choices interactively.
    Interactive,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => MirrorConfig::load(path)?,
        None => MirrorConfig::load_default()?,
    };
    let render = RenderConfig::resolve(cli.color || config.color);

    match cli.command {
        Commands::Render {
            number,
            mirrors,
            all,
            json,
        } => {
            let digits = parse_digits(&number, &config)?;
            let number = Number::from_digits(&digits)?;
            let mut field = build_coordinate_field(number)?;

            if all {
                field.fill_all()?;
            }
            for mirror in config.mirrors.iter().chain(&mirrors) {
                field.fill(*mirror)?;
            }

            if json {
                println!("{}", render_json(&field).into_diagnostic()?);
            } else {
                println!("{}", render_to_terminal(field.grid(), &render));
            }
        }

        Commands::Digits => {
            println!("{}", render_digit_table(&render)?);
        }

        Commands::Interactive => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            Session::new(stdin.lock(), stdout.lock(), &config, &render).run()?;
        }
    }

    Ok(())
}
