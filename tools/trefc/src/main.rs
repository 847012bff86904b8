//! trefc - TREF font compiler
//!
//! # Commands
//!
//! - `trefc compile <definitions> <image> [-o output]` - Build a `.tref` file
//! - `trefc info <file>` - Print a summary of a `.tref` file
//! - `trefc extract <file> [-a atlas.png] [-d definitions.txt]` - Unpack a `.tref` file
//!
//! Every failure category exits with its own code (see [`trefc::exit_code`]).

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use trefc::{CompilerError, exit_code};

#[derive(Parser)]
#[command(name = "trefc")]
#[command(about = "TREF font compiler")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile glyph definitions and an atlas image into a .tref file
    Compile {
        /// Glyph definition file
        definitions: PathBuf,

        /// Atlas image (PNG, JPEG, BMP)
        image: PathBuf,

        /// Output .tref file (defaults to the definition file with a .tref extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print a summary of a .tref file
    Info {
        /// Input .tref file
        input: PathBuf,
    },

    /// Unpack a .tref file into an atlas PNG and a definition file
    Extract {
        /// Input .tref file
        input: PathBuf,

        /// Output atlas PNG (defaults to the input with a .png extension)
        #[arg(short, long)]
        atlas: Option<PathBuf>,

        /// Output definition file (defaults to the input with a .txt extension)
        #[arg(short, long)]
        definitions: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    ExitCode::from(exit_code::SUCCESS)
                }
                _ => ExitCode::from(exit_code::INVALID_ARGUMENTS),
            };
        }
    };

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(command: Commands) -> Result<(), CompilerError> {
    match command {
        Commands::Compile {
            definitions,
            image,
            output,
        } => {
            let output =
                output.unwrap_or_else(|| definitions.with_extension(tref::TREF_EXTENSION));
            tracing::info!(
                "Compiling {} + {} -> {}",
                definitions.display(),
                image.display(),
                output.display()
            );
            let summary = trefc::compile(&definitions, &image, &output)?;
            tracing::info!(
                "Done! {} glyphs, {}x{} atlas, {} bytes",
                summary.glyphs,
                summary.width,
                summary.height,
                summary.bytes
            );
        }

        Commands::Info { input } => {
            let font = trefc::load_font(&input)?;
            println!("{}", trefc::describe(&font));
        }

        Commands::Extract {
            input,
            atlas,
            definitions,
        } => {
            let atlas = atlas.unwrap_or_else(|| input.with_extension("png"));
            let definitions = definitions.unwrap_or_else(|| input.with_extension("txt"));
            tracing::info!("Extracting {}", input.display());
            trefc::extract(&input, Some(&atlas), Some(&definitions))?;
            tracing::info!("Done!");
        }
    }
    Ok(())
}
