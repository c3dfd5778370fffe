//! Command-line interface implementation for Stubsmith.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for Stubsmith.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stubsmith: stub-based file generator for project scaffolding", long_about = None)]
pub struct Args {
    /// Name of the file to generate; may carry a relative path prefix,
    /// e.g. HeroSection/BackgroundImage
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory containing the recipe file (defaults to the project root)
    #[arg(short, long, value_name = "DIR")]
    pub recipes: Option<PathBuf>,

    /// Project root against which relative recipe paths are resolved
    /// (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Compute all paths and replacements without writing anything
    #[arg(short, long)]
    pub dry_run: bool,

    /// Overwrite existing target files
    #[arg(long)]
    pub overwrite: bool,

    /// Back up existing target files to a .backup sibling before writing
    #[arg(long)]
    pub backup: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
