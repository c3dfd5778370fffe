//! Stubsmith's main application entry point.
//! Handles command-line argument parsing, recipe-file loading and outcome
//! reporting, and coordinates the resolver and runner.

use stubsmith::{
    cli::{get_args, Args},
    config::{self, RECIPE_FILES},
    error::{default_error_handler, Result},
    recipe::{NameInput, RunFlags},
    resolver::Resolver,
    runner::{Outcome, Runner},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the project root and recipe directory
/// 2. Loads and parses the recipe file
/// 3. Splits the name argument into path and base name
/// 4. Runs every recipe in declaration order
/// 5. Prints one line per outcome
fn run(args: Args) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let project_root = match args.root {
        Some(root) if root.is_absolute() => root,
        Some(root) => current_dir.join(root),
        None => current_dir,
    };
    let resolver = Resolver::new(&project_root);

    let recipe_dir = args.recipes.unwrap_or_else(|| project_root.clone());
    let content = config::load_recipes(&recipe_dir, &RECIPE_FILES)?;
    let recipes = config::into_recipes(config::parse_recipes(&content)?)?;

    let name = NameInput::parse(&args.name);
    let flags = RunFlags {
        dry_run: args.dry_run,
        overwrite: args.overwrite,
        backup: args.backup,
    };

    let outcomes = Runner::new(&resolver).run(&recipes, &name, flags)?;

    for outcome in &outcomes {
        match outcome {
            Outcome::Created { scope, path } => {
                println!("Created new {} at: {}", scope, path.display())
            }
            Outcome::WouldCreate { scope, path } => {
                println!("Would create {} at: {}", scope, path.display())
            }
            Outcome::SkippedExisting { scope, path } => {
                println!("Skipped {}: target file {} already exists", scope, path.display())
            }
        }
    }

    Ok(())
}
