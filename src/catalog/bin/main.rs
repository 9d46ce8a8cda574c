use std::path::PathBuf;
use std::process;
use clap::{Parser, Subcommand};
use lms_catalog::catalog::command::add_book_cmd::AddBookCommandRequest;
use lms_catalog::catalog::controller::{add_book, list_books, open_catalog, remove_book, search_books};
use lms_catalog::core::controller::{AppState, CliError, EXIT_OK};
use lms_catalog::core::domain::Configuration;
use lms_catalog::utils::logging::setup_tracing;

/// Manage a catalog of books stored in a JSON file
#[derive(Parser, Debug)]
#[command(name = "catalog", version)]
struct Cli {
    /// Catalog file, defaults to $CATALOG_DATA_FILE or the platform data directory
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// Add a book to the catalog
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        author: String,
        /// Publication year, cannot be later than the current year
        #[arg(long, allow_hyphen_values = true)]
        year: String,
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value = "")]
        publisher: String,
        /// ISBN formatted as XXX-X-XX-XXXXX-X
        #[arg(long)]
        isbn: String,
        #[arg(long, default_value = "")]
        summary: String,
    },

    /// Remove the first book whose title matches, ignoring case
    Remove {
        title: String,
    },

    /// Search titles, authors and years
    Search {
        query: String,
    },

    /// Print every book in the catalog
    List,
}

fn build_config(cli: &Cli) -> Configuration {
    let mut config = Configuration::from_env();
    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.json_logs {
        config.json_logs = true;
    }
    config
}

fn run(state: &AppState, command: CatalogCommand) -> Result<String, CliError> {
    let mut svc = open_catalog(state)?;
    match command {
        CatalogCommand::Add { title, author, year, genre, publisher, isbn, summary } => {
            let req = AddBookCommandRequest::new(&title, &author, &year, &genre, &publisher, &isbn, &summary);
            add_book(state, svc.as_mut(), req)
        }
        CatalogCommand::Remove { title } => remove_book(state, svc.as_mut(), &title),
        CatalogCommand::Search { query } => search_books(svc.as_ref(), &query),
        CatalogCommand::List => list_books(svc.as_ref()),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = build_config(&cli);
    setup_tracing(&config);

    let state = AppState::new(config);
    match run(&state, cli.command) {
        Ok(out) => {
            if !out.is_empty() {
                println!("{}", out);
            }
            process::exit(EXIT_OK);
        }
        Err((code, message)) => {
            eprintln!("{}", message);
            process::exit(code);
        }
    }
}
