use clap::Parser;
use std::str::FromStr;
use wordypond::application::{init, open_workspace_store, ConfigService};
use wordypond::cli::{format_week, format_week_list, Cli, Commands};
use wordypond::domain::{IdStrategy, WeekPatch};
use wordypond::error::WordypondError;
use wordypond::infrastructure::Workspace;
use wordypond::logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            log::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), WordypondError> {
    match cli.command {
        Some(Commands::Init { path, id_strategy }) => {
            let strategy = IdStrategy::from_str(&id_strategy).map_err(WordypondError::Config)?;
            init::init(&path, strategy)?;
            println!("Initialized wordypond at {}", path.display());
            println!("Id strategy: {}", strategy.as_str());
            Ok(())
        }
        Some(Commands::Add { title, words }) => {
            let mut store = open_workspace_store(&Workspace::discover()?)?;
            let week = store.add_week(title, words)?;
            println!("{}", week.id);
            Ok(())
        }
        Some(Commands::List) => {
            let store = open_workspace_store(&Workspace::discover()?)?;
            print!("{}", format_week_list(store.weeks()));
            if store.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Show { id }) => {
            let store = open_workspace_store(&Workspace::discover()?)?;
            let week = store
                .get_week(&id)
                .ok_or_else(|| WordypondError::WeekNotFound(id.clone()))?;
            print!("{}", format_week(week));
            Ok(())
        }
        Some(Commands::Update {
            id,
            title,
            words,
            clear_words,
        }) => {
            let mut patch = WeekPatch::new();
            if let Some(title) = title {
                patch = patch.with_title(title);
            }
            if clear_words {
                patch = patch.with_words(Vec::<String>::new());
            } else if !words.is_empty() {
                patch = patch.with_words(words);
            }

            if patch.is_empty() {
                println!("Nothing to update. Use --title, --word or --clear-words.");
                return Ok(());
            }

            let mut store = open_workspace_store(&Workspace::discover()?)?;
            if store.update_week(&id, patch)? {
                println!("Updated {}", id);
            } else {
                println!("No week with id {}; nothing changed", id);
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut store = open_workspace_store(&Workspace::discover()?)?;
            if store.delete_week(&id)? {
                println!("Deleted {}", id);
            } else {
                println!("No week with id {}; nothing deleted", id);
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(Workspace::discover()?);

            if list {
                let config = service.list()?;
                println!("id_strategy = {}", config.id_strategy.as_str());
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: wordypond config [--list | <key> [<value>]]");
                println!("Valid keys: id_strategy, created");
                Ok(())
            }
        }
        None => {
            println!("wordypond - Weekly vocabulary word lists");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
