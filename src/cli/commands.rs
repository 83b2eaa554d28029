//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wordypond")]
#[command(about = "Weekly vocabulary word lists", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new word pond
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// How week ids are generated (timestamp, uuid)
        #[arg(long, default_value = "timestamp")]
        id_strategy: String,
    },

    /// Add a week with its words
    Add {
        /// Week title
        title: String,

        /// Words, in order
        words: Vec<String>,
    },

    /// List all weeks
    List,

    /// Show one week
    Show {
        /// Week id
        id: String,
    },

    /// Change the title or words of a week
    Update {
        /// Week id
        id: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// Replacement word (repeat for several)
        #[arg(short, long = "word", value_name = "WORD", conflicts_with = "clear_words")]
        words: Vec<String>,

        /// Replace the words with an empty list
        #[arg(long)]
        clear_words: bool,
    },

    /// Delete a week
    Delete {
        /// Week id
        id: String,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_words() {
        let cli = Cli::parse_from(["wordypond", "add", "Week 1", "apple", "banana"]);
        match cli.command {
            Some(Commands::Add { title, words }) => {
                assert_eq!(title, "Week 1");
                assert_eq!(words, vec!["apple", "banana"]);
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_update_repeated_words() {
        let cli = Cli::parse_from(["wordypond", "update", "42", "-w", "a", "-w", "b"]);
        match cli.command {
            Some(Commands::Update {
                id,
                title,
                words,
                clear_words,
            }) => {
                assert_eq!(id, "42");
                assert_eq!(title, None);
                assert_eq!(words, vec!["a", "b"]);
                assert!(!clear_words);
            }
            other => panic!("Expected Update, got {:?}", other),
        }
    }

    #[test]
    fn test_words_conflict_with_clear() {
        let result = Cli::try_parse_from(["wordypond", "update", "42", "-w", "a", "--clear-words"]);
        assert!(result.is_err());
    }
}
