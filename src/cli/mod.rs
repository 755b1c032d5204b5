// Command-line interface

pub mod commands;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "receipt-chef")]
#[command(about = "Receipt Chef - Recipe recommendations from grocery receipts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where receipt text is read from
#[derive(Args, Debug, Clone)]
pub struct ReceiptInput {
    /// Receipt text (reads stdin when neither TEXT nor --file is given)
    pub text: Option<String>,

    /// Read receipt text from a file
    #[arg(short, long, conflicts_with = "text")]
    pub file: Option<String>,

    /// Skip the AI extractor and use keyword matching only
    #[arg(long)]
    pub naive: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Recommend recipes for receipt text
    Recommend {
        #[command(flatten)]
        input: ReceiptInput,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract ingredients from receipt text
    Ingredients {
        #[command(flatten)]
        input: ReceiptInput,
    },

    /// List the recipe catalog
    Recipes,

    /// Validate a recipe catalog file
    CheckCatalog {
        /// Path to the YAML catalog
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_recommend() {
        let cli = Cli::parse_from(["receipt-chef", "recommend", "사과, 양파", "--naive", "--json"]);
        match cli.command {
            Commands::Recommend { input, json } => {
                assert_eq!(input.text.as_deref(), Some("사과, 양파"));
                assert!(input.naive);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result =
            Cli::try_parse_from(["receipt-chef", "ingredients", "우유", "--file", "r.txt"]);
        assert!(result.is_err());
    }
}
