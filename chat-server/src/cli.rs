//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "chat-api")]
#[command(about = "Chat messages with embedded quizzes over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (config from env; flags override DATABASE_URL / BIND_ADDR).
    Serve {
        #[arg(short, long)]
        database_url: Option<String>,
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Insert a standalone quiz that can be answered via POST /quizzes/{id}/answer; prints its id.
    AddQuiz {
        #[arg(short, long)]
        question: String,
        #[arg(short, long)]
        answer: String,
        #[arg(short, long)]
        database_url: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from(["chat-api", "serve", "--bind", "127.0.0.1:9000"]).unwrap();
        match cli.command {
            Commands::Serve { database_url, bind } => {
                assert!(database_url.is_none());
                assert_eq!(bind.as_deref(), Some("127.0.0.1:9000"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_parse_add_quiz() {
        let cli = Cli::try_parse_from([
            "chat-api", "add-quiz", "--question", "2+2?", "--answer", "4",
        ])
        .unwrap();
        match cli.command {
            Commands::AddQuiz { question, answer, .. } => {
                assert_eq!(question, "2+2?");
                assert_eq!(answer, "4");
            }
            _ => panic!("expected add-quiz"),
        }
    }

    #[test]
    fn test_add_quiz_requires_answer() {
        assert!(Cli::try_parse_from(["chat-api", "add-quiz", "--question", "q"]).is_err());
    }
}
