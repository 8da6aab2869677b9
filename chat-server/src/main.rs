//! chat-api: serve the messages/quizzes HTTP API, or add a standalone quiz. Config from env and optional CLI args.

use anyhow::Result;
use chat_core::init_tracing;
use chat_server::{add_quiz, run_server, Cli, Commands, ServerConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { database_url, bind } => {
            let config = ServerConfig::load(database_url, bind)?;
            config.validate()?;
            init_tracing(&config.log_file)?;
            run_server(config).await
        }
        Commands::AddQuiz {
            question,
            answer,
            database_url,
        } => handle_add_quiz(database_url, &question, &answer).await,
    }
}

/// Handle the add-quiz command.
async fn handle_add_quiz(database_url: Option<String>, question: &str, answer: &str) -> Result<()> {
    let config = ServerConfig::load(database_url, None)?;
    config.validate()?;
    init_tracing(&config.log_file)?;

    let quiz = add_quiz(&config, question, answer).await?;

    println!("Created quiz {}: {}", quiz.id, quiz.question);
    Ok(())
}
