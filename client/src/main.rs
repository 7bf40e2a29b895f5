//! `todo`: terminal front end for the to-do list
//!
//! Reads one command per line from stdin and redraws the list after each.
//! `TODO_API_URL` selects the backend, `RUST_LOG` the log level (logs go to
//! stderr).

use std::time::Duration;
use todo_client::command::{Command, HELP};
use todo_client::{ClientConfig, HttpItemService, TodoView};
use todo_runtime::EffectHandle;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_client=info,todo_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting todo client");

    let service = HttpItemService::new(&config)?;
    let view = TodoView::new(service);

    settle(view.mount().await?, config.wait_timeout).await;
    println!("{}", view.render().await);
    println!("(type `help` for commands)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{HELP}"),
            Ok(command) => {
                settle(command.dispatch(&view).await?, config.wait_timeout).await;
                println!("{}", view.render().await);
            },
            Err(error) => eprintln!("{error}"),
        }
    }

    view.shutdown(config.wait_timeout).await?;
    Ok(())
}

/// Wait for a gesture's request before redrawing
async fn settle(mut handle: EffectHandle, timeout: Duration) {
    if handle.wait_with_timeout(timeout).await.is_err() {
        tracing::warn!("Backend is slow to answer; the list will update when it does");
    }
}
