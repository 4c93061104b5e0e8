//! Interactive assistant console
//!
//! Reads questions from stdin, one per line, and prints answers. Canned
//! questions are answered locally; everything else needs a backend listening
//! on `--addr` (default 127.0.0.1:9753).

use std::io::{BufRead, Write};

use blockworld_assistant::AssistantClient;

const DEFAULT_ADDR: &str = "127.0.0.1:9753";

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    let addr = args
        .iter()
        .position(|a| a == "--addr")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or_else(|| DEFAULT_ADDR.to_string());

    let mut client = AssistantClient::new(addr);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("Ask me about building and exploring. Empty line or Ctrl-D quits.");
    print!("> ");
    stdout.flush().ok();

    for line in stdin.lock().lines() {
        let question = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let question = question.trim();
        if question.is_empty() {
            break;
        }

        match client.ask(question).await {
            Ok(answer) => println!("{answer}"),
            Err(e) => {
                log::warn!("assistant error: {e}");
                println!("{}", e.retry_message());
            }
        }

        print!("> ");
        stdout.flush().ok();
    }
}
