//! Interactive terminal front end for the CryptoSim backend.
//!
//! Loads all four views on startup, polls prices in the background, and
//! reads trade commands from stdin until EOF, `quit`, or Ctrl-C.

use cryptosim_client::prelude::*;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Buy(String, String),
    Sell(String, String),
    Reset,
    Refresh,
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?.to_ascii_lowercase();
    let command = match head.as_str() {
        "buy" | "sell" => {
            // Missing operands become empty strings; the controller's
            // validation rejects them with the proper warning.
            let symbol = parts.next().unwrap_or("").to_string();
            let quantity = parts.next().unwrap_or("").to_string();
            if head == "buy" {
                Command::Buy(symbol, quantity)
            } else {
                Command::Sell(symbol, quantity)
            }
        }
        "reset" => Command::Reset,
        "refresh" => Command::Refresh,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    };
    Some(command)
}

fn print_help() {
    println!("\nCommands:");
    println!("  buy <symbol> <quantity>   e.g. buy XBT/USD 0.5");
    println!("  sell <symbol> <quantity>  e.g. sell ETH/USD 1");
    println!("  reset                     reset the account");
    println!("  refresh                   reload all views");
    println!("  quit                      exit");
}

async fn confirm_reset(lines: &mut Lines<BufReader<Stdin>>) -> bool {
    println!("{RESET_CONFIRM_PROMPT} [y/N]");
    matches!(
        lines.next_line().await,
        Ok(Some(answer)) if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    )
}

#[tokio::main]
async fn main() {
    setup_logger();

    let config = Config::new();
    let poll_interval = Duration::from_secs(config.polling.interval_secs);
    // stdin belongs to the command loop below, which asks for the reset
    // confirmation itself before invoking the controller; the viewport must
    // not compete for it with a second prompt.
    let viewport = TerminalViewPort::with_assumed_confirmation();
    let mut controller = HttpViewController::with_http_client(config, viewport);

    controller.refresh_all().await;
    print_help();

    let mut ticker = time::interval_at(Instant::now() + poll_interval, poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            _ = ticker.tick() => controller.poll_tick().await,
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line(), if stdin_open => {
                let Ok(Some(line)) = line else {
                    // stdin closed; keep polling until Ctrl-C
                    stdin_open = false;
                    continue;
                };
                match parse_command(&line) {
                    Some(Command::Buy(symbol, quantity)) => {
                        let _ = controller.submit_buy(&symbol, &quantity).await;
                    }
                    Some(Command::Sell(symbol, quantity)) => {
                        let _ = controller.submit_sell(&symbol, &quantity).await;
                    }
                    Some(Command::Reset) => {
                        if confirm_reset(&mut lines).await {
                            let _ = controller.reset_account().await;
                        }
                    }
                    Some(Command::Refresh) => controller.refresh_all().await,
                    Some(Command::Help) => print_help(),
                    Some(Command::Quit) => break,
                    Some(Command::Unknown(word)) => {
                        println!("Unknown command: {word} (try 'help')");
                    }
                    None => {}
                }
            }
        }
    }
}
