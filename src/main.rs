/******************************************************************************
    Author: Joaquín Béjar García
    Email: jb@taunais.com
    Date: 28/3/25
 ******************************************************************************/
use orderbook_engine::io::{parse_line, render};
use orderbook_engine::utils::setup_logger;
use orderbook_engine::OrderBook;
use std::io::{self, BufRead, Write};

fn main() -> std::process::ExitCode {
    setup_logger();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut book = OrderBook::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::error!("I/O error reading stdin: {err}");
                return std::process::ExitCode::FAILURE;
            }
        };

        let (_side, order) = match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(parsed)) => parsed,
            Err(err) => {
                tracing::warn!("{err}");
                continue;
            }
        };

        let trades = book.submit(order);
        for trade in &trades {
            if let Err(err) = writeln!(out, "{trade}") {
                tracing::error!("I/O error writing stdout: {err}");
                return std::process::ExitCode::FAILURE;
            }
        }
        if let Err(err) = write!(out, "{}", render(&book)) {
            tracing::error!("I/O error writing stdout: {err}");
            return std::process::ExitCode::FAILURE;
        }
    }

    if let Err(err) = out.flush() {
        tracing::error!("I/O error flushing stdout: {err}");
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::SUCCESS
}
