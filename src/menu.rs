use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

use crate::config::Config;
use crate::db::DbPool;
use crate::errors::SeedError;
use crate::operations::{clear_db, count_docs, seed_users};

const RULE: &str = "======================================";

/// An operation the operator can pick from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Seed,
    Clear,
    Count,
    Exit,
}

impl Operation {
    /// Maps one line of input to an operation
    ///
    /// Only the exact strings `0` to `3` are accepted; surrounding spaces
    /// make the input unknown.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "0" => Some(Operation::Seed),
            "1" => Some(Operation::Clear),
            "2" => Some(Operation::Count),
            "3" => Some(Operation::Exit),
            _ => None,
        }
    }

    /// Whether the menu waits for the prompt delay before showing again
    ///
    /// A finished seed shows the menu at once; clear and count pause first.
    pub fn pauses_before_prompt(self) -> bool {
        matches!(self, Operation::Clear | Operation::Count)
    }
}

/// Reads one line of raw input, without its LF or CRLF terminator
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray byte reaches the menu as an unknown operation. Returns `None` at end
/// of input.
async fn read_line<R>(input: &mut R, buf: &mut Vec<u8>) -> Result<Option<String>, SeedError>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    if input.read_until(b'\n', buf).await? == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}

/// Renders the menu prompt for a seed run of `seed_count` users
pub fn menu_text(seed_count: usize) -> String {
    format!(
        "{RULE}\n\nType the operation:\n\n\
         0 - Populate {n} users, {n} items and {n} comments;\n\
         1 - Clear db;\n\
         2 - Count documents;\n\
         3 - Exit.\n\n\
         {RULE}\nUser input: ",
        n = seed_count
    )
}

/// Runs the interactive menu until the operator exits or input ends
///
/// The first prompt appears after `config.prompt_delay()`.
///
/// ### Arguments
///
/// * `pool` - The database connection pool
/// * `config` - Seed size, retry policy and prompt delay
/// * `input` - Where operator lines are read from
/// * `output` - Where the menu, totals and messages are written
///
/// ### Errors
///
/// Returns the first error raised by an operation or by the terminal
pub async fn run_menu<R, W>(pool: &DbPool, config: &Config, mut input: R, mut output: W) -> Result<(), SeedError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    tokio::time::sleep(config.prompt_delay()).await;

    loop {
        output.write_all(menu_text(config.seed_count).as_bytes()).await?;
        output.flush().await?;

        let Some(line) = read_line(&mut input, &mut buf).await? else {
            info!("input closed, exiting");
            return Ok(());
        };

        let Some(operation) = Operation::parse(&line) else {
            output.write_all(format!("Unknown operation {}\n", line).as_bytes()).await?;
            continue;
        };

        match operation {
            Operation::Seed => {
                let report = seed_users(pool, config).await?;
                info!(
                    users = report.users,
                    items = report.items,
                    failed_attempts = report.failed_attempts,
                    failed_items = report.failed_items,
                    "seed finished"
                );
            }
            Operation::Clear => {
                clear_db(pool)?;
            }
            Operation::Count => {
                let totals = count_docs(pool)?;
                output.write_all(format!("{}\n", totals).as_bytes()).await?;
            }
            Operation::Exit => return Ok(()),
        }

        if operation.pauses_before_prompt() {
            tokio::time::sleep(config.prompt_delay()).await;
        }
    }
}
