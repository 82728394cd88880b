//! REPL Module
//!
//! Read-eval-print loop over a [`Session`].

pub mod commands;
mod session;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::api::Fetch;
use crate::error::Result;

pub use commands::{lookup, parse_input, Command, CommandKind, Input, COMMANDS};
pub use session::{Caches, Reply, Session};

pub const PROMPT: &str = "Pokedex > ";

/// Prompts, reads a line, runs it and prints the reply until `exit` or
/// end of input. Command errors are printed and the loop carries on.
pub async fn run<F, R, W>(session: &mut Session<F>, input: R, mut output: W) -> Result<()>
where
    F: Fetch,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            info!("end of input, leaving REPL");
            output.write_all(b"\n").await?;
            break;
        };

        match session.execute(&line).await {
            Ok(reply) => {
                output.write_all(reply.output.as_bytes()).await?;
                if reply.exit {
                    break;
                }
            }
            Err(err) => {
                debug!(error = %err, "command failed");
                output.write_all(format!("{}\n", err).as_bytes()).await?;
            }
        }
    }

    output.flush().await?;
    Ok(())
}
