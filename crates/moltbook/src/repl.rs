//! Interactive prompt loop.

use futures_util::StreamExt;
use miette::Result;
use moltbook_agent::{Agent, ConversationTurn, FragmentStream};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error, info};

const BANNER: &str = "Entering interactive mode. Type '/exit' to quit, '/refresh' to reload skills.\n";
const PROMPT: &str = "you> ";
const REPLY_PREFIX: &str = "agent> ";

/// A line typed at the prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Exit,
    Refresh,
    Skip,
    Prompt(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "" => Command::Skip,
            "/exit" => Command::Exit,
            "/refresh" => Command::Refresh,
            prompt => Command::Prompt(prompt),
        }
    }
}

/// Write each fragment as it arrives and return the whole reply.
pub async fn write_reply<W>(mut stream: FragmentStream, out: &mut W) -> Result<String>
where
    W: AsyncWrite + Unpin,
{
    let mut reply = String::new();

    while let Some(fragment) = stream.next().await {
        let fragment = fragment.map_err(|e| miette::miette!("reply stream failed: {}", e))?;
        out.write_all(fragment.as_bytes())
            .await
            .map_err(|e| miette::miette!("failed to write reply: {}", e))?;
        out.flush()
            .await
            .map_err(|e| miette::miette!("failed to flush output: {}", e))?;
        reply.push_str(&fragment);
    }

    Ok(reply)
}

/// Read prompts until `/exit` or end of input.
///
/// Completed exchanges are appended to `history`. A failed turn is logged and
/// leaves the history untouched.
pub async fn run<R, W>(
    agent: &mut Agent,
    mut history: Vec<ConversationTurn>,
    input: R,
    out: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("interactive session started");
    write_str(out, BANNER).await?;
    let mut lines = input.lines();

    loop {
        write_str(out, PROMPT).await?;

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| miette::miette!("failed to read input: {}", e))?
        else {
            write_str(out, "\n").await?;
            break;
        };

        match Command::parse(&line) {
            Command::Skip => continue,
            Command::Exit => break,
            Command::Refresh => match agent.refresh_skills().await {
                Ok(_) => write_str(out, "[skills reloaded]\n").await?,
                Err(e) => error!(error = %e, "failed to reload skills"),
            },
            Command::Prompt(prompt) => {
                write_str(out, REPLY_PREFIX).await?;
                match exchange(agent, &history, prompt, out).await {
                    Ok(reply) => {
                        debug!(turns = history.len(), "exchange complete");
                        history.push(ConversationTurn::user(prompt));
                        history.push(ConversationTurn::assistant(reply));
                    }
                    Err(e) => error!(error = %e, "reply failed"),
                }
                write_str(out, "\n").await?;
            }
        }
    }

    info!("interactive session ended");
    Ok(())
}

async fn exchange<W>(
    agent: &Agent,
    history: &[ConversationTurn],
    prompt: &str,
    out: &mut W,
) -> Result<String>
where
    W: AsyncWrite + Unpin,
{
    let stream = agent
        .stream_reply(prompt, history, None)
        .await
        .map_err(|e| miette::miette!("{}", e))?;
    write_reply(stream, out).await
}

async fn write_str<W>(out: &mut W, text: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(text.as_bytes())
        .await
        .map_err(|e| miette::miette!("failed to write output: {}", e))?;
    out.flush()
        .await
        .map_err(|e| miette::miette!("failed to flush output: {}", e))
}
