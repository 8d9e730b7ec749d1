//! Moltbook: command-line front end for the Moltbook agent.
//!
//! With a prompt argument, prints a single reply. Without one, runs an
//! interactive session on stdin.

use std::time::Duration;

use clap::Parser;
use miette::Result;
use moltbook_agent::Agent;
use moltbook_pollinations::{
    DEFAULT_API_URL, DEFAULT_MODEL, DEFAULT_REASONING_EFFORT, PollinationsClient,
    PollinationsConfig,
};
use moltbook_skills::{DEFAULT_BASE_URL, SkillCache, SkillSources};
use tokio::io::{AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod history;
mod repl;

use history::parse_history;

#[derive(Parser)]
#[command(name = "moltbook")]
#[command(about = "Chat with a Moltbook-aware agent", long_about = None)]
struct Cli {
    /// Prompt to answer. Starts an interactive session when omitted.
    prompt: Option<String>,

    /// Prior turns as a JSON array of {"role": "user"|"assistant", "content": "..."}
    #[arg(long)]
    history: Option<String>,

    /// Re-fetch the skill documents before answering
    #[arg(long)]
    refresh_skills: bool,

    /// Print the reply only once it is complete
    #[arg(long)]
    no_stream: bool,

    /// Agent profile placed at the top of the system prompt
    #[arg(long)]
    profile: Option<String>,

    /// Chat-completion endpoint
    #[arg(long, env = "MOLTBOOK_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Model identifier
    #[arg(long, env = "MOLTBOOK_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[arg(long, env = "MOLTBOOK_TEMPERATURE", default_value = "0.6")]
    temperature: f64,

    /// Reasoning-effort hint
    #[arg(long, env = "MOLTBOOK_REASONING_EFFORT", default_value = DEFAULT_REASONING_EFFORT)]
    reasoning_effort: String,

    /// Connect and read timeout in seconds
    #[arg(long = "timeout", env = "MOLTBOOK_TIMEOUT_SECS", default_value = "120")]
    timeout_secs: u64,

    /// Host serving skill.md, heartbeat.md, messaging.md and skill.json
    #[arg(long, env = "MOLTBOOK_SKILLS_URL", default_value = DEFAULT_BASE_URL)]
    skills_url: String,
}

impl Cli {
    fn pollinations_config(&self) -> PollinationsConfig {
        PollinationsConfig::default()
            .with_api_url(&self.api_url)
            .with_model(&self.model)
            .with_temperature(self.temperature)
            .with_reasoning_effort(&self.reasoning_effort)
            .with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries replies only.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "moltbook=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let history = match cli.history.as_deref() {
        Some(raw) => parse_history(raw).map_err(|e| miette::miette!("invalid --history: {}", e))?,
        None => Vec::new(),
    };

    let client = PollinationsClient::new(cli.pollinations_config())
        .map_err(|e| miette::miette!("failed to create completion client: {}", e))?;
    let skills = SkillCache::new(SkillSources::from_base_url(&cli.skills_url))
        .map_err(|e| miette::miette!("failed to create skill cache: {}", e))?;

    let mut agent = Agent::new(client, skills, cli.profile.clone())
        .await
        .map_err(|e| miette::miette!("failed to load skills: {}", e))?;

    if cli.refresh_skills {
        agent
            .refresh_skills()
            .await
            .map_err(|e| miette::miette!("failed to refresh skills: {}", e))?;
    }

    let mut stdout = tokio::io::stdout();

    let Some(prompt) = cli.prompt.as_deref() else {
        let stdin = BufReader::new(tokio::io::stdin());
        return repl::run(&mut agent, history, stdin, &mut stdout).await;
    };

    info!(turns = history.len(), "answering prompt");

    if cli.no_stream {
        let reply = agent
            .generate_reply(prompt, &history, None)
            .await
            .map_err(|e| miette::miette!("{}", e))?;
        stdout
            .write_all(reply.as_bytes())
            .await
            .map_err(|e| miette::miette!("failed to write reply: {}", e))?;
    } else {
        let stream = agent
            .stream_reply(prompt, &history, None)
            .await
            .map_err(|e| miette::miette!("{}", e))?;
        repl::write_reply(stream, &mut stdout).await?;
    }

    stdout
        .write_all(b"\n")
        .await
        .map_err(|e| miette::miette!("failed to write reply: {}", e))?;
    stdout
        .flush()
        .await
        .map_err(|e| miette::miette!("failed to flush output: {}", e))?;

    Ok(())
}
