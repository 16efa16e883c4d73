//! Lipi command-line driver.
//!
//! Plays the application-shell role: builds a channel registry, registers
//! the transliteration bridge on its channel, and sends one `translitBatch`
//! call with the texts from the command line (or stdin, one item per line).

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::Parser;
use lipi_core::backend::stub::StubProvider;
use lipi_core::{
    platform_provider, BridgeConfig, ChannelRegistry, MethodCall, MethodResult, ProviderHandle,
    TranslitBridge, METHOD_TRANSLIT_BATCH,
};
use serde_json::json;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "lipi",
    about = "Batch Latin → Indic transliteration over the Lipi bridge"
)]
struct Cli {
    /// Target script identifier (e.g. Devanagari, Tamil). Defaults to the
    /// bridge's configured default script.
    #[arg(short, long)]
    script: Option<String>,

    /// Use the stub backend even when a native one is compiled in.
    #[arg(long)]
    stub: bool,

    /// Print the raw response envelope as JSON instead of one line per item.
    #[arg(long)]
    json: bool,

    /// Texts to transliterate; reads stdin lines when empty.
    texts: Vec<String>,
}

fn select_provider(force_stub: bool) -> ProviderHandle {
    if force_stub {
        return ProviderHandle::new(StubProvider::new());
    }
    match platform_provider() {
        Some(provider) => provider,
        None => {
            warn!("no native backend in this build, using the stub (enable the `icu` feature)");
            ProviderHandle::new(StubProvider::new())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lipi=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let texts = if cli.texts.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()
            .context("reading texts from stdin")?
    } else {
        cli.texts.clone()
    };

    let config = BridgeConfig::from_env();
    let channel = config.channel.clone();
    let provider = select_provider(cli.stub);
    info!(channel = %channel, provider = ?provider, items = texts.len(), "sending batch");

    let registry = ChannelRegistry::new();
    registry.register(
        channel.clone(),
        Arc::new(TranslitBridge::new(Some(provider), config)),
    );

    let call = MethodCall::new(
        METHOD_TRANSLIT_BATCH,
        json!({ "texts": texts, "script": cli.script }),
    );
    let result = registry.invoke(&channel, &call);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    match result {
        MethodResult::Ok { value } => {
            for item in value.as_array().into_iter().flatten() {
                println!("{}", item.as_str().unwrap_or_default());
            }
            Ok(())
        }
        MethodResult::Error { code, message } => bail!("{code}: {message}"),
        MethodResult::NotImplemented => bail!("bridge reported the operation as not implemented"),
    }
}
