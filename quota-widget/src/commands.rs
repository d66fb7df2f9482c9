use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::sync::mpsc;

use quota_widget_core::modules::poller::{PollSnapshot, Poller};
use quota_widget_core::modules::quota::QuotaClient;
use quota_widget_core::modules::token_extraction::StateDbTokenProvider;
use quota_widget_core::EngineTables;
use quota_widget_types::{AppConfig, DashboardState};

use crate::render::{render_json, render_state};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

fn build_poller(config: &AppConfig, interval: Duration) -> Result<Poller> {
    let client = QuotaClient::from_config(config).context("Failed to build HTTP client")?;
    Ok(Poller::new(
        Arc::new(StateDbTokenProvider::from_config(config)),
        Arc::new(client),
        EngineTables::from_config(config),
        interval,
    ))
}

fn poll_interval(config: &AppConfig, override_secs: Option<u64>) -> Result<Duration> {
    let secs = override_secs.unwrap_or(config.refresh_interval_secs);
    if secs < AppConfig::MIN_REFRESH_INTERVAL_SECS {
        anyhow::bail!(
            "Refresh interval must be at least {} seconds (got {})",
            AppConfig::MIN_REFRESH_INTERVAL_SECS,
            secs
        );
    }
    Ok(Duration::from_secs(secs))
}

pub async fn handle_once(config: &AppConfig, json: bool) -> Result<()> {
    let poller = build_poller(config, poll_interval(config, None)?)?;
    let state = poller.poll_once().await;
    write_once(&mut std::io::stdout().lock(), &config.title, &state, json)
}

/// JSON consumers get a document for every state, errors included; the
/// table view leaves the error to the exit message.
fn write_once(out: &mut impl Write, title: &str, state: &DashboardState, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", render_json(state)?)?;
    } else if !matches!(state, DashboardState::Error { .. }) {
        write!(out, "{}", render_state(title, state, false))?;
    }
    out.flush()?;

    if let DashboardState::Error { message } = state {
        anyhow::bail!("{}", message);
    }
    Ok(())
}

pub async fn handle_watch(config: &AppConfig, interval: Option<u64>, json: bool) -> Result<()> {
    let poller = build_poller(config, poll_interval(config, interval)?)?;
    let handle = poller.spawn();
    let mut updates = handle.subscribe();

    let mut enter = spawn_enter_listener();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let initial = updates.borrow_and_update().clone();
    draw(&config.title, &initial, json)?;

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    tracing::warn!("[Watch] Poller stopped");
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                draw(&config.title, &snapshot, json)?;
            },
            Some(()) = enter.recv() => {
                tracing::debug!("[Watch] Refresh requested from terminal");
                handle.refresh_now();
            },
            _ = &mut ctrl_c => break,
        }
    }

    handle.shutdown();
    Ok(())
}

/// Sends one message per line typed on stdin.
///
/// Runs on a plain thread: a blocking stdin read would otherwise hold up
/// runtime shutdown until the next newline.
fn spawn_enter_listener() -> mpsc::UnboundedReceiver<()> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            if line.is_err() || tx.send(()).is_err() {
                break;
            }
        }
    });
    rx
}

fn draw(title: &str, snapshot: &PollSnapshot, json: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        // one document per state change; refresh-in-progress ticks are skipped
        if !snapshot.refreshing {
            writeln!(stdout, "{}", render_json(&snapshot.state)?)?;
        }
    } else {
        write!(stdout, "{}{}", CLEAR_SCREEN, render_state(title, &snapshot.state, snapshot.refreshing))?;
        writeln!(stdout, "\nEnter: refresh  Ctrl+C: quit")?;
    }
    stdout.flush()?;
    Ok(())
}
