//! # Main Entry Point
//!
//! Wires the layers together:
//! - Domain: Configuration and Types
//! - Infrastructure: Matrix, Recommendation Backend, Webhook
//! - Application: Router, Orchestrator, Scheduler, Logging
//! - Interface: Command Handlers
//!

#![recursion_limit = "256"]

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::SyncRoomMessageEvent,
    },
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

use jukebox::application::logging;
use jukebox::application::orchestrator::Recommender;
use jukebox::application::router::CommandRouter;
use jukebox::application::scheduler::{RecommendationTicker, ScheduleSettings, SchedulerConfig};
use jukebox::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use jukebox::infrastructure::backend::BackendClient;
use jukebox::infrastructure::matrix::{MatrixService, to_chat_event};
use jukebox::infrastructure::webhook::WebhookNotifier;
use jukebox::strings::logs;

#[derive(Debug, Parser)]
#[command(name = "jukebox", about = "Music recommendation relay for Matrix rooms")]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "JUKEBOX_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = logging::init(&config.system.data_dir)?;
    tracing::info!("{}", logs::config_loaded(&config.services.matrix.username));

    let token = config.bot_token()?;

    // 3. Initialize Infrastructure
    let backend = BackendClient::from_config(&config.backend, config.backend_token())
        .context("Failed to build backend client")?;
    let webhook = config
        .webhook_url()
        .map(|url| WebhookNotifier::new(url, config.backend.timeout_secs))
        .transpose()
        .context("Failed to build webhook client")?
        .map(Arc::new);

    // 4. Initialize Application Components
    let recommender = Arc::new(Recommender::new(Arc::new(backend)));
    let (settings, restart_rx) = ScheduleSettings::new(SchedulerConfig::new(
        config.schedule.keyword.clone(),
        config.schedule.interval(),
    ));

    // 5. Matrix Setup
    let client = Client::builder()
        .homeserver_url(&config.services.matrix.homeserver)
        .build()
        .await?;

    client
        .matrix_auth()
        .login_username(&config.services.matrix.username, &token)
        .send()
        .await
        .context("Failed to log in to the chat gateway")?;
    tracing::info!("{}", logs::LOGIN_SUCCESS);

    if let Some(name) = &config.services.matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    let bot_user_id = client
        .user_id()
        .map(|id| id.to_string())
        .context("Logged in but no user id is known")?;

    let chat = MatrixService::new(client.clone());
    let router = Arc::new(CommandRouter::new(
        settings.clone(),
        recommender.clone(),
        bot_user_id,
    ));

    // 6. Scheduler
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let ticker = RecommendationTicker::new(
        settings,
        restart_rx,
        recommender,
        Arc::new(chat.clone()),
        webhook,
    );
    let ticker_handle = tokio::spawn(ticker.run(shutdown_rx));

    // 7. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        let chat = chat.clone();

        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let ts = ev.origin_server_ts();
            let event_time =
                std::time::UNIX_EPOCH + std::time::Duration::from_millis(ts.get().into());
            if event_time < start_time {
                return;
            }

            let Some(event) = to_chat_event(original_msg, &room) else {
                return;
            };
            tracing::debug!("Received message from {}: {}", event.author_id, event.text);

            if let Err(e) = router.route(&chat, &event).await {
                tracing::error!("Failed to route message: {:#}", e);
            }
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::warn!(
                    "{}",
                    logs::invite_join_fail(room.room_id().as_str(), &e.to_string())
                );
            }
        }
    });

    // 8. Run until the sync loop dies or a shutdown signal arrives
    tracing::info!("{}", logs::SYNC_LOOP_START);
    let sync_client = client.clone();
    let mut sync_handle =
        tokio::spawn(async move { sync_client.sync(SyncSettings::default()).await });

    tokio::select! {
        res = &mut sync_handle => match res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::error!("{}", logs::sync_loop_fail(&e.to_string())),
            Err(e) => tracing::error!("{}", logs::sync_loop_fail(&e.to_string())),
        },
        () = shutdown_signal() => {
            tracing::info!("{}", logs::SHUTDOWN);
        }
    }

    let _ = shutdown_tx.send(true);
    sync_handle.abort();
    if let Err(e) = ticker_handle.await {
        tracing::error!("Scheduler task failed: {}", e);
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("{}", logs::shutdown_fail(&e.to_string()));
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
