use crate::config::Config;
use anyhow::Result;
use rebrt_discord::{AutoReply, Data, DiscordService};
use rebrt_fetch::HttpFetcher;
use rebrt_leaderboard::{LeaderboardService, Notices};
use rebrt_room::RoomEditor;

use tokio::signal;
use tracing::{error, info};

/// Gateway service - main orchestrator
pub struct GatewayService {
    config: Config,
}

impl GatewayService {
    /// Create a new gateway service
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Build the state shared by all commands
    fn build_data(&self) -> Data {
        let leaderboard = LeaderboardService::new(HttpFetcher::new(), &self.config.sekai.api_base)
            .with_notices(Notices::new(&self.config.sekai.status_url));
        info!("Leaderboard source: {}", self.config.sekai.api_base);

        let rename_timeout = self.config.room.rename_timeout();
        let rooms = RoomEditor::new(rename_timeout);
        info!("Room rename timeout: {:?}", rename_timeout);

        let reactions = &self.config.reactions;
        let auto_reply = (!reactions.trigger.trim().is_empty())
            .then(|| AutoReply::new(&reactions.trigger, &reactions.emoji));
        if auto_reply.is_none() {
            info!("Auto reply disabled");
        }

        Data {
            leaderboard,
            rooms,
            auto_reply,
        }
    }

    /// Run the gateway service
    pub async fn run(self) -> Result<()> {
        // Initialize logging
        rebrt_logging::init_logging(&self.config.logging.level)?;
        info!("Starting ReBRT Gateway Service");

        let data = self.build_data();

        let discord_service = DiscordService::new(
            &self.config.discord.token,
            &self.config.discord.activity,
            data,
        );

        // Setup signal handler for graceful shutdown
        let shutdown = async {
            if let Err(e) = signal::ctrl_c().await {
                error!("Failed to install Ctrl+C handler: {}", e);
            }
            info!("Received shutdown signal");
        };

        // Run the bot
        tokio::select! {
            result = discord_service.run() => {
                if let Err(e) = result {
                    error!("Discord service error: {:#}", e);
                }
            }
            _ = shutdown => {
                info!("Shutting down gracefully...");
            }
        }

        info!("Gateway service stopped");
        Ok(())
    }
}
