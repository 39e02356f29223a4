use anyhow::{anyhow, Result};
use poise::serenity_prelude as serenity;
use rebrt_fetch::HttpFetcher;
use rebrt_leaderboard::LeaderboardService;
use rebrt_room::RoomEditor;
use rebrt_types::{Invocation, Invoker};
use tracing::{error, info};

pub mod channel;
pub mod commands;
pub mod utils;

pub use channel::GuildChannelHandle;

/// Framework error type
pub type Error = anyhow::Error;

/// Command context
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Reply to any message that mentions a trigger phrase
#[derive(Debug, Clone)]
pub struct AutoReply {
    trigger: String,
    reply: String,
}

impl AutoReply {
    pub fn new(trigger: &str, reply: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
            reply: reply.to_string(),
        }
    }

    pub fn matches(&self, content: &str) -> bool {
        !self.trigger.is_empty() && content.to_lowercase().contains(&self.trigger)
    }
}

/// State shared with every command
pub struct Data {
    pub leaderboard: LeaderboardService<HttpFetcher>,
    pub rooms: RoomEditor,
    pub auto_reply: Option<AutoReply>,
}

/// Discord channel service
pub struct DiscordService {
    token: String,
    activity: String,
    data: Data,
}

impl DiscordService {
    /// Create a new Discord service
    pub fn new(token: &str, activity: &str, data: Data) -> Self {
        info!("Discord service initialized");
        Self {
            token: token.to_string(),
            activity: activity.to_string(),
            data,
        }
    }

    /// Reject obviously unusable tokens before opening a gateway connection
    pub fn validate_token(&self) -> Result<()> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(anyhow!(
                "Discord bot token is empty. Set the TOKEN or DISCORD_TOKEN environment variable \
                or edit ~/.rebrt/rebrt.toml"
            ));
        }
        if token.split('.').count() != 3 {
            return Err(anyhow!("Discord bot token is malformed"));
        }
        Ok(())
    }

    /// Run the Discord bot until the gateway connection ends
    pub async fn run(self) -> Result<()> {
        self.validate_token()?;

        info!("Starting Discord bot...");

        let Self {
            token,
            activity,
            data,
        } = self;

        let intents =
            serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands: commands::all(),
                pre_command: |ctx| Box::pin(log_invocation(ctx)),
                on_error: |error| Box::pin(on_error(error)),
                event_handler: |ctx, event, framework, data| {
                    Box::pin(handle_event(ctx, event, framework, data))
                },
                ..Default::default()
            })
            .setup(move |ctx, ready, framework| {
                Box::pin(async move {
                    info!("Logged in as {}", ready.user.name);
                    let commands = &framework.options().commands;
                    poise::builtins::register_globally(ctx, commands).await?;
                    info!("Registered {} slash commands", commands.len());
                    Ok(data)
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&token, intents)
            .framework(framework)
            .activity(serenity::ActivityData::playing(activity))
            .await?;

        client.start().await?;

        Ok(())
    }
}

/// Per-invocation context for the current command
pub fn invocation_of(ctx: Context<'_>) -> Invocation {
    let author = ctx.author();
    let invoker = Invoker::new(author.id.get(), author.name.clone())
        .with_global_name(author.global_name.clone());
    Invocation::new(ctx.command().qualified_name.clone(), invoker, ctx.channel_id().get())
        .in_guild(ctx.guild_id().map(|id| id.get()))
}

async fn log_invocation(ctx: Context<'_>) {
    let invocation = invocation_of(ctx);
    info!(
        invocation = %invocation.id,
        command = %invocation.command,
        user = invocation.invoker.display_name(),
        user_id = invocation.invoker.discord_user_id,
        channel_id = invocation.channel_id,
        guild_id = ?invocation.guild_id,
        received_at = %invocation.received_at,
        "command invoked"
    );
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up the bot: {:#}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().qualified_name, "Command failed: {:#}", error);
            if let Err(e) = ctx.say(utils::FALLBACK_REPLY).await {
                error!("Failed to report command error: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}

async fn handle_event(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        handle_message(ctx, new_message, data).await?;
    }
    Ok(())
}

/// Handle regular messages
async fn handle_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    let Some(auto_reply) = &data.auto_reply else {
        return Ok(());
    };

    let own_id = ctx.cache.current_user().id;
    if msg.author.id == own_id || !auto_reply.matches(&msg.content) {
        return Ok(());
    }

    let reply = serenity::CreateMessage::new()
        .content(auto_reply.reply.clone())
        .reference_message(msg)
        .allowed_mentions(serenity::CreateAllowedMentions::new().replied_user(false));
    msg.channel_id.send_message(&ctx.http, reply).await?;

    Ok(())
}
