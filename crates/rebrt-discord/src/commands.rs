//! Slash commands
//!
//! Commands that talk to an upstream service defer first, everything else
//! answers immediately.

use crate::channel::GuildChannelHandle;
use crate::utils::prepare_reply;
use crate::{Context, Data, Error};
use rebrt_room::{edit_room, RoomEdit, RoomError};
use rebrt_toolkit::TimestampStyle;
use rebrt_types::{EventKind, Page, Region};

const BOT_MOTTO: &str = "slava ReBRT";
const NENE_SLEEP: &str = "<a:nene_sleep:1462809640017334293>";

/// All commands registered with the framework
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        rm_code(),
        rm_players(),
        rm_close(),
        leaderboard(),
        coin(),
        pick(),
        random(),
        isv(),
        timestamp(),
        convert_timezone(),
        rgb_to_hex(),
        hex_to_rgb(),
        length(),
        repeat(),
        qr(),
        google_search(),
        check_bot(),
        nene_sleep(),
    ]
}

/// Send a reply, substituting the fallback for empty text and cutting overlong text
async fn say(ctx: Context<'_>, text: impl AsRef<str>) -> Result<(), Error> {
    ctx.say(prepare_reply(text.as_ref())).await?;
    Ok(())
}

// ============================================================================
// Rooms
// ============================================================================

async fn edit_current_room(ctx: Context<'_>, edit: RoomEdit) -> Result<String, Error> {
    let channel = ctx.channel_id().to_channel(ctx.serenity_context()).await?;
    let Some(channel) = channel.guild() else {
        return Ok(RoomError::MalformedSource.to_string());
    };

    let handle = GuildChannelHandle::new(ctx.http(), &channel);
    let reply = edit_room(&ctx.data().rooms, &handle, &edit).await;
    Ok(reply.to_string())
}

/// Change the room code
#[poise::command(slash_command, guild_only)]
pub async fn rm_code(
    ctx: Context<'_>,
    #[description = "Set a new code for the room"] new_code: String,
) -> Result<(), Error> {
    let reply = edit_current_room(ctx, RoomEdit::code(&new_code)).await?;
    say(ctx, reply).await
}

/// Change a room's players
#[poise::command(slash_command, guild_only)]
pub async fn rm_players(
    ctx: Context<'_>,
    #[description = "Set a room's players, [1-5] or f"] players: String,
) -> Result<(), Error> {
    let reply = edit_current_room(ctx, RoomEdit::players(&players)).await?;
    say(ctx, reply).await
}

/// Close the room
#[poise::command(slash_command, guild_only)]
pub async fn rm_close(ctx: Context<'_>) -> Result<(), Error> {
    let reply = edit_current_room(ctx, RoomEdit::close()).await?;
    say(ctx, reply).await
}

// ============================================================================
// Leaderboard
// ============================================================================

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum EventChoice {
    #[name = "not a WL"]
    Live,
    #[name = "WL"]
    WorldLink,
}

impl From<EventChoice> for EventKind {
    fn from(choice: EventChoice) -> Self {
        match choice {
            EventChoice::Live => EventKind::Live,
            EventChoice::WorldLink => EventKind::LiveLatestChapter,
        }
    }
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum RegionChoice {
    #[name = "Global"]
    Global,
    #[name = "Korea"]
    Korea,
    #[name = "Japan"]
    Japan,
    #[name = "Taiwan"]
    Taiwan,
    #[name = "China"]
    China,
}

impl From<RegionChoice> for Region {
    fn from(choice: RegionChoice) -> Self {
        match choice {
            RegionChoice::Global => Region::En,
            RegionChoice::Korea => Region::Kr,
            RegionChoice::Japan => Region::Jp,
            RegionChoice::Taiwan => Region::Tw,
            RegionChoice::China => Region::Cn,
        }
    }
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum PageChoice {
    #[name = "Page 1 (t1-t50)"]
    First,
    #[name = "Page 2 (t50-t100)"]
    Second,
    #[name = "Page 3 (t100+)"]
    Third,
}

impl From<PageChoice> for Page {
    fn from(choice: PageChoice) -> Self {
        match choice {
            PageChoice::First => Page::First,
            PageChoice::Second => Page::Second,
            PageChoice::Third => Page::Third,
        }
    }
}

/// Get the sekai leaderboard
#[poise::command(slash_command)]
pub async fn leaderboard(
    ctx: Context<'_>,
    #[rename = "type"]
    #[description = "Set the event type, a WL or not"]
    kind: Option<EventChoice>,
    #[description = "Set the server region"] region: Option<RegionChoice>,
    #[description = "Set the leaderboard page"] page: Option<PageChoice>,
) -> Result<(), Error> {
    ctx.defer().await?;

    let kind = kind.map(EventKind::from).unwrap_or_default();
    let region = region.map(Region::from).unwrap_or_default();
    let page = page.map(Page::from).unwrap_or_default();

    let board = ctx.data().leaderboard.reply(kind, region, page).await;
    say(ctx, board).await
}

// ============================================================================
// Toolkit
// ============================================================================

/// Flip a coin
#[poise::command(slash_command)]
pub async fn coin(ctx: Context<'_>) -> Result<(), Error> {
    let side = rebrt_toolkit::coin(&mut rand::rng());
    say(ctx, side).await
}

/// Pick a random item of all items
#[poise::command(slash_command)]
pub async fn pick(
    ctx: Context<'_>,
    #[description = "Set the space separated items list"] items: String,
) -> Result<(), Error> {
    let picked = rebrt_toolkit::pick(&items, &mut rand::rng())
        .unwrap_or_default()
        .to_string();
    say(ctx, picked).await
}

/// Send a random number
#[poise::command(slash_command)]
pub async fn random(
    ctx: Context<'_>,
    #[description = "Set the range start"] start: Option<i64>,
    #[description = "Set the range end"] stop: Option<i64>,
) -> Result<(), Error> {
    let reply = match rebrt_toolkit::random_between(
        start.unwrap_or(1),
        stop.unwrap_or(100),
        &mut rand::rng(),
    ) {
        Ok(n) => n.to_string(),
        Err(e) => e.to_string(),
    };
    say(ctx, reply).await
}

/// Get a value for compare ISVs
#[poise::command(slash_command)]
pub async fn isv(
    ctx: Context<'_>,
    #[description = "Your team leader skill"] leader_skill: i64,
    #[description = "Your total team skill, including the leader"] team_skill: i64,
) -> Result<(), Error> {
    say(ctx, rebrt_toolkit::isv(leader_skill, team_skill).to_string()).await
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum TimestampChoice {
    #[name = "t (short time)"]
    ShortTime,
    #[name = "T (long time)"]
    LongTime,
    #[name = "f (long date + short time)"]
    ShortDateTime,
    #[name = "F (very long)"]
    LongDateTime,
    #[name = "R (relative)"]
    Relative,
}

impl From<TimestampChoice> for TimestampStyle {
    fn from(choice: TimestampChoice) -> Self {
        match choice {
            TimestampChoice::ShortTime => TimestampStyle::ShortTime,
            TimestampChoice::LongTime => TimestampStyle::LongTime,
            TimestampChoice::ShortDateTime => TimestampStyle::ShortDateTime,
            TimestampChoice::LongDateTime => TimestampStyle::LongDateTime,
            TimestampChoice::Relative => TimestampStyle::Relative,
        }
    }
}

/// Convert UTC to a discord timestamp
#[poise::command(slash_command)]
pub async fn timestamp(
    ctx: Context<'_>,
    #[description = "Set the year, like 1941"] year: i32,
    #[description = "Set the month, like 06"] month: u32,
    #[description = "Set the day, like 22"] day: u32,
    #[description = "Set the hour, like 05"] hour: u32,
    #[description = "Set the minute, like 55"] minute: u32,
    #[rename = "type"]
    #[description = "Set the timestamp style"]
    style: TimestampChoice,
) -> Result<(), Error> {
    let reply = rebrt_toolkit::discord_timestamp(year, month, day, hour, minute, style.into())
        .unwrap_or_else(|e| e.to_string());
    say(ctx, reply).await
}

/// Convert timezone
#[poise::command(slash_command)]
pub async fn convert_timezone(
    ctx: Context<'_>,
    #[description = "Set the hour to convert, like 22"] hour: i64,
    #[description = "The source timezone, like +3 or -12"] source_timezone: i64,
    #[description = "The target timezone"] target_timezone: i64,
) -> Result<(), Error> {
    say(
        ctx,
        rebrt_toolkit::convert_timezone(hour, source_timezone, target_timezone),
    )
    .await
}

/// Convert rgb to hex
#[poise::command(slash_command)]
pub async fn rgb_to_hex(
    ctx: Context<'_>,
    #[description = "Set red color value, like 51"] red: i64,
    #[description = "Set the green color value, like 204"] green: i64,
    #[description = "Set the blue color value, like 187"] blue: i64,
) -> Result<(), Error> {
    let reply = rebrt_toolkit::rgb_to_hex(red, green, blue).unwrap_or_else(|e| e.to_string());
    say(ctx, reply).await
}

/// Convert hex to rgb
#[poise::command(slash_command)]
pub async fn hex_to_rgb(
    ctx: Context<'_>,
    #[description = "Set the hex color, like #33ccbb"] hex_color: String,
) -> Result<(), Error> {
    let reply = rebrt_toolkit::hex_to_rgb(&hex_color).unwrap_or_else(|e| e.to_string());
    say(ctx, reply).await
}

/// Get the text length
#[poise::command(slash_command)]
pub async fn length(
    ctx: Context<'_>,
    #[description = "Set the text to measure"] text: String,
) -> Result<(), Error> {
    say(ctx, rebrt_toolkit::length(&text).to_string()).await
}

/// Repeat the text
#[poise::command(slash_command)]
pub async fn repeat(
    ctx: Context<'_>,
    #[description = "Set the text for repeating"] text: String,
    #[description = "Set the repeating amount"] repeats: Option<i64>,
) -> Result<(), Error> {
    let repeats = usize::try_from(repeats.unwrap_or(79)).unwrap_or(0);
    let reply = rebrt_toolkit::repeat(&text, repeats).unwrap_or_else(|e| e.to_string());
    say(ctx, reply).await
}

/// Make a QR code
#[poise::command(slash_command)]
pub async fn qr(
    ctx: Context<'_>,
    #[description = "Set the text for new QR code"] text: String,
) -> Result<(), Error> {
    say(ctx, rebrt_toolkit::qr_code_url(&text)).await
}

/// I'm feeling lucky
#[poise::command(slash_command)]
pub async fn google_search(
    ctx: Context<'_>,
    #[description = "Set the text to search"] text: String,
    #[description = "Set the search language, like en or ja"] language: Option<String>,
) -> Result<(), Error> {
    let language = language.unwrap_or_else(|| "ru".to_string());
    say(ctx, rebrt_toolkit::google_search_url(&text, &language)).await
}

/// Check is the bot alive
#[poise::command(slash_command)]
pub async fn check_bot(ctx: Context<'_>) -> Result<(), Error> {
    say(ctx, BOT_MOTTO).await
}

/// Nene sleep emoji
#[poise::command(slash_command)]
pub async fn nene_sleep(ctx: Context<'_>) -> Result<(), Error> {
    say(ctx, NENE_SLEEP).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_has_a_unique_name() {
        let commands = all();
        let mut names: Vec<_> = commands.iter().map(|c| c.name.clone()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), commands.len());
    }

    #[test]
    fn test_leaderboard_type_parameter_is_renamed() {
        let command = leaderboard();
        let names: Vec<_> = command.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["type", "region", "page"]);
    }

    #[test]
    fn test_choice_mapping() {
        assert_eq!(EventKind::from(EventChoice::WorldLink), EventKind::LiveLatestChapter);
        assert_eq!(Region::from(RegionChoice::Global), Region::En);
        assert_eq!(Page::from(PageChoice::Third), Page::Third);
    }

    #[test]
    fn test_room_commands_are_guild_only() {
        for command in [rm_code(), rm_players(), rm_close()] {
            assert!(command.guild_only, "{}", command.name);
        }
    }
}
