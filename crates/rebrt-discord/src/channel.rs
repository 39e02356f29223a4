//! Room channel backed by the Discord HTTP API

use poise::serenity_prelude as serenity;
use rebrt_room::{ChannelHandle, RenameError};

/// Discord JSON error code for "Missing Permissions"
const MISSING_PERMISSIONS: isize = 50013;

/// The guild channel a room command was invoked in
pub struct GuildChannelHandle<'a> {
    http: &'a serenity::Http,
    channel_id: serenity::ChannelId,
    name: String,
}

impl<'a> GuildChannelHandle<'a> {
    pub fn new(http: &'a serenity::Http, channel: &serenity::GuildChannel) -> Self {
        Self {
            http,
            channel_id: channel.id,
            name: channel.name.clone(),
        }
    }
}

impl ChannelHandle for GuildChannelHandle<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn rename(&self, new_name: &str) -> Result<(), RenameError> {
        // Once the per-channel rename bucket is empty serenity's ratelimiter
        // holds this request until the bucket resets, up to ten minutes later
        self.channel_id
            .edit(self.http, serenity::EditChannel::new().name(new_name))
            .await
            .map(|_| ())
            .map_err(classify)
    }
}

fn classify(err: serenity::Error) -> RenameError {
    match &err {
        serenity::Error::Http(serenity::HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 403
                || response.error.code == MISSING_PERMISSIONS =>
        {
            RenameError::PermissionDenied
        }
        serenity::Error::Model(serenity::ModelError::InvalidPermissions { .. }) => {
            RenameError::PermissionDenied
        }
        _ => RenameError::Remote(err.to_string()),
    }
}
