use crate::types::ChannelInfo;
use crate::types::ShortChannelId;
use std::collections::HashMap;

/// Lookup from a channel's short channel id to its channel point, covering
/// every channel the node reports, open or closed. Read-only once built.
#[derive(Debug, Default)]
pub(crate) struct ChannelIndex {
    channels: HashMap<ShortChannelId, String>,
}

impl ChannelIndex {
    /// Merges the open and closed channel sets into one index. A short
    /// channel id never legitimately appears in both sets; should it happen
    /// anyway, the closed entry wins because it is merged last.
    pub(crate) fn from_channels(open: Vec<ChannelInfo>, closed: Vec<ChannelInfo>) -> Self {
        let mut channels = HashMap::with_capacity(open.len() + closed.len());

        for channel in open.into_iter().chain(closed) {
            channels.insert(channel.short_channel_id, channel.channel_point);
        }

        Self { channels }
    }

    pub(crate) fn get(&self, id: ShortChannelId) -> Option<&str> {
        self.channels.get(&id).map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.channels.len()
    }
}
