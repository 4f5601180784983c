use serde::Deserialize;
use serde::Serialize;

/// The compact channel id lnd derives from the chain position of a channel's
/// funding transaction.
///
/// Only meaningful while the daemon still knows the channel; a channel that
/// has been closed and forgotten keeps its channel point but loses its short
/// channel id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortChannelId(pub u64);

/// A channel as far as revenue reporting is concerned, open or closed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub short_channel_id: ShortChannelId,
    /// The `<funding txid>:<output index>` outpoint of the channel, stable
    /// across the channel's whole lifetime.
    pub channel_point: String,
}

/// One forward as reported by the node's forwarding history, with both
/// channels identified by short channel id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForwardingEvent {
    pub chan_id_in: ShortChannelId,
    pub chan_id_out: ShortChannelId,
    pub amt_in_msat: u64,
    pub amt_out_msat: u64,
}

/// A forward with both channels resolved to their channel points. The
/// difference between the incoming and outgoing amount is the fee earned on
/// the forward.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RevenueEvent {
    pub(crate) incoming_channel: String,
    pub(crate) outgoing_channel: String,
    pub(crate) incoming_msat: u64,
    pub(crate) outgoing_msat: u64,
}
