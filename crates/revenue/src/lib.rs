//! Channel-pair revenue reports for an lnd routing node.
//!
//! For every pair of channels that forwarded payments through the node
//! together, the report tallies how many millisatoshis were forwarded in
//! each direction and the routing fees each direction earned. Reports are
//! keyed by channel point so that channels which have since been closed
//! keep their identity.

mod channel_index;
mod events;
mod report;
mod types;

pub use crate::report::Report;
pub use crate::report::Revenue;
pub use crate::types::ChannelInfo;
pub use crate::types::ForwardingEvent;
pub use crate::types::ShortChannelId;
pub use pagination::Page;

use crate::channel_index::ChannelIndex;
use anyhow::Result;
use async_trait::async_trait;

/// Read access to the node data a revenue report is built from. Implemented
/// by the transport layer talking to the daemon; any retry policy lives in
/// the implementation.
#[async_trait]
pub trait NodeClient {
    /// Lists the node's currently open channels.
    async fn list_open_channels(&self) -> Result<Vec<ChannelInfo>>;

    /// Lists the channels the node has closed.
    async fn list_closed_channels(&self) -> Result<Vec<ChannelInfo>>;

    /// Fetches one page of the node's forwarding history, requesting at most
    /// `max_events` events starting at `offset`. The returned page carries
    /// the offset at which the next query should start.
    async fn forwarding_history(
        &self,
        offset: u32,
        max_events: u32,
    ) -> Result<Page<ForwardingEvent>>;
}

/// Produces the node's channel-pair revenue report over its full forwarding
/// history.
///
/// The channel listings and the forwarding history are fetched concurrently;
/// the first upstream error aborts the report and is returned unchanged.
/// Forwards through channels the node no longer knows about are skipped.
pub async fn get_revenue_report<C>(client: &C) -> Result<Report>
where
    C: NodeClient + Sync,
{
    let (open, closed, history) = tokio::try_join!(
        client.list_open_channels(),
        client.list_closed_channels(),
        events::fetch_forwarding_history(client),
    )?;

    let index = ChannelIndex::from_channels(open, closed);

    tracing::debug!(
        channels = index.len(),
        forwards = history.len(),
        "Fetched revenue report data"
    );

    let events = events::resolve_events(&index, history);

    Ok(Report::from_events(&events))
}
