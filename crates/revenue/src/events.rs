use crate::channel_index::ChannelIndex;
use crate::types::ForwardingEvent;
use crate::types::RevenueEvent;
use crate::NodeClient;
use anyhow::Result;
use pagination::collect_pages;

/// Number of forwarding events requested per forwarding history query.
pub(crate) const MAX_QUERY_EVENTS: u32 = 500;

/// Fetches the node's complete forwarding history, page by page, in the
/// order the node reports it.
pub(crate) async fn fetch_forwarding_history<C>(client: &C) -> Result<Vec<ForwardingEvent>>
where
    C: NodeClient + ?Sized,
{
    collect_pages(
        |offset, max_events| client.forwarding_history(offset, max_events),
        MAX_QUERY_EVENTS,
    )
    .await
}

/// Resolves forwarding events to revenue events, preserving their order and
/// dropping every event for which either channel cannot be found in the
/// index. A channel the daemon no longer knows about cannot be attributed
/// revenue, so its forwards are excluded from the report rather than failing
/// the whole query.
pub(crate) fn resolve_events(
    index: &ChannelIndex,
    events: Vec<ForwardingEvent>,
) -> Vec<RevenueEvent> {
    events
        .into_iter()
        .filter_map(|event| resolve_event(index, event))
        .collect()
}

fn resolve_event(index: &ChannelIndex, event: ForwardingEvent) -> Option<RevenueEvent> {
    let Some(incoming_channel) = index.get(event.chan_id_in) else {
        tracing::debug!(
            short_channel_id = event.chan_id_in.0,
            "Skipping forward with unknown incoming channel"
        );
        return None;
    };

    let Some(outgoing_channel) = index.get(event.chan_id_out) else {
        tracing::debug!(
            short_channel_id = event.chan_id_out.0,
            "Skipping forward with unknown outgoing channel"
        );
        return None;
    };

    Some(RevenueEvent {
        incoming_channel: incoming_channel.to_string(),
        outgoing_channel: outgoing_channel.to_string(),
        incoming_msat: event.amt_in_msat,
        outgoing_msat: event.amt_out_msat,
    })
}
