use crate::types::RevenueEvent;
use serde::Serialize;
use std::collections::HashMap;

/// The revenue recorded for one ordered pair of channels, in millisatoshis.
///
/// The incoming fields record forwards where the first channel of the pair
/// was the incoming side, the outgoing fields record forwards where it was
/// the outgoing side. Fees are credited to both sides of a forward, so
/// summing all fee fields across a report double-counts the node's total.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Revenue {
    pub amount_incoming_msat: u64,
    pub amount_outgoing_msat: u64,
    pub fees_incoming_msat: u64,
    pub fees_outgoing_msat: u64,
}

/// Revenue per ordered channel pair, keyed by channel point. The outer map
/// is always initialized; a node without forwards produces an empty report,
/// not an absent one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub channel_pairs: HashMap<String, HashMap<String, Revenue>>,
}

impl Report {
    /// Folds revenue events into a report.
    ///
    /// Every event updates two cells. The cell keyed by the incoming channel
    /// first accumulates the amount that channel brought in and the fee
    /// credited to it; the mirrored cell keyed by the outgoing channel first
    /// accumulates the amount sent out and the same fee from the outgoing
    /// channel's perspective. A self-loop forward updates all four
    /// accumulators of a single cell.
    pub(crate) fn from_events(events: &[RevenueEvent]) -> Self {
        let mut channel_pairs: HashMap<String, HashMap<String, Revenue>> = HashMap::new();

        for event in events {
            // The source guarantees that a forward never pays out more than
            // it received.
            let fee_msat = event.incoming_msat - event.outgoing_msat;

            let incoming = channel_pairs
                .entry(event.incoming_channel.clone())
                .or_default()
                .entry(event.outgoing_channel.clone())
                .or_default();
            incoming.amount_incoming_msat += event.incoming_msat;
            incoming.fees_incoming_msat += fee_msat;

            let outgoing = channel_pairs
                .entry(event.outgoing_channel.clone())
                .or_default()
                .entry(event.incoming_channel.clone())
                .or_default();
            outgoing.amount_outgoing_msat += event.outgoing_msat;
            outgoing.fees_outgoing_msat += fee_msat;
        }

        Self { channel_pairs }
    }
}
