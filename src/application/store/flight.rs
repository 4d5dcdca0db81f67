// src/application/store/flight.rs
use super::channel::Channel;
use std::collections::HashMap;

/// Identifies one issued command: its lane and the generation it was armed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightTicket {
    channel: Channel,
    generation: u64,
}

impl FlightTicket {
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Per-lane generation counters. Arming a lane disarms every earlier ticket
/// on that lane.
#[derive(Debug, Default)]
pub(super) struct FlightLedger {
    generations: HashMap<Channel, u64>,
}

impl FlightLedger {
    pub(super) fn arm(&mut self, channel: Channel) -> FlightTicket {
        let generation = self.generations.entry(channel).or_insert(0);
        *generation += 1;
        FlightTicket {
            channel,
            generation: *generation,
        }
    }

    pub(super) fn is_live(&self, ticket: &FlightTicket) -> bool {
        self.generations.get(&ticket.channel) == Some(&ticket.generation)
    }

    pub(super) fn live_generation(&self, channel: Channel) -> Option<u64> {
        self.generations.get(&channel).copied()
    }
}
