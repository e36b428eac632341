use tracing::{debug, trace};

use crate::sentences::{GSV, Satellite};

/// Where the accumulator stands within a GSV group.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    /// No GSV sentence with message number 1 has been seen since creation or
    /// the last [`GroupAccumulator::clear`].
    #[default]
    AwaitingGroup,
    /// A group has started and rows are being appended.
    InGroup,
}

/// Collects the satellite rows of consecutive GSV sentences into one view.
///
/// A sentence with `message_number == 1` starts a new group and discards the
/// previous rows. Every sentence then appends its rows in arrival order,
/// whatever its message number. Nothing is reordered or deduplicated, and the
/// accumulator never checks the group against `total_messages` or
/// `satellites_in_view`; [`is_complete`](Self::is_complete) reports that
/// comparison for callers who care.
///
/// ```rust
/// use nmea_snapshot::{GroupAccumulator, Parser};
///
/// let mut parser = Parser::new();
/// parser.parse("$GPGSV,1,1,02,10,45,120,38,11,30,200,*72").unwrap();
///
/// let group: &GroupAccumulator = parser.accumulator();
/// assert_eq!(group.len(), 2);
/// assert!(group.is_complete());
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupAccumulator {
    satellites: Vec<Satellite>,
    message_numbers: Vec<u8>,
    state: GroupState,
    last_header: Option<GroupHeader>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupHeader {
    total_messages: u8,
    message_number: u8,
    satellites_in_view: u8,
}

impl GroupAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one GSV sentence.
    pub fn accept(&mut self, gsv: &GSV) {
        if gsv.message_number == 1 {
            if !self.satellites.is_empty() {
                debug!(
                    discarded = self.satellites.len(),
                    "GSV group restarted, discarding accumulated satellites"
                );
            }
            self.satellites.clear();
            self.message_numbers.clear();
            self.state = GroupState::InGroup;
        }

        for satellite in &gsv.satellites {
            trace!(
                id = %satellite.id,
                message_number = gsv.message_number,
                "appending satellite"
            );
            self.satellites.push(satellite.clone());
            self.message_numbers.push(gsv.message_number);
        }

        self.last_header = Some(GroupHeader {
            total_messages: gsv.total_messages,
            message_number: gsv.message_number,
            satellites_in_view: gsv.satellites_in_view,
        });
    }

    /// The accumulated satellites, in arrival order.
    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    /// The message number each entry of [`satellites`](Self::satellites) came from.
    pub fn message_numbers(&self) -> &[u8] {
        &self.message_numbers
    }

    pub fn len(&self) -> usize {
        self.satellites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.satellites.is_empty()
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    /// Discards every row and waits for the next group.
    pub fn clear(&mut self) {
        self.satellites.clear();
        self.message_numbers.clear();
        self.state = GroupState::AwaitingGroup;
        self.last_header = None;
    }

    /// Whether the last sentence closed its group with the advertised number
    /// of satellites.
    ///
    /// Informational only; accumulation does not depend on it.
    pub fn is_complete(&self) -> bool {
        match self.last_header {
            Some(header) => {
                self.state == GroupState::InGroup
                    && header.message_number == header.total_messages
                    && self.satellites.len() == usize::from(header.satellites_in_view)
            }
            None => false,
        }
    }
}
