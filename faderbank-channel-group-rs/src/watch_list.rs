//! Outbound watch-list delivery.
//!
//! The channel group hands its current strip addresses to a
//! [`WatchListEmitter`], which turns them into a
//! [`WatchListRequest`] frame and passes the bytes to the registered
//! [`WatchListSink`]. Without a sink, emission is skipped.

use faderbank_ipc::{WatchListRequest, WATCH_LIST_FRAME_LEN};

use crate::channel_group::{AddressSlot, PHYSICAL_CHANNEL_COUNT};

/// Receives encoded watch-list frames.
///
/// Called inline from button handling, so implementations should queue the
/// frame rather than block on the transport.
pub trait WatchListSink {
    fn send(&mut self, frame: &[u8]);
}

impl<F> WatchListSink for F
where
    F: FnMut(&[u8]),
{
    fn send(&mut self, frame: &[u8]) {
        self(frame)
    }
}

/// Builds watch-list frames and owns their sequence numbers.
///
/// The sequence starts at 0 and advances (wrapping) only when a frame is
/// actually delivered.
#[derive(Debug)]
pub struct WatchListEmitter<W> {
    sink: Option<W>,
    sequence: u32,
}

impl<W> Default for WatchListEmitter<W> {
    fn default() -> Self {
        Self {
            sink: None,
            sequence: 0,
        }
    }
}

impl<W: WatchListSink> WatchListEmitter<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the sink, returning the previous one if any.
    pub fn register(&mut self, sink: W) -> Option<W> {
        self.sink.replace(sink)
    }

    pub fn is_registered(&self) -> bool {
        self.sink.is_some()
    }

    /// Sequence number the next delivered frame will carry.
    pub fn next_sequence(&self) -> u32 {
        self.sequence
    }

    /// Request describing `slots` under the next sequence number.
    pub fn request(&self, slots: &[AddressSlot; PHYSICAL_CHANNEL_COUNT]) -> WatchListRequest {
        WatchListRequest::new(self.sequence, core::array::from_fn(|i| slots[i].to_request()))
    }

    /// Encode `slots` and deliver the frame.
    ///
    /// Returns `false` if no sink is registered.
    pub fn emit(&mut self, slots: &[AddressSlot; PHYSICAL_CHANNEL_COUNT]) -> bool {
        let frame: [u8; WATCH_LIST_FRAME_LEN] = self.request(slots).to_bytes();

        let Some(sink) = self.sink.as_mut() else {
            #[cfg(feature = "defmt")]
            defmt::debug!("watch-list skipped: no sink registered");
            return false;
        };

        sink.send(&frame);

        #[cfg(feature = "defmt")]
        defmt::debug!("watch-list sent (seq {})", self.sequence);

        self.sequence = self.sequence.wrapping_add(1);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel_group::Address;
    use faderbank_ipc::UNASSIGNED_CHANNEL;

    fn first_page() -> [AddressSlot; PHYSICAL_CHANNEL_COUNT] {
        core::array::from_fn(|i| AddressSlot::Assigned(Address::new(1, i as u32 + 1)))
    }

    #[test]
    fn emit_without_sink_is_skipped() {
        let mut emitter: WatchListEmitter<fn(&[u8])> = WatchListEmitter::new();
        assert!(!emitter.is_registered());
        assert!(!emitter.emit(&first_page()));
        assert_eq!(emitter.next_sequence(), 0);
    }

    #[test]
    fn emit_delivers_decodable_frame() {
        let mut frames: std::vec::Vec<std::vec::Vec<u8>> = std::vec::Vec::new();
        {
            let mut emitter = WatchListEmitter::new();
            emitter.register(|frame: &[u8]| frames.push(frame.to_vec()));
            assert!(emitter.emit(&first_page()));
        }

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), WATCH_LIST_FRAME_LEN);

        let request = WatchListRequest::decode(&frames[0]).unwrap();
        assert_eq!(request.sequence, 0);
        for (i, entry) in request.entries.iter().enumerate() {
            assert_eq!((entry.channel, entry.page), (i as u32 + 1, 1));
        }
    }

    #[test]
    fn unassigned_slots_use_sentinel() {
        let mut slots = first_page();
        slots[6] = AddressSlot::Unassigned { page: 2 };
        slots[7] = AddressSlot::Unassigned { page: 2 };

        let emitter: WatchListEmitter<fn(&[u8])> = WatchListEmitter::new();
        let request = emitter.request(&slots);
        assert_eq!(request.entries[6].channel, UNASSIGNED_CHANNEL);
        assert_eq!(request.entries[7].page, 2);
        assert_eq!(request.entries[5].channel, 6);
    }

    #[test]
    fn sequence_advances_per_delivered_frame() {
        let mut seen = std::vec::Vec::new();
        {
            let mut emitter = WatchListEmitter::new();
            emitter.register(|frame: &[u8]| {
                seen.push(WatchListRequest::decode(frame).unwrap().sequence)
            });
            emitter.emit(&first_page());
            emitter.emit(&first_page());
            emitter.emit(&first_page());
            assert_eq!(emitter.next_sequence(), 3);
        }
        assert_eq!(seen, [0, 1, 2]);
    }

    #[test]
    fn sequence_wraps() {
        let mut emitter = WatchListEmitter::new();
        emitter.register(|_: &[u8]| {});
        emitter.sequence = u32::MAX;
        emitter.emit(&first_page());
        assert_eq!(emitter.next_sequence(), 0);
    }

    #[test]
    fn register_replaces_previous_sink() {
        let mut emitter: WatchListEmitter<fn(&[u8])> = WatchListEmitter::new();
        fn noop(_: &[u8]) {}
        assert!(emitter.register(noop).is_none());
        assert!(emitter.register(noop).is_some());
    }
}
