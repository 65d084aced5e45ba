use faderbank_ipc::EncoderData;

use super::address::{Address, AddressSlot};

/// One physical strip: where it points, whether it is pinned, and the last
/// display payload the console sent for it.
///
/// Strips are created once by the [`ChannelGroup`](super::ChannelGroup) and
/// only mutated through it; the `pinned` flag in particular only changes in
/// pin-config mode.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    index: usize,
    address: AddressSlot,
    pinned: bool,
    enabled: bool,
    encoder: Option<EncoderData>,
    /// Set when `address` changes; cleared by `take_changed()`.
    changed: bool,
}

impl Channel {
    /// Strip `index` starting out on page 1, channel `index + 1`.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            index,
            address: AddressSlot::Assigned(Address::new(1, index as u32 + 1)),
            pinned: false,
            enabled: true,
            encoder: None,
            changed: false,
        }
    }

    /// Physical position (0–7).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn address(&self) -> AddressSlot {
        self.address
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    /// `false` after [`ChannelGroup::disable_channel()`](super::ChannelGroup::disable_channel)
    /// until the next encoder payload arrives.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Last encoder payload received for this strip.
    pub fn encoder(&self) -> Option<&EncoderData> {
        self.encoder.as_ref()
    }

    /// Whether the address changed since the last `take_changed()`.
    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Set the address and mark the strip changed if it differs.
    ///
    /// Returns `true` on a real change. Writing the current value is a no-op,
    /// so rewriting a whole bank only flags the strips that moved.
    pub(crate) fn set_address(&mut self, address: AddressSlot) -> bool {
        if self.address == address {
            return false;
        }
        self.address = address;
        self.changed = true;
        true
    }

    pub(crate) fn set_pinned(&mut self, pinned: bool) {
        self.pinned = pinned;
    }

    pub(crate) fn update_encoder(&mut self, data: EncoderData) {
        self.encoder = Some(data);
        self.enabled = true;
    }

    pub(crate) fn disable(&mut self) {
        self.encoder = None;
        self.enabled = false;
    }

    pub(crate) fn take_changed(&mut self) -> bool {
        core::mem::take(&mut self.changed)
    }
}
