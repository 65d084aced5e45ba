use core::fmt;

/// Errors returned when a caller breaks the channel group's contract.
///
/// None of these leave the group half-updated: every operation validates
/// its input before touching any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelGroupError {
    /// Page or scroll offset was not exactly -1 or +1.
    InvalidOffset,
    /// Physical channel index is out of bounds (must be < PHYSICAL_CHANNEL_COUNT).
    InvalidChannelIndex,
    /// Master fader input was NaN or outside `[0, 100]`.
    InvalidFaderValue,
    /// Page is outside `[1, max_page]`.
    InvalidPage,
    /// Two pinned strips would share one address.
    DuplicatePinnedAddress,
    /// More pins than physical strips.
    TooManyPins,
    /// Tried to pin a strip that currently maps to no address.
    UnassignedChannel,
    /// Button is not one of the four page/scroll buttons.
    NotAnAddressButton,
}

impl fmt::Display for ChannelGroupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            ChannelGroupError::InvalidOffset => "offset must be -1 or +1",
            ChannelGroupError::InvalidChannelIndex => "physical channel index out of range",
            ChannelGroupError::InvalidFaderValue => "fader value must be within 0..=100",
            ChannelGroupError::InvalidPage => "page out of range",
            ChannelGroupError::DuplicatePinnedAddress => "pinned channels must have distinct addresses",
            ChannelGroupError::TooManyPins => "more pins than physical channels",
            ChannelGroupError::UnassignedChannel => "channel has no address to pin",
            ChannelGroupError::NotAnAddressButton => "button does not change addresses",
        };
        f.write_str(msg)
    }
}
