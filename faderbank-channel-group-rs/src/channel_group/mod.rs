//! Channel windowing, paging and pinning for the 8 physical strips.
//!
//! This module provides the [`ChannelGroup`] state machine that decides,
//! after every button press, which console channel each physical strip
//! represents. It is the only owner of the addressing state; the hardware
//! surface and the console transport only see its side effects.
//!
//! # Architecture
//!
//! The console exposes pages of up to [`CHANNELS_PER_PAGE`] channels. The
//! unpinned strips look at one **window** of the current page at a time:
//!
//! ```text
//! Page 1, no pins (width 8):   [1..8] [9..16] ... [81..88] [89 90]
//! Page 1, strip 0 pinned at (1,1) (width 7):
//!                              [2..8] [9..15] ... [86..90]
//! ```
//!
//! - **Paging** moves to the next/previous page and shows its first window.
//! - **Scrolling** moves to the next/previous window on the current page.
//! - **Pinning** freezes one strip on its current address. The pinned
//!   address is removed from the windows of its page and the window width
//!   shrinks by one.
//!
//! # Change tracking
//!
//! Address writes are batched: a page change rewrites every unpinned strip
//! but produces exactly one watch-list frame. Each strip also carries a
//! `changed` flag, consumed through [`ChannelGroup::take_address_changes()`]
//! by whatever redraws the scribble strips.
//!
//! # `no_std` Compatibility
//!
//! No heap allocation. Windows live in [`heapless::Vec`]s sized by
//! [`PHYSICAL_CHANNEL_COUNT`] and [`CHANNELS_PER_PAGE`].

mod address;
mod channel;
mod config;
mod error;
mod group;
mod pin_config;
mod window;

#[cfg(test)]
mod mock;

pub use address::{Address, AddressSlot};
pub use channel::Channel;
pub use config::{GroupConfig, DEFAULT_MAX_PAGE, MASTER_FADER_INDEX};
pub use error::ChannelGroupError;
pub use group::{AddressChange, ChannelGroup};
pub use pin_config::PinMode;
pub use window::{partition, PinnedSet, Window, Windows};

/// Number of physical fader/encoder strips on the surface.
pub const PHYSICAL_CHANNEL_COUNT: usize = 8;

/// Number of addressable channels on one console page (numbered from 1).
pub const CHANNELS_PER_PAGE: usize = 90;

/// Full-scale level of a motor fader (14-bit range, as accepted by the surface).
pub const FADER_FULL_SCALE: u16 = 16380;

// The watch-list frame carries exactly one entry per strip.
const _: () = assert!(PHYSICAL_CHANNEL_COUNT == faderbank_ipc::ENTRY_COUNT);
