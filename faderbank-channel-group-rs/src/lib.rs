//! Paging, scrolling and pinning engine for an 8-strip fader bank.
//!
//! The surface has 8 physical fader/encoder strips; the console behind it
//! exposes pages of 90 channels. [`ChannelGroup`] decides which console
//! channel each strip shows and tells the console, through a watch-list
//! frame, which channels to report values for.
//!
//! # Quick Start
//!
//! ```
//! use faderbank::channel_group::ChannelGroup;
//! use faderbank::surface::{Button, NullSurface, SurfaceEvent};
//! use faderbank_ipc::WatchListRequest;
//!
//! let mut last_sequence = None;
//! let mut group = ChannelGroup::new(NullSurface);
//! group.register_watch_list_sink(|frame: &[u8]| {
//!     last_sequence = WatchListRequest::decode(frame).ok().map(|r| r.sequence);
//! });
//!
//! group
//!     .apply_event(SurfaceEvent::Button { id: Button::SCROLL_RIGHT.id(), pressed: true })
//!     .unwrap();
//! assert_eq!(group.window_offset(), 1);
//! drop(group);
//! assert_eq!(last_sequence, Some(0));
//! ```
//!
//! In firmware, wrap the group in a mutex and drive it from
//! [`surface_task::surface_event_task`] (feature `task`):
//!
//! ```ignore
//! #[embassy_executor::task]
//! async fn faders(
//!     events: &'static Channel<CriticalSectionRawMutex, SurfaceEvent, 16>,
//!     group: &'static Mutex<CriticalSectionRawMutex, ChannelGroup<XTouch, UdpSink>>,
//! ) {
//!     surface_event_task(events, group).await;
//! }
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via `defmt` and `defmt::Format`
//!   on public types.
//! - **`task`**: async event loop built on `embassy-sync`.

#![cfg_attr(not(test), no_std)]

pub mod channel_group;
pub mod surface;
#[cfg(feature = "task")]
pub mod surface_task;
pub mod watch_list;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use channel_group::{Address, AddressSlot, ChannelGroup, ChannelGroupError, GroupConfig};
pub use surface::{Button, ControlSurface, LedState, SurfaceEvent};
#[cfg(feature = "task")]
pub use surface_task::surface_event_task;
pub use watch_list::WatchListSink;
