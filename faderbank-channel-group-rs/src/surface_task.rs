//! Async event loop around a shared [`ChannelGroup`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;

use crate::channel_group::ChannelGroup;
use crate::surface::{ControlSurface, SurfaceEvent};
use crate::watch_list::WatchListSink;

/// Apply surface and console events to `group` as they arrive.
///
/// This is a regular `async fn`, not an Embassy `#[task]`; wrap it in a
/// concrete task since tasks cannot be generic.
///
/// The mutex is held only while one event is dispatched, so other tasks
/// (a scribble-strip renderer polling
/// [`take_address_changes()`](ChannelGroup::take_address_changes), say)
/// can interleave between events. Rejected events are logged and dropped.
pub async fn surface_event_task<M, S, W, const N: usize>(
    events: &Channel<M, SurfaceEvent, N>,
    group: &Mutex<M, ChannelGroup<S, W>>,
) where
    M: RawMutex,
    S: ControlSurface,
    W: WatchListSink,
{
    #[cfg(feature = "defmt")]
    defmt::info!("surface event task started");

    loop {
        let event = events.receive().await;

        let result = {
            let mut group = group.lock().await;
            group.apply_event(event)
        }; // ← mutex released

        if let Err(_e) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("surface event rejected: {}", _e);
        }
    }
}
