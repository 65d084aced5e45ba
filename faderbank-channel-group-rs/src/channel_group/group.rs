use faderbank_ipc::EncoderData;

use crate::surface::{Button, ControlSurface, SurfaceEvent};
use crate::watch_list::{WatchListEmitter, WatchListSink};

use super::address::{Address, AddressSlot};
use super::channel::Channel;
use super::config::GroupConfig;
use super::error::ChannelGroupError;
use super::pin_config::PinMode;
use super::window::{partition, PinnedSet, Windows};
use super::{FADER_FULL_SCALE, PHYSICAL_CHANNEL_COUNT};

/// A strip whose address changed since the last
/// [`ChannelGroup::take_address_changes()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressChange {
    /// Physical strip (0–7).
    pub index: usize,
    /// Address the strip now shows.
    pub address: AddressSlot,
}

/// The 8 physical strips and everything that decides what they show.
///
/// `S` is the hardware surface, `W` the watch-list transport. Both are
/// owned by the group; nothing here is global.
///
/// # Examples
///
/// ```
/// use faderbank::channel_group::{Address, AddressSlot, ChannelGroup};
/// use faderbank::surface::{Button, NullSurface};
///
/// let mut frames = 0;
/// let mut group = ChannelGroup::new(NullSurface);
/// group.register_watch_list_sink(|_frame: &[u8]| frames += 1);
///
/// group.handle_button_event(Button::PAGE_INC.id(), true).unwrap();
///
/// assert_eq!(group.page(), 2);
/// assert_eq!(
///     group.current_addresses()[0],
///     AddressSlot::Assigned(Address::new(2, 1))
/// );
/// drop(group);
/// assert_eq!(frames, 1);
/// ```
#[derive(Debug)]
pub struct ChannelGroup<S, W> {
    pub(super) surface: S,
    pub(super) emitter: WatchListEmitter<W>,
    pub(super) config: GroupConfig,
    pub(super) channels: [Channel; PHYSICAL_CHANNEL_COUNT],
    pub(super) page: u32,
    pub(super) windows: Windows,
    pub(super) window_offset: usize,
    pub(super) pin_mode: PinMode,
    /// Last level written to the master fader; `None` until the first write.
    pub(super) master_fader: Option<u16>,
}

impl<S: ControlSurface, W: WatchListSink> ChannelGroup<S, W> {
    /// Group on page 1, first window, nothing pinned, default config.
    pub fn new(surface: S) -> Self {
        Self::build(surface, GroupConfig::default())
    }

    /// Like [`new()`](Self::new) with explicit tunables.
    ///
    /// # Errors
    /// [`ChannelGroupError::InvalidPage`] if `config.max_page` is 0.
    pub fn with_config(surface: S, config: GroupConfig) -> Result<Self, ChannelGroupError> {
        config.validate()?;
        Ok(Self::build(surface, config))
    }

    fn build(surface: S, config: GroupConfig) -> Self {
        Self {
            surface,
            emitter: WatchListEmitter::new(),
            config,
            channels: core::array::from_fn(Channel::new),
            page: 1,
            windows: partition(1, &PinnedSet::new()),
            window_offset: 0,
            pin_mode: PinMode::Normal,
            master_fader: None,
        }
    }

    /// Install the watch-list transport. Call before feeding events.
    pub fn register_watch_list_sink(&mut self, sink: W) {
        self.emitter.register(sink);
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Index of the window the unpinned strips show.
    pub fn window_offset(&self) -> usize {
        self.window_offset
    }

    /// Windows of the current page.
    pub fn windows(&self) -> &Windows {
        &self.windows
    }

    pub fn pin_mode(&self) -> PinMode {
        self.pin_mode
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    /// # Errors
    /// [`ChannelGroupError::InvalidChannelIndex`] if `index` ≥ 8.
    pub fn channel(&self, index: usize) -> Result<&Channel, ChannelGroupError> {
        self.channels
            .get(index)
            .ok_or(ChannelGroupError::InvalidChannelIndex)
    }

    pub fn channels(&self) -> &[Channel; PHYSICAL_CHANNEL_COUNT] {
        &self.channels
    }

    /// Address of every strip, in index order.
    pub fn current_addresses(&self) -> [AddressSlot; PHYSICAL_CHANNEL_COUNT] {
        core::array::from_fn(|i| self.channels[i].address())
    }

    pub fn master_fader_level(&self) -> Option<u16> {
        self.master_fader
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ── Event entry points ───────────────────────────────────────────

    /// Route one button edge from the surface.
    ///
    /// Releases are ignored. While pin-config mode is active, or when PIN
    /// is pressed, the press goes to the pin state machine. Otherwise the
    /// page and scroll buttons move the strips and everything else is a
    /// no-op.
    pub fn handle_button_event(&mut self, id: u8, pressed: bool) -> Result<(), ChannelGroupError> {
        if !pressed {
            return Ok(());
        }

        let button = Button::new(id);
        if self.pin_mode == PinMode::PinConfig || button == Button::PIN {
            return self.update_pinned_channels(button);
        }
        if button.is_address_changing() {
            return self.handle_address_change(button);
        }
        Ok(())
    }

    /// Dispatch one of the page/scroll buttons.
    ///
    /// # Errors
    /// [`ChannelGroupError::NotAnAddressButton`] for any other button.
    pub fn handle_address_change(&mut self, button: Button) -> Result<(), ChannelGroupError> {
        match button {
            Button::PAGE_DEC => self.change_page(-1),
            Button::PAGE_INC => self.change_page(1),
            Button::SCROLL_LEFT => self.scroll_page(-1),
            Button::SCROLL_RIGHT => self.scroll_page(1),
            _ => Err(ChannelGroupError::NotAnAddressButton),
        }
    }

    /// Apply one inbound event from the surface or the console.
    pub fn apply_event(&mut self, event: SurfaceEvent) -> Result<(), ChannelGroupError> {
        match event {
            SurfaceEvent::Button { id, pressed } => self.handle_button_event(id, pressed),
            SurfaceEvent::Encoder { index, data } => self.update_encoder(data, index),
            SurfaceEvent::MasterFader(value) => self.update_master_fader(value),
        }
    }

    // ── Paging and scrolling ─────────────────────────────────────────

    /// Move one page down (`-1`) or up (`+1`).
    ///
    /// At either end of `1..=max_page` this is a no-op and nothing is
    /// emitted. Otherwise the windows are rebuilt for the new page, the
    /// unpinned strips jump to its first window and one watch-list frame
    /// goes out.
    ///
    /// # Errors
    /// [`ChannelGroupError::InvalidOffset`] if `offset` is not ±1.
    pub fn change_page(&mut self, offset: i32) -> Result<(), ChannelGroupError> {
        check_offset(offset)?;

        let target = if offset < 0 {
            self.page.checked_sub(1).filter(|&p| p >= 1)
        } else {
            self.page
                .checked_add(1)
                .filter(|&p| p <= self.config.max_page)
        };
        let Some(target) = target else {
            return Ok(());
        };

        let pinned = self.pinned_set()?;
        self.set_page(target);
        self.relayout(&pinned);
        Ok(())
    }

    /// Move the unpinned strips one window left (`-1`) or right (`+1`).
    ///
    /// Pinned strips are never touched. On a short final window the
    /// remaining unpinned strips become unassigned.
    ///
    /// # Errors
    /// [`ChannelGroupError::InvalidOffset`] if `offset` is not ±1.
    pub fn scroll_page(&mut self, offset: i32) -> Result<(), ChannelGroupError> {
        check_offset(offset)?;

        let last = self.windows.len().saturating_sub(1);
        let target = if offset < 0 {
            self.window_offset.checked_sub(1)
        } else {
            Some(self.window_offset + 1).filter(|&o| o <= last)
        };
        let Some(target) = target else {
            return Ok(());
        };

        #[cfg(feature = "defmt")]
        defmt::debug!("scroll: window {} -> {}", self.window_offset, target);

        self.window_offset = target;
        self.assign_current_window();
        self.emit_watch_list();
        Ok(())
    }

    // ── Console-side updates ─────────────────────────────────────────

    /// Drive the master fader to `value` percent (`0..=100`).
    ///
    /// The level is scaled to `0..=FADER_FULL_SCALE` and truncated. It is
    /// only written when it differs from the last level sent.
    ///
    /// # Errors
    /// [`ChannelGroupError::InvalidFaderValue`] for NaN or out-of-range input.
    pub fn update_master_fader(&mut self, value: f32) -> Result<(), ChannelGroupError> {
        if !(0.0..=100.0).contains(&value) {
            return Err(ChannelGroupError::InvalidFaderValue);
        }

        let level = (f32::from(FADER_FULL_SCALE) * (value / 100.0)) as u16;
        if self.master_fader == Some(level) {
            return Ok(());
        }

        self.master_fader = Some(level);
        self.surface
            .set_fader_level(self.config.master_fader_index, level);
        Ok(())
    }

    /// Store the console's display payload for strip `index`.
    ///
    /// Re-enables a strip parked by [`disable_channel()`](Self::disable_channel).
    pub fn update_encoder(&mut self, data: EncoderData, index: usize) -> Result<(), ChannelGroupError> {
        self.channels
            .get_mut(index)
            .ok_or(ChannelGroupError::InvalidChannelIndex)?
            .update_encoder(data);
        Ok(())
    }

    /// Blank strip `index`: drop its payload and park its fader at 0.
    pub fn disable_channel(&mut self, index: usize) -> Result<(), ChannelGroupError> {
        self.channels
            .get_mut(index)
            .ok_or(ChannelGroupError::InvalidChannelIndex)?
            .disable();
        self.surface.set_fader_level(index as u8, 0);
        Ok(())
    }

    /// Collect strips whose address changed, then clear their flags.
    ///
    /// Returns a fixed-size array and a count of valid entries; iterate
    /// `&result.0[..result.1]`.
    pub fn take_address_changes(
        &mut self,
    ) -> ([Option<AddressChange>; PHYSICAL_CHANNEL_COUNT], usize) {
        let mut result = [None; PHYSICAL_CHANNEL_COUNT];
        let mut count = 0;

        for channel in self.channels.iter_mut() {
            if channel.take_changed() {
                result[count] = Some(AddressChange {
                    index: channel.index(),
                    address: channel.address(),
                });
                count += 1;
            }
        }

        (result, count)
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Set the page and update the assignment display on a real change.
    fn set_page(&mut self, page: u32) {
        if self.page == page {
            return;
        }
        self.page = page;
        self.surface.set_assignment(page);

        #[cfg(feature = "defmt")]
        defmt::info!("page -> {}", page);
    }

    /// Addresses of all pinned strips.
    pub(super) fn pinned_set(&self) -> Result<PinnedSet, ChannelGroupError> {
        self.pinned_set_except(None)
    }

    /// Addresses of all pinned strips other than `skip`.
    pub(super) fn pinned_set_except(
        &self,
        skip: Option<usize>,
    ) -> Result<PinnedSet, ChannelGroupError> {
        let mut set = PinnedSet::new();
        for channel in self.channels.iter() {
            if !channel.is_pinned() || Some(channel.index()) == skip {
                continue;
            }
            let address = channel
                .address()
                .address()
                .ok_or(ChannelGroupError::UnassignedChannel)?;
            set.insert(address)?;
        }
        Ok(set)
    }

    /// Rebuild the windows for the current page and show the first one.
    pub(super) fn relayout(&mut self, pinned: &PinnedSet) {
        self.windows = partition(self.page, pinned);
        self.window_offset = 0;
        self.assign_current_window();
        self.emit_watch_list();
    }

    /// Point the unpinned strips, in index order, at the current window.
    fn assign_current_window(&mut self) {
        let page = self.page;
        let mut entries = self
            .windows
            .get(self.window_offset)
            .into_iter()
            .flatten()
            .copied();

        for channel in self.channels.iter_mut().filter(|c| !c.is_pinned()) {
            let slot = match entries.next() {
                Some(number) => AddressSlot::Assigned(Address::new(page, number)),
                None => AddressSlot::Unassigned { page },
            };
            channel.set_address(slot);
        }
    }

    fn emit_watch_list(&mut self) {
        let slots = self.current_addresses();
        self.emitter.emit(&slots);
    }
}

fn check_offset(offset: i32) -> Result<(), ChannelGroupError> {
    if offset == 1 || offset == -1 {
        Ok(())
    } else {
        Err(ChannelGroupError::InvalidOffset)
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────────
