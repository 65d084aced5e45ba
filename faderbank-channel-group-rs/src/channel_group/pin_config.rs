//! Pin-config state machine.
//!
//! PIN toggles a one-shot edit mode. While it is active the surface
//! flashes the SELECT LED of every unpinned strip and the MUTE LED of every
//! pinned strip; the next press decides what happens:
//!
//! ```text
//!  Normal ──PIN──▶ PinConfig
//!                     │ SELECT(i), i unpinned  → pin i
//!                     │ MUTE(i),   i pinned    → unpin i
//!                     │ anything else          → nothing
//!                     ▼
//!                  Normal (LEDs cleared)
//! ```
//!
//! A pin edit keeps the page, rebuilds the windows, returns to the first
//! window and emits a fresh watch-list. The edited strip's own address is
//! never changed by pinning.

use crate::surface::{Button, ControlSurface, LedState};
use crate::watch_list::WatchListSink;

use super::error::ChannelGroupError;
use super::group::ChannelGroup;
use super::PHYSICAL_CHANNEL_COUNT;

/// Whether the next press edits the pinned set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    #[default]
    Normal,
    PinConfig,
}

impl<S: ControlSurface, W: WatchListSink> ChannelGroup<S, W> {
    /// Feed one button press to the pin state machine.
    ///
    /// In [`PinMode::Normal`] only PIN does anything. In
    /// [`PinMode::PinConfig`] every press leaves the mode, whether or not
    /// it edited a pin.
    ///
    /// # Errors
    /// [`ChannelGroupError::UnassignedChannel`] when SELECT targets a strip
    /// with nothing to pin. The mode is still left.
    pub fn update_pinned_channels(&mut self, button: Button) -> Result<(), ChannelGroupError> {
        match self.pin_mode {
            PinMode::Normal => {
                if button == Button::PIN {
                    self.enter_pin_config();
                }
                Ok(())
            }
            PinMode::PinConfig => {
                let result = if let Some(index) = button
                    .select_channel()
                    .filter(|&i| !self.channels[i].is_pinned())
                {
                    self.pin_channel(index)
                } else if let Some(index) = button
                    .mute_channel()
                    .filter(|&i| self.channels[i].is_pinned())
                {
                    self.unpin_channel(index)
                } else {
                    Ok(())
                };

                self.exit_pin_config();
                result
            }
        }
    }

    fn enter_pin_config(&mut self) {
        self.pin_mode = PinMode::PinConfig;
        self.surface.set_button_led(Button::PIN, LedState::On);

        for channel in self.channels.iter() {
            let button = if channel.is_pinned() {
                Button::mute(channel.index())
            } else {
                Button::select(channel.index())
            };
            if let Some(button) = button {
                self.surface.set_button_led(button, LedState::Flashing);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("pin config: enter");
    }

    fn exit_pin_config(&mut self) {
        self.pin_mode = PinMode::Normal;
        self.surface.set_button_led(Button::PIN, LedState::Off);

        for index in 0..PHYSICAL_CHANNEL_COUNT {
            for button in [Button::select(index), Button::mute(index)].into_iter().flatten() {
                self.surface.set_button_led(button, LedState::Off);
            }
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("pin config: exit");
    }

    /// Freeze strip `index` on its current address.
    fn pin_channel(&mut self, index: usize) -> Result<(), ChannelGroupError> {
        let address = self.channels[index]
            .address()
            .address()
            .ok_or(ChannelGroupError::UnassignedChannel)?;

        let mut pinned = self.pinned_set()?;
        pinned.insert(address)?;

        self.channels[index].set_pinned(true);
        self.relayout(&pinned);

        #[cfg(feature = "defmt")]
        defmt::info!("pinned strip {} at {}", index, address);
        Ok(())
    }

    /// Release strip `index` back into the windows.
    fn unpin_channel(&mut self, index: usize) -> Result<(), ChannelGroupError> {
        let pinned = self.pinned_set_except(Some(index))?;

        self.channels[index].set_pinned(false);
        self.relayout(&pinned);

        #[cfg(feature = "defmt")]
        defmt::info!("unpinned strip {}", index);
        Ok(())
    }
}
