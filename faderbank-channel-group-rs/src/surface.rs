//! Hardware surface capability and button map.
//!
//! The channel group never talks to the hardware directly. It is handed a
//! [`ControlSurface`] at construction and calls it for LEDs, fader motors
//! and the page display. Button ids follow the surface's Mackie-style note
//! layout: per-strip button rows occupy blocks of eight, followed by the
//! global buttons.

use faderbank_ipc::EncoderData;

use crate::channel_group::PHYSICAL_CHANNEL_COUNT;

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------

/// Raw surface button id.
///
/// Any `u8` is a valid `Button`; ids without a named constant simply never
/// match a page, scroll, pin, SELECT or MUTE role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Button(u8);

/// Number of button ids the surface reports (ids `0..BUTTON_COUNT`).
pub const BUTTON_COUNT: u8 = 102;

// Per-strip rows: base id + strip index.
const REC_BASE: u8 = 0;
const SOLO_BASE: u8 = 8;
const MUTE_BASE: u8 = 16;
const SELECT_BASE: u8 = 24;
const VPOT_BASE: u8 = 32;

impl Button {
    pub const REC_0: Button = Button(REC_BASE);
    pub const SOLO_0: Button = Button(SOLO_BASE);
    pub const MUTE_0: Button = Button(MUTE_BASE);
    pub const MUTE_7: Button = Button(MUTE_BASE + 7);
    pub const SELECT_0: Button = Button(SELECT_BASE);
    pub const SELECT_7: Button = Button(SELECT_BASE + 7);
    pub const VPOT_0: Button = Button(VPOT_BASE);

    // Encoder assign
    pub const TRACK: Button = Button(40);
    pub const SEND: Button = Button(41);
    pub const PAN: Button = Button(42);
    pub const PLUGIN: Button = Button(43);
    pub const EQ: Button = Button(44);
    pub const INST: Button = Button(45);

    // Fader bank navigation
    pub const BANK_LEFT: Button = Button(46);
    pub const BANK_RIGHT: Button = Button(47);
    pub const CHANNEL_LEFT: Button = Button(48);
    pub const CHANNEL_RIGHT: Button = Button(49);
    pub const FLIP: Button = Button(50);
    pub const GLOBAL_VIEW: Button = Button(51);

    pub const NAME_VALUE: Button = Button(52);
    pub const SMPTE_BEATS: Button = Button(53);
    pub const F1: Button = Button(54);
    pub const F8: Button = Button(61);

    pub const SHIFT: Button = Button(70);
    pub const OPTION: Button = Button(71);
    pub const CONTROL: Button = Button(72);
    pub const ALT: Button = Button(73);

    // Transport
    pub const REWIND: Button = Button(91);
    pub const FAST_FWD: Button = Button(92);
    pub const STOP: Button = Button(93);
    pub const PLAY: Button = Button(94);
    pub const RECORD: Button = Button(95);

    pub const UP: Button = Button(96);
    pub const DOWN: Button = Button(97);
    pub const LEFT: Button = Button(98);
    pub const RIGHT: Button = Button(99);
    pub const ZOOM: Button = Button(100);
    pub const SCRUB: Button = Button(101);

    // Roles on the console layout
    pub const PAGE_DEC: Button = Button::BANK_LEFT;
    pub const PAGE_INC: Button = Button::BANK_RIGHT;
    pub const SCROLL_LEFT: Button = Button::CHANNEL_LEFT;
    pub const SCROLL_RIGHT: Button = Button::CHANNEL_RIGHT;
    pub const PIN: Button = Button::FLIP;

    pub const fn new(id: u8) -> Self {
        Button(id)
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    /// Every id the surface reports, in order.
    pub fn all() -> impl Iterator<Item = Button> {
        (0..BUTTON_COUNT).map(Button)
    }

    /// SELECT button of strip `channel`, if the strip exists.
    pub fn select(channel: usize) -> Option<Button> {
        strip_button(SELECT_BASE, channel)
    }

    /// MUTE button of strip `channel`, if the strip exists.
    pub fn mute(channel: usize) -> Option<Button> {
        strip_button(MUTE_BASE, channel)
    }

    /// Strip index if this is a SELECT button.
    pub fn select_channel(self) -> Option<usize> {
        strip_index(SELECT_BASE, self.0)
    }

    /// Strip index if this is a MUTE button.
    pub fn mute_channel(self) -> Option<usize> {
        strip_index(MUTE_BASE, self.0)
    }

    /// `true` for the page and scroll buttons.
    pub fn is_address_changing(self) -> bool {
        matches!(
            self,
            Button::PAGE_DEC | Button::PAGE_INC | Button::SCROLL_LEFT | Button::SCROLL_RIGHT
        )
    }
}

fn strip_button(base: u8, channel: usize) -> Option<Button> {
    if channel < PHYSICAL_CHANNEL_COUNT {
        Some(Button(base + channel as u8))
    } else {
        None
    }
}

fn strip_index(base: u8, id: u8) -> Option<usize> {
    let offset = id.checked_sub(base)? as usize;
    (offset < PHYSICAL_CHANNEL_COUNT).then_some(offset)
}

// ---------------------------------------------------------------------------
// Surface capability
// ---------------------------------------------------------------------------

/// Button LED state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    Off,
    On,
    Flashing,
}

/// Outbound hardware effects the channel group needs.
///
/// Implementations must return promptly; they run inline with button
/// handling.
pub trait ControlSurface {
    /// Set one button's LED.
    fn set_button_led(&mut self, button: Button, state: LedState);

    /// Drive motor fader `fader` to `level` (`0..=FADER_FULL_SCALE`).
    fn set_fader_level(&mut self, fader: u8, level: u16);

    /// Show `page` on the assignment display.
    fn set_assignment(&mut self, page: u32);
}

impl<T: ControlSurface + ?Sized> ControlSurface for &mut T {
    fn set_button_led(&mut self, button: Button, state: LedState) {
        (**self).set_button_led(button, state);
    }

    fn set_fader_level(&mut self, fader: u8, level: u16) {
        (**self).set_fader_level(fader, level);
    }

    fn set_assignment(&mut self, page: u32) {
        (**self).set_assignment(page);
    }
}

/// Surface that ignores every effect. Useful when running headless.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl ControlSurface for NullSurface {
    fn set_button_led(&mut self, _button: Button, _state: LedState) {}
    fn set_fader_level(&mut self, _fader: u8, _level: u16) {}
    fn set_assignment(&mut self, _page: u32) {}
}

// ---------------------------------------------------------------------------
// Inbound events
// ---------------------------------------------------------------------------

/// Everything the hardware layer and the console transport feed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// Button edge from the surface.
    Button { id: u8, pressed: bool },
    /// Display payload from the console for strip `index`.
    Encoder { index: usize, data: EncoderData },
    /// Master level from the console, `0..=100`.
    MasterFader(f32),
}
