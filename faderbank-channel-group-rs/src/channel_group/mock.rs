//! Test doubles for the surface and the watch-list transport.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::vec::Vec;

use faderbank_ipc::WatchListRequest;

use crate::surface::{Button, ControlSurface, LedState};
use crate::watch_list::WatchListSink;

/// Records every effect the group asks of the hardware.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub leds: BTreeMap<Button, LedState>,
    pub faders: Vec<(u8, u16)>,
    pub assignments: Vec<u32>,
}

impl RecordingSurface {
    /// Current LED state; buttons never written read as `Off`.
    pub fn led(&self, button: Button) -> LedState {
        self.leds.get(&button).copied().unwrap_or(LedState::Off)
    }

    /// Buttons whose LED is currently not `Off`.
    pub fn lit(&self) -> Vec<(Button, LedState)> {
        self.leds
            .iter()
            .filter(|(_, state)| **state != LedState::Off)
            .map(|(b, s)| (*b, *s))
            .collect()
    }
}

impl ControlSurface for RecordingSurface {
    fn set_button_led(&mut self, button: Button, state: LedState) {
        self.leds.insert(button, state);
    }

    fn set_fader_level(&mut self, fader: u8, level: u16) {
        self.faders.push((fader, level));
    }

    fn set_assignment(&mut self, page: u32) {
        self.assignments.push(page);
    }
}

/// Sink that decodes and keeps every frame; clones share one log.
#[derive(Debug, Clone, Default)]
pub struct FrameLog {
    frames: Rc<RefCell<Vec<WatchListRequest>>>,
}

impl FrameLog {
    pub fn len(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn last(&self) -> Option<WatchListRequest> {
        self.frames.borrow().last().copied()
    }

    pub fn all(&self) -> Vec<WatchListRequest> {
        self.frames.borrow().clone()
    }
}

impl WatchListSink for FrameLog {
    fn send(&mut self, frame: &[u8]) {
        let request = WatchListRequest::decode(frame).expect("group emitted a malformed frame");
        self.frames.borrow_mut().push(request);
    }
}
