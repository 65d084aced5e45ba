//! Opaque encoder display payload.

use crate::error::IpcError;
use crate::packet::ENCODER_DATA_LEN;

/// Last display value the console reported for one watched channel.
///
/// The fader bank never interprets these bytes; it stores them on the
/// physical channel so the scribble strip and encoder ring can be redrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderData {
    bytes: [u8; ENCODER_DATA_LEN],
}

impl Default for EncoderData {
    fn default() -> Self {
        Self {
            bytes: [0; ENCODER_DATA_LEN],
        }
    }
}

impl EncoderData {
    /// Wrap an exact-size payload.
    pub const fn new(bytes: [u8; ENCODER_DATA_LEN]) -> Self {
        Self { bytes }
    }

    /// Copy a payload out of a received frame.
    ///
    /// # Errors
    /// [`IpcError::BufferTooSmall`] if `payload` is shorter than
    /// [`ENCODER_DATA_LEN`]. Longer slices are truncated.
    pub fn from_slice(payload: &[u8]) -> Result<Self, IpcError> {
        if payload.len() < ENCODER_DATA_LEN {
            return Err(IpcError::BufferTooSmall {
                needed: ENCODER_DATA_LEN,
                actual: payload.len(),
            });
        }
        let mut bytes = [0u8; ENCODER_DATA_LEN];
        bytes.copy_from_slice(&payload[..ENCODER_DATA_LEN]);
        Ok(Self { bytes })
    }

    /// Raw payload bytes.
    pub fn as_bytes(&self) -> &[u8; ENCODER_DATA_LEN] {
        &self.bytes
    }
}
