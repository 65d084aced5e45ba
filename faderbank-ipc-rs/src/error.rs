//! Error types for the IPC codec.

use core::fmt;

use crate::packet::PacketType;

/// Errors that can occur when encoding or decoding IPC frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcError {
    /// Buffer is shorter than the record being encoded or decoded.
    BufferTooSmall {
        /// Bytes the record needs.
        needed: usize,
        /// Bytes actually available.
        actual: usize,
    },

    /// Header carries a packet type with no known variant.
    UnknownPacketType(u32),

    /// Header carries a valid packet type, but not the one being decoded.
    UnexpectedPacketType(PacketType),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpcError::BufferTooSmall { needed, actual } => {
                write!(f, "buffer too small: need {} bytes, have {}", needed, actual)
            }
            IpcError::UnknownPacketType(raw) => write!(f, "unknown packet type {}", raw),
            IpcError::UnexpectedPacketType(ty) => write!(f, "unexpected packet type {:?}", ty),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IpcError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            IpcError::BufferTooSmall { needed, actual } => {
                defmt::write!(f, "Buffer too small (need {}, have {})", needed, actual)
            }
            IpcError::UnknownPacketType(raw) => defmt::write!(f, "Unknown packet type {}", raw),
            IpcError::UnexpectedPacketType(ty) => {
                defmt::write!(f, "Unexpected packet type {}", ty)
            }
        }
    }
}
