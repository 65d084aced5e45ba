//! Typed watch-list request and its fixed little-endian encoding.
//!
//! [`WatchListRequest`] tells the console which logical channel each
//! physical strip currently shows. The record is encoded field by field, in
//! declaration order, so the frame layout is pinned down by
//! [`packet`](crate::packet) rather than by the compiler's struct layout.

use crate::error::IpcError;
use crate::packet::{
    get_u32, put_u32, PacketType, ENTRY_COUNT, ENTRY_LEN, HEADER_LEN, UNASSIGNED_CHANNEL,
    WATCH_LIST_FRAME_LEN,
};

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Header carried by every IPC frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IpcHeader {
    /// Frame kind.
    pub packet_type: PacketType,
    /// Sender-side sequence number.
    pub sequence: u32,
}

impl IpcHeader {
    /// Write the header into the first [`HEADER_LEN`] bytes of `buf`.
    ///
    /// # Errors
    /// [`IpcError::BufferTooSmall`] if `buf` is shorter than the header.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, IpcError> {
        ensure_len(buf.len(), HEADER_LEN)?;
        put_u32(buf, 0, self.packet_type.as_u32());
        put_u32(buf, 4, self.sequence);
        Ok(HEADER_LEN)
    }

    /// Parse the header from the start of `buf`.
    ///
    /// # Errors
    /// * [`IpcError::BufferTooSmall`] if `buf` is shorter than the header
    /// * [`IpcError::UnknownPacketType`] if the type word is not recognised
    pub fn decode(buf: &[u8]) -> Result<Self, IpcError> {
        ensure_len(buf.len(), HEADER_LEN)?;
        Ok(Self {
            packet_type: PacketType::from_u32(get_u32(buf, 0))?,
            sequence: get_u32(buf, 4),
        })
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One watched logical channel, as seen on the wire.
///
/// Field order matches the frame: channel first, then page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderRequest {
    /// Logical channel number on `page`, or [`UNASSIGNED_CHANNEL`].
    pub channel: u32,
    /// Console page.
    pub page: u32,
}

impl EncoderRequest {
    /// Entry for a real logical channel.
    pub const fn new(channel: u32, page: u32) -> Self {
        Self { channel, page }
    }

    /// Entry for a physical channel that currently maps to nothing.
    pub const fn unassigned(page: u32) -> Self {
        Self {
            channel: UNASSIGNED_CHANNEL,
            page,
        }
    }

    /// Returns `true` if this entry carries the unassigned marker.
    pub const fn is_unassigned(&self) -> bool {
        self.channel == UNASSIGNED_CHANNEL
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// `REQ_ENCODERS` frame: the full set of watched channels, one entry per
/// physical channel in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchListRequest {
    /// Sequence number written into the header.
    pub sequence: u32,
    /// Watched channels indexed by physical channel (0–7).
    pub entries: [EncoderRequest; ENTRY_COUNT],
}

impl WatchListRequest {
    /// Build a request from its entries.
    pub const fn new(sequence: u32, entries: [EncoderRequest; ENTRY_COUNT]) -> Self {
        Self { sequence, entries }
    }

    /// Header written in front of the entries.
    pub const fn header(&self) -> IpcHeader {
        IpcHeader {
            packet_type: PacketType::ReqEncoders,
            sequence: self.sequence,
        }
    }

    /// Encode into `buf`, returning the number of bytes written.
    ///
    /// # Errors
    /// [`IpcError::BufferTooSmall`] if `buf` is shorter than
    /// [`WATCH_LIST_FRAME_LEN`]. Nothing is written in that case.
    pub fn encode(&self, buf: &mut [u8]) -> Result<usize, IpcError> {
        ensure_len(buf.len(), WATCH_LIST_FRAME_LEN)?;

        let mut offset = self.header().encode(buf)?;
        for entry in &self.entries {
            put_u32(buf, offset, entry.channel);
            put_u32(buf, offset + 4, entry.page);
            offset += ENTRY_LEN;
        }

        Ok(offset)
    }

    /// Encode into a fresh fixed-size frame.
    pub fn to_bytes(&self) -> [u8; WATCH_LIST_FRAME_LEN] {
        let mut frame = [0u8; WATCH_LIST_FRAME_LEN];
        // The frame is exactly WATCH_LIST_FRAME_LEN long, so this cannot fail.
        let _ = self.encode(&mut frame);
        frame
    }

    /// Decode a request from the start of `buf`. Trailing bytes are ignored.
    ///
    /// # Errors
    /// * [`IpcError::BufferTooSmall`] if `buf` is shorter than a full frame
    /// * [`IpcError::UnknownPacketType`] if the type word is not recognised
    /// * [`IpcError::UnexpectedPacketType`] if the frame is not `REQ_ENCODERS`
    pub fn decode(buf: &[u8]) -> Result<Self, IpcError> {
        ensure_len(buf.len(), WATCH_LIST_FRAME_LEN)?;

        let header = IpcHeader::decode(buf)?;
        if header.packet_type != PacketType::ReqEncoders {
            return Err(IpcError::UnexpectedPacketType(header.packet_type));
        }

        let entries = core::array::from_fn(|i| {
            let offset = HEADER_LEN + i * ENTRY_LEN;
            EncoderRequest::new(get_u32(buf, offset), get_u32(buf, offset + 4))
        });

        Ok(Self {
            sequence: header.sequence,
            entries,
        })
    }
}

fn ensure_len(actual: usize, needed: usize) -> Result<(), IpcError> {
    if actual < needed {
        return Err(IpcError::BufferTooSmall { needed, actual });
    }
    Ok(())
}
