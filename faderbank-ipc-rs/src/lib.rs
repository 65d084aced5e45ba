//! Wire records exchanged between the fader bank and the lighting console.
//!
//! The console only reports live encoder values for the logical channels it
//! has been asked to watch. This crate defines that request, the
//! [`WatchListRequest`], together with the header every IPC frame carries and
//! the opaque [`EncoderData`] payload the console sends back.
//!
//! # Architecture
//!
//! - **`packet`**: Frame layout constants and the [`PacketType`] tag.
//! - **[`IpcHeader`] / [`WatchListRequest`]**: Typed records with explicit
//!   little-endian encoders, so the byte layout never depends on struct
//!   padding or host endianness.
//! - **[`EncoderData`]**: Fixed-size display payload for one channel.
//!
//! # Quick start
//!
//! ```
//! use faderbank_ipc::{EncoderRequest, WatchListRequest, WATCH_LIST_FRAME_LEN};
//!
//! let entries = core::array::from_fn(|i| EncoderRequest::new(i as u32 + 1, 1));
//! let request = WatchListRequest::new(0, entries);
//!
//! let frame = request.to_bytes();
//! assert_eq!(frame.len(), WATCH_LIST_FRAME_LEN);
//! assert_eq!(WatchListRequest::decode(&frame).unwrap(), request);
//! ```
//!
//! # Features
//!
//! - **`defmt`**: Enable `defmt::Format` implementations for embedded logging.

#![cfg_attr(not(test), no_std)]

pub use encoder_data::EncoderData;
pub use error::IpcError;
pub use packet::{
    PacketType, ENCODER_DATA_LEN, ENTRY_COUNT, ENTRY_LEN, HEADER_LEN, UNASSIGNED_CHANNEL,
    WATCH_LIST_FRAME_LEN,
};
pub use watch_list::{EncoderRequest, IpcHeader, WatchListRequest};

mod encoder_data;
mod error;
mod packet;
mod watch_list;
