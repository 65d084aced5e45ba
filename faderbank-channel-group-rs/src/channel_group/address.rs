use faderbank_ipc::EncoderRequest;

/// Logical console channel: `channel` (1-based) on `page` (1-based).
///
/// Ordered by page, then channel, so sets of addresses sort the way the
/// console lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Address {
    /// Console page.
    pub page: u32,
    /// Channel number within the page.
    pub channel: u32,
}

impl Address {
    pub const fn new(page: u32, channel: u32) -> Self {
        Self { page, channel }
    }
}

/// What a physical strip currently points at.
///
/// When the last window of a page is shorter than the number of unpinned
/// strips, the leftover strips are [`Unassigned`](AddressSlot::Unassigned).
/// They still remember the page they sit on so the watch-list can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressSlot {
    /// Strip shows a real console channel.
    Assigned(Address),
    /// Strip has nothing to show on `page`.
    Unassigned {
        /// Page the strip was left on.
        page: u32,
    },
}

impl AddressSlot {
    /// Returns `true` if the strip maps to a real channel.
    pub fn is_assigned(&self) -> bool {
        matches!(self, AddressSlot::Assigned(_))
    }

    /// The mapped address, or `None` if unassigned.
    pub fn address(&self) -> Option<Address> {
        match self {
            AddressSlot::Assigned(address) => Some(*address),
            AddressSlot::Unassigned { .. } => None,
        }
    }

    /// Page the strip is on, assigned or not.
    pub fn page(&self) -> u32 {
        match self {
            AddressSlot::Assigned(address) => address.page,
            AddressSlot::Unassigned { page } => *page,
        }
    }

    /// Wire entry for the watch-list frame.
    pub fn to_request(&self) -> EncoderRequest {
        match self {
            AddressSlot::Assigned(address) => EncoderRequest::new(address.channel, address.page),
            AddressSlot::Unassigned { page } => EncoderRequest::unassigned(*page),
        }
    }
}

impl From<Address> for AddressSlot {
    fn from(address: Address) -> Self {
        AddressSlot::Assigned(address)
    }
}
