//! Window partitioning of a console page.
//!
//! [`partition()`] is a pure function of the current page and the set of
//! pinned addresses. The channel group calls it whenever either input
//! changes and throws the previous result away; windows are never patched
//! in place.

use heapless::Vec;

use super::address::Address;
use super::error::ChannelGroupError;
use super::{CHANNELS_PER_PAGE, PHYSICAL_CHANNEL_COUNT};

/// Channel numbers (on one page) shown together by the unpinned strips.
pub type Window = Vec<u32, PHYSICAL_CHANNEL_COUNT>;

/// All windows of one page, in scroll order.
///
/// A page never yields more than [`CHANNELS_PER_PAGE`] windows because every
/// window holds at least one channel.
pub type Windows = Vec<Window, CHANNELS_PER_PAGE>;

// ── PinnedSet ────────────────────────────────────────────────────────────

/// Sorted set of the addresses held by pinned strips.
///
/// **Invariant:** entries are pairwise distinct and there are at most
/// [`PHYSICAL_CHANNEL_COUNT`] of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinnedSet {
    addresses: Vec<Address, PHYSICAL_CHANNEL_COUNT>,
}

impl PinnedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of pinned addresses.
    ///
    /// # Errors
    /// * [`ChannelGroupError::DuplicatePinnedAddress`] if an address repeats
    /// * [`ChannelGroupError::TooManyPins`] if there are more than
    ///   [`PHYSICAL_CHANNEL_COUNT`] addresses
    pub fn from_addresses(addresses: &[Address]) -> Result<Self, ChannelGroupError> {
        let mut set = Self::new();
        for address in addresses {
            set.insert(*address)?;
        }
        Ok(set)
    }

    /// Add one address, keeping the set sorted.
    ///
    /// Fails without modifying the set if the address is already present or
    /// the set is full.
    pub fn insert(&mut self, address: Address) -> Result<(), ChannelGroupError> {
        match self.addresses.binary_search(&address) {
            Ok(_) => Err(ChannelGroupError::DuplicatePinnedAddress),
            Err(pos) => self
                .addresses
                .insert(pos, address)
                .map_err(|_| ChannelGroupError::TooManyPins),
        }
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.addresses.binary_search(address).is_ok()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// Number of unpinned strips, i.e. the width of a full window.
    pub fn window_width(&self) -> usize {
        PHYSICAL_CHANNEL_COUNT - self.addresses.len()
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.addresses
    }
}

// ── Partitioning ─────────────────────────────────────────────────────────

/// Split the unpinned channels of `page` into windows.
///
/// Channels `1..=CHANNELS_PER_PAGE` are visited in order; any `(page, n)` in
/// `pinned` is skipped. Every window except the last holds exactly
/// [`PinnedSet::window_width()`] channels; the last holds whatever is left.
/// With every strip pinned the width is zero and each channel gets a
/// singleton window, so scrolling still has somewhere to go.
///
/// Pins on other pages do not remove anything from `page`, but they still
/// narrow the windows because their strips are unavailable.
///
/// # Examples
///
/// ```
/// use faderbank::channel_group::{partition, Address, PinnedSet};
///
/// let pinned = PinnedSet::from_addresses(&[Address::new(1, 1)]).unwrap();
/// let windows = partition(1, &pinned);
///
/// assert_eq!(windows[0], [2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(windows[1], [9, 10, 11, 12, 13, 14, 15]);
/// assert_eq!(windows.last().unwrap(), &[86, 87, 88, 89, 90]);
/// ```
pub fn partition(page: u32, pinned: &PinnedSet) -> Windows {
    let width = pinned.window_width().max(1);
    let mut windows = Windows::new();
    let mut current = Window::new();

    for channel in 1..=CHANNELS_PER_PAGE as u32 {
        if pinned.contains(&Address::new(page, channel)) {
            continue;
        }
        if current.len() == width {
            windows
                .push(core::mem::take(&mut current))
                .expect("a page yields at most one window per channel");
        }
        current
            .push(channel)
            .expect("window width never exceeds the strip count");
    }

    if !current.is_empty() {
        windows
            .push(current)
            .expect("a page yields at most one window per channel");
    }

    windows
}

// ── Unit Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // Helper: flatten all windows into one sorted list of channel numbers.
    fn flatten(windows: &Windows) -> std::vec::Vec<u32> {
        windows.iter().flat_map(|w| w.iter().copied()).collect()
    }

    fn pins(addresses: &[(u32, u32)]) -> PinnedSet {
        let list: std::vec::Vec<Address> =
            addresses.iter().map(|&(p, c)| Address::new(p, c)).collect();
        PinnedSet::from_addresses(&list).unwrap()
    }

    // ── PinnedSet ────────────────────────────────────────────────────

    #[test]
    fn pinned_set_stays_sorted() {
        let set = pins(&[(2, 5), (1, 8), (1, 1)]);
        assert_eq!(
            set.as_slice(),
            &[Address::new(1, 1), Address::new(1, 8), Address::new(2, 5)]
        );
        assert!(set.contains(&Address::new(1, 8)));
        assert!(!set.contains(&Address::new(2, 8)));
    }

    #[test]
    fn pinned_set_rejects_duplicates() {
        let mut set = pins(&[(1, 1)]);
        assert_eq!(
            set.insert(Address::new(1, 1)),
            Err(ChannelGroupError::DuplicatePinnedAddress)
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn pinned_set_rejects_ninth_pin() {
        let mut set = PinnedSet::new();
        for c in 1..=8 {
            set.insert(Address::new(1, c)).unwrap();
        }
        assert_eq!(set.window_width(), 0);
        assert_eq!(
            set.insert(Address::new(1, 9)),
            Err(ChannelGroupError::TooManyPins)
        );
    }

    // ── Window shape ─────────────────────────────────────────────────

    #[test]
    fn no_pins_gives_windows_of_eight() {
        let windows = partition(1, &PinnedSet::new());
        // 90 channels = 11 full windows + one window of 2.
        assert_eq!(windows.len(), 12);
        assert_eq!(windows[0], [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(windows[1], [9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(windows[11], [89, 90]);
    }

    #[test]
    fn pin_on_current_page_is_skipped() {
        let windows = partition(1, &pins(&[(1, 1)]));
        assert_eq!(windows[0], [2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(windows[1], [9, 10, 11, 12, 13, 14, 15]);
        assert!(!flatten(&windows).contains(&1));
    }

    #[test]
    fn pin_on_other_page_only_narrows_windows() {
        let windows = partition(2, &pins(&[(1, 1)]));
        assert_eq!(windows[0], [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(flatten(&windows).len(), CHANNELS_PER_PAGE);
    }

    #[test]
    fn two_pins_give_width_six() {
        let windows = partition(2, &pins(&[(1, 1), (1, 8)]));
        assert_eq!(windows[0], [1, 2, 3, 4, 5, 6]);
        // 90 = 15 * 6
        assert_eq!(windows.len(), 15);
    }

    #[test]
    fn all_pinned_gives_singleton_windows() {
        let all: std::vec::Vec<(u32, u32)> = (1..=8).map(|c| (1, c)).collect();
        let windows = partition(1, &pins(&all));
        assert_eq!(windows.len(), CHANNELS_PER_PAGE - 8);
        assert!(windows.iter().all(|w| w.len() == 1));
        assert_eq!(windows[0], [9]);
    }

    #[test]
    fn seven_pins_elsewhere_fill_window_capacity() {
        let seven: std::vec::Vec<(u32, u32)> = (1..=7).map(|c| (5, c)).collect();
        let windows = partition(1, &pins(&seven));
        assert_eq!(windows.len(), CHANNELS_PER_PAGE);
    }

    #[test]
    fn partition_is_deterministic() {
        let set = pins(&[(3, 40), (3, 2)]);
        assert_eq!(partition(3, &set), partition(3, &set));
    }

    // ── Coverage property ────────────────────────────────────────────

    #[test]
    fn windows_cover_every_unpinned_channel_exactly_once() {
        let pin_sets: [&[(u32, u32)]; 6] = [
            &[],
            &[(1, 1)],
            &[(1, 1), (1, 8)],
            &[(2, 45), (1, 3), (2, 90)],
            &[(1, 1), (1, 2), (1, 3), (1, 4), (1, 5), (1, 6), (1, 7)],
            &[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (7, 7), (8, 8)],
        ];

        for page in 1..=8u32 {
            for set in pin_sets {
                let pinned = pins(set);
                let windows = partition(page, &pinned);
                let width = pinned.window_width().max(1);

                let expected: std::vec::Vec<u32> = (1..=CHANNELS_PER_PAGE as u32)
                    .filter(|&c| !pinned.contains(&Address::new(page, c)))
                    .collect();
                assert_eq!(flatten(&windows), expected, "page {} pins {:?}", page, set);

                let (last, full) = windows.split_last().unwrap();
                assert!(full.iter().all(|w| w.len() == width));
                assert!(!last.is_empty() && last.len() <= width);
            }
        }
    }
}
