use super::error::ChannelGroupError;

/// Highest console page reachable with the page buttons by default.
pub const DEFAULT_MAX_PAGE: u32 = 100;

/// Surface fader index of the master fader (the ninth fader, after the strips).
pub const MASTER_FADER_INDEX: u8 = 8;

/// Tunables for a [`ChannelGroup`](super::ChannelGroup).
///
/// [`GroupConfig::default()`] matches the stock surface: pages `1..=100`
/// and the master fader at index 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GroupConfig {
    /// Highest page reachable with the page buttons. Default: 100. Min: 1.
    pub max_page: u32,
    /// Fader index the master level is written to. Default: 8.
    pub master_fader_index: u8,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            max_page: DEFAULT_MAX_PAGE,
            master_fader_index: MASTER_FADER_INDEX,
        }
    }
}

impl GroupConfig {
    /// Check the configuration before a group is built from it.
    ///
    /// Returns [`ChannelGroupError::InvalidPage`] if `max_page` is 0.
    pub fn validate(&self) -> Result<(), ChannelGroupError> {
        if self.max_page == 0 {
            return Err(ChannelGroupError::InvalidPage);
        }
        Ok(())
    }

    /// Returns `true` if `page` lies in `[1, max_page]`.
    pub fn contains_page(&self, page: u32) -> bool {
        (1..=self.max_page).contains(&page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = GroupConfig::default();
        assert_eq!(c.max_page, 100);
        assert_eq!(c.master_fader_index, 8);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_max_page_is_rejected() {
        let c = GroupConfig {
            max_page: 0,
            ..GroupConfig::default()
        };
        assert_eq!(c.validate(), Err(ChannelGroupError::InvalidPage));
    }

    #[test]
    fn contains_page_is_one_based() {
        let c = GroupConfig {
            max_page: 3,
            ..GroupConfig::default()
        };
        assert!(!c.contains_page(0));
        assert!(c.contains_page(1));
        assert!(c.contains_page(3));
        assert!(!c.contains_page(4));
    }
}
