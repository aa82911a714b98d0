//! Suppression of known legal disclaimers in server output.

use whois_core::tables::{self, DisclaimerMarkers};
use whois_core::{Result, WhoisError};

/// Where the filter stands within a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideState {
    /// Nothing is hidden, either by choice or because a block already ended
    Disabled,
    /// Looking for the start of a disclaimer
    Unstarted,
    /// Inside the disclaimer opened by the marker pair at this index
    Hiding(usize),
}

/// Line filter hiding the text between a start and an end marker.
///
/// At most one block is hidden per response. A response that ends while a
/// block is still open means the disclaimer changed shape, which is fatal:
/// we could be swallowing real data.
#[derive(Debug, Clone)]
pub struct DisclaimerFilter {
    state: HideState,
    markers: &'static [DisclaimerMarkers],
}

impl DisclaimerFilter {
    /// Filter over the built-in marker table.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self::with_markers(enabled, tables::disclaimers())
    }

    /// Filter over a custom marker table.
    #[must_use]
    pub const fn with_markers(enabled: bool, markers: &'static [DisclaimerMarkers]) -> Self {
        let state = if enabled {
            HideState::Unstarted
        } else {
            HideState::Disabled
        };
        Self { state, markers }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> HideState {
        self.state
    }

    /// Feed one line; returns true if it must not be shown.
    pub fn hide_line(&mut self, line: &str) -> bool {
        match self.state {
            HideState::Disabled => false,
            HideState::Unstarted => {
                let opened = self
                    .markers
                    .iter()
                    .position(|pair| line.starts_with(pair.start));
                match opened {
                    Some(index) => {
                        self.state = HideState::Hiding(index);
                        true
                    }
                    None => false,
                }
            }
            HideState::Hiding(index) => {
                if self
                    .markers
                    .get(index)
                    .is_some_and(|pair| line.starts_with(pair.end))
                {
                    self.state = HideState::Disabled;
                }
                true
            }
        }
    }

    /// End of response; fails if a disclaimer block never closed.
    pub const fn finish(&self) -> Result<()> {
        match self.state {
            HideState::Hiding(_) => Err(WhoisError::DisclaimerChanged),
            HideState::Disabled | HideState::Unstarted => Ok(()),
        }
    }
}
