/// Crawl phase definitions for the driver's state machine
///
/// One crawl chain moves through these phases page by page until the chain
/// ends or an error occurs.
use std::fmt;

/// Represents the current phase of a crawl chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrawlPhase {
    // ===== Active Phases =====
    /// Fetching the current local URL
    Fetching,

    /// Extracting sections and the next link from the fetched page
    Extracting,

    /// Resolving the next link against both base URLs
    Advancing,

    // ===== Terminal Phases =====
    /// The chain's last page had no next link; the record list is complete
    Done,

    /// A fetch, extraction, or resolution error ended the chain
    Failed,
}

impl CrawlPhase {
    /// Returns true if this is a terminal phase (the crawl loop has ended)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }

    /// Returns true if the crawl is still making progress
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

impl fmt::Display for CrawlPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fetching => "fetching",
            Self::Extracting => "extracting",
            Self::Advancing => "advancing",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_phases() {
        assert!(CrawlPhase::Fetching.is_active());
        assert!(CrawlPhase::Extracting.is_active());
        assert!(CrawlPhase::Advancing.is_active());
        assert!(!CrawlPhase::Fetching.is_terminal());
    }

    #[test]
    fn test_terminal_phases() {
        assert!(CrawlPhase::Done.is_terminal());
        assert!(CrawlPhase::Failed.is_terminal());
        assert!(!CrawlPhase::Done.is_active());
        assert!(!CrawlPhase::Failed.is_active());
    }

    #[test]
    fn test_display() {
        assert_eq!(CrawlPhase::Fetching.to_string(), "fetching");
        assert_eq!(CrawlPhase::Done.to_string(), "done");
    }
}
