//! App record type and the fixed naming/output constants

use serde::Serialize;

/// Filename prefix shared by every generated app page
pub const APP_PREFIX: &str = "app_";
/// Filename suffix shared by every generated app page
pub const APP_SUFFIX: &str = ".html";

/// Number of apps the project is aiming for (shown in the header counter)
pub const TARGET_TOTAL: usize = 1000;

/// Every `MILESTONE_STEP`-th app gets the trophy treatment
pub const MILESTONE_STEP: u64 = 50;
/// Appended to the displayed title of milestone apps
pub const TROPHY: &str = " 🏆";
/// Apps with `id > total - RECENT_WINDOW` are flagged as new
pub const RECENT_WINDOW: u64 = 5;

/// Main page served by GitHub Pages
pub const INDEX_FILE: &str = "index.html";
/// Compatibility page linked from older apps, always identical to the index
pub const NAVIGATION_FILE: &str = "navigation.html";

/// Output files, in write order
pub const OUTPUT_FILES: [&str; 2] = [INDEX_FILE, NAVIGATION_FILE];

/// One discovered app page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppRecord {
    pub id: u64,
    pub filename: String,
    pub title: String,
}

impl AppRecord {
    /// Identifier padded to at least three digits ("007", "1500")
    pub fn display_id(&self) -> String {
        format!("{:03}", self.id)
    }

    /// Positive multiples of 50
    pub fn is_milestone(&self) -> bool {
        self.id > 0 && self.id % MILESTONE_STEP == 0
    }

    /// `id > total - 5`, written so a small total can't underflow
    pub fn is_recent(&self, total: usize) -> bool {
        self.id.saturating_add(RECENT_WINDOW) > total as u64
    }

    /// Title as shown on the card, with the trophy for milestones
    pub fn display_title(&self) -> String {
        if self.is_milestone() {
            format!("{}{}", self.title, TROPHY)
        } else {
            self.title.clone()
        }
    }

    /// Lowercase text the client-side filter matches against.
    ///
    /// Built from the displayed title, so milestone keys include the trophy.
    pub fn search_key(&self) -> String {
        format!("{} {}", self.display_title().to_lowercase(), self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, title: &str) -> AppRecord {
        AppRecord {
            id,
            filename: format!("app_{:03}_x.html", id),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_display_id_padding() {
        assert_eq!(record(7, "").display_id(), "007");
        assert_eq!(record(0, "").display_id(), "000");
        assert_eq!(record(42, "").display_id(), "042");
        assert_eq!(record(1500, "").display_id(), "1500");
    }

    #[test]
    fn test_milestone() {
        assert!(record(50, "").is_milestone());
        assert!(record(100, "").is_milestone());
        assert!(record(1000, "").is_milestone());
        assert!(!record(0, "").is_milestone());
        assert!(!record(49, "").is_milestone());
        assert!(!record(51, "").is_milestone());
    }

    #[test]
    fn test_recent_boundary_is_exclusive() {
        // total = 10: ids 6..=9 and above are recent, 5 is not
        assert!(!record(5, "").is_recent(10));
        assert!(record(6, "").is_recent(10));
        assert!(record(10, "").is_recent(10));
        // small totals don't underflow
        assert!(record(0, "").is_recent(2));
        assert!(record(1, "").is_recent(0));
    }

    #[test]
    fn test_search_key() {
        assert_eq!(record(12, "Hello World").search_key(), "hello world 12");
        assert_eq!(record(3, "ÄPFEL").search_key(), "äpfel 3");
    }

    #[test]
    fn test_milestone_title_and_search_key_carry_trophy() {
        let app = record(50, "World App");
        assert_eq!(app.display_title(), "World App 🏆");
        assert_eq!(app.search_key(), "world app 🏆 50");
        // stored title is untouched
        assert_eq!(app.title, "World App");

        assert_eq!(record(51, "Plain").display_title(), "Plain");
        assert_eq!(record(0, "Zero").search_key(), "zero 0");
    }
}
