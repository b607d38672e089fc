//! Game catalog records and the category/search filter.

use serde::{Deserialize, Serialize};

/// Category value that matches every record.
pub const ALL_GAMES: &str = "All Games";

/// Number of cards shown in the home page's "featured" row.
pub const FEATURED_LIMIT: usize = 4;

/// One entry of the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// One-line pitch.
    pub description: String,
    /// Category label, matched exactly by the filter.
    pub category: String,
    /// Player count as displayed (e.g. `45K+`).
    pub players: String,
    /// Prize pool as displayed.
    pub prize_pool: String,
    /// Card artwork path.
    #[serde(default)]
    pub image: String,
    /// Shows the `NEW` badge.
    #[serde(default)]
    pub is_new: bool,
    /// Shows the `HOT` badge.
    #[serde(default)]
    pub is_hot: bool,
    /// Not yet playable; listed separately.
    #[serde(default)]
    pub coming_soon: bool,
}

/// Badge rendered on a game card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    /// Popular right now.
    Hot,
    /// Recently added.
    New,
    /// Not yet playable.
    Soon,
}

impl Badge {
    /// Text shown inside the badge.
    pub fn label(self) -> &'static str {
        match self {
            Badge::Hot => "HOT",
            Badge::New => "NEW",
            Badge::Soon => "SOON",
        }
    }
}

/// What pressing "play" on a card leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card is not playable yet; nothing happens.
    Ignored,
    /// Show the maintenance notice for the named game.
    Maintenance {
        /// Name of the game the notice is about.
        game: String,
    },
}

impl GameRecord {
    /// Badges for the set flags, in display order.
    pub fn badges(&self) -> Vec<Badge> {
        let mut badges = Vec::new();
        if self.is_hot {
            badges.push(Badge::Hot);
        }
        if self.is_new {
            badges.push(Badge::New);
        }
        if self.coming_soon {
            badges.push(Badge::Soon);
        }
        badges
    }

    /// Outcome of pressing "play". Games are display-only, so every playable
    /// card lands on the maintenance notice.
    pub fn play(&self) -> PlayOutcome {
        if self.coming_soon {
            PlayOutcome::Ignored
        } else {
            PlayOutcome::Maintenance {
                game: self.name.clone(),
            }
        }
    }

    fn matches_category(&self, category: &str) -> bool {
        category == ALL_GAMES || self.category == category
    }

    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

/// Category selection plus free-text search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// [`ALL_GAMES`] or an exact category label.
    pub category: String,
    /// Case-insensitive substring of name or description.
    pub search_text: String,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            category: ALL_GAMES.to_string(),
            search_text: String::new(),
        }
    }
}

impl CatalogQuery {
    /// Build a query from its two parts.
    pub fn new(category: impl Into<String>, search_text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            search_text: search_text.into(),
        }
    }

    /// Run the query against `games`.
    pub fn apply<'a>(&self, games: &'a [GameRecord]) -> CatalogView<'a> {
        filter(games, &self.category, &self.search_text)
    }
}

/// Filter result, split by availability. Both halves keep input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView<'a> {
    /// Matching records that can be opened.
    pub available: Vec<&'a GameRecord>,
    /// Matching records flagged as coming soon.
    pub coming_soon: Vec<&'a GameRecord>,
}

impl CatalogView<'_> {
    /// Total number of matching records.
    pub fn len(&self) -> usize {
        self.available.len() + self.coming_soon.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select records in `category` whose name or description contains
/// `search_text` (ignoring case), partitioned by `coming_soon`.
///
/// An unknown category simply matches nothing.
pub fn filter<'a>(games: &'a [GameRecord], category: &str, search_text: &str) -> CatalogView<'a> {
    let needle = search_text.to_lowercase();
    let (coming_soon, available): (Vec<_>, Vec<_>) = games
        .iter()
        .filter(|game| game.matches_category(category) && game.matches_search(&needle))
        .partition(|game| game.coming_soon);
    CatalogView {
        available,
        coming_soon,
    }
}

/// First `limit` playable records in catalog order.
pub fn featured(games: &[GameRecord], limit: usize) -> Vec<&GameRecord> {
    games
        .iter()
        .filter(|game| !game.coming_soon)
        .take(limit)
        .collect()
}

/// Number of playable records.
pub fn available_count(games: &[GameRecord]) -> usize {
    games.iter().filter(|game| !game.coming_soon).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;

    fn names(records: &[&GameRecord]) -> Vec<String> {
        records.iter().map(|game| game.name.clone()).collect()
    }

    #[test]
    fn all_games_with_empty_search_keeps_everything() {
        let content = SiteContent::builtin();
        let view = filter(&content.games, ALL_GAMES, "");
        assert_eq!(view.len(), content.games.len());
        assert_eq!(
            names(&view.available),
            [
                "Ludo Master",
                "Rummy Royal",
                "Chess Arena",
                "Fantasy Sports",
                "Quiz Master",
                "Call Break"
            ]
        );
        assert_eq!(names(&view.coming_soon), ["Carrom King", "Poker Pro"]);
    }

    #[test]
    fn card_games_split_by_availability() {
        let content = SiteContent::builtin();
        let view = filter(&content.games, "Card Games", "");
        assert_eq!(names(&view.available), ["Rummy Royal", "Call Break"]);
        assert_eq!(names(&view.coming_soon), ["Poker Pro"]);
    }

    #[test]
    fn search_ignores_case() {
        let content = SiteContent::builtin();
        let view = filter(&content.games, ALL_GAMES, "LUDO");
        assert_eq!(names(&view.available), ["Ludo Master"]);
        assert!(view.coming_soon.is_empty());
    }

    #[test]
    fn search_covers_description() {
        let content = SiteContent::builtin();
        let view = filter(&content.games, ALL_GAMES, "tournaments");
        assert_eq!(names(&view.available), ["Chess Arena"]);
        assert_eq!(names(&view.coming_soon), ["Poker Pro"]);
    }

    #[test]
    fn category_match_is_exact() {
        let content = SiteContent::builtin();
        assert!(filter(&content.games, "card games", "").is_empty());
        assert!(filter(&content.games, "Racing", "").is_empty());
        assert!(filter(&content.games, "", "").is_empty());
    }

    #[test]
    fn both_predicates_must_hold() {
        let content = SiteContent::builtin();
        let view = filter(&content.games, "Board Games", "poker");
        assert!(view.is_empty());
        let view = CatalogQuery::new("Board Games", "carrom").apply(&content.games);
        assert!(view.available.is_empty());
        assert_eq!(names(&view.coming_soon), ["Carrom King"]);
    }

    #[test]
    fn featured_skips_coming_soon() {
        let mut content = SiteContent::builtin();
        content.games[0].coming_soon = true;
        let featured = featured(&content.games, FEATURED_LIMIT);
        assert_eq!(
            names(&featured),
            ["Rummy Royal", "Chess Arena", "Fantasy Sports", "Quiz Master"]
        );
        assert_eq!(available_count(&content.games), 5);
    }

    #[test]
    fn badges_follow_flags() {
        let content = SiteContent::builtin();
        let mut game = content.games[0].clone();
        assert_eq!(game.badges(), [Badge::Hot]);
        game.is_new = true;
        game.coming_soon = true;
        assert_eq!(
            game.badges().iter().map(|b| b.label()).collect::<Vec<_>>(),
            ["HOT", "NEW", "SOON"]
        );
    }

    #[test]
    fn play_opens_maintenance_for_playable_games() {
        let content = SiteContent::builtin();
        assert_eq!(
            content.games[0].play(),
            PlayOutcome::Maintenance {
                game: "Ludo Master".into()
            }
        );
        let carrom = content.game(7).expect("carrom present");
        assert_eq!(carrom.play(), PlayOutcome::Ignored);
    }
}
