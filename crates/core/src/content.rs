#![allow(missing_docs)]

//! Static site content.
//!
//! Everything the pages display lives in a single immutable [`SiteContent`]
//! value. The built-in copy mirrors the live site; a JSON document of the same
//! shape can replace it at startup.

use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::{GameRecord, ALL_GAMES};

/// Failures raised while loading or checking a content document.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content file {path}: {source}")]
    Read {
        /// Path that was requested.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The content file is not valid JSON for [`SiteContent`].
    #[error("failed to parse content file {path}: {source}")]
    Parse {
        /// Path that was requested.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// Two games share the same identifier.
    #[error("duplicate game id {0}")]
    DuplicateGameId(u32),
    /// A game is filed under a category the category list does not offer.
    #[error("game {id} uses unknown category {category:?}")]
    UnknownCategory {
        /// Identifier of the offending game.
        id: u32,
        /// Category that is not listed.
        category: String,
    },
    /// The category list lacks the "All Games" entry.
    #[error("category list must start with \"All Games\"")]
    MissingAllGames,
}

/// Name, tagline and branding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub founded_year: i32,
    pub logo: String,
}

/// Postal address shown in the footer and on the contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub line2: String,
    pub city: String,
    pub pincode: String,
    pub country: String,
}

/// Ways to reach the team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    /// Phone number including the leading `+`.
    pub phone: String,
    pub phone_display: String,
    pub address: Address,
    pub full_address: String,
    /// Messaging recipient: the phone number without its leading `+`.
    pub recipient_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub youtube: String,
    pub discord: String,
}

impl SocialLinks {
    /// Label/URL pairs in display order.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("Facebook", self.facebook.as_str()),
            ("Instagram", self.instagram.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("YouTube", self.youtube.as_str()),
            ("Discord", self.discord.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub name: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub suffix: Option<String>,
}

impl Stat {
    /// Value with its suffix appended, e.g. `500K+`.
    pub fn display_value(&self) -> String {
        match self.suffix.as_deref() {
            Some(suffix) => format!("{}{}", self.value, suffix),
            None => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub number: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub location: String,
    pub content: String,
    pub avatar: String,
    pub winnings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: String,
    pub event: String,
}

/// Copy for the about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub mission: String,
    pub vision: String,
    /// Paragraphs separated by blank lines.
    pub story: String,
    pub values: Vec<CompanyValue>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<Milestone>,
}

impl AboutContent {
    /// Story split into its non-empty paragraphs.
    pub fn story_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.story
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
    }
}

/// Immutable bundle of everything the site displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub site: SiteInfo,
    pub contact: ContactInfo,
    pub social: SocialLinks,
    pub nav: Vec<NavItem>,
    pub features: Vec<Feature>,
    pub games: Vec<GameRecord>,
    pub categories: Vec<String>,
    pub stats: Vec<Stat>,
    pub how_it_works: Vec<Step>,
    pub testimonials: Vec<Testimonial>,
    pub about: AboutContent,
}

impl SiteContent {
    /// Load content from a JSON document and check it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let content: SiteContent =
            serde_json::from_str(&raw).map_err(|source| ContentError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        content.check()?;
        debug!(
            path = %path.display(),
            games = content.games.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    /// Verify the catalog is internally consistent.
    pub fn check(&self) -> Result<(), ContentError> {
        if self.categories.first().map(String::as_str) != Some(ALL_GAMES) {
            return Err(ContentError::MissingAllGames);
        }

        let mut seen = HashSet::new();
        for game in &self.games {
            if !seen.insert(game.id) {
                return Err(ContentError::DuplicateGameId(game.id));
            }
            if !self.categories.iter().any(|c| c == &game.category) {
                return Err(ContentError::UnknownCategory {
                    id: game.id,
                    category: game.category.clone(),
                });
            }
        }
        Ok(())
    }

    /// Look up a game by identifier.
    pub fn game(&self, id: u32) -> Option<&GameRecord> {
        self.games.iter().find(|game| game.id == id)
    }

    /// The content shipped with the binary.
    pub fn builtin() -> Self {
        Self {
            site: SiteInfo {
                name: "WinZones".into(),
                tagline: "Play Games, Win Prizes".into(),
                description: "India's Premier Online Gaming Platform. Compete with players worldwide and win real money!".into(),
                founded_year: 2024,
                logo: "🎮".into(),
            },
            contact: ContactInfo {
                email: "info@winzones.in".into(),
                phone: "+91 8228822825".into(),
                phone_display: "+91 82288 22825".into(),
                address: Address {
                    line1: "663 Kakrola Housing Complex".into(),
                    line2: "Main Najafgarh Road, Dwarka".into(),
                    city: "New Delhi".into(),
                    pincode: "110078".into(),
                    country: "India".into(),
                },
                full_address: "663 Kakrola Housing Complex, Main Najafgarh Road, Dwarka, New Delhi - 110078".into(),
                recipient_id: "918228822825".into(),
            },
            social: SocialLinks {
                facebook: "https://facebook.com/winzones".into(),
                instagram: "https://instagram.com/winzones".into(),
                twitter: "https://twitter.com/winzones".into(),
                youtube: "https://youtube.com/winzones".into(),
                discord: "https://discord.gg/winzones".into(),
            },
            nav: [
                ("Home", "/"),
                ("Games", "/games"),
                ("About Us", "/about"),
                ("Contact Us", "/contact"),
            ]
            .into_iter()
            .map(|(name, path)| NavItem {
                name: name.into(),
                path: path.into(),
            })
            .collect(),
            features: [
                ("Real-Time Gaming", "Experience thrilling multiplayer games with players from around the world in real-time."),
                ("Win Real Prizes", "Compete in tournaments and win real money prizes. Your skills pay off!"),
                ("Growing Community", "Join thousands of gamers and become part of our vibrant gaming community."),
                ("Secure Platform", "Your data and transactions are protected with enterprise-grade security."),
                ("Instant Withdrawals", "Withdraw your winnings instantly to your bank account or UPI."),
                ("Lightning Fast", "Optimized servers ensure lag-free gaming experience every time."),
            ]
            .into_iter()
            .map(|(title, description)| Feature {
                title: title.into(),
                description: description.into(),
            })
            .collect(),
            games: builtin_games(),
            categories: [
                ALL_GAMES,
                "Card Games",
                "Board Games",
                "Strategy",
                "Sports",
                "Trivia",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            stats: [
                ("500K", "Active Players", "+"),
                ("50", "Games Available", "+"),
                ("₹10Cr", "Prizes Won", "+"),
                ("99.9", "Uptime", "%"),
            ]
            .into_iter()
            .map(|(value, label, suffix)| Stat {
                value: value.into(),
                label: label.into(),
                suffix: Some(suffix.into()),
            })
            .collect(),
            how_it_works: [
                ("01", "Create Account", "Sign up for free in just 30 seconds using your mobile number."),
                ("02", "Add Funds", "Deposit using UPI, cards, or net banking with instant credit."),
                ("03", "Choose Your Game", "Pick from our collection of exciting skill-based games."),
                ("04", "Win & Withdraw", "Win matches and withdraw your earnings instantly to your bank."),
            ]
            .into_iter()
            .map(|(number, title, description)| Step {
                number: number.into(),
                title: title.into(),
                description: description.into(),
            })
            .collect(),
            testimonials: vec![
                Testimonial {
                    name: "Rahul Kumar".into(),
                    location: "Mumbai, Maharashtra".into(),
                    content: "WinZones has changed my gaming experience. I've won over ₹50,000 playing Ludo Master!".into(),
                    avatar: "👨".into(),
                    winnings: "₹50,000+".into(),
                },
                Testimonial {
                    name: "Priya Sharma".into(),
                    location: "Delhi, NCR".into(),
                    content: "The best gaming platform I've used. Quick withdrawals and amazing games!".into(),
                    avatar: "👩".into(),
                    winnings: "₹35,000+".into(),
                },
                Testimonial {
                    name: "Amit Singh".into(),
                    location: "Bangalore, Karnataka".into(),
                    content: "Fantasy Sports on WinZones is addictive! Great prizes and fair gameplay.".into(),
                    avatar: "👨‍💼".into(),
                    winnings: "₹1,20,000+".into(),
                },
            ],
            about: builtin_about(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}

#[allow(clippy::too_many_arguments)]
fn game(
    id: u32,
    name: &str,
    description: &str,
    players: &str,
    prize_pool: &str,
    category: &str,
    image: &str,
    flags: (bool, bool, bool),
) -> GameRecord {
    let (is_new, is_hot, coming_soon) = flags;
    GameRecord {
        id,
        name: name.into(),
        description: description.into(),
        category: category.into(),
        players: players.into(),
        prize_pool: prize_pool.into(),
        image: image.into(),
        is_new,
        is_hot,
        coming_soon,
    }
}

fn builtin_games() -> Vec<GameRecord> {
    const PLAIN: (bool, bool, bool) = (false, false, false);
    const HOT: (bool, bool, bool) = (false, true, false);
    const NEW: (bool, bool, bool) = (true, false, false);
    const SOON: (bool, bool, bool) = (false, false, true);

    vec![
        game(1, "Ludo Master", "Classic Ludo with a modern twist. Play with friends or random opponents.", "45K+", "₹10 Lakhs", "Board Games", "/images/3726585.jpg", HOT),
        game(2, "Rummy Royal", "India's favorite card game. Show your skills and win big!", "32K+", "₹25 Lakhs", "Card Games", "/images/3745105.jpg", HOT),
        game(3, "Chess Arena", "Battle of minds. Compete in rapid and blitz chess tournaments.", "18K+", "₹5 Lakhs", "Strategy", "/images/3745306.jpg", PLAIN),
        game(4, "Fantasy Sports", "Create your dream team and win based on real match performances.", "78K+", "₹50 Lakhs", "Sports", "/images/img1.jpg", HOT),
        game(5, "Quiz Master", "Test your knowledge across various categories and win rewards.", "25K+", "₹3 Lakhs", "Trivia", "/images/3726585.jpg", NEW),
        game(6, "Call Break", "Strategic card game popular in South Asia. Master the tricks!", "15K+", "₹8 Lakhs", "Card Games", "/images/3745105.jpg", PLAIN),
        game(7, "Carrom King", "Digital carrom with realistic physics. Pocket and win!", "12K+", "₹4 Lakhs", "Board Games", "/images/3745306.jpg", SOON),
        game(8, "Poker Pro", "Texas Hold'em poker with tournaments and cash games.", "28K+", "₹15 Lakhs", "Card Games", "/images/img1.jpg", SOON),
    ]
}

fn builtin_about() -> AboutContent {
    AboutContent {
        mission: "To create India's most trusted and entertaining online gaming platform where skill meets reward.".into(),
        vision: "To become the go-to destination for millions of gamers who want to showcase their skills and win real rewards.".into(),
        story: "Founded in 2024, WinZones was born from a simple idea: gaming should be rewarding. Our team of passionate gamers and tech enthusiasts came together to create a platform that combines the thrill of gaming with the excitement of real rewards.\n\n\
Today, WinZones hosts thousands of players who compete in skill-based games daily. We believe in fair play, transparency, and creating a safe environment for our gaming community.\n\n\
Our journey has just begun, and we're committed to adding more games, features, and ways for you to win. Join us and be part of India's fastest-growing gaming revolution!".into(),
        values: [
            ("Fair Play", "We ensure all games are fair and skill-based with no room for cheating."),
            ("Transparency", "Clear rules, instant payouts, and no hidden charges ever."),
            ("Security", "Bank-grade security to protect your data and transactions."),
            ("Community", "Building a positive and supportive gaming community."),
        ]
        .into_iter()
        .map(|(title, description)| CompanyValue {
            title: title.into(),
            description: description.into(),
        })
        .collect(),
        highlights: [
            "Skill-based gaming excellence",
            "Fair and transparent platform",
            "Instant rewards and withdrawals",
            "World-class gaming experience",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        timeline: [
            ("2024", "WinZones was founded with a vision to revolutionize online gaming in India"),
            ("2024", "Launched our first games - Ludo Master and Rummy Royal"),
            ("2024", "Crossed 100,000 registered players"),
            ("2024", "Introduced Fantasy Sports and Chess Arena"),
            ("2025", "Expanding to 50+ games with bigger prize pools"),
        ]
        .into_iter()
        .map(|(year, event)| Milestone {
            year: year.into(),
            event: event.into(),
        })
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn builtin_content_is_consistent() {
        let content = SiteContent::builtin();
        assert!(content.check().is_ok());
        assert_eq!(content.games.len(), 8);
        assert_eq!(content.nav.len(), 4);
        assert_eq!(content.about.story_paragraphs().count(), 3);
        assert_eq!(content.stats[0].display_value(), "500K+");
    }

    #[test]
    fn load_round_trips_through_json() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("content.json");
        let mut content = SiteContent::builtin();
        content.site.name = "TestZone".into();
        fs::write(&path, serde_json::to_string_pretty(&content)?)?;

        let loaded = SiteContent::load(&path)?;
        assert_eq!(loaded.site.name, "TestZone");
        assert_eq!(loaded, content);
        Ok(())
    }

    #[test]
    fn game_flags_default_to_false() -> Result<()> {
        let raw = r#"{
            "id": 42,
            "name": "Snakes",
            "description": "Ladders too",
            "category": "Board Games",
            "players": "1K+",
            "prize_pool": "₹1 Lakh"
        }"#;
        let game: GameRecord = serde_json::from_str(raw)?;
        assert!(!game.is_new && !game.is_hot && !game.coming_soon);
        assert!(game.image.is_empty());
        Ok(())
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut content = SiteContent::builtin();
        content.games[1].id = 1;
        assert!(matches!(
            content.check(),
            Err(ContentError::DuplicateGameId(1))
        ));
    }

    #[test]
    fn rejects_unlisted_category() {
        let mut content = SiteContent::builtin();
        content.games[2].category = "Racing".into();
        match content.check() {
            Err(ContentError::UnknownCategory { id, category }) => {
                assert_eq!(id, 3);
                assert_eq!(category, "Racing");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_sentinel() {
        let mut content = SiteContent::builtin();
        content.categories.remove(0);
        assert!(matches!(content.check(), Err(ContentError::MissingAllGames)));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err = SiteContent::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
    }

    #[test]
    fn malformed_file_reports_parse_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json")?;
        let err = SiteContent::load(&path).unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        Ok(())
    }
}
