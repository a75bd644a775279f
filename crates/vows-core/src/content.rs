//! Site content provider.
//!
//! All display text lives in `content/site.toml`, embedded at compile time and
//! parsed once into an immutable [`SiteContent`]. Rendering code reads it
//! through [`site()`]; there is no write API.

use std::sync::LazyLock;

use serde::Deserialize;

use crate::error::ContentError;

/// Embedded content document.
pub const SITE_TOML: &str = include_str!("../content/site.toml");

/// External map service used for "open in maps" links.
pub const MAPS_BASE_URL: &str = "https://maps.google.com/";

static SITE: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::from_toml(SITE_TOML).expect("embedded content/site.toml must be valid")
});

/// Process-wide site content, parsed on first access.
pub fn site() -> &'static SiteContent {
    &SITE
}

// =============================================================================
// Content Types
// =============================================================================

/// Root of the content document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub couple: Couple,
    pub wedding: Wedding,
    pub rsvp: Rsvp,
    pub ceremony: Ceremony,
    pub reception: Reception,
    pub dress_code: DressCode,
    pub narratives: Narratives,
    pub snap_share: SnapShare,
    #[serde(default)]
    pub entourage: Vec<Attendant>,
    #[serde(default)]
    pub principal_sponsors: Vec<SponsorPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Couple {
    pub bride: String,
    pub bride_nickname: String,
    pub groom: String,
    pub groom_nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Wedding {
    pub date: String,
    pub time: String,
    pub venue: String,
    pub tagline: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rsvp {
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ceremony {
    /// Full street address (copied to clipboard, handed to the map service)
    pub location: String,
    pub venue: String,
    pub date: String,
    pub day: String,
    pub time: String,
    pub entourage_time: String,
    pub guests_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Reception {
    pub location: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DressCode {
    pub theme: String,
    /// Motif palette as `#RRGGBB` values
    pub colors: Vec<String>,
    pub sponsors: SponsorAttire,
    pub guests: GuestAttire,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SponsorAttire {
    pub male: String,
    pub female: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuestAttire {
    pub gents: String,
    pub ladies: String,
}

/// Love-story text. A shared narrative replaces the per-side stories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Narratives {
    #[serde(default)]
    pub shared: Option<String>,
    #[serde(default)]
    pub groom: Option<String>,
    #[serde(default)]
    pub bride: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SnapShare {
    pub drive_link: String,
    pub hashtag: String,
    pub instructions: String,
}

/// Secondary grouping for attendants listed outside the main role lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendantGroup {
    BrideFamily,
    GroomFamily,
    Candle,
    Cord,
}

impl AttendantGroup {
    /// Groups in display order.
    pub const ALL: [AttendantGroup; 4] = [
        AttendantGroup::BrideFamily,
        AttendantGroup::GroomFamily,
        AttendantGroup::Candle,
        AttendantGroup::Cord,
    ];

    /// Heading shown above the group.
    pub fn heading(self) -> &'static str {
        match self {
            Self::BrideFamily => "Parents of the Bride",
            Self::GroomFamily => "Family of the Groom",
            Self::Candle => "Candle Sponsors",
            Self::Cord => "Cord Sponsors",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attendant {
    pub role: String,
    pub name: String,
    #[serde(default)]
    pub group: Option<AttendantGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SponsorPair {
    pub name: String,
    #[serde(default)]
    pub spouse: Option<String>,
}

impl SponsorPair {
    /// Spouse name, treating blank entries as absent.
    pub fn spouse(&self) -> Option<&str> {
        self.spouse.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}

// =============================================================================
// Derived Views
// =============================================================================

/// Story tab on the narrative section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryTab {
    #[default]
    Groom,
    Bride,
}

impl StoryTab {
    pub const ALL: [StoryTab; 2] = [StoryTab::Groom, StoryTab::Bride];
}

/// One entry on the day schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEvent {
    pub time: String,
    pub title: &'static str,
    pub description: String,
    pub location: String,
    /// Illustration served from the public root
    pub image: &'static str,
}

/// Attendants sharing a role, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGroup<'a> {
    pub role: &'a str,
    pub names: Vec<&'a str>,
}

impl SiteContent {
    /// Parse and validate a content document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let required = [
            ("couple.bride", &self.couple.bride),
            ("couple.bride_nickname", &self.couple.bride_nickname),
            ("couple.groom", &self.couple.groom),
            ("couple.groom_nickname", &self.couple.groom_nickname),
            ("ceremony.location", &self.ceremony.location),
            ("reception.location", &self.reception.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::EmptyField(field));
            }
        }

        if let Some(bad) = self.dress_code.colors.iter().find(|c| !is_hex_color(c)) {
            return Err(ContentError::InvalidColor(bad.clone()));
        }

        match url::Url::parse(&self.snap_share.drive_link) {
            Ok(link) if matches!(link.scheme(), "http" | "https") => Ok(()),
            _ => Err(ContentError::InvalidLink(self.snap_share.drive_link.clone())),
        }
    }

    /// "Groom & Bride" nickname line used on the loader and hero.
    pub fn couple_display(&self) -> String {
        format!(
            "{} & {}",
            self.couple.groom_nickname, self.couple.bride_nickname
        )
    }

    /// Whether the narrative section should hide its story tabs.
    pub fn has_shared_narrative(&self) -> bool {
        self.narratives
            .shared
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }

    /// Narrative for a tab. The shared narrative wins when present.
    pub fn narrative_for(&self, tab: StoryTab) -> &str {
        if self.has_shared_narrative() {
            return self.narratives.shared.as_deref().unwrap_or_default();
        }
        let side = match tab {
            StoryTab::Groom => self.narratives.groom.as_deref(),
            StoryTab::Bride => self.narratives.bride.as_deref(),
        };
        side.unwrap_or_default()
    }

    /// Tab label, e.g. "Kenneth's Story".
    pub fn story_label(&self, tab: StoryTab) -> String {
        let name = match tab {
            StoryTab::Groom => &self.couple.groom_nickname,
            StoryTab::Bride => &self.couple.bride_nickname,
        };
        format!("{}'s Story", name)
    }

    /// Day schedule derived from ceremony and reception facts.
    pub fn timeline(&self) -> Vec<TimelineEvent> {
        let couple = format!(
            "{} & {}",
            self.couple.bride_nickname, self.couple.groom_nickname
        );
        vec![
            TimelineEvent {
                time: self.ceremony.guests_time.clone(),
                title: "Guest Arrival",
                description: "Settle in, find your seats, and get ready to celebrate.".to_string(),
                location: self.ceremony.venue.clone(),
                image: "/weddingtimeline/guest-arrival.png",
            },
            TimelineEvent {
                time: self.ceremony.time.clone(),
                title: "Wedding Ceremony",
                description: format!("Celebrate {} as they say \"I do.\"", couple),
                location: self.ceremony.venue.clone(),
                image: "/weddingtimeline/wedding-ceremony.png",
            },
            TimelineEvent {
                time: self.reception.time.clone(),
                title: "Reception",
                description: "Dinner, program, and celebrations with family and friends."
                    .to_string(),
                location: self.reception.venue.clone(),
                image: "/weddingtimeline/reception.png",
            },
            TimelineEvent {
                time: "Send-off".to_string(),
                title: "Send-off",
                description: format!(
                    "A warm send-off for {} as they begin their new chapter together.",
                    couple
                ),
                location: self.reception.venue.clone(),
                image: "/weddingtimeline/send-off.png",
            },
        ]
    }

    /// Ungrouped attendants bucketed by role, in first-appearance order.
    pub fn entourage_by_role(&self) -> Vec<RoleGroup<'_>> {
        let mut groups: Vec<RoleGroup<'_>> = Vec::new();
        for attendant in self.entourage.iter().filter(|a| a.group.is_none()) {
            match groups.iter_mut().find(|g| g.role == attendant.role) {
                Some(group) => group.names.push(&attendant.name),
                None => groups.push(RoleGroup {
                    role: &attendant.role,
                    names: vec![&attendant.name],
                }),
            }
        }
        groups
    }

    /// Attendants belonging to a secondary group.
    pub fn entourage_in(&self, group: AttendantGroup) -> Vec<&Attendant> {
        self.entourage
            .iter()
            .filter(|a| a.group == Some(group))
            .collect()
    }
}

/// Map-service URL for an address.
pub fn maps_link(location: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("q", location)
        .finish();
    format!("{}?{}", MAPS_BASE_URL, query)
}

/// Split narrative text into paragraphs on blank lines.
pub fn story_paragraphs(text: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;

    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(text[s..end].trim());
            }
        } else {
            if start.is_none() {
                start = Some(offset);
            }
            end = offset + line.len();
        }
        offset += line.len();
    }
    if let Some(s) = start {
        paragraphs.push(text[s..end].trim());
    }

    paragraphs
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit())
}
