//! Content sections and the editor rules derived from them.
//!
//! A content item's `section` is a free-text discriminator. Known sections
//! map to fixed variants; anything else round-trips verbatim through
//! [`Section::Other`] so operators can introduce new blocks without a
//! schema change.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const SECTION_HOME_HERO: &str = "home_hero";
pub const SECTION_HOME_ADVANTAGE: &str = "home_advantage";
pub const SECTION_ABOUT_HERO: &str = "about_hero";
pub const SECTION_ABOUT_INTRO: &str = "about_intro";
pub const SECTION_CONTACT_INFO: &str = "contact_info";
pub const SECTION_GLOBAL_CONFIG: &str = "global_config";
pub const SECTION_SYSTEM_CONFIG: &str = "system_config";

/// Material Symbols names offered by the icon picker.
pub const ICON_PALETTE: [&str; 22] = [
    "precision_manufacturing",
    "factory",
    "engineering",
    "settings",
    "build",
    "local_shipping",
    "inventory_2",
    "architecture",
    "design_services",
    "verified",
    "security",
    "shield",
    "psychology",
    "smart_toy",
    "location_on",
    "phone",
    "mail",
    "language",
    "schedule",
    "bolt",
    "water_drop",
    "eco",
];

/// Icon that marks a contact item as the company address.
pub const ADDRESS_ICON: &str = "location_on";

/// Section discriminator of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Section {
    HomeHero,
    HomeAdvantage,
    AboutHero,
    AboutIntro,
    ContactInfo,
    GlobalConfig,
    SystemConfig,
    Other(String),
}

impl Section {
    pub fn parse(raw: &str) -> Self {
        match raw {
            SECTION_HOME_HERO => Section::HomeHero,
            SECTION_HOME_ADVANTAGE => Section::HomeAdvantage,
            SECTION_ABOUT_HERO => Section::AboutHero,
            SECTION_ABOUT_INTRO => Section::AboutIntro,
            SECTION_CONTACT_INFO => Section::ContactInfo,
            SECTION_GLOBAL_CONFIG => Section::GlobalConfig,
            SECTION_SYSTEM_CONFIG => Section::SystemConfig,
            other => Section::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Section::HomeHero => SECTION_HOME_HERO,
            Section::HomeAdvantage => SECTION_HOME_ADVANTAGE,
            Section::AboutHero => SECTION_ABOUT_HERO,
            Section::AboutIntro => SECTION_ABOUT_INTRO,
            Section::ContactInfo => SECTION_CONTACT_INFO,
            Section::GlobalConfig => SECTION_GLOBAL_CONFIG,
            Section::SystemConfig => SECTION_SYSTEM_CONFIG,
            Section::Other(raw) => raw,
        }
    }

    /// Sections that hold at most one item.
    pub fn is_singleton(&self) -> bool {
        matches!(
            self,
            Section::HomeHero
                | Section::AboutHero
                | Section::AboutIntro
                | Section::GlobalConfig
                | Section::SystemConfig
        )
    }

    /// Admin tab on which items of this section are edited.
    pub fn tab(&self) -> Option<EditorTab> {
        match self {
            Section::HomeHero | Section::HomeAdvantage => Some(EditorTab::Home),
            Section::AboutHero | Section::AboutIntro => Some(EditorTab::About),
            Section::ContactInfo => Some(EditorTab::Contact),
            Section::GlobalConfig => Some(EditorTab::Global),
            Section::SystemConfig | Section::Other(_) => None,
        }
    }

    fn is_contact_like(&self) -> bool {
        matches!(self, Section::ContactInfo) || self.as_str().contains("contact")
    }

    fn is_hero_like(&self) -> bool {
        matches!(self, Section::HomeHero | Section::AboutHero) || self.as_str().contains("hero")
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Section {
    fn from(raw: &str) -> Self {
        Section::parse(raw)
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Section {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Section::parse(&raw))
    }
}

/// Tabs of the admin content console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorTab {
    Home,
    About,
    Contact,
    Cases,
    Global,
}

impl EditorTab {
    pub const ALL: [EditorTab; 5] = [
        EditorTab::Home,
        EditorTab::About,
        EditorTab::Contact,
        EditorTab::Cases,
        EditorTab::Global,
    ];

    /// Parse a `?tab=` value. Unknown values yield `None` so the caller keeps
    /// its current tab.
    pub fn from_query(raw: &str) -> Option<Self> {
        match raw {
            "home" => Some(EditorTab::Home),
            "about" => Some(EditorTab::About),
            "contact" => Some(EditorTab::Contact),
            "cases" => Some(EditorTab::Cases),
            "global" => Some(EditorTab::Global),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EditorTab::Home => "home",
            EditorTab::About => "about",
            EditorTab::Contact => "contact",
            EditorTab::Cases => "cases",
            EditorTab::Global => "global",
        }
    }
}

/// How the description of an item is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionField {
    /// Single-line subtitle (company English name for the global config).
    Subtitle,
    /// Multi-line body text.
    Body,
}

/// Which inputs the edit form shows for a given item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorFields {
    pub title_label: &'static str,
    pub description: DescriptionField,
    pub icon: bool,
    pub image: bool,
    pub coordinates: bool,
}

/// Whether a contact item describes the company address.
pub fn is_address_item(title: &str, icon: Option<&str>) -> bool {
    title.contains("地址") || title.to_lowercase().contains("address") || icon == Some(ADDRESS_ICON)
}

/// Derive the edit form layout for an item.
pub fn editor_fields(section: &Section, title: &str, icon: Option<&str>) -> EditorFields {
    let is_global = matches!(section, Section::GlobalConfig);

    EditorFields {
        title_label: if is_global { "Company name" } else { "Title" },
        description: if is_global {
            DescriptionField::Subtitle
        } else {
            DescriptionField::Body
        },
        icon: section.is_contact_like() || is_global || matches!(section, Section::HomeAdvantage),
        image: section.is_hero_like() || matches!(section, Section::AboutIntro),
        coordinates: section.is_contact_like() && is_address_item(title, icon),
    }
}
