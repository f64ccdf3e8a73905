//! Section identifiers

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// One of the nine page regions.
///
/// The string form is the element id in the rendered markup and the anchor
/// fragment the navigation links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    Skills,
    Projects,
    Experience,
    Achievements,
    Strengths,
    Education,
    Contact,
    About,
}

impl SectionId {
    /// Every section, in the order the watcher looks them up at mount.
    pub const ALL: [SectionId; 9] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Achievements,
        SectionId::Strengths,
        SectionId::Education,
        SectionId::Contact,
        SectionId::About,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Experience => "experience",
            SectionId::Achievements => "achievements",
            SectionId::Strengths => "strengths",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
            SectionId::About => "about",
        }
    }

    /// In-page fragment link, e.g. `#projects`.
    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Whether the navigation bar has an entry for this section.
    pub fn is_navigable(self) -> bool {
        !matches!(self, SectionId::Achievements | SectionId::Strengths)
    }

    /// Position in [`SectionId::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// Width and alignment of the section's content column.
    pub fn container_class(self) -> &'static str {
        match self {
            SectionId::Home | SectionId::Skills | SectionId::Projects => "max-w-6xl mx-auto",
            SectionId::Contact => "max-w-5xl mx-auto text-center",
            _ => "max-w-5xl mx-auto",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| Error::config_invalid(format!("unknown section id '{s}'")))
    }
}
