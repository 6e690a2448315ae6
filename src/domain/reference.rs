//! Reference lookup rows: languages, tools and operating systems.

use std::fmt;

use crate::config::{SKILL_TYPE_LANGUAGE, SKILL_TYPE_OS, SKILL_TYPE_TOOL};

/// Which lookup table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Language,
    Tool,
    Os,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Language,
        ReferenceKind::Tool,
        ReferenceKind::Os,
    ];

    /// The skill `type` value that points into this table.
    pub fn skill_type(&self) -> &'static str {
        match self {
            ReferenceKind::Language => SKILL_TYPE_LANGUAGE,
            ReferenceKind::Tool => SKILL_TYPE_TOOL,
            ReferenceKind::Os => SKILL_TYPE_OS,
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.skill_type())
    }
}

/// An id/name row from one of the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub id: i64,
    pub name: String,
}

pub type Language = ReferenceEntry;
pub type Tool = ReferenceEntry;
pub type Os = ReferenceEntry;
