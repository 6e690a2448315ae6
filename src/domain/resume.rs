//! Résumé aggregate: the résumé root with its skill and experience
//! collections.

use chrono::{DateTime, Utc};

/// A skill entry. `skill_type` names the reference table `master_id`
/// points into (`language`, `tool` or `os`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Skill {
    pub id: i64,
    pub resume_id: i64,
    pub skill_type: String,
    pub master_id: i64,
    pub level: String,
    pub years: i32,
}

impl Skill {
    pub fn is_valid(&self) -> bool {
        !self.skill_type.is_empty() && !self.level.is_empty() && self.years >= 0
    }
}

/// A work history entry. Dates are free-form strings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Experience {
    pub id: i64,
    pub resume_id: i64,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub portfolio_url: String,
}

impl Experience {
    pub fn is_valid(&self) -> bool {
        !self.company.is_empty() && !self.start_date.is_empty()
    }
}

/// Résumé owned by a user (referenced by id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub summary: String,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub verified: bool,
}

impl Resume {
    /// Unsaved résumé with empty collections.
    pub fn new(user_id: i64, title: impl Into<String>, summary: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            user_id,
            title: title.into(),
            summary: summary.into(),
            skills: Vec::new(),
            experiences: Vec::new(),
            created_at: now,
            updated_at: now,
            verified: false,
        }
    }

    /// Title present, owner set, and every child valid.
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty()
            && self.user_id != 0
            && self.skills.iter().all(Skill::is_valid)
            && self.experiences.iter().all(Experience::is_valid)
    }

    /// Append without dedup or validation.
    pub fn add_skill(&mut self, skill: Skill) {
        self.skills.push(skill);
    }

    /// Drop every skill with `skill_id`; unknown ids are a no-op.
    pub fn remove_skill(&mut self, skill_id: i64) {
        self.skills.retain(|s| s.id != skill_id);
    }

    pub fn add_experience(&mut self, experience: Experience) {
        self.experiences.push(experience);
    }

    pub fn remove_experience(&mut self, experience_id: i64) {
        self.experiences.retain(|e| e.id != experience_id);
    }
}
