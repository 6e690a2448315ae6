//! Wire types for the HTTP API and their mapping to domain types.
//!
//! Request bodies may omit ids, timestamps, `summary`, the child
//! collections and `verified`; missing values take their defaults.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Experience, ReferenceEntry, Resume, Skill, User};
use crate::services::LoginResult;

/// Skill entry on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SkillDto {
    pub id: i64,
    pub resume_id: i64,
    /// Reference table the skill points into
    #[serde(rename = "type")]
    #[schema(example = "language")]
    pub skill_type: String,
    #[schema(example = 1)]
    pub master_id: i64,
    #[schema(example = "expert")]
    pub level: String,
    #[schema(example = 5)]
    pub years: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ExperienceDto {
    pub id: i64,
    pub resume_id: i64,
    #[schema(example = "Acme")]
    pub company: String,
    #[schema(example = "Backend engineer")]
    pub position: String,
    #[schema(example = "2020-04")]
    pub start_date: String,
    pub end_date: String,
    pub description: String,
    pub portfolio_url: String,
}

/// Résumé with its skills and experiences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ResumeDto {
    pub id: i64,
    #[schema(example = 1)]
    pub user_id: i64,
    #[schema(example = "SWE")]
    pub title: String,
    pub summary: String,
    pub skills: Vec<SkillDto>,
    pub experiences: Vec<ExperienceDto>,
    /// RFC3339; ignored on input
    pub created_at: Option<DateTime<Utc>>,
    /// RFC3339; ignored on input
    pub updated_at: Option<DateTime<Utc>>,
    pub verified: bool,
}

/// Lookup table row (`/languages`, `/tools`, `/os`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferenceDto {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Rust")]
    pub name: String,
}

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "username is required"))]
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Minimum 8 characters
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Registered user, without credentials.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// User login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// HS256 JWT
    pub token: String,
}

/// Identity carried by the caller's token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub email: String,
}

impl From<Skill> for SkillDto {
    fn from(skill: Skill) -> Self {
        Self {
            id: skill.id,
            resume_id: skill.resume_id,
            skill_type: skill.skill_type,
            master_id: skill.master_id,
            level: skill.level,
            years: skill.years,
        }
    }
}

impl From<SkillDto> for Skill {
    fn from(dto: SkillDto) -> Self {
        Self {
            id: dto.id,
            resume_id: dto.resume_id,
            skill_type: dto.skill_type,
            master_id: dto.master_id,
            level: dto.level,
            years: dto.years,
        }
    }
}

impl From<Experience> for ExperienceDto {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id,
            resume_id: e.resume_id,
            company: e.company,
            position: e.position,
            start_date: e.start_date,
            end_date: e.end_date,
            description: e.description,
            portfolio_url: e.portfolio_url,
        }
    }
}

impl From<ExperienceDto> for Experience {
    fn from(dto: ExperienceDto) -> Self {
        Self {
            id: dto.id,
            resume_id: dto.resume_id,
            company: dto.company,
            position: dto.position,
            start_date: dto.start_date,
            end_date: dto.end_date,
            description: dto.description,
            portfolio_url: dto.portfolio_url,
        }
    }
}

impl From<Resume> for ResumeDto {
    fn from(resume: Resume) -> Self {
        Self {
            id: resume.id,
            user_id: resume.user_id,
            title: resume.title,
            summary: resume.summary,
            skills: resume.skills.into_iter().map(SkillDto::from).collect(),
            experiences: resume
                .experiences
                .into_iter()
                .map(ExperienceDto::from)
                .collect(),
            created_at: Some(resume.created_at),
            updated_at: Some(resume.updated_at),
            verified: resume.verified,
        }
    }
}

impl From<ResumeDto> for Resume {
    fn from(dto: ResumeDto) -> Self {
        let now = Utc::now();
        Self {
            id: dto.id,
            user_id: dto.user_id,
            title: dto.title,
            summary: dto.summary,
            skills: dto.skills.into_iter().map(Skill::from).collect(),
            experiences: dto.experiences.into_iter().map(Experience::from).collect(),
            created_at: dto.created_at.unwrap_or(now),
            updated_at: dto.updated_at.unwrap_or(now),
            verified: dto.verified,
        }
    }
}

impl From<ReferenceEntry> for ReferenceDto {
    fn from(entry: ReferenceEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
        }
    }
}

impl From<User> for RegisterResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email.into_string(),
        }
    }
}

impl From<LoginResult> for LoginResponse {
    fn from(result: LoginResult) -> Self {
        Self {
            id: result.user.id,
            username: result.user.username,
            email: result.user.email.into_string(),
            token: result.token,
        }
    }
}
