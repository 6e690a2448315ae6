//! Seed command - Fills the lookup tables with the built-in names, then adds
//! dummy users and résumés with skills and experiences.
//!
//! Every table that already has rows is left alone, so re-running is safe.

use crate::config::{
    Config, SEED_COMPANIES, SEED_EXPERIENCES_PER_RESUME, SEED_LANGUAGES, SEED_OSES,
    SEED_POSITIONS, SEED_RESUME_COUNT, SEED_SKILLS_PER_RESUME, SEED_SKILL_LEVELS, SEED_TOOLS,
    SEED_USER_COUNT, SEED_USER_PASSWORD,
};
use crate::domain::{Email, Experience, NewUser, PasswordHash, ReferenceKind, Resume, Skill};
use crate::errors::AppResult;
use crate::infra::{
    Database, Persistence, ReferenceRepository, ResumeRepository, UnitOfWork, UserRepository,
};

/// Rows inserted per table group by one seed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub references: usize,
    pub users: usize,
    pub resumes: usize,
}

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    // Connects and applies pending migrations
    let db = Database::connect(&config).await?;

    let uow = Persistence::new(db.get_connection());
    let report = seed_all(&uow).await?;

    tracing::info!(
        references = report.references,
        users = report.users,
        resumes = report.resumes,
        "Seeding completed"
    );
    Ok(())
}

/// Seed lookup tables, then users, then résumés owned by those users.
pub async fn seed_all(uow: &dyn UnitOfWork) -> AppResult<SeedReport> {
    let references = seed_references(uow.references().as_ref()).await?;
    let users = seed_users(uow.users().as_ref()).await?;
    let resumes = seed_resumes(
        uow.resumes().as_ref(),
        uow.users().as_ref(),
        uow.references().as_ref(),
    )
    .await?;

    Ok(SeedReport {
        references,
        users,
        resumes,
    })
}

fn seed_names(kind: ReferenceKind) -> &'static [&'static str] {
    match kind {
        ReferenceKind::Language => SEED_LANGUAGES,
        ReferenceKind::Tool => SEED_TOOLS,
        ReferenceKind::Os => SEED_OSES,
    }
}

/// Insert the built-in rows into every empty lookup table.
///
/// Returns the number of rows inserted.
pub async fn seed_references(repo: &dyn ReferenceRepository) -> AppResult<usize> {
    let mut inserted = 0;

    for kind in ReferenceKind::ALL {
        let existing = repo.count(kind).await?;
        if existing > 0 {
            tracing::info!(table = %kind, existing, "skipping non-empty table");
            continue;
        }

        for name in seed_names(kind) {
            repo.create(kind, name.to_string()).await?;
            inserted += 1;
        }
        tracing::info!(table = %kind, rows = seed_names(kind).len(), "seeded");
    }

    Ok(inserted)
}

/// Create [`SEED_USER_COUNT`] dummy users when the users table is empty.
///
/// All of them log in with [`SEED_USER_PASSWORD`].
pub async fn seed_users(repo: &dyn UserRepository) -> AppResult<usize> {
    if !repo.list().await?.is_empty() {
        tracing::info!(table = "users", "skipping non-empty table");
        return Ok(0);
    }

    // One Argon2 run; every dummy user shares the hash
    let password_hash = PasswordHash::new(SEED_USER_PASSWORD)?;

    for n in 1..=SEED_USER_COUNT {
        repo.create(NewUser::new(
            format!("dummy_user_{n:03}"),
            Email::new(format!("user{n:03}@example.com")),
            password_hash.clone(),
        ))
        .await?;
    }

    tracing::info!(table = "users", rows = SEED_USER_COUNT, "seeded");
    Ok(SEED_USER_COUNT)
}

/// Create [`SEED_RESUME_COUNT`] dummy résumés when the résumés table is empty.
///
/// Owners are taken round-robin from the stored users and skills point at
/// stored lookup rows. Without users nothing is inserted.
pub async fn seed_resumes(
    resumes: &dyn ResumeRepository,
    users: &dyn UserRepository,
    references: &dyn ReferenceRepository,
) -> AppResult<usize> {
    if !resumes.list().await?.is_empty() {
        tracing::info!(table = "resumes", "skipping non-empty table");
        return Ok(0);
    }

    let owners: Vec<i64> = users.list().await?.iter().map(|u| u.id).collect();
    if owners.is_empty() {
        tracing::warn!("no users to own seeded résumés");
        return Ok(0);
    }

    let mut masters: Vec<(ReferenceKind, Vec<i64>)> = Vec::new();
    for kind in ReferenceKind::ALL {
        let ids: Vec<i64> = references
            .list(kind)
            .await?
            .into_iter()
            .map(|entry| entry.id)
            .collect();
        if !ids.is_empty() {
            masters.push((kind, ids));
        }
    }

    for i in 0..SEED_RESUME_COUNT {
        resumes.create(dummy_resume(i, &owners, &masters)).await?;
    }

    tracing::info!(table = "resumes", rows = SEED_RESUME_COUNT, "seeded");
    Ok(SEED_RESUME_COUNT)
}

fn dummy_resume(i: usize, owners: &[i64], masters: &[(ReferenceKind, Vec<i64>)]) -> Resume {
    let n = i + 1;
    let mut resume = Resume::new(
        owners[i % owners.len()],
        format!("Dummy resume {n:03}"),
        format!("Seeded résumé number {n}"),
    );

    let kinds = masters
        .iter()
        .cycle()
        .skip(i % masters.len().max(1))
        .take(SEED_SKILLS_PER_RESUME);
    for (j, (kind, ids)) in kinds.enumerate() {
        resume.add_skill(Skill {
            skill_type: kind.skill_type().to_string(),
            master_id: ids[(i * SEED_SKILLS_PER_RESUME + j) % ids.len()],
            level: SEED_SKILL_LEVELS[(i + j) % SEED_SKILL_LEVELS.len()].to_string(),
            years: ((i + j) % 10 + 1) as i32,
            ..Default::default()
        });
    }

    for k in 0..SEED_EXPERIENCES_PER_RESUME {
        let company = SEED_COMPANIES[(i + k) % SEED_COMPANIES.len()];
        let position = SEED_POSITIONS[(i + k) % SEED_POSITIONS.len()];
        let start_year = 2010 + (i + k) % 10;
        resume.add_experience(Experience {
            company: company.to_string(),
            position: position.to_string(),
            start_date: format!("{:04}-{:02}-01", start_year, 1 + i % 12),
            end_date: format!("{:04}-{:02}-01", start_year + 1 + k, 1 + (i + 5) % 12),
            description: format!("{position} at {company}"),
            portfolio_url: format!("https://portfolio.example.com/{n}/{}", k + 1),
            ..Default::default()
        });
    }

    resume
}
