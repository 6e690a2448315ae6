//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::{
    CurrentUserResponse, ExperienceDto, LoginRequest, LoginResponse, ReferenceDto,
    RegisterRequest, RegisterResponse, ResumeDto, SkillDto,
};
use crate::api::handlers::{auth_handler, reference_handler, resume_handler};
use crate::errors::ErrorResponse;

/// OpenAPI documentation for the résumé API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Resume API",
        version = "0.1.0",
        description = "Résumé management with skills, work history and account registration"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        auth_handler::me,
        // Résumé endpoints
        resume_handler::create_resume,
        resume_handler::list_resumes,
        resume_handler::get_resume,
        resume_handler::update_resume,
        resume_handler::delete_resume,
        resume_handler::list_user_resumes,
        // Lookup tables
        reference_handler::list_languages,
        reference_handler::list_tools,
        reference_handler::list_os,
    ),
    components(
        schemas(
            ResumeDto,
            SkillDto,
            ExperienceDto,
            ReferenceDto,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            CurrentUserResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Resumes", description = "Résumé CRUD with skills and experiences"),
        (name = "Reference", description = "Language, tool and OS lookup tables")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /login"))
                        .build(),
                ),
            );
        }
    }
}
