//! Portfolio Content Endpoints

use super::{ApiClient, ApiError, AWARDS_PATH, CERTIFICATIONS_PATH, PROJECTS_PATH, SKILLS_PATH};
use crate::models::{Award, Certification, Project, Skill};

impl ApiClient {
    pub async fn fetch_skills(&self) -> Result<Vec<Skill>, ApiError> {
        self.get_list(SKILLS_PATH).await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get_list(PROJECTS_PATH).await
    }

    pub async fn fetch_certifications(&self) -> Result<Vec<Certification>, ApiError> {
        self.get_list(CERTIFICATIONS_PATH).await
    }

    pub async fn fetch_awards(&self) -> Result<Vec<Award>, ApiError> {
        self.get_list(AWARDS_PATH).await
    }
}
