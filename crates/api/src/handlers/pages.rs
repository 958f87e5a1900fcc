//! Server-rendered list pages.

use agency_core::catalog::{is_known_project_status, project_status_label};
use agency_db::models::client::Client;
use agency_db::models::project::Project;
use agency_db::repositories::{ClientRepo, ProjectRepo};
use axum::extract::State;
use axum::response::Html;
use serde::Serialize;
use tera::Context;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
struct ClientLine {
    name: String,
    email: String,
    company_name: String,
    sphere: String,
}

impl From<Client> for ClientLine {
    fn from(client: Client) -> Self {
        Self {
            name: client.name,
            email: client.email,
            company_name: client.company_name,
            sphere: client.sphere,
        }
    }
}

/// Dates are formatted here; the template engine is built without its
/// date filters.
#[derive(Debug, Serialize)]
struct ProjectLine {
    name: String,
    client: Option<String>,
    start_date: String,
    deadline: String,
    status: String,
    known_status: bool,
}

impl From<Project> for ProjectLine {
    fn from(project: Project) -> Self {
        Self {
            status: project_status_label(&project.status).to_string(),
            known_status: is_known_project_status(&project.status),
            name: project.name,
            client: project.client.map(|c| c.company_name),
            start_date: project.start_date.format("%Y-%m-%d").to_string(),
            deadline: project.deadline.format("%Y-%m-%d").to_string(),
        }
    }
}

/// GET /clients
pub async fn clients_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let clients: Vec<ClientLine> = ClientRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(ClientLine::from)
        .collect();

    let mut context = Context::new();
    context.insert("clients", &clients);
    let body = state.templates.render("clients.html", &context)?;
    Ok(Html(body))
}

/// GET /projects
pub async fn projects_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    let projects: Vec<ProjectLine> = ProjectRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(ProjectLine::from)
        .collect();

    let mut context = Context::new();
    context.insert("projects", &projects);
    let body = state.templates.render("projects.html", &context)?;
    Ok(Html(body))
}
