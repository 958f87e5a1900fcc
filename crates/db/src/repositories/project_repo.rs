//! Repository for the `projects` table.

use agency_core::catalog::DEFAULT_PROJECT_STATUS;
use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectRow, UpdateProject};

/// Project columns plus everything the embedded client shape needs.
const VIEW_COLUMNS: &str = "p.id, p.name, p.client_user_id, p.start_date, p.deadline, p.budget, \
                            p.status, p.description, p.created_at, p.updated_at, \
                            u.username, u.email, up.full_name, \
                            c.id AS client_id, c.sphere AS client_sphere, \
                            c.company_name AS client_company_name, \
                            c.created_at AS client_created_at, c.updated_at AS client_updated_at";

/// `SELECT` of the project view over `source` (the table or a CTE), aliased `p`.
fn select_from(source: &str) -> String {
    format!(
        "SELECT {VIEW_COLUMNS}
         FROM {source} p
         JOIN users u ON u.id = p.client_user_id
         LEFT JOIN user_profiles up ON up.user_id = p.client_user_id
         LEFT JOIN clients c ON c.user_id = p.client_user_id"
    )
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created view.
    ///
    /// If `status` is `None` in the input, defaults to `planning`.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                INSERT INTO projects (name, client_user_id, deadline, budget, status, description)
                VALUES ($1, $2, $3, $4, $5, COALESCE($6, ''))
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.name)
            .bind(input.client_user)
            .bind(input.deadline)
            .bind(input.budget)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_PROJECT_STATUS))
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("{} WHERE p.id = $1", select_from("projects"));
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("{} ORDER BY p.id", select_from("projects"));
        let rows = sqlx::query_as::<_, ProjectRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Project::from).collect())
    }

    /// Replace a project's writable fields. An absent status or description
    /// keeps the current value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                UPDATE projects SET
                    name = $2,
                    client_user_id = $3,
                    deadline = $4,
                    budget = $5,
                    status = COALESCE($6, status),
                    description = COALESCE($7, description)
                WHERE id = $1
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ProjectRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.client_user)
            .bind(input.deadline)
            .bind(input.budget)
            .bind(&input.status)
            .bind(&input.description)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Project::from))
    }

    /// Delete a project. Cascades to its project services and reviews.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
