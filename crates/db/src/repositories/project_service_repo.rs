//! Repository for the `project_services` table.

use agency_core::catalog::DEFAULT_ASSIGNMENT_STATUS;
use agency_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::project_service::{
    CreateProjectService, ProjectService, ProjectServiceRow, UpdateProjectService,
};

const VIEW_COLUMNS: &str = "ps.id, ps.project_id, ps.favour_id, ps.employee_user_id, ps.status, \
                            ps.start_date, ps.end_date, ps.hours_spent, ps.notes, \
                            ps.created_at, ps.updated_at, \
                            p.name AS project_name, f.name AS favour_name, \
                            eu.username AS employee_username, ep.full_name AS employee_full_name";

/// `SELECT` of the assignment view over `source` (the table or a CTE), aliased `ps`.
fn select_from(source: &str) -> String {
    format!(
        "SELECT {VIEW_COLUMNS}
         FROM {source} ps
         JOIN projects p ON p.id = ps.project_id
         JOIN favours f ON f.id = ps.favour_id
         LEFT JOIN users eu ON eu.id = ps.employee_user_id
         LEFT JOIN user_profiles ep ON ep.user_id = ps.employee_user_id"
    )
}

/// Provides CRUD operations for project services.
pub struct ProjectServiceRepo;

impl ProjectServiceRepo {
    /// Insert a new assignment. `start_date` is set to today by the database,
    /// `status` defaults to `in_progress` and `hours_spent` to zero.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectService,
    ) -> Result<ProjectService, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                INSERT INTO project_services
                    (project_id, favour_id, employee_user_id, status, end_date, hours_spent, notes)
                VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, ''))
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ProjectServiceRow>(&query)
            .bind(input.project)
            .bind(input.favour)
            .bind(input.employee)
            .bind(input.status.as_deref().unwrap_or(DEFAULT_ASSIGNMENT_STATUS))
            .bind(input.end_date)
            .bind(input.hours_spent.unwrap_or(Decimal::ZERO))
            .bind(&input.notes)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectService>, sqlx::Error> {
        let query = format!("{} WHERE ps.id = $1", select_from("project_services"));
        let row = sqlx::query_as::<_, ProjectServiceRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectService::from))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectService>, sqlx::Error> {
        let query = format!("{} ORDER BY ps.id", select_from("project_services"));
        let rows = sqlx::query_as::<_, ProjectServiceRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(ProjectService::from).collect())
    }

    /// Replace an assignment's writable fields.
    ///
    /// `employee` and `end_date` are always replaced (absent clears them);
    /// absent `status`, `hours_spent` and `notes` keep their current values.
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProjectService,
    ) -> Result<Option<ProjectService>, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                UPDATE project_services SET
                    project_id = $2,
                    favour_id = $3,
                    employee_user_id = $4,
                    status = COALESCE($5, status),
                    end_date = $6,
                    hours_spent = COALESCE($7, hours_spent),
                    notes = COALESCE($8, notes)
                WHERE id = $1
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, ProjectServiceRow>(&query)
            .bind(id)
            .bind(input.project)
            .bind(input.favour)
            .bind(input.employee)
            .bind(&input.status)
            .bind(input.end_date)
            .bind(input.hours_spent)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(ProjectService::from))
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
