//! Repository for the `employees` table.

use agency_core::types::DbId;
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, EmployeeRow, UpdateEmployee};

const VIEW_COLUMNS: &str = "e.id, e.user_id, e.position, e.start_work_date, e.created_at, \
                            e.updated_at, u.username, u.email, p.full_name";

/// `SELECT` of the employee view over `source` (the table or a CTE), aliased `e`.
fn select_from(source: &str) -> String {
    format!(
        "SELECT {VIEW_COLUMNS}
         FROM {source} e
         JOIN users u ON u.id = e.user_id
         LEFT JOIN user_profiles p ON p.user_id = e.user_id"
    )
}

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                INSERT INTO employees (user_id, position, start_work_date)
                VALUES ($1, $2, $3)
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(input.user)
            .bind(&input.position)
            .bind(input.start_work_date)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("{} WHERE e.id = $1", select_from("employees"));
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!("{} ORDER BY e.id", select_from("employees"));
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    /// Replace all writable fields. Returns `None` if the id is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "WITH written AS (
                UPDATE employees SET
                    user_id = $2,
                    position = $3,
                    start_work_date = $4
                WHERE id = $1
                RETURNING *
             )
             {}",
            select_from("written")
        );
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .bind(input.user)
            .bind(&input.position)
            .bind(input.start_work_date)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Employee::from))
    }

    /// Delete an employee record. The user account and its assignments are
    /// untouched. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
