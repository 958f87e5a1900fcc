//! Integration tests for entity CRUD operations.
//!
//! Exercises the full repository layer against a real database:
//! - Create the full hierarchy (user -> client -> project -> service -> review)
//! - Cascade and set-null delete behaviour
//! - Derived view fields resolved through joins
//! - Unique, foreign key and check constraint violations

use std::str::FromStr;

use agency_db::hooks::UserLifecycle;
use agency_db::models::client::CreateClient;
use agency_db::models::employee::CreateEmployee;
use agency_db::models::favour::CreateFavour;
use agency_db::models::project::{CreateProject, Project};
use agency_db::models::project_service::CreateProjectService;
use agency_db::models::review::CreateReview;
use agency_db::models::user::{CreateUser, User};
use agency_db::models::user_profile::UpdateUserProfile;
use agency_db::repositories::{
    ClientRepo, EmployeeRepo, FavourRepo, ProjectRepo, ProjectServiceRepo, ReviewRepo,
    UserProfileRepo, UserRepo,
};
use assert_matches::assert_matches;
use chrono::{Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn new_user(pool: &PgPool, username: &str) -> User {
    UserLifecycle::default()
        .create_user(
            pool,
            &CreateUser {
                username: username.to_string(),
                email: format!("{username}@example.com"),
                password_hash: "$argon2id$test".to_string(),
            },
        )
        .await
        .unwrap()
}

fn new_project(client_user: i64, name: &str) -> CreateProject {
    CreateProject {
        name: name.to_string(),
        client_user,
        deadline: (Utc::now() + Duration::days(30)).date_naive(),
        budget: dec("50000.00"),
        status: Some("In progress".to_string()),
        description: None,
    }
}

fn new_favour(name: &str) -> CreateFavour {
    CreateFavour {
        name: name.to_string(),
        category: "Development".to_string(),
        description: None,
        price: dec("50000.00"),
    }
}

fn new_service(project: i64, favour: i64, employee: Option<i64>) -> CreateProjectService {
    CreateProjectService {
        project,
        favour,
        employee,
        status: None,
        end_date: None,
        hours_spent: Some(dec("10.50")),
        notes: None,
    }
}

fn new_review(project: i64) -> CreateReview {
    CreateReview {
        project,
        rating: Some(5),
        feedback: "Great work!".to_string(),
        is_published: false,
    }
}

async fn new_project_for(pool: &PgPool, username: &str) -> Project {
    let user = new_user(pool, username).await;
    ProjectRepo::create(pool, &new_project(user.id, "Website"))
        .await
        .unwrap()
}

fn db_error_constraint(err: sqlx::Error) -> String {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint().unwrap_or_default().to_string(),
        other => panic!("expected database error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Hierarchy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let client_user = new_user(&pool, "clientuser").await;
    let client = ClientRepo::create(
        &pool,
        &CreateClient {
            user: client_user.id,
            sphere: "IT".to_string(),
            company_name: "Test Client".to_string(),
        },
    )
    .await
    .unwrap();
    assert_eq!(client.user, client_user.id);
    assert_eq!(client.sphere, "IT");
    assert_eq!(client.company_name, "Test Client");
    assert_eq!(client.name, "clientuser");
    assert_eq!(client.email, "clientuser@example.com");

    let project = ProjectRepo::create(&pool, &new_project(client_user.id, "Website"))
        .await
        .unwrap();
    assert_eq!(project.name, "Website");
    assert_eq!(project.budget, dec("50000.00"));
    assert_eq!(project.status, "In progress");
    assert_eq!(project.description, "");
    assert_eq!(project.client.as_ref().map(|c| c.id), Some(client.id));

    let favour = FavourRepo::create(&pool, &new_favour("Site development"))
        .await
        .unwrap();

    let service = ProjectServiceRepo::create(&pool, &new_service(project.id, favour.id, None))
        .await
        .unwrap();
    assert_eq!(service.status, "in_progress");
    assert_eq!(service.hours_spent, dec("10.50"));
    assert_eq!(service.project_name, "Website");
    assert_eq!(service.favour_name, "Site development");
    assert!(service.employee.is_none());
    assert!(service.employee_name.is_none());

    let review = ReviewRepo::create(&pool, &new_review(project.id)).await.unwrap();
    assert_eq!(review.rating, 5);
    assert_eq!(review.feedback, "Great work!");

    let fetched = ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.project, project.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_without_client_record_embeds_null(pool: PgPool) {
    let project = new_project_for(&pool, "noclient").await;
    assert!(project.client.is_none());
    assert!(project.client_user > 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_is_insertion_ordered(pool: PgPool) {
    for name in ["Zeta", "Alpha", "Mid"] {
        FavourRepo::create(&pool, &new_favour(name)).await.unwrap();
    }
    let names: Vec<String> = FavourRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_project_keeps_status_when_absent(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;

    let mut input = new_project(project.client_user, "Renamed");
    input.status = None;
    input.budget = dec("12.34");

    let updated = ProjectRepo::update(&pool, project.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.budget, dec("12.34"));
    assert_eq!(updated.status, "In progress");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_unknown_id_returns_none(pool: PgPool) {
    let result = FavourRepo::update(&pool, 999_999, &new_favour("Nope"))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_service_clears_employee(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    let worker = new_user(&pool, "worker").await;
    let favour = FavourRepo::create(&pool, &new_favour("Design")).await.unwrap();
    let service =
        ProjectServiceRepo::create(&pool, &new_service(project.id, favour.id, Some(worker.id)))
            .await
            .unwrap();
    assert_eq!(service.employee, Some(worker.id));
    assert_eq!(service.employee_name.as_deref(), Some("worker"));

    let mut input = new_service(project.id, favour.id, None);
    input.status = Some("completed".to_string());
    input.hours_spent = None;
    let updated = ProjectServiceRepo::update(&pool, service.id, &input)
        .await
        .unwrap()
        .unwrap();
    assert!(updated.employee.is_none());
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.hours_spent, dec("10.50"));
}

// ---------------------------------------------------------------------------
// Derived identity
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_review_client_identity_follows_profile(pool: PgPool) {
    let project = new_project_for(&pool, "sofia").await;
    let review = ReviewRepo::create(&pool, &new_review(project.id)).await.unwrap();

    // No full name yet: fall back to the username.
    assert_eq!(review.client_name, "sofia");
    assert_eq!(review.client_email, "sofia@example.com");
    assert_eq!(review.project_name, "Website");

    let profile = UserProfileRepo::find_by_user_id(&pool, project.client_user)
        .await
        .unwrap()
        .unwrap();
    UserProfileRepo::update(
        &pool,
        profile.id,
        &UpdateUserProfile {
            full_name: Some("Sofia Filatova".to_string()),
            birthday: NaiveDate::from_ymd_opt(1990, 5, 17),
        },
    )
    .await
    .unwrap()
    .unwrap();

    let review = ReviewRepo::find_by_id(&pool, review.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(review.client_name, "Sofia Filatova");
    assert_eq!(review.client_email, "sofia@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_name_uses_profile(pool: PgPool) {
    let user = new_user(&pool, "dev").await;
    let profile = UserProfileRepo::find_by_user_id(&pool, user.id)
        .await
        .unwrap()
        .unwrap();
    UserProfileRepo::update(
        &pool,
        profile.id,
        &UpdateUserProfile {
            full_name: Some("Ivan Petrov".to_string()),
            birthday: None,
        },
    )
    .await
    .unwrap();

    let employee = EmployeeRepo::create(
        &pool,
        &CreateEmployee {
            user: user.id,
            position: "Developer".to_string(),
            start_work_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        },
    )
    .await
    .unwrap();
    assert_eq!(employee.name, "Ivan Petrov");
    assert_eq!(employee.email, "dev@example.com");
}

// ---------------------------------------------------------------------------
// Delete behaviour
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_project_delete_cascades_to_services_and_reviews(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    let favour = FavourRepo::create(&pool, &new_favour("SEO")).await.unwrap();
    let service = ProjectServiceRepo::create(&pool, &new_service(project.id, favour.id, None))
        .await
        .unwrap();
    let review = ReviewRepo::create(&pool, &new_review(project.id)).await.unwrap();

    assert!(ProjectRepo::delete(&pool, project.id).await.unwrap());

    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_none());
    assert!(ProjectServiceRepo::find_by_id(&pool, service.id)
        .await
        .unwrap()
        .is_none());
    assert!(ReviewRepo::find_by_id(&pool, review.id).await.unwrap().is_none());
    // The favour itself survives.
    assert!(FavourRepo::find_by_id(&pool, favour.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_employee_user_nulls_assignment(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    let worker = new_user(&pool, "worker").await;
    EmployeeRepo::create(
        &pool,
        &CreateEmployee {
            user: worker.id,
            position: "Designer".to_string(),
            start_work_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        },
    )
    .await
    .unwrap();
    let favour = FavourRepo::create(&pool, &new_favour("Logo")).await.unwrap();
    let service =
        ProjectServiceRepo::create(&pool, &new_service(project.id, favour.id, Some(worker.id)))
            .await
            .unwrap();

    assert!(UserRepo::delete(&pool, worker.id).await.unwrap());

    let survivor = ProjectServiceRepo::find_by_id(&pool, service.id)
        .await
        .unwrap()
        .expect("assignment should survive its employee");
    assert!(survivor.employee.is_none());
    assert!(survivor.employee_name.is_none());
    assert!(EmployeeRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deleting_client_user_cascades(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    ClientRepo::create(
        &pool,
        &CreateClient {
            user: project.client_user,
            sphere: "Art".to_string(),
            company_name: "Studio".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(UserRepo::delete(&pool, project.client_user).await.unwrap());

    assert!(ClientRepo::list(&pool).await.unwrap().is_empty());
    assert!(ProjectRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_favour_delete_cascades_to_services(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    let favour = FavourRepo::create(&pool, &new_favour("Ads")).await.unwrap();
    ProjectServiceRepo::create(&pool, &new_service(project.id, favour.id, None))
        .await
        .unwrap();

    assert!(FavourRepo::delete(&pool, favour.id).await.unwrap());
    assert!(ProjectServiceRepo::list(&pool).await.unwrap().is_empty());
    assert!(ProjectRepo::find_by_id(&pool, project.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_unknown_id_returns_false(pool: PgPool) {
    assert!(!ClientRepo::delete(&pool, 999_999).await.unwrap());
    assert!(!ReviewRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Constraint violations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_client_for_same_user_violates_unique(pool: PgPool) {
    let user = new_user(&pool, "twice").await;
    let input = CreateClient {
        user: user.id,
        sphere: "IT".to_string(),
        company_name: "One".to_string(),
    };
    ClientRepo::create(&pool, &input).await.unwrap();

    let err = ClientRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(db_error_constraint(err), "uq_clients_user_id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_with_unknown_favour_violates_fk(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    let err = ProjectServiceRepo::create(&pool, &new_service(project.id, 999_999, None))
        .await
        .unwrap_err();
    assert_eq!(db_error_constraint(err), "fk_project_services_favour_id");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rating_out_of_range_violates_check(pool: PgPool) {
    let project = new_project_for(&pool, "owner").await;
    let mut input = new_review(project.id);
    input.rating = Some(9);

    let err = ReviewRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(db_error_constraint(err), "ck_reviews_rating_range");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_budget_violates_check(pool: PgPool) {
    let user = new_user(&pool, "owner").await;
    let mut input = new_project(user.id, "Broke");
    input.budget = dec("-1");

    let err = ProjectRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, sqlx::Error::Database(_));
}
