use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table (except _sqlx_migrations) must have created_at and updated_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_timestamps(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at"] {
            let result: Option<(String,)> = sqlx::query_as(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = $1
                   AND column_name = $2",
            )
            .bind(table)
            .bind(col)
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// Each foreign key carries the delete rule the data model prescribes.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_foreign_key_delete_rules(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT constraint_name::text, delete_rule::text
         FROM information_schema.referential_constraints
         WHERE constraint_schema = 'public'
         ORDER BY constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let expected = [
        ("fk_clients_user_id", "CASCADE"),
        ("fk_employees_user_id", "CASCADE"),
        ("fk_project_services_employee_user_id", "SET NULL"),
        ("fk_project_services_favour_id", "CASCADE"),
        ("fk_project_services_project_id", "CASCADE"),
        ("fk_projects_client_user_id", "CASCADE"),
        ("fk_reviews_project_id", "CASCADE"),
        ("fk_user_profiles_user_id", "CASCADE"),
    ];

    let actual: Vec<(&str, &str)> = rows
        .iter()
        .map(|(name, rule)| (name.as_str(), rule.as_str()))
        .collect();
    assert_eq!(actual, expected);
}
