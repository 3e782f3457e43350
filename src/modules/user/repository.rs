use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use ulid::Ulid;

pub const DEFAULT_USER_IMAGE: &str = "/static/images/default-pic.png";

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
    pub admin: bool,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub struct CreateUserPayload {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub image_url: String,
    pub password_hash: String,
}

pub struct UpdateUserPayload {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug)]
pub enum Error {
    UsernameTaken,
    UnexpectedError,
}

pub async fn create<'e, E>(db: E, payload: CreateUserPayload) -> Result<User>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(
        "
        INSERT INTO users (
            id,
            username,
            email,
            first_name,
            last_name,
            description,
            image_url,
            password_hash
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(&payload.username)
    .bind(payload.email)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.description)
    .bind(payload.image_url)
    .bind(payload.password_hash)
    .fetch_one(db)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => Error::UsernameTaken,
        err => {
            tracing::error!(
                "Error occured while creating user account {}: {}",
                payload.username,
                err
            );
            Error::UnexpectedError
        }
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(&id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
            Error::UnexpectedError
        })
}

pub async fn find_by_username<'e, E: PgExecutor<'e>>(
    e: E,
    username: String,
) -> Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(&username)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while fetching user with username {}: {}",
                username,
                err
            );
            Error::UnexpectedError
        })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateUserPayload,
) -> Result<User> {
    sqlx::query_as::<_, User>(
        "
            UPDATE users SET
                email = $1,
                first_name = $2,
                last_name = $3,
                description = $4,
                image_url = $5,
                updated_at = NOW()
            WHERE
                id = $6
            RETURNING *
        ",
    )
    .bind(payload.email)
    .bind(payload.first_name)
    .bind(payload.last_name)
    .bind(payload.description)
    .bind(payload.image_url)
    .bind(&id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a user by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub fn is_admin(user: &User) -> bool {
    user.admin
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::Utc;

    fn user() -> User {
        User {
            id: Ulid::new().to_string(),
            username: "hackbright".to_string(),
            admin: false,
            email: "ada@example.com".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            description: String::new(),
            image_url: DEFAULT_USER_IMAGE.to_string(),
            password_hash: "$2b$12$secret".to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: None,
        }
    }

    #[test]
    fn builds_full_name() {
        assert_eq!(user().full_name(), "Ada Lovelace");
    }

    #[test]
    fn never_serializes_password_hash() {
        let value = serde_json::to_value(user()).unwrap();

        assert!(value.get("password_hash").is_none());
        assert_eq!(value["username"], "hackbright");
    }

    #[test]
    fn admin_flag_decides_admin() {
        let mut user = user();
        assert!(!is_admin(&user));

        user.admin = true;
        assert!(is_admin(&user));
    }
}
