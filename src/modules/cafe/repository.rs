use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{types::Json, PgExecutor};
use ulid::Ulid;

use crate::utils::pagination::{Paginated, Pagination};

pub const DEFAULT_CAFE_IMAGE: &str = "/static/images/default-cafe.jpg";

const CAFE_COLUMNS: &str = "
    cafes.id,
    cafes.name,
    cafes.description,
    cafes.url,
    cafes.address,
    cafes.city_code,
    cities.name AS city_name,
    cities.state AS city_state,
    cafes.image_url,
    cafes.created_at,
    cafes.updated_at
";

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Cafe {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub address: String,
    pub city_code: String,
    pub city_name: String,
    pub city_state: String,
    pub image_url: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

impl Cafe {
    /// `"City, ST"`
    pub fn location(&self) -> String {
        format!("{}, {}", self.city_name, self.city_state)
    }
}

#[derive(Serialize, Clone, Debug)]
pub struct CafeWithLocation {
    #[serde(flatten)]
    pub cafe: Cafe,
    pub location: String,
}

impl From<Cafe> for CafeWithLocation {
    fn from(cafe: Cafe) -> Self {
        let location = cafe.location();
        Self { cafe, location }
    }
}

pub struct CafePayload {
    pub name: String,
    pub description: String,
    pub url: String,
    pub address: String,
    pub city_code: String,
    pub image_url: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(e: E, payload: CafePayload) -> Result<Cafe, Error> {
    sqlx::query_as::<_, Cafe>(&format!(
        "
        WITH inserted AS (
            INSERT INTO cafes (id, name, description, url, address, city_code, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
        )
        SELECT {CAFE_COLUMNS}
        FROM inserted AS cafes
        INNER JOIN cities ON cities.code = cafes.city_code
        "
    ))
    .bind(Ulid::new().to_string())
    .bind(&payload.name)
    .bind(payload.description)
    .bind(payload.url)
    .bind(payload.address)
    .bind(payload.city_code)
    .bind(payload.image_url)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to create cafe {}: {}",
            payload.name,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Cafe>, Error> {
    sqlx::query_as::<_, Cafe>(&format!(
        "
        SELECT {CAFE_COLUMNS}
        FROM cafes
        INNER JOIN cities ON cities.code = cafes.city_code
        WHERE cafes.id = $1
        "
    ))
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while fetching cafe with id {}: {}", id, err);
        Error::UnexpectedError
    })
}

#[derive(Deserialize)]
struct CafePage {
    items: Vec<Cafe>,
    total: i64,
}

pub async fn find_many<'e, E: PgExecutor<'e>>(
    e: E,
    pagination: Pagination,
) -> Result<Paginated<Cafe>, Error> {
    let page = sqlx::query_scalar::<_, Json<CafePage>>(&format!(
        "
        WITH filtered_data AS (
            SELECT {CAFE_COLUMNS}
            FROM cafes
            INNER JOIN cities ON cities.code = cafes.city_code
            ORDER BY cafes.name
            LIMIT $1
            OFFSET $2
        ),
        total_count AS (
            SELECT COUNT(id) AS total_rows
            FROM cafes
        )
        SELECT JSONB_BUILD_OBJECT(
            'items', COALESCE(
                JSONB_AGG(TO_JSONB(filtered_data) ORDER BY filtered_data.name),
                '[]'::JSONB
            ),
            'total', (SELECT total_rows FROM total_count)
        )
        FROM filtered_data
        "
    ))
    .bind(pagination.limit())
    .bind(pagination.offset())
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to fetch many cafes: {}", err);
        Error::UnexpectedError
    })?
    .0;

    Ok(Paginated::new(
        page.items,
        page.total as u32,
        pagination.page,
        pagination.per_page,
    ))
}

pub async fn find_many_liked_by_user<'e, E: PgExecutor<'e>>(
    e: E,
    user_id: String,
) -> Result<Vec<Cafe>, Error> {
    sqlx::query_as::<_, Cafe>(&format!(
        "
        SELECT {CAFE_COLUMNS}
        FROM cafes
        INNER JOIN cities ON cities.code = cafes.city_code
        INNER JOIN likes ON likes.cafe_id = cafes.id
        WHERE likes.user_id = $1
        ORDER BY cafes.name
        "
    ))
    .bind(&user_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while fetching cafes liked by user {}: {}",
            user_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: CafePayload,
) -> Result<Option<Cafe>, Error> {
    sqlx::query_as::<_, Cafe>(&format!(
        "
        WITH updated AS (
            UPDATE cafes SET
                name = $1,
                description = $2,
                url = $3,
                address = $4,
                city_code = $5,
                image_url = $6,
                updated_at = NOW()
            WHERE id = $7
            RETURNING *
        )
        SELECT {CAFE_COLUMNS}
        FROM updated AS cafes
        INNER JOIN cities ON cities.code = cafes.city_code
        "
    ))
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.url)
    .bind(payload.address)
    .bind(payload.city_code)
    .bind(payload.image_url)
    .bind(&id)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!("Failed to update cafe by id: {} {}", id, err);
        Error::UnexpectedError
    })
}
