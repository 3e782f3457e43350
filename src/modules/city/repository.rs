use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct City {
    pub code: String,
    pub name: String,
    pub state: String,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

/// Cities ordered by name, as offered when picking a cafe's location.
pub async fn find_many<'e, E: PgExecutor<'e>>(e: E) -> Result<Vec<City>, Error> {
    sqlx::query_as::<_, City>("SELECT code, name, state FROM cities ORDER BY name")
        .fetch_all(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch cities: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_by_code<'e, E: PgExecutor<'e>>(
    e: E,
    code: String,
) -> Result<Option<City>, Error> {
    sqlx::query_as::<_, City>("SELECT code, name, state FROM cities WHERE code = $1")
        .bind(&code)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching city {}: {}", code, err);
            Error::UnexpectedError
        })
}
