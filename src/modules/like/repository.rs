use sqlx::PgExecutor;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn has_liked<'e, E: PgExecutor<'e>>(
    e: E,
    cafe_id: String,
    user_id: String,
) -> Result<bool, Error> {
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS (SELECT 1 FROM likes WHERE cafe_id = $1 AND user_id = $2)",
    )
    .bind(&cafe_id)
    .bind(&user_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Failed to check whether user {} likes cafe {}: {}",
            user_id,
            cafe_id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn like_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    cafe_id: String,
    user_id: String,
) -> Result<(), Error> {
    match sqlx::query(
        "
        INSERT INTO likes (user_id, cafe_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id, cafe_id) DO NOTHING
        ",
    )
    .bind(&user_id)
    .bind(&cafe_id)
    .execute(e)
    .await
    {
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::error!("Failed to like cafe by id: {} {}", cafe_id, err);
            Err(Error::UnexpectedError)
        }
    }
}

pub async fn unlike_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    cafe_id: String,
    user_id: String,
) -> Result<(), Error> {
    let result = sqlx::query("DELETE FROM likes WHERE cafe_id = $1 AND user_id = $2")
        .bind(&cafe_id)
        .bind(&user_id)
        .execute(e)
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(err) => {
            tracing::error!("Failed to unlike cafe by id: {} {}", cafe_id, err);
            Err(Error::UnexpectedError)
        }
    }
}
