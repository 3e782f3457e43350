use bcrypt::DEFAULT_COST;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

pub async fn hash(password: String) -> Result<String, Error> {
    hash_with_cost(password, DEFAULT_COST).await
}

async fn hash_with_cost(password: String, cost: u32) -> Result<String, Error> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|err| {
            tracing::error!("Password hashing task failed: {}", err);
            Error::UnexpectedError
        })?
        .map_err(|err| {
            tracing::error!("Failed to hash password: {}", err);
            Error::UnexpectedError
        })
}

/// Returns `false` for a wrong password as well as for a hash that cannot be parsed.
pub async fn verify(password: String, password_hash: String) -> bool {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|err| tracing::error!("Password verification task failed: {}", err))
        .ok()
        .and_then(|result| {
            result
                .map_err(|err| tracing::warn!("Failed to verify password hash: {}", err))
                .ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn verifies_the_hashed_password() {
        let hashed = hash_with_cost("secret-password".to_string(), 4)
            .await
            .unwrap();

        assert_ne!(hashed, "secret-password");
        assert!(verify("secret-password".to_string(), hashed.clone()).await);
        assert!(!verify("wrong-password".to_string(), hashed).await);
    }

    #[tokio::test]
    async fn rejects_garbage_hashes() {
        assert!(!verify("secret-password".to_string(), "not-a-hash".to_string()).await);
    }
}
