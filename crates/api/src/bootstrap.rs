//! Startup tasks that run once before the server begins accepting requests.

use coursehub_db::models::user::CreateUser;
use coursehub_db::repositories::UserRepo;
use coursehub_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::ServerConfig;

/// Seed the initial admin account.
///
/// Runs only when `ADMIN_PASSWORD` is set and no admin account exists yet.
/// A database that already has an admin is left untouched, so the seed is
/// safe to keep configured across restarts.
pub async fn seed_admin(pool: &DbPool, config: &ServerConfig) -> Result<(), sqlx::Error> {
    let Some(password) = &config.admin_seed.password else {
        tracing::debug!("ADMIN_PASSWORD not set, skipping admin seed");
        return Ok(());
    };

    if UserRepo::has_admin(pool).await? {
        tracing::debug!("Admin account already exists, skipping admin seed");
        return Ok(());
    }

    let password_hash = match hash_password(password) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(error = %e, "Failed to hash admin seed password");
            return Ok(());
        }
    };

    let admin = UserRepo::create(
        pool,
        &CreateUser {
            username: config.admin_seed.username.clone(),
            email: config.admin_seed.email.clone(),
            password_hash,
            full_name: None,
            is_admin: true,
        },
    )
    .await?;

    tracing::info!(user_id = admin.id, username = %admin.username, "Seeded admin account");
    Ok(())
}
