use mongodb::Database;
use thiserror::Error;
use tracing::{info, warn};
use validator::Validate;

use crate::modules::user::{crud::UserCrud, model::AdminUser, schema::CreateAdminRequest};
use crate::services::password::{self, PasswordError};

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Invalid admin details: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Create an admin account, replacing any existing admin with the same email.
pub async fn create_admin(db: &Database, request: CreateAdminRequest) -> Result<AdminUser, AdminError> {
    request.validate()?;

    let password_hash = password::hash_password(&request.password)?;
    let user = AdminUser::new(request.email, password_hash, request.app_id);

    let crud = UserCrud::new(db);

    let removed = crud.delete_by_email(&user.email).await?;
    if removed > 0 {
        warn!(email = %user.email, removed, "replacing existing admin account");
    }

    crud.create(&user).await?;
    info!(email = %user.email, id = %user.id, "admin account created");

    Ok(user)
}
