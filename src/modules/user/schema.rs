use validator::{Validate, ValidationError};

use crate::modules::user::model::app_label;

#[derive(Debug, Validate)]
pub struct CreateAdminRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(custom(function = "validate_app_id"))]
    pub app_id: String,
}

fn validate_app_id(app_id: &str) -> Result<(), ValidationError> {
    if app_label(app_id).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("app_id").with_message("appId must be 1 (PN) or 2 (PS)".into()))
    }
}
