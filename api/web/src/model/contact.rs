use serde::Deserialize;
use validator::Validate;

use crate::session::ContactSubmission;

use super::validation_messages;

/// Raw contact form as posted. Missing fields read as empty strings.
#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactReqForm {
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    confirm_password: String,
    subject: String,
    message: String,
}

impl ContactReqForm {
    /// Trims everything except the passwords.
    pub fn into_input(self) -> ContactInput {
        ContactInput {
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password,
            confirm_password: self.confirm_password,
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        }
    }
}

#[derive(Validate, Default, Clone)]
pub struct ContactInput {
    #[validate(length(min = 2, message = "First name must be at least 2 characters long"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name must be at least 2 characters long"))]
    pub last_name: String,
    #[validate(contains(pattern = "@", message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    pub password: String,
    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
    #[validate(length(min = 5, message = "Subject must be at least 5 characters long"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters long"))]
    pub message: String,
}

impl ContactInput {
    const FIELDS: [&'static str; 7] = [
        "first_name",
        "last_name",
        "email",
        "password",
        "confirm_password",
        "subject",
        "message",
    ];

    /// Messages for every failed rule, in form order. Empty when valid.
    pub fn errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(err) => validation_messages(&err, &Self::FIELDS),
        }
    }

    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission::new(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.subject,
            &self.message,
        )
    }
}
