//! Login form state and its field validation rules.

use std::fmt;
use validator::{Validate, ValidationErrors};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::credentials::Credentials;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: u64 = 6;

/// Validation rules applied to the raw field values.
///
/// The password minimum must match [`MIN_PASSWORD_LEN`].
#[derive(Validate, Zeroize, ZeroizeOnDrop)]
struct LoginFields {
    #[validate(length(min = 1), email)]
    email: String,
    #[validate(length(min = 6))]
    password: String,
}

/// The two fields of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Hint rendered next to the field when it is invalid and touched.
    pub fn hint(self) -> &'static str {
        match self {
            Field::Email => "Please enter a valid email address",
            Field::Password => "Password is required",
        }
    }
}

/// Why a single field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
    TooShort { min: u64 },
}

/// Per-field validation result for one form snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormValidation {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FormValidation {
    pub fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }
}

/// A single input with its "touched" flag.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormField {
    value: String,
    touched: bool,
}

impl FormField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn touch(&mut self) {
        self.touched = true;
    }
}

/// State of the email/password form on the login view.
#[derive(Clone, Default)]
pub struct LoginForm {
    pub email: FormField,
    pub password: FormField,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an untouched form holding the given values.
    pub fn with_values(email: impl Into<String>, password: impl Into<String>) -> Self {
        let mut form = Self::new();
        form.email.set(email);
        form.password.set(password);
        form
    }

    pub fn field(&self, field: Field) -> &FormField {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Evaluates every field rule against the current values.
    ///
    /// Pure: neither values nor touched flags change.
    pub fn validate(&self) -> FormValidation {
        let fields = LoginFields {
            email: self.email.value().to_owned(),
            password: self.password.value().to_owned(),
        };

        match fields.validate() {
            Ok(()) => FormValidation::default(),
            Err(errors) => FormValidation {
                email: self.field_error(Field::Email, &errors),
                password: self.field_error(Field::Password, &errors),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    /// Marks both fields as touched so their hints become visible.
    pub fn mark_all_as_touched(&mut self) {
        self.email.touch();
        self.password.touch();
    }

    /// Field errors that should currently be shown: invalid and touched.
    pub fn visible_errors(&self) -> Vec<(Field, FieldError)> {
        let validation = self.validate();

        [Field::Email, Field::Password]
            .into_iter()
            .filter(|field| self.field(*field).is_touched())
            .filter_map(|field| validation.error_for(field).map(|e| (field, e)))
            .collect()
    }

    /// Snapshots the current values as credentials for submission.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.email.value(), self.password.value())
    }

    fn field_error(&self, field: Field, errors: &ValidationErrors) -> Option<FieldError> {
        let field_errors = errors.field_errors();
        let reported = field_errors.get(field.name())?;

        if self.field(field).value().is_empty() {
            return Some(FieldError::Required);
        }

        reported.iter().find_map(|e| match &*e.code {
            "email" => Some(FieldError::InvalidEmail),
            "length" => Some(FieldError::TooShort {
                min: MIN_PASSWORD_LEN,
            }),
            _ => None,
        })
    }
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email.value)
            .field("email_touched", &self.email.touched)
            .field("password", &"***")
            .field("password_touched", &self.password.touched)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = LoginForm::with_values("admin@mindfit.com", "secret1");

        let validation = form.validate();

        assert!(validation.is_valid());
        assert!(form.is_valid());
    }

    #[test]
    fn test_bad_email_and_short_password() {
        let form = LoginForm::with_values("bad", "x");

        let validation = form.validate();

        assert_eq!(validation.email, Some(FieldError::InvalidEmail));
        assert_eq!(
            validation.password,
            Some(FieldError::TooShort {
                min: MIN_PASSWORD_LEN
            })
        );
        assert!(!validation.is_valid());
    }

    #[test]
    fn test_empty_fields_are_required() {
        let validation = LoginForm::new().validate();

        assert_eq!(validation.email, Some(FieldError::Required));
        assert_eq!(validation.password, Some(FieldError::Required));
    }

    #[test]
    fn test_password_length_boundary() {
        assert!(
            LoginForm::with_values("a@mindfit.com", "12345")
                .validate()
                .password
                .is_some()
        );
        assert!(
            LoginForm::with_values("a@mindfit.com", "123456")
                .validate()
                .password
                .is_none()
        );
    }

    #[test]
    fn test_validate_does_not_touch_fields() {
        let form = LoginForm::with_values("bad", "x");

        let _ = form.validate();

        assert!(!form.email.is_touched());
        assert!(!form.password.is_touched());
    }

    #[test]
    fn test_visible_errors_only_for_touched_fields() {
        let mut form = LoginForm::with_values("bad", "x");
        assert!(form.visible_errors().is_empty());

        form.email.touch();
        assert_eq!(
            form.visible_errors(),
            vec![(Field::Email, FieldError::InvalidEmail)]
        );

        form.mark_all_as_touched();
        assert_eq!(form.visible_errors().len(), 2);
    }

    #[test]
    fn test_credentials_snapshot() {
        let form = LoginForm::with_values("admin@mindfit.com", "secret1");

        let credentials = form.credentials();

        assert_eq!(credentials.email(), "admin@mindfit.com");
        assert_eq!(credentials.password(), "secret1");
    }

    #[test]
    fn test_hints() {
        assert_eq!(Field::Email.hint(), "Please enter a valid email address");
        assert_eq!(Field::Password.hint(), "Password is required");
    }

    #[test]
    fn test_debug_redacts_password() {
        let form = LoginForm::with_values("admin@mindfit.com", "secret1");

        assert!(!format!("{:?}", form).contains("secret1"));
    }
}
