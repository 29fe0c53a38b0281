use actix_web::http::StatusCode;

#[derive(Debug)]
pub enum Error {
    /// Indicates that, when changing their password, the user chose a new
    /// password whose digest matches one of their recently-used passwords,
    /// within the reuse window configured for their role.
    PasswordReused,

    /// Indicates that the user requested a password reset too soon after
    /// their most recent password change, within the throttle window
    /// configured by `PolicyConfig::min_days_between_reset_requests`.
    PasswordChangeTooFrequent,

    /// Indicates that the user is authenticated but cannot continue until
    /// they choose a new password, because their current password has been
    /// held for longer than the reset cadence configured for their role.
    RequirePasswordChange,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::PasswordReused => StatusCode::BAD_REQUEST,

            Self::PasswordChangeTooFrequent => StatusCode::TOO_MANY_REQUESTS,

            Self::RequirePasswordChange => StatusCode::UNAUTHORIZED,
        }
    }

    pub(crate) fn as_app_err<T, E: From<Self>>(self) -> Result<T, E> {
        Err(E::from(self))
    }
}
