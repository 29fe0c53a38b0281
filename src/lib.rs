mod app;
mod config;
mod digest;
mod errors;
mod history;
mod policy;
mod users;

pub use app::{
    App,
    AppConfig,
    AppDb,
    AppTypes,
};
pub use config::PolicyConfig;
pub use digest::PasswordDigest;
pub use errors::Error;
pub use history::{
    PasswordChangeRecord,
    record_password_change,
};
pub use policy::{
    require_password_not_expired,
    require_password_not_reused,
    require_reset_request_allowed,
    should_user_reset_password_now,
    validate_password_reset_frequency,
    validate_password_reuse,
};
pub use users::AccountUser;
