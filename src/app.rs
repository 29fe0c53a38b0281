use crate::{
    config::PolicyConfig,
    digest::PasswordDigest,
    errors::Error,
    history::PasswordChangeRecord,
    users::AccountUser,
};

pub trait App: AppConfig + AppDb + AppTypes + Clone + 'static {
    /// Returns the current time.
    ///
    /// All policy verdicts are pure functions of this clock, the stored
    /// history and the configuration, so tests can freeze or advance time by
    /// providing their own implementation.
    fn time_now(&self) -> Self::DateTime;
}

pub trait AppTypes: Sized {
    /// The type of a numeric ID in the database; usually `i64`, `i32`, etc.
    type ID: Into<i64> + TryFrom<i64> + Eq + Copy + std::fmt::Display;

    /// The type used to represent a date and time in the application.
    type DateTime: Copy + Ord + core::ops::Add<std::time::Duration, Output = Self::DateTime>;

    /// The type of a user in the application.
    type User: AccountUser<Self::ID, Self::DateTime> + Clone;

    /// A type representing an application error. This must support conversion
    /// from `passpolicy::Error`.
    type Error: From<Error> + actix_web::ResponseError;
}

/// This trait defines functions which provide configuration parameters to the
/// policy library.
#[allow(unused)]
pub trait AppConfig {
    /// Returns the password policy currently in force. This is called once
    /// per evaluation, so an application can reload or override its policy
    /// at any time without restarting.
    ///
    /// Default is `PolicyConfig::default()`, which disables all checks.
    fn password_policy(&self) -> PolicyConfig {
        PolicyConfig::default()
    }
}

/// This trait defines functions which will be used by the policy library to
/// store and retrieve the per-user password-change history.
///
/// The history is append-only: records are never updated, deleted or
/// reordered once written. The application's database must serialize
/// concurrent inserts for the same user (e.g. transactionally), so that
/// `get_password_history` never observes a partial or duplicate append.
#[trait_variant::make(Send)]
pub trait AppDb: AppTypes {
    /// Gets a user's password-change history, ordered by `changed_at`
    /// ascending.
    ///
    /// Returns an empty sequence for a user with no recorded history (e.g.
    /// an account created before the policy was introduced).
    async fn get_password_history(
        &self,
        user_id: Self::ID,
    ) -> Result<Vec<PasswordChangeRecord<Self>>, Self::Error>;

    /// Gets the most recent password-change record for a user.
    ///
    /// Returns `None` if the user has no recorded history.
    async fn get_most_recent_password_change(
        &self,
        user_id: Self::ID,
    ) -> Result<Option<PasswordChangeRecord<Self>>, Self::Error>;

    /// Appends a new password-change record for the given user.
    async fn insert_password_change(
        &self,
        user: &Self::User,
        digest: PasswordDigest,
        changed_at: Self::DateTime,
    ) -> Result<(), Self::Error>;
}
