use crate::{
    app::{App, AppTypes},
    digest::PasswordDigest,
    users::AccountUser,
};

/// One password-change event for a user. Records are immutable once written;
/// together they form an append-only, time-ordered log which is the ground
/// truth for all reuse and recency decisions.
#[cfg_attr(feature = "diesel", derive(diesel::prelude::QueryableByName))]
pub struct PasswordChangeRecord<A: AppTypes> {
    #[cfg_attr(feature = "diesel", diesel(sql_type = diesel::sql_types::BigInt))]
    pub user_id: A::ID,

    #[cfg_attr(feature = "diesel", diesel(sql_type = diesel::sql_types::Text))]
    #[cfg_attr(feature = "diesel", diesel(deserialize_as = String))]
    pub digest: PasswordDigest,

    #[cfg_attr(feature = "diesel", diesel(sql_type = diesel::sql_types::Timestamp))]
    pub changed_at: A::DateTime,
}

/// Appends a password-change record for the given user, stamped with the
/// current time. Call this whenever the application accepts a new password
/// (after validating it with `validate_password_reuse`); the policy library
/// does not re-check reuse here.
pub async fn record_password_change<A: App>(
    app: &A,
    user: &A::User,
    digest: PasswordDigest,
) -> Result<(), A::Error> {
    let changed_at = app.time_now();
    app.insert_password_change(user, digest, changed_at)
        .await?;

    log::debug!("Recorded password change for user #{}", user.id());

    Ok(())
}
