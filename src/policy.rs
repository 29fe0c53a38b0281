use std::time::Duration;

use crate::{
    app::App,
    digest::PasswordDigest,
    errors::Error,
    users::AccountUser,
};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Determines whether the user is allowed to set `candidate` as their new
/// password, under the reuse window configured for their role.
///
/// The candidate is rejected if its digest matches any of the user's most
/// recent `N` password-change records, where `N` is the role's
/// `min_distinct_passwords` setting. The user must go through at least `N`
/// distinct passwords (counting the current one) before an old one becomes
/// reusable. A user with fewer than `N` records is checked
/// against their whole history. The window counts history entries by
/// position, not deduplicated digest values.
///
/// Returns `true` if the candidate is allowed. Always `true` when the policy
/// is disabled, when the role's window is zero, or when the user has no
/// recorded history.
pub async fn validate_password_reuse<A: App>(
    app: &A,
    user: &A::User,
    candidate: &PasswordDigest,
) -> Result<bool, A::Error> {
    let policy = app.password_policy();
    if !policy.enabled {
        return Ok(true);
    }

    let window = policy.min_distinct_passwords(user.is_staff()) as usize;
    if window == 0 {
        return Ok(true);
    }

    let history = app.get_password_history(user.id())
        .await?;

    // History is ascending by time; check the most recent `window` entries.
    let reused = history.iter()
        .rev()
        .take(window)
        .any(|record| record.digest == *candidate);

    Ok(!reused)
}

/// Determines whether the user must be forced to reset their password now,
/// under the reset cadence configured for their role.
///
/// The cadence is measured from the user's most recent password change, or
/// from the account's creation time for a user with no recorded history.
/// The boundary is inclusive: a password held for exactly the configured
/// number of days must be reset.
///
/// Returns `false` when the policy is disabled, or when no cadence is
/// configured for the user's role.
pub async fn should_user_reset_password_now<A: App>(
    app: &A,
    user: &A::User,
) -> Result<bool, A::Error> {
    let policy = app.password_policy();
    if !policy.enabled {
        return Ok(false);
    }

    let Some(limit_days) = policy.min_days_between_resets(user.is_staff()) else {
        return Ok(false);
    };

    let since = last_change_time(app, user)
        .await?
        .unwrap_or_else(|| user.created_at());

    Ok(app.time_now() >= since + days(limit_days))
}

/// Determines whether the user is allowed to request a password reset right
/// now. This is a role-independent throttle against abusive reset requests;
/// it is measured from the user's most recent password change, with an
/// inclusive boundary.
///
/// Returns `true` when the policy is disabled, when no throttle is
/// configured, or when the user has no recorded history (there is nothing to
/// throttle against).
pub async fn validate_password_reset_frequency<A: App>(
    app: &A,
    user: &A::User,
) -> Result<bool, A::Error> {
    let policy = app.password_policy();
    if !policy.enabled {
        return Ok(true);
    }

    let Some(limit_days) = policy.min_days_between_reset_requests else {
        return Ok(true);
    };

    let Some(since) = last_change_time(app, user).await? else {
        return Ok(true);
    };

    Ok(app.time_now() >= since + days(limit_days))
}

/// Checks `validate_password_reuse`, mapping a rejected candidate to
/// `Error::PasswordReused`.
pub async fn require_password_not_reused<A: App>(
    app: &A,
    user: &A::User,
    candidate: &PasswordDigest,
) -> Result<(), A::Error> {
    if validate_password_reuse(app, user, candidate).await? {
        Ok(())
    } else {
        log::info!("User #{} attempted to reuse a recent password", user.id());
        Error::PasswordReused.as_app_err()
    }
}

/// Checks `validate_password_reset_frequency`, mapping a throttled request
/// to `Error::PasswordChangeTooFrequent`.
pub async fn require_reset_request_allowed<A: App>(
    app: &A,
    user: &A::User,
) -> Result<(), A::Error> {
    if validate_password_reset_frequency(app, user).await? {
        Ok(())
    } else {
        log::info!("User #{} requested a password reset too soon", user.id());
        Error::PasswordChangeTooFrequent.as_app_err()
    }
}

/// Checks `should_user_reset_password_now`, mapping an expired password to
/// `Error::RequirePasswordChange`.
pub async fn require_password_not_expired<A: App>(
    app: &A,
    user: &A::User,
) -> Result<(), A::Error> {
    if should_user_reset_password_now(app, user).await? {
        log::info!("User #{} requires password change", user.id());
        Error::RequirePasswordChange.as_app_err()
    } else {
        Ok(())
    }
}

async fn last_change_time<A: App>(
    app: &A,
    user: &A::User,
) -> Result<Option<A::DateTime>, A::Error> {
    let record = app.get_most_recent_password_change(user.id())
        .await?;

    Ok(record.map(|record| record.changed_at))
}

fn days(count: u32) -> Duration {
    Duration::from_secs(u64::from(count) * SECONDS_PER_DAY)
}
