/// The password policy in force for an application. A fresh value is supplied
/// by `AppConfig::password_policy` for every evaluation call, so applications
/// (and tests) can change any individual field without restarting.
///
/// All limits are measured in whole days, and all day limits are optional: a
/// `None` limit disables that check entirely, regardless of elapsed time.
/// Negative or non-numeric limits are rejected when the configuration is
/// deserialized, before any evaluation happens.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Master switch. When `false`, every policy check short-circuits to
    /// "no restriction" without consulting the password history.
    pub enabled: bool,

    /// The number of distinct recent passwords a student account must use
    /// before an old password may be reused. `0` disables the reuse check
    /// for students.
    pub min_distinct_passwords_student: u32,

    /// The number of distinct recent passwords a staff account must use
    /// before an old password may be reused. `0` disables the reuse check
    /// for staff.
    pub min_distinct_passwords_staff: u32,

    /// The number of days after which a student account is forced to reset
    /// its password, or `None` for no forced resets.
    pub min_days_between_resets_student: Option<u32>,

    /// The number of days after which a staff account is forced to reset
    /// its password, or `None` for no forced resets.
    pub min_days_between_resets_staff: Option<u32>,

    /// The minimum number of days between user-initiated reset requests,
    /// applied to all roles, or `None` for no throttling.
    pub min_days_between_reset_requests: Option<u32>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_distinct_passwords_student: 1,
            min_distinct_passwords_staff: 2,
            min_days_between_resets_student: None,
            min_days_between_resets_staff: None,
            min_days_between_reset_requests: None,
        }
    }
}

impl PolicyConfig {
    /// The reuse window for the given role.
    pub(crate) fn min_distinct_passwords(&self, is_staff: bool) -> u32 {
        if is_staff {
            self.min_distinct_passwords_staff
        } else {
            self.min_distinct_passwords_student
        }
    }

    /// The forced-reset cadence for the given role, if one is configured.
    pub(crate) fn min_days_between_resets(&self, is_staff: bool) -> Option<u32> {
        if is_staff {
            self.min_days_between_resets_staff
        } else {
            self.min_days_between_resets_student
        }
    }
}
