/// The view of a user account which the policy library needs. The user entity
/// itself is owned by the application; the library only reads these
/// attributes.
pub trait AccountUser<ID, DT> {
    /// Gets the user's id field.
    fn id(&self) -> ID;

    /// Indicates whether this is a staff account. Staff and non-staff
    /// accounts can be given different reuse windows and reset cadences.
    /// There are no intermediate roles; anything that is not staff is
    /// treated as a student account.
    fn is_staff(&self) -> bool;

    /// The time at which the account was created. Used as the reference
    /// point for forced resets when the user has no recorded password
    /// history (a "grandfathered" account which predates the policy).
    fn created_at(&self) -> DT;
}
