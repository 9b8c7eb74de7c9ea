//! Value-required rule applied to seed identities at load time.

/// Checks that a required field was explicitly supplied, i.e. not left
/// at the type's default value.
pub struct ValueRequiredRule<'a, T> {
    value: &'a T,
    field: &'static str,
}

impl<'a, T: Default + PartialEq> ValueRequiredRule<'a, T> {
    /// Creates a rule for a named field.
    pub fn new(value: &'a T, field: &'static str) -> Self {
        Self { value, field }
    }

    /// The field name this rule covers.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// True when the value differs from the type's default.
    pub fn validate(&self) -> bool {
        *self.value != T::default()
    }
}
