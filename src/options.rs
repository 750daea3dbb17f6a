//! `ParseOptions` (§6): the only configuration surface this library exposes.

/// What to do with an object key that matches no property signature and no
/// index signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnExcessProperty {
    #[default]
    Ignore,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// `false` (default): short-circuit on the first failure per compound.
    /// `true`: accumulate every failure.
    pub all_errors: bool,
    /// Whether an `Unexpected` failure is a legal outcome at all, independent
    /// of `on_excess_property` — set internally by the `is`/guard interpreter,
    /// which never wants `Unexpected` to surface as a hard failure.
    pub is_unexpected_allowed: bool,
    pub on_excess_property: OnExcessProperty,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            all_errors: false,
            is_unexpected_allowed: false,
            on_excess_property: OnExcessProperty::Ignore,
        }
    }
}

impl ParseOptions {
    pub fn with_all_errors(mut self, all_errors: bool) -> Self {
        self.all_errors = all_errors;
        self
    }

    pub fn with_on_excess_property(mut self, policy: OnExcessProperty) -> Self {
        self.on_excess_property = policy;
        self
    }
}
