/// Limits and switches for [`SequenceValidator`](super::SequenceValidator)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Maximum number of comma-separated alternatives in one list
    pub max_alternatives: usize,
    /// Maximum number of components in one simple-selector sequence
    pub max_sequence_len: usize,
    /// Accept `init` immediately followed by `close`
    pub allow_empty_list: bool,
    /// Reject `:nth-child(an+b)` that no position can satisfy
    pub reject_unsatisfiable_nth: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_alternatives: 1024,
            max_sequence_len: 256,
            allow_empty_list: false,
            reject_unsatisfiable_nth: false,
        }
    }
}

impl ValidatorConfig {
    #[must_use]
    pub const fn with_max_alternatives(mut self, max: usize) -> Self {
        self.max_alternatives = max;
        self
    }

    #[must_use]
    pub const fn with_max_sequence_len(mut self, max: usize) -> Self {
        self.max_sequence_len = max;
        self
    }

    #[must_use]
    pub const fn with_empty_list(mut self, allow: bool) -> Self {
        self.allow_empty_list = allow;
        self
    }

    #[must_use]
    pub const fn with_unsatisfiable_nth_rejected(mut self, reject: bool) -> Self {
        self.reject_unsatisfiable_nth = reject;
        self
    }
}
