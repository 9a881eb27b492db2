/// Whether validation hits a real backend or is bypassed for development.
///
/// This is the safety boundary of the crate. Mock mode returns records that
/// were never cryptographically verified, so it must be impossible to land
/// in it by accident: the caller threads an explicit mode into the
/// validator, and the mapping from a deployment signal treats *absence* of
/// a signal as live validation, never as mock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Consult the configured backend. The default.
    #[default]
    Live,
    /// Bypass the backend and synthesize a record from untrusted fields.
    Mock,
}

impl ValidationMode {
    /// Derive a mode from an explicit deployment-environment signal
    /// (e.g. the value of a platform's deployment-environment variable).
    ///
    /// Only a recognized development value selects [`ValidationMode::Mock`];
    /// unknown values and a missing signal both mean [`ValidationMode::Live`].
    pub fn from_deployment(environment: Option<&str>) -> Self {
        match environment {
            Some("development") | Some("dev") | Some("local") | Some("preview") => {
                ValidationMode::Mock
            }
            _ => ValidationMode::Live,
        }
    }

    /// True when validation is bypassed.
    pub fn is_mock(self) -> bool {
        matches!(self, ValidationMode::Mock)
    }
}
