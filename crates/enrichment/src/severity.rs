//! Severity vocabularies.
//!
//! Two independent mappings live here. [`Severity`] is the internal
//! taxonomy written back to `labels.severity`; [`ItsmSeverity`] is the
//! ticketing-system taxonomy written to `labels.itsm_severity`. They
//! intentionally disagree on some tokens (`high` is `Other` internally but
//! `Major` for ITSM) because they encode two different consumer contracts.

/// Canonical internal severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
    Other,
}

impl Severity {
    /// Normalize a raw upstream severity token.
    ///
    /// Total over all inputs: absent and empty map to `Info`, unrecognized
    /// tokens map to `Other`. Matching is trimmed and case-insensitive.
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Info;
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "" => Self::Info,
            "critical" | "major" | "crit" | "p1" | "sev1" => Self::Critical,
            "warning" | "warn" | "medium" | "p2" | "sev2" => Self::Warning,
            "low" | "info" | "minor" | "informational" | "p3" | "sev3" => Self::Info,
            _ => Self::Other,
        }
    }

    /// Label value for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Other => "other",
        }
    }
}

/// Ticketing-system severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItsmSeverity {
    Critical,
    Major,
    Minor,
}

impl ItsmSeverity {
    /// Map a raw severity token onto the ticketing-system taxonomy.
    ///
    /// The caller passes the original pre-normalization token when one was
    /// present on the alert, otherwise the normalized value. Matching is
    /// trimmed and case-insensitive; everything unrecognized is `Minor`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "critical" | "major" | "crit" | "p1" | "sev1" => Self::Critical,
            "warning" | "warn" | "medium" | "high" | "p2" | "sev2" => Self::Major,
            _ => Self::Minor,
        }
    }

    /// Label value for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
        }
    }
}
