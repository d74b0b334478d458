use serde::{Deserialize, Serialize};

/// Alert priority, from most to least pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Urgent,
    Important,
    Watch,
    Info,
}

impl Severity {
    /// Every severity, most pressing first.
    #[must_use]
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Urgent,
            Severity::Important,
            Severity::Watch,
            Severity::Info,
        ]
    }

    /// Badge label shown next to an alert.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Severity::Urgent => "Urgent",
            Severity::Important => "Important",
            Severity::Watch => "Watch",
            Severity::Info => "Info",
        }
    }
}

/// Whether an alert still needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    Active,
    Resolved,
}

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn severity_orders_urgent_first() {
        assert!(Severity::Urgent < Severity::Important);
        assert!(Severity::Important < Severity::Watch);
        assert!(Severity::Watch < Severity::Info);
    }
}
