//! Verdict table
//!
//! Maps review status codes to the sentence shown to the operator.

use std::collections::BTreeMap;

pub const APPROVED: &str = "approved";
pub const REVIEWING: &str = "reviewing";
pub const REJECTED: &str = "rejected";

/// Immutable status code -> verdict text mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictTable {
    verdicts: BTreeMap<String, String>,
}

impl VerdictTable {
    /// Builds a table from arbitrary `(status, verdict)` pairs
    pub fn new<I, S, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, V)>,
        S: Into<String>,
        V: Into<String>,
    {
        Self {
            verdicts: entries
                .into_iter()
                .map(|(status, verdict)| (status.into(), verdict.into()))
                .collect(),
        }
    }

    /// Verdict text for a status code, if the code is known
    pub fn verdict(&self, status: &str) -> Option<&str> {
        self.verdicts.get(status).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

impl Default for VerdictTable {
    fn default() -> Self {
        Self::new([
            (APPROVED, "Работа проверена: ревьюеру всё понравилось. Ура!"),
            (REVIEWING, "Работа взята на проверку."),
            (REJECTED, "Работа проверена: у ревьюера есть замечания."),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_three_verdicts() {
        let table = VerdictTable::default();
        assert_eq!(table.len(), 3);
        assert_eq!(table.verdict(REVIEWING), Some("Работа взята на проверку."));
        assert!(table.verdict(APPROVED).is_some_and(|v| v.ends_with("Ура!")));
        assert!(table.verdict(REJECTED).is_some());
    }

    #[test]
    fn test_unknown_status_has_no_verdict() {
        let table = VerdictTable::default();
        assert_eq!(table.verdict("pending"), None);
        assert_eq!(table.verdict("Approved"), None);
    }
}
