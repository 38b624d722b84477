use std::fmt::Display;

/// One field difference of a requirement update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub field: &'static str,
    pub old: String,
    pub new: String,
}

impl FieldChange {
    /// `Some` only when the values differ.
    pub fn diff(field: &'static str, old: &str, new: &str) -> Option<Self> {
        (old != new).then(|| Self {
            field,
            old: old.to_string(),
            new: new.to_string(),
        })
    }

    pub fn join(changes: &[FieldChange], separator: &str) -> String {
        changes.iter().map(ToString::to_string).collect::<Vec<_>>().join(separator)
    }
}

impl Display for FieldChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} → {}", self.field, self.old, self.new)
    }
}

#[cfg(test)]
mod tests {
    use super::FieldChange;

    #[test]
    fn test_diff_and_join() {
        assert!(FieldChange::diff("Subject", "a", "a").is_none());
        let changes = vec![
            FieldChange::diff("Subject", "a", "b").unwrap(),
            FieldChange::diff("Status", "Open", "Closed").unwrap(),
        ];
        assert_eq!(
            FieldChange::join(&changes, "; "),
            "Subject: a → b; Status: Open → Closed"
        );
    }
}
