use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown query mode '{0}' (expected INMEMORY or PERSISTENT)")]
pub struct QueryModeError(pub String);

/// Decides which result-fetch path applies to a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryMode {
    InMemory,
    Persistent,
}

impl QueryMode {
    pub fn from_persistent(is_persistent: bool) -> Self {
        if is_persistent {
            Self::Persistent
        } else {
            Self::InMemory
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InMemory => "INMEMORY",
            Self::Persistent => "PERSISTENT",
        }
    }
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryMode {
    type Err = QueryModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INMEMORY" | "IN_MEMORY" => Ok(Self::InMemory),
            "PERSISTENT" => Ok(Self::Persistent),
            _ => Err(QueryModeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("INMEMORY", QueryMode::InMemory)]
    #[case("in_memory", QueryMode::InMemory)]
    #[case("Persistent", QueryMode::Persistent)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: QueryMode) {
        assert_eq!(input.parse::<QueryMode>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("stream".parse::<QueryMode>().is_err());
    }

    #[rstest]
    #[case(true, QueryMode::Persistent)]
    #[case(false, QueryMode::InMemory)]
    fn from_persistent_flag(#[case] flag: bool, #[case] expected: QueryMode) {
        assert_eq!(QueryMode::from_persistent(flag), expected);
    }
}
