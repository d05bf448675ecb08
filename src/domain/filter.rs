/// Optional narrowing of `GET queryapi/queries`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    pub state: Option<String>,
}

impl QueryFilter {
    pub fn with_state(state: impl Into<String>) -> Self {
        Self {
            state: Some(state.into()),
        }
    }

    /// The service matches states in upper case; blank states are not sent.
    pub fn state_param(&self) -> Option<String> {
        self.state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_uppercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_upper_cased() {
        assert_eq!(
            QueryFilter::with_state("running").state_param(),
            Some("RUNNING".to_string())
        );
    }

    #[test]
    fn blank_state_is_dropped() {
        assert_eq!(QueryFilter::with_state("  ").state_param(), None);
        assert_eq!(QueryFilter::default().state_param(), None);
    }
}
