#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    NotLoaded,
    Loading,
    Loaded,
    Error(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded or failed; either way no request is in flight.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded | Self::Error(_))
    }
}
