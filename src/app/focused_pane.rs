#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPane {
    #[default]
    Databases,
    Tables,
    Query,
}

impl FocusedPane {
    /// Next pane in Tab order. The table pane is skipped while it is not shown.
    pub fn next(self, tables_visible: bool) -> Self {
        match self {
            Self::Databases if tables_visible => Self::Tables,
            Self::Databases | Self::Tables => Self::Query,
            Self::Query => Self::Databases,
        }
    }
}
