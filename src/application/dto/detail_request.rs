/// DetailRequest - request DTO for rendering a rule detail page
#[derive(Debug, Clone, Default)]
pub struct DetailRequest {
    /// Rule id taken from the detail route
    pub rule_id: String,
    /// 1-based hit to select; 0 selects nothing
    pub select: usize,
    /// Free-style JSON typed into the override box
    pub free_style: Option<String>,
    /// Whether to look up the knowledge-base article
    pub fetch_kba: bool,
    /// Start with the description section collapsed
    pub collapsed: bool,
}

impl DetailRequest {
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            select: 0,
            free_style: None,
            fetch_kba: true,
            collapsed: false,
        }
    }

    pub fn with_selection(mut self, select: usize) -> Self {
        self.select = select;
        self
    }

    pub fn with_free_style(mut self, free_style: impl Into<String>) -> Self {
        self.free_style = Some(free_style.into());
        self
    }

    pub fn without_kba(mut self) -> Self {
        self.fetch_kba = false;
        self
    }

    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }
}
