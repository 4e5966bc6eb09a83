/// Raw organization record as returned by the business-data provider.
///
/// Lives only for the duration of one update cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateRecord {
    pub name: String,
    pub website: Option<String>,
    pub description: Option<String>,
}

impl CandidateRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Whitespace-only names count as missing.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
