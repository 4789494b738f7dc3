/// A current-build selection for one enumeration category.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    Present(String),
    #[default]
    Absent,
}

impl Selection {
    pub fn name(&self) -> Option<&str> {
        match self {
            Selection::Present(name) => Some(name),
            Selection::Absent => None,
        }
    }
}

impl From<Option<String>> for Selection {
    fn from(value: Option<String>) -> Self {
        value.map_or(Selection::Absent, Selection::Present)
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::Present(value.to_string())
    }
}

/// Everything about the current build that is baked into the constants file
/// besides the build time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSelection {
    pub version: String,
    pub release_type: Selection,
    pub platform: Selection,
    pub architecture: Selection,
    pub distribution: Selection,
}

impl BuildSelection {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    pub fn with_release_type(mut self, selection: impl Into<Selection>) -> Self {
        self.release_type = selection.into();
        self
    }

    pub fn with_platform(mut self, selection: impl Into<Selection>) -> Self {
        self.platform = selection.into();
        self
    }

    pub fn with_architecture(mut self, selection: impl Into<Selection>) -> Self {
        self.architecture = selection.into();
        self
    }

    pub fn with_distribution(mut self, selection: impl Into<Selection>) -> Self {
        self.distribution = selection.into();
        self
    }
}
