use std::fmt;

/// Text fields a project cannot exist without.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Title,
    Description,
    Url,
}

impl RequiredField {
    /// Field name as it appears in request bodies
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Title => "title",
            RequiredField::Description => "description",
            RequiredField::Url => "url",
        }
    }

    /// Machine-readable error code reported when the field is blank
    pub fn code(&self) -> &'static str {
        match self {
            RequiredField::Title => "MISSING_TITLE",
            RequiredField::Description => "MISSING_DESCRIPTION",
            RequiredField::Url => "MISSING_URL",
        }
    }

    /// Human-readable error message reported when the field is blank
    pub fn message(&self) -> &'static str {
        match self {
            RequiredField::Title => "Title is required and cannot be empty",
            RequiredField::Description => "Description is required and cannot be empty",
            RequiredField::Url => "URL is required and cannot be empty",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
