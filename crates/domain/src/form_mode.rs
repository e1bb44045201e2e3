//! Create-versus-edit mode of a resource form.

use crate::id::ResourceId;

/// HTTP method used to persist a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMethod {
    Post,
    Put,
}

/// Whether a resource form creates a new record or edits an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit(ResourceId),
}

impl FormMode {
    /// Build from the raw value of an id control: empty means create.
    #[must_use]
    pub fn from_input(raw: &str) -> Self {
        ResourceId::from_input(raw).map_or(Self::Create, Self::Edit)
    }

    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    /// Method for the submission: `POST` to create, `PUT` to update.
    #[must_use]
    pub fn method(&self) -> WriteMethod {
        match self {
            Self::Create => WriteMethod::Post,
            Self::Edit(_) => WriteMethod::Put,
        }
    }

    /// Request path relative to the API base, e.g. `/equipments` or `/equipments/5`.
    #[must_use]
    pub fn path(&self, collection: &str) -> String {
        match self {
            Self::Create => format!("/{collection}"),
            Self::Edit(id) => format!("/{collection}/{id}"),
        }
    }
}
