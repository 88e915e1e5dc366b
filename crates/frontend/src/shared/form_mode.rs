/// Whether a form creates a new record or edits an existing one
#[derive(Clone, Debug, PartialEq)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    pub fn existing(&self) -> Option<&T> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(record) => Some(record),
        }
    }

    /// Picks the create or edit flavour of a label
    pub fn label(&self, create: &'static str, edit: &'static str) -> &'static str {
        if self.is_edit() {
            edit
        } else {
            create
        }
    }
}
