//! Document-root presentation seam.
//!
//! Dark mode is the one process-wide presentation attribute: a class on the
//! document root that every descendant style keys off. The shell never
//! touches a global directly. It is handed a [`Presentation`] and asks it to
//! set or clear the class, which keeps the shell testable without a browser.
//!
//! - **UI crate**: `DocumentRoot` runs a `classList.toggle` script on the
//!   real document element
//! - **Tests**: [`RootClassList`] records the class list in memory

use crate::error::PresentationError;

/// Backend that owns the document-root class list.
///
/// Implementations must give set semantics: adding a class that is already
/// present, or removing one that is absent, is observably a no-op.
pub trait Presentation {
    fn set_root_class(&mut self, class: &str, present: bool) -> Result<(), PresentationError>;
}

/// Whether `class` can be placed on the document root.
///
/// Only `[A-Za-z0-9_-]` is accepted. The live backend interpolates the name
/// into a script, and config validation uses the same rule so a configured
/// class is never refused at toggle time.
pub fn is_valid_class_name(class: &str) -> bool {
    !class.is_empty()
        && class
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// In-memory root class list, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootClassList {
    classes: Vec<String>,
}

impl RootClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Number of times `class` appears in the list.
    pub fn occurrences(&self, class: &str) -> usize {
        self.classes.iter().filter(|c| c.as_str() == class).count()
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl Presentation for RootClassList {
    fn set_root_class(&mut self, class: &str, present: bool) -> Result<(), PresentationError> {
        if !is_valid_class_name(class) {
            return Err(PresentationError::Script(format!(
                "refusing to toggle class {:?}",
                class
            )));
        }

        if present {
            if !self.contains(class) {
                self.classes.push(class.to_string());
            }
        } else {
            self.classes.retain(|c| c != class);
        }
        Ok(())
    }
}
