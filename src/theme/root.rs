//! Rendering root that receives theme markers.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// The element theme-scoped style rules key on.
///
/// Mapping markers to visual styling is the root's own business.
pub trait RenderRoot {
    fn set_marker(&mut self, marker: &str, present: bool);
    fn has_marker(&self, marker: &str) -> bool;
}

/// Document element modelled as an ordered class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    classes: BTreeSet<String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root pre-seeded with classes unrelated to theming.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Render as an HTML `class` attribute.
    pub fn class_attribute(&self) -> String {
        let joined = self.classes().collect::<Vec<_>>().join(" ");
        format!("class=\"{joined}\"")
    }
}

impl RenderRoot for DocumentRoot {
    fn set_marker(&mut self, marker: &str, present: bool) {
        if present {
            self.classes.insert(marker.to_string());
        } else {
            self.classes.remove(marker);
        }
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.classes.contains(marker)
    }
}

/// Shared handle so the caller can keep inspecting a root it handed off.
pub type SharedRoot = Rc<RefCell<DocumentRoot>>;

impl RenderRoot for SharedRoot {
    fn set_marker(&mut self, marker: &str, present: bool) {
        self.borrow_mut().set_marker(marker, present);
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.borrow().has_marker(marker)
    }
}
