//! Page model
//!
//! The host page as the dashboard sees it: a fixed set of named elements
//! (stat fields, list containers and the two filter controls), the
//! document ready state, and the events the page delivers.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::store::ALL_CATEGORIES;

/// Element identifiers the dashboard reads or writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementId {
    TotalCourses,
    ActiveStudents,
    AvgRating,
    TotalRevenue,
    CoursesList,
    CourseSearch,
    CategoryFilter,
    EnrollmentsTable,
}

impl ElementId {
    pub const ALL: [ElementId; 8] = [
        ElementId::TotalCourses,
        ElementId::ActiveStudents,
        ElementId::AvgRating,
        ElementId::TotalRevenue,
        ElementId::CoursesList,
        ElementId::CourseSearch,
        ElementId::CategoryFilter,
        ElementId::EnrollmentsTable,
    ];

    /// The `id` attribute of the element in the page markup
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::TotalCourses => "totalCourses",
            ElementId::ActiveStudents => "activeStudents",
            ElementId::AvgRating => "avgRating",
            ElementId::TotalRevenue => "totalRevenue",
            ElementId::CoursesList => "coursesList",
            ElementId::CourseSearch => "courseSearch",
            ElementId::CategoryFilter => "categoryFilter",
            ElementId::EnrollmentsTable => "enrollmentsTable",
        }
    }

    fn initial_value(&self) -> &'static str {
        match self {
            ElementId::CategoryFilter => ALL_CATEGORIES,
            _ => "",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an element currently displays
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// Plain text, escaped when the page is rendered
    Text(String),
    /// Markup, inserted verbatim
    Markup(String),
}

impl Content {
    pub fn as_str(&self) -> &str {
        match self {
            Content::Empty => "",
            Content::Text(text) | Content::Markup(text) => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Element {
    content: Content,
    value: String,
}

/// Document loading state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// Kinds of control events the dashboard listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Fired on every edit of a text input
    Input,
    /// Fired when a selection changes
    Change,
}

/// Events delivered by the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The document finished parsing
    DomContentLoaded,
    /// A control's value changed
    Control {
        target: ElementId,
        kind: EventKind,
        value: String,
    },
}

impl PageEvent {
    /// A keystroke in a text input
    pub fn input(target: ElementId, value: impl Into<String>) -> Self {
        PageEvent::Control {
            target,
            kind: EventKind::Input,
            value: value.into(),
        }
    }

    /// A selection change
    pub fn change(target: ElementId, value: impl Into<String>) -> Self {
        PageEvent::Control {
            target,
            kind: EventKind::Change,
            value: value.into(),
        }
    }
}

/// Page errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    #[error("Element not found: #{0}")]
    MissingElement(ElementId),
}

/// The host page
#[derive(Debug, Clone)]
pub struct Page {
    elements: HashMap<ElementId, Element>,
    ready_state: ReadyState,
}

impl Default for Page {
    fn default() -> Self {
        Self::with_elements(ElementId::ALL)
    }
}

impl Page {
    /// A fully parsed page with every dashboard element present
    pub fn new() -> Self {
        Self::default()
    }

    /// A fully parsed page containing only the given elements
    pub fn with_elements(ids: impl IntoIterator<Item = ElementId>) -> Self {
        let elements = ids
            .into_iter()
            .map(|id| {
                let element = Element {
                    content: Content::Empty,
                    value: id.initial_value().to_string(),
                };
                (id, element)
            })
            .collect();

        Self {
            elements,
            ready_state: ReadyState::Complete,
        }
    }

    /// Builder method: set the ready state
    pub fn ready_state(mut self, state: ReadyState) -> Self {
        self.ready_state = state;
        self
    }

    pub fn current_ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }

    pub fn has(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Replace an element's content with plain text
    pub fn set_text(&mut self, id: ElementId, text: impl Into<String>) -> Result<(), PageError> {
        self.element_mut(id)?.content = Content::Text(text.into());
        Ok(())
    }

    /// Replace an element's content with markup
    pub fn set_markup(&mut self, id: ElementId, markup: impl Into<String>) -> Result<(), PageError> {
        self.element_mut(id)?.content = Content::Markup(markup.into());
        Ok(())
    }

    pub fn content(&self, id: ElementId) -> Option<&Content> {
        self.elements.get(&id).map(|e| &e.content)
    }

    /// Text or markup of an element, empty when unset or absent
    pub fn text(&self, id: ElementId) -> &str {
        self.content(id).map(Content::as_str).unwrap_or("")
    }

    /// Current value of a control
    pub fn value(&self, id: ElementId) -> Option<&str> {
        self.elements.get(&id).map(|e| e.value.as_str())
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) -> Result<(), PageError> {
        self.element_mut(id)?.value = value.into();
        Ok(())
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element, PageError> {
        self.elements
            .get_mut(&id)
            .ok_or(PageError::MissingElement(id))
    }
}
