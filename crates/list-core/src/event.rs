//! List Events
//!
//! Discrete user input dispatched by a display surface.

/// Which part of a row was clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The row's text: start editing
    Text,
    /// The row's remove button
    RemoveButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent<H> {
    /// Form submitted with explicit text
    Submit(String),
    /// Form submitted; read the text from the surface input
    SubmitInput,
    ItemClicked(H, ClickTarget),
    FilterChanged(String),
    ClearClicked,
}
