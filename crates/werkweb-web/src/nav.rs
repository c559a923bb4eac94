#![forbid(unsafe_code)]

//! Navigation disclosure (hamburger menu) state.
//!
//! The toggle's `aria-expanded` attribute is the source of truth; each click
//! reads it, flips it, and the adapter applies the resulting [`NavUpdate`] to
//! the toggle and its `aria-controls` menu.

/// Expanded/collapsed state of one navigation toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDisclosure {
    expanded: bool,
}

/// Attribute and class changes produced by one toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavUpdate {
    /// New `aria-expanded` value for the toggle.
    pub aria_expanded: &'static str,
    /// New `hidden` state of the menu.
    pub menu_hidden: bool,
    /// Whether the menu carries the open class afterwards.
    pub menu_open_class: bool,
}

impl NavDisclosure {
    /// Read state from an `aria-expanded` attribute value.
    ///
    /// Only the exact string `"true"` counts as expanded.
    #[must_use]
    pub fn from_aria(value: Option<&str>) -> Self {
        Self {
            expanded: value == Some("true"),
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        self.expanded
    }

    /// Flip the state and describe the DOM changes.
    pub fn toggle(&mut self) -> NavUpdate {
        self.expanded = !self.expanded;
        NavUpdate {
            aria_expanded: if self.expanded { "true" } else { "false" },
            menu_hidden: !self.expanded,
            menu_open_class: self.expanded,
        }
    }
}
