//! Newsletter email capture form state.
//!
//! The form is not connected to a backend. Any non-empty submission counts as
//! completion; the pattern check only decides whether the submit arrow shows.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose `local@domain.tld` check.
pub fn looks_like_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Outcome of [`EmailForm::submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    /// Submission accepted; the panel should close.
    Completed,
    /// Nothing entered.
    Empty,
}

/// Input, focus and submission state of the email step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailForm {
    email: String,
    focused: bool,
    show_overlay: bool,
    submitted: bool,
}

impl EmailForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            focused: false,
            show_overlay: true,
            submitted: false,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether the submit arrow is shown.
    pub fn can_submit(&self) -> bool {
        looks_like_email(&self.email)
    }

    /// The "Almost there!" overlay covers the empty input until it is focused.
    pub fn overlay_visible(&self) -> bool {
        self.show_overlay && self.email.is_empty()
    }

    pub fn placeholder(&self) -> &'static str {
        if self.show_overlay { "" } else { "Email" }
    }

    pub fn focus(&mut self) {
        self.show_overlay = false;
        self.focused = true;
    }

    pub fn blur(&mut self) {
        if self.email.is_empty() {
            self.show_overlay = true;
        }
        self.focused = false;
    }

    /// Escape while focused asks the view to blur the input.
    pub fn should_blur_on(&self, key: &str) -> bool {
        key == "Escape" && self.focused
    }

    pub fn submit(&mut self) -> FormOutcome {
        if self.email.is_empty() {
            return FormOutcome::Empty;
        }
        self.submitted = true;
        FormOutcome::Completed
    }
}

impl Default for EmailForm {
    fn default() -> Self {
        Self::new()
    }
}
