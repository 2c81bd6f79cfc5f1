//! Local UI state: navigation drawer, contact form, notification.
//!
//! These are plain values. Components keep them in `RwSignal`s and call the
//! methods below from event handlers, so the behavior is testable without a
//! browser.

use std::time::Duration;

use tracing::info;

/// How long a notification stays open before it closes itself.
pub const AUTO_HIDE: Duration = Duration::from_millis(6000);

/// Text shown after the contact form is submitted.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// Open/closed state of the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawerState {
    open: bool,
}

impl DrawerState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Keyboard handling while the drawer is mounted: `Escape` closes it.
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if self.open && key == "Escape" {
            self.open = false;
            true
        } else {
            false
        }
    }

    /// CSS class of the drawer panel.
    pub fn class(self) -> &'static str {
        if self.open { "nav-drawer open" } else { "nav-drawer" }
    }
}

/// One input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// `name` attribute of the input.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    /// Visible label.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    /// `type` attribute of the input; `None` for the multi-line message.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::Email => Some("email"),
            FormField::Message => None,
            FormField::Name | FormField::Subject => Some("text"),
        }
    }

    /// Name and email share a row on wide screens.
    pub fn is_half_width(self) -> bool {
        matches!(self, FormField::Name | FormField::Email)
    }
}

/// Values typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl Severity {
    /// CSS modifier class of the alert.
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "alert alert-success",
            Severity::Error => "alert alert-error",
        }
    }
}

/// Snackbar shown at the bottom of the page.
///
/// Every [`show`](Self::show) bumps a generation counter. Timers remember
/// the generation they were started for and only close that notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationState {
    pub open: bool,
    pub message: String,
    pub severity: Severity,
    generation: u64,
}

impl NotificationState {
    /// Open with a new message. Returns the generation to pass to [`expire`](Self::expire).
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.open = true;
        self.message = message.into();
        self.severity = severity;
        self.generation += 1;
        self.generation
    }

    /// Manual close. The message is kept so the closing transition can still show it.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Click somewhere outside the snackbar. Returns `true` if it closed.
    pub fn click_away(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Auto-hide: closes only if `generation` is still the one on screen.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.open && self.generation == generation {
            self.open = false;
            true
        } else {
            false
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle a contact form submission.
///
/// The form has no transport: submission always succeeds locally and opens
/// the success notification. Only field lengths are logged.
pub fn submit_contact(form: &FormData, notification: &mut NotificationState) -> u64 {
    info!(
        name_len = form.name.len(),
        email_len = form.email.len(),
        subject_len = form.subject.len(),
        message_len = form.message.len(),
        "contact form submitted"
    );
    notification.show(SUBMIT_SUCCESS_MESSAGE, Severity::Success)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drawer_starts_closed_and_double_toggle_restores_it() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.is_open());
        assert_eq!(drawer.class(), "nav-drawer");

        drawer.toggle();
        assert!(drawer.is_open());
        assert_eq!(drawer.class(), "nav-drawer open");

        drawer.toggle();
        assert_eq!(drawer, DrawerState::default());
    }

    #[test]
    fn drawer_close_is_idempotent() {
        let mut drawer = DrawerState::default();
        drawer.close();
        assert!(!drawer.is_open());
        drawer.toggle();
        drawer.close();
        drawer.close();
        assert!(!drawer.is_open());
    }

    #[test]
    fn escape_closes_open_drawer_only() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.handle_key("Escape"));

        drawer.toggle();
        assert!(!drawer.handle_key("Enter"));
        assert!(drawer.is_open());

        assert!(drawer.handle_key("Escape"));
        assert_eq!(drawer, DrawerState::default());
    }

    #[test]
    fn setting_one_field_leaves_others_unchanged() {
        let base = FormData {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hello".into(),
            message: "Engines".into(),
        };

        for field in FormField::ALL {
            let mut form = base.clone();
            form.set(field, "changed".into());
            for other in FormField::ALL {
                let expected = if other == field { "changed" } else { base.get(other) };
                assert_eq!(form.get(other), expected, "{field:?} -> {other:?}");
            }
        }
    }

    #[test]
    fn field_attributes() {
        let names: Vec<&str> = FormField::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["name", "email", "subject", "message"]);
        assert_eq!(FormField::Email.input_type(), Some("email"));
        assert_eq!(FormField::Message.input_type(), None);
        assert!(FormField::Name.is_half_width());
        assert!(!FormField::Subject.is_half_width());
    }

    #[test]
    fn submit_always_succeeds() {
        for form in [
            FormData::default(),
            FormData {
                name: "x".into(),
                email: "not an email".into(),
                subject: String::new(),
                message: "m".repeat(10_000),
            },
        ] {
            let mut notification = NotificationState::default();
            submit_contact(&form, &mut notification);
            assert!(notification.open);
            assert_eq!(notification.severity, Severity::Success);
            assert_eq!(notification.message, SUBMIT_SUCCESS_MESSAGE);
        }
    }

    #[test]
    fn manual_close_hides_notification() {
        let mut notification = NotificationState::default();
        let generation = submit_contact(&FormData::default(), &mut notification);
        notification.close();
        assert!(!notification.open);
        assert!(!notification.expire(generation));
    }

    #[test]
    fn click_away_closes_open_notification() {
        let mut notification = NotificationState::default();
        assert!(!notification.click_away());

        let generation = submit_contact(&FormData::default(), &mut notification);
        assert!(notification.click_away());
        assert!(!notification.open);
        assert_eq!(notification.message, SUBMIT_SUCCESS_MESSAGE);
        // the pending timer has nothing left to close
        assert!(!notification.expire(generation));
    }

    #[test]
    fn stale_timer_does_not_close_newer_notification() {
        let mut notification = NotificationState::default();
        let first = submit_contact(&FormData::default(), &mut notification);
        let second = submit_contact(&FormData::default(), &mut notification);
        assert_ne!(first, second);

        assert!(!notification.expire(first));
        assert!(notification.open);

        assert!(notification.expire(second));
        assert!(!notification.open);
    }

    #[test]
    fn auto_hide_is_six_seconds() {
        assert_eq!(AUTO_HIDE, Duration::from_secs(6));
    }
}
