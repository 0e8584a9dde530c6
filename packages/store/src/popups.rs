//! Popup windows and the transient alert banner.
//!
//! Only one popup is open at a time. While a form submission is in flight the
//! open popup cannot be dismissed, so a late response never lands on a closed
//! form.

/// The popups the client can show over the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Popup {
    SignIn,
    SignUp,
    /// Add the book with this id to one of the user's reading lists.
    ListSelection { book_id: u64 },
    DiaryEntry,
}

/// A message in the self-dismissing alert banner. `id` lets the timer that
/// hides it avoid hiding a newer message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub id: u64,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dismissal {
    /// A popup was open and is now hidden.
    Closed,
    /// Nothing was open.
    NothingOpen,
    /// A submission is in flight; the popup stays.
    Blocked,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupState {
    open: Option<Popup>,
    sign_in_notice: bool,
    in_flight: bool,
    alert: Option<Alert>,
    next_alert_id: u64,
}

impl PopupState {
    pub fn open(&self) -> Option<&Popup> {
        self.open.as_ref()
    }

    pub fn is_open(&self, popup: &Popup) -> bool {
        self.open.as_ref() == Some(popup)
    }

    pub fn show(&mut self, popup: Popup) {
        self.open = Some(popup);
    }

    /// Open the sign-in popup. `notice` adds the "sign in required" text shown
    /// when a page cannot be viewed anonymously.
    pub fn show_sign_in(&mut self, notice: bool) {
        self.open = Some(Popup::SignIn);
        self.sign_in_notice = notice;
    }

    pub fn sign_in_notice(&self) -> bool {
        self.sign_in_notice
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Mark a popup form as submitting. Returns `false` if another submission
    /// already holds the flag.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish_submit(&mut self) {
        self.in_flight = false;
    }

    /// Hide every popup, the notice and the alert, unless a submission is in
    /// flight. Calling it again is a no-op.
    pub fn dismiss(&mut self) -> Dismissal {
        if self.in_flight {
            return Dismissal::Blocked;
        }
        self.sign_in_notice = false;
        self.alert = None;
        match self.open.take() {
            Some(_) => Dismissal::Closed,
            None => Dismissal::NothingOpen,
        }
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    /// Show `message` in the banner, replacing any current one. Returns the id
    /// to pass to [`PopupState::expire_alert`] when the display time is up.
    pub fn show_alert(&mut self, message: impl Into<String>) -> u64 {
        self.next_alert_id += 1;
        self.alert = Some(Alert {
            id: self.next_alert_id,
            message: message.into(),
        });
        self.next_alert_id
    }

    /// Hide the banner if it still shows alert `id`.
    pub fn expire_alert(&mut self, id: u64) {
        if self.alert.as_ref().is_some_and(|a| a.id == id) {
            self.alert = None;
        }
    }
}
