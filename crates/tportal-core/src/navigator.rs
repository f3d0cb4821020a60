// ── View navigation and external windows ──

/// Where an external link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowTarget {
    /// A new browsing context (`_blank`).
    Blank,
    /// Replace the current one.
    SelfWindow,
}

/// Routing surface of the console front end.
///
/// All methods are fire-and-forget side effects on the view.
pub trait Navigator {
    /// Route to a console path such as `/servers/42`.
    fn navigate_to_path(&self, path: &str);

    /// Reload the current view, re-resolving all of its data.
    fn reload(&self);

    /// Scroll the view back to its top anchor.
    fn scroll_to_top(&self);

    /// Open an external URL.
    fn open(&self, url: &str, target: WindowTarget);
}

/// The input event an action was triggered from.
///
/// Row-level buttons sit inside clickable rows; stopping propagation keeps
/// the row's own handler from firing as well.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiEvent {
    propagation_stopped: bool,
}

impl UiEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Stop propagation if the action came from an event.
pub(crate) fn consume(event: Option<&mut UiEvent>) {
    if let Some(event) = event {
        event.stop_propagation();
    }
}
