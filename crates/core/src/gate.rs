//
// ─── ROUTE POLICY ──────────────────────────────────────────────────────────────
//

/// Classifies paths as protected via case-sensitive prefix match.
///
/// The prefix list is caller configuration, not policy of this type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoutePolicy {
    protected_prefixes: Vec<String>,
}

impl RoutePolicy {
    #[must_use]
    pub fn new(protected_prefixes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            protected_prefixes: protected_prefixes.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    #[must_use]
    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected_prefixes
    }
}

//
// ─── GATE ──────────────────────────────────────────────────────────────────────
//

/// Access-gate state machine for the connect-wallet modal.
///
/// Two states, `Hidden` and `Visible`. A protected route without a wallet
/// connection forces `Visible` and blocks dismissal; `show()` works on any
/// route for voluntary prompts; `hide()` is ignored while the blocking
/// condition holds. Initial state is `Hidden` and there is no terminal
/// state: the machine is re-evaluated for the lifetime of the page tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteGate {
    visible: bool,
    blocking: bool,
}

impl RouteGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate the gate against the current route classification and
    /// connection signal. Must be called synchronously whenever either
    /// input changes.
    ///
    /// Entering the blocking condition forces the modal visible; leaving it
    /// clears a forced modal without an explicit `hide()`, but leaves a
    /// voluntarily shown one alone.
    pub fn evaluate(&mut self, is_protected: bool, is_connected: bool) {
        let blocking = is_protected && !is_connected;
        if blocking {
            self.visible = true;
        } else if self.blocking {
            self.visible = false;
        }
        self.blocking = blocking;
    }

    /// Voluntary show, regardless of route classification.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Voluntary hide. Ignored while the blocking condition holds: the gate
    /// re-asserts `Visible` until the route is unprotected or the wallet
    /// connects.
    pub fn hide(&mut self) {
        if !self.blocking {
            self.visible = false;
        }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Whether dismissal is currently disallowed.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.blocking
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_matches_exact_prefixes_case_sensitively() {
        let policy = RoutePolicy::new(["/profile", "/certificates", "/leaderboard"]);
        assert!(policy.is_protected("/profile"));
        assert!(policy.is_protected("/profile/settings"));
        assert!(!policy.is_protected("/Profile"));
        assert!(!policy.is_protected("/courses/intro"));
    }

    #[test]
    fn empty_policy_protects_nothing() {
        let policy = RoutePolicy::default();
        assert!(!policy.is_protected("/profile"));
    }

    #[test]
    fn gate_starts_hidden() {
        assert!(!RouteGate::new().visible());
    }

    #[test]
    fn protected_and_disconnected_forces_visible() {
        let mut gate = RouteGate::new();
        gate.evaluate(true, false);
        assert!(gate.visible());
        assert!(gate.is_blocking());
    }

    #[test]
    fn hide_is_ignored_while_blocking() {
        let mut gate = RouteGate::new();
        gate.evaluate(true, false);
        gate.hide();
        gate.hide();
        gate.hide();
        assert!(gate.visible());
    }

    #[test]
    fn hide_works_on_unprotected_routes() {
        let mut gate = RouteGate::new();
        gate.evaluate(false, false);
        gate.show();
        assert!(gate.visible());
        gate.hide();
        assert!(!gate.visible());
    }

    #[test]
    fn connecting_clears_the_forced_modal_without_hide() {
        let mut gate = RouteGate::new();
        gate.evaluate(true, false);
        assert!(gate.visible());

        gate.evaluate(true, true);
        assert!(!gate.visible());
        assert!(!gate.is_blocking());
    }

    #[test]
    fn leaving_the_protected_route_clears_the_forced_modal() {
        let mut gate = RouteGate::new();
        gate.evaluate(true, false);
        gate.evaluate(false, false);
        assert!(!gate.visible());
    }

    #[test]
    fn voluntary_show_survives_reevaluation_on_open_routes() {
        let mut gate = RouteGate::new();
        gate.evaluate(false, true);
        gate.show();
        gate.evaluate(false, true);
        assert!(gate.visible());
        gate.hide();
        assert!(!gate.visible());
    }

    #[test]
    fn show_then_protect_becomes_blocking() {
        let mut gate = RouteGate::new();
        gate.show();
        gate.evaluate(true, false);
        gate.hide();
        assert!(gate.visible());
    }
}
