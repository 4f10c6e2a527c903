use academy_core::gate::{RouteGate, RoutePolicy};

/// Holds the route gate together with the signals that drive it: the
/// current path from the router and the wallet-connection boolean.
///
/// Scoped to one page-tree mount and torn down with it. Both signal
/// handlers re-evaluate the gate synchronously, so the forced-visible rule
/// holds before any protected content is usable. The connection signal is
/// unknown until the wallet collaborator pushes it; unknown is treated as
/// disconnected, so ambiguity resolves toward blocking, never toward
/// letting access through.
#[derive(Debug, Clone)]
pub struct GateContext {
    policy: RoutePolicy,
    gate: RouteGate,
    path: String,
    connected: Option<bool>,
}

impl GateContext {
    #[must_use]
    pub fn new(policy: RoutePolicy) -> Self {
        Self {
            policy,
            gate: RouteGate::new(),
            path: String::new(),
            connected: None,
        }
    }

    fn reevaluate(&mut self) {
        let is_protected = self.policy.is_protected(&self.path);
        let is_connected = self.connected.unwrap_or(false);
        self.gate.evaluate(is_protected, is_connected);
    }

    /// Router pushed a new path.
    pub fn on_route_change(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.reevaluate();
    }

    /// Wallet collaborator pushed a connect/disconnect event.
    pub fn on_connection_change(&mut self, connected: bool) {
        self.connected = Some(connected);
        self.reevaluate();
    }

    /// Voluntary prompt, works on any route.
    pub fn show(&mut self) {
        self.gate.show();
    }

    /// Dismissal request. Ignored while the current route is protected and
    /// the wallet is disconnected.
    pub fn hide(&mut self) {
        self.gate.hide();
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.gate.visible()
    }

    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.gate.is_blocking()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected.unwrap_or(false)
    }
}
