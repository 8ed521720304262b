//! HostEnvironment: what detection needs to know about the page it runs in

/// Read-only view of the hosting page.
///
/// The browser build implements this over `window`; everything else
/// (servers, tests) uses [`StaticEnvironment`].
pub trait HostEnvironment {
    /// Scheme of the current origin including the colon, e.g. `"https:"`.
    fn protocol(&self) -> Option<String>;

    fn user_agent(&self) -> Option<String>;

    /// Whether `RTCRtpTransceiver.prototype` has an own `currentDirection`.
    fn transceiver_has_current_direction(&self) -> bool;
}

impl<E: HostEnvironment + ?Sized> HostEnvironment for &E {
    fn protocol(&self) -> Option<String> {
        (**self).protocol()
    }

    fn user_agent(&self) -> Option<String> {
        (**self).user_agent()
    }

    fn transceiver_has_current_direction(&self) -> bool {
        (**self).transceiver_has_current_direction()
    }
}

/// Fixed answers, set up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub protocol: Option<String>,
    pub user_agent: Option<String>,
    pub current_direction: bool,
}

impl StaticEnvironment {
    pub fn new() -> Self { Self::default() }
    pub fn with_protocol(mut self, p: impl Into<String>) -> Self { self.protocol = Some(p.into()); self }
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self { self.user_agent = Some(ua.into()); self }
    pub fn with_current_direction(mut self, present: bool) -> Self { self.current_direction = present; self }
}

impl HostEnvironment for StaticEnvironment {
    fn protocol(&self) -> Option<String> {
        self.protocol.clone()
    }

    fn user_agent(&self) -> Option<String> {
        self.user_agent.clone()
    }

    fn transceiver_has_current_direction(&self) -> bool {
        self.current_direction
    }
}
