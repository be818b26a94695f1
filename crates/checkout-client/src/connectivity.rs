//! Connectivity Probe
//!
//! Injected capability reporting whether the client currently has network
//! connectivity. The requester consults it before the first attempt and
//! after every failure; the browser implementation reads
//! `navigator.onLine`.

/// Reports current network connectivity
pub trait Connectivity {
    fn is_online(&self) -> bool;
}

/// Probe that always reports online (native callers, tests)
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysOnline;

impl Connectivity for AlwaysOnline {
    fn is_online(&self) -> bool {
        true
    }
}
