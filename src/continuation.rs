//! Default launch-continuation collaborator.

use crate::options::LaunchOptions;

/// The startup handler the coordinator defers to after its own steps.
///
/// The returned boolean is whether launch should proceed normally; the
/// coordinator passes it through unchanged.
pub trait LaunchContinuation: Send + Sync {
    fn handle_launch(&self, options: &LaunchOptions) -> bool;
}

/// Continuation for hosts whose run loop proceeds on its own: always `true`.
pub struct DefaultContinuation;

impl LaunchContinuation for DefaultContinuation {
    fn handle_launch(&self, _options: &LaunchOptions) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_continuation_proceeds() {
        assert!(DefaultContinuation.handle_launch(&LaunchOptions::new()));
    }
}
