//=========================================================================
// Diagnostics
//=========================================================================
//
// Diagnostic channel for behaviour failures.
//
// Behaviours have no caller that could recover from their errors, so
// failures are logged and recorded here instead of being propagated.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::error;

//=== Internal Dependencies ===============================================

use super::error::BehaviourError;

//=== Diagnostics =========================================================

/// Log of reported behaviour errors.
///
/// Every call to [`Diagnostics::report`] emits one `error!` record and
/// keeps the error so tests and tooling can inspect what went wrong.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reported: Vec<BehaviourError>,
}

impl Diagnostics {
    /// Creates an empty diagnostics log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Logs and records an error.
    pub fn report(&mut self, err: BehaviourError) {
        error!("{}", err);
        self.reported.push(err);
    }

    /// All errors reported so far, oldest first.
    pub fn reported(&self) -> &[BehaviourError] {
        &self.reported
    }

    pub fn len(&self) -> usize {
        self.reported.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reported.is_empty()
    }

    /// Drops all recorded errors.
    pub fn clear(&mut self) {
        self.reported.clear();
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert_eq!(diagnostics.len(), 0);
    }

    #[test]
    fn report_records_in_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(BehaviourError::UnknownTarget { scene: "A".into() });
        diagnostics.report(BehaviourError::UnknownTarget { scene: "B".into() });

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics.reported()[1],
            BehaviourError::UnknownTarget { scene: "B".into() }
        );
    }

    #[test]
    fn clear_empties_log() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(BehaviourError::UnknownTarget { scene: "A".into() });
        diagnostics.clear();
        assert!(diagnostics.is_empty());
    }
}
