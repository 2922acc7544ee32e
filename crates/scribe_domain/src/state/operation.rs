#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum OperationStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Lifecycle record for one remote operation. The error text is present
/// only while the operation is failed.
#[derive(Clone, Debug, Default)]
pub struct OperationState {
    status: OperationStatus,
    error: Option<String>,
}

impl OperationState {
    pub fn begin(&mut self) {
        self.status = OperationStatus::Pending;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.status = OperationStatus::Succeeded;
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        self.status = OperationStatus::Failed;
        self.error = Some(message);
    }

    pub fn reset(&mut self) {
        self.status = OperationStatus::Idle;
        self.error = None;
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status == OperationStatus::Pending
    }

    pub fn is_succeeded(&self) -> bool {
        self.status == OperationStatus::Succeeded
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_a_previous_failure() {
        let mut op = OperationState::default();
        op.fail("boom".to_owned());
        assert_eq!(op.status(), OperationStatus::Failed);
        assert_eq!(op.error(), Some("boom"));

        op.begin();
        assert!(op.is_pending());
        assert_eq!(op.error(), None);
    }

    #[test]
    fn error_is_only_present_while_failed() {
        let mut op = OperationState::default();
        assert_eq!(op.error(), None);

        op.begin();
        op.fail("no route to host".to_owned());
        assert_eq!(op.error(), Some("no route to host"));

        op.begin();
        op.succeed();
        assert!(op.is_succeeded());
        assert_eq!(op.error(), None);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut op = OperationState::default();
        op.fail("boom".to_owned());

        op.reset();
        let once = op.clone();
        op.reset();

        assert_eq!(op.status(), once.status());
        assert_eq!(op.error(), once.error());
        assert_eq!(op.status(), OperationStatus::Idle);
    }
}
