//! Status returned by behavior nodes.

/// The result of evaluating a behavior node for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Conditions held, or the action was carried out.
    Success,
    /// A condition did not hold, or nothing was done.
    Failure,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

impl From<bool> for Status {
    fn from(ok: bool) -> Self {
        if ok { Status::Success } else { Status::Failure }
    }
}
