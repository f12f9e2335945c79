//! Raw engine status codes.

use std::fmt;

/// The numeric status code accompanying every engine call.
///
/// Historical engine builds disagree on the success convention: some treat
/// 0 as success and -1 as "procedure not yet executed", others treat any
/// non-zero value as failure. This layer does not unify the two: the raw
/// code is carried alongside every decoded result, and the named helpers
/// below let callers apply whichever convention their engine build uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(i32);

impl StatusCode {
    /// Wraps a raw engine status code.
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// The raw code, exactly as the engine returned it.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// `true` under the "0 is success" convention.
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `true` under the "-1 means the procedure has not yet run" convention.
    pub fn is_not_run(self) -> bool {
        self.0 == -1
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
