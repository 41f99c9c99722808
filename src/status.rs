//! A Status encapsulates the failure of an operation together with an
//! associated error message.
//!
//! Generator arithmetic never fails: wraparound is the defined behavior.
//! A Status only ever reports input that was rejected at construction
//! time (a negative seed, a malformed raw state, a damaged snapshot).

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    code: Code,
    msg: String,
}

impl Status {
    // Return error status of an appropriate type.
    pub fn invalid_argument(msg: &str, msg2: &str) -> Self {
        Self::new(Code::InvalidArgument, msg, msg2)
    }
    pub fn corruption(msg: &str, msg2: &str) -> Self {
        Self::new(Code::Corruption, msg, msg2)
    }

    /// Returns true iff the status indicates an InvalidArgument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.code == Code::InvalidArgument
    }

    /// Returns true iff the status indicates a Corruption error.
    pub fn is_corruption(&self) -> bool {
        self.code == Code::Corruption
    }

    /// The message without the code prefix.
    pub fn message(&self) -> &str {
        &self.msg
    }

    fn new(code: Code, msg: &str, msg2: &str) -> Self {
        let mut m = String::with_capacity(msg.len() + msg2.len() + 2);
        m.push_str(msg);
        if !msg2.is_empty() {
            m.push_str(": ");
            m.push_str(msg2);
        }
        Self { code, msg: m }
    }
}

impl fmt::Display for Status {
    /// Return a string representation of this status suitable for printing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.code.prefix(), self.msg)
    }
}

impl std::error::Error for Status {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Code {
    InvalidArgument,
    Corruption,
}

impl Code {
    fn prefix(&self) -> &'static str {
        match self {
            Code::InvalidArgument => "Invalid argument: ",
            Code::Corruption => "Corruption: ",
        }
    }
}

pub type Result<T> = std::result::Result<T, Status>;
