//! The transfer-handle seam.
//!
//! This crate never talks to the native transfer library directly; it drives
//! a handle through the single option-setting primitive defined here. Real
//! bindings adapt [`TransferHandle`] onto their native easy handle; tests
//! substitute an instrumented implementation.

use std::fmt;
use std::ptr::NonNull;

use crate::error::OptionError;
use crate::list::ListNode;

/// The handle options this crate sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOpt {
    /// The request header list slot.
    HttpHeader,
    /// The header-mode flag controlling proxy header separation.
    HeaderOpt,
    /// The proxy header list slot.
    ProxyHeader,
}

impl TransferOpt {
    /// The option name as the native layer spells it.
    pub fn name(self) -> &'static str {
        match self {
            Self::HttpHeader => "HTTPHEADER",
            Self::HeaderOpt => "HEADEROPT",
            Self::ProxyHeader => "PROXYHEADER",
        }
    }
}

impl fmt::Display for TransferOpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values for the header-mode flag.
///
/// [`HeaderMode::Separate`] tells the handle to track proxy headers
/// independently from request headers. The store only ever sets it when a
/// non-empty proxy mapping is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    Unified,
    Separate,
}

/// The value carried by a [`TransferHandle::set_option`] call.
///
/// A list slot takes the head pointer of an attached list, or `None` to
/// clear the slot. The handle holds the pointer as a non-owning reference;
/// ownership stays with the [`crate::list::ListHandle`] wrapped around the
/// same head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptValue {
    List(Option<NonNull<ListNode>>),
    Mode(HeaderMode),
}

/// A native transfer handle, reduced to the one primitive this crate needs.
pub trait TransferHandle {
    /// Sets a single option on the handle.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError`] when the handle rejects the option; rejections
    /// surface verbatim and are never retried.
    fn set_option(&mut self, option: TransferOpt, value: OptValue) -> Result<(), OptionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_display_their_native_names() {
        assert_eq!(TransferOpt::HttpHeader.to_string(), "HTTPHEADER");
        assert_eq!(TransferOpt::HeaderOpt.to_string(), "HEADEROPT");
        assert_eq!(TransferOpt::ProxyHeader.to_string(), "PROXYHEADER");
    }
}
