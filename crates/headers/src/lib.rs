//! Header list construction and lifecycle management for curl-style transfer handles
//!
//! This crate manages the request and proxy header collections that a native
//! transfer library consumes as singly-linked lists of nul-terminated lines.
//! It owns three concerns: serializing an ordered mapping into the exact
//! list layout the native layer expects, signaling the proxy-separation mode
//! switch before a proxy list is attached, and tying each attached list's
//! memory lifetime to the owning store so that replacing or discarding
//! headers never leaks the previous list and never frees one twice.
//!
//! The transfer handle itself stays outside the crate: it is reduced to the
//! [`handle::TransferHandle`] seam, a single option-setting primitive that
//! real bindings adapt onto their native easy handle.
//!
//!
//! # Example
//!
//! ```
//! use easy_headers::{HeaderMap, HeaderStore, OptValue, OptionError, TransferHandle, TransferOpt};
//!
//! // Stands in for an adapter over a real native handle.
//! struct NativeHandle;
//!
//! impl TransferHandle for NativeHandle {
//!     fn set_option(&mut self, _option: TransferOpt, _value: OptValue) -> Result<(), OptionError> {
//!         Ok(())
//!     }
//! }
//!
//! # fn main() -> Result<(), easy_headers::HeaderError> {
//! let mut store = HeaderStore::new(NativeHandle);
//! store.set_headers(Some(HeaderMap::from_iter([
//!     ("User-Agent", "easy-headers/0.1"),
//!     ("Accept", "*/*"),
//! ])))?;
//!
//! let list = store.header_list().expect("non-empty mapping yields a list");
//! for entry in list.iter() {
//!     println!("{}", entry.to_string_lossy());
//! }
//!
//! // Proxy headers switch the handle to separate tracking before attaching.
//! store.set_proxy_headers(Some(HeaderMap::from_iter([("X-Proxy-Timeout", "100")])))?;
//! # Ok(())
//! # }
//! ```
//!
//!
//! # Architecture
//!
//! The crate is organized into several key modules:
//!
//! - [`map`]: the ordered, duplicate-tolerant [`HeaderMap`] callers fill in
//! - [`compose`]: turns one key/value pair into one serialized line
//! - [`list`]: the native list layout, the builder, and the owning
//!   [`ListHandle`] wrapper
//! - [`handle`]: the option-setting seam to the native transfer handle
//! - [`store`]: the [`HeaderStore`] orchestrating build, attach, and
//!   replacement per header family
//! - [`error`]: error types for build and attach failures
//!
//!
//! # Ownership model
//!
//! A built list passes through three states in fixed order: built (head
//! pointer, unowned), attached (the handle holds the head as a non-owning
//! reference), wrapped (a [`ListHandle`] owns it). Attach always precedes
//! wrap, and the wrapper is stored in the [`HeaderStore`] slot for its
//! family, so the handle never points at freed memory while the store is
//! alive. Replacing a family's headers swaps the slot; the superseded
//! wrapper's drop is the one and only release of the old list.
//!
//! Header text passes through untouched except for one byte-level fix-up:
//! embedded nul bytes become the visible escape `\0`, since the native
//! layer would otherwise truncate the entry at the nul without any error.
//!
//!
//! # Limitations
//!
//! - Header values are not validated; callers own CRLF and charset safety
//! - Duplicate keys are preserved verbatim; nothing is merged or deduplicated
//! - A store is single-threaded by design: callers serialize concurrent
//!   mutation externally, matching the native handle's own threading rules
//!
//!
//! # Safety
//!
//! The crate uses unsafe code where it owns the native list layout: raw
//! node allocation in [`list::append`], release in [`list::free_all`], and
//! the traversal behind [`ListHandle::iter`]. Every unsafe block carries
//! its ownership argument; safe callers can only reach the exactly-once
//! release path.

pub mod compose;
pub mod error;
pub mod handle;
pub mod list;
pub mod map;
pub mod store;

pub use error::{AppendError, HeaderError, OptionError};
pub use handle::{HeaderMode, OptValue, TransferHandle, TransferOpt};
pub use list::{ListHandle, ListNode};
pub use map::HeaderMap;
pub use store::HeaderStore;
