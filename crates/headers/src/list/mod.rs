//! Native header list construction and ownership.
//!
//! A header mapping becomes a singly-linked list of composed lines in the
//! exact layout the native transfer library consumes. This module provides:
//!
//! - [`ListNode`]: the C-compatible node layout, plus the raw [`append`] and
//!   [`free_all`] primitives mirroring the native list API
//! - [`build`]: folds a [`HeaderMap`] into a brand-new list in insertion
//!   order
//! - [`ListHandle`]: the owning wrapper whose drop releases a list exactly
//!   once
//!
//! A built list is attached to a handle first and wrapped second, so the
//! wrapper's lifetime always covers the attachment.

mod owned;
mod raw;

pub use owned::{Iter, ListHandle};
pub use raw::{ListNode, append, free_all};

use std::ptr::NonNull;

use tracing::trace;

use crate::compose::compose_line;
use crate::error::AppendError;
use crate::map::HeaderMap;

/// Builds a brand-new native list from `headers`, in insertion order.
///
/// An empty mapping yields `Ok(None)` without touching the allocator. The
/// returned head is unowned; the caller attaches it to a handle and then
/// wraps it in a [`ListHandle`].
///
/// # Errors
///
/// Fails when an individual append fails. The partially built list is
/// released before the error propagates; no half-built list escapes.
pub fn build(headers: &HeaderMap) -> Result<Option<NonNull<ListNode>>, AppendError> {
    let mut head = None;
    for (key, value) in headers.iter() {
        let line = compose_line(key, value);
        // SAFETY: `head` is either `None` or the exclusively owned head
        // returned by the previous iteration; nothing else references it yet.
        match unsafe { append(head, &line) } {
            Ok(list) => {
                trace!(line = %line, "appended header line");
                head = Some(list);
            }
            Err(source) => {
                if let Some(list) = head {
                    // SAFETY: sole owner of the partial list; it was never
                    // attached or wrapped.
                    unsafe { free_all(list.as_ptr()) };
                }
                return Err(source);
            }
        }
    }
    Ok(head)
}
