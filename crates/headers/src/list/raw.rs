//! Raw list primitives.
//!
//! The node layout and the append/free pair mirror the native transfer
//! library's singly-linked string list: each node owns one nul-terminated
//! line, `next` is null on the last node, and append walks to the tail so
//! the head pointer stays stable once a list is non-empty.

use std::ffi::{CString, c_char};
use std::ptr::{self, NonNull};

use crate::error::AppendError;

/// One node of a native header list.
///
/// The layout is C-compatible so a head pointer can be handed to a native
/// handle as-is.
#[repr(C)]
#[derive(Debug)]
pub struct ListNode {
    pub(crate) data: *mut c_char,
    pub(crate) next: *mut ListNode,
}

/// Appends `line` to the list starting at `head`, returning the head of the
/// grown list.
///
/// Passing `None` starts a new list; the returned pointer is then the new
/// single node. Otherwise the existing head is returned unchanged.
///
/// # Errors
///
/// Fails when `line` contains an interior nul byte and therefore cannot be
/// allocated as a C string. The list at `head` is left untouched.
///
/// # Safety
///
/// `head` must be null or the exclusively owned head of a well-formed list
/// previously produced by this function, not yet freed.
pub unsafe fn append(head: Option<NonNull<ListNode>>, line: &str) -> Result<NonNull<ListNode>, AppendError> {
    let data = CString::new(line).map_err(|e| AppendError::interior_nul(e.nul_position()))?;
    let node = Box::into_raw(Box::new(ListNode { data: data.into_raw(), next: ptr::null_mut() }));

    let Some(head) = head else {
        // SAFETY: `node` came from `Box::into_raw` and is therefore non-null.
        return Ok(unsafe { NonNull::new_unchecked(node) });
    };

    let mut tail = head.as_ptr();
    // SAFETY: the caller guarantees `head` is the exclusively owned head of a
    // well-formed list, so every `next` pointer is either null or points to a
    // live node.
    unsafe {
        while !(*tail).next.is_null() {
            tail = (*tail).next;
        }
        (*tail).next = node;
    }
    Ok(head)
}

/// Releases every node of the list starting at `head`, including the owned
/// line strings. Accepts null as the empty list.
///
/// # Safety
///
/// `head` must be null or the exclusively owned head of a list produced by
/// [`append`], and no node of the list may be freed twice or used afterwards.
pub unsafe fn free_all(head: *mut ListNode) {
    let mut node = head;
    while !node.is_null() {
        // SAFETY: `node` was allocated via `Box::into_raw` in `append` and the
        // caller guarantees it has not been freed before.
        let owned = unsafe { Box::from_raw(node) };
        // SAFETY: `owned.data` was produced by `CString::into_raw` in `append`.
        drop(unsafe { CString::from_raw(owned.data) });
        node = owned.next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn append_walks_to_the_tail_and_keeps_the_head() {
        // SAFETY: the test exclusively owns the list it builds here.
        unsafe {
            let head = append(None, "first").unwrap();
            let grown = append(Some(head), "second").unwrap();
            let grown = append(Some(grown), "third").unwrap();
            assert_eq!(grown, head);

            let mut lines = Vec::new();
            let mut node: *const ListNode = grown.as_ptr();
            while !node.is_null() {
                lines.push(CStr::from_ptr((*node).data).to_str().unwrap().to_owned());
                node = (*node).next;
            }
            assert_eq!(lines, ["first", "second", "third"]);

            free_all(grown.as_ptr());
        }
    }

    #[test]
    fn interior_nul_is_rejected_and_leaves_the_list_intact() {
        // SAFETY: the test exclusively owns the list it builds here.
        unsafe {
            let head = append(None, "ok").unwrap();
            let err = append(Some(head), "bad\0line").unwrap_err();
            assert!(matches!(err, AppendError::InteriorNul { position: 3 }));

            // the existing node is still valid and still the only one
            assert!((*head.as_ptr()).next.is_null());
            free_all(head.as_ptr());
        }
    }

    #[test]
    fn free_all_accepts_null() {
        // SAFETY: null is the documented empty list.
        unsafe { free_all(ptr::null_mut()) };
    }
}
