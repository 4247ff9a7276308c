//! The header store.
//!
//! [`HeaderStore`] owns a transfer handle together with the request and
//! proxy header families. Each family pairs the caller-visible mapping with
//! the [`ListHandle`] keeping the attached native list alive. Setting a
//! family rebuilds its list from scratch and replaces the previous one; the
//! superseded wrapper's own drop is what reclaims the old list.
//!
//! The two families deliberately differ on empty input: request headers are
//! always (re)attached, including an explicit null list for the empty case,
//! while an empty proxy assignment performs nothing at all and leaves any
//! previously attached proxy list and mode flag untouched.

use std::fmt;
use std::ptr::NonNull;

use tracing::debug;

use crate::error::HeaderError;
use crate::handle::{HeaderMode, OptValue, TransferHandle, TransferOpt};
use crate::list::{self, ListHandle, ListNode};
use crate::map::HeaderMap;

/// Header state bound to a single transfer handle.
pub struct HeaderStore<H> {
    handle: H,
    headers: Option<HeaderMap>,
    header_list: Option<ListHandle>,
    proxy_headers: Option<HeaderMap>,
    proxy_header_list: Option<ListHandle>,
}

impl<H: TransferHandle> HeaderStore<H> {
    /// Creates a store for `handle` with both families unset.
    pub fn new(handle: H) -> Self {
        Self { handle, headers: None, header_list: None, proxy_headers: None, proxy_header_list: None }
    }

    /// The current request header mapping, created empty on first access.
    pub fn headers(&mut self) -> &HeaderMap {
        self.headers.get_or_insert_default()
    }

    /// Replaces the request headers.
    ///
    /// `None` counts as empty. A list is always built and always attached,
    /// even when it comes out empty: the handle's request header slot is set
    /// to null in that case rather than left at its previous value. The
    /// previously attached list, if any, is superseded and reclaimed by its
    /// own wrapper.
    ///
    /// # Errors
    ///
    /// Propagates build and attach failures; on either, the previously
    /// attached list and stored mapping remain in place.
    pub fn set_headers(&mut self, headers: Option<HeaderMap>) -> Result<(), HeaderError> {
        let headers = headers.unwrap_or_default();
        let head = list::build(&headers)?;
        let wrapper = self.attach(TransferOpt::HttpHeader, head)?;
        debug!(count = headers.len(), "attached request header list");
        self.header_list = wrapper;
        self.headers = Some(headers);
        Ok(())
    }

    /// The currently attached request header list, if any.
    pub fn header_list(&self) -> Option<&ListHandle> {
        self.header_list.as_ref()
    }

    /// The current proxy header mapping, created empty on first access.
    pub fn proxy_headers(&mut self) -> &HeaderMap {
        self.proxy_headers.get_or_insert_default()
    }

    /// Replaces the proxy headers.
    ///
    /// An empty or absent mapping is a complete no-op: no native call is
    /// issued, and a previously attached proxy list or mode flag is not
    /// cleared. A non-empty mapping first switches the handle to separate
    /// proxy header tracking, then builds and attaches the proxy list like
    /// [`HeaderStore::set_headers`] does for request headers.
    ///
    /// # Errors
    ///
    /// Propagates build and attach failures; the mode flag is not rolled
    /// back when a later step fails.
    pub fn set_proxy_headers(&mut self, headers: Option<HeaderMap>) -> Result<(), HeaderError> {
        let Some(headers) = headers.filter(|h| !h.is_empty()) else {
            debug!("empty proxy headers, leaving handle untouched");
            return Ok(());
        };
        self.handle.set_option(TransferOpt::HeaderOpt, OptValue::Mode(HeaderMode::Separate))?;
        let head = list::build(&headers)?;
        let wrapper = self.attach(TransferOpt::ProxyHeader, head)?;
        debug!(count = headers.len(), "attached proxy header list");
        self.proxy_header_list = wrapper;
        self.proxy_headers = Some(headers);
        Ok(())
    }

    /// The currently attached proxy header list, if any.
    pub fn proxy_header_list(&self) -> Option<&ListHandle> {
        self.proxy_header_list.as_ref()
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn handle_mut(&mut self) -> &mut H {
        &mut self.handle
    }

    /// Consumes the store, releasing both attached lists and returning the
    /// handle. The handle must not read the lists afterwards.
    pub fn into_handle(self) -> H {
        let Self { handle, .. } = self;
        handle
    }

    /// Attaches `head` to the given list slot, then wraps it.
    ///
    /// Attach-then-wrap keeps the ordering invariant: the wrapper is only
    /// constructed around a head the handle has accepted, and a rejected
    /// head is reclaimed here before the error surfaces.
    fn attach(&mut self, option: TransferOpt, head: Option<NonNull<ListNode>>) -> Result<Option<ListHandle>, HeaderError> {
        match self.handle.set_option(option, OptValue::List(head)) {
            Ok(()) => {
                // SAFETY: the attach succeeded, the handle keeps `head` only as
                // a non-owning reference, and this wrapper becomes the sole owner.
                Ok(head.map(|list| unsafe { ListHandle::from_raw(list) }))
            }
            Err(source) => {
                if let Some(list) = head {
                    // SAFETY: the handle rejected the list, so this is still
                    // the sole reference; the local wrapper frees it.
                    drop(unsafe { ListHandle::from_raw(list) });
                }
                Err(HeaderError::from(source))
            }
        }
    }
}

impl<H> fmt::Debug for HeaderStore<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeaderStore")
            .field("headers", &self.headers)
            .field("header_list", &self.header_list)
            .field("proxy_headers", &self.proxy_headers)
            .field("proxy_header_list", &self.proxy_header_list)
            .finish_non_exhaustive()
    }
}
