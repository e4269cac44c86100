//! Document Upload - View Model

use super::session::UploadSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct UploadVm {
    /// Staging area state. Lives in app context so the staged file and the
    /// last status survive tab switches. `web_sys::File` is a JS handle,
    /// hence the local (single-threaded) signal.
    pub session: RwSignal<UploadSession<web_sys::File>, LocalStorage>,
}

impl UploadVm {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new_local(UploadSession::new()),
        }
    }
}
