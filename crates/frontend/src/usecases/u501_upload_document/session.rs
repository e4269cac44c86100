use contracts::usecases::u501_upload_document::UploadResponse;

/// Where the staging area is in its upload lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

/// Shown when neither the transport nor the backend gave an explanation
pub const UPLOAD_ERROR_FALLBACK: &str =
    "Error uploading document. Please ensure the backend is running.";

/// Single-file staging area with at most one transfer in flight.
///
/// Generic over the staged file handle: the browser view stages a
/// `web_sys::File`, tests stage plain strings. A terminal status persists
/// until the next selection or submission. A failed upload keeps the
/// staged file so the user can retry without reselecting; only success
/// clears it.
#[derive(Debug, Clone)]
pub struct UploadSession<F> {
    staged: Option<F>,
    status: UploadStatus,
    status_message: String,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            staged: None,
            status: UploadStatus::Idle,
            status_message: String::new(),
        }
    }
}

impl<F> UploadSession<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn staged_file(&self) -> Option<&F> {
        self.staged.as_ref()
    }

    pub fn is_uploading(&self) -> bool {
        self.status == UploadStatus::Uploading
    }

    /// Stage a file. Rejected mid-transfer; otherwise replaces the staged
    /// file and clears any terminal status from a previous attempt.
    pub fn select_file(&mut self, file: F) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.staged = Some(file);
        self.status = UploadStatus::Idle;
        self.status_message.clear();
        true
    }

    /// Unstage the current file; rejected while a transfer is in flight
    pub fn clear_file(&mut self) -> bool {
        if self.is_uploading() {
            return false;
        }
        self.staged = None;
        true
    }

    /// Try to start the transfer. Returns the handle for the caller to
    /// send; rejected without a staged file or while one is in flight.
    pub fn begin_upload(&mut self) -> Option<F>
    where
        F: Clone,
    {
        if self.is_uploading() {
            return None;
        }
        let file = self.staged.clone()?;
        self.status = UploadStatus::Uploading;
        self.status_message.clear();
        Some(file)
    }

    /// Apply the backend's verdict on the outstanding transfer. No-op
    /// unless a transfer is in flight.
    pub fn resolve_response(&mut self, response: &UploadResponse) {
        if !self.is_uploading() {
            return;
        }
        if response.success {
            self.status = UploadStatus::Succeeded;
            self.status_message = format!(
                "Successfully uploaded {}! Indexed {} chunks.",
                response.filename, response.chunks
            );
            self.staged = None;
        } else {
            self.status = UploadStatus::Failed;
            self.status_message = if response.message.is_empty() {
                UPLOAD_ERROR_FALLBACK.to_string()
            } else {
                response.message.clone()
            };
        }
    }

    /// Mark the outstanding transfer failed at the transport level, with
    /// the backend's explanation when one was decoded
    pub fn resolve_transport_failure(&mut self, detail: Option<&str>) {
        if !self.is_uploading() {
            return;
        }
        self.status = UploadStatus::Failed;
        self.status_message = match detail {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => UPLOAD_ERROR_FALLBACK.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(filename: &str, chunks: u64) -> UploadResponse {
        UploadResponse {
            success: true,
            message: String::new(),
            filename: filename.to_string(),
            chunks,
        }
    }

    fn refused(message: &str) -> UploadResponse {
        UploadResponse {
            success: false,
            message: message.to_string(),
            filename: String::new(),
            chunks: 0,
        }
    }

    #[test]
    fn begin_without_staged_file_is_rejected() {
        let mut session: UploadSession<&str> = UploadSession::new();
        assert_eq!(session.begin_upload(), None);
        assert_eq!(session.status(), UploadStatus::Idle);
    }

    #[test]
    fn begin_while_uploading_is_rejected() {
        let mut session = UploadSession::new();
        assert!(session.select_file("a.pdf"));
        assert_eq!(session.begin_upload(), Some("a.pdf"));
        assert_eq!(session.begin_upload(), None);
    }

    #[test]
    fn success_sets_summary_and_clears_staged_file() {
        let mut session = UploadSession::new();
        assert!(session.select_file("a.pdf"));
        session.begin_upload().unwrap();
        session.resolve_response(&indexed("a.pdf", 12));

        assert_eq!(session.status(), UploadStatus::Succeeded);
        assert!(session.status_message().contains("a.pdf"));
        assert!(session.status_message().contains("12"));
        assert_eq!(session.staged_file(), None);
    }

    #[test]
    fn backend_refusal_uses_its_message_and_keeps_file() {
        let mut session = UploadSession::new();
        assert!(session.select_file("a.exe"));
        session.begin_upload().unwrap();
        session.resolve_response(&refused("Unsupported file type"));

        assert_eq!(session.status(), UploadStatus::Failed);
        assert_eq!(session.status_message(), "Unsupported file type");
        // retry without reselecting
        assert_eq!(session.staged_file(), Some(&"a.exe"));
        assert!(session.begin_upload().is_some());
    }

    #[test]
    fn transport_failure_falls_back_to_generic_message() {
        let mut session = UploadSession::new();
        assert!(session.select_file("a.pdf"));
        session.begin_upload().unwrap();
        session.resolve_transport_failure(None);

        assert_eq!(session.status(), UploadStatus::Failed);
        assert_eq!(session.status_message(), UPLOAD_ERROR_FALLBACK);
        assert_eq!(session.staged_file(), Some(&"a.pdf"));
    }

    #[test]
    fn transport_failure_prefers_backend_detail() {
        let mut session = UploadSession::new();
        assert!(session.select_file("big.pdf"));
        session.begin_upload().unwrap();
        session.resolve_transport_failure(Some("File too large"));
        assert_eq!(session.status_message(), "File too large");
    }

    #[test]
    fn selecting_a_file_clears_terminal_status() {
        let mut session = UploadSession::new();
        assert!(session.select_file("a.pdf"));
        session.begin_upload().unwrap();
        session.resolve_transport_failure(None);

        assert!(session.select_file("b.txt"));
        assert_eq!(session.status(), UploadStatus::Idle);
        assert_eq!(session.status_message(), "");
    }

    #[test]
    fn clear_file_rejected_mid_transfer() {
        let mut session = UploadSession::new();
        assert!(session.select_file("a.pdf"));
        session.begin_upload().unwrap();

        assert!(!session.clear_file());
        assert!(!session.select_file("b.pdf"));
        assert_eq!(session.staged_file(), Some(&"a.pdf"));
    }

    #[test]
    fn resolve_without_transfer_is_a_no_op() {
        let mut session: UploadSession<&str> = UploadSession::new();
        session.resolve_response(&indexed("ghost.pdf", 1));
        assert_eq!(session.status(), UploadStatus::Idle);
        assert_eq!(session.status_message(), "");
    }
}
