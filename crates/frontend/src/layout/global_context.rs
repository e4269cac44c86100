use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Top-level view the shell is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTab {
    Chat,
    Upload,
    Stats,
}

impl AppTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppTab::Chat => "chat",
            AppTab::Upload => "upload",
            AppTab::Stats => "stats",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "chat" => Some(AppTab::Chat),
            "upload" => Some(AppTab::Upload),
            "stats" => Some(AppTab::Stats),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_tab: RwSignal<AppTab>,
    /// Fires once per successfully indexed upload. Views that cache
    /// collection state subscribe with `track_upload_completed` and
    /// re-fetch when it fires.
    upload_completed: Trigger,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(AppTab::Chat),
            upload_completed: Trigger::new(),
        }
    }

    pub fn activate_tab(&self, tab: AppTab) {
        self.active_tab.set(tab);
    }

    /// Publish the upload-completed event
    pub fn notify_upload_completed(&self) {
        self.upload_completed.notify();
    }

    /// Subscribe the current reactive scope to upload-completed events
    pub fn track_upload_completed(&self) {
        self.upload_completed.track();
    }

    /// Restore the active tab from the URL query (?tab=...) and mirror
    /// changes back, so a reload lands on the same view.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(tab) = params.get("tab").and_then(|v| AppTab::from_str(v)) {
            self.active_tab.set(tab);
        }

        let this = *self;
        Effect::new(move |_| {
            let tab = this.active_tab.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                tab.as_str().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_keys_round_trip() {
        for tab in [AppTab::Chat, AppTab::Upload, AppTab::Stats] {
            assert_eq!(AppTab::from_str(tab.as_str()), Some(tab));
        }
        assert_eq!(AppTab::from_str("settings"), None);
    }
}
