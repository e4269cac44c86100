use crate::app_shell::AppShell;
use crate::domain::a001_rag_chat::ui::view_model::ChatVm;
use crate::layout::global_context::AppGlobalContext;
use crate::system::health;
use crate::usecases::u501_upload_document::view_model::UploadVm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Session state lives above the tab views so switching tabs does not
    // reset the conversation log or the upload staging area.
    provide_context(ChatVm::new());
    provide_context(UploadVm::new());

    // One-shot backend reachability probe, diagnostics only.
    Effect::new(move |_| {
        spawn_local(async move {
            match health::api::health_check().await {
                Ok(health) => log::info!("backend is {}: {}", health.status, health.service),
                Err(e) => log::warn!("backend health check failed: {}", e),
            }
        });
    });

    view! {
        <ConfigProvider>
            <AppShell />
        </ConfigProvider>
    }
}
