//! Application shell: header, tab navigation and the active panel.

use crate::dashboards::d400_collection_stats::view::StatsPanel;
use crate::domain::a001_rag_chat::ui::view::ChatInterface;
use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::usecases::u501_upload_document::view::DocumentUpload;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    let tab_button = move |tab: AppTab, label: &'static str| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if ctx.active_tab.get() == tab {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    }
                })
                on_click=move |_| ctx.activate_tab(tab)
            >
                {label}
            </Button>
        }
    };

    view! {
        <div style="min-height: 100vh; padding: 32px 16px; background: var(--colorNeutralBackground3);">
            <div style="max-width: 1200px; margin: 0 auto;">
                <div style="text-align: center; margin-bottom: 24px;">
                    <h1 style="font-size: 32px; font-weight: bold; margin-bottom: 4px;">
                        "RAG Chatbot"
                    </h1>
                    <p style="color: var(--colorNeutralForeground3);">
                        "Ask questions and get answers with source attribution"
                    </p>
                </div>

                <Flex justify=FlexJustify::Center style="gap: 8px; margin-bottom: 24px;">
                    {tab_button(AppTab::Chat, "Chat")}
                    {tab_button(AppTab::Upload, "Upload")}
                    {tab_button(AppTab::Stats, "Stats")}
                </Flex>

                {move || match ctx.active_tab.get() {
                    AppTab::Chat => view! { <ChatInterface /> }.into_any(),
                    AppTab::Upload => view! { <DocumentUpload /> }.into_any(),
                    AppTab::Stats => view! { <StatsPanel /> }.into_any(),
                }}
            </div>
        </div>
    }
}
