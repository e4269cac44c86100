use super::api;
use crate::layout::global_context::AppGlobalContext;
use contracts::dashboards::d400_collection_stats::StatsResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (stats, set_stats) = signal(None::<StatsResponse>);
    let (is_loading, set_is_loading) = signal(true);
    let (is_clearing, set_is_clearing) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let fetch_stats = move || {
        set_is_loading.set(true);
        spawn_local(async move {
            match api::get_stats().await {
                Ok(data) => {
                    // replaced wholesale, never patched locally
                    set_stats.set(Some(data));
                    set_error_msg.set(None);
                }
                Err(e) => {
                    log::error!("failed to fetch stats: {}", e);
                    set_error_msg.set(Some(format!("Failed to load statistics: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    // Fetch on mount and on every completed upload.
    Effect::new(move |_| {
        ctx.track_upload_completed();
        fetch_stats();
    });

    let total_documents = move || {
        stats
            .get()
            .map(|s| s.total_documents)
            .unwrap_or(0)
    };

    let handle_clear = move |_| {
        // No DELETE is issued for an empty collection.
        if total_documents() == 0 || is_clearing.get() {
            return;
        }
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message(
                    "Are you sure you want to clear all documents? This action cannot be undone.",
                )
                .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        set_is_clearing.set(true);
        spawn_local(async move {
            match api::clear_collection().await {
                Ok(result) => {
                    if !result.success {
                        set_error_msg.set(Some(result.message));
                    }
                }
                Err(e) => {
                    log::error!("failed to clear collection: {}", e);
                    set_error_msg.set(Some(format!("Error clearing collection: {}", e)));
                }
            }
            // The zero state comes from a confirmed re-fetch, not a local
            // reset.
            fetch_stats();
            set_is_clearing.set(false);
        });
    };

    view! {
        <div style="max-width: 640px; margin: 0 auto;">
            <div style="background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 32px;">
                <Flex
                    justify=FlexJustify::SpaceBetween
                    align=FlexAlign::Center
                    style="margin-bottom: 20px;"
                >
                    <h2 style="font-size: 22px; font-weight: bold;">"Collection Statistics"</h2>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || is_loading.get())
                        on_click=move |_| fetch_stats()
                    >
                        "Refresh"
                    </Button>
                </Flex>

                {move || {
                    error_msg
                        .get()
                        .map(|e| {
                            view! {
                                <div style="margin-bottom: 16px; padding: 12px 16px; border-radius: 8px; background: var(--colorPaletteRedBackground1); color: var(--colorPaletteRedForeground1);">
                                    {e}
                                </div>
                            }
                        })
                }}

                <Show
                    when=move || !is_loading.get()
                    fallback=|| {
                        view! {
                            <Flex justify=FlexJustify::Center style="padding: 32px;">
                                <Spinner />
                            </Flex>
                        }
                    }
                >
                    // Stats grid
                    <div style="display: grid; grid-template-columns: 1fr 1fr; gap: 16px; margin-bottom: 24px;">
                        <div style="background: var(--colorNeutralBackground2); border-radius: 8px; padding: 20px;">
                            <h3 style="font-weight: 600; margin-bottom: 6px;">"Total Documents"</h3>
                            <p style="font-size: 28px; font-weight: bold; color: var(--colorBrandForeground1);">
                                {move || total_documents()}
                            </p>
                        </div>
                        <div style="background: var(--colorNeutralBackground2); border-radius: 8px; padding: 20px;">
                            <h3 style="font-weight: 600; margin-bottom: 6px;">"Collection Name"</h3>
                            <p style="font-size: 16px; font-weight: 500;">
                                {move || {
                                    stats
                                        .get()
                                        .map(|s| s.collection_name)
                                        .unwrap_or_else(|| "N/A".to_string())
                                }}
                            </p>
                        </div>
                    </div>

                    // Embedding model
                    {move || {
                        stats
                            .get()
                            .and_then(|s| s.embedding_model)
                            .map(|model| {
                                view! {
                                    <div style="background: var(--colorNeutralBackground2); border-radius: 8px; padding: 16px; margin-bottom: 24px;">
                                        <h3 style="font-weight: 600; margin-bottom: 6px;">
                                            "Embedding Model"
                                        </h3>
                                        <p style="font-size: 13px; font-family: monospace; color: var(--colorNeutralForeground3);">
                                            {model}
                                        </p>
                                    </div>
                                }
                            })
                    }}

                    // Actions
                    <div style="padding-top: 20px; border-top: 1px solid var(--colorNeutralStroke2);">
                        <h3 style="font-weight: 600; margin-bottom: 12px;">"Actions"</h3>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || {
                                is_clearing.get() || total_documents() == 0
                            })
                            on_click=handle_clear
                        >
                            {move || {
                                if is_clearing.get() { "Clearing..." } else { "Clear All Documents" }
                            }}
                        </Button>
                        <p style="font-size: 12px; color: var(--colorNeutralForeground3); margin-top: 8px;">
                            "This will permanently delete all indexed documents"
                        </p>
                    </div>

                    // About
                    <div style="margin-top: 24px; padding-top: 20px; border-top: 1px solid var(--colorNeutralStroke2);">
                        <h3 style="font-weight: 600; margin-bottom: 10px;">"About"</h3>
                        <p style="font-size: 13px; color: var(--colorNeutralForeground3); line-height: 1.6;">
                            "This RAG (Retrieval-Augmented Generation) chatbot uses vector embeddings to find relevant document chunks and generate accurate answers. Documents are split into chunks and stored in a vector database for efficient retrieval."
                        </p>
                    </div>
                </Show>
            </div>
        </div>
    }
}
