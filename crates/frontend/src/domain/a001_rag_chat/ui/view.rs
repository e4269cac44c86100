//! RAG Chat - View Component

use super::message_bubble::MessageBubble;
use super::source_card::SourceCard;
use super::view_model::ChatVm;
use crate::domain::a001_rag_chat::api;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ChatInterface() -> impl IntoView {
    let vm = use_context::<ChatVm>().expect("ChatVm context not found");
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn visible as the log grows
    Effect::new(move |_| {
        let _count = vm.session.with(|s| s.exchanges().len());
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        let text = vm.input.get_untracked();

        // The session decides whether the submission is accepted; the
        // disabled input above is advisory only.
        let accepted = vm
            .session
            .try_update(|s| s.begin_query(&text))
            .unwrap_or(false);
        if !accepted {
            return;
        }
        vm.input.set(String::new());

        spawn_local(async move {
            match api::query(&text, api::DEFAULT_TOP_K).await {
                Ok(response) => {
                    vm.session
                        .update(|s| s.resolve_success(response.answer, response.sources));
                }
                Err(e) => {
                    log::error!("query failed: {}", e);
                    vm.session.update(|s| s.resolve_failure());
                }
            }
        });
    });

    view! {
        <div style="display: grid; grid-template-columns: 2fr 1fr; gap: 24px; align-items: start;">
            // Chat panel
            <div style="background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; height: 600px; display: flex; flex-direction: column;">
                <div
                    node_ref=messages_container_ref
                    style="flex: 1; overflow-y: auto; padding: 24px; display: flex; flex-direction: column; gap: 12px;"
                >
                    <Show when=move || vm.session.with(|s| s.is_empty())>
                        <div style="text-align: center; color: var(--colorNeutralForeground3); margin-top: 80px;">
                            <p style="font-size: 18px; margin-bottom: 8px;">"Welcome to RAG Chatbot!"</p>
                            <p style="font-size: 14px;">"Upload documents and start asking questions."</p>
                        </div>
                    </Show>

                    <For
                        each=move || vm.session.with(|s| s.exchanges().to_vec())
                        key=|exchange| exchange.id
                        let:exchange
                    >
                        <MessageBubble exchange=exchange />
                    </For>

                    {move || {
                        vm.session
                            .with(|s| s.is_pending())
                            .then(|| {
                                view! {
                                    <Flex align=FlexAlign::Center style="gap: 8px; color: var(--colorNeutralForeground3);">
                                        <Spinner />
                                        <span>"Thinking..."</span>
                                    </Flex>
                                }
                            })
                    }}
                </div>

                // Input area
                <div style="border-top: 1px solid var(--colorNeutralStroke2); padding: 16px;">
                    <Flex style="gap: 8px;">
                        <div style="flex: 1;">
                            <Input
                                value=vm.input
                                placeholder="Ask a question..."
                                disabled=Signal::derive(move || vm.session.with(|s| s.is_pending()))
                                on:keydown=move |ev: web_sys::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        handle_send.run(());
                                    }
                                }
                            />
                        </div>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.session.with(|s| s.is_pending()))
                            on_click=move |_| handle_send.run(())
                        >
                            "Send"
                        </Button>
                    </Flex>
                </div>
            </div>

            // Sources panel
            <div style="background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 24px; height: 600px; overflow-y: auto;">
                <h2 style="font-size: 18px; font-weight: bold; margin-bottom: 16px;">"Sources"</h2>
                {move || {
                    let sources = vm.selected_sources();
                    if sources.is_empty() {
                        view! {
                            <p style="color: var(--colorNeutralForeground3); font-size: 14px;">
                                "Sources will appear here when you ask a question."
                            </p>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div style="display: flex; flex-direction: column; gap: 12px;">
                                {sources
                                    .into_iter()
                                    .map(|source| view! { <SourceCard source /> })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
