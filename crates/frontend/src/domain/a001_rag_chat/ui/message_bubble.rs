use super::view_model::ChatVm;
use crate::shared::date_utils::format_time;
use contracts::domain::a001_rag_chat::aggregate::Exchange;
use leptos::prelude::*;

/// One turn of the conversation. Assistant turns with attribution expose a
/// "View sources" affordance that selects them in the sources panel.
#[component]
#[allow(non_snake_case)]
pub fn MessageBubble(exchange: Exchange) -> impl IntoView {
    let vm = use_context::<ChatVm>().expect("ChatVm context not found");

    let is_user = exchange.is_user();
    let source_count = exchange.sources().len();
    let exchange_id = exchange.id;
    let timestamp = format_time(&exchange.created_at);
    let content = exchange.content;

    let wrapper_style = if is_user {
        "align-self: flex-end; max-width: 80%; text-align: right;"
    } else {
        "align-self: flex-start; max-width: 80%;"
    };
    let bubble_style = if is_user {
        "display: inline-block; text-align: left; background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
    } else {
        "display: inline-block; text-align: left; background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
    };

    view! {
        <div style=wrapper_style>
            <div style=bubble_style>
                <div style="white-space: pre-wrap;">{content}</div>
            </div>

            {(source_count > 0)
                .then(|| {
                    view! {
                        <div>
                            <button
                                style="background: none; border: none; cursor: pointer; padding: 2px 0; font-size: 12px; color: var(--colorBrandForeground1);"
                                on:click=move |_| vm.selected_answer.set(Some(exchange_id))
                            >
                                {format!(
                                    "View {} source{}",
                                    source_count,
                                    if source_count > 1 { "s" } else { "" },
                                )}
                            </button>
                        </div>
                    }
                })}

            <p style="font-size: 11px; color: var(--colorNeutralForeground4); margin-top: 4px;">
                {timestamp}
            </p>
        </div>
    }
}
