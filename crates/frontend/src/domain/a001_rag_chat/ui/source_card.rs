use contracts::domain::a001_rag_chat::aggregate::SourceRef;
use leptos::prelude::*;
use thaw::*;

/// Card for one retrieved passage: provenance, relevance and excerpt
#[component]
#[allow(non_snake_case)]
pub fn SourceCard(source: SourceRef) -> impl IntoView {
    let name = source
        .metadata
        .source
        .clone()
        .unwrap_or_else(|| "Document".to_string());
    let page = source.metadata.page;
    let relevance = format!("{:.0}%", source.relevance_score * 100.0);
    let content = source.content;

    view! {
        <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 12px; background: var(--colorNeutralBackground2);">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 6px;">
                <span style="font-size: 13px; font-weight: 600;">{name}</span>
                <span style="font-size: 12px; font-weight: 500; color: var(--colorPaletteMarigoldForeground1);">
                    {relevance}
                </span>
            </Flex>

            {page
                .map(|p| {
                    view! {
                        <p style="font-size: 11px; color: var(--colorNeutralForeground3); margin-bottom: 6px;">
                            {format!("Page {}", p)}
                        </p>
                    }
                })}

            <div style="font-size: 13px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke3); border-radius: 4px; padding: 8px; white-space: pre-wrap;">
                {content}
            </div>
        </div>
    }
}
