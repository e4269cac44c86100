//! Document Upload - View Component

use super::api;
use super::session::UploadStatus;
use super::view_model::UploadVm;
use crate::layout::global_context::{AppGlobalContext, AppTab};
use crate::shared::format::format_file_size;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn DocumentUpload() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = use_context::<UploadVm>().expect("UploadVm context not found");

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                vm.session.update(|s| {
                    s.select_file(file);
                });
            }
            // allow picking the same file again later
            input.set_value("");
        }
    };

    let handle_upload = move |_| {
        // The session rejects a submit without a staged file or with a
        // transfer already in flight; the disabled button is advisory.
        let Some(file) = vm.session.try_update(|s| s.begin_upload()).flatten() else {
            return;
        };

        spawn_local(async move {
            match api::upload(&file).await {
                Ok(response) => {
                    let indexed = response.success;
                    vm.session.update(|s| s.resolve_response(&response));
                    if indexed {
                        // The one cross-view coupling point: fires once per
                        // indexed upload, after local state has settled.
                        ctx.notify_upload_completed();
                        ctx.activate_tab(AppTab::Chat);
                    }
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    vm.session
                        .update(|s| s.resolve_transport_failure(e.backend_detail()));
                }
            }
        });
    };

    view! {
        <div style="max-width: 640px; margin: 0 auto;">
            <div style="background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px; padding: 32px;">
                <h2 style="font-size: 22px; font-weight: bold; margin-bottom: 20px;">
                    "Upload Documents"
                </h2>

                // File picker
                <div style="border: 2px dashed var(--colorNeutralStroke1); border-radius: 8px; padding: 32px; text-align: center;">
                    <label
                        for="document-upload-input"
                        style="cursor: pointer; color: var(--colorBrandForeground1); font-weight: 600;"
                    >
                        "Choose a file"
                    </label>
                    <input
                        id="document-upload-input"
                        type="file"
                        accept=".pdf,.txt"
                        style="display: none;"
                        on:change=handle_file_select
                    />
                    <p style="font-size: 13px; color: var(--colorNeutralForeground3); margin-top: 8px;">
                        "PDF or TXT files only"
                    </p>
                </div>

                // Staged file
                {move || {
                    vm.session
                        .with(|s| s.staged_file().map(|f| (f.name(), f.size())))
                        .map(|(name, size)| {
                            view! {
                                <Flex
                                    justify=FlexJustify::SpaceBetween
                                    align=FlexAlign::Center
                                    style="margin-top: 16px; padding: 12px 16px; background: var(--colorNeutralBackground2); border-radius: 8px;"
                                >
                                    <div>
                                        <p style="font-weight: 500;">{name}</p>
                                        <p style="font-size: 12px; color: var(--colorNeutralForeground3);">
                                            {format_file_size(size)}
                                        </p>
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        disabled=Signal::derive(move || {
                                            vm.session.with(|s| s.is_uploading())
                                        })
                                        on_click=move |_| {
                                            vm.session
                                                .update(|s| {
                                                    s.clear_file();
                                                });
                                        }
                                    >
                                        "Remove"
                                    </Button>
                                </Flex>
                            }
                        })
                }}

                // Submit
                <div style="margin-top: 24px;">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || {
                            vm.session.with(|s| s.staged_file().is_none() || s.is_uploading())
                        })
                        on_click=handle_upload
                    >
                        {move || {
                            if vm.session.with(|s| s.is_uploading()) {
                                "Uploading..."
                            } else {
                                "Upload Document"
                            }
                        }}
                    </Button>
                </div>

                // Status banner
                {move || {
                    let (status, message) = vm
                        .session
                        .with(|s| (s.status(), s.status_message().to_string()));
                    match status {
                        UploadStatus::Succeeded => {
                            Some(
                                view! {
                                    <div style="margin-top: 16px; padding: 12px 16px; border-radius: 8px; background: var(--colorPaletteGreenBackground1); color: var(--colorPaletteGreenForeground1);">
                                        {message}
                                    </div>
                                },
                            )
                        }
                        UploadStatus::Failed => {
                            Some(
                                view! {
                                    <div style="margin-top: 16px; padding: 12px 16px; border-radius: 8px; background: var(--colorPaletteRedBackground1); color: var(--colorPaletteRedForeground1);">
                                        {message}
                                    </div>
                                },
                            )
                        }
                        _ => None,
                    }
                }}

                // Instructions
                <div style="margin-top: 32px; padding-top: 20px; border-top: 1px solid var(--colorNeutralStroke2);">
                    <h3 style="font-weight: 600; margin-bottom: 10px;">"Instructions:"</h3>
                    <ol style="font-size: 13px; color: var(--colorNeutralForeground3); padding-left: 18px; display: flex; flex-direction: column; gap: 6px;">
                        <li>"Choose a PDF or TXT file to upload"</li>
                        <li>"Click \"Upload Document\" to index the content"</li>
                        <li>"Go to the Chat tab to ask questions about your documents"</li>
                    </ol>
                </div>
            </div>
        </div>
    }
}
