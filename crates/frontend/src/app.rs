use leptos::prelude::*;

use crate::chat::PdfChat;
use crate::shared::icons::icon;

/// Application root: branding sidebar plus the chat page.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div style="display: flex; height: 100vh; overflow: hidden;">
            <aside style="width: 220px; flex-shrink: 0; display: flex; flex-direction: column; justify-content: space-between; padding: 20px; background: var(--colorNeutralBackground2); border-right: 1px solid var(--colorNeutralStroke2);">
                <header style="font-size: 20px; font-weight: bold;">
                    "AskPDF" <span style="color: var(--colorBrandForeground1);">".ai"</span>
                </header>
                <div style="font-size: 13px; color: var(--colorNeutralForeground3);">
                    <p>"Built with Leptos & Thaw"</p>
                    <p>
                        <a
                            href="https://github.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            style="display: inline-flex; align-items: center; gap: 6px; color: inherit;"
                        >
                            {icon("github")}
                            " View on GitHub"
                        </a>
                    </p>
                </div>
            </aside>

            <PdfChat />
        </div>
    }
}
