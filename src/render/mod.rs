//! HTML dashboard rendering.
//!
//! Rendering is a total function of the records: sort newest first, pick a
//! card per record, wrap everything in the page shell. Upstream text is
//! escaped by maud; only the bundled stylesheet and script go out raw.

mod assets;
mod card;
mod locale;

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::aggregate::RepositoryRecord;

pub use card::{
    INITIAL_ASSETS, NOTES_PREVIEW_CHARS, NotesPreview, card, error_message, split_assets,
};
pub use locale::{format_datetime, persian_digits, to_jalali};

pub const CONTENT_TYPE: &str = "text/html; charset=utf-8";

const PAGE_TITLE: &str = "آخرین به‌روزرسانی‌های برنامه‌ها";

/// Newest release first. The sort is stable, so ties keep fetch order.
pub fn sort_records(records: &mut [RepositoryRecord]) {
    records.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
}

fn page(cards: Markup, rendered_at: DateTime<Utc>) -> Markup {
    html! {
        (DOCTYPE)
        html dir="rtl" lang="fa" {
            head {
                meta charset="UTF-8";
                title { (PAGE_TITLE) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                style { (PreEscaped(assets::STYLESHEET)) }
            }
            body {
                header {
                    div.container {
                        h1 { (PAGE_TITLE) }
                        p.subtitle { "همیشه از جدیدترین نسخه‌ها مطلع باشید" }
                    }
                }

                div.repo-grid { (cards) }

                footer {
                    div.container {
                        "آخرین بروزرسانی: " (format_datetime(rendered_at))
                    }
                }

                script { (PreEscaped(assets::TOGGLE_SCRIPT)) }
            }
        }
    }
}

/// Render the full dashboard document.
pub fn render(mut records: Vec<RepositoryRecord>, rendered_at: DateTime<Utc>) -> String {
    sort_records(&mut records);

    let cards = html! {
        @for record in &records {
            (card(record))
        }
    };

    page(cards, rendered_at).into_string()
}
