//! The three card variants: published release, no releases, failed lookup.

use maud::{Markup, html};

use super::locale::format_datetime;
use crate::aggregate::{RecordState, RepositoryRecord};
use crate::config::RepositoryConfig;
use crate::source::{FetchError, Release, ReleaseAsset};

/// Notes longer than this many characters are collapsed.
pub const NOTES_PREVIEW_CHARS: usize = 150;

/// Assets visible before "show more".
pub const INITIAL_ASSETS: usize = 3;

const NO_NOTES: &str = "بدون توضیحات";

const GITHUB_ICON_PATH: &str = "M12 .297c-6.63 0-12 5.373-12 12 0 5.303 3.438 9.8 8.205 11.385.6.113.82-.258.82-.577 0-.285-.01-1.04-.015-2.04-3.338.724-4.042-1.61-4.042-1.61C4.422 18.07 3.633 17.7 3.633 17.7c-1.087-.744.084-.729.084-.729 1.205.084 1.838 1.236 1.838 1.236 1.07 1.835 2.809 1.305 3.495.998.108-.776.417-1.305.76-1.605-2.665-.3-5.466-1.332-5.466-5.93 0-1.31.465-2.38 1.235-3.22-.135-.303-.54-1.523.105-3.176 0 0 1.005-.322 3.3 1.23.96-.267 1.98-.399 3-.405 1.02.006 2.04.138 3 .405 2.28-1.552 3.285-1.23 3.285-1.23.645 1.653.24 2.873.12 3.176.765.84 1.23 1.91 1.23 3.22 0 4.61-2.805 5.625-5.475 5.92.42.36.81 1.096.81 2.22 0 1.606-.015 2.896-.015 3.286 0 .315.21.69.825.57C20.565 22.092 24 17.592 24 12.297c0-6.627-5.373-12-12-12";

const CALENDAR_ICON_PATH: &str = "M19 3h-1V1h-2v2H8V1H6v2H5c-1.11 0-2 .9-2 2v14c0 1.1.89 2 2 2h14c1.1 0 2-.9 2-2V5c0-1.1-.9-2-2-2zm0 16H5V8h14v11zM9 10H7v2h2v-2zm4 0h-2v2h2v-2zm4 0h-2v2h2v-2zm-8 4H7v2h2v-2zm4 0h-2v2h2v-2zm4 0h-2v2h2v-2z";

/// Release notes split for display. The full text is never altered.
#[derive(Debug, PartialEq)]
pub struct NotesPreview<'a> {
    pub full: &'a str,
    /// Present only when the notes were long enough to collapse.
    pub short: Option<String>,
}

impl<'a> NotesPreview<'a> {
    pub fn new(body: Option<&'a str>) -> Self {
        let full = match body {
            Some(text) if !text.is_empty() => text,
            _ => NO_NOTES,
        };

        let short = full
            .char_indices()
            .nth(NOTES_PREVIEW_CHARS)
            .map(|(cut, _)| format!("{}...", &full[..cut]));

        Self { full, short }
    }

    /// Text visible before the reader expands it.
    pub fn visible(&self) -> &str {
        self.short.as_deref().unwrap_or(self.full)
    }
}

/// Split assets into the always-visible head and the collapsed tail.
pub fn split_assets(assets: &[ReleaseAsset]) -> (&[ReleaseAsset], &[ReleaseAsset]) {
    assets.split_at(assets.len().min(INITIAL_ASSETS))
}

/// Persian text shown on an error card.
pub fn error_message(error: &FetchError) -> String {
    match error {
        FetchError::Request(msg) => format!("خطای شبکه: {}", msg),
        FetchError::Status(code) => format!("خطای HTTP: {}", code),
        FetchError::Decode(_) | FetchError::InvalidFormat => "فرمت داده نامعتبر".to_string(),
    }
}

fn card_header(config: &RepositoryConfig, title: &str) -> Markup {
    html! {
        div.card-header {
            div.app-info {
                div.app-name { (title) }
                div.app-repo { (config.id.to_string()) }
                @if !config.description.is_empty() {
                    div.app-desc { (config.description) }
                }
            }
            a.github-link href={ "https://github.com/" (config.id.to_string()) } target="_blank" {
                "گیتهاب"
                svg.github-icon viewBox="0 0 24 24" fill="currentColor" {
                    path d=(GITHUB_ICON_PATH) {}
                }
            }
        }
    }
}

fn asset_link(asset: &ReleaseAsset) -> Markup {
    html! {
        a.download-btn href=(asset.download_url) target="_blank" { (asset.name) }
    }
}

fn release_card(config: &RepositoryConfig, release: &Release) -> Markup {
    let notes = NotesPreview::new(release.body.as_deref());
    let (initial, remaining) = split_assets(&release.assets);

    html! {
        div.repo-card {
            (card_header(config, release.display_name()))
            div.card-body {
                div.release-date {
                    svg.date-icon viewBox="0 0 24 24" fill="currentColor" {
                        path d=(CALENDAR_ICON_PATH) {}
                    }
                    @if let Some(published) = release.published_at {
                        (format_datetime(published))
                    }
                }

                div.release-notes {
                    h3.downloads-title { "یادداشت انتشار:" }
                    div.notes-short { (notes.visible()) }
                    @if notes.short.is_some() {
                        div.notes-full style="display:none" { (notes.full) }
                        button.show-more-btn onclick="toggleNotes(this)" data-state="short" {
                            "نمایش کامل"
                        }
                    }
                }

                h3.downloads-title { "فایل‌های قابل دانلود (" (release.assets.len()) "):" }
                div.download-list {
                    @for asset in initial {
                        (asset_link(asset))
                    }
                    @if !remaining.is_empty() {
                        div.remaining-files style="display:none" {
                            @for asset in remaining {
                                (asset_link(asset))
                            }
                        }
                        button.show-more-btn.files-btn onclick="toggleFiles(this)" data-state="short" {
                            "نمایش " (remaining.len()) " فایل بیشتر"
                        }
                    }
                }
            }
        }
    }
}

fn status_card(config: &RepositoryConfig, body: Markup) -> Markup {
    html! {
        div.repo-card {
            (card_header(config, &config.id.repo))
            (body)
        }
    }
}

fn error_card(config: &RepositoryConfig, error: &FetchError) -> Markup {
    status_card(
        config,
        html! {
            div.error-card { "خطا در دریافت اطلاعات: " (error_message(error)) }
        },
    )
}

fn empty_card(config: &RepositoryConfig) -> Markup {
    status_card(
        config,
        html! {
            div.empty-card { "هنوز هیچ نسخه‌ای منتشر نشده است" }
        },
    )
}

/// Render one record as the card matching its state.
pub fn card(record: &RepositoryRecord) -> Markup {
    match record.state() {
        RecordState::Failed(error) => error_card(&record.config, error),
        RecordState::Empty => empty_card(&record.config),
        RecordState::Published(release) => release_card(&record.config, release),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(n: usize) -> Vec<ReleaseAsset> {
        (0..n)
            .map(|i| ReleaseAsset {
                name: format!("file-{}.apk", i),
                download_url: format!("https://example.com/file-{}.apk", i),
            })
            .collect()
    }

    fn record(result: Result<Vec<Release>, FetchError>) -> RepositoryRecord {
        let config = RepositoryConfig::new("2dust/v2rayNG", "کلاینت V2Ray برای اندروید").unwrap();
        RepositoryRecord::from_lookup(config, result)
    }

    #[test]
    fn test_notes_preview_short_text_untouched() {
        let notes = NotesPreview::new(Some("Bug fixes"));
        assert_eq!(notes.short, None);
        assert_eq!(notes.visible(), "Bug fixes");
    }

    #[test]
    fn test_notes_preview_exactly_limit_not_truncated() {
        let text = "x".repeat(NOTES_PREVIEW_CHARS);
        let notes = NotesPreview::new(Some(&text));
        assert_eq!(notes.short, None);
    }

    #[test]
    fn test_notes_preview_truncates_long_text() {
        let text = "a".repeat(200);
        let notes = NotesPreview::new(Some(&text));
        assert_eq!(notes.short, Some(format!("{}...", "a".repeat(150))));
        assert_eq!(notes.full.len(), 200);
    }

    #[test]
    fn test_notes_preview_counts_characters_not_bytes() {
        let text = "ب".repeat(151);
        let notes = NotesPreview::new(Some(&text));
        let short = notes.short.unwrap();
        assert_eq!(short.chars().count(), 153);
        assert!(short.starts_with(&"ب".repeat(150)));
    }

    #[test]
    fn test_notes_preview_missing_body() {
        assert_eq!(NotesPreview::new(None).visible(), NO_NOTES);
        assert_eq!(NotesPreview::new(Some("")).visible(), NO_NOTES);
    }

    #[test]
    fn test_split_assets() {
        let few = assets(2);
        let (head, tail) = split_assets(&few);
        assert_eq!(head.len(), 2);
        assert!(tail.is_empty());

        let many = assets(5);
        let (head, tail) = split_assets(&many);
        assert_eq!(head.len(), 3);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].name, "file-3.apk");
    }

    #[test]
    fn test_error_message() {
        assert!(error_message(&FetchError::Status(503)).contains("503"));
        assert_eq!(error_message(&FetchError::InvalidFormat), "فرمت داده نامعتبر");
    }

    #[test]
    fn test_release_card_collapses_long_notes() {
        let release = Release {
            tag: "1.9.4".into(),
            body: Some("a".repeat(200)),
            ..Default::default()
        };
        let html = card(&record(Ok(vec![release]))).into_string();

        let short = format!(r#"<div class="notes-short">{}...</div>"#, "a".repeat(150));
        let (_, hidden) = html.split_once("notes-full").unwrap();
        assert!(html.contains(&short));
        assert!(hidden.contains(&format!(">{}</div>", "a".repeat(200))));
        assert!(html.contains("toggleNotes(this)"));
    }

    #[test]
    fn test_release_card_short_notes_have_no_toggle() {
        let release = Release {
            tag: "1.9.4".into(),
            body: Some("Bug fixes".into()),
            ..Default::default()
        };
        let html = card(&record(Ok(vec![release]))).into_string();

        assert!(html.contains(r#"<div class="notes-short">Bug fixes</div>"#));
        assert!(!html.contains("notes-full"));
    }

    #[test]
    fn test_release_card_collapses_extra_assets() {
        let release = Release {
            tag: "1.9.4".into(),
            assets: assets(5),
            ..Default::default()
        };
        let html = card(&record(Ok(vec![release]))).into_string();

        let (visible, hidden) = html.split_once("remaining-files").unwrap();
        assert_eq!(visible.matches("download-btn").count(), 3);
        assert_eq!(hidden.matches("download-btn").count(), 2);
        assert!(html.contains("نمایش 2 فایل بیشتر"));
        assert!(html.contains("فایل‌های قابل دانلود (5):"));
    }

    #[test]
    fn test_release_card_three_assets_no_toggle() {
        let release = Release {
            tag: "1.9.4".into(),
            assets: assets(3),
            ..Default::default()
        };
        let html = card(&record(Ok(vec![release]))).into_string();

        assert_eq!(html.matches("download-btn").count(), 3);
        assert!(!html.contains("remaining-files"));
        assert!(!html.contains("toggleFiles"));
    }

    #[test]
    fn test_release_card_header() {
        let release = Release {
            tag: "1.9.4".into(),
            name: Some("v1.9.4".into()),
            ..Default::default()
        };
        let html = card(&record(Ok(vec![release]))).into_string();

        assert!(html.contains(r#"<div class="app-name">v1.9.4</div>"#));
        assert!(html.contains(r#"<div class="app-repo">2dust/v2rayNG</div>"#));
        assert!(html.contains("کلاینت V2Ray برای اندروید"));
        assert!(html.contains(r#"href="https://github.com/2dust/v2rayNG""#));
    }

    #[test]
    fn test_release_card_escapes_upstream_text() {
        let release = Release {
            tag: "<script>alert(1)</script>".into(),
            body: Some("<b>bold</b>".into()),
            ..Default::default()
        };
        let html = card(&record(Ok(vec![release]))).into_string();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_error_card() {
        let html = card(&record(Err(FetchError::Status(503)))).into_string();

        assert!(html.contains("error-card"));
        assert!(html.contains("503"));
        assert!(html.contains(r#"<div class="app-name">v2rayNG</div>"#));
        assert!(!html.contains("card-body"));
    }

    #[test]
    fn test_empty_card() {
        let html = card(&record(Ok(vec![]))).into_string();

        assert!(html.contains("empty-card"));
        assert!(html.contains("هنوز هیچ نسخه‌ای منتشر نشده است"));
        assert!(!html.contains("error-card"));
    }
}
