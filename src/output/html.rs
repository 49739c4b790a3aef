//! HTML listing page

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::tree::{DirectoryIndex, FileEntry, format_timestamp};

use super::config::RenderOptions;
use super::utils::{format_date, format_size, render_title};

const DIR_ICON: &str = "\u{1F4C1}";
const FILE_ICON: &str = "\u{1F4C4}";
const PARENT_ICON: &str = "\u{2B06}\u{FE0F}";

/// Embedded theme used when no external stylesheet is configured.
const DEFAULT_STYLE: &str = r#"    :root { color-scheme: dark; }
    body {
      margin: 0;
      padding: 2rem;
      background: #0d1117;
      color: #c9d1d9;
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    }
    main { max-width: 960px; margin: 0 auto; }
    h1 { font-size: 1.5rem; font-weight: 600; margin-bottom: 1.5rem; word-break: break-all; }
    table { width: 100%; border-collapse: collapse; }
    th, td { padding: 0.5rem 0.75rem; text-align: left; border-bottom: 1px solid #21262d; }
    th { color: #8b949e; font-weight: 500; font-size: 0.85rem; text-transform: uppercase; }
    tr:hover td { background: #161b22; }
    td.icon { width: 1.5rem; }
    td.size, td.modified { color: #8b949e; white-space: nowrap; }
    td.size { text-align: right; }
    a { color: #58a6ff; text-decoration: none; }
    a:hover { text-decoration: underline; }
    footer { margin-top: 1.5rem; color: #484f58; font-size: 0.8rem; }
"#;

/// Render a self-contained HTML page listing the entries of `index`.
///
/// Names, paths, title and stylesheet URL are escaped by `maud`; link
/// targets are additionally percent-encoded.
pub fn render_html(index: &DirectoryIndex, options: &RenderOptions) -> String {
    let title = render_title(&options.title_template, &index.path);

    let page = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                @match options.stylesheet.as_deref() {
                    Some(url) => { link rel="stylesheet" href=(url); }
                    None => { style { (PreEscaped(DEFAULT_STYLE)) } }
                }
            }
            body {
                main {
                    h1 { (title) }
                    table {
                        thead {
                            tr {
                                th {}
                                th { "Name" }
                                th class="size" { "Size" }
                                th { "Modified" }
                            }
                        }
                        tbody {
                            @if !index.is_root() {
                                tr class="parent" {
                                    td class="icon" { (PARENT_ICON) }
                                    td { a href="../" { "Parent directory" } }
                                    td class="size" { "-" }
                                    td class="modified" { "-" }
                                }
                            }
                            @for entry in &index.entries {
                                (entry_row(entry))
                            }
                        }
                    }
                    footer { "Generated " (format_timestamp(&index.generated)) }
                }
            }
        }
    };
    page.into_string()
}

fn entry_row(entry: &FileEntry) -> Markup {
    let (icon, class, suffix) = if entry.is_dir() {
        (DIR_ICON, "directory", "/")
    } else {
        (FILE_ICON, "file", "")
    };

    html! {
        tr class=(class) {
            td class="icon" { (icon) }
            td { a href=(link_target(&entry.name, suffix)) { (entry.name) (suffix) } }
            td class="size" { (format_size(entry.size)) }
            td class="modified" { (format_date(entry.modified.as_ref())) }
        }
    }
}

/// Relative href for an entry, safe for names containing `#`, `%`, `?` or spaces.
fn link_target(name: &str, suffix: &str) -> String {
    format!("{}{}", urlencoding::encode(name), suffix)
}
