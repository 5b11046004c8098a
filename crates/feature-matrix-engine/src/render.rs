//! Plain-text rendering of normalized tables.
//!
//! Comments are free text that may contain `[text](url)` links; they go
//! through the link scanner and every link is rewritten for the target
//! [`LinkFormat`].

use std::borrow::Cow;

use crate::models::{
    Feature, Resource, StatusTable, SupportStatus, SupportStatusItem, TableInstance,
};
use crate::parsing::replace_links;

/// How links are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkFormat {
    /// `[text](url)`, i.e. unchanged.
    Markdown,
    /// `text (url)`
    #[default]
    Plain,
    /// `text`
    TextOnly,
    /// OSC 8 hyperlink escape, for terminals that support it.
    Terminal,
}

pub fn format_link(text: &str, url: &str, format: LinkFormat) -> String {
    match format {
        LinkFormat::Markdown => format!("[{text}]({url})"),
        LinkFormat::Plain => format!("{text} ({url})"),
        LinkFormat::TextOnly => text.to_string(),
        LinkFormat::Terminal => format!("\x1b]8;;{url}\x1b\\{text}\x1b]8;;\x1b\\"),
    }
}

/// Rewrites every link in `text` for `format`.
pub fn render_links(text: &str, format: LinkFormat) -> Cow<'_, str> {
    match format {
        LinkFormat::Markdown => Cow::Borrowed(text),
        _ => replace_links(text, |t, u| format_link(t, u, format)).replaced_text,
    }
}

/// `"<glyph> <short>"`, or the raw tag if the table has no entry.
pub fn status_cell(status: SupportStatus, statuses: &StatusTable) -> String {
    match statuses.get(status) {
        Some(item) => format!("{} {}", item.glyph.trim_end(), item.short),
        None => status.to_string(),
    }
}

pub fn feature_row(feature: &Feature, statuses: &StatusTable, format: LinkFormat) -> [String; 4] {
    [
        feature.name.clone(),
        status_cell(feature.core, statuses),
        status_cell(feature.r#mod, statuses),
        render_links(&feature.comment, format).into_owned(),
    ]
}

/// Name and link; the link shows `url_name` when present.
pub fn resource_row(resource: &Resource, format: LinkFormat) -> [String; 2] {
    let link = match &resource.url_name {
        Some(label) => format_link(label, &resource.url, format),
        None => resource.url.clone(),
    };
    [resource.name.clone(), link]
}

pub const FEATURE_HEADER: [&str; 4] = ["Feature", "Core", "Mod", "Comment"];
pub const RESOURCE_HEADER: [&str; 2] = ["Resource", "Link"];

/// Renders one table as a title line followed by aligned rows.
pub fn render_table(table: &TableInstance, statuses: &StatusTable, format: LinkFormat) -> Vec<String> {
    let mut lines = vec![table.name().to_string()];
    match table {
        TableInstance::FeatureTable(t) => {
            let rows = t
                .features
                .iter()
                .map(|f| feature_row(f, statuses, format).to_vec())
                .collect::<Vec<_>>();
            lines.extend(align(&FEATURE_HEADER, &rows));
        }
        TableInstance::ResourceTable(t) => {
            let rows = t
                .resources
                .iter()
                .map(|r| resource_row(r, format).to_vec())
                .collect::<Vec<_>>();
            lines.extend(align(&RESOURCE_HEADER, &rows));
        }
        TableInstance::MetaInformation(t) => {
            lines.push(format!("Last update: {}", t.meta.last_update));
        }
    }
    lines
}

pub fn render_legend(items: &[&SupportStatusItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| {
            format!(
                "{} {}: {}",
                item.glyph.trim_end(),
                item.short,
                item.description
            )
        })
        .collect()
}

/// Pads columns to a common width (in chars), with a dashed rule under the
/// header. Trailing padding is trimmed.
fn align(header: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let head: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    [&head, &rule]
        .into_iter()
        .chain(rows)
        .map(|row| join_padded(row, &widths))
        .collect()
}

fn join_padded(cells: &[String], widths: &[usize]) -> String {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join("  ");
    line.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureTable, Meta, MetaInformation, ResourceTable};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(LinkFormat::Markdown, "see [docs](https://x.dev) now")]
    #[case(LinkFormat::Plain, "see docs (https://x.dev) now")]
    #[case(LinkFormat::TextOnly, "see docs now")]
    #[case(
        LinkFormat::Terminal,
        "see \x1b]8;;https://x.dev\x1b\\docs\x1b]8;;\x1b\\ now"
    )]
    fn render_links_per_format(#[case] format: LinkFormat, #[case] expected: &str) {
        assert_eq!(render_links("see [docs](https://x.dev) now", format), expected);
    }

    #[test]
    fn render_links_leaves_plain_text_alone() {
        assert_eq!(render_links("no links (here)", LinkFormat::Plain), "no links (here)");
    }

    #[test]
    fn status_cell_uses_glyph_and_label() {
        let statuses = StatusTable::default();
        assert_eq!(status_cell(SupportStatus::Ok, &statuses), "✓ Ok");
        assert_eq!(status_cell(SupportStatus::WontDo, &statuses), "⛔ Won't Do");
    }

    #[test]
    fn status_cell_falls_back_to_tag() {
        let statuses = StatusTable::from_items(vec![]);
        assert_eq!(status_cell(SupportStatus::MenuOption, &statuses), "menu-option");
    }

    #[test]
    fn resource_row_prefers_url_name() {
        let named = Resource {
            name: "Wiki".into(),
            url: "https://wiki.example".into(),
            url_name: Some("wiki".into()),
        };
        let bare = Resource {
            url_name: None,
            ..named.clone()
        };
        assert_eq!(
            resource_row(&named, LinkFormat::Plain),
            ["Wiki".to_string(), "wiki (https://wiki.example)".to_string()]
        );
        assert_eq!(
            resource_row(&bare, LinkFormat::Plain)[1],
            "https://wiki.example"
        );
    }

    #[test]
    fn render_feature_table_aligned() {
        let table = TableInstance::FeatureTable(FeatureTable {
            name: "Flight".into(),
            features: vec![
                Feature {
                    name: "Orbits".into(),
                    core: SupportStatus::Ok,
                    r#mod: SupportStatus::No,
                    comment: "[guide](g)".into(),
                },
                Feature {
                    name: "Docking".into(),
                    core: SupportStatus::Wip,
                    r#mod: SupportStatus::Ok,
                    comment: String::new(),
                },
            ],
        });

        let lines = render_table(&table, &StatusTable::default(), LinkFormat::Plain);

        assert_eq!(
            lines,
            vec![
                "Flight",
                "Feature  Core   Mod   Comment",
                "-------  -----  ----  ---------",
                "Orbits   ✓ Ok   ✗ No  guide (g)",
                "Docking  ⚠ WIP  ✓ Ok",
            ]
        );
    }

    #[test]
    fn render_resource_and_meta_tables() {
        let resources = TableInstance::ResourceTable(ResourceTable {
            name: "Links".into(),
            resources: vec![Resource {
                name: "Home".into(),
                url: "https://h".into(),
                url_name: None,
            }],
        });
        let meta = TableInstance::MetaInformation(MetaInformation {
            name: "Info".into(),
            meta: Meta {
                last_update: "2025-06-01".into(),
            },
        });
        let statuses = StatusTable::default();

        assert_eq!(
            render_table(&resources, &statuses, LinkFormat::Markdown),
            vec![
                "Links",
                "Resource  Link",
                "--------  ---------",
                "Home      https://h",
            ]
        );
        assert_eq!(
            render_table(&meta, &statuses, LinkFormat::Markdown),
            vec!["Info", "Last update: 2025-06-01"]
        );
    }

    #[test]
    fn legend_lines() {
        let statuses = StatusTable::default();
        let items = vec![statuses.get(SupportStatus::Beta).unwrap()];
        assert_eq!(render_legend(&items), vec!["B Beta: Beta testing phase"]);
    }
}
