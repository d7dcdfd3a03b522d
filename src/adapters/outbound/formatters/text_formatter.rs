use crate::application::read_models::{
    DetailReport, HitListEntry, KbaView, ReportDetails, TableReadModel, TableRow,
};
use crate::ports::outbound::PreviewFormatter;
use crate::rule_preview::domain::{Label, LabelColor, RuleDetail, RuleStatus, SortDirection};
use crate::rule_preview::services::ValidatedState;
use crate::shared::Result;
use owo_colors::{AnsiColors, OwoColorize};
use serde_json::Value;
use std::fmt::Write;

const COLUMN_GAP: &str = "  ";
const NO_HITS_TEXT: &str = "No hits";
const NO_ARTICLE_TEXT: &str = "No knowledge-base article found";

/// TextFormatter adapter rendering the views for a terminal
///
/// Colour is opt-in so that piped output and tests stay free of escape
/// sequences.
pub struct TextFormatter {
    color: bool,
}

impl TextFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn paint(&self, text: &str, color: LabelColor) -> String {
        if !self.color {
            return text.to_string();
        }
        let ansi = match color {
            LabelColor::Green => AnsiColors::Green,
            LabelColor::Red => AnsiColors::Red,
            LabelColor::Orange => AnsiColors::Yellow,
            LabelColor::Purple => AnsiColors::Magenta,
            LabelColor::Blue => AnsiColors::Blue,
            LabelColor::Gray => AnsiColors::BrightBlack,
        };
        text.color(ansi).to_string()
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, label: &Label) -> String {
        self.paint(&format!("[{}]", label.text), label.color)
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}

fn row_cells(row: &TableRow) -> [String; 8] {
    [
        String::new(),
        row.glyph.to_string(),
        row.plugin.clone(),
        row.error_key.clone(),
        row.product_code.clone(),
        row.role.clone(),
        row.category.clone(),
        row.hits.to_string(),
    ]
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Helpers for the content table
impl TextFormatter {
    fn header_cells(&self, model: &TableReadModel) -> Vec<String> {
        let arrow = match model.sort.direction {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        };
        model
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                if index == model.sort_column {
                    format!("{} {}", column.title, arrow)
                } else {
                    column.title.to_string()
                }
            })
            .collect()
    }

    fn render_summary(&self, output: &mut String, model: &TableReadModel) -> Result<()> {
        write!(
            output,
            "{} rule(s) shown of {}, sorted by {} {}",
            model.rows.len(),
            model.total_rules,
            model.sort.key,
            model.sort.direction
        )?;
        if !model.query.is_empty() {
            write!(output, ", filtered by \"{}\"", model.query)?;
        }
        output.push('\n');
        Ok(())
    }
}

/// Helpers for the detail page
impl TextFormatter {
    fn render_title(&self, output: &mut String, report: &DetailReport) -> Result<()> {
        write!(output, "{}", self.bold(&report.title))?;
        if let Some(status) = &report.status_label {
            write!(output, " {}", self.label(status))?;
        }
        if let Some(severity) = &report.severity_label {
            write!(output, " {}", self.label(severity))?;
        }
        if report.reboot_required {
            write!(output, " {}", self.paint("[Reboot required]", LabelColor::Orange))?;
        }
        output.push('\n');

        if let Some(date) = &report.publish_date {
            writeln!(output, "Published: {}", date)?;
        }
        match &report.detail_href {
            Some(href) => writeln!(output, "Node: {}", href)?,
            None => {
                let missing = RuleDetail::missing_node_label();
                writeln!(output, "Node: {}", self.label(&missing))?;
            }
        }
        Ok(())
    }

    fn render_kba(&self, output: &mut String, kba: &KbaView) -> Result<()> {
        let text = if kba.loading {
            "loading...".to_string()
        } else {
            match &kba.detail {
                Some(doc) => match (doc.display_title(), &doc.view_uri) {
                    (Some(title), Some(uri)) => format!("{} <{}>", title, uri),
                    (Some(title), None) => title.to_string(),
                    (None, Some(uri)) => uri.clone(),
                    (None, None) => NO_ARTICLE_TEXT.to_string(),
                },
                None => NO_ARTICLE_TEXT.to_string(),
            }
        };
        writeln!(output, "Knowledge base: {}", text)?;
        Ok(())
    }

    fn render_body(&self, output: &mut String, report: &DetailReport) -> Result<()> {
        if !report.expanded {
            writeln!(output, "\n(description collapsed)")?;
            return Ok(());
        }
        if let Some(description) = &report.description {
            writeln!(output, "\n{}\n{}", self.bold("Description"), indent(&description.source, "  "))?;
        }
        if let Some(generic) = &report.generic {
            writeln!(output, "\n{}\n{}", self.bold("Generic"), indent(&generic.source, "  "))?;
        }
        if let Some(resolution) = &report.resolution {
            writeln!(output, "\n{}\n{}", self.bold("Resolution"), indent(resolution, "  "))?;
        }
        Ok(())
    }

    fn render_hits(&self, output: &mut String, hits: &[HitListEntry]) -> Result<()> {
        writeln!(output, "\n{}", self.bold(&format!("Hits ({})", hits.len())))?;
        if hits.is_empty() {
            writeln!(output, "  {}", NO_HITS_TEXT)?;
            return Ok(());
        }
        for hit in hits {
            let marker = if hit.selected { "*" } else { " " };
            let preview = serde_json::to_string(&Value::Object(hit.preview.clone()))?;
            writeln!(
                output,
                " {}[{}] {}  {}  {}  {}",
                marker, hit.id, hit.name, hit.source, hit.date, preview
            )?;
        }
        Ok(())
    }

    fn render_details(&self, output: &mut String, details: &ReportDetails) -> Result<()> {
        let heading = match details {
            ReportDetails::None => return Ok(()),
            ReportDetails::SelectedHit(_) => "Details (selected hit)",
            ReportDetails::FreeStyle(_) => "Details (free-style)",
        };
        if let Some(payload) = details.payload() {
            let pretty = serde_json::to_string_pretty(&payload)?;
            writeln!(output, "\n{}\n{}", self.bold(heading), indent(&pretty, "  "))?;
        }
        Ok(())
    }

    fn render_free_style(&self, output: &mut String, report: &DetailReport) -> Result<()> {
        let helper = match report.free_style.validated {
            ValidatedState::Success => self.paint(report.free_style.helper_text, LabelColor::Green),
            ValidatedState::Error => self.paint(report.free_style.helper_text, LabelColor::Red),
            ValidatedState::Default => report.free_style.helper_text.to_string(),
        };
        writeln!(output, "\nFree-style JSON: {}", helper)?;
        Ok(())
    }
}

impl PreviewFormatter for TextFormatter {
    fn format_table(&self, model: &TableReadModel) -> Result<String> {
        let header = self.header_cells(model);
        let cells: Vec<[String; 8]> = model.rows.iter().map(row_cells).collect();

        let widths: Vec<usize> = (0..header.len())
            .map(|index| {
                cells
                    .iter()
                    .map(|row| row[index].chars().count())
                    .chain(std::iter::once(header[index].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        self.render_summary(&mut output, model)?;
        output.push('\n');

        let header_line: Vec<String> = header
            .iter()
            .zip(&widths)
            .map(|(title, width)| pad(title, *width))
            .collect();
        writeln!(output, "{}", self.bold(header_line.join(COLUMN_GAP).trim_end()))?;

        for (row, texts) in model.rows.iter().zip(&cells) {
            let line: Vec<String> = texts
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(index, (text, width))| {
                    let padded = pad(text, *width);
                    if index == 1 {
                        let color = match row.status {
                            RuleStatus::Active => LabelColor::Green,
                            RuleStatus::Inactive => LabelColor::Red,
                        };
                        self.paint(&padded, color)
                    } else {
                        padded
                    }
                })
                .collect();
            writeln!(output, "{}", line.join(COLUMN_GAP).trim_end())?;
        }

        Ok(output)
    }

    fn format_detail(&self, report: &DetailReport) -> Result<String> {
        let mut output = String::new();
        self.render_title(&mut output, report)?;
        self.render_kba(&mut output, &report.kba)?;
        self.render_body(&mut output, report)?;
        self.render_hits(&mut output, &report.hits)?;
        self.render_details(&mut output, &report.details)?;
        self.render_free_style(&mut output, report)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::views::{ContentTableView, DetailView};
    use crate::rule_preview::domain::{HitCountMap, KbaDocument, Rule, SortKey};
    use serde_json::json;
    use std::time::Duration;

    fn table_model() -> TableReadModel {
        let mut view = ContentTableView::new(Duration::from_millis(800));
        let mut hits = HitCountMap::new();
        hits.insert("ceph|CEPH_WARN", 12);
        view.set_data(
            vec![
                Rule {
                    rule_id: "ceph|CEPH_WARN".to_string(),
                    plugin: "ceph".to_string(),
                    error_key: "CEPH_WARN".to_string(),
                    status: "active".to_string(),
                    ..Rule::default()
                },
                Rule {
                    rule_id: "bond|BOND_DOWN".to_string(),
                    plugin: "bond".to_string(),
                    error_key: "BOND_DOWN".to_string(),
                    status: "inactive".to_string(),
                    ..Rule::default()
                },
            ],
            hits,
        );
        view.on_sort(SortKey::ErrorKey, SortDirection::Desc);
        view.read_model()
    }

    fn detail_view() -> DetailView {
        let mut view = DetailView::new("ceph|CEPH_WARN");
        view.set_detail(
            serde_json::from_value(json!({
                "rule_id": "ceph|CEPH_WARN",
                "status": "active",
                "severity": "ERROR",
                "description": "Ceph is unhealthy",
                "resolution": "Restart the OSD",
                "publish_date": "2021-05-01T00:00:00Z",
                "reboot_required": true
            }))
            .unwrap(),
        );
        view.set_hits(vec![serde_json::from_value(json!({
            "__name": "host-a",
            "__source": "insights-client",
            "__date": "2021-06-01",
            "osd": 3
        }))
        .unwrap()]);
        view
    }

    #[test]
    fn test_format_table_plain() {
        let output = TextFormatter::new(false).format_table(&table_model()).unwrap();

        assert!(output.starts_with("2 rule(s) shown of 2, sorted by error_key desc"));
        assert!(output.contains("Error Key ▼"));
        assert!(!output.contains('\u{1b}'));

        let ceph = output.find("ceph").unwrap();
        let bond = output.find("bond").unwrap();
        assert!(ceph < bond);
        assert!(output.contains("✔"));
        assert!(output.contains("✘"));
        assert!(output.contains("12"));
    }

    #[test]
    fn test_format_table_colored() {
        let output = TextFormatter::new(true).format_table(&table_model()).unwrap();
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_format_detail() {
        let mut view = detail_view();
        view.select_hit(1);
        view.skip_kba();

        let output = TextFormatter::new(false).format_detail(&view.report()).unwrap();

        assert!(output.starts_with("ceph|CEPH_WARN [Active] [ERROR] [Reboot required]"));
        assert!(output.contains("Published: 2021-05-01"));
        assert!(output.contains("No node_id present"));
        assert!(output.contains("Knowledge base: No knowledge-base article found"));
        assert!(output.contains("Ceph is unhealthy"));
        assert!(output.contains(" *[1] host-a  insights-client  2021-06-01  {\"osd\":3}"));
        assert!(output.contains("Details (selected hit)"));
        assert!(output.contains("Free-style JSON: Please enter valid JSON"));
    }

    #[test]
    fn test_format_detail_loading_and_kba() {
        let mut view = DetailView::new("x|Y");
        let output = TextFormatter::new(false).format_detail(&view.report()).unwrap();
        assert!(output.starts_with("loading..."));
        assert!(output.contains("Knowledge base: loading..."));
        assert!(output.contains("No hits"));

        let request = view.begin_kba();
        view.finish_kba(
            request,
            Some(KbaDocument {
                view_uri: Some("https://access.redhat.com/solutions/1".to_string()),
                id: Some("1".to_string()),
                published_title: Some("Fix it".to_string()),
            }),
        );
        let output = TextFormatter::new(false).format_detail(&view.report()).unwrap();
        assert!(output.contains("Knowledge base: Fix it <https://access.redhat.com/solutions/1>"));
    }

    #[test]
    fn test_format_detail_collapsed_with_free_style() {
        let mut view = detail_view();
        view.toggle_expanded();
        view.on_free_style_change("[1, 2]");

        let output = TextFormatter::new(false).format_detail(&view.report()).unwrap();
        assert!(output.contains("(description collapsed)"));
        assert!(!output.contains("Ceph is unhealthy"));
        assert!(output.contains("Details (free-style)"));
        assert!(output.contains("Free-style JSON: Valid JSON! 🥰"));
    }
}
