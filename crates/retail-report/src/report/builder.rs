use std::fs;
use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

/// plotly.js bundle matching the `plotly` crate's serialisation format.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const REPORT_STYLE: &str = "
body { font-family: -apple-system, 'Segoe UI', Helvetica, Arial, sans-serif; margin: 0 auto; max-width: 1280px; padding: 0 24px; color: #262730; }
header { text-align: center; padding: 24px 0 8px 0; }
header img { max-height: 64px; }
h1 { text-align: center; }
section { margin-bottom: 40px; }
table.data-table { border-collapse: collapse; margin: 12px 0; }
table.data-table th, table.data-table td { border: 1px solid #e6e9ef; padding: 4px 12px; }
table.data-table th { background-color: #f0f2f6; text-align: left; }
table.data-table td.num { text-align: right; font-variant-numeric: tabular-nums; }
.plot-container { margin: 16px 0; }
footer { color: #808495; font-size: 0.85em; text-align: center; padding: 16px 0; }
";

enum Block {
    Content(Markup),
    Plot(Plot),
}

/// A titled group of content and plots, rendered in insertion order.
pub struct ReportSection {
    title: String,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(plot));
    }

    /// Number of plots added to the section.
    pub fn plot_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| matches!(b, Block::Plot(_)))
            .count()
    }

    fn render(&self, section_idx: usize) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                @for (block_idx, block) in self.blocks.iter().enumerate() {
                    @match block {
                        Block::Content(content) => { (content) }
                        Block::Plot(plot) => {
                            @let div_id = format!("plot-{}-{}", section_idx, block_idx);
                            div class="plot-container" {
                                (PreEscaped(plot.to_inline_html(Some(div_id.as_str()))))
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A single-page HTML report.
pub struct Report {
    name: String,
    version: String,
    logo: Option<String>,
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(name: &str, version: &str, logo: Option<&str>, title: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
            logo: logo.map(str::to_string),
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(REPORT_STYLE)) }
                }
                body {
                    header {
                        @if let Some(logo) = &self.logo {
                            img src=(logo) alt=(self.name);
                        }
                        h1 { (self.title) }
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        (section.render(idx))
                    }
                    footer { (self.name) " " (self.version) }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        fs::write(path, self.render().into_string())
    }
}
