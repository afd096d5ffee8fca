use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::crops::{crops_by_slug, CROPS};
use crate::stages::stage_table;
use crate::types::{CropRecord, StageTable};
use crate::utils::display_dir;

pub const OUTPUT_DIR: &str = "crops";

const SITE_URL: &str = "https://crop-stages.github.io";

// Relative to the generated page, which lives one level below the site root
const IMAGE_BASE: &str = "../assets/images/crops";

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Remove `*.html` pages in the output directory that belong to no registered crop
    pub prune: bool,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    pub written: usize,
    pub pruned: Vec<PathBuf>,
}

// HTML generation helpers
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Stage image path for a crop, `slug` already escaped
fn stage_image_src(slug: &str, number: usize) -> String {
    format!("{}/{}/{}_stage_{}.png", IMAGE_BASE, slug, slug, number)
}

/// CSS styles shared by every crop page
fn css_styles() -> &'static str {
    r#"
* {
    box-sizing: border-box;
}

body {
    font-family: "Segoe UI", Arial, sans-serif;
    background: #ffffff;
    margin: 0;
    padding: 40px;
    color: #4a4f45;
}

.header {
    display: flex;
    justify-content: space-between;
    align-items: baseline;
    margin-bottom: 40px;
    flex-wrap: wrap;
    gap: 10px;
}

.header h1 {
    font-weight: 400;
    font-size: clamp(24px, 4vw, 42px);
    margin: 0;
    color: #6c7466;
}

.header .right-title {
    font-size: clamp(12px, 1.4vw, 16px);
    letter-spacing: 1px;
    color: #6c7466;
}

.nav-link {
    display: inline-block;
    margin-bottom: 20px;
    color: #5a7a52;
    text-decoration: none;
    font-size: 14px;
}
.nav-link:hover {
    text-decoration: underline;
}

/* === TABLE LAYOUT === */
.stages-table {
    width: 100%;
    border-collapse: collapse;
    table-layout: fixed;
}

.stages-table .label-col {
    width: 140px;
}

.stages-table tr.image-row td {
    vertical-align: bottom;
    text-align: center;
    padding: 10px 2px 15px;
    position: relative;
}

.stages-table tr.image-row td:not(:first-child):not(:last-child)::after {
    content: "";
    position: absolute;
    top: 0;
    bottom: 0;
    right: 0;
    border-right: 2px dashed #c5cbbe;
}

.stages-table tr.image-row td img {
    max-width: 100%;
    max-height: 220px;
    height: auto;
    display: block;
    margin: 0 auto;
}

.stages-table tr.data-row td {
    padding: 10px 5px;
    font-size: clamp(9px, 1.1vw, 14px);
    text-align: center;
    vertical-align: top;
    border-top: 1px solid #c8cec0;
    line-height: 1.35;
    overflow-wrap: break-word;
    word-wrap: break-word;
    hyphens: auto;
}

.stages-table tr.data-row:first-of-type td {
    border-top: 2px solid #b7bdad;
}

.stages-table tr.data-row td.label {
    text-align: left;
    font-weight: 600;
    color: #6c7466;
    padding-right: 10px;
}

.stages-table tr.data-row td.bbch {
    font-size: clamp(11px, 1.3vw, 16px);
    font-weight: 500;
}

.stages-table tr.data-row.footer-row td {
    min-height: 40px;
}

.stages-table tr.data-row.footer-row td .placeholder {
    color: #c8cec0;
    font-size: clamp(8px, 0.9vw, 11px);
    font-style: italic;
    line-height: 1.3;
}

/* === RESPONSIVE === */
@media (max-width: 1100px) {
    .stages-table .label-col {
        width: 110px;
    }
}

@media (max-width: 800px) {
    body {
        padding: 20px;
    }
    .stages-table .label-col {
        width: 90px;
    }
    .stages-table tr.image-row td img {
        max-height: 140px;
    }
}

@media (max-width: 540px) {
    body {
        padding: 16px;
    }
    .stages-table {
        display: none;
    }
    .mobile-cards {
        display: flex;
        flex-direction: column;
        gap: 12px;
    }
    .mobile-card {
        background: #f6f7f5;
        border-radius: 10px;
        padding: 14px;
        display: flex;
        align-items: center;
        gap: 14px;
    }
    .mobile-card img {
        width: 70px;
        height: auto;
        flex-shrink: 0;
    }
    .mobile-card .info {
        font-size: 14px;
        line-height: 1.5;
    }
    .mobile-card .info .stage-name {
        font-weight: 600;
        font-size: 14px;
        color: #4a4f45;
    }
    .mobile-card .info .bbch-code {
        color: #9da39a;
        font-size: 12px;
    }
    .mobile-card .info .product-hint {
        color: #c8cec0;
        font-size: 11px;
        font-style: italic;
        margin-top: 4px;
    }
}

@media (min-width: 541px) {
    .mobile-cards {
        display: none;
    }
}

"#
}

/// `<head>` contents: title, SEO meta tags, canonical link and styles
fn page_head(crop: &CropRecord) -> String {
    let dn = html_escape(crop.display_name);
    let ln = html_escape(crop.latin_name);

    let name_lower = crop.display_name.to_lowercase();
    let keywords = format!(
        "{} BBCH, {} growth stages, fertilizer timing {}, {}",
        name_lower, name_lower, name_lower, crop.latin_name
    );

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{dn} Growth Stages (BBCH) | Crop Stages</title>
<meta name="description" content="Professional BBCH growth stage illustrations for {dn} ({ln}). 10 stages from germination to maturity.">
<meta name="keywords" content="{keywords}">
<link rel="canonical" href="{site}/crops/{slug}.html">

<style>
{css}</style>
</head>
"#,
        dn = dn,
        ln = ln,
        keywords = html_escape(&keywords),
        site = SITE_URL,
        slug = html_escape(crop.slug),
        css = css_styles(),
    )
}

/// Desktop layout: one column per stage, four rows
fn stages_table_html(crop: &CropRecord, table: &StageTable) -> String {
    let dn = html_escape(crop.display_name);
    let slug = html_escape(crop.slug);

    let image_row: Vec<String> = table
        .stages()
        .map(|stage| {
            format!(
                r#"        <td><img src="{}" alt="{} Stage {} — {}"></td>"#,
                stage_image_src(&slug, stage.number),
                dn,
                stage.number,
                html_escape(stage.alt)
            )
        })
        .collect();

    let bbch_row: Vec<String> = table
        .stages()
        .map(|stage| format!(r#"        <td class="bbch">{}</td>"#, html_escape(stage.code)))
        .collect();

    let description_row: Vec<String> = table
        .stages()
        .map(|stage| format!("        <td>{}</td>", html_escape(stage.description)))
        .collect();

    let placeholder_row: Vec<&str> = table
        .stages()
        .map(|_| r#"        <td><span class="placeholder">Add product name &amp;&nbsp;dosage</span></td>"#)
        .collect();

    format!(
        r#"<!-- ===== DESKTOP TABLE ===== -->
<table class="stages-table">
    <colgroup>
        <col class="label-col">
        <col><col><col><col><col><col><col><col><col><col>
    </colgroup>

    <tr class="image-row">
        <td></td>
{}
    </tr>

    <tr class="data-row">
        <td class="label">BBCH Stage</td>
{}
    </tr>

    <tr class="data-row">
        <td class="label">Description</td>
{}
    </tr>

    <tr class="data-row footer-row">
        <td class="label">Your Product</td>
{}
    </tr>
</table>"#,
        image_row.join("\n"),
        bbch_row.join("\n"),
        description_row.join("\n"),
        placeholder_row.join("\n")
    )
}

/// Mobile layout: the same stages as stacked cards
fn mobile_cards_html(crop: &CropRecord, table: &StageTable) -> String {
    let dn = html_escape(crop.display_name);
    let slug = html_escape(crop.slug);

    let cards: Vec<String> = table
        .stages()
        .map(|stage| {
            format!(
                r#"    <div class="mobile-card">
        <img src="{}" alt="{} Stage {} — {}">
        <div class="info">
            <div class="stage-name">{}</div>
            <div class="bbch-code">BBCH {}</div>
            <div class="product-hint">Add product</div>
        </div>
    </div>"#,
                stage_image_src(&slug, stage.number),
                dn,
                stage.number,
                html_escape(stage.alt),
                html_escape(stage.description),
                html_escape(stage.code)
            )
        })
        .collect();

    format!(
        "<!-- ===== MOBILE CARDS ===== -->\n<div class=\"mobile-cards\">\n{}\n</div>",
        cards.join("\n")
    )
}

/// Render the complete, self-contained page for one crop
pub fn render_crop_page(crop: &CropRecord, table: &StageTable) -> String {
    let mut html = page_head(crop);

    html.push_str(&format!(
        r#"
<body>

<a href="../index.html" class="nav-link">&larr; Back to all crops</a>

<div class="header">
    <h1>{} ({})</h1>
    <div class="right-title">Botanical Growth Stages</div>
</div>

"#,
        html_escape(crop.display_name),
        html_escape(crop.latin_name)
    ));

    html.push_str(&stages_table_html(crop, table));
    html.push_str("\n\n");
    html.push_str(&mobile_cards_html(crop, table));
    html.push_str("\n\n</body>\n</html>");

    html
}

fn page_path(output_dir: &Path, slug: &str) -> PathBuf {
    output_dir.join(format!("{}.html", slug))
}

/// Write one page per registered crop into `output_dir`
pub fn generate_pages(output_dir: &Path, options: &GenerateOptions) -> Result<GenerateSummary> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let mut summary = GenerateSummary::default();

    for crop in crops_by_slug() {
        let html = render_crop_page(crop, stage_table(crop.crop_type));
        let path = page_path(output_dir, crop.slug);
        fs::write(&path, html)
            .with_context(|| format!("Failed to write page: {}", path.display()))?;
        log::debug!("Wrote {}", path.display());
        summary.written += 1;
    }

    if options.prune {
        summary.pruned = prune_stale_pages(output_dir)?;
    }

    Ok(summary)
}

/// Delete pages left behind by crops that are no longer registered
fn prune_stale_pages(output_dir: &Path) -> Result<Vec<PathBuf>> {
    let slugs: HashSet<&str> = CROPS.iter().map(|c| c.slug).collect();
    let mut removed = Vec::new();

    let entries = fs::read_dir(output_dir)
        .with_context(|| format!("Failed to read output directory: {}", output_dir.display()))?;

    for entry in entries {
        let path = entry?.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("html") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if slugs.contains(stem) {
            continue;
        }

        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove stale page: {}", path.display()))?;
        log::info!("Removed stale page {}", path.display());
        removed.push(path);
    }

    removed.sort();
    Ok(removed)
}

/// Main generation function
pub fn run_generate(output_dir: &Path, options: &GenerateOptions) -> Result<()> {
    println!("Generating crop pages...");
    let summary = generate_pages(output_dir, options)?;

    for path in &summary.pruned {
        println!("  Removed {}", path.display());
    }

    println!(
        "Generated {} crop table pages in {}",
        summary.written,
        display_dir(output_dir)
    );

    Ok(())
}
