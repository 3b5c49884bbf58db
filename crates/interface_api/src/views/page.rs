//! Full dashboard page
//!
//! A single GET form drives the page. Submitting it reloads `/` with the new
//! selection in the query string, so every view of the page is bookmarkable.

use std::fmt::{self, Write};

use domain_claims::{DashboardView, FilterOptions};

use super::charts::{category_bar_chart, hospital_bar_chart, outcome_pie_chart};
use super::{escape_html, RenderError};
use crate::dto::claims::TableResponse;
use crate::dto::filters::{CATEGORY_PARAM, CATEGORY_SET_PARAM, HOSPITAL_PARAM, HOSPITAL_SET_PARAM};

const STYLE: &str = r#"
body { margin: 0; font-family: "Source Sans Pro", Helvetica, Arial, sans-serif; color: #262730; }
.layout { display: flex; min-height: 100vh; }
aside { width: 280px; padding: 24px; background: #f0f2f6; box-sizing: border-box; }
aside label { display: block; margin: 16px 0 6px; font-weight: 600; }
aside select { width: 100%; min-height: 140px; }
aside button { margin-top: 16px; padding: 6px 16px; }
main { flex: 1; padding: 24px 48px; min-width: 0; }
h1 { font-size: 2rem; }
.kpis { display: flex; gap: 24px; }
.kpi { flex: 1; }
.kpi .name { font-size: 0.9rem; color: #555; }
.kpi .value { font-size: 2.2rem; }
.chart svg { max-width: 100%; height: auto; }
.empty { color: #888; font-style: italic; }
.table-wrap { overflow-x: auto; max-height: 480px; }
table { border-collapse: collapse; font-size: 0.9rem; }
th, td { border: 1px solid #e6e6e6; padding: 4px 10px; text-align: left; white-space: nowrap; }
th { background: #fafafa; position: sticky; top: 0; }
"#;

/// Shown for an option whose value is the empty string
const BLANK_OPTION: &str = "(blank)";

/// Renders the dashboard as a complete HTML document
pub fn dashboard_page(
    options: &FilterOptions,
    view: &DashboardView<'_>,
    table: &TableResponse,
) -> Result<String, RenderError> {
    let title = escape_html(view.title);
    let mut html = String::with_capacity(16 * 1024);

    write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<div class="layout">
"#
    )?;

    write_sidebar(&mut html, options, view)?;

    write!(html, "<main>\n<h1>{title}</h1>\n")?;

    let kpis = &view.kpis;
    write!(
        html,
        r#"<section id="kpis">
<h2>Key Performance Indicators</h2>
<div class="kpis">
<div class="kpi"><div class="name">Total Patients</div><div class="value">{patients}</div></div>
<div class="kpi"><div class="name">Total Claim Amount</div><div class="value">{total}</div></div>
<div class="kpi"><div class="name">Average Claim Amount</div><div class="value">{average}</div></div>
</div>
</section>
"#,
        patients = kpis.total_patients,
        total = kpis.total_claim_amount_display(),
        average = kpis.average_claim_amount_display(),
    )?;

    write!(
        html,
        "<section id=\"claims-by-category\">\n<h2>Claims by Treatment Category</h2>\n<div class=\"chart\">{}</div>\n</section>\n",
        category_bar_chart(&view.claims_by_category, "Total Claim Amount")?
    )?;
    write!(
        html,
        "<section id=\"patient-load\">\n<h2>Patient Load by Hospital</h2>\n<div class=\"chart\">{}</div>\n</section>\n",
        hospital_bar_chart(&view.patient_load_by_hospital, "Number of Patients")?
    )?;
    write!(
        html,
        "<section id=\"patient-outcomes\">\n<h2>Patient Outcomes</h2>\n<div class=\"chart\">{}</div>\n</section>\n",
        outcome_pie_chart(&view.patient_outcomes)?
    )?;

    write_table(&mut html, table)?;

    html.push_str("</main>\n</div>\n</body>\n</html>\n");
    Ok(html)
}

fn write_sidebar(html: &mut String, options: &FilterOptions, view: &DashboardView<'_>) -> fmt::Result {
    html.push_str("<aside>\n<h2>Filter Options</h2>\n<form method=\"get\" action=\"/\">\n");

    // Markers keep a fully cleared select distinguishable from a first visit
    write!(
        html,
        r#"<input type="hidden" name="{HOSPITAL_SET_PARAM}" value="1">
<input type="hidden" name="{CATEGORY_SET_PARAM}" value="1">
"#
    )?;

    write_select(
        html,
        HOSPITAL_PARAM,
        "Select Hospital(s)",
        &options.hospitals,
        view.filter.hospitals(),
    )?;
    write_select(
        html,
        CATEGORY_PARAM,
        "Select Treatment Category",
        &options.categories,
        view.filter.categories(),
    )?;

    html.push_str("<button type=\"submit\">Apply</button>\n</form>\n</aside>\n");
    Ok(())
}

fn write_select(
    html: &mut String,
    name: &str,
    label: &str,
    choices: &[String],
    selected: &[String],
) -> fmt::Result {
    write!(
        html,
        "<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\" multiple>\n"
    )?;
    for choice in choices {
        let value = escape_html(choice);
        let text = if choice.is_empty() { BLANK_OPTION } else { value.as_str() };
        let marker = if selected.contains(choice) { " selected" } else { "" };
        writeln!(html, "<option value=\"{value}\"{marker}>{text}</option>")?;
    }
    html.push_str("</select>\n");
    Ok(())
}

fn write_table(html: &mut String, table: &TableResponse) -> fmt::Result {
    write!(
        html,
        "<section id=\"filtered-dataset\">\n<h2>Filtered Dataset</h2>\n<p>{} rows</p>\n",
        table.rows.len()
    )?;
    html.push_str("<div class=\"table-wrap\">\n<table>\n<thead><tr>");
    for column in &table.columns {
        write!(html, "<th>{}</th>", escape_html(column))?;
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in &table.rows {
        html.push_str("<tr>");
        for cell in row {
            write!(html, "<td>{}</td>", escape_html(cell))?;
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</div>\n</section>\n");
    Ok(())
}
