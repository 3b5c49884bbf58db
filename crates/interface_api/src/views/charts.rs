//! Inline SVG charts
//!
//! Each chart is drawn with plotters into an in-memory SVG document, so the
//! page needs no script. A chart with nothing to plot becomes a placeholder
//! paragraph instead.

use plotters::element::Pie;
use plotters::prelude::*;
use plotters::series::Histogram;
use plotters::style::FontTransform;
use plotters_svg::SVGBackend;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use core_kernel::ClaimAmount;
use domain_claims::{CategoryTotal, HospitalLoad, OutcomeShare};

/// Error raised while drawing a chart
pub type ChartError = DrawingAreaErrorKind<std::io::Error>;

/// Shown instead of a chart when the selection matched no rows
pub const EMPTY_CHART: &str = r#"<p class="empty">No data for the current selection</p>"#;

const BAR_COLOR: RGBColor = RGBColor(0x1f, 0x77, 0xb4);
const PALETTE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];
const WIDTH: u32 = 720;
const PIE_SIZE: u32 = 420;
const FONT: &str = "sans-serif";

/// Horizontal bar chart of claim totals per category
pub fn category_bar_chart(totals: &[CategoryTotal], x_label: &str) -> Result<String, ChartError> {
    if totals.is_empty() {
        return Ok(EMPTY_CHART.to_string());
    }

    // Segmented slice coordinates locate values by address, so bar data borrows from `names`
    let names: Vec<String> = totals.iter().map(|t| t.category.clone()).collect();
    let max = totals
        .iter()
        .map(|t| t.total_claim_amount.to_f64())
        .fold(0.0, f64::max);
    let height = 90 + 36 * totals.len() as u32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, height)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(50)
            .y_label_area_size(160)
            .build_cartesian_2d(0f64..headroom(max), names.as_slice().into_segmented())?;

        let category_label = |v: &SegmentValue<&String>| segment_label(v);
        let amount_label = |v: &f64| format_amount(*v);
        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(names.len())
            .y_label_formatter(&category_label)
            .x_label_formatter(&amount_label)
            .x_desc(x_label)
            .axis_desc_style((FONT, 14).into_font())
            .draw()?;

        chart.draw_series(
            Histogram::horizontal(&chart)
                .style(BAR_COLOR.filled())
                .margin(6)
                .data(
                    names
                        .iter()
                        .zip(totals.iter().map(|t| t.total_claim_amount.to_f64())),
                ),
        )?;

        root.present()?;
    }

    Ok(svg)
}

/// Vertical bar chart of patients per hospital
pub fn hospital_bar_chart(load: &[HospitalLoad], y_label: &str) -> Result<String, ChartError> {
    if load.is_empty() {
        return Ok(EMPTY_CHART.to_string());
    }

    let names: Vec<String> = load.iter().map(|l| l.hospital.clone()).collect();
    let max = load.iter().map(|l| l.patients).max().unwrap_or(0) as u32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, 420)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(12)
            .x_label_area_size(130)
            .y_label_area_size(60)
            .build_cartesian_2d(names.as_slice().into_segmented(), 0u32..max + max / 10 + 1)?;

        let hospital_label = |v: &SegmentValue<&String>| segment_label(v);
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(names.len())
            .x_label_formatter(&hospital_label)
            .x_label_style((FONT, 12).into_font().transform(FontTransform::Rotate90))
            .y_desc(y_label)
            .axis_desc_style((FONT, 14).into_font())
            .draw()?;

        chart.draw_series(
            Histogram::vertical(&chart)
                .style(BAR_COLOR.filled())
                .margin(8)
                .data(names.iter().zip(load.iter().map(|l| l.patients as u32))),
        )?;

        root.present()?;
    }

    Ok(svg)
}

/// Pie chart of patient outcomes with one-decimal percentage labels
pub fn outcome_pie_chart(shares: &[OutcomeShare]) -> Result<String, ChartError> {
    if shares.is_empty() {
        return Ok(EMPTY_CHART.to_string());
    }

    let sizes: Vec<f64> = shares.iter().map(|s| s.patients as f64).collect();
    let colors: Vec<RGBColor> = (0..shares.len()).map(|i| PALETTE[i % PALETTE.len()]).collect();
    let labels: Vec<&str> = shares.iter().map(|s| s.outcome.label()).collect();
    let center = (PIE_SIZE as i32 / 2, PIE_SIZE as i32 / 2);
    let radius = f64::from(PIE_SIZE) * 0.32;

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (PIE_SIZE, PIE_SIZE)).into_drawing_area();
        root.fill(&WHITE)?;

        // Wedge percentages are formatted "{:.1}%", the same as OutcomeShare::percentage_label
        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        pie.label_style((FONT, 14).into_font());
        pie.percentages((FONT, 13).into_font().color(&WHITE));
        root.draw(&pie)?;

        root.present()?;
    }

    Ok(svg)
}

fn segment_label(value: &SegmentValue<&String>) -> String {
    match value {
        SegmentValue::CenterOf(name) | SegmentValue::Exact(name) => name.to_string(),
        SegmentValue::Last => String::new(),
    }
}

/// Leaves room past the longest bar
fn headroom(max: f64) -> f64 {
    if max > 0.0 && max.is_finite() {
        max * 1.1
    } else {
        1.0
    }
}

fn format_amount(value: f64) -> String {
    ClaimAmount::new(Decimal::from_f64(value).unwrap_or_default()).to_grouped_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_claims::MortalityOutcome;

    fn share(outcome: MortalityOutcome, patients: usize, percentage: f64) -> OutcomeShare {
        OutcomeShare {
            outcome,
            patients,
            percentage,
            percentage_label: format!("{:.1}%", percentage),
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(2500.0), "2,500");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_headroom() {
        assert_eq!(headroom(0.0), 1.0);
        assert!(headroom(1000.0) > 1000.0);
    }

    #[test]
    fn test_empty_charts_render_placeholder() {
        assert_eq!(category_bar_chart(&[], "Total Claim Amount").unwrap(), EMPTY_CHART);
        assert_eq!(hospital_bar_chart(&[], "Number of Patients").unwrap(), EMPTY_CHART);
        assert_eq!(outcome_pie_chart(&[]).unwrap(), EMPTY_CHART);
    }

    #[test]
    fn test_category_chart_is_svg_with_labels() {
        let totals = vec![
            CategoryTotal {
                category: "ICU".to_string(),
                total_claim_amount: ClaimAmount::new(Decimal::from(2000)),
            },
            CategoryTotal {
                category: "Surgery".to_string(),
                total_claim_amount: ClaimAmount::new(Decimal::from(1500)),
            },
        ];

        let svg = category_bar_chart(&totals, "Total Claim Amount").unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("ICU"));
        assert!(svg.contains("Surgery"));
        assert!(svg.contains("Total Claim Amount"));
    }

    #[test]
    fn test_hospital_chart_is_svg_with_labels() {
        let load = vec![
            HospitalLoad { hospital: "City General".to_string(), patients: 3 },
            HospitalLoad { hospital: "St Luke".to_string(), patients: 1 },
        ];

        let svg = hospital_bar_chart(&load, "Number of Patients").unwrap();
        assert!(svg.contains("City General"));
        assert!(svg.contains("St Luke"));
        assert!(svg.contains("Number of Patients"));
    }

    #[test]
    fn test_pie_labels_match_outcome_percentages() {
        let shares = vec![
            share(MortalityOutcome::No, 2, 200.0 / 3.0),
            share(MortalityOutcome::Yes, 1, 100.0 / 3.0),
        ];

        let svg = outcome_pie_chart(&shares).unwrap();
        for share in &shares {
            assert!(svg.contains(&share.percentage_label), "missing {}", share.percentage_label);
            assert!(svg.contains(share.outcome.label()));
        }
    }
}
