//! Report rendering

use clap::ValueEnum;
use litemath_axis::AxisAnalysis;
use litemath_matrix::DenseMatrix;
use crate::error::CliError;

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Format {
    /// Plain report
    #[default]
    #[value(alias = "txt")]
    Text,
    /// Covariance and normal as TeX arrays
    #[value(alias = "latex")]
    Tex,
    /// Full analysis as pretty-printed JSON
    Json,
}

pub fn render(analysis: &AxisAnalysis, format: Format) -> Result<String, CliError> {
    match format {
        Format::Text => Ok(render_text(analysis)),
        Format::Tex => Ok(render_tex(analysis)),
        Format::Json => Ok(serde_json::to_string_pretty(analysis)? + "\n"),
    }
}

fn csv_or_none(v: Option<&DenseMatrix>) -> String {
    v.map(DenseMatrix::to_csv).unwrap_or_else(|| "(none)".to_string())
}

fn render_text(a: &AxisAnalysis) -> String {
    let mut out = String::new();
    out.push_str(&format!("samples: {}\n", a.sample_count));
    out.push_str(&format!("centroid: {}\n", a.centroid.to_csv()));
    out.push_str(&format!("scale: {}\n", a.scale));
    out.push_str("covariance:\n");
    out.push_str(&a.covariance.to_display_string());

    let coeffs: Vec<String> = a.coefficients.iter().map(|c| c.to_string()).collect();
    out.push_str(&format!("coefficients: {}\n", coeffs.join(", ")));
    out.push_str(&format!("smallest root: {}\n", a.smallest_root));
    for pair in &a.eigenpairs {
        out.push_str(&format!(
            "eigenvalue {}: {}\n",
            pair.value,
            csv_or_none(pair.vector.as_ref())
        ));
    }
    out.push_str(&format!("normal: {}\n", csv_or_none(a.normal.as_ref())));
    out.push_str(&format!("principal axis: {}\n", csv_or_none(a.principal_axis.as_ref())));
    out
}

fn render_tex(a: &AxisAnalysis) -> String {
    let mut out = String::from("$$\n");
    out.push_str(&a.covariance.to_tex());
    out.push_str("$$\n");
    if let Some(n) = &a.normal {
        out.push_str("$$\n");
        out.push_str(&n.to_tex());
        out.push_str("$$\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use litemath_axis::{analyze, AxisConfig};

    fn cross() -> AxisAnalysis {
        let points = [[1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, -1.0, 0.0]];
        analyze(&points, &AxisConfig::default()).unwrap()
    }

    #[test]
    fn test_format_parse() {
        assert_eq!(Format::from_str("JSON", true), Ok(Format::Json));
        assert_eq!(Format::from_str("latex", false), Ok(Format::Tex));
        assert_eq!(Format::from_str("txt", false), Ok(Format::Text));
        assert!(Format::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_render_text() {
        let text = render(&cross(), Format::Text).unwrap();
        assert!(text.starts_with("samples: 4\ncentroid: 0,0,0\n"));
        assert!(text.contains("matrix col: 3 row: 3\n0.500, 0.000, 0.000\n"));
        assert!(text.contains("coefficients: 0, -0.25, 1, -1\n"));
        assert!(text.contains("principal axis: (none)\n"));
    }

    #[test]
    fn test_render_tex() {
        let tex = render(&cross(), Format::Tex).unwrap();
        assert!(tex.starts_with("$$\n\\left(\n\\begin{array}{ccc}\n0.5 & 0 & 0 \\\\\n"));
        assert_eq!(tex.matches("$$").count(), 4);
    }

    #[test]
    fn test_render_json() {
        let json = render(&cross(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["eigenpairs"].as_array().map(Vec::len), Some(3));
    }
}
