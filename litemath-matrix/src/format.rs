//! Text renderings: plain dump, TeX array, CSV

use crate::types::DenseMatrix;

/// Shortest round-trip rendering; negative zero prints as `0`
fn plain(x: f64) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    x.to_string()
}

/// Fixed 3-decimal rendering; negative zero prints as `0.000`
fn fixed3(x: f64) -> String {
    let x = if x == 0.0 { 0.0 } else { x };
    format!("{:.3}", x)
}

impl DenseMatrix {
    /// Multi-line dump: a header, then one comma-separated line per row
    pub fn to_display_string(&self) -> String {
        let mut s = format!("matrix col: {} row: {}\n", self.cols, self.rows);
        for i in 0..self.rows {
            let cells: Vec<String> = (0..self.cols).map(|j| fixed3(self.at(i, j))).collect();
            s.push_str(&cells.join(", "));
            s.push('\n');
        }
        s
    }

    /// TeX `array` wrapped in `\left( ... \right)`
    ///
    /// Math delimiters are left to the caller.
    pub fn to_tex(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows + 5);
        lines.push("\\left(".to_string());
        lines.push(format!("\\begin{{array}}{{{}}}", "c".repeat(self.cols)));
        for i in 0..self.rows {
            let cells: Vec<String> = (0..self.cols).map(|j| plain(self.at(i, j))).collect();
            let mut line = cells.join(" & ");
            if i + 1 != self.rows {
                line.push_str(" \\\\");
            }
            lines.push(line);
        }
        lines.push("\\end{array}".to_string());
        lines.push("\\right)".to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    /// Flat buffer joined with commas
    ///
    /// Values come out in storage order, unlike the other renderings: a
    /// column-major matrix lists its columns one after another.
    pub fn to_csv(&self) -> String {
        self.data
            .iter()
            .map(|&x| plain(x))
            .collect::<Vec<_>>()
            .join(",")
    }
}
