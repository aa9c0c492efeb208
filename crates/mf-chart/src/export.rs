//! CSV and JSON export of chart data.

use crate::curves::{Curve, MoodyChart};
use crate::error::ChartResult;
use crate::overlay::{OperatingPointOverlay, Segment};

const CSV_HEADER: &str = "series,reynolds,friction_factor\n";

fn push_curve(csv: &mut String, curve: &Curve) {
    for p in &curve.points {
        csv.push_str(&format!(
            "{},{},{}\n",
            curve.label, p.reynolds, p.friction_factor
        ));
    }
}

fn push_segment(csv: &mut String, name: &str, seg: &Segment) {
    for p in [seg.from, seg.to] {
        csv.push_str(&format!("{},{},{}\n", name, p.reynolds, p.friction_factor));
    }
}

impl MoodyChart {
    /// Long-format CSV: one row per curve sample.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        push_curve(&mut csv, &self.laminar);
        for curve in &self.turbulent {
            push_curve(&mut csv, curve);
        }
        csv
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl OperatingPointOverlay {
    pub fn to_csv(&self) -> String {
        let mut csv = String::from(CSV_HEADER);
        push_curve(&mut csv, &self.curve);
        csv.push_str(&format!(
            "point,{},{}\n",
            self.point.reynolds, self.point.friction_factor
        ));
        push_segment(&mut csv, "horizontal_guide", &self.horizontal_guide);
        push_segment(&mut csv, "vertical_guide", &self.vertical_guide);
        csv
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::curves::laminar_curve;
    use crate::grid::{ChartSettings, ReynoldsGrid};
    use crate::overlay::operating_point;
    use mf_friction::FrictionSettings;

    #[test]
    fn overlay_csv_rows() {
        let grid = ReynoldsGrid::from_settings(&ChartSettings::default()).unwrap();
        let overlay = operating_point(1000.0, 0.0, &grid, &FrictionSettings::default()).unwrap();
        let csv = overlay.to_csv();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "series,reynolds,friction_factor");
        // header + 10 laminar samples + point + 2 guides of 2 rows
        assert_eq!(lines.len(), 1 + 10 + 1 + 4);
        assert!(lines.contains(&"point,1000,0.064"));
    }

    #[test]
    fn overlay_json_has_regime() {
        let grid = ReynoldsGrid::from_settings(&ChartSettings::default()).unwrap();
        let overlay = operating_point(1e5, 1e-4, &grid, &FrictionSettings::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&overlay.to_json().unwrap()).unwrap();
        assert_eq!(json["regime"], "turbulent");
        assert!(json["diagnostic"].is_null());
    }

    #[test]
    fn laminar_label_in_csv() {
        let curve = laminar_curve(&[800.0]).unwrap();
        let mut csv = String::new();
        super::push_curve(&mut csv, &curve);
        assert_eq!(csv, "laminar (64/Re),800,0.08\n");
    }
}
