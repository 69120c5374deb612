//! Plain-text and JSON renderings of an annotated scale.

use std::io;

use itertools::Itertools;
use serde::Serialize;

use crate::notes::{edo_note_names, keyboard_key};
use crate::scale::{AnnotatedScale, AnnotatedStep};

pub const TABLE_HEADER: &str =
    "Steps\tNote\tCents\t-- Just\tratio\tcents\terror --\tFrequency\tKbd note";

/// One output row, detached from the catalogue it was annotated with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub cents: f64,
    pub frequency: Option<f64>,
    /// Spelled note name, or the placed ratio's note if the scale cannot be spelled.
    pub note: Option<String>,
    /// Label of the placed ratio, e.g. `P5`.
    pub interval: Option<String>,
    /// Placed ratio as `n1:n2`.
    pub ratio: Option<String>,
    pub ratio_cents: Option<f64>,
    pub just_error: Option<f64>,
    pub keyboard_key: String,
}

impl StepReport {
    pub fn from_step(step: &AnnotatedStep, spelled: Option<&str>) -> Self {
        let ratio = step.ratio;
        Self {
            index: step.step.index,
            cents: step.step.cents,
            frequency: step.step.frequency,
            note: spelled
                .or_else(|| ratio.and_then(|r| r.note()))
                .map(str::to_string),
            interval: ratio
                .map(|r| r.label())
                .filter(|label| !label.is_empty())
                .map(str::to_string),
            ratio: ratio.map(|r| r.to_string()),
            ratio_cents: ratio.map(|r| r.cents()),
            just_error: step.just_error(),
            keyboard_key: keyboard_key(step.step.index),
        }
    }
}

/// Report rows in step order, root first.
pub fn rows(scale: &AnnotatedScale) -> Vec<StepReport> {
    let names = edo_note_names(scale);
    scale
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let spelled = names.as_ref().and_then(|n| n.get(i)).map(String::as_str);
            StepReport::from_step(step, spelled)
        })
        .collect()
}

/// Tab-separated table, top step first.
pub fn write_table(out: &mut impl io::Write, rows: &[StepReport]) -> io::Result<()> {
    writeln!(out, "{TABLE_HEADER}")?;
    for row in rows.iter().rev() {
        let mut fields = vec![
            row.index.to_string(),
            row.note.clone().unwrap_or_default(),
            format!("{:7.2}", row.cents),
        ];
        match (&row.ratio, row.ratio_cents, row.just_error) {
            (Some(ratio), Some(ratio_cents), Some(error)) => fields.extend([
                row.interval.clone().unwrap_or_default(),
                ratio.clone(),
                format!("{ratio_cents:.2}"),
                format!("{error:.2}"),
            ]),
            _ => fields.extend(std::iter::repeat_n(String::new(), 4)),
        }
        fields.push(row.frequency.map(|f| format!("{f:.2}")).unwrap_or_default());
        fields.push(row.keyboard_key.clone());
        writeln!(out, "{}", fields.iter().format("\t"))?;
    }
    Ok(())
}

/// `label ratio cents error` for every step that received a ratio.
pub fn write_placed(out: &mut impl io::Write, rows: &[StepReport]) -> io::Result<()> {
    for row in rows {
        if let (Some(ratio), Some(ratio_cents), Some(error)) =
            (&row.ratio, row.ratio_cents, row.just_error)
        {
            writeln!(
                out,
                "{}\t{ratio}\t{ratio_cents:.2}\t{error:.2}",
                row.interval.as_deref().unwrap_or_default()
            )?;
        }
    }
    Ok(())
}

/// One cents value per line, root first.
pub fn write_cents(out: &mut impl io::Write, rows: &[StepReport]) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{:.2}", row.cents)?;
    }
    Ok(())
}

pub fn write_json(out: &mut impl io::Write, rows: &[StepReport]) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::ReferenceCatalogue;
    use crate::equal::EqualDivision;
    use crate::ji_ratio::IntervalRatio;
    use crate::partch::partch_annotated;
    use crate::placement::PlacementEngine;
    use crate::scale::ScaleStep;

    fn edo_rows(divisions: u32) -> Vec<StepReport> {
        let catalogue = ReferenceCatalogue::default();
        let scale = EqualDivision::new(divisions, 261.625).generate().unwrap();
        rows(&PlacementEngine::new(&catalogue).place(&scale))
    }

    fn render(write: impl Fn(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = vec![];
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_rows() {
        let rows = edo_rows(12);
        assert_eq!(rows.len(), 13);
        let fifth = &rows[7];
        assert_eq!(fifth.note.as_deref(), Some("G"));
        assert_eq!(fifth.interval.as_deref(), Some("P5"));
        assert_eq!(fifth.ratio.as_deref(), Some("3:2"));
        assert!((fifth.just_error.unwrap() + 1.955).abs() < 1e-3);
        assert_eq!(fifth.keyboard_key, "G1");
        assert_eq!(rows[12].keyboard_key, "C2");
        assert_eq!(rows[11].interval.as_deref(), Some("M7"));
        assert_eq!(rows[11].note.as_deref(), Some("B"));
    }

    #[test]
    fn test_unspellable_scale_falls_back_to_ratio_notes() {
        let rows = rows(&partch_annotated());
        assert_eq!(rows[8].note.as_deref(), Some("D"));
        assert_eq!(rows[1].note, None);
        assert_eq!(rows[1].interval, None);
        assert_eq!(rows[1].ratio.as_deref(), Some("81:80"));
    }

    #[test]
    fn test_table() {
        let rows = edo_rows(12);
        let table = render(|out| write_table(out, &rows));
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(
            lines[1],
            "12\tC\t1200.00\tP8\t2:1\t1200.00\t0.00\t523.25\tC2"
        );
        assert_eq!(
            lines[2],
            "11\tB\t1100.00\tM7\t15:8\t1088.27\t11.73\t493.88\tB1"
        );
        assert!(lines[13].starts_with("0\tC\t   0.00\tP1\t1:1\t0.00\t0.00\t261.6"));
    }

    #[test]
    fn test_table_empty_columns() {
        let steps = [0.0, 350.0, 1200.0]
            .into_iter()
            .enumerate()
            .map(|(index, cents)| AnnotatedStep {
                step: ScaleStep::new(index, cents),
                ratio: (index == 0).then_some(&IntervalRatio::UNISON),
            })
            .collect();
        let rows = rows(&AnnotatedScale::new(steps, vec![]));
        let table = render(|out| write_table(out, &rows));
        let lines = table.lines().collect::<Vec<_>>();
        assert_eq!(lines[1], "2\t\t1200.00\t\t\t\t\t\tD1");
        assert_eq!(lines[3], "0\tC\t   0.00\tP1\t1:1\t0.00\t0.00\t\tC1");
        assert_eq!(render(|out| write_placed(out, &rows)), "P1\t1:1\t0.00\t0.00\n");
    }

    #[test]
    fn test_placed_and_cents() {
        let rows = edo_rows(12);
        let placed = render(|out| write_placed(out, &rows));
        assert!(placed.lines().any(|l| l == "P5\t3:2\t701.96\t-1.96"));
        assert_eq!(placed.lines().count(), rows.iter().filter(|r| r.ratio.is_some()).count());

        let cents = render(|out| write_cents(out, &rows));
        assert_eq!(cents.lines().next(), Some("0.00"));
        assert_eq!(cents.lines().nth(7), Some("700.00"));
    }

    #[test]
    fn test_json() {
        let rows = edo_rows(12);
        let mut buffer = vec![];
        write_json(&mut buffer, &rows).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[7]["interval"], "P5");
        assert_eq!(value[7]["ratio"], "3:2");
        assert_eq!(value[11]["ratio"], "15:8");
        assert_eq!(value[0]["index"], 0);
    }

    #[test]
    fn test_json_unassigned_fields_are_null() {
        let steps = [0.0, 350.0, 1200.0]
            .into_iter()
            .enumerate()
            .map(|(index, cents)| AnnotatedStep {
                step: ScaleStep::new(index, cents),
                ratio: (index == 0).then_some(&IntervalRatio::UNISON),
            })
            .collect();
        let rows = rows(&AnnotatedScale::new(steps, vec![]));
        let mut buffer = vec![];
        write_json(&mut buffer, &rows).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["ratio"], "1:1");
        assert_eq!(value[0]["frequency"], serde_json::Value::Null);
        for field in ["note", "interval", "ratio", "ratio_cents", "just_error"] {
            assert_eq!(value[1][field], serde_json::Value::Null, "{field}");
        }
    }
}
