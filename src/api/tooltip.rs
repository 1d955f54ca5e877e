use serde::Serialize;

use crate::core::{Record, SizeMetric};
use crate::interaction::HoverState;

/// Offset from the pointer to the tooltip's top-left corner.
pub const TOOLTIP_OFFSET_X_PX: f64 = 12.0;
pub const TOOLTIP_OFFSET_Y_PX: f64 = -8.0;

/// Hover card content plus its anchor in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub title: String,
    pub rows: Vec<(String, String)>,
}

impl Tooltip {
    #[must_use]
    pub fn for_record(record: &Record, hover: HoverState, size_metric: SizeMetric) -> Self {
        let mut rows = vec![
            ("Capability".to_owned(), record.capability.clone()),
            ("Value Driver".to_owned(), record.value_driver.to_string()),
        ];
        if size_metric == SizeMetric::Cost {
            rows.push((
                "Cost".to_owned(),
                format_currency(record.cost.unwrap_or(f64::NAN)),
            ));
        }
        rows.push(("Benefits".to_owned(), format_currency(record.benefits)));
        rows.push(("Lifecycle".to_owned(), record.lifecycle.to_string()));
        rows.push(("Risk".to_owned(), record.risk.to_string()));
        rows.push(("Effort".to_owned(), record.effort.to_string()));

        Self {
            x: hover.pointer_x + TOOLTIP_OFFSET_X_PX,
            y: hover.pointer_y + TOOLTIP_OFFSET_Y_PX,
            title: record.name.clone(),
            rows,
        }
    }
}

/// `$1,234,567` style amount; fractional cents are rounded away.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return "$NaN".to_owned();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}")
}

#[cfg(test)]
mod tests {
    use super::format_currency;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(950_000.0), "$950,000");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-1234.4), "-$1,234");
        assert_eq!(format_currency(f64::NAN), "$NaN");
    }
}
