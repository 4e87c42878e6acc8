//! KPI tiles for metrics widgets (rendering-agnostic)

use super::format::format_number;
use crate::data::{MetricField, MetricsData};

/// Fixed presentation of one KPI key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricDescriptor {
    pub field: MetricField,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub prefix: &'static str,
    pub suffix: &'static str,
    /// Hardcoded trend, in percent
    pub growth: i32,
}

pub const METRIC_DESCRIPTORS: [MetricDescriptor; 4] = [
    MetricDescriptor {
        field: MetricField::TotalUsers,
        label: "Total Users",
        icon: "👥",
        color: "#3B82F6",
        prefix: "",
        suffix: "",
        growth: 12,
    },
    MetricDescriptor {
        field: MetricField::Revenue,
        label: "Revenue",
        icon: "$",
        color: "#10B981",
        prefix: "$",
        suffix: "",
        growth: 8,
    },
    MetricDescriptor {
        field: MetricField::ConversionRate,
        label: "Conversion Rate",
        icon: "◎",
        color: "#8B5CF6",
        prefix: "",
        suffix: "%",
        growth: -2,
    },
    MetricDescriptor {
        field: MetricField::AvgOrderValue,
        label: "Avg Order Value",
        icon: "🛒",
        color: "#F59E0B",
        prefix: "$",
        suffix: "",
        growth: 15,
    },
];

/// One tile ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct MetricTile {
    pub descriptor: MetricDescriptor,
    pub value_text: String,
    pub trend_text: String,
    pub trending_up: bool,
}

/// Tiles for the keys present in `data`, in descriptor order
pub fn metric_tiles(data: &MetricsData) -> Vec<MetricTile> {
    METRIC_DESCRIPTORS
        .iter()
        .filter_map(|descriptor| {
            let value = data.value(descriptor.field)?;
            let trending_up = descriptor.growth > 0;
            Some(MetricTile {
                descriptor: *descriptor,
                value_text: format!(
                    "{}{}{}",
                    descriptor.prefix,
                    format_number(value),
                    descriptor.suffix
                ),
                trend_text: if trending_up {
                    format!("▲ +{}%", descriptor.growth)
                } else {
                    format!("▼ {}%", descriptor.growth)
                },
                trending_up,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_are_skipped() {
        let data = MetricsData {
            revenue: Some(98750.0),
            conversion_rate: Some(4.2),
            ..MetricsData::default()
        };

        let tiles = metric_tiles(&data);
        assert_eq!(tiles.len(), 2);
        assert_eq!(tiles[0].value_text, "$98,750");
        assert_eq!(tiles[0].trend_text, "▲ +8%");
        assert_eq!(tiles[1].value_text, "4.2%");
        assert!(!tiles[1].trending_up);
        assert_eq!(tiles[1].trend_text, "▼ -2%");
    }

    #[test]
    fn test_empty_metrics_have_no_tiles() {
        assert!(metric_tiles(&MetricsData::default()).is_empty());
    }
}
