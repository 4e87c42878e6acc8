//! Built-in sample data: the first-run dashboard and per-kind payloads used
//! by the add-widget flow.

use crate::data::{
    CanvasSize, ChartPoint, DashboardState, Goal, MetricsData, Position, ProgressData, Size,
    Theme, Widget, WidgetContent, WidgetId, WidgetKind,
};

/// Dashboard shown when nothing usable is stored
pub fn default_state(canvas_size: CanvasSize) -> DashboardState {
    DashboardState {
        widgets: default_widgets(),
        theme: Theme::Light,
        canvas_size,
    }
}

pub fn default_widgets() -> Vec<Widget> {
    vec![
        Widget {
            id: WidgetId::new("1"),
            title: "Revenue Overview".to_string(),
            position: Position::new(50, 50),
            size: Size::new(400, 300),
            color: "#3B82F6".to_string(),
            z_index: 1,
            config: None,
            content: WidgetContent::LineChart(vec![
                ChartPoint::new("Jan", 4200.0).with_extra("growth", 8),
                ChartPoint::new("Feb", 3800.0).with_extra("growth", -5),
                ChartPoint::new("Mar", 6200.0).with_extra("growth", 15),
                ChartPoint::new("Apr", 8100.0).with_extra("growth", 22),
                ChartPoint::new("May", 7800.0).with_extra("growth", 18),
                ChartPoint::new("Jun", 9200.0).with_extra("growth", 28),
            ]),
        },
        Widget {
            id: WidgetId::new("2"),
            title: "Performance Metrics".to_string(),
            position: Position::new(500, 50),
            size: Size::new(400, 300),
            color: "#8B5CF6".to_string(),
            z_index: 2,
            config: None,
            content: WidgetContent::BarChart(vec![
                ChartPoint::new("Desktop", 2400.0).with_extra("percentage", 65),
                ChartPoint::new("Mobile", 1398.0).with_extra("percentage", 38),
                ChartPoint::new("Tablet", 980.0).with_extra("percentage", 26),
                ChartPoint::new("Other", 390.0).with_extra("percentage", 11),
            ]),
        },
        Widget {
            id: WidgetId::new("3"),
            title: "Key Metrics".to_string(),
            position: Position::new(50, 400),
            size: Size::new(350, 250),
            color: "#10B981".to_string(),
            z_index: 3,
            config: None,
            content: WidgetContent::Metrics(MetricsData {
                total_users: Some(12548.0),
                revenue: Some(98750.0),
                conversion_rate: Some(4.2),
                avg_order_value: Some(156.5),
            }),
        },
        Widget {
            id: WidgetId::new("4"),
            title: "Progress Tracking".to_string(),
            position: Position::new(450, 400),
            size: Size::new(350, 250),
            color: "#F59E0B".to_string(),
            z_index: 4,
            config: None,
            content: WidgetContent::Progress(ProgressData {
                goals: vec![
                    Goal::new("Monthly Sales", 75.0, 100.0, "%"),
                    Goal::new("User Growth", 1247.0, 2000.0, "users"),
                    Goal::new("Customer Satisfaction", 4.8, 5.0, "/5"),
                ],
            }),
        },
    ]
}

/// Placeholder payload for a freshly added widget
pub fn sample_content(kind: WidgetKind) -> WidgetContent {
    match kind {
        WidgetKind::LineChart => WidgetContent::LineChart(vec![
            ChartPoint::new("Week 1", 400.0),
            ChartPoint::new("Week 2", 300.0),
            ChartPoint::new("Week 3", 600.0),
            ChartPoint::new("Week 4", 800.0),
        ]),
        WidgetKind::BarChart => WidgetContent::BarChart(vec![
            ChartPoint::new("Product A", 2400.0),
            ChartPoint::new("Product B", 1398.0),
            ChartPoint::new("Product C", 9800.0),
        ]),
        WidgetKind::PieChart => WidgetContent::PieChart(vec![
            ChartPoint::new("Desktop", 60.0),
            ChartPoint::new("Mobile", 30.0),
            ChartPoint::new("Tablet", 10.0),
        ]),
        WidgetKind::Metrics => WidgetContent::Metrics(MetricsData {
            total_users: Some(1000.0),
            revenue: Some(50000.0),
            conversion_rate: Some(3.5),
            avg_order_value: Some(125.0),
        }),
        WidgetKind::Progress => WidgetContent::Progress(ProgressData {
            goals: vec![
                Goal::new("Monthly Target", 75.0, 100.0, "%"),
                Goal::new("Customer Growth", 850.0, 1000.0, " users"),
            ],
        }),
        WidgetKind::Table => WidgetContent::Table(vec![
            ChartPoint::new("North", 1200.0),
            ChartPoint::new("South", 950.0),
            ChartPoint::new("East", 1430.0),
            ChartPoint::new("West", 780.0),
        ]),
    }
}
