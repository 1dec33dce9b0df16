use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoint, Points};

use crate::data::model::NumericField;
use crate::state::AppState;

const X_FIELD: NumericField = NumericField::TotalItExperience;
const Y_FIELD: NumericField = NumericField::TroubleshootingExperience;

// ---------------------------------------------------------------------------
// Experience scatter (central panel)
// ---------------------------------------------------------------------------

/// Scatter of IT vs troubleshooting experience, one series per level.
///
/// Clicking a legend entry hides or shows that level.
pub fn experience_scatter(ui: &mut Ui, state: &AppState, height: f32) {
    let mut by_level: BTreeMap<Option<&str>, Vec<[f64; 2]>> = BTreeMap::new();
    let mut hover_names: Vec<([f64; 2], String)> = Vec::new();

    for &idx in &state.visible_indices {
        let rec = &state.table.records[idx];
        let (Some(x), Some(y)) = (rec.value(X_FIELD), rec.value(Y_FIELD)) else {
            continue;
        };
        by_level
            .entry(rec.level.as_deref())
            .or_default()
            .push([x, y]);
        hover_names.push(([x, y], rec.display_name.clone()));
    }

    Plot::new("experience_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(X_FIELD.label())
        .y_axis_label(Y_FIELD.label())
        .include_x(0.0)
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .label_formatter(move |level, point| hover_label(&hover_names, level, point))
        .show(ui, |plot_ui| {
            for (level, points) in by_level {
                let color = state.color_map.color_for(level);
                plot_ui.points(
                    Points::new(points)
                        .name(state.color_map.series_name(level))
                        .color(color)
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}

/// Tooltip text: level, coordinates and the candidates at that point.
fn hover_label(names: &[([f64; 2], String)], level: &str, point: &PlotPoint) -> String {
    if level.is_empty() {
        return format!("IT: {:.1}\nTroubleshooting: {:.1}", point.x, point.y);
    }
    let at_point: Vec<&str> = names
        .iter()
        .filter(|([x, y], _)| *x == point.x && *y == point.y)
        .map(|(_, name)| name.as_str())
        .collect();

    let mut label = format!(
        "{level}\nIT: {:.1} yrs\nTroubleshooting: {:.1} yrs",
        point.x, point.y
    );
    if !at_point.is_empty() {
        label.push('\n');
        label.push_str(&at_point.join(", "));
    }
    label
}
