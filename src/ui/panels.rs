use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, ScrollArea, Slider, Ui};

use crate::data::filter::{RangeFilter, Selection, SLIDER_DECIMALS};
use crate::data::loader::TextEncoding;
use crate::data::model::{NumericField, YesNo};
use crate::data::stats::Summary;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // Leave room for the slider value box and its label.
            ui.spacing_mut().slider_width = (ui.available_width() - 120.0).max(120.0);

            state.edit_filters(|filters, table| {
                selection_combo(ui, "City", &mut filters.city, &table.cities);
                selection_combo(ui, "Last Company", &mut filters.company, &table.companies);
                ui.separator();

                yes_no_radio(ui, "Actively Looking", &mut filters.actively_looking);
                yes_no_radio(ui, "Gaming/Films Experience", &mut filters.gaming_films);
                ui.separator();

                for field in NumericField::ALL {
                    range_sliders(ui, field, filters.range_mut(field));
                }
            });

            ui.add_space(8.0);
            if ui.button("Clear filters").clicked() {
                state.clear_filters();
            }
        });
}

fn selection_combo(
    ui: &mut Ui,
    label: &str,
    selection: &mut Selection<String>,
    options: &BTreeSet<String>,
) {
    ui.strong(label);
    egui::ComboBox::from_id_salt(label)
        .selected_text(selection.to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(selection, Selection::Any, "All");
            for option in options {
                ui.selectable_value(selection, Selection::Only(option.clone()), option.as_str());
            }
        });
    ui.add_space(4.0);
}

fn yes_no_radio(ui: &mut Ui, label: &str, selection: &mut Selection<YesNo>) {
    ui.strong(label);
    ui.horizontal(|ui: &mut Ui| {
        ui.radio_value(selection, Selection::Any, "All");
        for value in YesNo::ALL {
            ui.radio_value(selection, Selection::Only(value), value.as_str());
        }
    });
    ui.add_space(4.0);
}

fn range_sliders(ui: &mut Ui, field: NumericField, range: &mut RangeFilter) {
    ui.strong(field.label());
    let domain = range.floor..=range.ceiling;

    let min_changed = ui
        .add(Slider::new(&mut range.min, domain.clone()).text("min").max_decimals(SLIDER_DECIMALS))
        .changed();
    let max_changed = ui
        .add(Slider::new(&mut range.max, domain).text("max").max_decimals(SLIDER_DECIMALS))
        .changed();

    if min_changed {
        range.settle(true);
    } else if max_changed {
        range.settle(false);
    }
    ui.add_space(4.0);
}

// ---------------------------------------------------------------------------
// Metric row
// ---------------------------------------------------------------------------

/// Headline numbers above the chart.
pub fn metrics(ui: &mut Ui, summary: &Summary) {
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Candidates", summary.count.to_string());
        metric(
            ui,
            "Avg IT Experience",
            format!("{:.1} yrs", summary.avg_it_experience),
        );
        metric(
            ui,
            "Avg Troubleshooting Experience",
            format!("{:.1} yrs", summary.avg_troubleshooting),
        );
        metric(ui, "Actively Looking", summary.actively_looking.to_string());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(label).small());
            ui.label(RichText::new(value).size(24.0).strong());
        });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, encoding: TextEncoding) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, encoding);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} candidates loaded, {} visible",
            state.table.len(),
            state.visible_indices.len()
        ))
        .on_hover_text(state.source.display().to_string());

        ui.separator();

        if ui.button("Clear filters").clicked() {
            state.clear_filters();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick another candidate file. A failed load keeps the
/// current table and reports the error in the top bar.
pub fn open_file_dialog(state: &mut AppState, encoding: TextEncoding) {
    let file = rfd::FileDialog::new()
        .set_title("Open candidate file")
        .add_filter("Delimited text", &["csv", "tsv", "txt"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path, encoding) {
            Ok(table) => state.set_table(table, path),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
