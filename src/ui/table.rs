use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{CandidateRecord, NumericField};
use crate::state::AppState;

const TEXT_COLUMNS: [&str; 5] = ["Candidate Name", "City", "Last Company", "Level", "Title"];
const FLAG_COLUMNS: [&str; 2] = ["Actively Looking", "Gaming/Films"];

// ---------------------------------------------------------------------------
// Data table (central panel, below the plot)
// ---------------------------------------------------------------------------

/// List the filtered candidates in table order.
pub fn candidate_table(ui: &mut Ui, state: &AppState) {
    let records = &state.table.records;
    let rows = &state.visible_indices;
    let row_height = egui::TextStyle::Body
        .resolve(ui.style())
        .size
        .max(ui.spacing().interact_size.y);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(140.0))
        .columns(Column::auto().at_least(80.0), TEXT_COLUMNS.len() - 1)
        .columns(Column::auto().at_least(60.0), NumericField::COUNT)
        .column(Column::auto())
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .header(20.0, |mut header| {
            let titles = TEXT_COLUMNS
                .into_iter()
                .chain(NumericField::ALL.map(NumericField::label))
                .chain(FLAG_COLUMNS);
            for title in titles {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(row_height, rows.len(), |mut row| {
                let rec = &records[rows[row.index()]];
                let level_color = state.color_map.color_for(rec.level.as_deref());

                row.col(|ui| {
                    ui.label(rec.display_name.as_str());
                });
                row.col(|ui| {
                    ui.label(rec.city.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(rec.last_company.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(RichText::new(rec.level.as_deref().unwrap_or("")).color(level_color));
                });
                row.col(|ui| {
                    ui.label(rec.title.as_str());
                });
                for field in NumericField::ALL {
                    row.col(|ui| {
                        ui.label(format_value(rec, field));
                    });
                }
                row.col(|ui| {
                    ui.label(rec.actively_looking.as_str());
                });
                row.col(|ui| {
                    ui.label(rec.gaming_films.as_str());
                });
            });
        });
}

/// Numeric cell text; whole numbers without decimals, missing as a dash.
fn format_value(rec: &CandidateRecord, field: NumericField) -> String {
    match rec.value(field) {
        Some(v) if v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.1}"),
        None => "–".to_string(),
    }
}
