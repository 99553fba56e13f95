use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::filter::FilteredView;
use crate::data::model::SalaryRecord;
use crate::report::format;

const ROW_HEIGHT: f32 = 18.0;

const HEADERS: [&str; 8] = [
    "ano",
    "senioridade",
    "contrato",
    "tamanho_empresa",
    "cargo",
    "remoto",
    "residencia_iso3",
    "usd",
];

fn cells(rec: &SalaryRecord) -> [String; 8] {
    [
        rec.year.to_string(),
        rec.seniority.clone(),
        rec.contract.clone(),
        rec.company_size.clone(),
        rec.role.clone(),
        rec.remote.clone(),
        rec.country_iso3.clone(),
        format::usd(rec.usd),
    ]
}

/// Raw rows of the filtered view. Only visible rows are laid out.
pub fn detail_table(ui: &mut Ui, view: &FilteredView<'_>) {
    ui.strong("Detailed Data");
    ui.push_id("detail_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .min_scrolled_height(0.0)
            .max_scroll_height(400.0)
            .columns(Column::auto().at_least(60.0), HEADERS.len() - 1)
            .column(Column::remainder())
            .header(ROW_HEIGHT + 4.0, |mut header| {
                for name in HEADERS {
                    header.col(|ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, view.len(), |mut row| {
                    let rec = view.rows[row.index()];
                    for text in cells(rec) {
                        row.col(|ui| {
                            ui.label(text);
                        });
                    }
                });
            });
    });
}
