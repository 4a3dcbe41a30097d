use crate::form::{DateSlot, FormMode};
use crate::store::Upserted;
use crate::{Catalogue, Filter, FormState, ListView, SortKey, codec, schema, statics};
use eframe::egui;
use egui_extras::{Column, TableBuilder};
use std::path::{Path, PathBuf};

pub fn run_gui() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 860.0]),
        ..Default::default()
    };
    let title = format!("{} {}", statics::EN_APP_TITLE, env!("CARGO_PKG_VERSION"));
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(SproutApp::startup()))),
    )
}

/// The main application state and GUI logic: the catalogue (owned), the
/// derived list view, the headless form state, and the widget buffers that
/// feed them.
struct SproutApp {
    catalogue: Catalogue,
    view: ListView,
    form: FormState,
    dialog_dir: Option<PathBuf>,

    // Which record the table highlights; also the delete target.
    selected_name: Option<String>,

    // Filter bar inputs.
    search_input: String,
    pairing_pick: String,
    season_pick: String,
    heirloom_only: bool,

    // Buffers for the two repeated-date adders.
    start_month: String,
    start_day: String,
    started_month: String,
    started_day: String,
    started_year: String,

    status: String,
    last_error: Option<String>,
    about_open: bool,
    confirm_delete: Option<String>,
    theme_dark: bool,
}

impl SproutApp {
    fn startup() -> Self {
        let path = Path::new(statics::DEFAULT_CATALOGUE_FILE);
        // Startup never fails: an unreadable file degrades to an empty
        // catalogue at the same path, with the error surfaced.
        let (catalogue, last_error) = match Catalogue::open(path) {
            Ok(catalogue) => (catalogue, None),
            Err(e) => (
                Catalogue::create_empty(path),
                Some(format!("Failed to load: {e:#}")),
            ),
        };

        Self {
            catalogue,
            view: ListView::new(),
            form: FormState::new(),
            dialog_dir: None,
            selected_name: None,
            search_input: String::new(),
            pairing_pick: String::new(),
            season_pick: String::new(),
            heirloom_only: false,
            start_month: String::new(),
            start_day: String::new(),
            started_month: String::new(),
            started_day: String::new(),
            started_year: String::new(),
            status: String::new(),
            last_error,
            about_open: false,
            confirm_delete: None,
            theme_dark: true,
        }
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let mut dlg = rfd::FileDialog::new().add_filter("Seed Catalogue", &["csv"]);
        if let Some(dir) = self.dialog_dir.clone() {
            dlg = dlg.set_directory(dir);
        }
        dlg
    }

    fn open_file(&mut self) {
        let Some(path) = self.file_dialog().pick_file() else {
            return;
        };

        match Catalogue::open(&path) {
            Ok(catalogue) => {
                self.dialog_dir = path.parent().map(PathBuf::from);
                self.status = format!("Loaded {}", path.display());
                self.catalogue = catalogue;
                self.reset_filters();
                self.form.clear();
                self.selected_name = None;
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to load: {e:#}"));
            }
        }
    }

    fn save_file_as(&mut self) {
        let mut dlg = self.file_dialog();
        if let Some(file_name) = self.catalogue.path().file_name() {
            dlg = dlg.set_file_name(file_name.to_string_lossy());
        }
        let Some(path) = dlg.save_file() else {
            return;
        };

        if let Err(e) = self.catalogue.save_as(&path) {
            self.last_error = Some(format!("Failed to save: {e}"));
        } else {
            self.dialog_dir = path.parent().map(PathBuf::from);
            self.status = format!("Saved {}", path.display());
            self.last_error = None;
        }
    }

    fn export_file(&mut self) {
        let Some(path) = self.file_dialog().save_file() else {
            return;
        };

        // Export writes the full catalogue, ignoring any active filter, and
        // leaves the backing path alone.
        if let Err(e) = self.catalogue.export_to(&path) {
            self.last_error = Some(format!("Failed to export: {e}"));
        } else {
            self.dialog_dir = path.parent().map(PathBuf::from);
            self.status = format!("Exported {}", path.display());
            self.last_error = None;
        }
    }

    /// Add/Update and Save share this path; only the post-submit cleanup
    /// differs (the explicit Save keeps the fields for further editing).
    fn submit_form(&mut self, clear_after: bool) {
        let name = self.form.name().to_string();
        match self.form.submit(&mut self.catalogue) {
            Ok(outcome) => {
                self.status = match outcome {
                    Upserted::Inserted => format!("Added '{name}'"),
                    Upserted::Updated => format!("Updated '{name}'"),
                };
                self.last_error = None;
                self.selected_name = Some(name);
                // Mutations re-derive the list from the full catalogue.
                self.reset_filters();
                if clear_after {
                    self.form.clear();
                    self.selected_name = None;
                }
            }
            Err(e) => {
                self.last_error = Some(format!("Not saved: {e}"));
            }
        }
    }

    fn request_delete(&mut self) {
        match self.selected_name.clone() {
            Some(name) => self.confirm_delete = Some(name),
            None => self.last_error = Some(statics::EN_ERR_SELECT_ROW_DELETE.to_string()),
        }
    }

    fn delete_confirmed(&mut self, name: &str) {
        let result = self
            .catalogue
            .delete(name)
            .and_then(|()| self.catalogue.persist());
        match result {
            Ok(()) => {
                self.status = format!("Deleted '{name}'");
                self.last_error = None;
                self.form.clear();
                self.selected_name = None;
                self.reset_filters();
            }
            Err(e) => {
                self.last_error = Some(format!("Failed to delete: {e}"));
            }
        }
    }

    fn load_by_name(&mut self, name: &str) {
        let Some(record) = self.catalogue.get(name).cloned() else {
            self.last_error = Some(format!("No seed named {name:?}"));
            return;
        };
        self.form.load_record(&record);
        self.selected_name = Some(name.to_string());
        self.last_error = None;
    }

    fn reset_filters(&mut self) {
        self.view.reset();
        self.search_input.clear();
        self.pairing_pick.clear();
        self.season_pick.clear();
        self.heirloom_only = false;
    }

    fn apply_search(&mut self) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            if matches!(self.view.filter(), Some(Filter::NameContains(_))) {
                self.view.reset();
            }
        } else {
            self.view.set_filter(Filter::NameContains(query));
            self.pairing_pick.clear();
            self.season_pick.clear();
            self.heirloom_only = false;
        }
    }

    // Zero-pad small numeric date parts so typed "5" matches the stored
    // "05" convention; anything non-numeric passes through as typed.
    fn pad2(part: &str) -> String {
        match part.trim().parse::<u32>() {
            Ok(n) if n < 100 => format!("{n:02}"),
            _ => part.trim().to_string(),
        }
    }

    fn render_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if ui.button(statics::EN_BTN_OPEN).clicked() {
                    self.open_file();
                }
                if ui.button(statics::EN_BTN_SAVE).clicked() {
                    // Explicit save: submit the current form without
                    // clearing it.
                    self.submit_form(false);
                }
                if ui.button(statics::EN_BTN_SAVE_AS).clicked() {
                    self.save_file_as();
                }
                if ui.button(statics::EN_BTN_EXPORT).clicked() {
                    self.export_file();
                }

                ui.separator();
                ui.label(statics::EN_LABEL_EDIT);
                let names = self.catalogue.names();
                let current = self
                    .selected_name
                    .clone()
                    .unwrap_or_else(|| statics::EN_HINT_PICK_NAME.to_string());
                let mut picked: Option<String> = None;
                egui::ComboBox::from_id_salt("name_picker")
                    .selected_text(current)
                    .width(200.0)
                    .show_ui(ui, |ui| {
                        for name in &names {
                            let selected = self.selected_name.as_deref() == Some(name.as_str());
                            if ui.selectable_label(selected, name.as_str()).clicked() {
                                picked = Some(name.clone());
                            }
                        }
                    });
                if let Some(name) = picked {
                    self.load_by_name(&name);
                }

                ui.separator();
                if ui.button(statics::EN_BTN_ABOUT).clicked() {
                    self.about_open = true;
                }
                if ui.button(statics::EN_BTN_TOGGLE_THEME).clicked() {
                    self.theme_dark = !self.theme_dark;
                    if self.theme_dark {
                        ctx.set_visuals(egui::Visuals::dark());
                    } else {
                        ctx.set_visuals(egui::Visuals::light());
                    }
                }

                if !self.status.is_empty() {
                    ui.separator();
                    ui.label(&self.status);
                }
            });
        });
    }

    fn render_filter_bar(&mut self, ctx: &egui::Context) {
        let pairing_options = self.catalogue.pairing_options();
        let season_options = self.catalogue.season_options();

        egui::TopBottomPanel::top("filter_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(statics::EN_LABEL_SEARCH);
                let resp = ui.add(
                    egui::TextEdit::singleline(&mut self.search_input)
                        .hint_text(statics::EN_HINT_SEARCH)
                        .desired_width(160.0),
                );
                if resp.changed() {
                    self.apply_search();
                }

                ui.separator();
                ui.label(statics::EN_LABEL_PAIRING);
                let current = if self.pairing_pick.is_empty() {
                    statics::EN_HINT_ANY.to_string()
                } else {
                    self.pairing_pick.clone()
                };
                egui::ComboBox::from_id_salt("pairing_filter")
                    .selected_text(current)
                    .width(150.0)
                    .show_ui(ui, |ui| {
                        for option in &pairing_options {
                            let selected = self.pairing_pick == *option;
                            if ui.selectable_label(selected, option.as_str()).clicked() {
                                self.pairing_pick = option.clone();
                                self.season_pick.clear();
                                self.heirloom_only = false;
                                self.search_input.clear();
                                self.view.set_filter(Filter::PairsWith(option.clone()));
                            }
                        }
                    });

                ui.label(statics::EN_LABEL_SEASON);
                let current = if self.season_pick.is_empty() {
                    statics::EN_HINT_ANY.to_string()
                } else {
                    self.season_pick.clone()
                };
                egui::ComboBox::from_id_salt("season_filter")
                    .selected_text(current)
                    .width(130.0)
                    .show_ui(ui, |ui| {
                        for option in &season_options {
                            let selected = self.season_pick == *option;
                            if ui.selectable_label(selected, option.as_str()).clicked() {
                                self.season_pick = option.clone();
                                self.pairing_pick.clear();
                                self.heirloom_only = false;
                                self.search_input.clear();
                                self.view
                                    .set_filter(Filter::SeasonContains(option.clone()));
                            }
                        }
                    });

                if ui
                    .checkbox(&mut self.heirloom_only, statics::EN_CHECK_HEIRLOOM_ONLY)
                    .changed()
                {
                    if self.heirloom_only {
                        self.pairing_pick.clear();
                        self.season_pick.clear();
                        self.search_input.clear();
                        self.view.set_filter(Filter::Heirloom);
                    } else {
                        self.view.reset();
                    }
                }

                ui.separator();
                ui.label(statics::EN_LABEL_SORT);
                if ui.button(statics::EN_SORT_NAME).clicked() {
                    self.view.sort_by(SortKey::Name);
                }
                if ui.button(statics::EN_SORT_TYPE).clicked() {
                    self.view.sort_by(SortKey::Type);
                }

                ui.separator();
                if ui.button(statics::EN_BTN_RESET).clicked() {
                    self.reset_filters();
                }
            });
        });
    }

    fn render_error_bar(&mut self, ctx: &egui::Context) {
        let Some(err) = self.last_error.clone() else {
            return;
        };
        egui::TopBottomPanel::top("error_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(ui.visuals().error_fg_color, err);
                if ui.small_button(statics::EN_BTN_DISMISS).clicked() {
                    self.last_error = None;
                }
            });
        });
    }

    fn render_status_bar(&mut self, ctx: &egui::Context, shown: usize) {
        egui::TopBottomPanel::bottom("bottom_status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.monospace(self.catalogue.path().display().to_string());
                if self.catalogue.dirty() {
                    ui.colored_label(ui.visuals().warn_fg_color, statics::EN_BADGE_DIRTY);
                }
                ui.separator();
                ui.label(format!(
                    "{} {shown} {} {}",
                    statics::EN_LABEL_SHOWING,
                    statics::EN_LABEL_OF,
                    self.catalogue.len()
                ));
                ui.separator();
                let mode = match self.form.mode() {
                    FormMode::Empty => statics::EN_MODE_EMPTY,
                    FormMode::EditingExisting => statics::EN_MODE_EDITING_EXISTING,
                    FormMode::EditingNew => statics::EN_MODE_EDITING_NEW,
                };
                ui.label(mode);
            });
        });
    }

    fn render_form_field(&mut self, ui: &mut egui::Ui, column: &str) {
        match column {
            schema::COL_LIFE_CYCLE => {
                let current = self.form.life_cycle.clone();
                egui::ComboBox::from_id_salt("life_cycle_input")
                    .selected_text(current)
                    .width(120.0)
                    .show_ui(ui, |ui| {
                        for option in schema::LIFE_CYCLES {
                            if ui
                                .selectable_value(
                                    &mut self.form.life_cycle,
                                    option.to_string(),
                                    option,
                                )
                                .clicked()
                            {
                                self.form.mark_edited();
                            }
                        }
                    });
            }
            schema::COL_HEIRLOOM => {
                let current = self.form.heirloom.clone();
                egui::ComboBox::from_id_salt("heirloom_input")
                    .selected_text(current)
                    .width(100.0)
                    .show_ui(ui, |ui| {
                        for option in schema::HEIRLOOM_CHOICES {
                            if ui
                                .selectable_value(
                                    &mut self.form.heirloom,
                                    option.to_string(),
                                    option,
                                )
                                .clicked()
                            {
                                self.form.mark_edited();
                            }
                        }
                    });
            }
            schema::COL_SEASONS => {
                ui.horizontal(|ui| {
                    for (i, season) in schema::SEASONS.iter().enumerate() {
                        if ui.checkbox(&mut self.form.seasons[i], *season).changed() {
                            self.form.mark_edited();
                        }
                    }
                });
            }
            schema::COL_TEMPERATURE => {
                ui.horizontal(|ui| {
                    let min = ui.add(
                        egui::TextEdit::singleline(&mut self.form.temp_min)
                            .desired_width(40.0),
                    );
                    ui.label(statics::EN_RANGE_DASH);
                    let max = ui.add(
                        egui::TextEdit::singleline(&mut self.form.temp_max)
                            .desired_width(40.0),
                    );
                    if min.changed() || max.changed() {
                        self.form.mark_edited();
                    }
                });
            }
            schema::COL_MATURITY => {
                ui.horizontal(|ui| {
                    let min = ui.add(
                        egui::TextEdit::singleline(&mut self.form.maturity_min)
                            .desired_width(40.0),
                    );
                    ui.label(statics::EN_RANGE_DASH);
                    let max = ui.add(
                        egui::TextEdit::singleline(&mut self.form.maturity_max)
                            .desired_width(40.0),
                    );
                    if min.changed() || max.changed() {
                        self.form.mark_edited();
                    }
                });
            }
            schema::COL_START_DATE => {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.start_month)
                            .hint_text(statics::EN_HINT_MONTH)
                            .desired_width(28.0),
                    );
                    ui.label("/");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.start_day)
                            .hint_text(statics::EN_HINT_DAY)
                            .desired_width(28.0),
                    );
                    if ui.small_button(statics::EN_BTN_ADD_DATE).clicked()
                        && !self.start_month.trim().is_empty()
                        && !self.start_day.trim().is_empty()
                    {
                        let token = format!(
                            "{}/{}",
                            Self::pad2(&self.start_month),
                            Self::pad2(&self.start_day)
                        );
                        self.form.add_date(DateSlot::StartDate, &token);
                    }
                    ui.label(codec::encode_list(
                        self.form.start_dates.iter().map(String::as_str),
                    ));
                    if !self.form.start_dates.is_empty()
                        && ui.small_button(statics::EN_BTN_CLEAR_DATES).clicked()
                    {
                        self.form.clear_dates(DateSlot::StartDate);
                    }
                });
            }
            schema::COL_SEED_STARTED => {
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.started_month)
                            .hint_text(statics::EN_HINT_MONTH)
                            .desired_width(28.0),
                    );
                    ui.label("/");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.started_day)
                            .hint_text(statics::EN_HINT_DAY)
                            .desired_width(28.0),
                    );
                    ui.label("/");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.started_year)
                            .hint_text(statics::EN_HINT_YEAR)
                            .desired_width(42.0),
                    );
                    if ui.small_button(statics::EN_BTN_ADD_DATE).clicked()
                        && !self.started_month.trim().is_empty()
                        && !self.started_day.trim().is_empty()
                        && !self.started_year.trim().is_empty()
                    {
                        let token = format!(
                            "{}/{}/{}",
                            Self::pad2(&self.started_month),
                            Self::pad2(&self.started_day),
                            self.started_year.trim()
                        );
                        self.form.add_date(DateSlot::SeedStarted, &token);
                    }
                    ui.label(codec::encode_list(
                        self.form.seed_started_dates.iter().map(String::as_str),
                    ));
                    if !self.form.seed_started_dates.is_empty()
                        && ui.small_button(statics::EN_BTN_CLEAR_DATES).clicked()
                    {
                        self.form.clear_dates(DateSlot::SeedStarted);
                    }
                });
            }
            _ if schema::is_long_text(column) && column != schema::COL_PAIRINGS => {
                let resp = ui.add(
                    egui::TextEdit::multiline(self.form.field_mut(column))
                        .desired_rows(2)
                        .desired_width(180.0),
                );
                if resp.changed() {
                    self.form.mark_edited();
                }
            }
            _ => {
                let resp = ui.add(
                    egui::TextEdit::singleline(self.form.field_mut(column))
                        .desired_width(160.0),
                );
                if resp.changed() {
                    self.form.mark_edited();
                }
            }
        }
    }

    fn render_form_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("form_panel")
            .resizable(true)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(statics::EN_FORM_HEADING);
                    ui.weak(statics::EN_FORM_HINT);
                });
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| {
                    egui::Grid::new("seed_form_grid")
                        .num_columns(6)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            for chunk in schema::COLUMNS.chunks(3) {
                                for &column in chunk {
                                    ui.label(
                                        egui::RichText::new(column).small().strong(),
                                    );
                                    self.render_form_field(ui, column);
                                }
                                ui.end_row();
                            }
                        });

                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button(statics::EN_BTN_ADD_UPDATE).clicked() {
                            self.submit_form(true);
                        }
                        if ui.button(statics::EN_BTN_DELETE).clicked() {
                            self.request_delete();
                        }
                        if ui.button(statics::EN_BTN_CLEAR).clicked() {
                            self.form.clear();
                            self.selected_name = None;
                            self.last_error = None;
                        }
                    });
                });
            });
    }

    fn render_table(&mut self, ctx: &egui::Context, rows: &[usize]) {
        let mut clicked: Option<String> = None;
        let columns = self.catalogue.columns().to_vec();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.push_id("catalogue_table", |ui| {
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    let row_h = ui.text_style_height(&egui::TextStyle::Body) + 6.0;
                    let records = self.catalogue.records();
                    let selected_name = self.selected_name.clone();

                    TableBuilder::new(ui)
                        .striped(true)
                        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                        .column(Column::initial(180.0).resizable(true))
                        .columns(
                            Column::initial(130.0).resizable(true),
                            columns.len().saturating_sub(1),
                        )
                        .header(row_h, |mut header| {
                            for column in &columns {
                                header.col(|ui| {
                                    ui.strong(column.as_str());
                                });
                            }
                        })
                        .body(|mut body| {
                            for &idx in rows {
                                let record = &records[idx];
                                body.row(row_h, |mut row| {
                                    row.col(|ui| {
                                        let selected = selected_name.as_deref()
                                            == Some(record.name());
                                        if ui
                                            .selectable_label(selected, record.name())
                                            .clicked()
                                        {
                                            clicked = Some(record.name().to_string());
                                        }
                                    });
                                    for column in &columns[1..] {
                                        row.col(|ui| {
                                            let value = record.get(column);
                                            if schema::is_long_text(column)
                                                && value.chars().count() > 40
                                            {
                                                let mut preview: String =
                                                    value.chars().take(37).collect();
                                                preview.push_str("...");
                                                ui.label(preview).on_hover_text(value);
                                            } else {
                                                ui.label(value);
                                            }
                                        });
                                    }
                                });
                            }
                        });
                });
            });
        });

        if let Some(name) = clicked {
            self.load_by_name(&name);
        }
    }

    fn render_about_window(&mut self, ctx: &egui::Context) {
        if !self.about_open {
            return;
        }
        let mut open = self.about_open;
        egui::Window::new(statics::EN_WINDOW_ABOUT)
            .collapsible(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.heading(statics::EN_ABOUT_HEADING);
                ui.label(statics::EN_ABOUT_BLURB);
                ui.horizontal(|ui| {
                    ui.label(statics::EN_ABOUT_VERSION);
                    ui.monospace(env!("CARGO_PKG_VERSION"));
                });
                ui.hyperlink_to(statics::EN_PROJECT_REPO, statics::GITHUB_URL);
            });
        self.about_open = open;
    }

    fn render_confirm_delete(&mut self, ctx: &egui::Context) {
        let Some(name) = self.confirm_delete.clone() else {
            return;
        };
        egui::Window::new(statics::EN_WINDOW_CONFIRM_DELETE)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.label(format!("Delete {name:?}?"));
                ui.horizontal(|ui| {
                    if ui.button(statics::EN_BTN_CONFIRM).clicked() {
                        self.delete_confirmed(&name);
                        self.confirm_delete = None;
                    }
                    if ui.button(statics::EN_BTN_CANCEL).clicked() {
                        self.confirm_delete = None;
                    }
                });
            });
    }
}

impl eframe::App for SproutApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_menu_bar(ctx);
        self.render_filter_bar(ctx);
        self.render_error_bar(ctx);

        let rows = self.view.rows(self.catalogue.records());
        self.render_status_bar(ctx, rows.len());
        self.render_form_panel(ctx);
        self.render_table(ctx, &rows);

        self.render_about_window(ctx);
        self.render_confirm_delete(ctx);
    }
}
