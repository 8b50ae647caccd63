//! Main window of the analysis tool.
//!
//! Video import (file dialog, typed path or drag-and-drop), match metadata form, and the
//! confetti overlay played when analysis begins.

use std::path::PathBuf;
use std::time::Instant;

use eframe::egui::*;
use eframe::{App, CreationContext};
use egui_extras::DatePickerButton;
use log::{debug, warn};

use crate::confetti::{ConfettiEngine, RenderNotification, TickTimer};
use crate::context::AppContext;
use crate::core::time::{self, Millis};
use crate::core::video::VIDEO_EXTENSIONS;
use crate::session::session::{IMPORT_CAPTION, TITLE};
use crate::session::{AnalysisSession, ImportOutcome, SessionError};
use crate::ui::confetti_overlay;
use crate::ui::theme::{self, WidgetRole};

pub struct AvaApp {
    session: AnalysisSession,
    confetti: ConfettiEngine,
    timer: TickTimer,
    tick_ms: Millis,
    path_input: String,
    home_input: String,
    away_input: String,
}

impl AvaApp {
    /// Called by eframe once the window and egui context exist
    pub fn new(cc: &CreationContext<'_>, context: &AppContext) -> Self {
        theme::apply(&cc.egui_ctx);

        let tick_ms = context.config.confetti.tick_interval_ms;
        let today = chrono::Local::now().date_naive();

        Self {
            session: AnalysisSession::new(today),
            confetti: context.confetti_engine(),
            timer: TickTimer::new(time::to_duration(tick_ms)),
            tick_ms,
            path_input: String::new(),
            home_input: String::new(),
            away_input: String::new(),
        }
    }

    fn apply_import(&mut self, result: Result<ImportOutcome, SessionError>) {
        match result {
            Ok(ImportOutcome::Imported) => {
                if let Some(video) = self.session.video() {
                    self.path_input = video.path().display().to_string();
                }
            }
            Ok(ImportOutcome::Locked) => {}
            Err(e) => self.session.report_error(&e),
        }
    }

    /// Native open dialog restricted to video files
    fn choose_video(&mut self) {
        if self.session.refuse_if_locked().is_some() {
            return;
        }
        let choice = rfd::FileDialog::new()
            .set_title(IMPORT_CAPTION)
            .add_filter("Video Files", &VIDEO_EXTENSIONS)
            .pick_file();
        let result = self.session.import_chosen(choice);
        self.apply_import(result);
    }

    fn import_typed_path(&mut self) {
        let path = PathBuf::from(self.path_input.trim());
        let result = self.session.import_video(&path);
        self.apply_import(result);
    }

    fn handle_dropped_files(&mut self, ctx: &Context) {
        let dropped: Vec<PathBuf> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect()
        });
        if dropped.is_empty() {
            return;
        }

        let result = self.session.drop_files(&dropped);
        self.apply_import(result);
    }

    fn begin_analysis(&mut self, ctx: &Context) {
        let started = self.session.begin_analysis().map(|_| ());
        if let Err(e) = started {
            self.session.report_error(&e);
            return;
        }

        if self.timer.is_running() {
            debug!("Restarting confetti mid-run");
        }
        let viewport = ctx.screen_rect().size();
        self.confetti.start(viewport.x, viewport.y);
        self.timer.start(Instant::now());
        ctx.request_repaint();
    }

    /// Fire at most one confetti tick per frame
    fn advance_confetti(&mut self, ctx: &Context) {
        let now = Instant::now();
        if self.timer.poll(now) {
            match self.confetti.tick(self.tick_ms) {
                Some(RenderNotification::Redraw) => {}
                Some(RenderNotification::Finished) => {
                    self.timer.stop();
                    self.session.finish_analysis();
                }
                None => {
                    warn!("Confetti timer fired while the animation was idle");
                    self.timer.stop();
                }
            }
        }

        if let Some(wait) = self.timer.time_until_next(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.session
                            .set_status(format!("AVA {}", env!("CARGO_PKG_VERSION")));
                        ui.close_menu();
                    }
                });
            });
        });
    }

    fn status_bar(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(theme::text(WidgetRole::Description, self.session.status()).size(12.0));
        });
    }

    fn import_section(&mut self, ui: &mut Ui) {
        let hovering = ui.ctx().input(|i| {
            let hovered: Vec<PathBuf> = i
                .raw
                .hovered_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect();
            self.session.accepts_drop(&hovered)
        });

        let role = if self.session.is_import_locked() {
            WidgetRole::ImportButtonSelected
        } else {
            WidgetRole::ImportButton
        };

        let frame = if hovering {
            let style = theme::style_for(WidgetRole::DropTarget);
            Frame::none()
                .fill(style.fill)
                .stroke(style.stroke)
                .inner_margin(Margin::same(8.0))
        } else {
            Frame::none().inner_margin(Margin::same(8.0))
        };

        frame.show(ui, |ui| {
            let caption = self.session.import_caption().to_string();
            if ui.add(theme::button(role, caption)).clicked() {
                self.choose_video();
            }

            ui.horizontal(|ui| {
                let visuals = theme::input_visuals(WidgetRole::TextInput, ui.visuals());
                *ui.visuals_mut() = visuals;
                let path = ui.add(
                    text_input(&mut self.path_input, WidgetRole::TextInput)
                        .hint_text(format!("or type a path ({})", VIDEO_EXTENSIONS.join(", ")))
                        .desired_width(ui.available_width() * 0.6),
                );
                let submitted = path.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                if ui.button("Open").clicked() || submitted {
                    self.import_typed_path();
                }
            });
            ui.label(
                theme::text(
                    WidgetRole::Description,
                    "or drop a video file anywhere in this window",
                )
                .size(12.0),
            );
        });
    }

    fn metadata_section(&mut self, ui: &mut Ui, ctx: &Context) {
        if !self.session.is_metadata_form_visible() {
            return;
        }

        ui.horizontal(|ui| {
            ui.scope(|ui| {
                let visuals = theme::input_visuals(WidgetRole::TextInput, ui.visuals());
                *ui.visuals_mut() = visuals;

                let home = ui.add(
                    text_input(&mut self.home_input, WidgetRole::TextInput)
                        .hint_text("Enter Home Team Name Here")
                        .desired_width(160.0),
                );
                if home.changed() {
                    self.session.set_home_team(&self.home_input);
                }

                let away = ui.add(
                    text_input(&mut self.away_input, WidgetRole::TextInput)
                        .hint_text("Enter Away Team Name Here")
                        .desired_width(160.0),
                );
                if away.changed() {
                    self.session.set_away_team(&self.away_input);
                }
            });

            ui.scope(|ui| {
                let visuals = theme::input_visuals(WidgetRole::DateInput, ui.visuals());
                *ui.visuals_mut() = visuals;

                let mut date = self.session.metadata().date;
                if ui
                    .add(DatePickerButton::new(&mut date).id_source("game_date"))
                    .changed()
                {
                    self.session.set_game_date(date);
                }
            });

            if ui
                .add(theme::button(WidgetRole::PrimaryButton, "Begin Analysis"))
                .clicked()
            {
                self.begin_analysis(ctx);
            }
        });
    }
}

/// Single-line text field in the font and colour of `role`
fn text_input(text: &mut String, role: WidgetRole) -> TextEdit<'_> {
    let style = theme::style_for(role);
    TextEdit::singleline(text)
        .font(FontId::proportional(style.font_size))
        .text_color(style.text)
}

impl App for AvaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.advance_confetti(ctx);

        self.menu_bar(ctx);
        self.status_bar(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical(|ui| {
                ui.label(theme::text(WidgetRole::Title, TITLE).strong());
                ui.label(theme::text(WidgetRole::Description, self.session.description()));
                ui.add_space(12.0);
                self.import_section(ui);
                ui.add_space(8.0);
                self.metadata_section(ui, ctx);
            });
        });

        if self.confetti.is_active() {
            confetti_overlay::paint(ctx, self.confetti.particles());
        }
    }
}
