use crate::catalog::{default_classes, default_races};
use crate::character::{CharacterCreated, CharacterCreationFlow, FlowEvent};
use crate::character_ui::{self, class_glyph};
use crate::config::{
    APP_TITLE, BUILD_LABEL, RAM_RANGE_MB, RAM_STEP_MB, RENDER_DISTANCE_RANGE, VOLUME_RANGE,
};
use crate::content::{LOCATIONS, LocationCard, NEWS, SHOP};
use crate::error::LauncherError;
use crate::install::{InstallState, InstallStepper, phase_label};
use crate::play::{PlayAction, launch_command};
use crate::server::{ServerInfo, ServerStatus};
use crate::settings::{SettingsPanel, system_info};
use crate::view::View;
use chrono::Utc;
use eframe::egui::{self, Color32, RichText};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Popup {
    About,
    ConfirmUninstall,
    Launched(String),
}

pub struct Launcher {
    pub view: View,
    pub status: String,
    installer: InstallStepper,
    flow: CharacterCreationFlow,
    character: Option<CharacterCreated>,
    settings: SettingsPanel,
    popup: Option<Popup>,
    rng: StdRng,
    server_status: ServerStatus,
    /// Host summary, gathered once at startup.
    system: String,
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new(false, false)
    }
}

impl eframe::App for Launcher {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_timers(ctx);

        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            self.title_bar(ui);
        });
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            if self.status.is_empty() {
                ui.label(RichText::new(BUILD_LABEL).small().weak());
            } else {
                ui.label(&self.status);
            }
        });
        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(84.0)
            .show(ctx, |ui| {
                sidebar(ui, &mut self.view);
            });
        egui::CentralPanel::default().show(ctx, |ui| match self.view {
            View::Home => self.home(ui),
            View::News => news(ui),
            View::Map => map_placeholder(ui),
            View::Settings => self.settings_view(ui),
        });

        if let Err(e) = character_ui::show(ctx, &mut self.flow) {
            self.report(e);
        }
        self.handle_flow_events();
        self.popups(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.flow.close() {
            tracing::debug!("unfinished character discarded on exit");
        }
        tracing::info!("launcher closed");
    }
}

impl Launcher {
    pub fn new(installed: bool, offline: bool) -> Self {
        Self {
            view: View::default(),
            status: String::new(),
            installer: InstallStepper::new(installed),
            flow: CharacterCreationFlow::new(default_races(), default_classes()),
            character: None,
            settings: SettingsPanel::default(),
            popup: None,
            rng: StdRng::from_entropy(),
            server_status: if offline { ServerStatus::Offline } else { ServerStatus::Online },
            system: system_info().to_string(),
        }
    }

    fn server_info(&self) -> ServerInfo {
        ServerInfo::mock(Utc::now(), self.server_status)
    }

    fn poll_timers(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        if self.installer.tick(now, &mut self.rng) {
            self.status = "Axis installed.".to_string();
        }
        if self.settings.poll(now).is_some() {
            self.status = "Settings saved.".to_string();
        }
        for deadline in [self.installer.next_deadline(), self.settings.next_deadline()]
            .into_iter()
            .flatten()
        {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }

    fn report(&mut self, err: impl Into<LauncherError>) {
        match err.into() {
            LauncherError::Flow(e) => tracing::debug!("ignored wizard action: {e}"),
            other => {
                tracing::warn!("{other}");
                self.status = other.to_string();
            }
        }
    }

    fn handle_flow_events(&mut self) {
        for event in self.flow.drain_events() {
            match event {
                FlowEvent::Created(created) => {
                    self.status = format!(
                        "Welcome, {} {}!",
                        created.race.name, created.class.name
                    );
                    self.character = Some(created);
                }
                FlowEvent::Closed => tracing::debug!("character creation cancelled"),
            }
        }
    }

    fn title_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(APP_TITLE).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let ctx = ui.ctx().clone();
                if ui.button("✕").on_hover_text("Close").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                if ui.button("☐").on_hover_text("Maximize").clicked() {
                    let maximized = ctx.input(|i| i.viewport().maximized.unwrap_or(false));
                    ctx.send_viewport_cmd(egui::ViewportCommand::Maximized(!maximized));
                }
                if ui.button("—").on_hover_text("Minimize").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Minimized(true));
                }
                if ui.button("About").clicked() {
                    self.popup = Some(Popup::About);
                }
            });
        });
    }

    fn home(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new(BUILD_LABEL).small().color(Color32::LIGHT_GREEN));
        ui.horizontal(|ui| {
            ui.heading(RichText::new("AXIS").strong());
            ui.label(RichText::new("ONLINE").strong().color(Color32::LIGHT_GREEN));
        });
        ui.separator();

        server_card(ui, &self.server_info());
        ui.ctx().request_repaint_after(Duration::from_secs(1));
        ui.add_space(8.0);

        ui.columns(2, |cols| {
            for card in LOCATIONS {
                location_card(&mut cols[0], card);
            }
            self.play_area(&mut cols[1]);
        });
    }

    fn play_area(&mut self, ui: &mut egui::Ui) {
        let action = PlayAction::resolve(self.installer.state(), self.character.is_some());
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new(action.label()).size(18.0))
                .min_size(egui::vec2(240.0, 48.0));
            if ui.add_enabled(action.is_enabled(), button).clicked() {
                self.play(action);
            }

            if let Some(character) = &self.character {
                ui.label(format!(
                    "{} {} {}",
                    class_glyph(character.class.icon),
                    character.race.name,
                    character.class.name
                ));
            }

            if let InstallState::Installing { progress, speed } = self.installer.state() {
                ui.add_space(8.0);
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(280.0);
                    ui.label("Download in progress");
                    ui.add(egui::ProgressBar::new(f32::from(*progress) / 100.0).show_percentage());
                    ui.horizontal(|ui| {
                        ui.small(*speed);
                        ui.small(phase_label(*progress));
                    });
                });
            }
        });
    }

    fn play(&mut self, action: PlayAction) {
        match action {
            PlayAction::Busy => {}
            PlayAction::Install => {
                if let Err(e) = self.installer.start(Instant::now(), &mut self.rng) {
                    self.report(e);
                }
            }
            PlayAction::CreateCharacter => self.flow.open(),
            PlayAction::Launch => {
                let command = launch_command(self.settings.applied());
                tracing::info!(%command, "launching game");
                self.popup = Some(Popup::Launched(command));
            }
        }
    }

    fn settings_view(&mut self, ui: &mut egui::Ui) {
        ui.heading("Settings");
        ui.label(RichText::new("Configure your game experience").weak());
        ui.add_space(8.0);

        let saving = self.settings.is_saving();
        egui::ScrollArea::vertical().show(ui, |ui| {
            // The pending save commits a snapshot; keep the draft frozen until then.
            ui.add_enabled_ui(!saving, |ui| {
                let draft = &mut self.settings.draft;

                section(ui, "🖥 Performance", |ui| {
                    ui.add(
                        egui::Slider::new(&mut draft.allocated_ram_mb, RAM_RANGE_MB)
                            .step_by(f64::from(RAM_STEP_MB))
                            .suffix(" MB")
                            .text("Allocated RAM"),
                    );
                    ui.add(
                        egui::Slider::new(&mut draft.render_distance, RENDER_DISTANCE_RANGE)
                            .suffix(" chunks")
                            .text("Render distance"),
                    );
                });

                section(ui, "🖵 Display", |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Width");
                        ui.add(egui::DragValue::new(&mut draft.resolution_width).range(1..=7680));
                        ui.label("Height");
                        ui.add(egui::DragValue::new(&mut draft.resolution_height).range(1..=4320));
                    });
                    ui.checkbox(&mut draft.fullscreen, "Fullscreen");
                });

                section(ui, "🔊 Audio", |ui| {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::Slider::new(&mut draft.master_volume, VOLUME_RANGE)
                                .step_by(0.1)
                                .show_value(false)
                                .text("Master volume"),
                        );
                        ui.label(format!("{}%", (draft.master_volume * 100.0).round()));
                    });
                });

                section(ui, "🖴 Advanced", |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Java path");
                        ui.text_edit_singleline(&mut draft.java_path);
                    });
                    ui.label(RichText::new(format!("System: {}", self.system)).small().weak());
                });
            });

            section(ui, "⚠ Danger zone", |ui| {
                ui.label("This removes the client and every associated file.");
                let uninstall = egui::Button::new(RichText::new("🗑 Uninstall").color(Color32::WHITE))
                    .fill(Color32::DARK_RED);
                if ui.add_enabled(self.installer.is_installed(), uninstall).clicked() {
                    self.popup = Some(Popup::ConfirmUninstall);
                }
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let label = if saving { "Saving..." } else { "💾 Save" };
                if ui.add_enabled(!saving, egui::Button::new(label)).clicked() {
                    if let Err(e) = self.settings.begin_save(Instant::now()) {
                        self.report(e);
                    }
                }
                if ui.add_enabled(!saving, egui::Button::new("Reset")).clicked() {
                    self.settings.reset();
                    self.status = "Settings reset to default.".to_string();
                }
            });
        });
    }

    fn popups(&mut self, ctx: &egui::Context) {
        let Some(popup) = self.popup.clone() else {
            return;
        };
        match popup {
            Popup::About => {
                egui::Window::new("About Axis Launcher")
                    .collapsible(false)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.label(format!(
                            "{APP_TITLE} v{}\n\n{BUILD_LABEL}\n\n\
                            This software is provided \"as is\", without warranty of any kind.",
                            env!("CARGO_PKG_VERSION")
                        ));
                        if ui.button("Close").clicked() {
                            self.popup = None;
                        }
                    });
            }
            Popup::ConfirmUninstall => {
                egui::Window::new("Confirm Uninstall")
                    .collapsible(false)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.label("Are you sure you want to uninstall the Axis client?");
                        ui.horizontal(|ui| {
                            if ui.button("Yes").clicked() {
                                self.installer.uninstall();
                                self.status = "Client uninstalled.".to_string();
                                self.popup = None;
                            }
                            if ui.button("No").clicked() {
                                self.popup = None;
                            }
                        });
                    });
            }
            Popup::Launched(command) => {
                egui::Window::new("Launching")
                    .collapsible(false)
                    .resizable(false)
                    .show(ctx, |ui| {
                        ui.label("🎮 Axis is launching!");
                        ui.label(RichText::new(command).monospace().small());
                        if ui.button("Close").clicked() {
                            self.popup = None;
                        }
                    });
            }
        }
    }
}

/// The current view is owned by the caller and handed in.
fn sidebar(ui: &mut egui::Ui, view: &mut View) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        for item in View::ALL {
            let text = RichText::new(format!("{}\n{}", item.glyph(), item.label()));
            let selected = *view == item;
            if ui.selectable_label(selected, text).clicked() && !selected {
                tracing::debug!(from = ?view, to = ?item, "view changed");
                *view = item;
            }
            ui.add_space(4.0);
        }
    });
}

fn section(ui: &mut egui::Ui, title: &str, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().size(16.0));
        ui.add_space(4.0);
        add_contents(ui);
    });
    ui.add_space(6.0);
}

fn server_card(ui: &mut egui::Ui, info: &ServerInfo) {
    let status_color = match info.status {
        ServerStatus::Online => Color32::LIGHT_GREEN,
        ServerStatus::Offline => Color32::LIGHT_RED,
    };
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Server information").strong());
        ui.horizontal(|ui| {
            ui.label(format!("👥 Players online: {}", info.online_players));
            ui.separator();
            ui.label(format!("🕑 Server time: {}", info.server_time));
            ui.separator();
            ui.label(RichText::new(info.status.label()).color(status_color));
        });
    });
}

fn location_card(ui: &mut egui::Ui, card: &LocationCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new(card.caption).small().weak());
        ui.label(RichText::new(card.name).strong().size(18.0));
        ui.label(card.description);
    });
    ui.add_space(6.0);
}

fn news(ui: &mut egui::Ui) {
    ui.columns(2, |cols| {
        let ui = &mut cols[0];
        ui.heading("Latest news");
        for item in NEWS {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(item.title).strong());
                ui.label(item.excerpt);
                ui.label(
                    RichText::new(format!(
                        "📅 {}   👁 {}   💬 {}",
                        item.date, item.views, item.comments
                    ))
                    .small()
                    .weak(),
                );
            });
            ui.add_space(6.0);
        }

        let ui = &mut cols[1];
        ui.heading("Shop");
        for item in SHOP {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(item.name).strong());
                    if item.popular {
                        ui.label(RichText::new("★ Popular").color(Color32::GOLD));
                    }
                });
                ui.label(RichText::new(item.price).color(Color32::LIGHT_GREEN));
                for feature in item.features {
                    ui.label(format!("• {feature}"));
                }
            });
            ui.add_space(6.0);
        }
    });
}

fn map_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.heading("World map");
        ui.label(RichText::new("Feature in development").weak());
    });
}
