use crate::catalog::{ClassIcon, ClassOption, RaceOption};
use crate::character::{CharacterCreationFlow, Stage};
use crate::error::FlowError;
use eframe::egui::{self, Color32, RichText};

enum Action {
    SelectRace(String),
    SelectClass(String),
    Back,
    Confirm,
    Close,
}

pub fn class_glyph(icon: ClassIcon) -> &'static str {
    match icon {
        ClassIcon::Shield => "🛡",
        ClassIcon::Bolt => "⚡",
        ClassIcon::Sword => "⚔",
        ClassIcon::Heart => "❤",
    }
}

/// Draws the wizard window and applies the clicked action, if any.
pub fn show(ctx: &egui::Context, flow: &mut CharacterCreationFlow) -> Result<(), FlowError> {
    if !flow.is_open() {
        return Ok(());
    }

    let current: &CharacterCreationFlow = flow;
    let mut action = None;
    let mut open = true;
    egui::Window::new("Create your character")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .default_width(680.0)
        .open(&mut open)
        .show(ctx, |ui| {
            stage_header(ui, current.stage());
            ui.separator();
            egui::ScrollArea::vertical().max_height(460.0).show(ui, |ui| match current.stage() {
                Stage::Race => race_stage(ui, current, &mut action),
                Stage::Class => class_stage(ui, current, &mut action),
                Stage::Confirm => confirm_stage(ui, current, &mut action),
            });
        });
    if !open {
        action = Some(Action::Close);
    }

    match action {
        None => Ok(()),
        Some(Action::SelectRace(id)) => flow.select_race(&id).map(drop),
        Some(Action::SelectClass(id)) => flow.select_class(&id).map(drop),
        Some(Action::Back) => flow.go_back().map(drop),
        Some(Action::Confirm) => flow.confirm().map(drop),
        Some(Action::Close) => {
            flow.close();
            Ok(())
        }
    }
}

fn stage_header(ui: &mut egui::Ui, current: Stage) {
    ui.horizontal(|ui| {
        for (i, stage) in [Stage::Race, Stage::Class, Stage::Confirm].into_iter().enumerate() {
            if i > 0 {
                ui.label(RichText::new("›").weak());
            }
            let text = RichText::new(format!("{}. {}", stage.number(), stage.label()));
            if stage == current {
                ui.label(text.strong());
            } else {
                ui.label(text.weak());
            }
        }
    });
}

fn race_stage(ui: &mut egui::Ui, flow: &CharacterCreationFlow, action: &mut Option<Action>) {
    ui.heading("Choose your race");
    ui.label("Race determines your innate abilities.");
    egui::Frame::group(ui.style())
        .fill(Color32::from_rgba_unmultiplied(120, 100, 0, 40))
        .show(ui, |ui| {
            ui.label(RichText::new("⚠ Permanent choice").color(Color32::YELLOW));
            ui.label(
                "Race can only be changed by deleting your character. That erases XP, \
                 reputation and skills but keeps your inventory.",
            );
        });
    ui.add_space(6.0);

    let previous = flow.state().selected_race.as_ref().map(|r| r.id.as_str());
    ui.columns(2, |cols| {
        for (i, race) in flow.races().iter().enumerate() {
            if race_card(&mut cols[i % 2], race, previous == Some(race.id.as_str())) {
                *action = Some(Action::SelectRace(race.id.clone()));
            }
        }
    });
}

fn race_card(ui: &mut egui::Ui, race: &RaceOption, previous: bool) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        clicked = ui
            .selectable_label(previous, RichText::new(&race.name).heading())
            .on_hover_text(format!("Portrait: {}", race.image))
            .clicked();
        ui.label(&race.description);
        ui.label(RichText::new("TRAITS").small().weak());
        ui.horizontal_wrapped(|ui| {
            for t in &race.traits {
                ui.label(RichText::new(t).background_color(Color32::from_gray(60)));
            }
        });
        ui.label(RichText::new("BONUSES").small().weak());
        for b in &race.bonuses {
            ui.label(format!("• {b}"));
        }
    });
    clicked
}

fn class_stage(ui: &mut egui::Ui, flow: &CharacterCreationFlow, action: &mut Option<Action>) {
    ui.heading("Choose your class");
    ui.label("Class shapes your starting playstyle and equipment.");

    if let Some(race) = &flow.state().selected_race {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Selected race").weak());
                ui.label(RichText::new(&race.name).strong());
                if ui.link("Change").clicked() {
                    *action = Some(Action::Back);
                }
            });
        });
    }
    ui.label(
        RichText::new(
            "ℹ Class only sets your starting equipment. \
             You can grow your character in any direction afterwards.",
        )
        .color(Color32::LIGHT_BLUE),
    );
    ui.add_space(6.0);

    ui.columns(2, |cols| {
        for (i, class) in flow.classes().iter().enumerate() {
            if class_card(&mut cols[i % 2], class) {
                *action = Some(Action::SelectClass(class.id.clone()));
            }
        }
    });

    ui.add_space(6.0);
    if ui.button("Back").clicked() {
        *action = Some(Action::Back);
    }
}

fn class_card(ui: &mut egui::Ui, class: &ClassOption) -> bool {
    let mut clicked = false;
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        clicked = ui
            .selectable_label(
                false,
                RichText::new(format!("{} {}", class_glyph(class.icon), class.name)).heading(),
            )
            .clicked();
        ui.label(&class.description);
        ui.label(RichText::new("PLAYSTYLE").small().weak());
        ui.label(&class.playstyle);
        ui.label(RichText::new("STARTING EQUIPMENT").small().weak());
        for item in &class.starting_items {
            ui.label(format!("• {item}"));
        }
    });
    clicked
}

fn confirm_stage(ui: &mut egui::Ui, flow: &CharacterCreationFlow, action: &mut Option<Action>) {
    ui.heading("Confirm your character");
    let state = flow.state();
    if let (Some(race), Some(class)) = (&state.selected_race, &state.selected_class) {
        egui::Grid::new("character_summary")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Race").weak());
                ui.label(RichText::new(&race.name).strong());
                ui.end_row();
                ui.label(RichText::new("Class").weak());
                ui.label(RichText::new(format!("{} {}", class_glyph(class.icon), class.name)).strong());
                ui.end_row();
                ui.label(RichText::new("Bonuses").weak());
                ui.label(race.bonuses.join(", "));
                ui.end_row();
                ui.label(RichText::new("Equipment").weak());
                ui.label(class.starting_items.join(", "));
                ui.end_row();
            });
    }
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        if ui.button("Back").clicked() {
            *action = Some(Action::Back);
        }
        if ui.button(RichText::new("Create character").strong()).clicked() {
            *action = Some(Action::Confirm);
        }
    });
}
