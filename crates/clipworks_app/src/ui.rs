//! egui rendering for one feature panel. Pure view code: reads the view
//! model, returns the messages the interactions produced.

use clipworks_core::{JobPhase, Msg, PanelViewModel, Provider, StatusLevel};
use clipworks_engine::file_uri;

pub fn panel(ui: &mut egui::Ui, view: &PanelViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    ui.heading(view.feature.label());
    ui.label(
        egui::RichText::new(view.status.text.as_str()).color(status_color(view.status.level)),
    );
    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Input directory");
        let mut dir = view.input_dir.clone();
        if ui.text_edit_singleline(&mut dir).changed() {
            msgs.push(Msg::InputDirChanged(dir));
        }
    });
    ui.horizontal(|ui| {
        ui.label("Output directory");
        let mut dir = view.output_dir.clone();
        if ui.text_edit_singleline(&mut dir).changed() {
            msgs.push(Msg::OutputDirChanged(dir));
        }
    });

    ui.horizontal(|ui| {
        selector(ui, view, &mut msgs);
    });
    ui.separator();

    let mut live = view.live_preview;
    if ui.checkbox(&mut live, "Live file view").changed() {
        msgs.push(Msg::LivePreviewToggled(live));
    }

    egui::ScrollArea::vertical()
        .id_source((view.feature.label(), "files"))
        .max_height(180.0)
        .show(ui, |ui| {
            for file in &view.input_files {
                let selected = view.selected_file.as_deref() == Some(file.as_path());
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                if ui.selectable_label(selected, name).clicked() {
                    let next = if selected { None } else { Some(file.clone()) };
                    msgs.push(Msg::FileSelected(next));
                }
            }
        });
    if let Some(selected) = &view.selected_file {
        ui.weak(file_uri(selected));
    }
    ui.separator();

    if view.phase != JobPhase::Idle {
        let fraction = view.progress as f32 / view.progress_max as f32;
        ui.add(egui::ProgressBar::new(fraction).show_percentage());
    }

    ui.horizontal(|ui| {
        if ui
            .add_enabled(view.can_start, egui::Button::new("Start"))
            .clicked()
        {
            msgs.push(Msg::StartClicked);
        }
        if ui
            .add_enabled(view.can_stop, egui::Button::new("Stop"))
            .clicked()
        {
            msgs.push(Msg::StopClicked);
        }
        if ui
            .add_enabled(view.can_open_output, egui::Button::new("Open output"))
            .clicked()
        {
            msgs.push(Msg::OpenOutputClicked);
        }
    });

    msgs
}

fn selector(ui: &mut egui::Ui, view: &PanelViewModel, msgs: &mut Vec<Msg>) {
    let mut provider = view.provider;
    egui::ComboBox::from_id_source((view.feature.label(), "provider"))
        .selected_text(provider.label())
        .show_ui(ui, |ui| {
            for choice in Provider::ALL {
                ui.selectable_value(&mut provider, choice, choice.label());
            }
        });
    if provider != view.provider {
        msgs.push(Msg::ProviderSelected(provider));
    }

    let mut mode = view.mode;
    egui::ComboBox::from_id_source((view.feature.label(), "mode"))
        .selected_text(mode.label())
        .show_ui(ui, |ui| {
            for &choice in view.feature.mode_choices() {
                ui.selectable_value(&mut mode, choice, choice.label());
            }
        });
    if mode != view.mode {
        msgs.push(Msg::ModeSelected(mode));
    }

    let mut scale = view.scale;
    egui::ComboBox::from_id_source((view.feature.label(), "scale"))
        .selected_text(scale.label())
        .show_ui(ui, |ui| {
            for &choice in view.feature.scale_choices() {
                ui.selectable_value(&mut scale, choice, choice.label());
            }
        });
    if scale != view.scale {
        msgs.push(Msg::ScaleSelected(scale));
    }
}

pub fn status_color(level: StatusLevel) -> egui::Color32 {
    match level {
        StatusLevel::Info => egui::Color32::LIGHT_GRAY,
        StatusLevel::Warning => egui::Color32::YELLOW,
        StatusLevel::Error => egui::Color32::LIGHT_RED,
    }
}
