//! App shell: owns one panel session per feature, drains engine events into
//! core messages each frame, and executes the resulting effects.

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clipworks_core::{update, Feature, Msg, PanelState, PanelViewModel, StatusLevel};
use clipworks_engine::{JobHandle, ToolRunner};

use crate::config::AppConfig;
use crate::effects;
use crate::ui;

const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Transient toast.
pub struct Notice {
    pub level: StatusLevel,
    pub text: String,
    pub created: Instant,
}

struct PanelSession {
    state: PanelState,
    /// Cached snapshot, refreshed only when the state reports dirty.
    view: PanelViewModel,
    handle: JobHandle,
}

impl PanelSession {
    fn new(feature: Feature, tool: PathBuf, output_suffix: &str) -> Self {
        let state = PanelState::new(feature);
        let view = state.view();
        let handle = JobHandle::new(Arc::new(ToolRunner::new(tool, output_suffix)));
        Self {
            state,
            view,
            handle,
        }
    }
}

pub struct ClipworksApp {
    panels: Vec<PanelSession>,
    active: usize,
    notices: Vec<Notice>,
    license_prompt: Option<String>,
}

impl ClipworksApp {
    pub fn new(config: &AppConfig) -> Self {
        let mut app = Self {
            panels: vec![
                PanelSession::new(
                    Feature::FrameInterpolation,
                    config.interpolation_tool.clone(),
                    "interpolated",
                ),
                PanelSession::new(
                    Feature::VideoMatting,
                    config.matting_tool.clone(),
                    "matte",
                ),
            ],
            active: 0,
            notices: Vec::new(),
            license_prompt: None,
        };
        for index in 0..app.panels.len() {
            app.dispatch(
                index,
                Msg::Activated {
                    auto_open_output: config.auto_open_output,
                },
            );
        }
        app
    }

    /// Runs a message (and any follow-up messages its effects produce)
    /// through the pure update function, on the UI thread only.
    fn dispatch(&mut self, index: usize, msg: Msg) {
        let mut queue = VecDeque::new();
        queue.push_back(msg);
        while let Some(msg) = queue.pop_front() {
            let fx = {
                let panel = &mut self.panels[index];
                let (next, fx) = update(panel.state.clone(), msg);
                panel.state = next;
                if panel.state.consume_dirty() {
                    panel.view = panel.state.view();
                }
                fx
            };
            effects::run(
                &self.panels[index].handle,
                fx,
                &mut queue,
                &mut self.notices,
                &mut self.license_prompt,
            );
        }
    }

    fn drain_engine_events(&mut self, index: usize) {
        let mut msgs = Vec::new();
        while let Some(event) = self.panels[index].handle.try_recv() {
            msgs.push(effects::msg_from_event(event));
        }
        for msg in msgs {
            self.dispatch(index, msg);
        }
    }

    fn show_notices(&self, ctx: &egui::Context) {
        if self.notices.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("notices"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .show(ctx, |ui| {
                for notice in &self.notices {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(notice.text.as_str())
                                .color(ui::status_color(notice.level)),
                        );
                    });
                }
            });
    }

    fn show_license_prompt(&mut self, ctx: &egui::Context) {
        let Some(message) = self.license_prompt.clone() else {
            return;
        };
        let mut close = false;
        egui::Window::new("Activation required")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(message);
                ui.label("Open the license manager to activate this feature.");
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        if close {
            self.license_prompt = None;
        }
    }
}

impl eframe::App for ClipworksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for index in 0..self.panels.len() {
            self.drain_engine_events(index);
        }
        self.notices.retain(|n| n.created.elapsed() < NOTICE_TTL);

        egui::TopBottomPanel::top("feature_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for (index, panel) in self.panels.iter().enumerate() {
                    let label = panel.view.feature.label();
                    if ui.selectable_label(self.active == index, label).clicked() {
                        self.active = index;
                    }
                }
            });
        });

        let active = self.active;
        let mut pending = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            pending = ui::panel(ui, &self.panels[active].view);
        });

        self.show_notices(ctx);
        self.show_license_prompt(ctx);

        for msg in pending {
            self.dispatch(active, msg);
        }

        // Keep polling while a job is in flight or toasts need to expire.
        let busy = self.panels.iter().any(|p| !p.view.can_start);
        if busy || !self.notices.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
