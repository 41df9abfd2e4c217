//! Interactive desktop app: feeds real pointer events into the field and
//! paints speck trails with egui.

use eframe::egui;
use glam::Vec2;

use crate::config::FieldConfig;
use crate::surface::Surface;
use crate::system::SpeckField;

/// [`Surface`] adapter over an egui painter. Paths are collected in surface
/// coordinates and stroked as segments offset to the canvas origin.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    path: Vec<egui::Pos2>,
}

impl<'a> PainterSurface<'a> {
    fn new(painter: &'a egui::Painter, rect: egui::Rect) -> Self {
        Self {
            painter,
            rect,
            path: Vec::new(),
        }
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, egui::Color32::BLACK);
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path
            .push(egui::Pos2::new(self.rect.left() + x, self.rect.top() + y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path
            .push(egui::Pos2::new(self.rect.left() + x, self.rect.top() + y));
    }

    fn stroke(&mut self, width: f32, color: [u8; 3]) {
        let stroke = egui::Stroke::new(
            width,
            egui::Color32::from_rgb(color[0], color[1], color[2]),
        );
        for pair in self.path.windows(2) {
            self.painter.line_segment([pair[0], pair[1]], stroke);
        }
    }
}

pub struct SpeckApp {
    config: FieldConfig,
    field: Option<SpeckField>,
    paused: bool,
    frame_count: usize,
}

impl SpeckApp {
    /// The field itself is built lazily on the first frame, once the canvas
    /// size is known.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            config,
            field: None,
            paused: false,
            frame_count: 0,
        }
    }

    /// Build or rebuild the field to match the canvas. A failed rebuild
    /// (degenerate canvas mid-layout) leaves the previous field in place.
    fn sync_field(&mut self, width: f32, height: f32) {
        match &mut self.field {
            None => {
                self.field = SpeckField::new(self.config, width, height).ok();
            }
            Some(field) => {
                let drift = (field.width - width).abs().max((field.height - height).abs());
                if drift > 1.0 {
                    let _ = field.resize(width, height);
                }
            }
        }
    }
}

impl eframe::App for SpeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("speckflow");

            ui.horizontal(|ui| {
                if ui.button("Pause/Resume").clicked() {
                    self.paused = !self.paused;
                }

                if ui.button("Restart").clicked() {
                    self.field = None;
                    self.frame_count = 0;
                }

                if let Some(field) = &self.field {
                    ui.label(format!(
                        "Frame: {} | {} specks | {}x{} cells",
                        self.frame_count,
                        field.particles.len(),
                        field.lattice.num_cols,
                        field.lattice.num_rows,
                    ));
                }
            });

            ui.separator();

            let size = ui.available_size();
            let (rect, response) =
                ui.allocate_exact_size(size, egui::Sense::click_and_drag());

            self.sync_field(rect.width(), rect.height());
            let Some(field) = &mut self.field else {
                return;
            };

            // Pointer events only ever touch the pointer sample; the tick
            // below is the sole reader.
            if let Some(pos) = response.hover_pos().or(response.interact_pointer_pos()) {
                field
                    .pointer
                    .move_to(Vec2::new(pos.x - rect.left(), pos.y - rect.top()));
            }
            field.pointer.set_down(response.is_pointer_button_down_on());

            let painter = ui.painter_at(rect);
            let mut surface = PainterSurface::new(&painter, rect);

            if self.paused {
                // Repaint the specks in place without advancing the field.
                surface.clear();
                for p in &field.particles {
                    surface.begin_path();
                    surface.move_to(p.pos.x, p.pos.y);
                    surface.line_to(p.pos.x + 1.0, p.pos.y + 1.0);
                    surface.stroke(1.0, p.color);
                }
            } else {
                field.tick(&mut surface);
                self.frame_count += 1;
            }
        });

        ctx.request_repaint();
    }
}
