use eframe::egui::{self, Color32, Context, Key, Modifiers, RichText, Sense};
use rfd::FileDialog;

use crate::chart;
use crate::dataset::Dataset;
use crate::image_io;
use crate::picker::{self, Pick, PickResult};

pub struct ColorApp {
    pub dataset: Dataset,
    pub dataset_label: String,
    pub page: Page,
    // detector state
    pub img: Option<image::RgbaImage>,
    pub tex: Option<egui::TextureHandle>,
    pub scale: f32,
    pub last_pick: Option<Pick>,
    pub status: String,
}

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Detector,
    PieChart,
}

impl ColorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Dataset) -> Self {
        setup_theme(&cc.egui_ctx);
        Self {
            dataset,
            dataset_label: "built-in".into(),
            page: Page::Detector,
            img: None,
            tex: None,
            scale: 1.0,
            last_pick: None,
            status: "Open an image and click a pixel.".into(),
        }
    }

    pub fn ui_menu(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        ui.menu_button("File", |ui| {
            if ui.button("Open Image...").clicked() {
                ui.close_menu();
                self.action_open_image();
            }
            if ui.button("Open Palette CSV...").clicked() {
                ui.close_menu();
                self.action_open_dataset();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.close_menu();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
        ui.separator();
        ui.label(RichText::new(&self.status).color(Color32::LIGHT_GRAY));
    }

    fn action_open_image(&mut self) {
        if let Some(path) = FileDialog::new().add_filter("Image", &["png", "jpg", "jpeg"]).pick_file() {
            match image_io::load_rgba(&path) {
                Ok(img) => {
                    log::info!("loaded image {} ({}x{})", path.display(), img.width(), img.height());
                    self.status = format!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
                    self.img = Some(img);
                    self.tex = None;
                    self.last_pick = None;
                }
                Err(e) => {
                    log::warn!("image load failed: {e}");
                    self.status = format!("Could not read the image: {e}");
                }
            }
        }
    }

    fn action_open_dataset(&mut self) {
        if let Some(path) = FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
            match Dataset::from_path(&path) {
                Ok(ds) => {
                    log::info!("loaded palette {} ({} colors)", path.display(), ds.len());
                    self.status = format!("Loaded palette: {} colors", ds.len());
                    self.dataset = ds;
                    self.dataset_label = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("palette")
                        .to_string();
                    self.last_pick = None;
                }
                // keep the previous dataset, matching stays usable
                Err(e) => {
                    log::warn!("palette load failed: {e}");
                    self.status = format!("Bad palette CSV: {e}");
                }
            }
        }
    }

    fn ui_detector_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Detected Color");
        if let Some(pick) = &self.last_pick {
            ui.label(RichText::new(&pick.name).strong().size(18.0));
            ui.label(format!("RGB: ({}, {}, {})", pick.rgb[0], pick.rgb[1], pick.rgb[2]));
            ui.label(format!("HEX: {}", pick.hex));
            let (rect, _) = ui.allocate_exact_size(egui::vec2(80.0, 40.0), Sense::hover());
            ui.painter()
                .rect_filled(rect, 7.0, Color32::from_rgb(pick.rgb[0], pick.rgb[1], pick.rgb[2]));
        } else {
            ui.label("Click on the image to detect color.");
        }
        ui.separator();
        ui.label("Zoom");
        ui.add(egui::Slider::new(&mut self.scale, 1.0..=8.0));
    }

    fn ui_detector_canvas(&mut self, ui: &mut egui::Ui, ctx: &Context) {
        // build the texture once per loaded image
        if self.tex.is_none() {
            if let Some(img) = &self.img {
                let size = [img.width() as usize, img.height() as usize];
                let ci = egui::ColorImage::from_rgba_unmultiplied(size, img.as_raw());
                self.tex = Some(ctx.load_texture("photo", ci, egui::TextureOptions::NEAREST));
            }
        }

        let mut clicked: Option<(i32, i32)> = None;
        if let Some(tex) = &self.tex {
            egui::ScrollArea::both().show(ui, |ui| {
                let size = tex.size_vec2() * self.scale;
                let (rect, response) = ui.allocate_exact_size(size, Sense::click());
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                ui.painter().image(tex.id(), rect, uv, Color32::WHITE);
                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let local = (pos - rect.min) / self.scale;
                        clicked = Some((local.x.floor() as i32, local.y.floor() as i32));
                    }
                }
            });
        } else {
            ui.centered_and_justified(|ui| {
                ui.label("Open an image to begin (File > Open Image...)");
            });
        }

        // resolve the click after the canvas borrow ends
        if let Some((x, y)) = clicked {
            if let Some(img) = &self.img {
                match picker::on_click(img, self.dataset.entries(), x, y) {
                    PickResult::Matched(pick) => {
                        self.status = format!("({}, {}) -> {}", x, y, pick.name);
                        self.last_pick = Some(pick);
                    }
                    PickResult::OutOfBounds => {
                        log::warn!("click at ({x}, {y}) is outside image bounds");
                        self.status = "Click is outside image bounds.".into();
                    }
                    PickResult::NoPalette => {
                        log::warn!("no palette entries to match against");
                        self.status = "Color palette is empty.".into();
                    }
                }
            }
        }
    }

    fn ui_pie_chart(&self, ui: &mut egui::Ui) {
        ui.heading("Pie Chart of All Colors");
        let slices = chart::layout(self.dataset.entries());
        let side = ui
            .available_width()
            .min(ui.available_height() * 0.6)
            .clamp(120.0, 480.0);
        let (rect, _) = ui.allocate_exact_size(egui::vec2(side, side), Sense::hover());
        let center = rect.center();
        let radius = side * 0.5 - 4.0;
        if slices.len() == 1 {
            // a single entry is a full disc, not a convex wedge
            ui.painter().circle_filled(center, radius, slices[0].color);
        } else {
            for s in &slices {
                ui.painter().add(egui::Shape::convex_polygon(
                    chart::wedge_points(center, radius, s.start, s.end),
                    s.color,
                    egui::Stroke::new(1.0, Color32::WHITE),
                ));
            }
        }
        ui.separator();
        ui.label(RichText::new("Legend").strong());
        egui::ScrollArea::vertical().show(ui, |ui| {
            for s in &slices {
                ui.horizontal(|ui| {
                    let (r, _) = ui.allocate_exact_size(egui::vec2(30.0, 20.0), Sense::hover());
                    ui.painter().rect_filled(r, 4.0, s.color);
                    ui.label(&s.label);
                });
            }
        });
    }
}

fn setup_theme(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::dark());
}

impl eframe::App for ColorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                self.ui_menu(ui, ctx);
            });
        });

        egui::SidePanel::left("left").resizable(true).default_width(260.0).show(ctx, |ui| {
            ui.heading("Pages");
            if ui.selectable_label(self.page == Page::Detector, "Color Detector").clicked() {
                self.page = Page::Detector;
            }
            if ui.selectable_label(self.page == Page::PieChart, "Color Pie Chart").clicked() {
                self.page = Page::PieChart;
            }
            ui.separator();
            ui.label(format!("Palette: {} ({} colors)", self.dataset_label, self.dataset.len()));
            ui.separator();
            if self.page == Page::Detector {
                self.ui_detector_panel(ui);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Detector => self.ui_detector_canvas(ui, ctx),
            Page::PieChart => self.ui_pie_chart(ui),
        });

        if ctx.input(|i| i.modifiers == Modifiers::CTRL && i.key_pressed(Key::O)) {
            self.action_open_image();
        }
        if ctx.input(|i| i.modifiers == Modifiers::CTRL && i.key_pressed(Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
