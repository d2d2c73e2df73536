use crate::core::SliderStack;

/// egui window with one slider per `SliderStack` entry and an FPS readout
pub struct SliderPanel {
    title: String,
}

impl SliderPanel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Draw the panel and forward user edits to `stack`.
    ///
    /// Returns how many sliders actually changed value this frame.
    pub fn show(&self, ctx: &egui::Context, stack: &mut SliderStack, fps: f32) -> usize {
        let mut edits = 0;

        egui::Window::new(self.title.as_str())
            .title_bar(true)
            .resizable(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(260.0)
            .show(ctx, |ui| {
                ui.heading(
                    egui::RichText::new(format!("{:.0} FPS", fps))
                        .size(24.0)
                        .color(egui::Color32::from_rgb(74, 158, 255)),
                );

                let frame_time_ms = if fps > 0.0 { 1000.0 / fps } else { 0.0 };
                ui.label(
                    egui::RichText::new(format!("{:.2} ms", frame_time_ms))
                        .size(14.0)
                        .color(egui::Color32::GRAY),
                );

                ui.add_space(5.0);
                ui.separator();
                ui.add_space(5.0);

                for index in 0..stack.len() {
                    let Some(slider) = stack.slider(index) else {
                        continue;
                    };
                    let name = slider.name().to_string();
                    let range = slider.range();
                    let step = slider.step() as f64;
                    let mut value = slider.value();

                    let response = ui.add(
                        egui::Slider::new(&mut value, range)
                            .step_by(step)
                            .text(name.as_str()),
                    );
                    if response.changed() && stack.set_value(index, value) {
                        edits += 1;
                    }
                }
            });

        edits
    }
}

impl Default for SliderPanel {
    fn default() -> Self {
        Self::new("Depth of Field")
    }
}
