mod slider_panel;

pub use slider_panel::SliderPanel;
