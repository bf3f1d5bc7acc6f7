//! Control Panel Widget
//! Left side panel with the state, cuisine and rating filters.

use crate::pipeline::controls::{ControlValues, Cuisine, RatingThreshold};
use egui::{Color32, ComboBox, RichText};

/// Left side control panel with the three dashboard filters.
///
/// Widget positions are read from the dashboard's control values every
/// frame, so the panel never holds its own copy of them.
pub struct ControlPanel {
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    /// Action for a slider move, `None` when it lands on the current threshold.
    fn rating_change(controls: &ControlValues, slider_value: f64) -> ControlPanelAction {
        if RatingThreshold::new(slider_value) == controls.min_rating {
            ControlPanelAction::None
        } else {
            ControlPanelAction::RatingChanged(slider_value)
        }
    }

    /// Draw the control panel
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state_options: &[String],
        controls: &ControlValues,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🍽 Yelp Insights")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Restaurant Dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        ui.label(RichText::new("🔧 Filters").size(14.0).strong());
        ui.add_space(8.0);

        let label_width = 110.0;
        let combo_width = 150.0;

        // State selector
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Select State:"));
            let selected = controls.state.as_deref().unwrap_or("");
            ComboBox::from_id_salt("state_select")
                .width(combo_width)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    for state in state_options {
                        let is_selected = selected == state.as_str();
                        if ui.selectable_label(is_selected, state).clicked() && !is_selected {
                            action = ControlPanelAction::StateChanged(state.clone());
                        }
                    }
                });
        });

        ui.add_space(5.0);

        // Cuisine selector
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Cuisine Type:"));
            ComboBox::from_id_salt("cuisine_select")
                .width(combo_width)
                .selected_text(controls.cuisine.label())
                .show_ui(ui, |ui| {
                    for cuisine in Cuisine::ALL {
                        if ui
                            .selectable_label(controls.cuisine == cuisine, cuisine.label())
                            .clicked()
                            && controls.cuisine != cuisine
                        {
                            action = ControlPanelAction::CuisineChanged(cuisine);
                        }
                    }
                });
        });

        ui.add_space(5.0);

        // Rating slider
        ui.horizontal(|ui| {
            ui.add_sized([label_width, 20.0], egui::Label::new("Minimum Rating:"));
            let mut min_rating = controls.min_rating.value();
            let slider = egui::Slider::new(
                &mut min_rating,
                RatingThreshold::MIN..=RatingThreshold::MAX,
            )
            .step_by(RatingThreshold::STEP)
            .suffix(" ⭐");
            if ui.add(slider).changed() {
                action = Self::rating_change(controls, min_rating);
            }
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    StateChanged(String),
    CuisineChanged(Cuisine),
    RatingChanged(f64),
}
