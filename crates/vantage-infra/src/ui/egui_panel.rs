// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Draws an [`OverlayPanel`] as a draggable, scrollable `egui` window.

use egui::{Context, Id, Rect, RichText, ScrollArea, Window};
use vantage_telemetry::OverlayPanel;

/// Stable id so the window keeps its dragged position when its title changes.
const WINDOW_ID: &str = "vantage_diagnostics_overlay";

/// Shows `panel` for this frame and returns the window's screen rect.
///
/// The window starts at the panel's configured rect; after that egui remembers
/// where the user dragged it and how far the content was scrolled.
pub fn show_overlay_panel(ctx: &Context, panel: &OverlayPanel) -> Option<Rect> {
    let rect = panel.rect;
    Window::new(panel.title)
        .id(Id::new(WINDOW_ID))
        .default_pos([rect.x, rect.y])
        .default_size([rect.width, rect.height])
        .movable(true)
        .resizable(true)
        .collapsible(false)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                for section in &panel.sections {
                    ui.label(RichText::new(section.title).strong());
                    ui.separator();
                    for line in &section.lines {
                        ui.label(line);
                    }
                    ui.add_space(6.0);
                }
            });
        })
        .map(|response| response.response.rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_telemetry::{PanelSection, WindowRect};

    fn sample_panel() -> OverlayPanel {
        OverlayPanel {
            title: "Diagnostics",
            rect: WindowRect::default(),
            sections: vec![PanelSection {
                title: "Performance",
                lines: vec!["FPS: 60 (16.7 ms)".to_string()],
            }],
        }
    }

    #[test]
    fn test_panel_is_drawn_as_a_window() {
        let ctx = Context::default();
        let panel = sample_panel();
        let mut shown = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            shown = show_overlay_panel(ctx, &panel);
        });
        assert!(shown.is_some());
    }
}
