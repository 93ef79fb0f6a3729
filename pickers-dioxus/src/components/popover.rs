//! Anchored floating panel primitive.
//!
//! Given an anchor rectangle and an open flag, renders its children in a
//! paper positioned below the anchor, with a backdrop that reports
//! outside clicks as dismissal requests. The panel never decides to
//! close on its own.

use dioxus::prelude::*;

use crate::state::AnchorRect;

/// Horizontal alignment of the paper against its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelAlign {
    /// Paper centered under the anchor.
    #[default]
    Center,
    /// Paper's right edge flush with the anchor's right edge.
    Right,
}

/// Alignment the wrapper computes from keyboard mode.
///
/// Keyboard entry right-aligns the paper: the user's focus sits in the
/// text, so the field's right edge is the natural alignment point.
#[must_use]
pub fn align_for_keyboard(keyboard: Option<bool>) -> PanelAlign {
    if keyboard.unwrap_or(false) {
        PanelAlign::Right
    } else {
        PanelAlign::Center
    }
}

/// Size constraints for the popover paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperConstraints {
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Maximum width in pixels.
    pub max_width: Option<u32>,
    /// Bottom padding in pixels.
    pub padding_bottom: Option<u32>,
}

impl Default for PaperConstraints {
    fn default() -> Self {
        Self {
            min_width: Some(290),
            max_width: Some(310),
            padding_bottom: Some(8),
        }
    }
}

impl PaperConstraints {
    /// Generate the CSS style fragment for the constraints.
    fn to_style(self) -> String {
        let mut parts = Vec::new();
        if let Some(min_w) = self.min_width {
            parts.push(format!("min-width: {min_w}px"));
        }
        if let Some(max_w) = self.max_width {
            parts.push(format!("max-width: {max_w}px"));
        }
        if let Some(pad) = self.padding_bottom {
            parts.push(format!("padding-bottom: {pad}px"));
        }
        parts.join("; ")
    }
}

/// Caller overrides merged over the computed popover configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopoverOverrides {
    /// Override the computed alignment.
    pub align: Option<PanelAlign>,
    /// Override the paper size constraints.
    pub constraints: Option<PaperConstraints>,
    /// Extra CSS class for the paper.
    pub class: Option<String>,
    /// Vertical gap between the anchor and the paper, in pixels.
    pub gap: Option<f64>,
}

/// Resolved popover presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct PopoverConfig {
    pub align: PanelAlign,
    pub constraints: PaperConstraints,
    pub class: Option<String>,
    pub gap: f64,
}

impl PopoverConfig {
    /// Defaults the wrapper computes for the given alignment.
    #[must_use]
    pub fn computed(align: PanelAlign) -> Self {
        Self {
            align,
            constraints: PaperConstraints::default(),
            class: None,
            gap: 0.0,
        }
    }

    /// Merge caller overrides; caller values win over computed defaults.
    #[must_use]
    pub fn merge(self, overrides: &PopoverOverrides) -> Self {
        Self {
            align: overrides.align.unwrap_or(self.align),
            constraints: overrides.constraints.unwrap_or(self.constraints),
            class: overrides.class.clone().or(self.class),
            gap: overrides.gap.unwrap_or(self.gap),
        }
    }
}

/// Calculate the paper position for an anchor.
///
/// Returns `(top, left, transform)`. The transform shifts the paper so
/// the requested edge lines up with `left`, since the paper width is
/// unknown until layout.
fn paper_position(anchor: AnchorRect, align: PanelAlign, gap: f64) -> (f64, f64, &'static str) {
    let top = anchor.bottom() + gap;
    match align {
        PanelAlign::Center => (top, anchor.center_x(), "translateX(-50%)"),
        PanelAlign::Right => (top, anchor.right(), "translateX(-100%)"),
    }
}

/// Floating panel anchored below a reference element.
///
/// Renders nothing while closed. Backdrop clicks are reported through
/// `on_close` as dismissal requests; clicks inside the paper are stopped
/// from reaching the backdrop.
#[component]
pub fn Popover(
    /// Whether the panel is visible.
    open: bool,
    /// Anchor the paper positions against.
    anchor: Option<AnchorRect>,
    /// Dismissal handler (outside click).
    on_close: EventHandler,
    /// Computed alignment against the anchor.
    #[props(default)]
    align: PanelAlign,
    /// Caller overrides, merged last.
    #[props(default)]
    overrides: PopoverOverrides,
    /// Panel content.
    children: Element,
) -> Element {
    let Some(anchor) = anchor.filter(|_| open) else {
        return rsx! {};
    };

    let config = PopoverConfig::computed(align).merge(&overrides);
    let (top, left, transform) = paper_position(anchor, config.align, config.gap);
    let constraint_style = config.constraints.to_style();
    let extra_class = config.class.as_deref().unwrap_or_default();

    rsx! {
        div {
            class: "popover-backdrop",
            onmousedown: move |_| on_close.call(()),
        }
        div {
            id: "picker-popover",
            class: "popover-paper {extra_class}",
            style: "top: {top}px; left: {left}px; transform: {transform}; {constraint_style}",
            onmousedown: move |evt: MouseEvent| evt.stop_propagation(),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> AnchorRect {
        AnchorRect {
            x: 100.0,
            y: 40.0,
            width: 200.0,
            height: 32.0,
        }
    }

    #[test]
    fn centered_paper_hangs_from_anchor_midpoint() {
        let (top, left, transform) = paper_position(anchor(), PanelAlign::Center, 0.0);
        assert!((top - 72.0).abs() < f64::EPSILON);
        assert!((left - 200.0).abs() < f64::EPSILON);
        assert_eq!(transform, "translateX(-50%)");
    }

    #[test]
    fn right_aligned_paper_hangs_from_anchor_right_edge() {
        let (top, left, transform) = paper_position(anchor(), PanelAlign::Right, 0.0);
        assert!((top - 72.0).abs() < f64::EPSILON);
        assert!((left - 300.0).abs() < f64::EPSILON);
        assert_eq!(transform, "translateX(-100%)");
    }

    #[test]
    fn gap_offsets_the_paper_top() {
        let (top, _, _) = paper_position(anchor(), PanelAlign::Center, 4.0);
        assert!((top - 76.0).abs() < f64::EPSILON);
    }

    #[test]
    fn keyboard_mode_right_aligns() {
        assert_eq!(align_for_keyboard(Some(true)), PanelAlign::Right);
        assert_eq!(align_for_keyboard(Some(false)), PanelAlign::Center);
        assert_eq!(align_for_keyboard(None), PanelAlign::Center);
    }

    #[test]
    fn default_constraints_match_paper_styles() {
        let style = PaperConstraints::default().to_style();
        assert!(style.contains("min-width: 290px"));
        assert!(style.contains("max-width: 310px"));
        assert!(style.contains("padding-bottom: 8px"));
    }

    #[test]
    fn constraints_without_limits_are_empty() {
        let constraints = PaperConstraints {
            min_width: None,
            max_width: None,
            padding_bottom: None,
        };
        assert!(constraints.to_style().is_empty());
    }

    #[test]
    fn overrides_win_over_computed_defaults() {
        let overrides = PopoverOverrides {
            align: Some(PanelAlign::Right),
            constraints: Some(PaperConstraints {
                min_width: None,
                max_width: Some(400),
                padding_bottom: None,
            }),
            class: Some("custom-paper".to_string()),
            gap: Some(6.0),
        };
        let config = PopoverConfig::computed(PanelAlign::Center).merge(&overrides);
        assert_eq!(config.align, PanelAlign::Right);
        assert_eq!(config.constraints.max_width, Some(400));
        assert_eq!(config.class.as_deref(), Some("custom-paper"));
        assert!((config.gap - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_overrides_keep_computed_defaults() {
        let config = PopoverConfig::computed(PanelAlign::Right).merge(&PopoverOverrides::default());
        assert_eq!(config, PopoverConfig::computed(PanelAlign::Right));
    }
}
