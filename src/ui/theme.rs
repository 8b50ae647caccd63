//! Colours and per-role widget styles for the main window.

use egui::{Color32, Context, RichText, Stroke, Visuals};

pub const SKY_950: Color32 = Color32::from_rgb(0x08, 0x2f, 0x49);
pub const SKY_900: Color32 = Color32::from_rgb(0x0c, 0x4a, 0x6e);
pub const SKY_100: Color32 = Color32::from_rgb(0xe0, 0xf2, 0xfe);
pub const SKY_50: Color32 = Color32::from_rgb(0xf0, 0xf9, 0xff);
pub const SLATE_700: Color32 = Color32::from_rgb(0x33, 0x41, 0x55);
pub const SLATE_950: Color32 = Color32::from_rgb(0x02, 0x06, 0x17);
pub const SLATE_50: Color32 = Color32::from_rgb(0xf8, 0xfa, 0xfc);
pub const GRAY_100: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);

/// What a widget is for; each role resolves to one style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    Title,
    Description,
    ImportButton,
    ImportButtonSelected,
    TextInput,
    DateInput,
    PrimaryButton,
    DropTarget,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleStyle {
    pub text: Color32,
    pub fill: Color32,
    pub stroke: Stroke,
    pub font_size: f32,
}

pub fn style_for(role: WidgetRole) -> RoleStyle {
    match role {
        WidgetRole::Title => RoleStyle {
            text: SKY_950,
            fill: Color32::TRANSPARENT,
            stroke: Stroke::NONE,
            font_size: 28.0,
        },
        WidgetRole::Description => RoleStyle {
            text: SLATE_700,
            fill: Color32::TRANSPARENT,
            stroke: Stroke::NONE,
            font_size: 15.0,
        },
        WidgetRole::ImportButton => RoleStyle {
            text: SKY_900,
            fill: SKY_50,
            stroke: Stroke::new(1.5, SKY_900),
            font_size: 16.0,
        },
        WidgetRole::ImportButtonSelected => RoleStyle {
            text: SKY_950,
            fill: SKY_100,
            stroke: Stroke::new(1.5, SKY_950),
            font_size: 13.0,
        },
        WidgetRole::TextInput | WidgetRole::DateInput => RoleStyle {
            text: SLATE_950,
            fill: Color32::WHITE,
            stroke: Stroke::new(1.0, SLATE_700),
            font_size: 14.0,
        },
        WidgetRole::PrimaryButton => RoleStyle {
            text: Color32::WHITE,
            fill: SKY_900,
            stroke: Stroke::NONE,
            font_size: 14.0,
        },
        WidgetRole::DropTarget => RoleStyle {
            text: SKY_900,
            fill: SKY_100,
            stroke: Stroke::new(2.0, SKY_900),
            font_size: 14.0,
        },
    }
}

/// Text styled for `role`
pub fn text(role: WidgetRole, text: impl Into<String>) -> RichText {
    let style = style_for(role);
    RichText::new(text).size(style.font_size).color(style.text)
}

/// Button styled for `role`
pub fn button(role: WidgetRole, label: impl Into<String>) -> egui::Button<'static> {
    let style = style_for(role);
    egui::Button::new(text(role, label))
        .fill(style.fill)
        .stroke(style.stroke)
}

/// Visuals for an input widget with `role`, derived from the surrounding `base`
pub fn input_visuals(role: WidgetRole, base: &Visuals) -> Visuals {
    let style = style_for(role);
    let mut visuals = base.clone();
    visuals.override_text_color = Some(style.text);
    visuals.extreme_bg_color = style.fill;
    for widget in [&mut visuals.widgets.inactive, &mut visuals.widgets.hovered] {
        widget.bg_fill = style.fill;
        widget.weak_bg_fill = style.fill;
        widget.bg_stroke = style.stroke;
    }
    visuals.widgets.active.bg_stroke = Stroke::new(style.stroke.width, SKY_900);
    visuals
}

/// Install the light window theme
pub fn apply(ctx: &Context) {
    let mut visuals = Visuals::light();
    visuals.panel_fill = SLATE_50;
    visuals.window_fill = SLATE_50;
    visuals.extreme_bg_color = Color32::WHITE;
    visuals.faint_bg_color = GRAY_100;
    visuals.selection.bg_fill = SKY_100;
    visuals.selection.stroke = Stroke::new(1.0, SKY_900);
    ctx.set_visuals(visuals);
}
