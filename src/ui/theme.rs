//! Theme system for the gallery
//! Soft pink palette on a light background

use iced::color;
use iced::gradient::Linear;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Degrees, Shadow, Theme, Vector};

// ============================================================================
// Color Palette
// ============================================================================

pub const PINK_50: Color = color!(0xfdf2f8);
pub const PINK_100: Color = color!(0xfce7f3);
pub const PINK_200: Color = color!(0xfbcfe8);
pub const PINK_300: Color = color!(0xf9a8d4);
pub const PINK_400: Color = color!(0xf472b6);
pub const PINK_500: Color = color!(0xec4899);
pub const PINK_600: Color = color!(0xdb2777);
pub const PINK_700: Color = color!(0xbe185d);

pub const ROSE_100: Color = color!(0xffe4e6);

pub const TEXT_DARK: Color = color!(0x374151);
pub const TEXT_MUTED: Color = color!(0x6b7280);

pub const CARD_BG: Color = Color::WHITE;

/// Backdrop behind modals
pub fn overlay_backdrop(opacity: f32) -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, opacity)
}

/// Application theme; the palette above is applied per widget
pub fn app_theme() -> Theme {
    Theme::Light
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background, a diagonal pink wash
pub fn page(_theme: &Theme) -> container::Style {
    let gradient = Linear::new(Degrees(135.0))
        .add_stop(0.0, PINK_100)
        .add_stop(0.5, ROSE_100)
        .add_stop(1.0, PINK_50);
    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: Some(TEXT_DARK),
        ..Default::default()
    }
}

/// Gallery card surface
pub fn card(_theme: &Theme, hover: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(PINK_700),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.12 + 0.13 * hover),
            offset: Vector::new(0.0, 4.0 + 6.0 * hover),
            blur_radius: 12.0 + 14.0 * hover,
        },
        ..Default::default()
    }
}

/// Stand-in for an image that is loading or failed
pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PINK_50)),
        text_color: Some(PINK_400),
        ..Default::default()
    }
}

/// Full-window dimmed backdrop for modals
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(overlay_backdrop(0.75))),
        ..Default::default()
    }
}

/// White dialog panel
pub fn dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Some(TEXT_DARK),
        border: Border {
            radius: 12.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        ..Default::default()
    }
}

/// Now-playing badge; `pulse` in 0.0..=1.0 drives its glow
pub fn now_playing(_theme: &Theme, pulse: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.7 + 0.3 * pulse,
            ..Color::WHITE
        })),
        text_color: Some(PINK_700),
        border: Border {
            radius: 999.0.into(),
            width: 1.0,
            color: PINK_300,
        },
        shadow: Shadow {
            color: Color {
                a: 0.15 + 0.35 * pulse,
                ..PINK_400
            },
            offset: Vector::ZERO,
            blur_radius: 6.0 + 10.0 * pulse,
        },
        ..Default::default()
    }
}

/// Footer strip
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.6,
            ..Color::WHITE
        })),
        text_color: Some(PINK_600),
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Filled pink button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(PINK_500)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.15),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 6.0,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(PINK_600)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(PINK_700)),
            ..base
        },
        _ => base,
    }
}

/// White button with a pink outline
pub fn secondary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: PINK_600,
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: PINK_300,
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(PINK_50)),
            border: Border {
                color: PINK_500,
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// Track row in the song picker; `active` marks the selected track
pub fn track_button(_theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let background = match (status, active) {
        (_, true) => PINK_200,
        (button::Status::Hovered, false) => PINK_100,
        _ => PINK_50,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: PINK_700,
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Thin pink scrollbar for the page
pub fn scrollbar(_theme: &Theme, status: scrollable::Status) -> scrollable::Style {
    let scroller_color = match status {
        scrollable::Status::Dragged { .. } => PINK_500,
        scrollable::Status::Hovered { .. } => PINK_400,
        _ => PINK_300,
    };
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(scroller_color),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(Color::WHITE),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: PINK_500,
        },
    }
}
