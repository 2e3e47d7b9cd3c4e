use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::ui::palette;

pub struct BackgroundStyle;
impl container::StyleSheet for BackgroundStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(palette::BACKGROUND)),
            ..Default::default()
        }
    }
}

pub struct CardStyle;
impl container::StyleSheet for CardStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            border: Border {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.02),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 10.0,
            },
            ..Default::default()
        }
    }
}

pub struct SidebarStyle;
impl container::StyleSheet for SidebarStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(palette::SURFACE)),
            border: Border {
                radius: 12.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Banner shown above the calendar when an operation failed.
pub struct ErrorBannerStyle;
impl container::StyleSheet for ErrorBannerStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.8, 0.4, 0.4, 0.15))),
            text_color: Some(palette::DANGER),
            border: Border {
                color: palette::DANGER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }
    }
}

/// One day cell of the month grid. Padding days render muted; today gets an
/// accent border.
pub struct DayCellStyle {
    pub in_month: bool,
    pub is_today: bool,
}
impl container::StyleSheet for DayCellStyle {
    type Style = Theme;
    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        let background = if self.in_month {
            Color::WHITE
        } else {
            palette::SURFACE
        };
        let border_color = if self.is_today {
            palette::ACCENT
        } else {
            Color::from_rgba(0.0, 0.0, 0.0, 0.08)
        };
        container::Appearance {
            background: Some(Background::Color(background)),
            border: Border {
                color: border_color,
                width: if self.is_today { 2.0 } else { 1.0 },
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
}

pub struct PrimaryButtonStyle;
impl button::StyleSheet for PrimaryButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(palette::ACCENT)),
            text_color: Color::WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(palette::ACCENT_HOVER)),
            text_color: Color::WHITE,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        let mut appearance = self.active(style);
        appearance.background = Some(Background::Color(palette::TEXT_MUTED));
        appearance
    }
}

pub struct SecondaryButtonStyle;
impl button::StyleSheet for SecondaryButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: None,
            text_color: palette::TEXT_MAIN,
            border: Border {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.05))),
            text_color: palette::TEXT_MAIN,
            border: Border {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

pub struct DestructiveButtonStyle;
impl button::StyleSheet for DestructiveButtonStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            text_color: palette::DANGER,
            border: Border {
                color: palette::DANGER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(palette::DANGER)),
            text_color: Color::WHITE,
            border: Border {
                color: palette::DANGER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

/// Event chip in a day cell, tinted by event type. Multi-day events keep
/// square corners on the sides that continue into the neighboring day.
pub struct EventChipStyle {
    pub color: Color,
}
impl button::StyleSheet for EventChipStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color {
                a: 0.25,
                ..self.color
            })),
            text_color: palette::TEXT_MAIN,
            border: Border {
                color: self.color,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color {
                a: 0.45,
                ..self.color
            })),
            text_color: palette::TEXT_MAIN,
            border: Border {
                color: self.color,
                width: 1.0,
                radius: 4.0.into(),
            },
            ..Default::default()
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}

/// Landing screen user card.
pub struct UserCardStyle;
impl button::StyleSheet for UserCardStyle {
    type Style = Theme;
    fn active(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            background: Some(Background::Color(Color::WHITE)),
            text_color: palette::TEXT_MAIN,
            border: Border {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                width: 1.0,
                radius: 12.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 10.0,
            },
            ..Default::default()
        }
    }
    fn hovered(&self, _style: &Self::Style) -> button::Appearance {
        button::Appearance {
            border: Border {
                color: palette::ACCENT,
                width: 1.0,
                radius: 12.0.into(),
            },
            ..self.active(&Theme::Light)
        }
    }
    fn pressed(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
    fn disabled(&self, style: &Self::Style) -> button::Appearance {
        self.active(style)
    }
}
