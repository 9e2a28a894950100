//! Built-in theme definitions

use ratatui::style::Color;

use super::Theme;

/// Uses the terminal's own palette
pub fn terminal() -> Theme {
    Theme {
        name: "terminal".to_string(),
        display_name: "Terminal".to_string(),
        bg_color: Color::Reset,
        border_color: Color::DarkGray,
        title_color: Color::Reset,
        accent_color: Color::Cyan,
        text_color: Color::Reset,
        dim_color: Color::DarkGray,
        success_color: Color::Green,
        warning_color: Color::Yellow,
        status_bar_bg_color: Color::Reset,
        highlight_bg_color: Color::DarkGray,
    }
}

/// Default: warm kitchen tones
pub fn mealplan() -> Theme {
    Theme {
        name: "mealplan".to_string(),
        display_name: "Meal Planner".to_string(),
        bg_color: Color::Rgb(28, 25, 23),
        border_color: Color::Rgb(87, 83, 78),
        title_color: Color::Rgb(251, 146, 60),
        accent_color: Color::Rgb(249, 115, 22),
        text_color: Color::Rgb(231, 229, 228),
        dim_color: Color::Rgb(120, 113, 108),
        success_color: Color::Rgb(132, 204, 22),
        warning_color: Color::Rgb(250, 204, 21),
        status_bar_bg_color: Color::Rgb(41, 37, 36),
        highlight_bg_color: Color::Rgb(68, 64, 60),
    }
}

pub fn nord() -> Theme {
    Theme {
        name: "nord".to_string(),
        display_name: "Nord".to_string(),
        bg_color: Color::Rgb(46, 52, 64),
        border_color: Color::Rgb(76, 86, 106),
        title_color: Color::Rgb(136, 192, 208),
        accent_color: Color::Rgb(129, 161, 193),
        text_color: Color::Rgb(236, 239, 244),
        dim_color: Color::Rgb(97, 110, 136),
        success_color: Color::Rgb(163, 190, 140),
        warning_color: Color::Rgb(235, 203, 139),
        status_bar_bg_color: Color::Rgb(59, 66, 82),
        highlight_bg_color: Color::Rgb(67, 76, 94),
    }
}

pub fn gruvbox_dark() -> Theme {
    Theme {
        name: "gruvbox_dark".to_string(),
        display_name: "Gruvbox Dark".to_string(),
        bg_color: Color::Rgb(40, 40, 40),
        border_color: Color::Rgb(102, 92, 84),
        title_color: Color::Rgb(250, 189, 47),
        accent_color: Color::Rgb(254, 128, 25),
        text_color: Color::Rgb(235, 219, 178),
        dim_color: Color::Rgb(146, 131, 116),
        success_color: Color::Rgb(184, 187, 38),
        warning_color: Color::Rgb(250, 189, 47),
        status_bar_bg_color: Color::Rgb(60, 56, 54),
        highlight_bg_color: Color::Rgb(80, 73, 69),
    }
}

pub fn catppuccin_mocha() -> Theme {
    Theme {
        name: "catppuccin_mocha".to_string(),
        display_name: "Catppuccin Mocha".to_string(),
        bg_color: Color::Rgb(30, 30, 46),
        border_color: Color::Rgb(88, 91, 112),
        title_color: Color::Rgb(203, 166, 247),
        accent_color: Color::Rgb(250, 179, 135),
        text_color: Color::Rgb(205, 214, 244),
        dim_color: Color::Rgb(108, 112, 134),
        success_color: Color::Rgb(166, 227, 161),
        warning_color: Color::Rgb(249, 226, 175),
        status_bar_bg_color: Color::Rgb(24, 24, 37),
        highlight_bg_color: Color::Rgb(49, 50, 68),
    }
}
