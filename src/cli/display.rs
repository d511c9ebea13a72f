// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the seqcheck CLI.
//!
//! Colored mismatch diagnostics and summary boxes that respect your color
//! scheme: OneDark for dark terminals, One Light for light ones. Colors switch
//! off for `NO_COLOR` and whenever output is not a TTY, so redirected
//! diagnostics stay plain text and diff cleanly.
//!
//! # Theme detection order
//!
//! 1. `SEQCHECK_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

// Box drawing width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();
static COLORS: OnceLock<bool> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SEQCHECK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; background 7+ (except 8, dark gray) is light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

/// Theme in effect for this process, detected once.
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

type Rgb = (u8, u8, u8);

/// True-color triples for one theme.
struct Palette {
    red: Rgb,
    green: Rgb,
    yellow: Rgb,
    cyan: Rgb,
    gray: Rgb,
    bright_red: Rgb,
}

const ONE_DARK: Palette = Palette {
    red: (224, 108, 117),
    green: (152, 195, 121),
    yellow: (229, 192, 123),
    cyan: (86, 182, 194),
    gray: (92, 99, 112),
    bright_red: (240, 113, 120),
};

const ONE_LIGHT: Palette = Palette {
    red: (228, 86, 73),
    green: (80, 161, 79),
    yellow: (193, 132, 1),
    cyan: (1, 132, 188),
    gray: (160, 161, 167),
    bright_red: (202, 18, 67),
};

fn palette() -> &'static Palette {
    match theme() {
        Theme::Dark => &ONE_DARK,
        Theme::Light => &ONE_LIGHT,
    }
}

fn foreground((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

macro_rules! theme_color {
    ($name:ident, $field:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            foreground(palette().$field)
        }
    };
}

theme_color!(RED, red);
theme_color!(GREEN, green);
theme_color!(YELLOW, yellow);
theme_color!(CYAN, cyan);
theme_color!(GRAY, gray);
theme_color!(BRIGHT_RED, bright_red);

/// Colors only when both output streams are terminals and NO_COLOR is unset.
pub fn use_colors() -> bool {
    *COLORS.get_or_init(|| {
        std::env::var("NO_COLOR").is_err()
            && atty::is(atty::Stream::Stdout)
            && atty::is(atty::Stream::Stderr)
    })
}

/// Wrap `text` in `color` plus `modifiers`, or return it bare when colors are off.
pub fn themed(color: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let mut out = modifiers.concat();
    out.push_str(&color());
    out.push_str(text);
    out.push_str(RESET);
    out
}

/// Printed width of `s`. SGR sequences (`ESC ... m`) take no columns.
pub fn visible_len(s: &str) -> usize {
    s.split('\x1b')
        .enumerate()
        .map(|(i, chunk)| match (i, chunk.find('m')) {
            (0, _) => chunk.chars().count(),
            (_, Some(end)) => chunk[end + 1..].chars().count(),
            (_, None) => 0,
        })
        .sum()
}

/// Pad `s` with spaces up to `width` printed columns. Longer input is left alone.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(fill))
}

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    )
}

/// │ content          │
pub fn row(content: &str) -> String {
    format!(
        "{}{}{}",
        border("│"),
        pad_right(content, BOX_WIDTH),
        border("│")
    )
}

/// Two-column row: label in gray, value as given.
pub fn field(label: &str, value: &str) -> String {
    row(&format!(" {} {}", pad_right(&themed(GRAY, &[], label), 12), value))
}

/// └──────────────────┘
pub fn section_bot() -> String {
    border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

/// Mismatch count: green when zero, red otherwise
pub fn mismatch_count(count: usize) -> String {
    if count == 0 {
        themed(GREEN, &[BOLD], "0")
    } else {
        themed(RED, &[BOLD], &count.to_string())
    }
}

/// Pass/fail verdict word
pub fn verdict(ok: bool, pass: &str, fail: &str) -> String {
    if ok {
        themed(GREEN, &[BOLD], pass)
    } else {
        themed(BRIGHT_RED, &[BOLD], fail)
    }
}

/// Header line of a mismatch diagnostic
pub fn mismatch_header(line: usize, operation: &str) -> String {
    format!(
        "{} <{}>: {}",
        themed(BRIGHT_RED, &[BOLD], "MISMATCH"),
        themed(YELLOW, &[], &format!("{:>9}", line)),
        operation
    )
}
