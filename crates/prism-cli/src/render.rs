//! Text rendering.
//!
//! Views are rendered with minijinja templates. Templates style their output
//! through named styles, `{{ name | style("name") }}`, which become ANSI
//! escapes only when the output mode calls for color:
//!
//! | style     | used for                     |
//! |-----------|------------------------------|
//! | `header`  | palette set titles           |
//! | `section` | section and family headings  |
//! | `name`    | property names               |
//! | `value`   | raw values                   |
//! | `muted`   | steps, resolved values, hints|
//! | `active`  | the active theme             |
//! | `ok`      | success notifications        |
//! | `warn`    | soft failures                |
//! | `error`   | the load-failure banner      |

use std::collections::BTreeMap;

use console::{pad_str, Alignment, Color, Style};
use minijinja::{Environment, Error, Value};
use serde::Serialize;

use crate::output::OutputMode;
use crate::templates;

/// Named styles available to the `style` filter.
pub fn default_styles() -> BTreeMap<&'static str, Style> {
    BTreeMap::from([
        ("header", Style::new().bold().cyan()),
        ("section", Style::new().bold()),
        ("name", Style::new().magenta()),
        ("value", Style::new().green()),
        ("muted", Style::new().dim()),
        ("active", Style::new().bold().green()),
        ("ok", Style::new().green()),
        ("warn", Style::new().yellow()),
        ("error", Style::new().bold().red()),
    ])
}

/// Template environment bound to one output mode.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Result<Self, Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_filters(&mut env, mode.use_color());
        for &(name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a named template.
    pub fn render<S: Serialize>(&self, template: &str, ctx: S) -> Result<String, Error> {
        self.env.get_template(template)?.render(ctx)
    }
}

fn register_filters(env: &mut Environment<'static>, use_color: bool) {
    let styles = default_styles();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match styles.get(name.as_str()) {
            Some(style) if use_color && !text.is_empty() => {
                style.clone().force_styling(true).apply_to(text).to_string()
            }
            _ => text,
        }
    });

    // Left-aligns to a display width; styling must come after padding.
    env.add_filter("pad", |value: Value, width: usize| -> String {
        pad_str(&value.to_string(), width, Alignment::Left, None).into_owned()
    });

    // A colored block for hex colors, nothing otherwise.
    env.add_filter("swatch", move |value: String| -> String {
        match parse_hex(&value) {
            Some(rgb) if use_color => Style::new()
                .fg(Color::Color256(rgb_to_ansi256(rgb)))
                .force_styling(true)
                .apply_to("██ ")
                .to_string(),
            _ => String::new(),
        }
    });
}

/// Parses `#rgb`, `#rrggbb` and `#rrggbbaa` colors; alpha is ignored.
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => Some((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 | 8 => Some((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// Uses the xterm palette layout: grays map onto the 24-step ramp at
/// 232..=255 and everything else onto the 6x6x6 cube at 16..=231, each channel
/// scaled down to 0..=5.
///
/// ```
/// use prism_cli::render::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((0xff, 0x00, 0x00)), 196);
/// assert_eq!(rgb_to_ansi256((0x80, 0x80, 0x80)), 243);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
