//! Static checks on an xmag.toml document
//!
//! Shared by build.rs, which rejects a bad embedded default at compile
//! time, and the firmware tests. Mirrors `XmagConfig::validate` so a file
//! that passes here also passes at startup. Missing keys take the same
//! defaults the firmware uses.

const SECTIONS: &[&str] = &[
    "display",
    "zoom",
    "buttons",
    "indicator",
    "animation",
    "timing",
    "asset",
    "lock",
];

const BUTTONS: &[&str] = &["blue", "green", "red"];
const STYLES: &[&str] = &["bounce", "fill"];

const DEFAULT_WIDTH: i64 = 480;
const DEFAULT_HEIGHT: i64 = 320;
const DEFAULT_ZOOM_MIN: i64 = 1;
const DEFAULT_ZOOM_MAX: i64 = 15;
const DEFAULT_FRAME_PERIOD_MS: i64 = 150;
const LED_LINE_COUNT: i64 = 32;

/// Every problem found in `config`, one message per problem
pub fn check(config: &toml::Table) -> Vec<String> {
    let mut errors = Vec::new();
    validate_sections(config, &mut errors);
    validate_display_and_zoom(config, &mut errors);
    validate_buttons(config, &mut errors);
    validate_indicator(config, &mut errors);
    validate_animation(config, &mut errors);
    validate_timing(config, &mut errors);
    errors
}

fn table<'a>(config: &'a toml::Table, name: &str) -> Option<&'a toml::Table> {
    config.get(name).and_then(toml::Value::as_table)
}

fn integer(section: Option<&toml::Table>, key: &str, default: i64) -> i64 {
    section
        .and_then(|s| s.get(key))
        .and_then(toml::Value::as_integer)
        .unwrap_or(default)
}

/// Unknown sections are almost always typos
fn validate_sections(config: &toml::Table, errors: &mut Vec<String>) {
    for (name, value) in config {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

fn validate_display_and_zoom(config: &toml::Table, errors: &mut Vec<String>) {
    let display = table(config, "display");
    let width = integer(display, "width", DEFAULT_WIDTH);
    let height = integer(display, "height", DEFAULT_HEIGHT);
    if width < 1 || height < 1 {
        errors.push("[display] width and height must be non-zero".to_string());
    }

    let zoom = table(config, "zoom");
    let min = integer(zoom, "min", DEFAULT_ZOOM_MIN);
    let max = integer(zoom, "max", DEFAULT_ZOOM_MAX);
    if min < 1 {
        errors.push("[zoom] min must be at least 1".to_string());
    }
    if min > max {
        errors.push(format!("[zoom] min ({}) is above max ({})", min, max));
    }
    let limit = width.min(height);
    if limit >= 1 && max > limit {
        errors.push(format!(
            "[zoom] max ({}) exceeds the smaller display side ({})",
            max, limit
        ));
    }
}

fn validate_buttons(config: &toml::Table, errors: &mut Vec<String>) {
    let buttons = table(config, "buttons");

    let mut bound = Vec::new();
    for (key, default) in [("confirm", "green"), ("quit", "blue")] {
        match buttons.and_then(|b| b.get(key)) {
            None => bound.push(default.to_string()),
            Some(toml::Value::String(name)) if BUTTONS.contains(&name.as_str()) => {
                bound.push(name.clone());
            }
            Some(_) => errors.push(format!(
                "[buttons] {} must be 'blue', 'green', or 'red'",
                key
            )),
        }
    }

    if bound.len() == 2 && bound[0] == bound[1] {
        errors.push(format!("[buttons] confirm and quit both use '{}'", bound[0]));
    }
}

fn validate_indicator(config: &toml::Table, errors: &mut Vec<String>) {
    let count = integer(table(config, "indicator"), "led_count", LED_LINE_COUNT);
    if !(1..=LED_LINE_COUNT).contains(&count) {
        errors.push("[indicator] led_count must be 1-32".to_string());
    }
}

fn validate_animation(config: &toml::Table, errors: &mut Vec<String>) {
    let Some(animation) = table(config, "animation") else {
        return;
    };

    if let Some(style) = animation.get("style") {
        if !style.as_str().is_some_and(|s| STYLES.contains(&s)) {
            errors.push("[animation] style must be 'bounce' or 'fill'".to_string());
        }
    }
}

fn validate_timing(config: &toml::Table, errors: &mut Vec<String>) {
    let period = integer(
        table(config, "timing"),
        "frame_period_ms",
        DEFAULT_FRAME_PERIOD_MS,
    );
    if period < 1 {
        errors.push("[timing] frame_period_ms must be non-zero".to_string());
    }
}
