use eframe::egui::Color32;

pub fn format_megawatts(value: f64) -> String {
    format!("{value:.1} МВт")
}

pub fn parse_hex_color(value: &str) -> Option<Color32> {
    let raw = value.strip_prefix('#')?;
    if raw.len() != 6 || !raw.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
    let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
    let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

pub fn color_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
