use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Operation;

// ---------------------------------------------------------------------------
// Per-operation line colors
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<(u8, u8, u8)> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            (
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Line colour for one operation's panel, identical in the exported image
/// and the viewer window.
pub fn operation_color(operation: Operation) -> (u8, u8, u8) {
    let palette = generate_palette(Operation::ALL.len());
    let index = match operation {
        Operation::Insert => 0,
        Operation::Search => 1,
        Operation::Delete => 2,
    };
    palette[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operations_get_distinct_colors() {
        let colors: Vec<(u8, u8, u8)> = Operation::ALL.into_iter().map(operation_color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
