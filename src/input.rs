// Pointer helpers. Kept free of DOM types so host tests can include them.

/// Pointer position relative to the viewport centre, each axis in [-0.5, 0.5].
/// A zero-sized viewport reports the centre.
#[inline]
pub fn normalized_pointer(client_x: f64, client_y: f64, inner_w: f64, inner_h: f64) -> [f32; 2] {
    if inner_w <= 0.0 || inner_h <= 0.0 {
        return [0.0, 0.0];
    }
    [
        (client_x / inner_w - 0.5) as f32,
        (client_y / inner_h - 0.5) as f32,
    ]
}

/// Whether a keyboard key should dismiss an open dialog.
#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}
