use serde::{Deserialize, Serialize};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, WS_EX_COMPOSITED, WS_OVERLAPPEDWINDOW,
};

/// Geometry and style flags for a window about to be created.
///
/// The defaults let the platform pick position and size and produce a
/// standard overlapped, resizable window with composited rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    pub style: u32,
    pub ex_style: u32,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: CW_USEDEFAULT,
            height: CW_USEDEFAULT,
            x: CW_USEDEFAULT,
            y: CW_USEDEFAULT,
            style: WS_OVERLAPPEDWINDOW.0,
            ex_style: WS_EX_COMPOSITED.0,
        }
    }
}

impl WindowOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_the_platform_sentinel_and_standard_styles() {
        let options = WindowOptions::default();
        assert_eq!(options.width, CW_USEDEFAULT);
        assert_eq!(options.height, CW_USEDEFAULT);
        assert_eq!(options.x, CW_USEDEFAULT);
        assert_eq!(options.y, CW_USEDEFAULT);
        assert_eq!(options.style, WS_OVERLAPPEDWINDOW.0);
        assert_eq!(options.ex_style, WS_EX_COMPOSITED.0);
    }

    #[test]
    fn builder_helpers_only_touch_their_fields() {
        let options = WindowOptions::default()
            .with_size(800, 600)
            .with_position(10, 20);
        assert_eq!((options.width, options.height), (800, 600));
        assert_eq!((options.x, options.y), (10, 20));
        assert_eq!(options.style, WS_OVERLAPPEDWINDOW.0);
    }
}
