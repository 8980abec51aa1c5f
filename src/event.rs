use windows::Win32::UI::WindowsAndMessaging::{
    WM_CLOSE, WM_KEYDOWN, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MBUTTONDOWN, WM_MBUTTONUP,
    WM_MOUSEMOVE, WM_PAINT, WM_RBUTTONDOWN, WM_RBUTTONUP,
};

/// Mouse button identifier, normalized across the per-button message
/// constants so the same button maps to the same variant for both the down
/// and the up message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A window message classified into the events this crate routes.
///
/// Everything that is not one of the routed kinds ends up in [`Other`] and is
/// offered to the handler's catch-all hook.
///
/// [`Other`]: WindowEvent::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Paint,
    KeyDown(u64),
    KeyUp(u64),
    MouseDown(MouseButton),
    MouseUp(MouseButton),
    MouseMove(i32, i32),
    Close,
    Other(u32),
}

impl WindowEvent {
    pub fn from_message(msg: u32, wparam: usize, lparam: isize) -> Self {
        match msg {
            WM_PAINT => Self::Paint,
            WM_KEYDOWN => Self::KeyDown(wparam as u64),
            WM_KEYUP => Self::KeyUp(wparam as u64),
            WM_LBUTTONDOWN => Self::MouseDown(MouseButton::Left),
            WM_MBUTTONDOWN => Self::MouseDown(MouseButton::Middle),
            WM_RBUTTONDOWN => Self::MouseDown(MouseButton::Right),
            WM_LBUTTONUP => Self::MouseUp(MouseButton::Left),
            WM_MBUTTONUP => Self::MouseUp(MouseButton::Middle),
            WM_RBUTTONUP => Self::MouseUp(MouseButton::Right),
            WM_MOUSEMOVE => {
                let (x, y) = cursor_position(lparam);
                Self::MouseMove(x, y)
            }
            WM_CLOSE => Self::Close,
            other => Self::Other(other),
        }
    }
}

/// Decodes client-area coordinates from an LPARAM.
///
/// Low word is x, high word is y, both sign extended. Mouse-capture moves can
/// produce negative coordinates, so plain masking is not enough.
pub(crate) fn cursor_position(lparam: isize) -> (i32, i32) {
    let x = lparam as i16 as i32;
    let y = (lparam >> 16) as i16 as i32;
    (x, y)
}
