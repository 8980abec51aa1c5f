use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{BeginPaint, EndPaint, HDC, PAINTSTRUCT};

/// A paint session for one WM_PAINT dispatch.
///
/// Acquires the device context with `BeginPaint` and releases it with
/// `EndPaint` when dropped, so the context is given back exactly once on
/// every exit path out of the paint handler, panics included.
pub struct Paint {
    hwnd: HWND,
    hdc: HDC,
    ps: PAINTSTRUCT,
}

impl Paint {
    /// `hwnd` must be the valid window the WM_PAINT was delivered to.
    pub(crate) unsafe fn begin(hwnd: HWND) -> Self {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(hwnd, &mut ps);
        Self { hwnd, hdc, ps }
    }

    pub fn hdc(&self) -> HDC {
        self.hdc
    }

    /// The paint metadata, including the rectangle that needs repainting.
    pub fn info(&self) -> &PAINTSTRUCT {
        &self.ps
    }
}

impl Drop for Paint {
    fn drop(&mut self) {
        unsafe {
            let _ = EndPaint(self.hwnd, &self.ps);
        }
    }
}
