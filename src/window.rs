use std::cell::{Ref, RefCell, RefMut};
use std::ffi::c_void;

use log::{debug, error};
use widestring::U16CString;
use windows::core::PCWSTR;
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetMessageW, GetWindowLongPtrW,
    PeekMessageW, PostQuitMessage, RegisterClassW, SetWindowLongPtrW, ShowWindow,
    TranslateMessage, CREATESTRUCTW, GWLP_USERDATA, MSG, PM_REMOVE, SW_SHOW, WINDOW_EX_STYLE,
    WINDOW_STYLE, WM_NCCREATE, WM_QUIT, WNDCLASSW,
};

use crate::config::WindowOptions;
use crate::error::PlatformError;
use crate::event::{MouseButton, WindowEvent};
use crate::paint::Paint;

/// The overridable handler surface of an application window.
///
/// Every method has a no-op default, so an implementation only spells out
/// the events it cares about. [`handle_other_messages`] is the catch-all for
/// messages this crate does not route; returning `true` marks the message as
/// handled, `false` hands it to default platform processing.
///
/// [`handle_other_messages`]: MessageHandler::handle_other_messages
pub trait MessageHandler {
    fn on_paint(&mut self, _paint: &Paint) {}
    fn on_key_down(&mut self, _key: u64) {}
    fn on_key_up(&mut self, _key: u64) {}
    fn on_mouse_button_down(&mut self, _button: MouseButton) {}
    fn on_mouse_button_up(&mut self, _button: MouseButton) {}
    fn on_mouse_move(&mut self, _x: i32, _y: i32) {}
    fn on_close(&mut self) {}
    fn handle_other_messages(&mut self, _msg: u32) -> bool {
        false
    }
}

/// Everything the window procedure mutates. Kept behind a `RefCell` so the
/// procedure can write through the shared reference it recovers from the
/// window's user-data slot while a pump still holds `&self`.
struct WindowState<H> {
    hwnd: HWND,
    handler: H,
}

/// A native window tied to one [`MessageHandler`] instance.
///
/// Creation registers a window class whose procedure is monomorphized for
/// the handler type, creates the window with the controller's address as
/// creation data and shows it. The WM_NCCREATE handshake stores that address
/// in the window's user-data slot, which is how every later message finds
/// its way back to the handler.
///
/// The controller is boxed so its address stays valid for the lifetime of
/// the association. Everything here is single threaded: the thread that
/// created the window must be the one pumping its messages.
pub struct AppWindow<H: MessageHandler> {
    hinstance: HINSTANCE,
    state: RefCell<WindowState<H>>,
}

impl<H: MessageHandler> AppWindow<H> {
    /// Registers the window class `name`, creates a window of it titled
    /// `name` and makes it visible.
    ///
    /// Fails with a [`PlatformError`] if class registration or window
    /// creation is refused, e.g. when the class name is already taken.
    pub fn create(
        name: &str,
        handler: H,
        options: WindowOptions,
    ) -> Result<Box<Self>, PlatformError> {
        let class_name = U16CString::from_str_truncate(name);

        unsafe {
            let hinstance: HINSTANCE = GetModuleHandleW(None)
                .map_err(|_| {
                    PlatformError::from_last_error(
                        "Failed to get the module handle (GetModuleHandleW)",
                    )
                })?
                .into();

            let class = WNDCLASSW {
                lpfnWndProc: Some(window_proc::<H>),
                hInstance: hinstance,
                lpszClassName: PCWSTR(class_name.as_ptr()),
                ..Default::default()
            };
            if RegisterClassW(&class) == 0 {
                let err = PlatformError::from_last_error(
                    "Failed to register the window class (RegisterClassW)",
                );
                error!("{}", err);
                return Err(err);
            }
            debug!("registered window class {:?}", name);

            let window = Box::new(Self {
                hinstance,
                state: RefCell::new(WindowState {
                    hwnd: HWND::default(),
                    handler,
                }),
            });
            let window_ptr: *const Self = &*window;

            let hwnd = CreateWindowExW(
                WINDOW_EX_STYLE(options.ex_style),
                PCWSTR(class_name.as_ptr()),
                PCWSTR(class_name.as_ptr()),
                WINDOW_STYLE(options.style),
                options.x,
                options.y,
                options.width,
                options.height,
                None,
                None,
                hinstance,
                Some(window_ptr as *const c_void),
            )
            .map_err(|_| {
                let err =
                    PlatformError::from_last_error("Failed to create a window (CreateWindowExW)");
                error!("{}", err);
                err
            })?;

            // The WM_NCCREATE handshake has already stored the hwnd on the
            // controller by the time CreateWindowExW returns.
            debug_assert_eq!(window.state.borrow().hwnd, hwnd);

            let _ = ShowWindow(hwnd, SW_SHOW);

            Ok(window)
        }
    }

    pub fn hwnd(&self) -> HWND {
        self.state.borrow().hwnd
    }

    pub fn instance(&self) -> HINSTANCE {
        self.hinstance
    }

    /// Borrows the handler, e.g. to read state it accumulated during
    /// dispatch. Must not be held while a pump runs.
    pub fn handler(&self) -> Ref<'_, H> {
        Ref::map(self.state.borrow(), |state| &state.handler)
    }

    /// Mutably borrows the handler. Must not be held while a pump runs.
    pub fn handler_mut(&mut self) -> RefMut<'_, H> {
        RefMut::map(self.state.borrow_mut(), |state| &mut state.handler)
    }

    /// Blocks until the next message arrives, then routes it.
    ///
    /// Returns `Ok(false)` once the quit message posted by a close request
    /// has been retrieved, which is the signal to leave the message loop.
    /// A fatal wait error surfaces as a [`PlatformError`].
    pub fn wait_message(&self) -> Result<bool, PlatformError> {
        let mut msg = MSG::default();
        unsafe {
            let result = GetMessageW(&mut msg, None, 0, 0);
            if result.0 == -1 {
                let err = PlatformError::from_last_error("Failed to get a message (GetMessageW)");
                error!("{}", err);
                return Err(err);
            }
            if result.0 == 0 {
                debug!("quit message retrieved, leaving the message loop");
                return Ok(false);
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
        Ok(true)
    }

    /// Routes one message if one is immediately available.
    ///
    /// An empty queue is not a failure; the call simply returns. Like
    /// [`wait_message`](Self::wait_message), returns `false` once the quit
    /// message has been retrieved.
    pub fn poll_message(&self) -> bool {
        let mut msg = MSG::default();
        unsafe {
            if !PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                return true;
            }
            if msg.message == WM_QUIT {
                debug!("quit message retrieved, leaving the message loop");
                return false;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
        true
    }
}

/// The dispatch entry point the platform invokes for every message.
///
/// WM_NCCREATE establishes the hwnd -> controller association through the
/// window's user-data slot; messages arriving before that, on a window of
/// the class created without creation data, or re-entrantly while a handler
/// is already running get default processing.
unsafe extern "system" fn window_proc<H: MessageHandler>(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let window = if msg == WM_NCCREATE {
        let create = &*(lparam.0 as *const CREATESTRUCTW);
        let window = create.lpCreateParams as *const AppWindow<H>;
        if !window.is_null() {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, window as isize);
            (*window).state.borrow_mut().hwnd = hwnd;
            debug!("associated window {:?} with its controller", hwnd);
        }
        window
    } else {
        GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const AppWindow<H>
    };

    let Some(window) = window.as_ref() else {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    };

    // Messages delivered while a handler is running (BeginPaint sends
    // WM_NCPAINT and WM_ERASEBKGND, handlers may send messages of their
    // own) would alias the state borrow; they get default processing.
    let Ok(mut state) = window.state.try_borrow_mut() else {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    };

    const HANDLED: LRESULT = LRESULT(1);

    match WindowEvent::from_message(msg, wparam.0, lparam.0) {
        WindowEvent::Paint => {
            let paint = Paint::begin(hwnd);
            state.handler.on_paint(&paint);
            HANDLED
        }
        WindowEvent::KeyDown(key) => {
            state.handler.on_key_down(key);
            HANDLED
        }
        WindowEvent::KeyUp(key) => {
            state.handler.on_key_up(key);
            HANDLED
        }
        WindowEvent::MouseDown(button) => {
            state.handler.on_mouse_button_down(button);
            HANDLED
        }
        WindowEvent::MouseUp(button) => {
            state.handler.on_mouse_button_up(button);
            HANDLED
        }
        WindowEvent::MouseMove(x, y) => {
            state.handler.on_mouse_move(x, y);
            HANDLED
        }
        WindowEvent::Close => {
            state.handler.on_close();
            PostQuitMessage(0);
            HANDLED
        }
        WindowEvent::Other(other) => {
            let handled = state.handler.handle_other_messages(other);
            // Released before default processing, which may send further
            // messages to this same window.
            drop(state);
            if handled {
                HANDLED
            } else {
                DefWindowProcW(hwnd, msg, wparam, lparam)
            }
        }
    }
}
