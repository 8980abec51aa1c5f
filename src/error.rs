use thiserror::Error;

/// A failed platform call, paired with the thread's last-error code at the
/// time the failure was observed.
///
/// This is a carrier for the failure, not a handler: the embedding
/// application decides whether to show it to the user or send it to the
/// debugger and then typically terminates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{info} | error code: {code}")]
pub struct PlatformError {
    info: String,
    code: u32,
}

impl PlatformError {
    pub fn new(info: impl Into<String>, code: u32) -> Self {
        Self {
            info: info.into(),
            code,
        }
    }

    pub fn info(&self) -> &str {
        &self.info
    }

    pub fn code(&self) -> u32 {
        self.code
    }
}

#[cfg(windows)]
mod win {
    use widestring::U16CString;
    use windows::core::PCWSTR;
    use windows::Win32::Foundation::GetLastError;
    use windows::Win32::System::Diagnostics::Debug::OutputDebugStringW;
    use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR};

    use super::PlatformError;

    impl PlatformError {
        /// Pairs `info` with the calling thread's `GetLastError` code.
        ///
        /// Must be called before anything else touches the thread's
        /// last-error slot, otherwise the code describes the wrong call.
        pub fn from_last_error(info: impl Into<String>) -> Self {
            Self::new(info, unsafe { GetLastError() }.0)
        }

        /// Presents the error synchronously in a modal message box.
        pub fn show_message_box(&self) {
            let text = U16CString::from_str_truncate(self.to_string());
            unsafe {
                MessageBoxW(None, PCWSTR(text.as_ptr()), PCWSTR::null(), MB_ICONERROR);
            }
        }

        /// Emits the error to the debugger output channel.
        pub fn output_debug(&self) {
            let text = U16CString::from_str_truncate(self.to_string());
            unsafe {
                OutputDebugStringW(PCWSTR(text.as_ptr()));
            }
        }
    }
}
