//! Screen-region erase, selected per platform.

use std::io::Write;

/// ANSI "erase from cursor to end of screen".
pub(crate) const ERASE_TO_END: &str = "\x1b[J";

/// Best-effort erase of the screen region at or after the given cursor
/// position, keeping content before it intact.
///
/// Erase failures are cosmetic: implementations swallow them so the row
/// emission that follows is never blocked.
pub trait ConsoleEraser {
    /// Clear from `(row, col)` to the end of the visible region.
    fn clear(&self, out: &mut dyn Write, row: u16, col: u16);
}

/// Eraser for ANSI-capable terminals: writes the control sequence inline.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiEraser;

impl ConsoleEraser for AnsiEraser {
    fn clear(&self, out: &mut dyn Write, _row: u16, _col: u16) {
        out.write_all(ERASE_TO_END.as_bytes()).ok();
    }
}

/// Eraser for legacy Windows consoles: blanks cells through the console API
/// instead of emitting control sequences the console would print verbatim.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WinConsoleEraser;

#[cfg(windows)]
mod win {
    use core::ffi::c_void;

    #[repr(C)]
    #[derive(Clone, Copy)]
    pub struct Coord {
        pub x: i16,
        pub y: i16,
    }

    #[repr(C)]
    #[derive(Clone, Copy)]
    pub struct SmallRect {
        pub left: i16,
        pub top: i16,
        pub right: i16,
        pub bottom: i16,
    }

    #[repr(C)]
    #[derive(Clone, Copy)]
    pub struct ScreenBufferInfo {
        pub size: Coord,
        pub cursor: Coord,
        pub attributes: u16,
        pub window: SmallRect,
        pub max_window: Coord,
    }

    pub const STD_OUTPUT_HANDLE: u32 = -11i32 as u32;

    #[link(name = "kernel32")]
    extern "system" {
        pub fn GetStdHandle(which: u32) -> *mut c_void;
        pub fn GetConsoleScreenBufferInfo(handle: *mut c_void, info: *mut ScreenBufferInfo)
            -> i32;
        pub fn FillConsoleOutputCharacterW(
            handle: *mut c_void,
            ch: u16,
            length: u32,
            at: Coord,
            written: *mut u32,
        ) -> i32;
        pub fn SetConsoleCursorPosition(handle: *mut c_void, at: Coord) -> i32;
    }
}

#[cfg(windows)]
impl ConsoleEraser for WinConsoleEraser {
    fn clear(&self, _out: &mut dyn Write, row: u16, col: u16) {
        // Blank every cell from the requested offset relative to the current
        // cursor down to the end of the buffer, then park the cursor there so
        // the next row overwrites the blanked region.
        unsafe {
            let handle = win::GetStdHandle(win::STD_OUTPUT_HANDLE);
            let mut info = core::mem::zeroed::<win::ScreenBufferInfo>();
            if win::GetConsoleScreenBufferInfo(handle, &mut info) == 0 {
                return;
            }
            let at = win::Coord {
                x: col as i16,
                y: info.cursor.y.saturating_add(row as i16).min(info.size.y.saturating_sub(1)),
            };
            let width = info.size.x.max(0) as u32;
            let rows_below = (i32::from(info.size.y) - i32::from(at.y)).max(0) as u32;
            let cells = (rows_below * width).saturating_sub(at.x.max(0) as u32);
            let mut written = 0u32;
            win::FillConsoleOutputCharacterW(handle, u16::from(b' '), cells, at, &mut written);
            win::SetConsoleCursorPosition(handle, at);
        }
    }
}

/// Select the erase strategy for this platform. The check is static and the
/// choice is made once, at reporter construction.
pub fn platform_eraser() -> Box<dyn ConsoleEraser> {
    #[cfg(windows)]
    {
        Box::new(WinConsoleEraser)
    }
    #[cfg(not(windows))]
    {
        Box::new(AnsiEraser)
    }
}
