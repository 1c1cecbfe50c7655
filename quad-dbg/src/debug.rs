use core::fmt;
use std::fmt::Write;
use std::sync::{LazyLock, Mutex};

use log::{Level, Log, Metadata, Record, SetLoggerError};
use macroquad::prelude::*;

const DBG_FONT_SIZE: u16 = 16;
const DBG_MSG_LIFE: f32 = 3.0;
const DBG_MSG_CAP: usize = 30;

#[derive(Clone)]
struct DebugMsg {
    color: Color,
    line: String,
    spawn_time: f32,
}

struct DebugMsgStoreCell {
    dbg_event_cur: usize,
    dbg_events: [DebugMsg; DBG_MSG_CAP],
}

impl DebugMsgStoreCell {
    fn new() -> Self {
        DebugMsgStoreCell {
            dbg_event_cur: 0,
            dbg_events: std::array::from_fn(|_| DebugMsg {
                line: String::with_capacity(255),
                spawn_time: -1.0,
                color: WHITE,
            }),
        }
    }

    /// Messages still alive at `time`, oldest first.
    fn live_events(&self, time: f32) -> impl Iterator<Item = &DebugMsg> {
        (0..DBG_MSG_CAP)
            .map(move |offset| &self.dbg_events[(self.dbg_event_cur + offset) % DBG_MSG_CAP])
            .filter(move |msg| msg.spawn_time >= 0.0 && msg.spawn_time + DBG_MSG_LIFE >= time)
    }

    fn put_event(&mut self, msg: &fmt::Arguments, color: Color, time: f32) {
        let cell = &mut self.dbg_events[self.dbg_event_cur];

        cell.line.clear();
        // Writing into a String can't fail
        let _ = write!(&mut cell.line, "{}", msg);
        cell.spawn_time = time;
        cell.color = color;

        self.dbg_event_cur = (self.dbg_event_cur + 1) % DBG_MSG_CAP;
    }
}

static DEBUG_CELL: LazyLock<Mutex<DebugMsgStoreCell>> =
    LazyLock::new(|| Mutex::new(DebugMsgStoreCell::new()));

#[derive(Clone, Copy, Debug)]
struct OnScreenLog;

static ON_SCREEN_LOG: OnScreenLog = OnScreenLog;

impl Log for OnScreenLog {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let color = match record.level() {
            Level::Error => RED,
            Level::Warn => YELLOW,
            Level::Info => GREEN,
            Level::Debug => WHITE,
            Level::Trace => GRAY,
        };

        let time = get_time() as f32;
        let Ok(mut cell) = DEBUG_CELL.lock() else {
            return;
        };
        cell.put_event(record.args(), color, time);
    }

    fn flush(&self) { /* NOOP */ }
}

/// Installs the on-screen logger as the `log` sink. Messages
/// are kept for a few seconds and shown by [Debug::draw_events].
pub fn init_on_screen_log() -> Result<(), SetLoggerError> {
    log::set_logger(&ON_SCREEN_LOG)
}

/// Text overlay drawn on top of everything else in screen space.
pub struct Debug {
    text_cursor_x: f32,
    text_cursor_y: f32,
}

impl Debug {
    pub fn new() -> Self {
        Self {
            text_cursor_x: 0.0,
            text_cursor_y: DBG_FONT_SIZE as f32,
        }
    }

    pub fn new_frame(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y = DBG_FONT_SIZE as f32;

        set_default_camera();
    }

    pub fn new_dbg_line(&mut self) {
        self.text_cursor_x = 0.0;
        self.text_cursor_y += DBG_FONT_SIZE as f32;
    }

    pub fn put_debug_text(&mut self, text: &str, color: Color) {
        draw_text(
            text,
            self.text_cursor_x,
            self.text_cursor_y,
            DBG_FONT_SIZE as f32,
            color,
        );

        self.text_cursor_x += measure_text(text, None, DBG_FONT_SIZE, 1.0).width;
    }

    pub fn draw_events(&mut self) {
        let Ok(dbg_cell) = DEBUG_CELL.lock() else {
            return;
        };

        let time = get_time() as f32;
        for msg in dbg_cell.live_events(time) {
            self.put_debug_text(msg.line.as_str(), msg.color);
            self.new_dbg_line();
        }
    }
}

impl Default for Debug {
    fn default() -> Self {
        Debug::new()
    }
}
