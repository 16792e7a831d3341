//! Short-lived messages shown above the footer.

/// Ticks a confirmation stays up (about 2s at the 250ms tick rate).
pub const SHORT_TICKS: u16 = 8;
/// Ticks an error stays up (about 3.5s).
pub const LONG_TICKS: u16 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    remaining_ticks: u16,
}

/// Holds at most one notice; a newer one replaces the current one.
#[derive(Debug, Default)]
pub struct Notices {
    current: Option<Notice>,
}

impl Notices {
    pub fn post_info(&mut self, text: impl Into<String>) {
        self.post(NoticeKind::Info, text.into(), SHORT_TICKS);
    }

    pub fn post_error(&mut self, text: impl Into<String>) {
        self.post(NoticeKind::Error, text.into(), LONG_TICKS);
    }

    fn post(&mut self, kind: NoticeKind, text: String, ticks: u16) {
        self.current = Some(Notice {
            kind,
            text,
            remaining_ticks: ticks,
        });
    }

    pub fn on_tick(&mut self) {
        if let Some(notice) = &mut self.current {
            notice.remaining_ticks = notice.remaining_ticks.saturating_sub(1);
            if notice.remaining_ticks == 0 {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
