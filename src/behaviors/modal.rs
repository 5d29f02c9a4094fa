use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// What the modal viewer is showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSelection {
    pub kind: MediaKind,
    pub src: String,
    pub title: String,
    pub description: String,
}

/// Work the view must do when the modal closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseEffect {
    /// Pause the video element and rewind it to the start
    pub stop_video: bool,
}

/// Gallery modal: open on a selection, close via the close button, a click
/// on the backdrop, or Escape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaModal {
    selection: Option<MediaSelection>,
}

impl MediaModal {
    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    pub fn selection(&self) -> Option<&MediaSelection> {
        self.selection.as_ref()
    }

    /// Page scrolling is locked while the modal is up
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            "auto"
        }
    }

    pub fn open(&mut self, selection: MediaSelection) {
        self.selection = Some(selection);
    }

    pub fn close(&mut self) -> Option<CloseEffect> {
        self.selection.take().map(|s| CloseEffect {
            stop_video: s.kind == MediaKind::Video,
        })
    }

    /// Clicks inside the content do not close the modal
    pub fn on_backdrop_click(&mut self, on_backdrop: bool) -> Option<CloseEffect> {
        if on_backdrop {
            self.close()
        } else {
            None
        }
    }

    pub fn on_key(&mut self, key: &str) -> Option<CloseEffect> {
        if key == "Escape" {
            self.close()
        } else {
            None
        }
    }
}
