use web_sys::window;

use crate::components::config::VIDEO_EXTENSIONS;

pub fn format_time(time_in_seconds: f64) -> String {
    let time_in_seconds = time_in_seconds.max(0.0);
    let hours = (time_in_seconds / 3600.0).floor() as i32;
    let minutes = ((time_in_seconds % 3600.0) / 60.0).floor() as i32;
    let seconds = (time_in_seconds % 60.0).floor() as i32;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Keys that activate a focused episode card.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Audio,
    Video,
}

impl MediaKind {
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Audio => "Audio",
            MediaKind::Video => "Video",
        }
    }
}

pub fn media_kind(path: &str) -> MediaKind {
    let is_video = path
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()));

    if is_video {
        MediaKind::Video
    } else {
        MediaKind::Audio
    }
}

pub fn set_body_class(class: &str, enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };

    let classes = body.class_list();
    let result = if enabled {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to update body class {}: {:?}", class, e);
    }
}
