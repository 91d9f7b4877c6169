//! YouTube embed helpers

use std::time::Duration;

use thiserror::Error;

/// Player API script, loaded once by the showcase section
pub const IFRAME_API_SRC: &str = "https://www.youtube.com/iframe_api";

/// Video played in the showcase section
pub const SHOWCASE_VIDEO_ID: &str = "AlnYmT22_Mg";

/// How long the showcase thumbnail stays up after the section scrolls in
pub const PREVIEW_REVEAL_DELAY: Duration = Duration::from_millis(500);

const EMBED_BASE: &str = "https://www.youtube.com/embed/";
const VIDEO_ID_LEN: usize = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VideoError {
    #[error("video id must be 11 characters, got {0}")]
    InvalidLength(usize),

    #[error("video id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Check that `id` looks like a YouTube video id
pub fn validate_video_id(id: &str) -> Result<&str, VideoError> {
    let len = id.chars().count();
    if len != VIDEO_ID_LEN {
        return Err(VideoError::InvalidLength(len));
    }
    if let Some(bad) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(VideoError::InvalidCharacter(bad));
    }
    Ok(id)
}

/// How an embedded player is presented
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbedMode {
    /// Carousel slide, autoplaying once the visitor pressed play
    Carousel { autoplay: bool },
    /// Muted looping showcase without player chrome
    Preview { origin: String },
    /// Player inside the expanded dialog
    Full,
}

pub fn embed_url(id: &str, mode: &EmbedMode) -> Result<String, VideoError> {
    let id = validate_video_id(id)?;
    let query = match mode {
        EmbedMode::Carousel { autoplay } => {
            let mut query = String::from("rel=0&modestbranding=1");
            if *autoplay {
                query.push_str("&autoplay=1");
            }
            query
        }
        EmbedMode::Preview { origin } => format!(
            "autoplay=1&mute=1&controls=0&showinfo=0&rel=0&modestbranding=1&loop=1\
             &playlist={id}&iv_load_policy=3&fs=0&disablekb=1&origin={origin}\
             &enablejsapi=1&playsinline=1&color=white&hl=en&cc_load_policy=0&autohide=1"
        ),
        EmbedMode::Full => String::from(
            "autoplay=1&rel=0&modestbranding=1&iv_load_policy=3&fs=1&playsinline=1\
             &color=white&hl=en&cc_load_policy=0",
        ),
    };
    Ok(format!("{EMBED_BASE}{id}?{query}"))
}

pub fn thumbnail_url(id: &str) -> Result<String, VideoError> {
    let id = validate_video_id(id)?;
    Ok(format!("https://img.youtube.com/vi/{id}/maxresdefault.jpg"))
}
