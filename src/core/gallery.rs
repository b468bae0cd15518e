use super::error::SiteError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl FromStr for Direction {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "prev" => Ok(Direction::Prev),
            "next" => Ok(Direction::Next),
            other => Err(SiteError::UnknownDirection(other.to_string())),
        }
    }
}

/// Step `index` one slide in `direction`, wrapping at both ends.
/// An empty gallery always sits at 0.
#[inline]
pub fn step_index(index: usize, direction: Direction, slide_count: usize) -> usize {
    if slide_count == 0 {
        return 0;
    }
    let index = index % slide_count;
    match direction {
        Direction::Prev => (index + slide_count - 1) % slide_count,
        Direction::Next => (index + 1) % slide_count,
    }
}

/// Horizontal slider offset in px for `index`.
#[inline]
pub fn slider_offset_px(index: usize, slide_width: f64) -> f64 {
    -(index as f64 * slide_width)
}

/// Content groups selectable by `.tab-button[data-tab]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Images,
    Videos,
    Audio,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Images => "images",
            Tab::Videos => "videos",
            Tab::Audio => "audio",
        }
    }

    /// Id of the `.tab-content` block shown for this tab.
    pub fn content_id(self) -> String {
        format!("{}-content", self.as_str())
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "images" => Ok(Tab::Images),
            "videos" => Ok(Tab::Videos),
            "audio" => Ok(Tab::Audio),
            other => Err(SiteError::UnknownTab(other.to_string())),
        }
    }
}
