use serde::{Deserialize, Serialize};

/// Body of a player name search. `player` is `null` when nothing matched.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlayerSearchResponse {
    #[serde(default)]
    pub player: Option<Vec<PlayerCandidate>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlayerCandidate {
    #[serde(rename = "strPlayer", default)]
    pub name: Option<String>,
    #[serde(rename = "strCutout", default)]
    pub cutout: Option<String>,
    #[serde(rename = "strThumb", default)]
    pub thumb: Option<String>,
}

/// Where a chosen image URL came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Transparent-background render, preferred.
    Cutout(String),
    Thumbnail(String),
}

impl ImageSource {
    pub fn url(&self) -> &str {
        match self {
            Self::Cutout(url) | Self::Thumbnail(url) => url,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Cutout(_) => "cutout",
            Self::Thumbnail(_) => "thumbnail",
        }
    }
}

impl PlayerCandidate {
    /// Cutout over thumbnail over nothing. Blank URLs count as missing.
    pub fn best_image(&self) -> Option<ImageSource> {
        non_blank(&self.cutout)
            .map(ImageSource::Cutout)
            .or_else(|| non_blank(&self.thumb).map(ImageSource::Thumbnail))
    }
}

impl PlayerSearchResponse {
    /// Best image of the first candidate, if there is one.
    pub fn best_image(&self) -> Option<ImageSource> {
        self.player
            .as_deref()
            .and_then(|players| players.first())
            .and_then(PlayerCandidate::best_image)
    }
}

fn non_blank(url: &Option<String>) -> Option<String> {
    url.as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
}
