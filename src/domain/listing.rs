use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Publishing platform carrying webtoon titles. The same title may be
/// served by more than one platform, each with its own detail URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Service {
    Naver,
    Kakao,
}

impl Service {
    /// Query value expected by the listing API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Service::Naver => "naver",
            Service::Kakao => "kakao",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Update-day category of a listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UpdateDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
    Finished,
    NaverDaily,
}

impl UpdateDay {
    /// Query value expected by the listing API (`naverDaily` is camelCase
    /// on the wire).
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateDay::Mon => "mon",
            UpdateDay::Tue => "tue",
            UpdateDay::Wed => "wed",
            UpdateDay::Thu => "thu",
            UpdateDay::Fri => "fri",
            UpdateDay::Sat => "sat",
            UpdateDay::Sun => "sun",
            UpdateDay::Finished => "finished",
            UpdateDay::NaverDaily => "naverDaily",
        }
    }
}

impl fmt::Display for UpdateDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status flags attached to a listing entry. Every field is defaulted so
/// records missing the sub-object deserialize to all-false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Additional {
    #[serde(rename = "new")]
    pub is_new: bool,
    #[serde(rename = "adult")]
    pub is_adult: bool,
    #[serde(rename = "rest")]
    pub is_hiatus: bool,
    #[serde(rename = "up")]
    pub is_trending: bool,
    #[serde(rename = "singularityList")]
    pub singularity_list: Vec<String>,
}

/// One summary entry from the listing API, in the upstream wire shape.
/// Unexpected or missing fields fall back to zero values rather than
/// failing the whole page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingRecord {
    #[serde(rename = "webtoonId")]
    pub webtoon_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    pub img: String,
    pub service: String,
    #[serde(rename = "updateDays")]
    pub update_days: Vec<String>,
    pub additional: Additional,
}
