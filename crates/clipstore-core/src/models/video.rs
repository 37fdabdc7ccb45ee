use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoCategory {
    Education,
    Entertainment,
    Gaming,
    Music,
    News,
    Sports,
    Technology,
    Travel,
    Other,
}

impl Display for VideoCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            VideoCategory::Education => "education",
            VideoCategory::Entertainment => "entertainment",
            VideoCategory::Gaming => "gaming",
            VideoCategory::Music => "music",
            VideoCategory::News => "news",
            VideoCategory::Sports => "sports",
            VideoCategory::Technology => "technology",
            VideoCategory::Travel => "travel",
            VideoCategory::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VideoCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "education" => Ok(VideoCategory::Education),
            "entertainment" => Ok(VideoCategory::Entertainment),
            "gaming" => Ok(VideoCategory::Gaming),
            "music" => Ok(VideoCategory::Music),
            "news" => Ok(VideoCategory::News),
            "sports" => Ok(VideoCategory::Sports),
            "technology" => Ok(VideoCategory::Technology),
            "travel" => Ok(VideoCategory::Travel),
            "other" => Ok(VideoCategory::Other),
            other => Err(format!("unknown video category: {}", other)),
        }
    }
}

/// Upload lifecycle. Advisory only: any status may be set from any other;
/// there is no enforced transition table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Uploading,
    Uploaded,
    Processing,
    Processed,
    Failed,
}

impl Display for VideoStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let s = match self {
            VideoStatus::Uploading => "uploading",
            VideoStatus::Uploaded => "uploaded",
            VideoStatus::Processing => "processing",
            VideoStatus::Processed => "processed",
            VideoStatus::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VideoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uploading" => Ok(VideoStatus::Uploading),
            "uploaded" => Ok(VideoStatus::Uploaded),
            "processing" => Ok(VideoStatus::Processing),
            "processed" => Ok(VideoStatus::Processed),
            "failed" => Ok(VideoStatus::Failed),
            other => Err(format!("unknown video status: {}", other)),
        }
    }
}

/// The stored video object. Filename, content type, and size describe the
/// bytes actually being uploaded and never change; the playlist URL is filled
/// in by a downstream processing step once transcoding completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoFile {
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_url: Option<String>,
}

/// The thumbnail object. The URL is assigned once its upload completes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Thumbnail {
    pub filename: String,
    pub content_type: String,
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Construction arguments for [`Video::create`]. Optional fields take the
/// documented defaults: empty tags, `Uploading` status, now for timestamps.
#[derive(Debug, Clone)]
pub struct VideoProps {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub category: VideoCategory,
    pub tags: Option<Vec<String>>,
    pub status: Option<VideoStatus>,
    pub file: VideoFile,
    pub thumbnail: Thumbnail,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// One media asset: a video plus its thumbnail, tracked from registration
/// through processing.
///
/// Fields are private; all mutation goes through the named operations below,
/// each of which advances `updated_at`. `id`, the video file triple, and
/// `created_at` are fixed at construction.
#[derive(Debug, Clone)]
pub struct Video {
    id: Uuid,
    title: String,
    description: Option<String>,
    category: VideoCategory,
    tags: Vec<String>,
    status: VideoStatus,
    file: VideoFile,
    thumbnail: Thumbnail,
    uploaded_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Video {
    pub fn create(props: VideoProps) -> Self {
        let now = Utc::now();
        Video {
            id: props.id,
            title: props.title,
            description: props.description,
            category: props.category,
            tags: props.tags.unwrap_or_default(),
            status: props.status.unwrap_or(VideoStatus::Uploading),
            file: props.file,
            thumbnail: props.thumbnail,
            uploaded_at: props.uploaded_at.unwrap_or(now),
            created_at: props.created_at.unwrap_or(now),
            updated_at: props.updated_at.unwrap_or(now),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn category(&self) -> VideoCategory {
        self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn status(&self) -> VideoStatus {
        self.status
    }

    pub fn file(&self) -> &VideoFile {
        &self.file
    }

    pub fn thumbnail(&self) -> &Thumbnail {
        &self.thumbnail
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn retitle(&mut self, title: String) {
        self.title = title;
        self.touch();
    }

    pub fn redescribe(&mut self, description: String) {
        self.description = Some(description);
        self.touch();
    }

    pub fn recategorize(&mut self, category: VideoCategory) {
        self.category = category;
        self.touch();
    }

    /// Replace the whole tag list. Tags are not edited incrementally.
    pub fn retag(&mut self, tags: Vec<String>) {
        self.tags = tags;
        self.touch();
    }

    pub fn update_status(&mut self, status: VideoStatus) {
        self.status = status;
        self.touch();
    }

    pub fn set_uploaded_at(&mut self, uploaded_at: DateTime<Utc>) {
        self.uploaded_at = uploaded_at;
        self.touch();
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: VideoCategory,
    pub tags: Vec<String>,
    pub status: VideoStatus,
    pub video: VideoFile,
    pub thumbnail: Thumbnail,
    pub uploaded_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(video: Video) -> Self {
        VideoResponse {
            id: video.id,
            title: video.title,
            description: video.description,
            category: video.category,
            tags: video.tags,
            status: video.status,
            video: video.file,
            thumbnail: video.thumbnail,
            uploaded_at: video.uploaded_at,
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_props() -> VideoProps {
        VideoProps {
            id: Uuid::new_v4(),
            title: "Intro".to_string(),
            description: None,
            category: VideoCategory::Education,
            tags: None,
            status: None,
            file: VideoFile {
                filename: "v.mp4".to_string(),
                content_type: "video/mp4".to_string(),
                size: 1_048_576,
                playlist_url: None,
            },
            thumbnail: Thumbnail {
                filename: "t.jpg".to_string(),
                content_type: "image/jpeg".to_string(),
                size: 20_480,
                url: None,
            },
            uploaded_at: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn create_applies_defaults() {
        let video = Video::create(test_props());
        assert_eq!(video.status(), VideoStatus::Uploading);
        assert!(video.tags().is_empty());
        assert_eq!(video.title(), "Intro");
        assert_eq!(video.description(), None);
    }

    #[test]
    fn create_keeps_explicit_values() {
        let mut props = test_props();
        props.status = Some(VideoStatus::Processed);
        props.tags = Some(vec!["rust".to_string(), "tutorial".to_string()]);
        props.description = Some("A short intro".to_string());
        let video = Video::create(props);
        assert_eq!(video.status(), VideoStatus::Processed);
        assert_eq!(video.tags(), ["rust", "tutorial"]);
        assert_eq!(video.description(), Some("A short intro"));
    }

    #[test]
    fn mutators_advance_updated_at() {
        let mut video = Video::create(test_props());
        let mut prev = video.updated_at();

        video.retitle("New title".to_string());
        assert!(video.updated_at() >= prev);
        assert_eq!(video.title(), "New title");
        prev = video.updated_at();

        video.redescribe("desc".to_string());
        assert!(video.updated_at() >= prev);
        assert_eq!(video.description(), Some("desc"));
        prev = video.updated_at();

        video.recategorize(VideoCategory::Music);
        assert!(video.updated_at() >= prev);
        assert_eq!(video.category(), VideoCategory::Music);
        prev = video.updated_at();

        video.retag(vec!["a".to_string()]);
        assert!(video.updated_at() >= prev);
        assert_eq!(video.tags(), ["a"]);
        prev = video.updated_at();

        video.update_status(VideoStatus::Uploaded);
        assert!(video.updated_at() >= prev);
        assert_eq!(video.status(), VideoStatus::Uploaded);
        prev = video.updated_at();

        let ts = Utc::now();
        video.set_uploaded_at(ts);
        assert!(video.updated_at() >= prev);
        assert_eq!(video.uploaded_at(), ts);
    }

    #[test]
    fn mutators_leave_identity_untouched() {
        let mut video = Video::create(test_props());
        let id = video.id();
        let file = video.file().clone();
        let created_at = video.created_at();

        video.retitle("x".to_string());
        video.recategorize(VideoCategory::Gaming);
        video.update_status(VideoStatus::Failed);

        assert_eq!(video.id(), id);
        assert_eq!(video.file(), &file);
        assert_eq!(video.created_at(), created_at);
    }

    #[test]
    fn status_moves_freely_between_values() {
        // No transition table: processed may go back to uploading.
        let mut video = Video::create(test_props());
        video.update_status(VideoStatus::Processed);
        video.update_status(VideoStatus::Uploading);
        assert_eq!(video.status(), VideoStatus::Uploading);
    }

    #[test]
    fn category_round_trips_through_strings() {
        for category in [
            VideoCategory::Education,
            VideoCategory::Entertainment,
            VideoCategory::Gaming,
            VideoCategory::Music,
            VideoCategory::News,
            VideoCategory::Sports,
            VideoCategory::Technology,
            VideoCategory::Travel,
            VideoCategory::Other,
        ] {
            assert_eq!(category.to_string().parse::<VideoCategory>(), Ok(category));
        }
        assert!("cooking".parse::<VideoCategory>().is_err());
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            VideoStatus::Uploading,
            VideoStatus::Uploaded,
            VideoStatus::Processing,
            VideoStatus::Processed,
            VideoStatus::Failed,
        ] {
            assert_eq!(status.to_string().parse::<VideoStatus>(), Ok(status));
        }
        assert!("done".parse::<VideoStatus>().is_err());
    }

    #[test]
    fn response_mirrors_entity() {
        let mut props = test_props();
        props.tags = Some(vec!["demo".to_string()]);
        let video = Video::create(props);
        let id = video.id();
        let response = VideoResponse::from(video);
        assert_eq!(response.id, id);
        assert_eq!(response.status, VideoStatus::Uploading);
        assert_eq!(response.video.filename, "v.mp4");
        assert_eq!(response.thumbnail.filename, "t.jpg");
        assert_eq!(response.tags, ["demo"]);
    }
}
