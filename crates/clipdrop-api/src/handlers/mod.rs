pub mod health;
pub mod recent;
pub mod video_upload;
