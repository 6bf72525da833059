//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Clipdrop API",
        version = "0.1.0",
        description = "Upload videos to object storage and list the most recent uploads."
    ),
    paths(
        handlers::video_upload::upload_video,
        handlers::recent::list_recent,
        handlers::recent::latest_video,
    ),
    components(schemas(
        handlers::video_upload::UploadResponse,
        handlers::recent::RecentFilesResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "video", description = "Video upload and recent uploads")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
