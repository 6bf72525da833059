//! Route paths and request constants shared by the router, handlers, and OpenAPI document.

pub const UPLOAD_VIDEO_PATH: &str = "/upload/video";
pub const RECENT_PATH: &str = "/recent";
pub const LATEST_VIDEO_PATH: &str = "/video/latest";
pub const HEALTH_PATH: &str = "/health";
pub const READY_PATH: &str = "/health/ready";
pub const OPENAPI_JSON_PATH: &str = "/api/openapi.json";
pub const DOCS_PATH: &str = "/docs";

/// Multipart field carrying the uploaded file
pub const VIDEO_FIELD_NAME: &str = "video";

/// Allowance on top of the file size limit for multipart boundaries and headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

/// Request ID header propagated across services
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
