use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct AdDoc {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    /// ISO-8601, assigned by the server
    pub created_at: String,
    pub owner: String,
}

#[derive(ToSchema)]
pub struct NewAdDoc {
    pub title: String,
    pub description: Option<String>,
    pub owner: String,
}

/// Any subset of the patchable fields; other keys are rejected.
#[derive(ToSchema)]
pub struct AdPatchDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub owner: Option<String>,
}

#[derive(ToSchema)]
pub struct IdDoc { pub id: i32 }

#[derive(ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::ads::get_ad,
        crate::routes::ads::create_ad,
        crate::routes::ads::patch_ad,
        crate::routes::ads::delete_ad,
    ),
    components(
        schemas(
            AdDoc,
            NewAdDoc,
            AdPatchDoc,
            IdDoc,
            StatusDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "ads")
    )
)]
pub struct ApiDoc;
