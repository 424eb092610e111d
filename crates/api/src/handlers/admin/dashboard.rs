//! Handler for the admin landing page.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use unbenched_db::models::dashboard::ContentCounts;
use unbenched_db::models::user::UserResponse;
use unbenched_db::repositories::{DashboardRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::session::AdminUser;
use crate::state::AppState;

/// A card on the dashboard linking to one management section.
#[derive(Debug, Serialize)]
pub struct DashboardSection {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub count: i64,
}

#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub user: UserResponse,
    pub counts: ContentCounts,
    pub sections: Vec<DashboardSection>,
}

/// GET /admin
pub async fn show(State(state): State<AppState>, admin: AdminUser) -> AppResult<Json<Dashboard>> {
    let user = UserRepo::find_by_id(&state.pool, admin.user_id)
        .await?
        .ok_or(AppError::not_found("User", admin.user_id))?;
    let counts = DashboardRepo::counts(&state.pool).await?;

    let sections = vec![
        DashboardSection {
            title: "Sports",
            description: "Teams, categories and rosters",
            path: "/admin/sports",
            count: counts.sports,
        },
        DashboardSection {
            title: "Games",
            description: "Schedule, scores and status",
            path: "/admin/games",
            count: counts.games,
        },
        DashboardSection {
            title: "Stories",
            description: "News articles and banners",
            path: "/admin/stories",
            count: counts.stories,
        },
        DashboardSection {
            title: "Media",
            description: "Photo and video library",
            path: "/admin/media",
            count: counts.media,
        },
    ];

    Ok(Json(Dashboard {
        user: UserResponse::from(&user),
        counts,
        sections,
    }))
}
