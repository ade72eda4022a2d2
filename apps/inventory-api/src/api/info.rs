//! Service banner and team roster

use axum::{Json, Router, extract::State, routing::get};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

const TEAM_NAME: &str = "cc-kelompok-kel6";

#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Hello from Cloud App API!")]
    pub message: &'static str,
    #[schema(example = "running")]
    pub status: &'static str,
    #[schema(example = "0.2.0")]
    pub version: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct TeamMember {
    pub name: &'static str,
    pub nim: &'static str,
    pub role: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamResponse {
    #[schema(example = "cc-kelompok-kel6")]
    pub team: &'static str,
    #[schema(value_type = Vec<TeamMember>)]
    pub members: &'static [TeamMember],
}

static MEMBERS: [TeamMember; 5] = [
    TeamMember {
        name: "Achmad Bayhaqi",
        nim: "10231001",
        role: "Lead Backend",
    },
    TeamMember {
        name: "INDAH NUR FORTUNA",
        nim: "10231044",
        role: "Lead Frontend",
    },
    TeamMember {
        name: "Alfiani Dwiyuniarti",
        nim: "10231010",
        role: "Lead Container",
    },
    TeamMember {
        name: "ZAHWA HANNA DWI PUTRI",
        nim: "10231092",
        role: "Lead CI/CD & Deploy",
    },
    TeamMember {
        name: "Nilam Ayu NandaStari Romdoni",
        nim: "10231070",
        role: "Lead QA & Docs",
    },
];

pub fn router(app: AppInfo) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/team", get(team))
        .with_state(app)
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Info",
    responses((status = 200, description = "Service banner", body = RootResponse))
)]
pub async fn root(State(app): State<AppInfo>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello from Cloud App API!",
        status: "running",
        version: app.version,
    })
}

#[utoipa::path(
    get,
    path = "/team",
    tag = "Info",
    responses((status = 200, description = "Team roster", body = TeamResponse))
)]
pub async fn team() -> Json<TeamResponse> {
    Json(TeamResponse {
        team: TEAM_NAME,
        members: &MEMBERS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use core_config::app_info;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router(app_info!())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_banner() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Hello from Cloud App API!");
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], "0.2.0");
    }

    #[tokio::test]
    async fn test_team_roster() {
        let (status, body) = get_json("/team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["team"], "cc-kelompok-kel6");

        let members = body["members"].as_array().unwrap();
        assert_eq!(members.len(), 5);
        assert_eq!(members[0]["name"], "Achmad Bayhaqi");
        assert_eq!(members[0]["nim"], "10231001");
        assert_eq!(members[4]["role"], "Lead QA & Docs");
    }
}
