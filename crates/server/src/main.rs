// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info};

use staffline_api::{
    ApiError, AttendanceActionResponse, AttendanceOverviewResponse, AttendanceStatusResponse,
    AuthenticatedUser, AuthenticationService, CheckInRequest, CreateDepartmentRequest,
    CreateDepartmentResponse, CreateReviewRequest, CreateReviewResponse, DashboardResponse,
    DecideLeaveRequest, DecideLeaveResponse, EmployeeDetailResponse, ListDepartmentsResponse,
    ListEmployeesResponse, ListLeaveRequestsResponse, ListReviewsResponse, LoginRequest,
    LoginResponse, LogoutResponse, MyAttendanceResponse, ProfileResponse, SignupRequest,
    SignupResponse, SubmitLeaveRequest, SubmitLeaveResponse, UpdateProfileRequest,
    attendance_overview, attendance_status, check_in, check_out, create_department, create_review,
    dashboard, decide_leave, get_employee, get_profile, list_departments, list_employees,
    list_leave_requests, list_reviews, login, logout, my_attendance, signup, submit_leave,
    update_profile,
};
use staffline_persistence::Persistence;

/// Staffline Server - HTTP server for the Staffline HR system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer backing every operation.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Query parameters for listing leave requests.
#[derive(Debug, Deserialize)]
struct LeaveListQuery {
    /// Optional status filter (`pending`, `approved`, `rejected`, `all`).
    status: Option<String>,
}

/// Query parameters for listing performance reviews.
#[derive(Debug, Deserialize)]
struct ReviewListQuery {
    /// Optional employee scope (elevated roles only).
    employee_id: Option<i64>,
}

/// Extracts the bearer token from the `Authorization` header.
fn bearer_token(headers: &HeaderMap) -> Result<String, HttpError> {
    let value: &str = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing Authorization header"),
        })?;

    value
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Authorization header must use the Bearer scheme"),
        })
}

/// Validates the request's session token against the store.
fn authenticate(
    persistence: &mut Persistence,
    headers: &HeaderMap,
) -> Result<AuthenticatedUser, HttpError> {
    let token: String = bearer_token(headers)?;
    AuthenticationService::validate_session(persistence, &token)
        .map_err(|e| HttpError::from(ApiError::from(e)))
}

/// Handler for POST /signup endpoint.
async fn handle_signup(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, HttpError> {
    info!(username = %req.username, "Handling signup request");

    let today = OffsetDateTime::now_utc().date();
    let mut persistence = app_state.persistence.lock().await;
    let response: SignupResponse = signup(&mut persistence, &req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /login endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(identifier = %req.identifier, "Handling login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = login(&mut persistence, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /logout endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<LogoutResponse>, HttpError> {
    let token: String = bearer_token(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: LogoutResponse = logout(&mut persistence, &token)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /dashboard endpoint.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<DashboardResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: DashboardResponse = dashboard(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /profile endpoint.
async fn handle_get_profile(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<ProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: ProfileResponse = get_profile(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT /profile endpoint.
async fn handle_update_profile(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(user_id = user.user_id, "Handling update_profile request");
    let response: ProfileResponse = update_profile(&mut persistence, &user, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /employees endpoint.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<ListEmployeesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: ListEmployeesResponse = list_employees(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/employees/{employee_id}` endpoint.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(employee_id): Path<i64>,
) -> Result<Json<EmployeeDetailResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: EmployeeDetailResponse = get_employee(&mut persistence, &user, employee_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /departments endpoint.
async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<ListDepartmentsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: ListDepartmentsResponse = list_departments(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /departments endpoint.
async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<Json<CreateDepartmentResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(user_id = user.user_id, name = %req.name, "Handling create_department request");
    let response: CreateDepartmentResponse = create_department(&mut persistence, &user, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/attendance/check_in` endpoint.
async fn handle_check_in(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CheckInRequest>,
) -> Result<Json<AttendanceActionResponse>, HttpError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(user_id = user.user_id, "Handling check_in request");
    let response: AttendanceActionResponse =
        check_in(&mut persistence, &user, &req, now.date(), now.time())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/attendance/check_out` endpoint.
async fn handle_check_out(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<AttendanceActionResponse>, HttpError> {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(user_id = user.user_id, "Handling check_out request");
    let response: AttendanceActionResponse =
        check_out(&mut persistence, &user, now.date(), now.time())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/attendance/status` endpoint.
async fn handle_attendance_status(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<AttendanceStatusResponse>, HttpError> {
    let today = OffsetDateTime::now_utc().date();
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: AttendanceStatusResponse = attendance_status(&mut persistence, &user, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/attendance/me` endpoint.
async fn handle_my_attendance(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<MyAttendanceResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: MyAttendanceResponse = my_attendance(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/attendance/overview` endpoint.
async fn handle_attendance_overview(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<AttendanceOverviewResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: AttendanceOverviewResponse = attendance_overview(&mut persistence, &user)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /leave endpoint.
async fn handle_submit_leave(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<SubmitLeaveRequest>,
) -> Result<Json<SubmitLeaveResponse>, HttpError> {
    let today = OffsetDateTime::now_utc().date();
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(
        user_id = user.user_id,
        leave_type = %req.leave_type,
        "Handling submit_leave request"
    );
    let response: SubmitLeaveResponse = submit_leave(&mut persistence, &user, &req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /leave endpoint.
async fn handle_list_leave_requests(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<LeaveListQuery>,
) -> Result<Json<ListLeaveRequestsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: ListLeaveRequestsResponse =
        list_leave_requests(&mut persistence, &user, query.status.as_deref())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/leave/{leave_request_id}/decision` endpoint.
async fn handle_decide_leave(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Path(leave_request_id): Path<i64>,
    Json(req): Json<DecideLeaveRequest>,
) -> Result<Json<DecideLeaveResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(
        user_id = user.user_id,
        leave_request_id,
        decision = %req.decision,
        "Handling decide_leave request"
    );
    let response: DecideLeaveResponse =
        decide_leave(&mut persistence, &user, leave_request_id, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET /reviews endpoint.
async fn handle_list_reviews(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Query(query): Query<ReviewListQuery>,
) -> Result<Json<ListReviewsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    let response: ListReviewsResponse =
        list_reviews(&mut persistence, &user, query.employee_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /reviews endpoint.
async fn handle_create_review(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<CreateReviewResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let user: AuthenticatedUser = authenticate(&mut persistence, &headers)?;
    info!(
        user_id = user.user_id,
        employee_id = req.employee_id,
        "Handling create_review request"
    );
    let response: CreateReviewResponse = create_review(&mut persistence, &user, &req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/signup", post(handle_signup))
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/dashboard", get(handle_dashboard))
        .route("/profile", get(handle_get_profile).put(handle_update_profile))
        .route("/employees", get(handle_list_employees))
        .route("/employees/{employee_id}", get(handle_get_employee))
        .route(
            "/departments",
            get(handle_list_departments).post(handle_create_department),
        )
        .route("/attendance/check_in", post(handle_check_in))
        .route("/attendance/check_out", post(handle_check_out))
        .route("/attendance/status", get(handle_attendance_status))
        .route("/attendance/me", get(handle_my_attendance))
        .route("/attendance/overview", get(handle_attendance_overview))
        .route(
            "/leave",
            get(handle_list_leave_requests).post(handle_submit_leave),
        )
        .route("/leave/{leave_request_id}/decision", post(handle_decide_leave))
        .route("/reviews", get(handle_list_reviews).post(handle_create_review))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Staffline Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use serde_json::{Value, json};
    use time::macros::format_description;
    use tower::ServiceExt;

    /// Helper to create test app state with in-memory persistence.
    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    /// Seeds an HR account directly in the store.
    async fn seed_hr_account(app_state: &AppState) {
        let mut persistence = app_state.persistence.lock().await;
        persistence
            .create_account("hboss", None, "correct horse battery", "hr", "2025-01-06")
            .expect("HR account creation should succeed");
    }

    /// Sends a request and returns the status with the parsed JSON body.
    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (HttpStatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        let request: Request<Body> = match body {
            Some(value) => builder
                .header("content-type", "application/json")
                .body(Body::from(value.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Signs up an account and returns a session token for it.
    async fn signup_and_login(app: &Router, username: &str) -> String {
        let (status, _) = send(
            app,
            "POST",
            "/signup",
            None,
            Some(json!({
                "username": username,
                "email": null,
                "password": "sturdy passphrase 7",
                "password_confirmation": "sturdy passphrase 7",
                "role": "employee",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        login_as(app, username, "sturdy passphrase 7").await
    }

    /// Logs in and returns the session token.
    async fn login_as(app: &Router, identifier: &str, password: &str) -> String {
        let (status, body) = send(
            app,
            "POST",
            "/login",
            None,
            Some(json!({ "identifier": identifier, "password": password })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        body["session_token"].as_str().unwrap().to_string()
    }

    /// Formats a date the way the API expects it.
    fn iso_date(date: time::Date) -> String {
        date.format(format_description!("[year]-[month]-[day]"))
            .unwrap()
    }

    #[tokio::test]
    async fn test_signup_login_and_profile_round_trip() {
        let app: Router = build_router(create_test_app_state());

        let token: String = signup_and_login(&app, "jdoe").await;

        let (status, body) = send(&app, "GET", "/profile", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["profile"]["employee_code"], "jdoe");
        assert_eq!(body["profile"]["position"], "Employee");
        assert_eq!(body["profile"]["role"], "employee");
    }

    #[tokio::test]
    async fn test_profile_update_assigns_department() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let token: String = signup_and_login(&app, "jdoe").await;
        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let (status, body) = send(
            &app,
            "POST",
            "/departments",
            Some(&hr_token),
            Some(json!({ "name": "Engineering", "description": "", "manager_id": null })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let department_id = body["department_id"].clone();

        let (status, _) = send(
            &app,
            "PUT",
            "/profile",
            Some(&token),
            Some(json!({
                "email": null,
                "position": "Engineer",
                "department_id": department_id,
                "phone": "555-0101",
                "address": "12 Elm Street",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, body) = send(&app, "GET", "/profile", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["profile"]["position"], "Engineer");
        assert_eq!(body["profile"]["department"], "Engineering");
    }

    #[tokio::test]
    async fn test_requests_without_token_are_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = send(&app, "GET", "/dashboard", None, None).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        signup_and_login(&app, "jdoe").await;

        let (status, _) = send(
            &app,
            "POST",
            "/signup",
            None,
            Some(json!({
                "username": "jdoe",
                "email": null,
                "password": "sturdy passphrase 7",
                "password_confirmation": "sturdy passphrase 7",
                "role": "employee",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_weak_password_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = send(
            &app,
            "POST",
            "/signup",
            None,
            Some(json!({
                "username": "jdoe",
                "email": null,
                "password": "12345678",
                "password_confirmation": "12345678",
                "role": "employee",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_logout_invalidates_the_session() {
        let app: Router = build_router(create_test_app_state());

        let token: String = signup_and_login(&app, "jdoe").await;

        let (status, _) = send(&app, "POST", "/logout", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, _) = send(&app, "GET", "/profile", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_check_in_and_status_flow() {
        let app: Router = build_router(create_test_app_state());

        let token: String = signup_and_login(&app, "jdoe").await;

        let (status, body) = send(
            &app,
            "POST",
            "/attendance/check_in",
            Some(&token),
            Some(json!({ "notes": null })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["record"]["status"], "present");
        assert!(body["warning"].is_null());

        let (status, body) = send(&app, "GET", "/attendance/status", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["phase"], "checked_in");

        let (status, body) = send(&app, "POST", "/attendance/check_out", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert!(body["record"]["working_hours"].is_number());
    }

    #[tokio::test]
    async fn test_check_out_before_check_in_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        let token: String = signup_and_login(&app, "jdoe").await;

        let (status, _) = send(&app, "POST", "/attendance/check_out", Some(&token), None).await;
        assert_eq!(status, HttpStatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_attendance_overview_summarizes_per_employee() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let employee_token: String = signup_and_login(&app, "jdoe").await;
        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let (status, _) = send(
            &app,
            "POST",
            "/attendance/check_in",
            Some(&employee_token),
            Some(json!({ "notes": null })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, _) = send(&app, "GET", "/attendance/overview", Some(&employee_token), None).await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, body) = send(&app, "GET", "/attendance/overview", Some(&hr_token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["total"], 2);
        let summary = body["employees"]
            .as_array()
            .and_then(|list| list.iter().find(|s| s["username"] == "jdoe"))
            .expect("summary for jdoe should be present");
        assert_eq!(summary["total_days"], 1);
        assert_eq!(summary["recent_records"].as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_leave_decision_requires_hr_role() {
        let app: Router = build_router(create_test_app_state());

        let token: String = signup_and_login(&app, "jdoe").await;

        let start: String = iso_date(OffsetDateTime::now_utc().date() + time::Duration::days(7));
        let (status, body) = send(
            &app,
            "POST",
            "/leave",
            Some(&token),
            Some(json!({
                "leave_type": "annual",
                "start_date": start,
                "end_date": start,
                "reason": "family visit",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let leave_request_id = body["leave_request_id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            "POST",
            &format!("/leave/{leave_request_id}/decision"),
            Some(&token),
            Some(json!({ "decision": "approve" })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_hr_can_approve_submitted_leave() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let employee_token: String = signup_and_login(&app, "jdoe").await;
        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let start: String = iso_date(OffsetDateTime::now_utc().date() + time::Duration::days(7));
        let (_, body) = send(
            &app,
            "POST",
            "/leave",
            Some(&employee_token),
            Some(json!({
                "leave_type": "sick",
                "start_date": start,
                "end_date": start,
                "reason": "",
            })),
        )
        .await;
        let leave_request_id = body["leave_request_id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "POST",
            &format!("/leave/{leave_request_id}/decision"),
            Some(&hr_token),
            Some(json!({ "decision": "approve" })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["status"], "approved");

        // The employee sees the decided request.
        let (status, body) = send(&app, "GET", "/leave", Some(&employee_token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["requests"][0]["status"], "approved");
    }

    #[tokio::test]
    async fn test_unknown_leave_request_is_not_found() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let (status, _) = send(
            &app,
            "POST",
            "/leave/9999/decision",
            Some(&hr_token),
            Some(json!({ "decision": "approve" })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_leave_type_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let token: String = signup_and_login(&app, "jdoe").await;

        let start: String = iso_date(OffsetDateTime::now_utc().date() + time::Duration::days(7));
        let (status, _) = send(
            &app,
            "POST",
            "/leave",
            Some(&token),
            Some(json!({
                "leave_type": "sabbatical",
                "start_date": start,
                "end_date": start,
                "reason": "",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_directory_is_forbidden_for_regular_employees() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let employee_token: String = signup_and_login(&app, "jdoe").await;
        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let (status, _) = send(&app, "GET", "/employees", Some(&employee_token), None).await;
        assert_eq!(status, HttpStatusCode::FORBIDDEN);

        let (status, body) = send(&app, "GET", "/employees", Some(&hr_token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["total"], 2);
    }

    #[tokio::test]
    async fn test_dashboard_sections_follow_role() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let employee_token: String = signup_and_login(&app, "jdoe").await;
        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let (status, body) = send(&app, "GET", "/dashboard", Some(&hr_token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["role"], "hr");
        assert!(body["hr"].is_object());
        assert!(body["employee"].is_object());

        let (status, body) = send(&app, "GET", "/dashboard", Some(&employee_token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["role"], "employee");
        assert!(body["hr"].is_null());
        assert!(body["employee"].is_object());
    }

    #[tokio::test]
    async fn test_review_creation_and_visibility() {
        let app_state: AppState = create_test_app_state();
        seed_hr_account(&app_state).await;
        let app: Router = build_router(app_state);

        let employee_token: String = signup_and_login(&app, "jdoe").await;
        let hr_token: String = login_as(&app, "hboss", "correct horse battery").await;

        let (_, profile) = send(&app, "GET", "/profile", Some(&employee_token), None).await;
        let employee_id = profile["profile"]["employee_id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            "POST",
            "/reviews",
            Some(&hr_token),
            Some(json!({
                "employee_id": employee_id,
                "review_date": "2025-06-01",
                "rating": 4,
                "comments": "Solid quarter",
                "goals": "Mentor the new hires",
            })),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, body) = send(&app, "GET", "/reviews", Some(&employee_token), None).await;
        assert_eq!(status, HttpStatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["reviews"][0]["rating"], 4);
    }
}
