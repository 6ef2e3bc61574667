mod error;

pub(crate) use error::{ApiError, ApiResult};

use crate::entity::Entity;
use crate::models::{Course, CoursePayload, CourseScope, University, UniversityPayload};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:9999";

pub(crate) const UNIVERSITY_PATH: &str = "/api/university";
pub(crate) const COURSE_PATH: &str = "/api/courses";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::resolve(read_window_api_url(), option_env!("API_BASE_URL"))
    }

    /// Runtime `window.ENV` value, then the build-time `API_BASE_URL`, then the gateway default.
    pub fn resolve(runtime: Option<String>, build_time: Option<&str>) -> Self {
        let api_url = runtime
            .filter(|s| !s.trim().is_empty())
            .or_else(|| build_time.map(str::to_string).filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

// We accept both `window.ENV.API_URL` and `window.ENV.api_url`.
fn read_window_api_url() -> Option<String> {
    let env = web_sys::window()?.get("ENV")?;
    if env.is_undefined() || !env.is_object() {
        return None;
    }

    ["API_URL", "api_url"].into_iter().find_map(|key| {
        js_sys::Reflect::get(&env, &key.into())
            .ok()
            .and_then(|v| v.as_string())
    })
}

/// Unwraps a list body: bare array, `{ "data": [...] }`, or nothing at all.
/// Any falsy body (`null`, `false`, `0`, `""`) counts as an empty list.
pub(crate) fn parse_list_response<T: DeserializeOwned>(
    data: serde_json::Value,
) -> ApiResult<Vec<T>> {
    match data {
        serde_json::Value::Null | serde_json::Value::Bool(false) => Ok(Vec::new()),
        serde_json::Value::Number(ref n) if n.as_f64() == Some(0.0) => Ok(Vec::new()),
        serde_json::Value::String(ref s) if s.is_empty() => Ok(Vec::new()),
        serde_json::Value::Array(_) => serde_json::from_value(data).map_err(ApiError::parse),
        serde_json::Value::Object(mut obj) => match obj.remove("data") {
            Some(inner) => parse_list_response(inner),
            None => Err(ApiError::parse("expected a list of records")),
        },
        other => Err(ApiError::parse(format!("expected a list, got {other}"))),
    }
}

/// Unwraps a single-record body, with or without a `data` envelope.
pub(crate) fn parse_record_response<T: DeserializeOwned>(
    data: serde_json::Value,
) -> ApiResult<T> {
    let inner = match data {
        serde_json::Value::Object(mut obj) if obj.get("data").is_some_and(|d| d.is_object()) => {
            obj.remove("data").unwrap_or_default()
        }
        other => other,
    };
    if inner.is_null() {
        return Err(ApiError::parse("empty response"));
    }
    serde_json::from_value(inner).map_err(ApiError::parse)
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_browser_credentials(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        #[cfg(target_arch = "wasm32")]
        let req = req.fetch_credentials_include();
        req
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> ApiResult<serde_json::Value> {
        let client = reqwest::Client::new();
        let url = self.url(path);
        tracing::debug!(%method, %url, "api request");

        let mut req = client
            .request(method.clone(), &url)
            .header("Content-Type", "application/json");
        req = Self::with_browser_credentials(req);

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "api request did not complete");
            ApiError::network(e)
        })?;

        let status = res.status();
        let text = res.text().await.map_err(ApiError::network)?;

        if !status.is_success() {
            tracing::warn!(%method, %url, status = status.as_u16(), "api request rejected");
            return Err(ApiError::http(status.as_u16(), text));
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(ApiError::parse)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Vec<T>> {
        let data = self.request(Method::GET, path, None::<&()>).await?;
        parse_list_response(data)
    }

    async fn get_record<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let data = self.request(Method::GET, path, None::<&()>).await?;
        parse_record_response(data)
    }

    async fn send_body(&self, method: Method, path: &str, body: &impl Serialize) -> ApiResult<()> {
        self.request(method, path, Some(body)).await.map(|_| ())
    }

    async fn delete_at(&self, path: &str) -> ApiResult<()> {
        self.request(Method::DELETE, path, None::<&()>).await.map(|_| ())
    }

    // Universities

    pub async fn list_universities(&self) -> ApiResult<Vec<University>> {
        self.get_list(UNIVERSITY_PATH).await
    }

    pub async fn get_university(&self, id: i64) -> ApiResult<University> {
        self.get_record(&format!("{UNIVERSITY_PATH}/{id}")).await
    }

    pub async fn create_university(&self, payload: &UniversityPayload) -> ApiResult<()> {
        self.send_body(Method::POST, UNIVERSITY_PATH, payload).await
    }

    pub async fn update_university(&self, id: i64, payload: &UniversityPayload) -> ApiResult<()> {
        self.send_body(Method::PUT, &format!("{UNIVERSITY_PATH}/{id}"), payload)
            .await
    }

    pub async fn delete_university(&self, id: i64) -> ApiResult<()> {
        self.delete_at(&format!("{UNIVERSITY_PATH}/{id}")).await
    }

    // Courses

    pub async fn list_courses(&self) -> ApiResult<Vec<Course>> {
        self.get_list(COURSE_PATH).await
    }

    pub async fn get_course(&self, id: i64) -> ApiResult<Course> {
        self.get_record(&format!("{COURSE_PATH}/{id}")).await
    }

    pub async fn list_courses_by_university(&self, university_id: i64) -> ApiResult<Vec<Course>> {
        self.get_list(&format!("{COURSE_PATH}/university/{university_id}"))
            .await
    }

    pub async fn list_courses_by_department(&self, department: &str) -> ApiResult<Vec<Course>> {
        self.get_list(&Self::department_path(department)).await
    }

    pub async fn list_active_courses(&self) -> ApiResult<Vec<Course>> {
        self.get_list(&format!("{COURSE_PATH}/active")).await
    }

    pub async fn create_course(&self, payload: &CoursePayload) -> ApiResult<()> {
        self.send_body(Method::POST, COURSE_PATH, payload).await
    }

    pub async fn update_course(&self, id: i64, payload: &CoursePayload) -> ApiResult<()> {
        self.send_body(Method::PUT, &format!("{COURSE_PATH}/{id}"), payload)
            .await
    }

    pub async fn delete_course(&self, id: i64) -> ApiResult<()> {
        self.delete_at(&format!("{COURSE_PATH}/{id}")).await
    }

    pub(crate) fn department_path(department: &str) -> String {
        format!(
            "{COURSE_PATH}/department/{}",
            urlencoding::encode(department.trim())
        )
    }
}

/// The slice of the REST surface a list view needs, per entity.
///
/// Views talk to this rather than to `ApiClient` directly so the controller
/// can run against an in-memory fake.
pub(crate) trait EntityApi<E: Entity> {
    async fn list(&self, scope: &E::Scope) -> ApiResult<Vec<E>>;

    /// Cross-reference collection used only for display lookups.
    async fn related(&self) -> ApiResult<E::Related>;

    async fn get(&self, id: i64) -> ApiResult<E>;

    async fn create(&self, payload: &E::Payload) -> ApiResult<()>;

    async fn update(&self, id: i64, payload: &E::Payload) -> ApiResult<()>;

    async fn delete(&self, id: i64) -> ApiResult<()>;
}

impl EntityApi<Course> for ApiClient {
    async fn list(&self, scope: &CourseScope) -> ApiResult<Vec<Course>> {
        match scope {
            CourseScope::All => self.list_courses().await,
            CourseScope::Active => self.list_active_courses().await,
            CourseScope::University(id) => self.list_courses_by_university(*id).await,
            CourseScope::Department(name) => self.list_courses_by_department(name).await,
        }
    }

    async fn related(&self) -> ApiResult<Vec<University>> {
        self.list_universities().await
    }

    async fn get(&self, id: i64) -> ApiResult<Course> {
        self.get_course(id).await
    }

    async fn create(&self, payload: &CoursePayload) -> ApiResult<()> {
        self.create_course(payload).await
    }

    async fn update(&self, id: i64, payload: &CoursePayload) -> ApiResult<()> {
        self.update_course(id, payload).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.delete_course(id).await
    }
}

impl EntityApi<University> for ApiClient {
    async fn list(&self, _scope: &()) -> ApiResult<Vec<University>> {
        self.list_universities().await
    }

    async fn related(&self) -> ApiResult<()> {
        Ok(())
    }

    async fn get(&self, id: i64) -> ApiResult<University> {
        self.get_university(id).await
    }

    async fn create(&self, payload: &UniversityPayload) -> ApiResult<()> {
        self.create_university(payload).await
    }

    async fn update(&self, id: i64, payload: &UniversityPayload) -> ApiResult<()> {
        self.update_university(id, payload).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.delete_university(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn env_config_prefers_runtime_then_build_time_then_default() {
        let runtime = EnvConfig::resolve(Some("https://api.example.edu/".into()), Some("x"));
        assert_eq!(runtime.api_url, "https://api.example.edu");

        let build = EnvConfig::resolve(None, Some("http://gateway:8080"));
        assert_eq!(build.api_url, "http://gateway:8080");

        let blank = EnvConfig::resolve(Some("  ".into()), None);
        assert_eq!(blank.api_url, "http://localhost:9999");
    }

    #[test]
    fn api_client_new_strips_trailing_slash() {
        let client = ApiClient::new("http://localhost:9999/".to_string());
        assert_eq!(client.base_url, "http://localhost:9999");
        assert_eq!(
            client.url(UNIVERSITY_PATH),
            "http://localhost:9999/api/university"
        );
    }

    #[test]
    fn department_path_is_percent_encoded() {
        assert_eq!(
            ApiClient::department_path("Computer Science"),
            "/api/courses/department/Computer%20Science"
        );
        assert_eq!(
            ApiClient::department_path("R&D/Labs"),
            "/api/courses/department/R%26D%2FLabs"
        );
    }

    #[test]
    fn list_response_accepts_bare_array_and_data_envelope() {
        let bare: Vec<University> =
            parse_list_response(json!([{"id": 1, "name": "A", "location": "X"}]))
                .expect("bare array should parse");
        assert_eq!(bare.len(), 1);

        let wrapped: Vec<University> = parse_list_response(json!({
            "data": [{"id": 1, "name": "A", "location": "X"}, {"id": 2, "name": "B", "location": "Y"}]
        }))
        .expect("envelope should parse");
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[1].name, "B");
    }

    #[test]
    fn list_response_treats_missing_body_as_empty() {
        let none: Vec<Course> = parse_list_response(serde_json::Value::Null).expect("null");
        assert!(none.is_empty());

        let null_data: Vec<Course> =
            parse_list_response(json!({ "data": null })).expect("null data");
        assert!(null_data.is_empty());

        for falsy in [json!(false), json!(0), json!(0.0), json!("")] {
            let list: Vec<Course> = parse_list_response(falsy.clone()).expect("falsy body");
            assert!(list.is_empty(), "{falsy} should be an empty list");
        }
    }

    #[test]
    fn list_response_rejects_scalars() {
        let err = parse_list_response::<Course>(json!("nope")).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn record_response_unwraps_optional_envelope() {
        let plain: University =
            parse_record_response(json!({"id": 3, "name": "C", "location": "Z"})).expect("plain");
        assert_eq!(plain.id, 3);

        let wrapped: Course =
            parse_record_response(json!({"data": {"id": 9, "title": "Algebra"}})).expect("wrapped");
        assert_eq!(wrapped.title.as_deref(), Some("Algebra"));

        assert!(parse_record_response::<Course>(serde_json::Value::Null).is_err());
    }
}
