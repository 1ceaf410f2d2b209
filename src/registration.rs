//! Session client for the StudentRegistrationSsb portal
//!
//! The portal keeps search state on the server side, so calls must be issued
//! in order: pick a term and mode with [`ZagwebRegistration::change_mode`],
//! then search. Each search resets the server's form before fetching results.

use log::{debug, info};
use serde_json::Value;
use url::form_urlencoded;

use crate::error::{ErrorKind, Result};
use crate::interface::Transport;
use crate::model::dtos::{HttpRequest, RequestOptions, ResponseBody, ResponseType, SearchParams};
use crate::model::structs::{Mode, SortDirection, Term};
use crate::session::Session;

#[cfg(feature = "no-wasm")]
use crate::client::request::ReqwestClient;

pub const DEFAULT_BASE_URL: &str = "https://xe.gonzaga.edu/StudentRegistrationSsb/ssb";

const RESET_FORM_BODY: &str = "resetCourses=true&resetSections=true";
const DEFAULT_PAGE_OFFSET: &str = "0";
const DEFAULT_PAGE_MAX_SIZE: &str = "10";

#[derive(Debug, Clone)]
pub struct ZagwebRegistration<T> {
    transport: T,
    session: Session,
}

#[cfg(feature = "no-wasm")]
impl ZagwebRegistration<ReqwestClient> {
    /// Client against the production portal.
    pub fn new(auth_cookies: impl Into<String>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, auth_cookies)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        auth_cookies: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self::with_transport(
            ReqwestClient::new()?,
            base_url,
            auth_cookies,
        ))
    }
}

impl<T: Transport> ZagwebRegistration<T> {
    pub fn with_transport(
        transport: T,
        base_url: impl Into<String>,
        auth_cookies: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            session: Session::new(base_url, auth_cookies),
        }
    }

    pub fn mode(&self) -> Mode {
        self.session.mode
    }

    pub fn unique_session_id(&self) -> &str {
        &self.session.unique_session_id
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Available terms for the current mode.
    pub async fn get_terms(&self) -> Result<Vec<Term>> {
        let path = format!(
            "/{}/getTerms?offset=1&max=10",
            self.session.mode.terms_segment()
        );
        let body = self
            .make_request(&path, RequestOptions::get(), ResponseType::Json)
            .await?;

        Ok(serde_json::from_value(body.into_json()?)?)
    }

    /// Selects `term` under `mode`. The local mode only changes once the
    /// portal has accepted both the selection page and the term search.
    pub async fn change_mode(&mut self, term: &str, mode: Mode) -> Result<()> {
        self.make_request(
            &format!("/term/termSelection?mode={mode}"),
            RequestOptions::get(),
            ResponseType::Text,
        )
        .await?;

        let form = form_urlencoded::Serializer::new(String::new())
            .append_pair("term", term)
            .append_pair("uniqueSessionId", &self.session.unique_session_id)
            .finish();

        self.make_request(
            &format!("/term/search?mode={mode}"),
            RequestOptions::post_form(form),
            ResponseType::Text,
        )
        .await?;

        info!("mode changed {} -> {mode} for term {term}", self.session.mode);
        self.session.mode = mode;
        Ok(())
    }

    /// Course catalogue search. Pagination defaults to the first ten results
    /// sorted by subject description; anything in `params` overrides that.
    pub async fn get_courses(&self, params: &SearchParams) -> Result<Value> {
        let mut params = params.clone();
        if !params.contains_key("pageOffset") {
            params.set("pageOffset", DEFAULT_PAGE_OFFSET);
        }
        if !params.contains_key("pageMaxSize") {
            params.set("pageMaxSize", DEFAULT_PAGE_MAX_SIZE);
        }

        let defaults = SearchParams::new()
            .with("startDatepicker", "")
            .with("endDatepicker", "")
            .with("uniqueSessionId", self.session.unique_session_id.as_str())
            .sort_column("subjectDescription")
            .sort_direction(SortDirection::Asc);
        let query = params.merged_over(defaults);

        self.reset_form("/courseSearch/resetDataForm").await?;
        self.fetch_json(&format!(
            "/courseSearchResults/courseSearchResults?{}",
            query.to_query_string()
        ))
        .await
    }

    /// Class (section) search. No pagination or sort defaults are applied.
    pub async fn get_classes(&self, params: &SearchParams) -> Result<Value> {
        let defaults = SearchParams::new()
            .with("uniqueSessionId", self.session.unique_session_id.as_str());
        let query = params.merged_over(defaults);

        self.reset_form("/classSearch/resetDataForm").await?;
        self.fetch_json(&format!(
            "/searchResults/searchResults?{}",
            query.to_query_string()
        ))
        .await
    }

    /// Sections of a single course, e.g. `get_course_classes("CPSC121", "202520")`.
    pub async fn get_course_classes(&self, combo_key: &str, term_id: &str) -> Result<Value> {
        let query = SearchParams::new()
            .with("txt_subjectcoursecombo", combo_key)
            .term(term_id)
            .page_offset(DEFAULT_PAGE_OFFSET)
            .page_max_size(DEFAULT_PAGE_MAX_SIZE)
            .sort_column("subjectDescription")
            .sort_direction(SortDirection::Asc);

        self.reset_form("/searchResults/resetDataForm").await?;
        self.fetch_json(&format!(
            "/searchResults/searchResults?{}",
            query.to_query_string()
        ))
        .await
    }

    /// Like [`make_request`](Self::make_request) but takes the response type as
    /// a tag. Unknown tags fail before anything is sent.
    pub async fn make_request_as(
        &self,
        path: &str,
        options: RequestOptions,
        response_type: &str,
    ) -> Result<ResponseBody> {
        let response_type = response_type.parse::<ResponseType>()?;
        self.make_request(path, options, response_type).await
    }

    /// Sends `path` relative to the base URL with the auth cookies attached.
    pub async fn make_request(
        &self,
        path: &str,
        options: RequestOptions,
        response_type: ResponseType,
    ) -> Result<ResponseBody> {
        let url = format!("{}{}", self.session.base_url, path);

        let mut headers = options.headers;
        headers.retain(|(name, _)| !name.eq_ignore_ascii_case("cookie"));
        headers.push(("Cookie".to_string(), self.session.auth_cookies.clone()));

        debug!("{} {}", options.method.as_str(), path);

        let resp = self
            .transport
            .send(HttpRequest {
                method: options.method,
                url: url.clone(),
                headers,
                body: options.body,
            })
            .await?;

        if !resp.is_success() {
            return Err(ErrorKind::HttpStatus {
                status: resp.status,
                url,
            }
            .into());
        }

        match response_type {
            ResponseType::Json => Ok(ResponseBody::Json(serde_json::from_str(&resp.body)?)),
            ResponseType::Text => Ok(ResponseBody::Text(resp.body)),
        }
    }

    async fn reset_form(&self, path: &str) -> Result<()> {
        self.make_request(
            path,
            RequestOptions::post_form(RESET_FORM_BODY),
            ResponseType::Text,
        )
        .await?;
        Ok(())
    }

    async fn fetch_json(&self, path: &str) -> Result<Value> {
        self.make_request(path, RequestOptions::get(), ResponseType::Json)
            .await?
            .into_json()
    }
}
