use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zagweb_core::{ErrorKind, Mode, SearchParams, ZagwebRegistration};

const COOKIES: &str = "JSESSIONID=0123ABCD; X-Oracle-BMC-LBS-Route=9f8e7d;";
const RESET_BODY: &str = "resetCourses=true&resetSections=true";

async fn portal() -> MockServer {
    MockServer::start().await
}

#[tokio::test]
async fn terms_are_fetched_with_auth_cookie() {
    let server = portal().await;
    Mock::given(method("GET"))
        .and(path("/classSearch/getTerms"))
        .and(query_param("offset", "1"))
        .and(query_param("max", "10"))
        .and(header("Cookie", COOKIES))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"code": "202520", "description": "Spring 2025"},
            {"code": "202510", "description": "Fall 2024"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let zag = ZagwebRegistration::with_base_url(server.uri(), COOKIES).unwrap();
    let terms = zag.get_terms().await.unwrap();

    assert_eq!(terms.len(), 2);
    assert_eq!(terms[1].code, "202510");
}

#[tokio::test]
async fn full_search_workflow() {
    let server = portal().await;

    Mock::given(method("GET"))
        .and(path("/term/termSelection"))
        .and(query_param("mode", "search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/term/search"))
        .and(query_param("mode", "search"))
        .and(header(
            "Content-Type",
            "application/x-www-form-urlencoded; charset=UTF-8",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"fwdURL": "/classSearch/classSearch"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/courseSearch/resetDataForm"))
        .and(body_string(RESET_BODY))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/courseSearchResults/courseSearchResults"))
        .and(query_param("txt_subject", "CPSC"))
        .and(query_param("pageOffset", "0"))
        .and(query_param("pageMaxSize", "100"))
        .and(query_param("sortDirection", "asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "totalCount": 1,
            "data": [{"courseNumber": "121", "courseTitle": "Computer Science I"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut zag = ZagwebRegistration::with_base_url(server.uri(), COOKIES).unwrap();
    zag.change_mode("202520", Mode::Search).await.unwrap();

    let courses = zag
        .get_courses(
            &SearchParams::new()
                .term("202520")
                .subject("CPSC")
                .page_max_size("100"),
        )
        .await
        .unwrap();
    assert_eq!(courses["data"][0]["courseNumber"], "121");

    let received = server.received_requests().await.unwrap();
    let term_search = received
        .iter()
        .find(|r| r.url.path() == "/term/search")
        .unwrap();
    assert_eq!(
        String::from_utf8_lossy(&term_search.body),
        format!("term=202520&uniqueSessionId={}", zag.unique_session_id())
    );
}

#[tokio::test]
async fn course_classes_hit_exact_query() {
    let server = portal().await;
    Mock::given(method("POST"))
        .and(path("/searchResults/resetDataForm"))
        .and(body_string(RESET_BODY))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/searchResults/searchResults"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let zag = ZagwebRegistration::with_base_url(server.uri(), COOKIES).unwrap();
    zag.get_course_classes("CPSC121", "202520").await.unwrap();

    let received = server.received_requests().await.unwrap();
    let search = received
        .iter()
        .find(|r| r.url.path() == "/searchResults/searchResults")
        .unwrap();
    assert_eq!(
        search.url.query(),
        Some(
            "txt_subjectcoursecombo=CPSC121&txt_term=202520&pageOffset=0&pageMaxSize=10&sortColumn=subjectDescription&sortDirection=asc"
        )
    );
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = portal().await;
    Mock::given(method("GET"))
        .and(path("/term/termSelection"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let mut zag = ZagwebRegistration::with_base_url(server.uri(), "").unwrap();
    let err = zag.change_mode("202520", Mode::Registration).await.unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::HttpStatus { status: 401, .. }));
    assert_eq!(zag.mode(), Mode::Search);
}

#[tokio::test]
async fn login_page_instead_of_json_is_a_decode_error() {
    let server = portal().await;
    Mock::given(method("GET"))
        .and(path("/classSearch/getTerms"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Sign in</html>"))
        .mount(&server)
        .await;

    let zag = ZagwebRegistration::with_base_url(server.uri(), COOKIES).unwrap();
    let err = zag.get_terms().await.unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::SerdeJsonError(_)));
}
