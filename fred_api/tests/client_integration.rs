use fred_api::types::{CalendarDate, Frequency, SeasonalAdjustment, TagGroup, UnitType};
use fred_api::{
    CategoryChildrenRequest, CategoryRequest, Client, Dated, Error, ErrorKind, Paged,
    ResponseFormat, SeriesObservationsRequest, SeriesRequest, SeriesSearchRequest,
    SeriesTagsRequest, SeriesUpdatesRequest,
};
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "abcdefghijklmnopqrstuvwxyz012345";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client(server: &MockServer, format: ResponseFormat) -> Client {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    Client::with_base_url(&server.uri(), KEY, format).unwrap()
}

async fn mount(server: &MockServer, route: &str, status: u16, fixture: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(load_fixture(fixture)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn category_json() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category"))
        .and(query_param("category_id", "125"))
        .and(query_param("api_key", KEY))
        .and(query_param("file_type", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("category.json")))
        .mount(&mock_server)
        .await;

    let category = client(&mock_server, ResponseFormat::Json)
        .category(&CategoryRequest::new(125))
        .await
        .unwrap();
    assert_eq!(category.id, 125);
    assert_eq!(category.name, "Trade Balance");
    assert_eq!(category.parent_id, 13);
}

#[tokio::test]
async fn category_xml() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category"))
        .and(query_param("file_type", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("category.xml")))
        .mount(&mock_server)
        .await;

    let category = client(&mock_server, ResponseFormat::Xml)
        .category(&CategoryRequest::new(125))
        .await
        .unwrap();
    assert_eq!(category.name, "Trade Balance");
}

#[tokio::test]
async fn category_empty_list_is_unexpected_count() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/category", 200, "category_empty.json").await;

    let err = client(&mock_server, ResponseFormat::Json)
        .category(&CategoryRequest::new(125))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedCount);
    assert!(err.to_string().contains("empty"));
    assert!(err.to_string().starts_with("error getting category 125: "));
}

#[tokio::test]
async fn category_children() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/category/children"))
        .and(query_param("category_id", "13"))
        .and(query_param("realtime_start", "2013-08-14"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("category_children.json")),
        )
        .mount(&mock_server)
        .await;

    let request = CategoryChildrenRequest::new(13)
        .with_realtime_start(CalendarDate::from_ymd(2013, 8, 14).unwrap());
    let children = client(&mock_server, ResponseFormat::Json)
        .category_children(&request)
        .await
        .unwrap();
    assert_eq!(children.len(), 4);
    assert_eq!(children[2].name, "Income Payments & Receipts");
}

#[tokio::test]
async fn series_json_and_xml_agree() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series"))
        .and(query_param("file_type", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("series.json")))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/series"))
        .and(query_param("file_type", "xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("series.xml")))
        .mount(&mock_server)
        .await;

    let request = SeriesRequest::new("GNPCA");
    let from_json = client(&mock_server, ResponseFormat::Json)
        .series(&request)
        .await
        .unwrap();
    let from_xml = client(&mock_server, ResponseFormat::Xml)
        .series(&request)
        .await
        .unwrap();
    assert_eq!(from_json, from_xml);
    assert_eq!(from_json.id, "GNPCA");
    assert_eq!(from_json.frequency, Frequency::Annual);
    assert_eq!(from_json.seasonal_adjustment, SeasonalAdjustment::NotAdjusted);
    assert_eq!(from_json.last_updated.to_string(), "2013-07-31 09:26:16-05");
    assert_eq!(from_json.notes.as_deref(), Some("BEA Account Code: A001RX1"));
}

#[tokio::test]
async fn series_with_two_entries_is_unexpected_count() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series", 200, "series_duplicate.json").await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series(&SeriesRequest::new("GNPCA"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedCount);
    assert_eq!(
        err.to_string(),
        "error getting series GNPCA: expected only a single series, received 2"
    );
}

#[tokio::test]
async fn series_bad_request_json() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series", 400, "error_400.json").await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series(&SeriesRequest::new("NOPE"))
        .await
        .unwrap_err();
    match err {
        Error::InvalidRequest { message, reason } => {
            assert_eq!(reason, "Bad Request. The series does not exist.");
            assert_eq!(
                message,
                "error getting series NOPE: invalid series request: Bad Request. The series does not exist."
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn series_bad_request_xml() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series", 400, "error_400.xml").await;

    let err = client(&mock_server, ResponseFormat::Xml)
        .series(&SeriesRequest::new("NOPE"))
        .await
        .unwrap_err();
    match err {
        Error::InvalidRequest { reason, .. } => {
            assert_eq!(reason, "Bad Request. The series does not exist.")
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn not_found() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/tags"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series_tags(&SeriesTagsRequest::new("STLFSI"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "error getting tags of series STLFSI: could not find series tags: 404"
    );
}

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn failed_status_logs_one_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/tags"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .mount(&mock_server)
        .await;

    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(log.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::ERROR)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = Client::with_base_url(&mock_server.uri(), KEY, ResponseFormat::Json).unwrap();
    let err = client
        .series_tags(&SeriesTagsRequest::new("STLFSI"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
    let errors: Vec<&str> = output
        .lines()
        .filter(|line| line.contains("ERROR") && line.contains("fred_api"))
        .collect();
    assert_eq!(errors.len(), 1, "{}", output);
    assert!(errors[0].contains("series tags not found"));
}

#[tokio::test]
async fn server_error_with_envelope() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string(
            r#"{"error_code":500,"error_message":"Internal Server Error"}"#,
        ))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series_search(&SeriesSearchRequest::new("gdp"))
        .await
        .unwrap_err();
    match err {
        Error::UnknownServer { status, code, .. } => {
            assert_eq!(status, 500);
            assert_eq!(code, 500);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn server_error_without_envelope_is_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/search"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series_search(&SeriesSearchRequest::new("gdp"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series_search(&SeriesSearchRequest::new("gdp"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
    assert!(err.to_string().starts_with("error searching series 'gdp': "));
}

#[tokio::test]
async fn series_search_page() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/search"))
        .and(query_param("search_text", "monetary service index"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("series_search.json")))
        .mount(&mock_server)
        .await;

    let page = client(&mock_server, ResponseFormat::Json)
        .series_search(&SeriesSearchRequest::new("monetary service index").with_limit(2))
        .await
        .unwrap();
    assert_eq!(page.count, 32);
    assert_eq!(page.series.len(), 2);
    assert_eq!(page.series[0].frequency, Frequency::Monthly);
    assert!(page.series[1].notes.is_none());
}

#[tokio::test]
async fn series_updates_xml() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/series/updates"))
        .and(query_param("filter_value", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("series_updates.xml")))
        .mount(&mock_server)
        .await;

    let page = client(&mock_server, ResponseFormat::Xml)
        .series_updates(&SeriesUpdatesRequest::default())
        .await
        .unwrap();
    assert_eq!(page.filter_variable.as_deref(), Some("geography"));
    assert_eq!(page.series.len(), 1);
    assert_eq!(
        page.series[0].title,
        "Producer Price Index: Intermediate Materials: Supplies & Components"
    );
}

#[tokio::test]
async fn observations_keep_missing_points() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series/observations", 200, "series_observations.json").await;

    let page = client(&mock_server, ResponseFormat::Json)
        .series_observations(&SeriesObservationsRequest::new("GNPCA"))
        .await
        .unwrap();
    assert_eq!(page.units, UnitType::Linear);
    assert_eq!(page.observations.len(), 3);
    assert!(!page.observations[1].valid);
    let values: Vec<f64> = page.valid_observations().map(|o| o.value).collect();
    assert_eq!(values, vec![1065.9, 913.4]);
}

#[tokio::test]
async fn observations_xml() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series/observations", 200, "series_observations.xml").await;

    let page = client(&mock_server, ResponseFormat::Xml)
        .series_observations(&SeriesObservationsRequest::new("GNPCA"))
        .await
        .unwrap();
    assert_eq!(page.count, 3);
    assert_eq!(page.valid_observations().count(), 2);
    assert_eq!(
        page.observations[2].date,
        CalendarDate::from_ymd(1931, 1, 1).unwrap()
    );
}

#[tokio::test]
async fn series_tags_xml() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series/tags", 200, "tags.xml").await;

    let page = client(&mock_server, ResponseFormat::Xml)
        .series_tags(&SeriesTagsRequest::new("STLFSI"))
        .await
        .unwrap();
    assert_eq!(page.tags.len(), 2);
    assert_eq!(page.tags[0].group_id, TagGroup::GeographyType);
    assert_eq!(page.tags[1].series_count, 360);
}

#[tokio::test]
async fn unknown_tag_group_fails() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/series/tags", 200, "tags_bad_group.json").await;

    let err = client(&mock_server, ResponseFormat::Json)
        .series_tags(&SeriesTagsRequest::new("STLFSI"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    let client = Client::with_base_url("http://127.0.0.1:1", KEY, ResponseFormat::Json).unwrap();
    let err = client
        .category(&CategoryRequest::new(125))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(err.to_string().starts_with("error getting category 125: failed to get category"));
}
