use fred_api::types::{
    CalendarDate, CategoryList, Frequency, ObservationPage, OrderBy, SeasonalAdjustment,
    SeriesList, SeriesPage, SortOrder, TagGroup, TagPage, Timestamp, UnitType,
};
use fred_api::{decode_body, single, ErrorKind, ResponseFormat};
use serde::{Deserialize, Serialize};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::from_ymd(y, m, d).unwrap()
}

#[test]
fn deserialize_category_list_both_formats() {
    let json: CategoryList = serde_json::from_str(&load_fixture("category.json")).unwrap();
    let xml: CategoryList =
        decode_body(load_fixture("category.xml").as_bytes(), ResponseFormat::Xml).unwrap();
    assert_eq!(json, xml);
    assert_eq!(json.categories.len(), 1);
}

#[test]
fn deserialize_series_list() {
    let resp: SeriesList = serde_json::from_str(&load_fixture("series.json")).unwrap();
    assert_eq!(resp.realtime_start, date(2013, 8, 14));
    let series = single(resp).unwrap();
    assert_eq!(series.title, "Real Gross National Product");
    assert_eq!(series.observation_start, date(1929, 1, 1));
    assert_eq!(series.observation_end, date(2012, 1, 1));
    assert_eq!(series.units_short, "Bil. of Chn. 2009 $");
    assert_eq!(series.popularity, 39);
    assert!(!series.seasonal_adjustment.is_adjusted());
}

#[test]
fn deserialize_series_page() {
    let resp: SeriesPage = serde_json::from_str(&load_fixture("series_search.json")).unwrap();
    assert_eq!(resp.order_by, OrderBy::SearchRank);
    assert_eq!(resp.sort_order, SortOrder::Descending);
    assert_eq!(resp.count, 32);
    assert_eq!(resp.offset, 0);
    assert_eq!(resp.limit, 2);
    assert!(resp.filter_variable.is_none());
    assert_eq!(resp.series[1].id, "AMBSL");
    assert_eq!(resp.series[1].seasonal_adjustment, SeasonalAdjustment::Adjusted);
}

#[test]
fn deserialize_series_updates_xml() {
    let resp: SeriesPage =
        decode_body(load_fixture("series_updates.xml").as_bytes(), ResponseFormat::Xml).unwrap();
    assert_eq!(resp.filter_value.as_deref(), Some("macro"));
    assert_eq!(resp.order_by, OrderBy::LastUpdated);
    assert_eq!(resp.limit, 100);
    assert_eq!(resp.series[0].frequency, Frequency::Monthly);
    assert!(resp.series[0].notes.is_none());
}

#[test]
fn deserialize_observations_both_formats() {
    let json: ObservationPage =
        serde_json::from_str(&load_fixture("series_observations.json")).unwrap();
    let xml: ObservationPage = decode_body(
        load_fixture("series_observations.xml").as_bytes(),
        ResponseFormat::Xml,
    )
    .unwrap();
    assert_eq!(json, xml);
    assert_eq!(json.units, UnitType::Linear);
    assert_eq!(json.observation_end, date(9999, 12, 31));
    assert_eq!(json.limit, 100000);

    let missing = &json.observations[1];
    assert!(!missing.valid);
    assert_eq!(missing.value(), None);
    assert_eq!(json.observations[0].value(), Some(1065.9));
}

#[test]
fn invalid_observation_fails_the_page() {
    let body = load_fixture("series_observations.json").replace("913.4", "n/a");
    let err = decode_body::<ObservationPage>(body.as_bytes(), ResponseFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn deserialize_tags_both_formats() {
    let json: TagPage = serde_json::from_str(&load_fixture("tags.json")).unwrap();
    let xml: TagPage =
        decode_body(load_fixture("tags.xml").as_bytes(), ResponseFormat::Xml).unwrap();
    assert_eq!(json, xml);
    assert_eq!(json.order_by, OrderBy::SeriesCount);
    let usa = &json.tags[1];
    assert_eq!(usa.name, "usa");
    assert_eq!(usa.group_id, TagGroup::Geography);
    assert_eq!(usa.notes.as_deref(), Some("United States of America"));
    assert_eq!(usa.created.to_string(), "2012-02-27 10:18:19-06");
}

#[test]
fn unknown_tag_group_fails_in_both_formats() {
    let json = decode_body::<TagPage>(
        load_fixture("tags_bad_group.json").as_bytes(),
        ResponseFormat::Json,
    );
    assert_eq!(json.unwrap_err().kind(), ErrorKind::Parse);

    let xml = load_fixture("tags.xml").replace("group_id=\"geot\"", "group_id=\"planet\"");
    let xml = decode_body::<TagPage>(xml.as_bytes(), ResponseFormat::Xml);
    assert_eq!(xml.unwrap_err().kind(), ErrorKind::Parse);
}

#[test]
fn series_round_trips_through_json() {
    let resp: SeriesList = serde_json::from_str(&load_fixture("series.json")).unwrap();
    let encoded = serde_json::to_string(&resp).unwrap();
    assert!(encoded.contains(r#""frequency":"Annual""#));
    assert!(encoded.contains(r#""seasonal_adjustment":"Not Seasonally Adjusted""#));
    assert!(encoded.contains(r#""last_updated":"2013-07-31 09:26:16-05""#));
    let back: SeriesList = serde_json::from_str(&encoded).unwrap();
    assert_eq!(back, resp);
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct DatedElements {
    date: CalendarDate,
    updated: Timestamp,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct DatedAttributes {
    #[serde(rename = "@date")]
    date: CalendarDate,
    #[serde(rename = "@updated")]
    updated: Timestamp,
}

#[test]
fn dates_round_trip_through_xml_elements() {
    let value = DatedElements {
        date: date(2013, 8, 14),
        updated: "2013-07-31 09:26:16-05".parse().unwrap(),
    };
    let xml = quick_xml::se::to_string_with_root("dated", &value).unwrap();
    assert_eq!(
        xml,
        "<dated><date>2013-08-14</date><updated>2013-07-31 09:26:16-05</updated></dated>"
    );
    let back: DatedElements = decode_body(xml.as_bytes(), ResponseFormat::Xml).unwrap();
    assert_eq!(back, value);
}

#[test]
fn dates_round_trip_through_xml_attributes() {
    let value = DatedAttributes {
        date: date(1929, 1, 1),
        updated: "2020-01-02 00:00:01+09".parse().unwrap(),
    };
    let xml = quick_xml::se::to_string_with_root("dated", &value).unwrap();
    assert!(xml.contains(r#"date="1929-01-01""#));
    assert!(xml.contains(r#"updated="2020-01-02 00:00:01+09""#));
    let back: DatedAttributes = decode_body(xml.as_bytes(), ResponseFormat::Xml).unwrap();
    assert_eq!(back, value);
}
