//! Integration tests for OpenWeatherProvider using wiremock.

use dashboard_core::{
    ClientConfig, Condition, LookupError, OpenWeatherProvider, Unit, WeatherProvider,
    WeatherRequest,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn austin_body() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": -97.7431, "lat": 30.2672 },
        "weather": [{ "id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d" }],
        "base": "stations",
        "main": {
            "temp": 22.4,
            "feels_like": 21.6,
            "temp_min": 20.1,
            "temp_max": 24.0,
            "pressure": 1013,
            "humidity": 65
        },
        "visibility": 10000,
        "wind": { "speed": 3.6, "deg": 180 },
        "dt": 1705329000,
        "sys": { "country": "US", "sunrise": 1705324920, "sunset": 1705363200 },
        "timezone": -21600,
        "id": 4671654,
        "name": "Austin",
        "cod": 200
    })
}

fn provider_for(server: &MockServer) -> OpenWeatherProvider {
    OpenWeatherProvider::new(ClientConfig {
        api_key: "TEST_KEY".to_string(),
        base_url: server.uri(),
    })
}

fn request(city: &str, unit: Unit) -> WeatherRequest {
    WeatherRequest { city: city.to_string(), unit }
}

#[tokio::test]
async fn test_current_weather_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Austin"))
        .and(query_param("appid", "TEST_KEY"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let report = provider.get_weather(&request("Austin", Unit::Metric)).await.unwrap();

    assert_eq!(report.location_name, "Austin");
    assert_eq!(report.country, "US");
    assert_eq!(report.temperature, 22.4);
    assert_eq!(report.humidity_pct, 65);
    assert_eq!(report.pressure_hpa, 1013);
    assert_eq!(report.condition(), Condition::Clouds);
    assert_eq!(report.description, "broken clouds");
    assert_eq!(report.visibility_m, Some(10_000.0));
    assert_eq!(report.sunrise, 1_705_324_920);
    assert_eq!(report.unit, Unit::Metric);
}

#[tokio::test]
async fn test_imperial_units_are_requested() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("units", "imperial"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let report = provider.get_weather(&request("Austin", Unit::Imperial)).await.unwrap();

    assert_eq!(report.unit, Unit::Imperial);
}

#[tokio::test]
async fn test_city_with_spaces_is_encoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    assert!(provider.get_weather(&request("New York", Unit::Metric)).await.is_ok());
}

#[tokio::test]
async fn test_unknown_city_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.get_weather(&request("Atlantis", Unit::Metric)).await.unwrap_err();

    match err {
        LookupError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("city not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_key_is_status_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid API key"))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.get_weather(&request("Austin", Unit::Metric)).await.unwrap_err();

    assert!(matches!(err, LookupError::Status { status: 401, .. }));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "Austin" })),
        )
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let err = provider.get_weather(&request("Austin", Unit::Metric)).await.unwrap_err();

    assert!(matches!(err, LookupError::Parse(_)));
}

#[tokio::test]
async fn test_missing_optional_fields() {
    let mock_server = MockServer::start().await;

    let mut body = austin_body();
    let obj = body.as_object_mut().unwrap();
    obj.remove("visibility");
    obj.insert("weather".into(), serde_json::json!([]));

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let provider = provider_for(&mock_server);
    let report = provider.get_weather(&request("Austin", Unit::Metric)).await.unwrap();

    assert_eq!(report.visibility_m, None);
    assert_eq!(report.condition(), Condition::Unrecognized);
}

#[tokio::test]
async fn test_unreachable_server_is_request_error() {
    let mock_server = MockServer::start().await;
    let provider = provider_for(&mock_server);
    drop(mock_server);

    let err = provider.get_weather(&request("Austin", Unit::Metric)).await.unwrap_err();

    assert!(matches!(err, LookupError::Request(_)));
}
