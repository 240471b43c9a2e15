use serde::{Deserialize, Serialize};
use url::Url;

use super::error::AppError;

/// JSON body POSTed to the rendering service's `/template` endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRequest {
    pub chart_url: String,
    pub values: serde_json::Value,
}

/// JSON body returned by the rendering service.
///
/// `values` carries the chart's default values as YAML text and is omitted
/// by the server when the chart ships none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateResponse {
    pub templates: String,
    #[serde(default)]
    pub values: String,
    pub values_exist: bool,
}

/// Validate a user-entered chart URL.
///
/// The URL must parse and its path must end with `.tgz` (a packaged chart).
/// Query strings and fragments are not part of the path, so
/// `https://host/chart.tgz?token=x` passes.
pub fn validate_chart_url(input: &str) -> Result<Url, AppError> {
    let url = Url::parse(input).map_err(|_| AppError::InvalidChartUrl)?;
    if !url.path().ends_with(".tgz") {
        return Err(AppError::ChartUrlNotTgz);
    }
    Ok(url)
}

/// Parse the values editor's text into the JSON value sent to the service.
///
/// Empty or whitespace-only input means "no overrides" and becomes `{}`.
pub fn parse_values(text: &str) -> Result<serde_json::Value, serde_yaml::Error> {
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    serde_yaml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_chart_url() {
        let url = validate_chart_url("https://charts.example.com/nginx-1.2.3.tgz").unwrap();
        assert_eq!(url.path(), "/nginx-1.2.3.tgz");
    }

    #[test]
    fn test_chart_url_with_query_string() {
        // The suffix check applies to the path, not the full URL
        validate_chart_url("https://charts.example.com/nginx.tgz?token=abc").unwrap();
    }

    #[test]
    fn test_chart_url_wrong_suffix() {
        let err = validate_chart_url("https://charts.example.com/nginx-1.2.3.tar.gz").unwrap_err();
        assert!(matches!(err, AppError::ChartUrlNotTgz));
        assert_eq!(err.to_string(), "Chart URL must end with .tgz");
    }

    #[test]
    fn test_chart_url_unparseable() {
        let err = validate_chart_url("not a url at all").unwrap_err();
        assert!(matches!(err, AppError::InvalidChartUrl));
        assert_eq!(err.to_string(), "Invalid Chart URL.");
    }

    #[test]
    fn test_chart_url_missing_scheme() {
        let err = validate_chart_url("charts.example.com/nginx.tgz").unwrap_err();
        assert!(matches!(err, AppError::InvalidChartUrl));
    }

    #[test]
    fn test_parse_values_empty_is_empty_object() {
        let value = parse_values("").unwrap();
        assert_eq!(value, serde_json::json!({}));

        let value = parse_values("   \n\t  ").unwrap();
        assert_eq!(value, serde_json::json!({}));
    }

    #[test]
    fn test_parse_values_mapping() {
        let value = parse_values("replicaCount: 3\nimage:\n  tag: latest\n").unwrap();
        assert_eq!(
            value,
            serde_json::json!({"replicaCount": 3, "image": {"tag": "latest"}})
        );
    }

    #[test]
    fn test_parse_values_invalid_yaml() {
        assert!(parse_values("a: [unclosed").is_err());
    }

    #[test]
    fn test_request_serializes_camel_case_with_empty_values() {
        let request = TemplateRequest {
            chart_url: "https://charts.example.com/nginx.tgz".to_string(),
            values: parse_values("").unwrap(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"chartUrl\""));
        assert!(json.contains("\"values\":{}"));
    }

    #[test]
    fn test_response_deserializes_without_values() {
        let response: TemplateResponse =
            serde_json::from_str(r#"{"templates": "kind: Pod", "valuesExist": false}"#).unwrap();
        assert_eq!(response.templates, "kind: Pod");
        assert_eq!(response.values, "");
        assert!(!response.values_exist);
    }

    #[test]
    fn test_response_deserializes_with_values() {
        let response: TemplateResponse = serde_json::from_str(
            r#"{"templates": "foo: bar", "valuesExist": true, "values": "a: 1"}"#,
        )
        .unwrap();
        assert_eq!(response.templates, "foo: bar");
        assert_eq!(response.values, "a: 1");
        assert!(response.values_exist);
    }
}
