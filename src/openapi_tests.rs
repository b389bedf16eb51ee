#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use serde_json::Value;
    use utoipa::OpenApi;
    use utoipa::openapi::PathItemType;

    #[test]
    fn test_openapi_schema_generation() {
        // Test that the OpenAPI schema can be generated without errors
        let openapi = ApiDoc::openapi();

        // Verify that the schema contains the expected components
        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        assert!(components.schemas.contains_key("ErrorResponse"));
        assert!(components.schemas.contains_key("HealthResponse"));
        assert!(components.schemas.contains_key("ErrorMetricDto"));
        assert!(components.schemas.contains_key("DemandEstimateDto"));
        assert!(components.schemas.contains_key("SelectionDto"));
        assert!(components.schemas.contains_key("ReportElementDto"));

        // Verify that the schema can be serialized to JSON without errors
        let json_result = serde_json::to_string(&openapi);
        assert!(json_result.is_ok());
    }

    #[test]
    fn test_error_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let error_response_schema = components.schemas.get("ErrorResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = error_response_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("error"));
            assert!(properties.contains_key("code"));
            assert!(properties.contains_key("success"));
        } else {
            panic!("ErrorResponse should be an object schema");
        }
    }

    #[test]
    fn test_health_response_schema_structure() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let health_response_schema = components.schemas.get("HealthResponse").unwrap();

        if let utoipa::openapi::RefOr::T(utoipa::openapi::schema::Schema::Object(obj)) = health_response_schema {
            let properties = &obj.properties;
            assert!(properties.contains_key("status"));
            assert!(properties.contains_key("version"));
            assert!(properties.contains_key("forecast_image"));
        } else {
            panic!("HealthResponse should be an object schema");
        }
    }

    #[test]
    fn test_openapi_paths_contain_health_endpoint() {
        let openapi = ApiDoc::openapi();

        let health_path = openapi.paths.paths.get("/health").unwrap();
        let health_get = health_path.operations.get(&PathItemType::Get).unwrap();

        // Check that both 200 and 500 responses are defined
        assert!(health_get.responses.responses.contains_key("200"));
        assert!(health_get.responses.responses.contains_key("500"));
    }

    #[test]
    fn test_openapi_paths_contain_report_endpoints() {
        let openapi = ApiDoc::openapi();

        for path in [
            "/",
            "/api/v1/report/error-metrics",
            "/api/v1/report/demand-estimates",
            "/api/v1/report/selection",
            "/api/v1/report/elements",
            "/api/v1/report/forecast-image",
        ] {
            let item = openapi
                .paths
                .paths
                .get(path)
                .unwrap_or_else(|| panic!("missing path {}", path));
            assert!(item.operations.contains_key(&PathItemType::Get), "{} has no GET", path);
        }
    }

    #[test]
    fn test_forecast_image_documents_missing_plot() {
        let openapi = ApiDoc::openapi();
        let item = openapi.paths.paths.get("/api/v1/report/forecast-image").unwrap();
        let op = item.operations.get(&PathItemType::Get).unwrap();

        assert!(op.responses.responses.contains_key("200"));
        assert!(op.responses.responses.contains_key("404"));
    }

    #[test]
    fn test_all_error_responses_reference_correct_schema() {
        let openapi = ApiDoc::openapi();
        let openapi_json = serde_json::to_string(&openapi).unwrap();

        // Ensure no references to crate.schemas.ErrorResponse exist
        assert!(!openapi_json.contains("crate.schemas.ErrorResponse"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
        assert!(openapi_json.contains("ErrorResponse"));
    }

    fn collect_refs(value: &Value, refs: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    match (key.as_str(), child) {
                        ("$ref", Value::String(target)) => refs.push(target.clone()),
                        _ => collect_refs(child, refs),
                    }
                }
            }
            Value::Array(items) => items.iter().for_each(|item| collect_refs(item, refs)),
            _ => {}
        }
    }

    #[test]
    fn test_every_schema_reference_resolves() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();
        let doc = serde_json::to_value(&openapi).unwrap();

        let mut refs = Vec::new();
        collect_refs(&doc, &mut refs);
        assert!(!refs.is_empty());

        for target in refs {
            let name = target
                .strip_prefix("#/components/schemas/")
                .unwrap_or_else(|| panic!("unexpected reference {}", target));
            assert!(
                components.schemas.contains_key(name),
                "reference {} has no component",
                target
            );
        }
    }

    #[test]
    fn test_health_failure_uses_error_response() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let failure = &doc["paths"]["/health"]["get"]["responses"]["500"];
        assert_eq!(
            failure["content"]["application/json"]["schema"]["$ref"],
            "#/components/schemas/ErrorResponse"
        );
    }

    #[test]
    fn test_response_wrappers_document_their_payload() {
        let openapi = ApiDoc::openapi();
        let components = openapi.components.as_ref().unwrap();

        for (wrapper, payload) in [
            ("ErrorMetricsResponse", "ErrorMetricDto"),
            ("DemandEstimatesResponse", "DemandEstimateDto"),
            ("SelectionResponse", "SelectionDto"),
            ("ReportElementsResponse", "ReportElementDto"),
        ] {
            let schema = serde_json::to_string(components.schemas.get(wrapper).unwrap()).unwrap();
            assert!(
                schema.contains(&format!("#/components/schemas/{}", payload)),
                "{} does not reference {}",
                wrapper,
                payload
            );
        }
        assert!(!components.schemas.contains_key("ApiResponse"));
    }
}
