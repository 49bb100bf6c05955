//! URL-encoded form processing

use crate::Error;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Parse URL-encoded form data
pub fn parse_form<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    serde_urlencoded::from_bytes(body)
        .map_err(|e| Error::BadRequest(format!("Failed to parse form data: {}", e)))
}

/// Parse URL-encoded form data into a HashMap
///
/// Repeated keys keep the last value, which is how an HTML checkbox paired
/// with a hidden fallback field resolves.
pub fn parse_form_map(body: &[u8]) -> Result<HashMap<String, String>, Error> {
    let form_data: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|e| Error::BadRequest(format!("Failed to parse form data: {}", e)))?;

    Ok(form_data.into_iter().collect())
}

/// Encode key/value pairs as a form body
pub fn encode_form(pairs: &[(&str, &str)]) -> Result<String, Error> {
    serde_urlencoded::to_string(pairs)
        .map_err(|e| Error::Internal(format!("Failed to encode form data: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_map() {
        let body = b"name=North+Depot&location=12%20Elm%20St&facility_type=Transfer";
        let form = parse_form_map(body).unwrap();

        assert_eq!(form.get("name"), Some(&"North Depot".to_string()));
        assert_eq!(form.get("location"), Some(&"12 Elm St".to_string()));
        assert_eq!(form.get("facility_type"), Some(&"Transfer".to_string()));
    }

    #[test]
    fn test_parse_form_map_last_value_wins() {
        let form = parse_form_map(b"active_route=0&active_route=1").unwrap();
        assert_eq!(form.get("active_route"), Some(&"1".to_string()));
    }

    #[test]
    fn test_parse_form_typed() {
        #[derive(serde::Deserialize)]
        struct WasteType {
            material: String,
            hazardous: Option<String>,
        }

        let form: WasteType = parse_form(b"material=Glass").unwrap();
        assert_eq!(form.material, "Glass");
        assert!(form.hazardous.is_none());
    }

    #[test]
    fn test_parse_form_missing_field_is_bad_request() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Needs {
            material: String,
        }

        let err = parse_form::<Needs>(b"other=1").unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_encode_form() {
        let body = encode_form(&[("name", "North Depot"), ("location", "12 Elm St")]).unwrap();
        assert_eq!(body, "name=North+Depot&location=12+Elm+St");
    }
}
