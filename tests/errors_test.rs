// ABOUTME: Integration tests for the unified error system
// ABOUTME: Covers display text, structured details, conversions, and image payload errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::error::Error;
use std::io;

use nutriscan::analysis::{ImagePart, ImagePayload};
use nutriscan::errors::{AppError, ErrorCode};
use serde_json::json;

#[test]
fn test_display_includes_description_and_message() {
    let error = AppError::missing_field("No image provided");
    assert_eq!(
        error.to_string(),
        "A required field is missing from the request: No image provided"
    );
}

#[test]
fn test_external_service_message_names_the_service() {
    let error = AppError::external_service("image-analyzer", "bad gateway");

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "image-analyzer: bad gateway");
    assert!(error.source().is_none());
}

#[test]
fn test_value_out_of_range_carries_details() {
    let error = AppError::value_out_of_range("height_cm", 90.0, 100.0, 250.0);

    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    assert_eq!(error.details["field"], "height_cm");
    assert_eq!(error.details["min"], json!(100.0));
    assert_eq!(error.details["value"], json!(90.0));
}

#[test]
fn test_error_codes_serialize_as_stable_names() {
    let codes = [
        (ErrorCode::MissingRequiredField, "MISSING_REQUIRED_FIELD"),
        (ErrorCode::ExternalServiceUnavailable, "EXTERNAL_SERVICE_UNAVAILABLE"),
        (ErrorCode::ConfigInvalid, "CONFIG_INVALID"),
        (ErrorCode::StorageError, "STORAGE_ERROR"),
    ];
    for (code, name) in codes {
        assert_eq!(serde_json::to_value(code).unwrap(), json!(name));
    }
}

#[test]
fn test_io_error_conversion_keeps_source() {
    let error: AppError = io::Error::new(io::ErrorKind::NotFound, "response.txt missing").into();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert!(error.source().is_some());
}

#[test]
fn test_json_error_conversion() {
    let parse_error = serde_json::from_str::<ImagePayload>("{").unwrap_err();
    let error: AppError = parse_error.into();
    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_invalid_base64_payload() {
    let payload = ImagePayload {
        data: "not base64!!".to_owned(),
        mime_type: "image/jpeg".to_owned(),
    };
    let error = ImagePart::from_payload(&payload).unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.source().is_some());
}

#[test]
fn test_payload_round_trip_uses_camel_case_mime_type() {
    let image = ImagePart::new("image/png", vec![1, 2, 3]).unwrap();
    let value = serde_json::to_value(image.to_payload()).unwrap();

    assert_eq!(value["mimeType"], "image/png");
    assert_eq!(value["data"], "AQID");

    let payload: ImagePayload = serde_json::from_value(value).unwrap();
    assert_eq!(ImagePart::from_payload(&payload).unwrap(), image);
}
