//! Wire format of the Result envelope

#![allow(clippy::unwrap_used)] // Tests can unwrap

use algebra_core::{NullValue, Result};
use algebra_json::{CodecConfig, CodecError, ResultCodec};
use algebra_testing::{assert_that, init_test_tracing};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const EXPECTED_OK: &str = r#"{"value":"test","@result":"OK"}"#;
const EXPECTED_ERR: &str = r#"{"name":"ERROR","@result":"ERR"}"#;
const EXPECTED_RAW_ERR: &str = r#"{"@error":"ERROR","@result":"ERR"}"#;
const EXPECTED_STRING_OK: &str = r#"{"@ok":"test","@result":"OK"}"#;
const EXPECTED_STRING_ERR: &str = r#"{"@error":"ERROR","@result":"ERR"}"#;
const EXPECTED_LIST_OK: &str = r#"{"@ok":["val0","val1"],"@result":"OK"}"#;
const EXPECTED_LIST_ERR: &str = r#"{"@error":["err0","err1"],"@result":"ERR"}"#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TestBean {
    value: String,
}

/// Serialized as an object: `{"name":"ERROR"}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
enum TestError {
    #[serde(rename = "ERROR")]
    Error,
}

/// Serialized as a bare string: `"ERROR"`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum RawError {
    Error,
}

fn bean() -> TestBean {
    TestBean {
        value: "test".to_string(),
    }
}

#[test]
fn test_serializes_ok() {
    init_test_tracing();
    let result: Result<TestBean, TestError> = Result::ok(bean());
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_OK);
}

#[test]
fn test_serializes_err() {
    let result: Result<TestBean, TestError> = Result::err(TestError::Error);
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_ERR);
}

#[test]
fn test_serializes_raw_err() {
    let result: Result<TestBean, RawError> = Result::err(RawError::Error);
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_RAW_ERR);
}

#[test]
fn test_serializes_string_ok() {
    let result: Result<String, String> = Result::ok("test".to_string());
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_STRING_OK);
}

#[test]
fn test_serializes_string_err() {
    let result: Result<String, String> = Result::err("ERROR".to_string());
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_STRING_ERR);
}

#[test]
fn test_serializes_list_ok() {
    let result: Result<Vec<&str>, Vec<&str>> = Result::ok(vec!["val0", "val1"]);
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_LIST_OK);
}

#[test]
fn test_serializes_list_err() {
    let result: Result<Vec<&str>, Vec<&str>> = Result::err(vec!["err0", "err1"]);
    assert_eq!(algebra_json::to_string(&result).unwrap(), EXPECTED_LIST_ERR);
}

#[test]
fn test_deserializes_ok() {
    init_test_tracing();
    let result: Result<TestBean, TestError> = algebra_json::from_str(EXPECTED_OK).unwrap();
    assert_eq!(assert_that(&result).is_ok().extracting_ok().value, "test");
}

#[test]
fn test_deserializes_err() {
    let result: Result<TestBean, TestError> = algebra_json::from_str(EXPECTED_ERR).unwrap();
    assert_that(&result).contains_err(&TestError::Error);
}

#[test]
fn test_deserializes_raw_err() {
    let result: Result<TestBean, RawError> = algebra_json::from_str(EXPECTED_RAW_ERR).unwrap();
    assert_that(&result).contains_err(&RawError::Error);
}

#[test]
fn test_deserializes_string_ok() {
    let result: Result<String, String> = algebra_json::from_str(EXPECTED_STRING_OK).unwrap();
    assert_eq!(result, Result::ok("test".to_string()));
}

#[test]
fn test_deserializes_string_err() {
    let result: Result<String, String> = algebra_json::from_str(EXPECTED_STRING_ERR).unwrap();
    assert_eq!(result, Result::err("ERROR".to_string()));
}

#[test]
fn test_deserializes_list_ok() {
    let result: Result<Vec<String>, Vec<String>> =
        algebra_json::from_str(EXPECTED_LIST_OK).unwrap();
    assert_eq!(result, Result::ok(vec!["val0".to_string(), "val1".to_string()]));
}

#[test]
fn test_deserializes_list_err() {
    let result: Result<Vec<String>, Vec<String>> =
        algebra_json::from_str(EXPECTED_LIST_ERR).unwrap();
    assert_eq!(result, Result::err(vec!["err0".to_string(), "err1".to_string()]));
}

#[test]
fn test_discriminator_is_case_insensitive() {
    let result: Result<String, String> =
        algebra_json::from_str(r#"{"@ok":"test","@result":"ok"}"#).unwrap();
    assert_that(&result).contains_ok("test");

    let result: Result<String, String> =
        algebra_json::from_str(r#"{"@result":"Err","@error":"ERROR"}"#).unwrap();
    assert_that(&result).contains_err("ERROR");
}

#[test]
fn test_missing_discriminator_is_rejected() {
    let error = algebra_json::from_str::<String, String>(r#"{"@ok":"test"}"#).unwrap_err();
    assert!(matches!(error, CodecError::MissingDiscriminator));
    assert!(error.is_decode());
    assert!(error.to_string().contains("@result"));
}

#[test]
fn test_non_object_is_rejected() {
    let error = algebra_json::from_str::<String, String>(r#""OK""#).unwrap_err();
    assert!(matches!(error, CodecError::NotAnObject { found: "a string" }));
}

#[test]
fn test_null_value_on_either_side() {
    let ok: Result<NullValue, String> = Result::<NullValue, String>::null_ok();
    let text = algebra_json::to_string(&ok).unwrap();
    assert_eq!(text, r#"{"@ok":null,"@result":"OK"}"#);
    assert_eq!(algebra_json::from_str::<NullValue, String>(&text).unwrap(), ok);

    let err: Result<String, NullValue> = Result::<String, NullValue>::null_err();
    let text = algebra_json::to_string(&err).unwrap();
    assert_eq!(text, r#"{"@error":null,"@result":"ERR"}"#);
    assert_eq!(algebra_json::from_str::<String, NullValue>(&text).unwrap(), err);
}

#[test]
fn test_map_payload_is_inlined() {
    let mut counts = BTreeMap::new();
    counts.insert("a".to_string(), 1);
    counts.insert("b".to_string(), 2);
    let result: Result<BTreeMap<String, i32>, String> = Result::ok(counts);

    let text = algebra_json::to_string(&result).unwrap();
    assert_eq!(text, r#"{"a":1,"b":2,"@result":"OK"}"#);
    assert_eq!(
        algebra_json::from_str::<BTreeMap<String, i32>, String>(&text).unwrap(),
        result
    );
}

#[test]
fn test_multimap_payload_is_inlined() {
    let mut groups: BTreeMap<String, Vec<u8>> = BTreeMap::new();
    groups.insert("even".to_string(), vec![2, 4]);
    groups.insert("odd".to_string(), vec![1, 3]);
    let result: Result<String, BTreeMap<String, Vec<u8>>> = Result::err(groups);

    let text = algebra_json::to_string(&result).unwrap();
    assert_eq!(text, r#"{"even":[2,4],"odd":[1,3],"@result":"ERR"}"#);
    assert_eq!(algebra_json::from_str(&text).unwrap(), result);
}

#[test]
fn test_empty_map_payload() {
    let result: Result<BTreeMap<String, i32>, String> = Result::ok(BTreeMap::new());
    let text = algebra_json::to_string(&result).unwrap();
    assert_eq!(text, r#"{"@result":"OK"}"#);
    assert_eq!(algebra_json::from_str(&text).unwrap(), result);
}

#[test]
fn test_keyed_codec_accepts_both_forms() {
    let codec = ResultCodec::new(CodecConfig::default().with_inline_payloads(false));
    let result: Result<TestBean, TestError> = Result::ok(bean());

    let text = codec.encode_string(&result).unwrap();
    assert_eq!(text, r#"{"@ok":{"value":"test"},"@result":"OK"}"#);
    assert_eq!(codec.decode_str::<TestBean, TestError>(&text).unwrap(), result);
    assert_eq!(
        codec.decode_str::<TestBean, TestError>(EXPECTED_OK).unwrap(),
        result
    );
}

/// A payload whose `Serialize` impl always fails.
#[derive(Debug)]
struct Unserializable;

impl Serialize for Unserializable {
    fn serialize<Ser>(&self, _serializer: Ser) -> std::result::Result<Ser::Ok, Ser::Error>
    where
        Ser: serde::Serializer,
    {
        Err(serde::ser::Error::custom("payload refused to serialize"))
    }
}

#[derive(Debug, Serialize)]
struct HoldsUnserializable {
    inner: Unserializable,
}

fn assert_encode_error(error: &CodecError) {
    assert!(matches!(error, CodecError::Encode(_)), "unexpected error: {error:?}");
    assert!(error.is_encode());
    assert!(!error.is_decode());
}

#[test]
fn test_payload_serialization_failure_is_an_encode_error() {
    init_test_tracing();

    let codecs = [
        ResultCodec::default(),
        ResultCodec::new(CodecConfig::default().with_inline_payloads(false)),
    ];
    let top_level: Result<Unserializable, String> = Result::ok(Unserializable);
    let nested: Result<String, HoldsUnserializable> = Result::err(HoldsUnserializable {
        inner: Unserializable,
    });

    for codec in &codecs {
        assert_encode_error(&codec.encode_string(&top_level).unwrap_err());
        assert_encode_error(&codec.encode_value(&top_level).unwrap_err());
        assert_encode_error(&codec.encode_vec(&top_level).unwrap_err());

        assert_encode_error(&codec.encode_string(&nested).unwrap_err());
        assert_encode_error(&codec.encode_value(&nested).unwrap_err());
        assert_encode_error(&codec.encode_vec(&nested).unwrap_err());
    }

    assert_encode_error(&algebra_json::to_string(&top_level).unwrap_err());
    assert_encode_error(&algebra_json::to_value(&nested).unwrap_err());
}
