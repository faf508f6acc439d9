use pretty_assertions::assert_eq;
use tsgen_core::{is_wrapper_key, SwaggerDocument, Translator};

#[test]
fn test_translate_document() {
    let swagger_json = r##"{
        "info": { "title": "demo-api", "version": "1.0" },
        "definitions": {
            "HttpResponse«ActivityDetailRes»": {
                "title": "HttpResponse«ActivityDetailRes»",
                "description": "统一响应",
                "type": "object",
                "properties": {
                    "code": { "type": "integer", "format": "int32", "description": "状态码" },
                    "data": { "$ref": "#/definitions/ActivityDetailRes" },
                    "message": { "type": "string", "allowEmptyValue": true }
                }
            },
            "ActivityDetailRes": {
                "title": "ActivityDetailRes",
                "type": "object",
                "properties": {
                    "id": { "type": "integer", "format": "int64" },
                    "notices": {
                        "type": "array",
                        "items": { "$ref": "#/definitions/Notice" }
                    }
                }
            },
            "Map«string,object»": {
                "title": "Map«string,object»",
                "type": "object"
            },
            "List«Notice»": {
                "title": "List«Notice»",
                "type": "object"
            }
        }
    }"##;

    let document = SwaggerDocument::from_json(swagger_json).unwrap();
    let translator = Translator::default();

    let mut generated = Vec::new();
    for (key, definition) in &document.definitions {
        if is_wrapper_key(key) {
            continue;
        }
        generated.push(translator.translate(definition).unwrap());
    }

    let names: Vec<&str> = generated.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["api-http-response", "api-activity-detail-res"]);

    let expected_response = r#"
/**
 * 统一响应
 */
export interface ApiHttpResponse<T0> {
  /**
   * 状态码
   */
  code: number;
  data: T0;
  message?: string;
}
"#;
    assert_eq!(generated[0].1, expected_response);

    let expected_detail = r#"import { ApiNotice } from './api-notice';

export interface ApiActivityDetailRes {
  id: number;
  notices: Array<ApiNotice>;
}
"#;
    assert_eq!(generated[1].1, expected_detail);
}

#[test]
fn test_malformed_title_aborts_only_that_definition() {
    let swagger_json = r#"{
        "definitions": {
            "Broken": {
                "title": "Page«",
                "type": "object",
                "properties": { "id": { "type": "integer" } }
            },
            "Notice": {
                "title": "Notice",
                "type": "object",
                "properties": { "id": { "type": "integer" } }
            }
        }
    }"#;

    let document = SwaggerDocument::from_json(swagger_json).unwrap();
    let translator = Translator::default();

    let results: Vec<_> = document
        .definitions
        .values()
        .map(|definition| translator.translate(definition))
        .collect();

    assert!(results[0].is_err());
    let (name, _) = results[1].as_ref().unwrap();
    assert_eq!(name, "api-notice");
}
