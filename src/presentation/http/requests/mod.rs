use poem_openapi::Object;
use serde_json::Value;

/// Fields are decoded as raw JSON so that absent, `null` and non-string values
/// all surface as a validation failure rather than being coerced to text.
#[derive(Object, Debug)]
pub struct CreateUserRequestDto {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

/// Keeps a field only when the client sent a JSON string.
pub fn string_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}
