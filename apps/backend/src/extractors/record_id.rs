use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive numeric `{id}` path segment.
///
/// Parsing happens in the extractor rather than through `web::Path<i64>` so
/// a malformed id is answered with 400 `INVALID_ID` problem details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i64);

impl RecordId {
    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromRequest for RecordId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_record_id(req.match_info().get("id")))
    }
}

fn parse_record_id(raw: Option<&str>) -> Result<RecordId, AppError> {
    let raw = raw.ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id parameter"))?;

    let id = raw
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(ErrorCode::InvalidId, format!("Invalid id: {raw}")))?;

    if id <= 0 {
        return Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Id must be positive, got: {id}"),
        ));
    }

    Ok(RecordId(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_ids() {
        assert_eq!(parse_record_id(Some("42")).unwrap(), RecordId(42));
    }

    #[test]
    fn rejects_non_numeric_zero_and_negative() {
        for raw in ["abc", "0", "-3", "1.5", ""] {
            let err = parse_record_id(Some(raw)).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidId, "id {raw:?}");
        }
    }

    #[test]
    fn rejects_missing_segment() {
        assert_eq!(parse_record_id(None).unwrap_err().code(), ErrorCode::InvalidId);
    }

    proptest::proptest! {
        #[test]
        fn any_positive_id_round_trips(id in 1i64..=i64::MAX) {
            let raw = id.to_string();
            proptest::prop_assert_eq!(parse_record_id(Some(&raw)).unwrap(), RecordId(id));
        }

        #[test]
        fn non_digit_input_is_invalid(raw in "[a-zA-Z_ ]{1,12}") {
            proptest::prop_assert_eq!(parse_record_id(Some(&raw)).unwrap_err().code(), ErrorCode::InvalidId);
        }
    }
}
