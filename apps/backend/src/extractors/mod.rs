pub mod auth_claims;
pub mod record_id;
pub mod validated_json;

pub use auth_claims::AuthClaims;
pub use record_id::RecordId;
pub use validated_json::ValidatedJson;
