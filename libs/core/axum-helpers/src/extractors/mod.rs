//! Custom extractors that run declarative validation before handlers.

pub mod id_path;
pub mod validated_body;
pub mod validated_query;

pub use id_path::IdPath;
pub use validated_body::ValidatedBody;
pub use validated_query::ValidatedQuery;

use validator::ValidationErrors;

/// Flatten a [`ValidationErrors`] tree into one aggregated message naming
/// every failing field, e.g.
/// `"description must be between 10 and 500 characters; name must be
/// between 3 and 100 characters"`.
///
/// Fields are sorted so the message is deterministic.
pub fn collect_violations(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut parts = Vec::new();
    for (field, field_errors) in fields {
        for error in field_errors {
            match &error.message {
                Some(message) => parts.push(message.to_string()),
                None => parts.push(format!("{} is invalid", field)),
            }
        }
    }
    parts.join("; ")
}
