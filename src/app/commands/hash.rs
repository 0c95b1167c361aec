use crate::domain::hash_code::HashCodeBuilder;

/// Compose the hash code of string fields in order.
pub fn execute<S: AsRef<str>>(values: &[S]) -> i32 {
    values
        .iter()
        .fold(HashCodeBuilder::new(), |builder, value| builder.field(value.as_ref()))
        .finish()
}
