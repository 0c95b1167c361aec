use crate::domain::Record;

/// Consumer of monitoring records.
pub trait RecordProcessor {
    fn name(&self) -> &str;

    fn process_record(&self, record: &Record);
}
