use chrono::NaiveDate;
use costexplorer_core::value_object;

/// Wire format of day-granular dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

value_object! {
    /// A half-open time range.
    ///
    /// `Start` is inclusive and `End` exclusive: `2017-01-01`..`2017-05-01`
    /// covers data up to and including `2017-04-30`. Both are opaque strings at
    /// this layer; hourly requests use full timestamps such as
    /// `2017-01-01T00:00:00Z`.
    pub struct DateInterval {
        /// Inclusive start of the range.
        string start("Start"): String => set_start, with_start;
        /// Exclusive end of the range.
        string end("End"): String => set_end, with_end;
    }
}

impl DateInterval {
    /// Day-granular interval `[start, end)`.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new()
            .with_start(start.format(DATE_FORMAT).to_string())
            .with_end(end.format(DATE_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use costexplorer_core::{ModelValue, ValueObject};

    #[test]
    fn from_dates_uses_iso_days() {
        let interval = DateInterval::from_dates(
            NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2017, 5, 1).unwrap(),
        );
        assert_eq!(interval.start(), Some("2017-01-01"));
        assert_eq!(interval.end(), Some("2017-05-01"));
        assert_eq!(interval.to_string(), "{Start: 2017-01-01,End: 2017-05-01}");
    }

    #[test]
    fn hash_code_follows_field_accumulator() {
        let interval = DateInterval::new().with_start("a");
        // (1 * 31 + hash("a")) * 31 + 0
        assert_eq!(interval.hash_code(), (31 + 97) * 31);
        assert_eq!(DateInterval::new().hash_code(), 31 * 31);
    }

    #[test]
    fn serializes_with_wire_names() {
        let interval = DateInterval::new().with_start("2020-01-01");
        assert_eq!(interval.to_json().unwrap(), r#"{"Start":"2020-01-01"}"#);
    }
}
