//! Time command class (0x8A)

use chrono::{NaiveDate, NaiveTime};

pub mod v1 {
    use super::*;

    zwave_commands! {
        TimeGet(0x8A, 0x01, version = 1) {}

        TimeReport(0x8A, 0x02, version = 1) {
            /// Real-time clock has failed and the time may be wrong
            rtc_failure: bool => flag(0, 7),
            hour_local_time: u8 => bits(0, 0, 5),
            minute_local_time: u8 => u8(1),
            second_local_time: u8 => u8(2),
        }

        DateGet(0x8A, 0x03, version = 1) {}

        DateReport(0x8A, 0x04, version = 1) {
            year: u16 => u16(0),
            month: u8 => u8(2),
            day: u8 => u8(3),
        }
    }

    impl TimeReport {
        /// Build a report from a local time
        pub fn from_time(time: NaiveTime) -> Self {
            use chrono::Timelike;

            Self {
                rtc_failure: false,
                hour_local_time: time.hour() as u8,
                minute_local_time: time.minute() as u8,
                second_local_time: time.second() as u8,
            }
        }

        /// Local time, if the fields form a valid time
        pub fn time(&self) -> Option<NaiveTime> {
            NaiveTime::from_hms_opt(
                u32::from(self.hour_local_time),
                u32::from(self.minute_local_time),
                u32::from(self.second_local_time),
            )
        }
    }

    impl DateReport {
        /// Build a report from a calendar date
        ///
        /// Returns `None` for years outside `0..=65535`.
        pub fn from_date(date: NaiveDate) -> Option<Self> {
            use chrono::Datelike;

            Some(Self {
                year: u16::try_from(date.year()).ok()?,
                month: date.month() as u8,
                day: date.day() as u8,
            })
        }

        /// Calendar date, if the fields form a valid date
        pub fn date(&self) -> Option<NaiveDate> {
            NaiveDate::from_ymd_opt(i32::from(self.year), u32::from(self.month), u32::from(self.day))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::ZwaveCommand;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_time_report() {
        let report = v1::TimeReport::from_payload(&[0x97, 0x2D, 0x09]);

        assert!(report.rtc_failure);
        assert_eq!(report.hour_local_time, 23);
        assert_eq!(report.time(), NaiveTime::from_hms_opt(23, 45, 9));
    }

    #[test]
    fn test_time_report_from_time() {
        let time = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let report = v1::TimeReport::from_time(time);

        assert_eq!(report.format(), "8A02061E00");
        assert_eq!(report.time(), Some(time));
    }

    #[test]
    fn test_date_report() {
        let date = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
        let report = v1::DateReport::from_date(date).unwrap();

        assert_eq!(report.payload(), vec![0x07, 0xE6, 0x0C, 0x1F]);
        assert_eq!(v1::DateReport::from_payload(&report.payload()).date(), Some(date));
    }

    #[test]
    fn test_date_report_rejects_negative_year() {
        let date = NaiveDate::from_ymd_opt(-5, 3, 1).unwrap();
        assert_eq!(v1::DateReport::from_date(date), None);
    }

    #[test]
    fn test_invalid_date() {
        let report = v1::DateReport::from_payload(&[0x07, 0xE6, 0x02, 0x1E]);
        assert_eq!(report.date(), None);
    }
}
