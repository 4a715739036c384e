// © 2025-2026 the Formwright Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Formats the time a form was published or submitted for display, e.g. `03/07/2025 02:05 PM`.
pub fn format_published_time<Tz>(time: &DateTime<Tz>) -> String
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	time.format("%m/%d/%Y %I:%M %p").to_string()
}

/// Formats a time in the local time zone of the machine running the code.
pub fn format_local_time(time: &DateTime<Utc>) -> String {
	format_published_time(&time.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{FixedOffset, Offset};

	#[test]
	fn formats_as_month_day_year_with_twelve_hour_clock() {
		let time = Utc.with_ymd_and_hms(2025, 3, 7, 14, 5, 59).unwrap();
		assert_eq!(format_published_time(&time), "03/07/2025 02:05 PM");
	}

	#[test]
	fn midnight_is_twelve_am() {
		let time = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
		assert_eq!(format_published_time(&time), "12/31/2024 12:00 AM");
	}

	#[test]
	fn uses_the_time_zone_of_the_value() {
		let offset = FixedOffset::west_opt(5 * 3600).unwrap();
		let time = Utc.with_ymd_and_hms(2025, 1, 1, 3, 30, 0).unwrap().with_timezone(&offset);
		assert_eq!(format_published_time(&time), "12/31/2024 10:30 PM");
	}

	#[test]
	fn local_time_applies_the_local_offset() {
		let time = Utc.with_ymd_and_hms(2025, 7, 4, 12, 0, 0).unwrap();
		let local_offset = Local.offset_from_utc_datetime(&time.naive_utc()).fix();

		assert_eq!(format_local_time(&time), format_published_time(&time.with_timezone(&local_offset)));
	}
}
