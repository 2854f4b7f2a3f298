#[cfg(feature = "web")]
pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

/// Renders a service timestamp in the viewer's local time.
#[cfg(feature = "web")]
pub fn format_local(iso: &str) -> String {
    use js_sys::Date;
    let d = Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if d.get_time().is_nan() {
        return iso.to_string();
    }
    let day = d.get_date() as i32;
    let month = (d.get_month() as i32) + 1;
    let year = d.get_full_year() as i32;
    let hour = d.get_hours() as i32;
    let minute = d.get_minutes() as i32;
    format!(
        "{}.{}.{} {}:{}",
        pad2(day),
        pad2(month),
        year,
        pad2(hour),
        pad2(minute)
    )
}

/// Renders a service timestamp in the host's local time. Naive timestamps
/// are taken as UTC.
#[cfg(not(feature = "web"))]
pub fn format_local(iso: &str) -> String {
    use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.with_timezone(&Local).format("%d.%m.%Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f") {
        return Local
            .from_utc_datetime(&dt)
            .format("%d.%m.%Y %H:%M")
            .to_string();
    }
    iso.to_string()
}

/// Model probability (0..1) as a whole percentage.
pub fn format_probability(p: f64) -> String {
    format!("{}%", (p * 100.0).round() as i64)
}

/// Booking counts: whole numbers without decimals, otherwise one decimal.
pub fn format_bookings(v: f64) -> String {
    if (v - v.round()).abs() < 0.05 {
        format!("{}", v.round() as i64)
    } else {
        format!("{:.1}", v)
    }
}

/// yyyy-mm-dd -> dd.mm; anything else is shown as sent.
pub fn format_short_date(s: &str) -> String {
    match chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(d) => d.format("%d.%m").to_string(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_rounds_to_whole_percent() {
        assert_eq!(format_probability(0.723), "72%");
        assert_eq!(format_probability(0.005), "1%");
        assert_eq!(format_probability(0.0), "0%");
    }

    #[test]
    fn bookings_drop_trailing_zero() {
        assert_eq!(format_bookings(12.0), "12");
        assert_eq!(format_bookings(-3.0), "-3");
        assert_eq!(format_bookings(9.46), "9.5");
    }

    #[test]
    fn short_date() {
        assert_eq!(format_short_date("2024-01-08"), "08.01");
        assert_eq!(format_short_date("W1"), "W1");
    }

    #[test]
    fn short_date_keeps_non_ascii_labels() {
        assert_eq!(format_short_date("2024\u{e9}1-08x"), "2024\u{e9}1-08x");
        assert_eq!(format_short_date("2024-01-\u{e9}"), "2024-01-\u{e9}");
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn service_timestamps_are_readable() {
        use chrono::{Local, TimeZone, Utc};
        let local = Utc
            .with_ymd_and_hms(2024, 3, 5, 14, 7, 9)
            .unwrap()
            .with_timezone(&Local)
            .format("%d.%m.%Y %H:%M")
            .to_string();
        assert_eq!(format_local("2024-03-05T14:07:09.123456+00:00"), local);
        assert_eq!(format_local("2024-03-05T14:07:09"), local);
        assert_eq!(format_local("yesterday"), "yesterday");
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn offset_timestamps_land_on_the_same_instant() {
        // 23:07 in Tokyo and 14:07 UTC are the same moment
        assert_eq!(
            format_local("2024-03-05T23:07:00+09:00"),
            format_local("2024-03-05T14:07:00Z")
        );
    }
}
