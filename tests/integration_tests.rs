use chrono::NaiveDate;
use timedots::{render_at, Error, RenderQuery, DOT_STYLE};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn range(start: &str, end: &str) -> RenderQuery {
    RenderQuery {
        start_date: Some(start.into()),
        end_date: Some(end.into()),
        ..Default::default()
    }
}

fn view(kind: &str) -> RenderQuery {
    RenderQuery {
        view_type: Some(kind.into()),
        ..Default::default()
    }
}

fn decode(png: &[u8]) -> image::RgbaImage {
    image::load_from_memory(png).expect("decode png").to_rgba8()
}

#[test]
fn range_render_canvas_matches_unit_count() {
    // 31 days in one row of up to 50 dots
    let png = render_at(&range("20260101", "20260131"), date(2026, 1, 15)).unwrap();
    let pixels = decode(&png);
    assert_eq!(pixels.width(), 31 * DOT_STYLE.dot_step());
    assert_eq!(pixels.height(), DOT_STYLE.dot_step());
}

#[test]
fn day_view_wraps_rows_and_caps_width() {
    // 2026 has 365 days: 8 rows of 50 dots
    let png = render_at(&view("day"), date(2026, 7, 1)).unwrap();
    let pixels = decode(&png);
    assert_eq!(pixels.width(), DOT_STYLE.max_width);
    assert_eq!(pixels.height(), 8 * DOT_STYLE.dot_step());
}

#[test]
fn leap_year_day_view_has_366_dots() {
    let png = render_at(&view("day"), date(2028, 7, 1)).unwrap();
    let pixels = decode(&png);
    // ceil(366 / 50) = 8 rows, same canvas as 365
    assert_eq!(pixels.height(), 8 * DOT_STYLE.dot_step());
    // dot 365 exists on the last row: row 7, col 15, center offset +12
    let (x, y) = (15 * 24 + 12, 7 * 24 + 12);
    assert_ne!(pixels.get_pixel(x, y).0, [245, 245, 245, 255]);
}

#[test]
fn week_view_wraps_to_two_rows() {
    let png = render_at(&view("week"), date(2026, 6, 15)).unwrap();
    let pixels = decode(&png);
    assert_eq!(pixels.height(), 2 * DOT_STYLE.dot_step()); // 53 weeks wrap once
    assert!(pixels.width() <= DOT_STYLE.max_width);
}

#[test]
fn future_only_range_has_no_current_or_past_dot() {
    let png = render_at(&range("20260101", "20260101"), date(2025, 12, 1)).unwrap();
    let pixels = decode(&png);
    // single future dot, no pink (current) and no pale-yellow (past) pixels
    for pixel in pixels.pixels() {
        assert_ne!(pixel.0, [255, 20, 147, 255]);
        assert_ne!(pixel.0, [250, 250, 210, 255]);
    }
    assert_eq!(pixels.get_pixel(12, 12).0, [204, 204, 204, 255]);
}

#[test]
fn range_containing_today_has_current_dot() {
    let png = render_at(&range("20260110", "20260112"), date(2026, 1, 11)).unwrap();
    let pixels = decode(&png);
    // dots: past, current, future
    assert_eq!(pixels.get_pixel(12, 12).0, [250, 250, 210, 255]);
    assert_eq!(pixels.get_pixel(24 + 12, 12).0, [255, 20, 147, 255]);
    assert_eq!(pixels.get_pixel(48 + 12, 12).0, [204, 204, 204, 255]);
}

#[test]
fn past_dot_carries_ring_overlay() {
    let png = render_at(&range("20260110", "20260112"), date(2026, 1, 11)).unwrap();
    let pixels = decode(&png);
    // past dot edge pixel is the ring color, future dot edge is its fill
    assert_eq!(pixels.get_pixel(4, 12).0, [204, 204, 204, 255]);
    assert_eq!(pixels.get_pixel(48 + 4, 12).0, [204, 204, 204, 255]);
    // current dot edge stays pink
    assert_eq!(pixels.get_pixel(24 + 4, 12).0, [255, 20, 147, 255]);
}

#[test]
fn reversed_range_fails_with_date_range_error() {
    let err = render_at(&range("20260401", "20260101"), date(2026, 1, 1)).unwrap_err();
    assert!(matches!(err, Error::InvalidDateRange(_)));
    assert!(err.is_user_error());
}

#[test]
fn month_view_fails_with_view_type_error() {
    let err = render_at(&view("month"), date(2026, 1, 1)).unwrap_err();
    assert!(matches!(err, Error::InvalidViewType(_)));
}

#[test]
fn empty_query_fails_with_missing_parameters() {
    let err = render_at(&RenderQuery::default(), date(2026, 1, 1)).unwrap_err();
    assert!(matches!(err, Error::MissingParameters));
}

#[test]
fn lone_start_date_counts_as_missing_parameters() {
    let query = RenderQuery {
        start_date: Some("20260101".into()),
        ..Default::default()
    };
    let err = render_at(&query, date(2026, 1, 1)).unwrap_err();
    assert!(matches!(err, Error::MissingParameters));
}
