// tests/filenames.rs
//
// Export filename derivation from ambient page state.
//
use chrono::{Datelike, Local, NaiveDate};
use scraper::Html;
use timetable_export::FilenameContract;
use timetable_export::specs::page_info::{filename, filename_on};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()
}

#[test]
fn date_picker_value() {
    let doc = Html::parse_document(r#"<input id="datePicker" type="text" value="2025年12月">"#);
    assert_eq!(filename_on(&doc, FilenameContract::Calendar, today()), "calendar_2025_12.csv");
}

#[test]
fn toolbar_title_when_no_picker() {
    let doc = Html::parse_document(
        r#"<div class="fc-toolbar"><h2 class="fc-toolbar-title">2025年1月</h2></div>"#,
    );
    assert_eq!(filename_on(&doc, FilenameContract::Calendar, today()), "calendar_2025_1.csv");
}

#[test]
fn empty_picker_value_falls_through() {
    let doc = Html::parse_document(
        r#"<input id="datePicker" value=""><h2 class="fc-toolbar-title">2024年11月</h2>"#,
    );
    assert_eq!(filename_on(&doc, FilenameContract::Calendar, today()), "calendar_2024_11.csv");
}

#[test]
fn no_ambient_date_uses_the_clock() {
    let doc = Html::parse_document("<p>nothing</p>");
    assert_eq!(filename_on(&doc, FilenameContract::Calendar, today()), "calendar_2026_4.csv");

    let now = Local::now().date_naive();
    assert_eq!(
        filename(&doc, FilenameContract::Calendar),
        format!("calendar_{}_{}.csv", now.year(), now.month())
    );
}

#[test]
fn timetable_year_and_quarter() {
    let doc = Html::parse_document(
        r##"<p class="year">2025年度</p>
           <p class="c-half-btn"><a href="#">１Ｑ</a><a class="is-active" href="#">4Q</a></p>"##,
    );
    assert_eq!(filename_on(&doc, FilenameContract::Timetable, today()), "timetable_2025_4Q.json");
}

#[test]
fn missing_quarter_defaults_to_first() {
    let doc =
        Html::parse_document(r#"<p class="year">2024</p><p class="c-half-btn"><a>前期</a></p>"#);
    assert_eq!(filename_on(&doc, FilenameContract::Timetable, today()), "timetable_2024_1Q.json");

    let bare = Html::parse_document("<p></p>");
    assert_eq!(filename_on(&bare, FilenameContract::Timetable, today()), "timetable_2026_1Q.json");
}

#[test]
fn static_variant() {
    let doc = Html::parse_document(r#"<p class="year">2025</p>"#);
    assert_eq!(filename_on(&doc, FilenameContract::Static, today()), "timetable.json");
}
