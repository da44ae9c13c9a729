//! Builds a small schedule from an inline catalog and prints it.
//!
//! Run with: `cargo run --example schedule_usage`

use weekgrid::activity::{Activity, ExtraActivity, Location};
use weekgrid::algorithms::{BuildRequest, RelaxationScheduler};
use weekgrid::catalog::InMemoryCatalog;
use weekgrid::constraints::PriorityEntry;
use weekgrid::export::{render_text, DEFAULT_DISPLAY_TAG};
use weekgrid::time::{TimeOfDay, Weekday};

const CATALOG: &str = r#"{
    "courses": [
        {"course_id": "MATH141", "sections": ["MATH141-0101", "MATH141-0201"]},
        {"course_id": "CHEM135", "sections": ["CHEM135-FC01", "CHEM135-0101", "CHEM135-0201"]},
        {"course_id": "ENGL101", "sections": ["ENGL101-0101"]}
    ],
    "sections": [
        {"section_id": "MATH141-0101", "instructors": ["Justin Wyss-Gallifent"],
         "meetings": [{"days": "MWF", "start_time": "8:00am", "end_time": "8:50am", "building": "MTH", "room": "0101"}]},
        {"section_id": "MATH141-0201", "instructors": ["Justin Wyss-Gallifent"],
         "meetings": [{"days": "MWF", "start_time": "9:00am", "end_time": "9:50am", "building": "MTH", "room": "0201"}]},
        {"section_id": "CHEM135-FC01",
         "meetings": [{"days": "TuTh", "start_time": "9:30am", "end_time": "10:45am"}]},
        {"section_id": "CHEM135-0101",
         "meetings": [{"days": "TuTh", "start_time": "12:30pm", "end_time": "1:45pm"}]},
        {"section_id": "CHEM135-0201",
         "meetings": [{"days": "TuTh", "start_time": "11:00am", "end_time": "12:15pm"}]},
        {"section_id": "ENGL101-0101",
         "meetings": [{"days": "MW", "start_time": "3:00pm", "end_time": "4:15pm"}]}
    ],
    "professors": []
}"#;

fn main() -> anyhow::Result<()> {
    weekgrid::logging::init();

    let catalog = InMemoryCatalog::from_json_str(CATALOG)?;

    let mut job = ExtraActivity::new("job", "library desk");
    job.add_block(
        Weekday::Tue,
        TimeOfDay::parse("12:00pm")?,
        TimeOfDay::parse("4:00pm")?,
        Location::place("McKeldin"),
    )?;

    let request = BuildRequest {
        courses: vec!["MATH141".into(), "CHEM135".into(), "ENGL101".into()],
        semester: "202308".into(),
        priority_list: vec![
            PriorityEntry::earliest_class("9:00am"),
            PriorityEntry::latest_class("2:00pm"),
        ]
        .into(),
        extras: vec![Activity::from(job)],
    };

    let report = RelaxationScheduler::default().build(&request, &catalog)?;

    println!("=== Outcomes ===");
    for outcome in &report.outcomes {
        println!("  {outcome}");
    }

    println!("\n=== Schedule ({} blocks) ===", report.schedule.len());
    print!("{}", render_text(&report.schedule, DEFAULT_DISPLAY_TAG));
    println!(
        "Total committed time: {:.0} s",
        report.schedule.total_duration().value()
    );

    Ok(())
}
