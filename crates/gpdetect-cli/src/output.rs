//! Rendering of detection reports to stdout/stderr.

use gpdetect_hw::detect::unknown_port_hint;
use gpdetect_hw::{CameraDetails, CameraEntry, Outcome, Report};
use serde::Serialize;
use std::io::{self, Write};

fn write_name_port(out: &mut impl Write, entry: &CameraEntry) -> io::Result<()> {
    writeln!(out, "{:<30} {:<16}", entry.model, entry.port)
}

/// Text rendering of a full autodetect run.
///
/// Open failures are all reported on `err` before any summary is written.
pub fn write_report(out: &mut impl Write, err: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Number of cameras: {}", report.count())?;

    for camera in report.cameras.iter().filter(|c| c.outcome.is_open_failure()) {
        let CameraEntry { model, port } = &camera.entry;
        if let Outcome::UnknownPort(path) = &camera.outcome {
            writeln!(err, "{}", unknown_port_hint(path))?;
        }
        writeln!(err, "Camera {model} on port {port} failed to open")?;
    }

    for camera in &report.cameras {
        match &camera.outcome {
            Outcome::Summary(text) => {
                write_name_port(out, &camera.entry)?;
                writeln!(out, "Summary:\n{text}")?;
            }
            Outcome::SummaryFailed(_) => {
                writeln!(err, "Failed to get summary.")?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Text rendering of a detect-only run.
pub fn write_list(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Number of cameras: {}", report.count())?;
    for camera in &report.cameras {
        write_name_port(out, &camera.entry)?;
    }
    Ok(())
}

/// Text rendering of a single camera's library records.
pub fn write_details(out: &mut impl Write, details: &CameraDetails) -> io::Result<()> {
    write_name_port(out, &details.entry)?;
    writeln!(out, "==== SUMMARY   ====\n{}", details.summary)?;
    writeln!(out, "==== ABILITIES ====\n{}", details.abilities)?;
    writeln!(out, "==== PORT      ====\n{}", details.port_info)?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    count: usize,
    cameras: Vec<JsonCamera<'a>>,
}

#[derive(Serialize)]
struct JsonCamera<'a> {
    model: &'a str,
    port: &'a str,
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> JsonCamera<'a> {
    fn new(entry: &'a CameraEntry, outcome: &'a Outcome) -> Self {
        let (status, summary, error) = match outcome {
            Outcome::Listed => ("listed", None, None),
            Outcome::Summary(text) => ("ok", Some(text.as_str()), None),
            Outcome::OpenFailed(e) => ("open_failed", None, Some(e.clone())),
            Outcome::UnknownPort(port) => ("unknown_port", None, Some(unknown_port_hint(port))),
            Outcome::SummaryFailed(e) => ("summary_failed", None, Some(e.clone())),
        };
        Self {
            model: &entry.model,
            port: &entry.port,
            status,
            summary,
            error,
        }
    }
}

/// JSON rendering of a report, one object on a single line.
pub fn write_json(out: &mut impl Write, report: &Report) -> io::Result<()> {
    let json = JsonReport {
        count: report.count(),
        cameras: report
            .cameras
            .iter()
            .map(|c| JsonCamera::new(&c.entry, &c.outcome))
            .collect(),
    };
    serde_json::to_writer(&mut *out, &json)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpdetect_hw::CameraReport;

    fn report(cameras: Vec<(&str, &str, Outcome)>) -> Report {
        Report {
            cameras: cameras
                .into_iter()
                .map(|(m, p, outcome)| CameraReport {
                    entry: CameraEntry::new(m, p),
                    outcome,
                })
                .collect(),
        }
    }

    fn render(report: &Report) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_report(&mut out, &mut err, report).unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_text_report_layout() {
        let report = report(vec![(
            "Canon EOS 5D",
            "usb:001,004",
            Outcome::Summary("Manufacturer: Canon Inc.".into()),
        )]);
        let (out, err) = render(&report);

        let expected = format!(
            "Number of cameras: 1\n{:<30} {:<16}\nSummary:\nManufacturer: Canon Inc.\n",
            "Canon EOS 5D", "usb:001,004"
        );
        assert_eq!(out, expected);
        assert!(err.is_empty());
    }

    #[test]
    fn test_failures_go_to_stderr() {
        let report = report(vec![
            ("A", "usb:001,001", Outcome::OpenFailed("busy".into())),
            ("B", "usb:001,002", Outcome::SummaryFailed("nope".into())),
        ]);
        let (out, err) = render(&report);

        assert_eq!(out, "Number of cameras: 2\n");
        assert_eq!(
            err,
            "Camera A on port usb:001,001 failed to open\nFailed to get summary.\n"
        );
    }

    #[test]
    fn test_unknown_port_prints_hint_first() {
        let report = report(vec![(
            "A",
            "usb:001,099",
            Outcome::UnknownPort("usb:001,099".into()),
        )]);
        let (out, err) = render(&report);
        assert_eq!(out, "Number of cameras: 1\n");
        assert_eq!(
            err,
            format!(
                "{}\nCamera A on port usb:001,099 failed to open\n",
                unknown_port_hint("usb:001,099")
            )
        );
    }

    #[test]
    fn test_open_failures_precede_summary_diagnostics() {
        let report = report(vec![
            ("A", "usb:001,001", Outcome::SummaryFailed("x".into())),
            ("B", "usb:001,002", Outcome::OpenFailed("y".into())),
        ]);
        let (_, err) = render(&report);
        assert_eq!(
            err,
            "Camera B on port usb:001,002 failed to open\nFailed to get summary.\n"
        );
    }

    #[test]
    fn test_empty_report() {
        let (out, err) = render(&Report::default());
        assert_eq!(out, "Number of cameras: 0\n");
        assert!(err.is_empty());
    }

    #[test]
    fn test_list_layout() {
        let report = report(vec![("Nikon D750", "usb:002,003", Outcome::Listed)]);
        let mut out = Vec::new();
        write_list(&mut out, &report).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("Number of cameras: 1\n{:<30} {:<16}\n", "Nikon D750", "usb:002,003")
        );
    }

    #[test]
    fn test_json_shape() {
        let report = report(vec![
            ("A", "usb:001,001", Outcome::Summary("hello".into())),
            ("B", "usb:001,002", Outcome::OpenFailed("busy".into())),
        ]);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["cameras"][0]["status"], "ok");
        assert_eq!(value["cameras"][0]["summary"], "hello");
        assert!(value["cameras"][0].get("error").is_none());
        assert_eq!(value["cameras"][1]["status"], "open_failed");
        assert_eq!(value["cameras"][1]["error"], "busy");
    }

    #[test]
    fn test_json_status_for_every_outcome() {
        let report = report(vec![
            ("A", "usb:001,001", Outcome::Listed),
            ("B", "usb:001,002", Outcome::Summary("hello".into())),
            ("C", "usb:001,003", Outcome::OpenFailed("busy".into())),
            ("D", "usb:001,099", Outcome::UnknownPort("usb:001,099".into())),
            ("E", "usb:001,005", Outcome::SummaryFailed("not supported".into())),
        ]);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let cameras = &value["cameras"];
        assert_eq!(value["count"], 5);

        let statuses: Vec<&str> = (0..5)
            .map(|i| cameras[i]["status"].as_str().unwrap())
            .collect();
        assert_eq!(
            statuses,
            vec!["listed", "ok", "open_failed", "unknown_port", "summary_failed"]
        );

        assert!(cameras[0].get("summary").is_none());
        assert!(cameras[0].get("error").is_none());
        assert_eq!(cameras[3]["error"], unknown_port_hint("usb:001,099"));
        assert!(cameras[3].get("summary").is_none());
        assert_eq!(cameras[4]["error"], "not supported");
        assert_eq!(cameras[4]["port"], "usb:001,005");
    }
}
