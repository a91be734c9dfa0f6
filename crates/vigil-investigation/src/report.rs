//! Panel content for the reports drill-down:
//! captures → group analysis → person details.
//!
//! Each view starts in a loading state when its panel opens and is filled
//! (or marked failed) once the request settles.

use std::fmt;

use serde::Serialize;

use crate::models::{AnalysisReport, CaptureRecord, FaceRecord};
use crate::InvestigationError;

/// Text shown in place of a panel's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Placeholder {
    Loading(String),
    Empty(String),
    Error(String),
}

impl Placeholder {
    pub fn text(&self) -> &str {
        match self {
            Placeholder::Loading(t) | Placeholder::Empty(t) | Placeholder::Error(t) => t,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Placeholder::Error(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturesView {
    pub title: String,
    pub subtitle: String,
    pub captures: Vec<CaptureRecord>,
    pub placeholder: Option<Placeholder>,
}

impl CapturesView {
    pub fn loading(investigation_title: &str) -> Self {
        Self {
            title: format!("Captures for: {investigation_title}"),
            subtitle: "Loading captures...".into(),
            captures: Vec::new(),
            placeholder: Some(Placeholder::Loading("Loading...".into())),
        }
    }

    pub fn settle(&mut self, result: Result<Vec<CaptureRecord>, InvestigationError>) {
        match result {
            Ok(captures) => {
                self.subtitle = format!(
                    "Viewing {} captured images for this investigation.",
                    captures.len()
                );
                self.placeholder = captures
                    .is_empty()
                    .then(|| Placeholder::Empty("No captures found.".into()));
                self.captures = captures;
            }
            Err(_) => {
                self.subtitle = "Could not load captures.".into();
                self.placeholder = Some(Placeholder::Error("Could not load captures.".into()));
                self.captures.clear();
            }
        }
    }
}

impl fmt::Display for CapturesView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.subtitle)?;
        if let Some(placeholder) = &self.placeholder {
            return writeln!(f, "  {}", placeholder.text());
        }
        for capture in &self.captures {
            writeln!(
                f,
                "  #{:<5} {}  {}",
                capture.id,
                capture.timestamp.format("%Y-%m-%d %H:%M:%S"),
                capture.url
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub report: AnalysisReport,
    pub placeholder: Option<Placeholder>,
}

impl GroupView {
    pub fn analyzing() -> Self {
        Self {
            report: AnalysisReport::default(),
            placeholder: Some(Placeholder::Loading(
                "Analyzing image... Please wait.".into(),
            )),
        }
    }

    pub fn settle(&mut self, result: Result<AnalysisReport, InvestigationError>) {
        match result {
            Ok(report) => {
                self.placeholder = report
                    .faces
                    .is_empty()
                    .then(|| Placeholder::Empty("No faces were detected in this capture.".into()));
                self.report = report;
            }
            Err(err) => {
                self.placeholder = Some(Placeholder::Error(format!("Analysis failed: {err}")));
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        !matches!(
            self.placeholder,
            Some(Placeholder::Loading(_)) | Some(Placeholder::Error(_))
        )
    }

    pub fn panic_label(&self) -> String {
        percent(&self.report.group_stats.panic_score)
    }

    /// Caption under one face crop: "Female, 25-32".
    pub fn face_caption(face: &FaceRecord) -> String {
        format!("{}, {}", face.gender, face.age_range)
    }
}

impl fmt::Display for GroupView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.report.group_stats;
        writeln!(f, "Group analysis")?;
        writeln!(
            f,
            "Faces: {}  Male: {}  Female: {}  Panic: {}",
            stats.total_faces,
            stats.male_count,
            stats.female_count,
            self.panic_label()
        )?;
        if let Some(placeholder) = &self.placeholder {
            return writeln!(f, "  {}", placeholder.text());
        }
        for (i, face) in self.report.faces.iter().enumerate() {
            writeln!(
                f,
                "  [{i}] {}  Panic: {}",
                Self::face_caption(face),
                percent(&face.panic_score)
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonView {
    pub face: FaceRecord,
}

impl PersonView {
    pub fn new(face: FaceRecord) -> Self {
        Self { face }
    }

    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Gender", self.face.gender.clone()),
            ("Age", self.face.age_range.clone()),
            ("Emotion", self.face.emotion_label.clone()),
            ("Vulnerability", self.face.vulnerability.clone()),
            ("Fear", self.face.fear_score.clone()),
            ("Panic", percent(&self.face.panic_score)),
        ]
    }
}

impl fmt::Display for PersonView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Person details")?;
        for (label, value) in self.rows() {
            writeln!(f, "  {label:<14}{value}")?;
        }
        Ok(())
    }
}

fn percent(score: &str) -> String {
    if score.is_empty() {
        "0%".to_string()
    } else {
        format!("{score}%")
    }
}
