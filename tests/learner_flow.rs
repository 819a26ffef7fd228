use chrono::NaiveDate;
use osce_intro::OsceApp;
use osce_intro::certificate::{CertificateDocument, CertificateExporter, ExportedCertificate};
use osce_intro::data::read_course_embedded;
use osce_intro::error::CertificateError;
use osce_intro::model::SectionId;
use osce_intro::quiz::SubmitOutcome;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct Saved(Rc<RefCell<Vec<CertificateDocument>>>);

impl CertificateExporter for Saved {
    fn export(&self, doc: &CertificateDocument) -> Result<ExportedCertificate, CertificateError> {
        self.0.borrow_mut().push(doc.clone());
        Ok(ExportedCertificate {
            location: format!("/downloads/{}", doc.filename),
        })
    }
}

struct Broken;

impl CertificateExporter for Broken {
    fn export(&self, _doc: &CertificateDocument) -> Result<ExportedCertificate, CertificateError> {
        Err(CertificateError::FontsNotFound {
            searched: "/nowhere".into(),
        })
    }
}

fn new_app(exporter: Box<dyn CertificateExporter>) -> OsceApp {
    let course = read_course_embedded().expect("embedded course");
    let today = NaiveDate::from_ymd_opt(2026, 3, 5).expect("valid date");
    OsceApp::new(course, exporter, today).expect("app builds")
}

/// Answers the quiz, getting the first `correct` questions right.
fn take_quiz(app: &mut OsceApp, correct: usize) -> SubmitOutcome {
    let mut last = SubmitOutcome::NoPick;
    for i in 0..app.quiz.total() {
        let answer = app.quiz.question(i).map(|q| q.answer).expect("question");
        let options = app.quiz.question(i).map(|q| q.options.len()).expect("question");
        app.pick_option(if i < correct { answer } else { (answer + 1) % options });
        last = app.submit_answer();
    }
    last
}

#[test]
fn full_session_unlocks_and_exports_the_certificate() {
    let saved = Saved::default();
    let mut app = new_app(Box::new(saved.clone()));
    app.learner_name = "  Mary Seacole ".into();

    for id in SectionId::ALL {
        assert!(!app.is_eligible());
        assert!(app.mark_section_complete(id));
    }
    assert_eq!(app.progress_snapshot().percent, 100);
    assert!(!app.is_eligible(), "quiz not passed yet");

    let last = take_quiz(&mut app, 4);
    let SubmitOutcome::Finished { result, .. } = last else {
        panic!("quiz should be finished, got {last:?}");
    };
    assert_eq!(result.percent(), 80);
    assert!(app.is_eligible());

    app.download_certificate();
    let docs = saved.0.borrow();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].filename, "OSCE_Introduction_Certificate_Mary Seacole.pdf");
    assert_eq!(
        docs[0].lines,
        vec![
            "This certifies that Mary Seacole has completed the",
            "An introduction to OSCEs e-learning led by Dr Hussain Hilali.",
            "Date: 05 March 2026",
        ]
    );
    assert_eq!(
        app.message,
        "✅ Certificate saved to /downloads/OSCE_Introduction_Certificate_Mary Seacole.pdf"
    );
}

#[test]
fn failed_quiz_keeps_certificate_locked_until_a_retry_passes() {
    let mut app = new_app(Box::new(Saved::default()));
    for id in SectionId::ALL {
        app.mark_section_complete(id);
    }

    take_quiz(&mut app, 3);
    assert!(app.quiz.is_finished());
    assert!(!app.is_eligible());

    app.retry_quiz();
    assert_eq!(app.quiz.current_index(), Some(0));
    take_quiz(&mut app, 5);
    assert!(app.is_eligible());
}

#[test]
fn section_completion_is_idempotent_across_the_app() {
    let mut app = new_app(Box::new(Saved::default()));
    assert!(app.mark_section_complete(SectionId::AtoE));
    assert!(!app.mark_section_complete(SectionId::AtoE));
    assert_eq!(app.progress_snapshot().completed, 1);
    assert!(app.section_infos().iter().any(|s| s.id == SectionId::AtoE && s.complete));
}

#[test]
fn export_failure_is_reported_in_the_status_message() {
    let mut app = new_app(Box::new(Broken));
    for id in SectionId::ALL {
        app.mark_section_complete(id);
    }
    take_quiz(&mut app, 5);

    app.download_certificate();
    assert!(app.message.starts_with('⚠'));
    assert!(app.message.contains("no usable font family"));
}

#[test]
fn footer_shows_the_session_year() {
    let app = new_app(Box::new(Saved::default()));
    assert!(app.footer_line().starts_with("© 2026 Hussain Hilali"));
}
