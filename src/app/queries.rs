use super::*;
use crate::certificate::{CertificateDocument, format_certificate_date};
use crate::model::{SectionContent, SectionId};
use crate::progress::ProgressSnapshot;

impl OsceApp {
    pub fn section(&self, id: SectionId) -> Option<&SectionContent> {
        self.course.section(id)
    }

    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }

    /// Session date as printed on the certificate.
    pub fn display_date(&self) -> String {
        format_certificate_date(self.today)
    }

    pub fn certificate_document(&self) -> CertificateDocument {
        CertificateDocument::new(&self.course.certificate, &self.learner_name, self.today)
    }
}

impl OsceApp {
    pub fn footer_line(&self) -> String {
        use chrono::Datelike;
        format!(
            "© {} {} · {}",
            self.today.year(),
            self.course.footer_owner,
            self.course.footer_note
        )
    }
}
