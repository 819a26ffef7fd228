use super::*;

impl OsceApp {
    /// Section cards in page order.
    pub fn section_infos(&self) -> Vec<SectionInfo> {
        self.course
            .sections
            .iter()
            .map(|s| SectionInfo {
                id: s.id,
                title: s.title.clone(),
                subtitle: s.subtitle.clone(),
                default_open: s.default_open,
                complete: self.progress.is_complete(s.id),
            })
            .collect()
    }
}
