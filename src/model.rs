use serde::{Deserialize, Serialize};

/// The fixed set of sections a learner works through, in page order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum SectionId {
    Intro,
    History,
    Examinations,
    #[serde(rename = "A-E")]
    AtoE,
    #[serde(rename = "General Tips")]
    GeneralTips,
    Quiz,
    Resources,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Intro,
        SectionId::History,
        SectionId::Examinations,
        SectionId::AtoE,
        SectionId::GeneralTips,
        SectionId::Quiz,
        SectionId::Resources,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionId::Intro => "Intro",
            SectionId::History => "History",
            SectionId::Examinations => "Examinations",
            SectionId::AtoE => "A-E",
            SectionId::GeneralTips => "General Tips",
            SectionId::Quiz => "Quiz",
            SectionId::Resources => "Resources",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: usize, // index into `options`
    pub rationale: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalloutTone {
    Insight,
    Pitfall,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Paragraph {
        text: String,
    },
    Bullets {
        items: Vec<String>,
    },
    Link {
        label: String,
        url: String,
        #[serde(default)]
        note: Option<String>,
    },
    Callout {
        tone: CalloutTone,
        text: String,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SectionContent {
    pub id: SectionId,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub default_open: bool,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
}

/// Wording used on the certificate and in its file name.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CertificateText {
    pub title: String,
    pub course: String,
    pub instructor: String,
    pub file_prefix: String,
    pub name_placeholder: String,
    pub file_placeholder: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Course {
    pub title: String,
    pub tagline: String,
    pub footer_owner: String,
    pub footer_note: String,
    pub certificate: CertificateText,
    pub sections: Vec<SectionContent>,
    pub questions: Vec<QuizQuestion>,
}

impl Course {
    pub fn section(&self, id: SectionId) -> Option<&SectionContent> {
        self.sections.iter().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_names_match_their_yaml_tags() {
        for id in SectionId::ALL {
            let parsed: SectionId = serde_yaml::from_str(&format!("\"{}\"", id.name()))
                .expect("name parses as a section id");
            assert_eq!(parsed, id);
        }
        assert!(serde_yaml::from_str::<SectionId>("Appendix").is_err());
    }

    #[test]
    fn content_blocks_deserialize_from_tagged_maps() {
        let yaml = r#"
- type: paragraph
  text: "Hello"
- type: callout
  tone: pitfall
  text: "Careful"
- type: link
  label: "Docs"
  url: "https://example.org/"
"#;
        let blocks: Vec<ContentBlock> = serde_yaml::from_str(yaml).expect("yaml ok");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(&blocks[1], ContentBlock::Callout { tone: CalloutTone::Pitfall, .. }));
        assert!(matches!(&blocks[2], ContentBlock::Link { note: None, .. }));
    }
}
