// Certificate of completion: wording, date and file name, plus PDF export.
use crate::config::AppConfig;
use crate::error::CertificateError;
use crate::model::CertificateText;
use chrono::NaiveDate;

/// `DD Month YYYY`, e.g. `05 March 2026`.
pub fn format_certificate_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// `<prefix>_<name or placeholder>.pdf`, with characters that cannot appear
/// in a file name replaced by `_`.
pub fn certificate_filename(text: &CertificateText, learner_name: &str) -> String {
    let name = learner_name.trim();
    let name = if name.is_empty() {
        text.file_placeholder.as_str()
    } else {
        name
    };
    let safe: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}_{}.pdf", text.file_prefix, safe)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateDocument {
    pub title: String,
    pub lines: Vec<String>,
    pub filename: String,
}

impl CertificateDocument {
    pub fn new(text: &CertificateText, learner_name: &str, date: NaiveDate) -> Self {
        let name = learner_name.trim();
        let shown_name = if name.is_empty() {
            text.name_placeholder.as_str()
        } else {
            name
        };
        Self {
            title: text.title.clone(),
            lines: vec![
                format!("This certifies that {shown_name} has completed the"),
                format!("{} e-learning led by {}.", text.course, text.instructor),
                format!("Date: {}", format_certificate_date(date)),
            ],
            filename: certificate_filename(text, learner_name),
        }
    }
}

/// Where an exported certificate ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedCertificate {
    pub location: String,
}

pub trait CertificateExporter {
    fn export(&self, doc: &CertificateDocument) -> Result<ExportedCertificate, CertificateError>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use pdf::PdfExporter;

#[cfg(not(target_arch = "wasm32"))]
mod pdf {
    use super::{CertificateDocument, CertificateExporter, ExportedCertificate};
    use crate::config::AppConfig;
    use crate::error::CertificateError;
    use genpdf::Element as _;
    use genpdf::elements::{Break, Paragraph};
    use genpdf::fonts::{FontData, FontFamily};
    use genpdf::style::Style;
    use std::path::{Path, PathBuf};

    /// File names of one family's four styles, as the family ships them.
    struct FamilyFiles {
        regular: &'static str,
        bold: &'static str,
        italic: &'static str,
        bold_italic: &'static str,
    }

    const FONT_FAMILIES: [FamilyFiles; 4] = [
        FamilyFiles {
            regular: "LiberationSans-Regular.ttf",
            bold: "LiberationSans-Bold.ttf",
            italic: "LiberationSans-Italic.ttf",
            bold_italic: "LiberationSans-BoldItalic.ttf",
        },
        FamilyFiles {
            regular: "DejaVuSans.ttf",
            bold: "DejaVuSans-Bold.ttf",
            italic: "DejaVuSans-Oblique.ttf",
            bold_italic: "DejaVuSans-BoldOblique.ttf",
        },
        // macOS
        FamilyFiles {
            regular: "Arial.ttf",
            bold: "Arial Bold.ttf",
            italic: "Arial Italic.ttf",
            bold_italic: "Arial Bold Italic.ttf",
        },
        // Windows
        FamilyFiles {
            regular: "arial.ttf",
            bold: "arialbd.ttf",
            italic: "ariali.ttf",
            bold_italic: "arialbi.ttf",
        },
    ];

    /// First family in `dir` with all four styles present on disk.
    fn resolve_family(dir: &Path) -> Option<FontFamily<PathBuf>> {
        FONT_FAMILIES.iter().find_map(|files| {
            let family = FontFamily {
                regular: dir.join(files.regular),
                bold: dir.join(files.bold),
                italic: dir.join(files.italic),
                bold_italic: dir.join(files.bold_italic),
            };
            let complete = [
                &family.regular,
                &family.bold,
                &family.italic,
                &family.bold_italic,
            ]
            .iter()
            .all(|path| path.is_file());
            complete.then_some(family)
        })
    }

    // No builtin fallback: the TTF itself is embedded, so names outside
    // Windows-1252 still render.
    fn load_family(paths: &FontFamily<PathBuf>) -> Result<FontFamily<FontData>, CertificateError> {
        let load = |path: &PathBuf| {
            FontData::load(path, None)
                .map_err(|e| CertificateError::Render(format!("{}: {e}", path.display())))
        };
        Ok(FontFamily {
            regular: load(&paths.regular)?,
            bold: load(&paths.bold)?,
            italic: load(&paths.italic)?,
            bold_italic: load(&paths.bold_italic)?,
        })
    }

    /// Renders A4 PDFs with genpdf and writes them to a directory.
    pub struct PdfExporter {
        output_dir: PathBuf,
        font_dirs: Vec<PathBuf>,
    }

    impl PdfExporter {
        pub fn new(output_dir: PathBuf, font_dirs: Vec<PathBuf>) -> Self {
            Self {
                output_dir,
                font_dirs,
            }
        }

        pub fn from_config(config: &AppConfig) -> Self {
            Self::new(config.certificate_dir.clone(), config.font_dirs.clone())
        }

        fn load_fonts(&self) -> Result<FontFamily<FontData>, CertificateError> {
            for dir in &self.font_dirs {
                let Some(paths) = resolve_family(dir) else {
                    continue;
                };
                match load_family(&paths) {
                    Ok(family) => {
                        log::debug!("using fonts from {}", paths.regular.display());
                        return Ok(family);
                    }
                    Err(e) => log::warn!("skipping unreadable font family: {e}"),
                }
            }
            Err(CertificateError::FontsNotFound {
                searched: self
                    .font_dirs
                    .iter()
                    .map(|d| d.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
        }

        pub fn render(&self, doc: &CertificateDocument) -> Result<Vec<u8>, CertificateError> {
            let mut pdf = genpdf::Document::new(self.load_fonts()?);
            pdf.set_title(doc.title.clone());
            pdf.set_paper_size(genpdf::PaperSize::A4);

            let mut decorator = genpdf::SimplePageDecorator::new();
            decorator.set_margins(25);
            pdf.set_page_decorator(decorator);

            pdf.push(
                Paragraph::new(doc.title.as_str()).styled(Style::new().bold().with_font_size(22)),
            );
            pdf.push(Break::new(1.5));
            for line in &doc.lines {
                pdf.push(Paragraph::new(line.as_str()).styled(Style::new().with_font_size(12)));
                pdf.push(Break::new(0.5));
            }

            let mut bytes = Vec::new();
            pdf.render(&mut bytes)
                .map_err(|e| CertificateError::Render(e.to_string()))?;
            Ok(bytes)
        }
    }

    impl CertificateExporter for PdfExporter {
        fn export(
            &self,
            doc: &CertificateDocument,
        ) -> Result<ExportedCertificate, CertificateError> {
            let bytes = self.render(doc)?;
            std::fs::create_dir_all(&self.output_dir)?;
            let path = self.output_dir.join(&doc.filename);
            std::fs::write(&path, bytes)?;
            log::info!("certificate written to {}", path.display());
            Ok(ExportedCertificate {
                location: path.display().to_string(),
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::certificate::tests::{date, text};
        use crate::config::DEFAULT_FONT_DIRS;

        fn touch(dir: &Path, names: &[&str]) {
            for name in names {
                std::fs::write(dir.join(name), b"").expect("write font stub");
            }
        }

        #[test]
        fn resolves_dejavu_style_names() {
            let dir = tempfile::tempdir().expect("tempdir");
            touch(
                dir.path(),
                &[
                    "DejaVuSans.ttf",
                    "DejaVuSans-Bold.ttf",
                    "DejaVuSans-Oblique.ttf",
                    "DejaVuSans-BoldOblique.ttf",
                ],
            );
            let family = resolve_family(dir.path()).expect("family found");
            assert_eq!(family.regular, dir.path().join("DejaVuSans.ttf"));
            assert_eq!(family.italic, dir.path().join("DejaVuSans-Oblique.ttf"));
        }

        #[test]
        fn resolves_macos_arial_names() {
            let dir = tempfile::tempdir().expect("tempdir");
            touch(
                dir.path(),
                &[
                    "Arial.ttf",
                    "Arial Bold.ttf",
                    "Arial Italic.ttf",
                    "Arial Bold Italic.ttf",
                ],
            );
            let family = resolve_family(dir.path()).expect("family found");
            assert_eq!(family.bold, dir.path().join("Arial Bold.ttf"));
        }

        #[test]
        fn incomplete_family_is_not_resolved() {
            let dir = tempfile::tempdir().expect("tempdir");
            touch(dir.path(), &["DejaVuSans.ttf", "DejaVuSans-Bold.ttf"]);
            assert!(resolve_family(dir.path()).is_none());
        }

        #[test]
        fn names_outside_windows_1252_export() {
            let font_dirs: Vec<PathBuf> = DEFAULT_FONT_DIRS.iter().map(PathBuf::from).collect();
            if !font_dirs.iter().any(|dir| resolve_family(dir).is_some()) {
                eprintln!("no system font family installed; skipping");
                return;
            }
            let out = tempfile::tempdir().expect("tempdir");
            let exporter = PdfExporter::new(out.path().to_path_buf(), font_dirs);

            for name in ["Łukasz Wąsik", "Αλέξανδρος"] {
                let doc = CertificateDocument::new(&text(), name, date(2026, 1, 2));
                let exported = exporter.export(&doc).expect("certificate exported");
                let bytes = std::fs::read(&exported.location).expect("pdf on disk");
                assert!(bytes.starts_with(b"%PDF"));
            }
        }
    }
}

/// Browser builds have no font files to hand to the PDF renderer.
#[cfg(target_arch = "wasm32")]
pub struct UnsupportedExporter;

#[cfg(target_arch = "wasm32")]
impl CertificateExporter for UnsupportedExporter {
    fn export(&self, _doc: &CertificateDocument) -> Result<ExportedCertificate, CertificateError> {
        Err(CertificateError::Unsupported)
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_exporter(config: &AppConfig) -> Box<dyn CertificateExporter> {
    Box::new(PdfExporter::from_config(config))
}

#[cfg(target_arch = "wasm32")]
pub fn default_exporter(_config: &AppConfig) -> Box<dyn CertificateExporter> {
    Box::new(UnsupportedExporter)
}
