use std::path::PathBuf;

/// Directories searched for a TTF font family used for PDF text metrics.
pub const DEFAULT_FONT_DIRS: [&str; 8] = [
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/liberation-sans",
    "/usr/share/fonts/dejavu-sans-fonts",
    "/usr/share/fonts/TTF",
    "/System/Library/Fonts/Supplemental",
    "/Library/Fonts",
    "C:\\Windows\\Fonts",
];

pub const CERT_DIR_VAR: &str = "OSCE_CERT_DIR";
pub const FONT_DIR_VAR: &str = "OSCE_FONT_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Where downloaded certificates are written.
    pub certificate_dir: PathBuf,
    pub font_dirs: Vec<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            certificate_dir: PathBuf::from("."),
            font_dirs: DEFAULT_FONT_DIRS.iter().map(PathBuf::from).collect(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup` on top of the defaults. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = non_blank(CERT_DIR_VAR) {
            config.certificate_dir = PathBuf::from(dir);
        }
        if let Some(dir) = non_blank(FONT_DIR_VAR) {
            config.font_dirs.insert(0, PathBuf::from(dir));
        }
        config
    }
}
