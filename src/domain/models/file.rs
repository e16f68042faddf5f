pub const SOURCE_EXTENSION: &str = ".otf";
pub const TARGET_EXTENSION: &str = ".ttf";
pub const DEFAULT_MIME_TYPE: &str = "font/otf";

/// A font the user picked for conversion.
#[derive(Debug, Clone)]
pub struct FontFile {
    pub content: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl FontFile {
    pub fn new(content: Vec<u8>, filename: String, mime_type: String) -> Self {
        Self {
            content,
            filename,
            mime_type,
        }
    }

    /// Only the suffix is checked, so `photo.ttf.otf` passes and `font.OTF` passes.
    pub fn has_source_extension(filename: &str) -> bool {
        source_extension(filename).is_some()
    }

    pub fn is_accepted(&self) -> bool {
        Self::has_source_extension(&self.filename)
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Name offered for the converted download: the trailing `.otf` becomes `.ttf`,
    /// keeping the case the user typed (`FONT.OTF` -> `FONT.TTF`).
    pub fn converted_filename(&self) -> String {
        converted_filename(&self.filename)
    }
}

fn source_extension(filename: &str) -> Option<&str> {
    let split = filename.len().checked_sub(SOURCE_EXTENSION.len())?;
    if !filename.is_char_boundary(split) {
        return None;
    }

    let extension = &filename[split..];
    extension
        .eq_ignore_ascii_case(SOURCE_EXTENSION)
        .then_some(extension)
}

pub fn converted_filename(filename: &str) -> String {
    let Some(extension) = source_extension(filename) else {
        return filename.to_string();
    };

    let stem = &filename[..filename.len() - extension.len()];
    let target = if extension.chars().skip(1).all(|c| c.is_ascii_uppercase()) {
        TARGET_EXTENSION.to_uppercase()
    } else {
        TARGET_EXTENSION.to_string()
    };

    format!("{}{}", stem, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font(name: &str) -> FontFile {
        FontFile::new(vec![0, 1, 0, 0], name.to_string(), DEFAULT_MIME_TYPE.to_string())
    }

    #[test]
    fn accepts_suffix_case_insensitively() {
        assert!(font("font.otf").is_accepted());
        assert!(font("font.OTF").is_accepted());
        assert!(font("photo.ttf.otf").is_accepted());
    }

    #[test]
    fn rejects_other_extensions() {
        assert!(!font("font.woff").is_accepted());
        assert!(!font("font.otf.woff").is_accepted());
        assert!(!font("otf").is_accepted());
        assert!(!font("").is_accepted());
    }

    #[test]
    fn converted_name_replaces_trailing_suffix_only() {
        assert_eq!(font("name.otf").converted_filename(), "name.ttf");
        assert_eq!(font("photo.ttf.otf").converted_filename(), "photo.ttf.ttf");
        assert_eq!(font("my.otf.font.otf").converted_filename(), "my.otf.font.ttf");
    }

    #[test]
    fn converted_name_keeps_typed_case() {
        assert_eq!(font("FONT.OTF").converted_filename(), "FONT.TTF");
        assert_eq!(font("Font.Otf").converted_filename(), "Font.ttf");
    }

    #[test]
    fn converted_name_leaves_unrelated_names_alone() {
        assert_eq!(converted_filename("font.woff"), "font.woff");
    }

    #[test]
    fn multibyte_names_are_split_on_char_boundaries() {
        assert_eq!(converted_filename("ゴシック.otf"), "ゴシック.ttf");
    }
}
