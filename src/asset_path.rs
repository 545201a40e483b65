// SPDX-License-Identifier: MPL-2.0
//! Asset path conventions.
//!
//! Assets live at `.../works/<folder>/<file>`. Folder names follow
//! `<order>_<name...>`, for example `01_Brand_Design` becomes order `01`
//! and display name `Brand Design`.

/// Directory segment that holds one sub-folder per work.
pub const WORKS_DIR_NAME: &str = "works";

/// Image file extensions considered by discovery (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "svg"];

/// File name prefix that marks an explicit cover (compared case-insensitively).
pub const COVER_PREFIX: &str = "cover";

/// Folder and file extracted from an asset path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetLocation<'a> {
    pub folder: &'a str,
    pub file: &'a str,
}

/// Splits `.../<works_dir>/<folder>/<file>` into its folder and file.
///
/// Both `/` and `\` are accepted as separators, and the works segment may be
/// the first one. Returns `None` for anything else.
///
/// ```
/// use folio_index::asset_path::parse_asset_path;
///
/// let loc = parse_asset_path("/src/assets/works/01_Logo/cover.svg", "works").unwrap();
/// assert_eq!(loc.folder, "01_Logo");
/// assert_eq!(loc.file, "cover.svg");
/// assert!(parse_asset_path("/src/assets/cover.svg", "works").is_none());
/// ```
#[must_use]
pub fn parse_asset_path<'a>(path: &'a str, works_dir: &str) -> Option<AssetLocation<'a>> {
    let mut segments = path.rsplit(['/', '\\']);
    let file = segments.next()?;
    let folder = segments.next()?;
    let works = segments.next()?;

    if works != works_dir || folder.is_empty() || file.is_empty() {
        return None;
    }

    Some(AssetLocation { folder, file })
}

/// Order token and display name parsed from a work folder name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderName {
    pub order: String,
    pub name: String,
}

/// Parses `<order>_<name...>`; underscores in the name become spaces.
///
/// Without a name part the folder name itself is used as the display name.
#[must_use]
pub fn parse_folder_name(folder: &str) -> FolderName {
    let mut parts = folder.split('_');
    let order = parts.next().unwrap_or_default().to_string();
    let name = parts.collect::<Vec<_>>().join(" ");

    FolderName {
        order,
        name: if name.is_empty() {
            folder.to_string()
        } else {
            name
        },
    }
}

/// Returns the text after the last `.`, if any.
#[must_use]
pub fn extension(file_name: &str) -> Option<&str> {
    file_name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Removes the last extension: `a.b.png` becomes `a.b`, `README` stays as is.
#[must_use]
pub fn strip_extension(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem)
}

#[must_use]
pub fn is_svg(file_name: &str) -> bool {
    extension(file_name).is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

/// Checks the file extension against an allow-list, ignoring case.
#[must_use]
pub fn has_allowed_extension<S: AsRef<str>>(file_name: &str, allowed: &[S]) -> bool {
    extension(file_name).is_some_and(|ext| {
        allowed
            .iter()
            .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(ext))
    })
}

/// Returns true when the file name starts with `prefix`, ignoring case.
#[must_use]
pub fn is_cover_name(file_name: &str, prefix: &str) -> bool {
    file_name.to_lowercase().starts_with(&prefix.to_lowercase())
}
