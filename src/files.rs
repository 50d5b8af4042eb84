//! File and path helpers: extension and URI handling, human-readable
//! sizes, filtered directory listings and file comparators.

use crate::error::{Error, Result};
use crate::natural::natural_cmp;
use compare::Compare;
use log::debug;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

const KILOBYTE: f64 = 1024.0;
const UNITS: [&str; 3] = [" KB", " MB", " GB"];

/// Returns false for URIs with an http(s) or ftp(s) scheme, true for
/// everything else. "Everything else" is assumed local, which is of course
/// not necessarily true.
pub fn is_local(uri: &str) -> bool {
    let uri = uri.to_ascii_lowercase();
    !(uri.starts_with("http") || uri.starts_with("ftp"))
}

/// Gets the extension of a file name, like `.png` or `.jpg`, including the
/// dot. Returns `""` when there is none. Applies the last-dot rule to the
/// whole string, so it also works on URI strings.
pub fn extension(path: &str) -> &str {
    match path.rfind('.') {
        Some(dot) => &path[dot..],
        None => "",
    }
}

/// Extracts the path component of a `file://` URI.
///
/// Any other scheme, or a missing path, is an [`Error::InvalidUri`].
pub fn path_from_file_uri(uri: &str) -> Result<&str> {
    let (scheme, rest) = uri
        .split_once("://")
        .ok_or_else(|| Error::InvalidUri(uri.to_owned()))?;
    if !scheme.eq_ignore_ascii_case("file") || rest.is_empty() {
        return Err(Error::InvalidUri(uri.to_owned()));
    }
    Ok(rest)
}

/// Renders a byte count in human-readable form with binary (1024) steps,
/// e.g. `16 B`, `1.5 KB`, `20 MB`. At most one fractional digit, and a
/// trailing `.0` is dropped.
pub fn readable_file_size(size: u64) -> String {
    let mut value = size as f64;
    let mut unit = 0;
    while value > KILOBYTE && unit < UNITS.len() {
        value /= KILOBYTE;
        unit += 1;
    }
    if unit == 0 {
        return format!("{size} B");
    }
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, UNITS[unit - 1])
    } else {
        format!("{:.1}{}", rounded, UNITS[unit - 1])
    }
}

/// What a [`FileFilter`] lets through.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FileKind {
    File,
    Directory,
}

/// Predicate over directory entries: keeps entries of one kind, optionally
/// including hidden ones. Hidden means a dot-prefixed file name.
#[derive(Copy, Clone, Debug)]
pub struct FileFilter {
    kind: FileKind,
    show_hidden: bool,
}

impl FileFilter {
    pub fn new(kind: FileKind, show_hidden: bool) -> Self {
        Self { kind, show_hidden }
    }

    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub fn set_show_hidden(&mut self, show_hidden: bool) {
        self.show_hidden = show_hidden;
    }

    pub fn accept(&self, path: &Path) -> bool {
        let kind_matches = match self.kind {
            FileKind::File => path.is_file(),
            FileKind::Directory => path.is_dir(),
        };
        kind_matches && (self.show_hidden || !is_hidden(path))
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Compares paths by their final component, case-folded, in natural order.
/// This is the ordering [`file_list`] applies within each group.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileNameComparator;

impl Compare<PathBuf, PathBuf> for FileNameComparator {
    fn compare(&self, u: &PathBuf, v: &PathBuf) -> Ordering {
        natural_cmp(&folded_name(u), &folded_name(v))
    }
}

fn folded_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_lowercase()
}

/// Compares paths by on-disk length. Unreadable metadata counts as length
/// zero rather than failing the comparison.
#[derive(Copy, Clone, Debug, Default)]
pub struct FileSizeComparator;

impl Compare<PathBuf, PathBuf> for FileSizeComparator {
    fn compare(&self, u: &PathBuf, v: &PathBuf) -> Ordering {
        disk_len(u).cmp(&disk_len(v))
    }
}

fn disk_len(path: &Path) -> u64 {
    fs::metadata(path).map(|meta| meta.len()).unwrap_or(0)
}

/// Lists the entries of `path`: directories first, then files, each group
/// sorted naturally by case-folded name. Hidden entries are skipped unless
/// `include_hidden` is set.
pub fn file_list(path: &Path, include_hidden: bool) -> Result<Vec<PathBuf>> {
    let directory_filter = FileFilter::new(FileKind::Directory, include_hidden);
    let file_filter = FileFilter::new(FileKind::File, include_hidden);

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();
        if directory_filter.accept(&entry_path) {
            dirs.push(entry_path);
        } else if file_filter.accept(&entry_path) {
            files.push(entry_path);
        }
    }

    let comparator = FileNameComparator;
    dirs.sort_by(|a, b| comparator.compare(a, b));
    files.sort_by(|a, b| comparator.compare(a, b));
    debug!(
        "listed {} directories and {} files in {}",
        dirs.len(),
        files.len(),
        path.display()
    );

    dirs.extend(files);
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn scratch_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "natural-sort-test-{label}-{}",
            std::process::id()
        ));
        if dir.exists() {
            fs::remove_dir_all(&dir).unwrap();
        }
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_is_local() {
        assert!(!is_local("http://example.com/x"));
        assert!(!is_local("HTTPS://example.com/x"));
        assert!(!is_local("ftp://example.com/x"));
        assert!(!is_local("ftps://example.com/x"));
        assert!(is_local("file:///tmp/x"));
        assert!(is_local("/tmp/x"));
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("photo.png"), ".png");
        assert_eq!(extension("archive.tar.gz"), ".gz");
        assert_eq!(extension("Makefile"), "");
        assert_eq!(extension("http://host/img.jpg"), ".jpg");
    }

    #[test]
    fn test_path_from_file_uri() {
        assert_eq!(path_from_file_uri("file:///tmp/x").unwrap(), "/tmp/x");
        assert_eq!(path_from_file_uri("FILE:///tmp/x").unwrap(), "/tmp/x");
        assert!(path_from_file_uri("http://host/x").is_err());
        assert!(path_from_file_uri("/tmp/x").is_err());
        assert!(path_from_file_uri("file://").is_err());
    }

    #[test]
    fn test_readable_file_size() {
        assert_eq!(readable_file_size(0), "0 B");
        assert_eq!(readable_file_size(16), "16 B");
        assert_eq!(readable_file_size(1024), "1024 B");
        assert_eq!(readable_file_size(2048), "2 KB");
        assert_eq!(readable_file_size(1536), "1.5 KB");
        assert_eq!(readable_file_size(20 * 1024 * 1024), "20 MB");
        assert_eq!(readable_file_size(3 * 1024 * 1024 * 1024), "3 GB");
        // Beyond GB the unit saturates.
        assert_eq!(readable_file_size(5 * 1024 * 1024 * 1024 * 1024), "5120 GB");
    }

    #[test]
    fn test_file_filter() {
        let dir = scratch_dir("filter");
        let visible = dir.join("a.txt");
        let hidden = dir.join(".hidden.txt");
        File::create(&visible).unwrap();
        File::create(&hidden).unwrap();

        let files = FileFilter::new(FileKind::File, false);
        assert!(files.accept(&visible));
        assert!(!files.accept(&hidden));
        assert!(!files.accept(&dir));

        let mut files = files;
        files.set_show_hidden(true);
        assert!(files.show_hidden());
        assert!(files.accept(&hidden));

        let dirs = FileFilter::new(FileKind::Directory, false);
        assert!(dirs.accept(&dir));
        assert!(!dirs.accept(&visible));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_name_comparator_is_natural_and_case_folded() {
        let cmp = FileNameComparator;
        assert_eq!(
            cmp.compare(&PathBuf::from("/x/item9"), &PathBuf::from("/y/item10")),
            Ordering::Less
        );
        assert_eq!(
            cmp.compare(&PathBuf::from("Alice"), &PathBuf::from("alice")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_file_size_comparator() {
        let dir = scratch_dir("sizes");
        let small = dir.join("small");
        let large = dir.join("large");
        fs::write(&small, b"ab").unwrap();
        fs::write(&large, vec![0u8; 4096]).unwrap();

        let cmp = FileSizeComparator;
        assert_eq!(cmp.compare(&small, &large), Ordering::Less);
        assert_eq!(cmp.compare(&large, &small), Ordering::Greater);
        assert_eq!(cmp.compare(&small, &small), Ordering::Equal);
        // Missing files count as zero-length.
        assert_eq!(
            cmp.compare(&dir.join("missing"), &small),
            Ordering::Less
        );

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_file_list_groups_and_orders() {
        let dir = scratch_dir("listing");
        fs::create_dir(dir.join("sub10")).unwrap();
        fs::create_dir(dir.join("sub2")).unwrap();
        File::create(dir.join("item10.txt")).unwrap();
        File::create(dir.join("item2.txt")).unwrap();
        File::create(dir.join(".hidden")).unwrap();

        let names = |list: Vec<PathBuf>| -> Vec<String> {
            list.into_iter()
                .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
                .collect()
        };

        let listed = names(file_list(&dir, false).unwrap());
        assert_eq!(listed, vec!["sub2", "sub10", "item2.txt", "item10.txt"]);

        let listed = names(file_list(&dir, true).unwrap());
        assert_eq!(
            listed,
            vec!["sub2", "sub10", ".hidden", "item2.txt", "item10.txt"]
        );

        assert!(file_list(&dir.join("does-not-exist"), false).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
