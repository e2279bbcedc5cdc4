use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use shelf::format::Render;

use eyre::{eyre, Context, Result};
use log::trace;

/// Write a rendered page to `path`, adding the extension of the format when `path` has none.
///
/// An existing file is replaced. Returns the path that was written.
pub fn write_page<R: Render>(path: &Path, page: &str) -> Result<PathBuf> {
    let path = if path.extension().is_some() {
        path.to_owned()
    } else {
        path.with_extension(R::ext())
    };

    trace!("Writing {} page to '{}'", R::name(), path.display());
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .wrap_err_with(|| eyre!("Failed to open the '{}' file for writing.", path.display()))?;

    file.write_all(page.as_bytes())
        .wrap_err_with(|| eyre!("Cannot write page to '{}'", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::write_page;

    use assert_fs::{fixture::PathChild, TempDir};
    use shelf::format::{Html, Text};

    #[test]
    fn extension_of_format_is_added() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let path = write_page::<Html>(dir.child("catalog").path(), "<p></p>").unwrap();

        assert_eq!(Some("html".as_ref()), path.extension());
        assert_eq!("<p></p>", std::fs::read_to_string(&path).unwrap());
    }

    #[test]
    fn existing_extension_is_kept_and_file_replaced() {
        let dir = TempDir::new().expect("Cannot create temp directory for test");
        let child = dir.child("books.out");

        write_page::<Text>(child.path(), "a much longer first page").unwrap();
        let path = write_page::<Text>(child.path(), "second").unwrap();

        assert_eq!(child.path(), path);
        assert_eq!("second", std::fs::read_to_string(&path).unwrap());
    }

    #[test]
    #[should_panic(expected = "Failed to open the")]
    fn missing_directory_is_an_error() {
        write_page::<Text>("does/not/exist/page.txt".as_ref(), "").unwrap();
    }
}
