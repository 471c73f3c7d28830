use std::path::Path;

/// Extension trait for Path to produce the strings shown in status lines.
pub trait PathExt {
    /// Converts a path to a String using display(), which always succeeds
    /// but may use replacement characters for invalid Unicode.
    ///
    /// # Examples
    /// ```
    /// use personalize::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("src-tauri/Cargo.toml");
    /// assert_eq!(path.to_display_string(), "src-tauri/Cargo.toml");
    /// ```
    fn to_display_string(&self) -> String;

    /// Renders the path relative to `root`, falling back to the full path when
    /// it lies outside of it.
    ///
    /// # Examples
    /// ```
    /// use personalize::ext::PathExt;
    /// use std::path::Path;
    ///
    /// let path = Path::new("/work/app/index.html");
    /// assert_eq!(path.relative_to(Path::new("/work/app")), "index.html");
    /// ```
    fn relative_to(&self, root: &Path) -> String;
}

impl PathExt for Path {
    fn to_display_string(&self) -> String {
        self.display().to_string()
    }

    fn relative_to(&self, root: &Path) -> String {
        self.strip_prefix(root).unwrap_or(self).display().to_string()
    }
}
