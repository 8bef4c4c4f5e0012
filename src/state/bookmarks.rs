//! Bookmark management on the display state.

use crate::error::BookmarkError;
use crate::model::Bookmark;
use crate::state::DisplayState;

impl DisplayState {
    /// Save the current view window as a bookmark.
    pub fn create_bookmark(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<&Bookmark, BookmarkError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(BookmarkError::MissingName);
        }
        let range = self.view_range;
        if range.start >= range.stop {
            return Err(BookmarkError::InvalidRange {
                start: range.start,
                stop: range.stop,
            });
        }

        self.bookmarks
            .push(Bookmark::new(name, description.trim(), range.start, range.stop));
        log::info!("Bookmark '{}' created at {}..{}", name, range.start, range.stop);
        Ok(&self.bookmarks[self.bookmarks.len() - 1])
    }

    /// Jump to a bookmark: the view window becomes the bookmarked range.
    pub fn select_bookmark(&mut self, index: usize) -> Result<&Bookmark, BookmarkError> {
        let bookmark = self
            .bookmarks
            .get(index)
            .ok_or(BookmarkError::NotFound { index })?;
        self.view_range = crate::state::ViewRange::new(bookmark.start, bookmark.stop);
        log::debug!("Jumped to bookmark '{}'", bookmark.name);
        Ok(bookmark)
    }

    /// Delete a bookmark.
    pub fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark, BookmarkError> {
        if index >= self.bookmarks.len() {
            return Err(BookmarkError::NotFound { index });
        }
        let removed = self.bookmarks.remove(index);
        log::info!("Bookmark '{}' removed", removed.name);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::BookmarkError;
    use crate::state::{DisplayState, ViewRange};

    #[test]
    fn test_create_bookmark_captures_range() {
        let mut display = DisplayState::default();
        display.set_view_range(1000, 5000);

        let bookmark = display.create_bookmark("  operon  ", " nif cluster ").unwrap();
        assert_eq!(bookmark.name, "operon");
        assert_eq!(bookmark.description, "nif cluster");
        assert_eq!((bookmark.start, bookmark.stop), (1000, 5000));
        assert_eq!(display.bookmarks.len(), 1);
    }

    #[test]
    fn test_create_bookmark_without_name() {
        let mut display = DisplayState::default();
        assert_eq!(
            display.create_bookmark("   ", "desc"),
            Err(BookmarkError::MissingName)
        );
        assert!(display.bookmarks.is_empty());
    }

    #[test]
    fn test_create_bookmark_empty_range() {
        let mut display = DisplayState::default();
        display.set_view_range(10, 10);
        assert_eq!(
            display.create_bookmark("x", ""),
            Err(BookmarkError::InvalidRange { start: 10, stop: 10 })
        );
    }

    #[test]
    fn test_select_and_remove() {
        let mut display = DisplayState::default();
        display.set_view_range(100, 200);
        display.create_bookmark("first", "").unwrap();
        display.set_view_range(300, 900);

        let selected = display.select_bookmark(0).unwrap().clone();
        assert_eq!(selected.name, "first");
        assert_eq!(display.view_range, ViewRange::new(100, 200));

        assert_eq!(
            display.select_bookmark(4),
            Err(BookmarkError::NotFound { index: 4 })
        );
        assert_eq!(display.remove_bookmark(0).unwrap().name, "first");
        assert!(display.remove_bookmark(0).is_err());
    }
}
