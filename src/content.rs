// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The vertex-content rendering capability.
//!
//! The engine never looks inside vertex content; it asks a [`ContentRenderer`]
//! how big the content would like to be, and later asks for text lines that
//! fit the interior the box actually received. Implementations are bound
//! generically, so a layout run is monomorphic over its content type.

use crate::geometry::Dimension;

pub trait ContentRenderer<C> {
    /// Preferred interior size (rows × char columns) of `content`, before the
    /// box border is added.
    fn preferred_size(&self, content: &C) -> Dimension;

    /// Text lines for `content` fitted into `available` interior cells.
    ///
    /// At most `available.height()` lines, each at most `available.width()`
    /// chars; the rasterizer places them verbatim inside the box border.
    fn render(&self, content: &C, available: Dimension) -> Vec<String>;
}

/// Renders string-like content line by line, truncating with an ellipsis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainTextRenderer;

impl<C: AsRef<str>> ContentRenderer<C> for PlainTextRenderer {
    fn preferred_size(&self, content: &C) -> Dimension {
        let text = content.as_ref();
        let mut height = 0i32;
        let mut width = 0i32;
        for line in text.lines() {
            height += 1;
            width = width.max(text_len(line) as i32);
        }

        Dimension::new(height.max(1), width)
    }

    fn render(&self, content: &C, available: Dimension) -> Vec<String> {
        if available.height() <= 0 || available.width() < 0 {
            return Vec::new();
        }

        content
            .as_ref()
            .lines()
            .take(available.height() as usize)
            .map(|line| truncate_with_ellipsis(line, available.width() as usize))
            .collect()
    }
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out: String = text.chars().take(max_len - 1).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::{text_len, truncate_with_ellipsis, ContentRenderer, PlainTextRenderer};
    use crate::geometry::Dimension;

    #[test]
    fn preferred_size_counts_lines_and_widest_line_in_chars() {
        let renderer = PlainTextRenderer;

        assert_eq!(renderer.preferred_size(&"cache"), Dimension::new(1, 5));
        assert_eq!(renderer.preferred_size(&"read\nwriter"), Dimension::new(2, 6));
        assert_eq!(renderer.preferred_size(&"αβγ"), Dimension::new(1, 3));
    }

    #[test]
    fn preferred_size_of_empty_content_is_one_empty_line() {
        assert_eq!(PlainTextRenderer.preferred_size(&""), Dimension::new(1, 0));
    }

    #[test]
    fn render_fits_lines_into_the_available_interior() {
        let renderer = PlainTextRenderer;

        assert_eq!(
            renderer.render(&"one\ntwo\nthree", Dimension::new(2, 5)),
            vec!["one".to_owned(), "two".to_owned()]
        );
        assert_eq!(renderer.render(&"abcdef", Dimension::new(1, 4)), vec!["abc…".to_owned()]);
        assert_eq!(renderer.render(&"abc", Dimension::new(0, 4)), Vec::<String>::new());
    }

    #[test]
    fn truncate_with_ellipsis_handles_small_widths() {
        assert_eq!(truncate_with_ellipsis("hello", 0), "");
        assert_eq!(truncate_with_ellipsis("hello", 1), "…");
        assert_eq!(truncate_with_ellipsis("h", 1), "h");
        assert_eq!(truncate_with_ellipsis("hello", 2), "h…");
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn truncate_with_ellipsis_counts_chars_not_bytes() {
        assert_eq!(text_len("αβγ"), 3);
        assert_eq!(truncate_with_ellipsis("αβγ", 2), "α…");
    }
}
