//! Sample posts loaded into a fresh repository

use crate::domain::{Author, Post, PostId};
use chrono::{DateTime, TimeZone, Utc};

const SAMPLE_AUTHOR: &str = "Azeez Adams";

const RESPONSIVENESS: &str = "A truly responsive website behaves differently on desktop, tablet, and mobile.

A website may look perfect on desktop yet fail completely on mobile. True responsiveness is revealed through testing across multiple screen sizes.

On desktop, layouts often appear polished. On tablets, spacing issues emerge. On mobile, navigation and content hierarchy are frequently exposed as weak.

A responsive website:

Reorders content intelligently

Adjusts spacing and typography

Optimizes touch targets

Preserves hierarchy across breakpoints

Responsive design is not about resizing, it's about redesigning thoughtfully for each context.";

const ACCESSIBILITY: &str = "Accessibility begins with HTML, not JavaScript or ARIA attributes.

Semantic HTML plays a major role in web accessibility. Assistive technologies rely on meaningful markup to guide users through content.

It communicates meaning to assistive technologies such as screen readers and keyboard navigation tools. Using proper elements ensures content is usable by people with disabilities.

Accessible markup:

Improves SEO

Enhances usability for all users

Reduces legal and compliance risks

Encourages cleaner architecture

Replacing clickable <div> elements with proper <button> or <a> elements is a small change with massive impact.

Accessibility is not a feature, it's a standard.";

const LAYOUT: &str = "Flexbox and CSS Grid are often compared, but they solve different problems.

Flexbox is one-dimensional. It excels at aligning items along a single axis, perfect for navigation bars, buttons, cards, and UI components.

CSS Grid is two-dimensional. It is designed for overall page layouts, complex grids, dashboards, and responsive sections that require row and column control.

Experienced developers don't choose one exclusively. They combine both strategically:

Grid defines the macro layout

Flexbox fine-tunes the micro layout

Flexbox is ideal for one-dimensional layouts like navigation bars, cards, and form controls.

CSS Grid excels at two-dimensional layouts such as page structures, dashboards, and galleries.

Using the right tool results in cleaner markup, simpler CSS, and layouts that adapt naturally.";

fn published() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 6, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The posts a new session starts with.
pub fn sample_posts() -> Vec<Post> {
    [
        (
            "post-1",
            "A Critique of a Website's Responsiveness: Analyzing Layout Across Three Screen Sizes",
            RESPONSIVENESS,
        ),
        (
            "post-2",
            "Accessibility in Markup: How Semantic HTML Helps Create Inclusive Websites",
            ACCESSIBILITY,
        ),
        (
            "post-3",
            "Flexbox vs. Grid: Choosing the Right CSS Layout Tool for the Job",
            LAYOUT,
        ),
    ]
    .into_iter()
    .map(|(id, title, content)| {
        Post::new(
            PostId::new(id),
            title,
            content,
            Author::new(SAMPLE_AUTHOR),
            published(),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_posts() {
        let posts = sample_posts();
        assert_eq!(posts.len(), 3);
        for post in &posts {
            assert_eq!(post.author().name(), SAMPLE_AUTHOR);
            assert_eq!(post.date().format("%Y-%m-%d").to_string(), "2026-02-06");
            assert!(post.excerpt().ends_with("..."));
            assert_eq!(post.reading_time(), 1);
        }
    }

    #[test]
    fn test_sample_ids_are_stable() {
        let ids: Vec<String> = sample_posts()
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        assert_eq!(ids, vec!["post-1", "post-2", "post-3"]);
    }
}
