//! Building blocks for article sections.

use leptos::prelude::*;

/// Callout flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NoteKind {
    #[default]
    Info,
    Tip,
    Warning,
}

impl NoteKind {
    /// CSS class for the callout box.
    pub fn class(self) -> &'static str {
        match self {
            NoteKind::Info => "companion-note companion-note-info",
            NoteKind::Tip => "companion-note companion-note-tip",
            NoteKind::Warning => "companion-note companion-note-warning",
        }
    }

    /// Heading shown above the callout text.
    pub fn label(self) -> &'static str {
        match self {
            NoteKind::Info => "Note",
            NoteKind::Tip => "Tip",
            NoteKind::Warning => "Watch out",
        }
    }
}

/// Article header with title and lead paragraph.
#[component]
pub fn ArticleHeader(
    /// Article title.
    #[prop(into)]
    title: String,
    /// Lead paragraph.
    #[prop(optional, into)]
    lead: Option<String>,
) -> impl IntoView {
    view! {
      <header class="companion-article-header">
        <h1 class="companion-article-title">{title}</h1>
        {lead.map(|lead| view! { <p class="companion-article-lead">{lead}</p> })}
      </header>
    }
}

/// Callout box.
#[component]
pub fn Note(
    #[prop(optional)] kind: NoteKind,
    children: Children,
) -> impl IntoView {
    view! {
      <aside class=kind.class()>
        <strong class="companion-note-label">{kind.label()}</strong>
        <div class="companion-note-body">{children()}</div>
      </aside>
    }
}

/// Prose wrapper for styled article content.
#[component]
pub fn Prose(
    /// Children content.
    children: Children,
) -> impl IntoView {
    view! { <div class="companion-prose">{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_kind_default() {
        assert_eq!(NoteKind::default(), NoteKind::Info);
    }

    #[test]
    fn test_note_kind_classes_distinct() {
        let classes = [NoteKind::Info, NoteKind::Tip, NoteKind::Warning].map(NoteKind::class);
        assert!(classes.iter().all(|c| c.starts_with("companion-note ")));
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
    }

    #[test]
    fn test_note_kind_labels() {
        assert_eq!(NoteKind::Tip.label(), "Tip");
        assert_eq!(NoteKind::Warning.label(), "Watch out");
    }
}
