//! What a resource list renders: an empty state or one card per item.

/// Rendered content of a list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<C> {
    Empty {
        title: &'static str,
        hint: &'static str,
    },
    Cards(Vec<C>),
}

impl<C> ListView<C> {
    /// Map `items` to cards, or the empty state when there are none.
    pub fn build<T>(
        items: &[T],
        empty_title: &'static str,
        empty_hint: &'static str,
        card: impl FnMut(&T) -> C,
    ) -> Self {
        if items.is_empty() {
            Self::Empty {
                title: empty_title,
                hint: empty_hint,
            }
        } else {
            Self::Cards(items.iter().map(card).collect())
        }
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::Cards(cards) => cards.len(),
        }
    }
}
