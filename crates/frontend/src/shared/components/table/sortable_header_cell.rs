//! Ячейка заголовка таблицы с иконкой сортировки
//!
//! Иконка только отображается: клик по ней не меняет порядок строк.
//!
//! ```rust,ignore
//! <SortableHeaderCell label="Product" direction=SortDirection::Descending />
//! ```

use leptos::prelude::*;

/// Вид иконки сортировки (классы Font Awesome)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Unsorted,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn icon_class(&self) -> &'static str {
        match self {
            SortDirection::Unsorted => "fas fa-sort",
            SortDirection::Ascending => "fas fa-sort-up",
            SortDirection::Descending => "fas fa-sort-down",
        }
    }
}

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Какую иконку показать
    #[prop(optional, default = SortDirection::Unsorted)]
    direction: SortDirection,
) -> impl IntoView {
    view! {
        <th class="table__header-cell">
            <span class="table__sortable-header">
                {label}
                <a href="#/" on:click=|ev| ev.prevent_default()>
                    <span class="icon">
                        <i data-cy="SortIcon" class={direction.icon_class()}></i>
                    </span>
                </a>
            </span>
        </th>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classes() {
        assert_eq!(SortDirection::Unsorted.icon_class(), "fas fa-sort");
        assert_eq!(SortDirection::Ascending.icon_class(), "fas fa-sort-up");
        assert_eq!(SortDirection::Descending.icon_class(), "fas fa-sort-down");
    }
}
