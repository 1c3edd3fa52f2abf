/// Утилиты для списков: подсветка совпадений и поле поиска
use leptos::prelude::*;

/// Разбить текст на куски по вхождениям запроса (без учёта регистра).
///
/// Второй элемент пары — признак совпадения. Как и фильтр строк, сначала
/// ищет в нижнем регистре, затем в верхнем. Если смена регистра меняет
/// байтовые смещения, текст возвращается целиком без подсветки.
pub fn split_matches(text: &str, query: &str) -> Vec<(String, bool)> {
    let query = query.trim();

    if query.is_empty() {
        return vec![(text.to_string(), false)];
    }

    split_by_case(text, &text.to_lowercase(), &query.to_lowercase())
        .or_else(|| split_by_case(text, &text.to_uppercase(), &query.to_uppercase()))
        .unwrap_or_else(|| vec![(text.to_string(), false)])
}

/// `folded` — текст в одном регистре; `None`, если совпадений нет или
/// смещения в `folded` не переносятся на `text`.
fn split_by_case(text: &str, folded: &str, needle: &str) -> Option<Vec<(String, bool)>> {
    if folded.len() != text.len() || !folded.contains(needle) {
        return None;
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = folded[last_pos..].find(needle) {
        let start = last_pos + pos;
        let end = start + needle.len();

        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return None;
        }

        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }

    Some(parts)
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let parts = split_matches(text, query)
        .into_iter()
        .map(|(chunk, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{chunk}</mark> }.into_any()
            } else {
                view! { <span>{chunk}</span> }.into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки.
///
/// Каждое нажатие клавиши сразу уходит в `on_change`. Кнопка очистки
/// появляется только при непустом значении.
#[component]
pub fn SearchInput(
    /// Текущее значение запроса
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения
    #[prop(into)]
    on_change: Callback<String>,
    /// Callback для кнопки очистки
    #[prop(into)]
    on_clear: Callback<()>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                data-cy="SearchField"
                type="text"
                class="search-input__field"
                placeholder=placeholder
                class:search-input__field--active=move || !value.get().trim().is_empty()
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button
                        data-cy="ClearButton"
                        type="button"
                        class="search-input__clear"
                        title="Clear"
                        on:click=move |_| on_clear.run(())
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
