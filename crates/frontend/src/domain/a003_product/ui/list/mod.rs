mod state;

use crate::shared::components::table::{SortDirection, SortableHeaderCell};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_user::aggregate::User;
use contracts::domain::a002_category::aggregate::Category;
use contracts::projections::p001_product_catalog::{
    join_products, visible_products, EnrichedProduct, FilterState,
};
use contracts::shared::fixtures::Fixtures;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use state::{apply, create_state};
use thaw::*;

/// Текст ячейки, если связь не найдена
const MISSING: &str = "-";

fn all_users_class(any_user_active: bool) -> &'static str {
    if any_user_active {
        "filter-tabs__item"
    } else {
        "filter-tabs__item is-active"
    }
}

fn user_tab_class(is_active: bool) -> &'static str {
    if is_active {
        "filter-tabs__item is-active"
    } else {
        "filter-tabs__item"
    }
}

fn all_categories_class(any_category_selected: bool) -> &'static str {
    if any_category_selected {
        "button is-success mr-6 is-outlined"
    } else {
        "button is-success mr-6"
    }
}

fn category_button_class(is_selected: bool) -> &'static str {
    if is_selected {
        "button mr-2 my-1 is-info"
    } else {
        "button mr-2 my-1"
    }
}

fn user_cell_class(product: &EnrichedProduct) -> &'static str {
    if product.is_owned_by_female() {
        "table__cell has-text-link has-text-danger"
    } else {
        "table__cell has-text-link"
    }
}

#[component]
fn CatalogHeader(
    #[prop(into)] title: String,
    #[prop(into)] visible_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                {icon("products")}
                <h1 class="page__title">{title}</h1>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    <span>{move || visible_count.get().to_string()}</span>
                </Badge>
            </div>
        </div>
    }
}

#[component]
fn UserFilterTabs(users: Vec<User>, state: RwSignal<FilterState>) -> impl IntoView {
    let tabs = users
        .into_iter()
        .map(|user| {
            let name_for_class = user.name.clone();
            let name_for_click = user.name.clone();
            view! {
                <a
                    data-cy="FilterUser"
                    href="#/"
                    class=move || user_tab_class(state.with(|s| s.is_user_active(&name_for_class)))
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        let name = name_for_click.clone();
                        apply(state, move |s| s.set_user(name));
                    }
                >
                    {user.name}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <p class="filter-tabs">
            <a
                data-cy="FilterAllUsers"
                href="#/"
                class=move || all_users_class(state.with(|s| !s.active_user.is_empty()))
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    apply(state, |s| s.set_user(""));
                }
            >
                "All"
            </a>
            {tabs}
        </p>
    }
}

#[component]
fn CategoryFilterButtons(categories: Vec<Category>, state: RwSignal<FilterState>) -> impl IntoView {
    let buttons = categories
        .into_iter()
        .map(|category| {
            let title_for_class = category.title.clone();
            let title_for_click = category.title.clone();
            view! {
                <a
                    data-cy="Category"
                    href="#/"
                    class=move || category_button_class(state.with(|s| s.is_category_active(&title_for_class)))
                    on:click=move |ev: MouseEvent| {
                        ev.prevent_default();
                        let title = title_for_click.clone();
                        apply(state, move |s| s.set_category(title));
                    }
                >
                    {category.title}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="filter-panel__block filter-panel__block--wrap">
            <a
                data-cy="AllCategories"
                href="#/"
                class=move || all_categories_class(state.with(|s| !s.selected_category.is_empty()))
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    apply(state, |s| s.set_category(""));
                }
            >
                "All"
            </a>
            {buttons}
        </div>
    }
}

#[component]
fn ProductRow(product: EnrichedProduct, #[prop(into)] query: String) -> impl IntoView {
    let user_class = user_cell_class(&product);
    let category = product
        .category_label()
        .unwrap_or_else(|| MISSING.to_string());
    let user = product.user_name().unwrap_or(MISSING).to_string();

    view! {
        <tr data-cy="Product" class="table__row">
            <td class="table__cell has-text-weight-bold" data-cy="ProductId">
                {product.id.to_string()}
            </td>
            <td class="table__cell" data-cy="ProductName">
                {highlight_matches(&product.name, &query)}
            </td>
            <td class="table__cell" data-cy="ProductCategory">{category}</td>
            <td class=user_class data-cy="ProductUser">{user}</td>
        </tr>
    }
}

#[component]
fn ProductTable(
    #[prop(into)] products: Signal<Vec<EnrichedProduct>>,
    #[prop(into)] query: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="table table-container">
            <table data-cy="ProductTable" class="table__data table--striped">
                {move || {
                    if products.with(|p| p.is_empty()) {
                        view! {
                            <p data-cy="NoMatchingMessage" class="table__empty">
                                "No products matching selected criteria"
                            </p>
                        }
                        .into_any()
                    } else {
                        view! {
                            <thead class="table__head">
                                <tr>
                                    <SortableHeaderCell label="ID" />
                                    <SortableHeaderCell label="Product" direction=SortDirection::Descending />
                                    <SortableHeaderCell label="Category" direction=SortDirection::Ascending />
                                    <SortableHeaderCell label="User" />
                                </tr>
                            </thead>
                        }
                        .into_any()
                    }
                }}
                <tbody>
                    {move || {
                        let q = query.get();
                        products
                            .get()
                            .into_iter()
                            .map(|product| view! { <ProductRow product=product query=q.clone() /> })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

/// Страница каталога: фильтры по владельцу, категории и поиску над таблицей товаров.
#[component]
pub fn ProductCatalogList(
    /// Заголовок страницы
    #[prop(into)]
    title: String,
    /// Исходные коллекции; не меняются за время жизни страницы
    fixtures: Fixtures,
) -> impl IntoView {
    let state = create_state();

    let users = fixtures.users.clone();
    let categories = fixtures.categories.clone();
    let fixtures = StoredValue::new(fixtures);

    // Соединение и фильтрация пересчитываются целиком на каждое изменение состояния
    let visible = Signal::derive(move || {
        let all = fixtures.with_value(join_products);
        state.with(|st| visible_products(&all, st))
    });

    let query = Signal::derive(move || state.with(|s| s.query.clone()));

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <CatalogHeader
                title=title
                visible_count=Signal::derive(move || visible.with(|v| v.len()))
            />

            <nav class="filter-panel">
                <div class="filter-panel-header">
                    <div class="filter-panel-header__left">
                        {icon("filter")}
                        <span class="filter-panel__title">"Filters"</span>
                        {move || {
                            let count = state.with(|s| s.active_filters_count());
                            if count > 0 {
                                view! { <span class="badge badge--primary">{count}</span> }.into_any()
                            } else {
                                view! { <></> }.into_any()
                            }
                        }}
                    </div>
                </div>

                <div class="filter-panel-content">
                    <UserFilterTabs users=users state=state />

                    <div class="filter-panel__block">
                        <SearchInput
                            value=query
                            on_change=Callback::new(move |text: String| {
                                apply(state, move |s| s.set_query(text));
                            })
                            on_clear=Callback::new(move |_| apply(state, FilterState::clear_query))
                        />
                    </div>

                    <CategoryFilterButtons categories=categories state=state />

                    <div class="filter-panel__block">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            attr:data-cy="ResetAllButton"
                            attr:style="width: 100%;"
                            on_click=move |_| apply(state, FilterState::reset_all)
                        >
                            "Reset all filters"
                        </Button>
                    </div>
                </div>
            </nav>

            <div class="page__content">
                <ProductTable products=visible query=query />
            </div>
        </PageFrame>
    }
}
