use crate::domain::a003_product::ui::list::ProductCatalogList;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::projections::p001_product_catalog::validate_references;
use contracts::shared::config::{load_config, CatalogConfig};
use contracts::shared::error::CatalogResult;
use contracts::shared::fixtures::Fixtures;
use leptos::prelude::*;
use thaw::*;

/// Загрузить конфигурацию и фикстуры; в строгом режиме проверить ссылки.
fn boot_catalog() -> CatalogResult<(CatalogConfig, Fixtures)> {
    let config = load_config()?;
    let fixtures = Fixtures::load_default()?;

    if config.catalog.strict_references {
        validate_references(&fixtures)?;
    }

    Ok((config, fixtures))
}

#[component]
fn StartupError(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <PageFrame page_id="app--startup_error" category=PAGE_CAT_SYSTEM>
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">{icon("alert")}</span>
                <span class="warning-box__text">{message}</span>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn App() -> impl IntoView {
    let content = match boot_catalog() {
        Ok((config, fixtures)) => view! {
            <ProductCatalogList title=config.catalog.title fixtures=fixtures />
        }
        .into_any(),
        Err(e) => {
            log::error!("Catalog failed to start: {}", e);
            view! { <StartupError message=e.to_string() /> }.into_any()
        }
    };

    view! {
        <ConfigProvider>
            {content}
        </ConfigProvider>
    }
}
